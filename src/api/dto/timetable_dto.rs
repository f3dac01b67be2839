//! 课表 DTO
//!
//! 定义课表相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::slot::{SessionOccurrence, SlotToken};
use crate::models::timetable::{Assembly, Timetable, Warning};

/// 由原始行生成课表的请求
///
/// 接受 `{ "rows": [...] }` 或直接传数组。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenerateTimetableRequest {
    Wrapped { rows: Vec<Value> },
    Bare(Vec<Value>),
}

impl GenerateTimetableRequest {
    pub fn into_rows(self) -> Vec<Value> {
        match self {
            Self::Wrapped { rows } | Self::Bare(rows) => rows,
        }
    }
}

/// 课表响应
///
/// 警告只是提示信息，非空时状态码仍为 200。
#[derive(Debug, Serialize, Deserialize)]
pub struct TimetableResponse {
    /// 按星期分组的课表
    pub timetable: Timetable,
    /// 解析警告
    pub warnings: Vec<Warning>,
}

impl From<Assembly> for TimetableResponse {
    fn from(assembly: Assembly) -> Self {
        Self {
            timetable: assembly.timetable,
            warnings: assembly.warnings,
        }
    }
}

/// 时段查询响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SlotLookupResponse {
    /// 时段代码
    pub slot: SlotToken,
    /// 每周安排
    pub sessions: Vec<SessionOccurrence>,
}
