//! 时段解析与课表组装引擎
//!
//! 纯同步计算：不做 I/O，不持有锁，除只读参考数据外不共享任何状态。
//! 数据流：原始行 → 规范化 → 切分 → 解析 → 组装 → 课表 + 警告。

pub mod assembler;
pub mod normalizer;
pub mod resolver;
pub mod tokenizer;
pub mod venue;

pub use assembler::assemble;
pub use normalizer::normalize;
pub use resolver::{Resolution, ResolvedEntry, resolve};
pub use tokenizer::tokenize;
pub use venue::{extract_venue, fill_missing_venue};

use serde_json::Value;

use crate::models::course::{RawExtractedRow, RowError};
use crate::models::timetable::Assembly;
use crate::reference::ReferenceData;

/// 从原始 JSON 行生成课表
///
/// 任一行不是对象时整批失败；其他数据缺陷只会变成警告。
/// 教室为空的行会先尝试从时段字符串中补全教室。
pub fn build_timetable(rows: Vec<Value>, reference: &ReferenceData) -> Result<Assembly, RowError> {
    let courses = rows
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let mut row = RawExtractedRow::from_value(index, value)?;
            fill_missing_venue(&mut row);
            Ok(normalize(&row, &reference.names))
        })
        .collect::<Result<Vec<_>, RowError>>()?;

    Ok(assemble(&courses, &reference.slots))
}
