//! 课表模型
//!
//! 解析后的课表条目、按星期分组的课表以及解析警告。

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::models::slot::{SlotToken, TimeOfDay, Weekday};

/// 课表中的一次已排定课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub course_code: String,
    pub course_name: String,
    pub venue: String,
    pub slot: SlotToken,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(rename = "type")]
    pub class_type: String,
}

/// 按星期分组的课表
///
/// 始终包含全部七天，每天的条目按开始时间升序排列。
/// 反序列化时缺失的星期会补为空列表。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TimetableHelper")]
pub struct Timetable {
    days: BTreeMap<Weekday, Vec<TimetableEntry>>,
}

type TimetableHelper = BTreeMap<Weekday, Vec<TimetableEntry>>;

impl From<TimetableHelper> for Timetable {
    fn from(helper: TimetableHelper) -> Self {
        let mut timetable = Timetable::new();
        for (day, entries) in helper {
            timetable.days.insert(day, entries);
        }
        timetable
    }
}

impl Serialize for Timetable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.days.serialize(serializer)
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

impl Timetable {
    /// 创建七天均为空的课表
    pub fn new() -> Self {
        Self {
            days: Weekday::ALL.into_iter().map(|day| (day, Vec::new())).collect(),
        }
    }

    /// 某一天的条目
    pub fn day(&self, day: Weekday) -> &[TimetableEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// 追加到某一天末尾（不排序）
    pub fn push(&mut self, day: Weekday, entry: TimetableEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// 对每一天按开始时间做稳定排序
    pub fn sort_by_start(&mut self) {
        for entries in self.days.values_mut() {
            entries.sort_by_key(|entry| entry.start.minutes_since_midnight());
        }
    }

    /// 按星期顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[TimetableEntry])> {
        self.days.iter().map(|(day, entries)| (*day, entries.as_slice()))
    }

    /// 每天的条目数量
    pub fn day_counts(&self) -> BTreeMap<Weekday, usize> {
        self.days
            .iter()
            .map(|(day, entries)| (*day, entries.len()))
            .collect()
    }

    /// 条目总数
    pub fn total_entries(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }
}

/// 警告类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// 时段表中不存在该时段代码
    MissingSlot,
    /// 时段表中的星期无法识别
    UnknownDay,
}

/// 解析过程中的非致命问题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub slot: SlotToken,
    /// 课程代码
    pub course: String,
    /// 无法识别的星期原文（仅 `unknown_day`）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

impl Warning {
    pub fn missing_slot(slot: SlotToken, course: &str) -> Self {
        Self {
            kind: WarningKind::MissingSlot,
            slot,
            course: course.to_string(),
            day: None,
        }
    }

    pub fn unknown_day(slot: SlotToken, course: &str, day: &str) -> Self {
        Self {
            kind: WarningKind::UnknownDay,
            slot,
            course: course.to_string(),
            day: Some(day.to_string()),
        }
    }
}

/// 引擎的唯一输出：课表与警告列表
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assembly {
    pub timetable: Timetable,
    pub warnings: Vec<Warning>,
}
