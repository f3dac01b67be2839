//! 时段模型
//!
//! 时段代码、星期、时刻以及时段表中的单次课程安排。

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// 时段代码
///
/// 区分大小写的不透明标识符。`TA1` 与 `TAA1` 是两个不同的时段，
/// 比较时只做精确匹配，不做任何规范化或纠错。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotToken(String);

impl SlotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SlotToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SlotToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for SlotToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Display for SlotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 星期
///
/// 顺序即课表中各天的输出顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// 全部七天
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 按英文全称精确匹配，未识别时返回 `None`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 时刻解析错误
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("无效时刻 '{0}'，应为 HH:MM")]
pub struct InvalidTimeOfDay(pub String);

/// 一天中的时刻（`HH:MM`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeOfDay> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeOfDay(format!("{}:{}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// 自午夜起的分钟数，用作排序键
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTimeOfDay(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let valid_part = |part: &str, max_len: usize| {
            !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !valid_part(hour, 2) || minute.len() != 2 || !valid_part(minute, 2) {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InvalidTimeOfDay;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// 时段表中的一次每周课程安排
///
/// `day` 保留参考数据中的原始字符串，由解析器判断是否为可识别的星期。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOccurrence {
    /// 星期（原始文本）
    pub day: String,
    /// 开始时刻
    pub start: TimeOfDay,
    /// 结束时刻
    pub end: TimeOfDay,
    /// 课程类型（如 Theory、Lab）
    #[serde(rename = "type", default)]
    pub class_type: String,
}

impl SessionOccurrence {
    /// 可识别的星期，未识别时返回 `None`
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_name(&self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_parse() {
        let t: TimeOfDay = "09:50".parse().unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 50);
        assert_eq!(t.minutes_since_midnight(), 590);

        let single_digit: TimeOfDay = "8:00".parse().unwrap();
        assert_eq!(single_digit.to_string(), "08:00");
    }

    #[test]
    fn test_time_of_day_rejects_garbage() {
        for raw in ["", "9", "24:00", "12:60", "ab:cd", "12:5", "123:00", "-1:00"] {
            assert!(raw.parse::<TimeOfDay>().is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_time_of_day_serde() {
        let t: TimeOfDay = serde_json::from_str("\"14:00\"").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:00\"");
        assert!(serde_json::from_str::<TimeOfDay>("\"noon\"").is_err());
    }

    #[test]
    fn test_weekday_from_name_is_exact() {
        assert_eq!(Weekday::from_name("Monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name("Sunday"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_name("monday"), None);
        assert_eq!(Weekday::from_name("Mon"), None);
        assert_eq!(Weekday::from_name("Funday"), None);
    }

    #[test]
    fn test_weekday_order() {
        let mut days = vec![Weekday::Sunday, Weekday::Monday, Weekday::Friday];
        days.sort();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Friday, Weekday::Sunday]);
    }

    #[test]
    fn test_slot_token_is_case_sensitive() {
        assert_ne!(SlotToken::from("ta1"), SlotToken::from("TA1"));
        assert_ne!(SlotToken::from("TA1"), SlotToken::from("TAA1"));
        assert_eq!(SlotToken::from("TAA1").as_str(), "TAA1");
    }

    #[test]
    fn test_session_occurrence_deserialize() {
        let json = r#"{"day":"Tuesday","start":"10:00","end":"10:50","type":"Lab"}"#;
        let occurrence: SessionOccurrence = serde_json::from_str(json).unwrap();
        assert_eq!(occurrence.weekday(), Some(Weekday::Tuesday));
        assert_eq!(occurrence.class_type, "Lab");
        assert_eq!(occurrence.end.to_string(), "10:50");
    }
}
