//! 课程模型
//!
//! 识别服务返回的原始行，以及规范化后的课程记录。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::slot::SlotToken;

/// 原始行结构错误
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// 行不是 JSON 对象
    #[error("第 {index} 行不是对象: {found}")]
    NotAnObject { index: usize, found: String },

    /// 对象无法转换为行
    #[error("第 {index} 行无法解析: {message}")]
    Malformed { index: usize, message: String },
}

/// 识别服务提取出的一行课表
///
/// 所有字段都可能缺失或为空；数字、布尔等标量会被转成字符串，`null` 视为缺失。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawExtractedRow {
    #[serde(deserialize_with = "lenient_string")]
    pub course_code: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub course_name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub class_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub venue: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub slot_string: Option<String>,
}

impl RawExtractedRow {
    /// 从任意 JSON 值构建
    ///
    /// 只有非对象值会失败，对象内部的任何缺陷都会被容忍。
    pub fn from_value(index: usize, value: Value) -> Result<Self, RowError> {
        match value {
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| RowError::Malformed {
                    index,
                    message: e.to_string(),
                })
            }
            other => Err(RowError::NotAnObject {
                index,
                found: json_kind(&other).to_string(),
            }),
        }
    }

    pub fn course_code(&self) -> &str {
        self.course_code.as_deref().unwrap_or_default()
    }

    pub fn slot_string(&self) -> &str {
        self.slot_string.as_deref().unwrap_or_default()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// 规范化后的课程记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// 课程代码
    pub course_code: String,
    /// 课程名称（已按回退顺序解析）
    pub course_name: String,
    /// 课程类型
    #[serde(rename = "type")]
    pub class_type: String,
    /// 教室
    pub venue: String,
    /// 原始时段字符串
    pub raw_slot_string: String,
    /// 按原顺序切分的时段代码
    pub slots: Vec<SlotToken>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_full_row() {
        let row = RawExtractedRow::from_value(
            0,
            json!({
                "courseCode": "CSE101",
                "courseName": "Programming",
                "type": "TH",
                "venue": "SJT101",
                "slotString": "A1+TA1"
            }),
        )
        .unwrap();

        assert_eq!(row.course_code(), "CSE101");
        assert_eq!(row.course_name.as_deref(), Some("Programming"));
        assert_eq!(row.class_type.as_deref(), Some("TH"));
        assert_eq!(row.slot_string(), "A1+TA1");
    }

    #[test]
    fn test_from_value_accepts_objects_of_any_field_type() {
        let row = RawExtractedRow::from_value(
            7,
            json!({
                "courseCode": { "nested": 1 },
                "courseName": [1, 2],
                "type": false,
                "venue": 3.5,
                "slotString": null
            }),
        )
        .unwrap();

        assert_eq!(row.course_code, None);
        assert_eq!(row.course_name, None);
        assert_eq!(row.class_type.as_deref(), Some("false"));
        assert_eq!(row.venue.as_deref(), Some("3.5"));
        assert_eq!(row.slot_string(), "");
    }

    #[test]
    fn test_from_value_tolerates_missing_and_odd_fields() {
        let row = RawExtractedRow::from_value(
            3,
            json!({ "courseCode": 4021, "courseName": null, "venue": ["x"], "extra": true }),
        )
        .unwrap();

        assert_eq!(row.course_code(), "4021");
        assert_eq!(row.course_name, None);
        assert_eq!(row.venue, None);
        assert_eq!(row.slot_string(), "");
    }

    #[test]
    fn test_from_value_empty_object() {
        let row = RawExtractedRow::from_value(0, json!({})).unwrap();
        assert_eq!(row, RawExtractedRow::default());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = RawExtractedRow::from_value(2, json!("CSE101")).unwrap_err();
        assert_eq!(
            err,
            RowError::NotAnObject {
                index: 2,
                found: "string".to_string()
            }
        );
        assert!(RawExtractedRow::from_value(0, json!(null)).is_err());
        assert!(RawExtractedRow::from_value(0, json!([1, 2])).is_err());
    }
}
