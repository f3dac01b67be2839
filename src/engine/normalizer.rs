//! 课程规范化

use crate::engine::tokenizer::tokenize;
use crate::models::course::{CourseRecord, RawExtractedRow};
use crate::reference::NameTable;

/// 将原始行转换为课程记录
///
/// 课程名称按以下顺序回退：行内名称 → 名称表 → 课程代码。
/// 缺失字段一律取空串，从不失败。
pub fn normalize(row: &RawExtractedRow, names: &NameTable) -> CourseRecord {
    let course_code = row.course_code().to_string();
    let raw_slot_string = row.slot_string().to_string();

    let course_name = row
        .course_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or_else(|| names.get(&course_code))
        .unwrap_or(course_code.as_str())
        .to_string();

    CourseRecord {
        slots: tokenize(&raw_slot_string),
        course_name,
        class_type: row.class_type.clone().unwrap_or_default(),
        venue: row.venue.clone().unwrap_or_default(),
        course_code,
        raw_slot_string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slot::SlotToken;

    fn names() -> NameTable {
        [("CSE2003", "Data Structures and Algorithms")]
            .into_iter()
            .collect()
    }

    fn row(code: &str, name: Option<&str>, slots: &str) -> RawExtractedRow {
        RawExtractedRow {
            course_code: Some(code.to_string()),
            course_name: name.map(str::to_string),
            class_type: Some("ETH".to_string()),
            venue: Some("SJT 304".to_string()),
            slot_string: Some(slots.to_string()),
        }
    }

    #[test]
    fn test_row_name_wins() {
        let course = normalize(&row("CSE2003", Some("DSA"), "A1"), &names());
        assert_eq!(course.course_name, "DSA");
    }

    #[test]
    fn test_empty_name_falls_back_to_table() {
        let course = normalize(&row("CSE2003", Some(""), "A1"), &names());
        assert_eq!(course.course_name, "Data Structures and Algorithms");

        let course = normalize(&row("CSE2003", None, "A1"), &names());
        assert_eq!(course.course_name, "Data Structures and Algorithms");
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        let course = normalize(&row("XYZ9999", None, "A1"), &names());
        assert_eq!(course.course_name, "XYZ9999");
    }

    #[test]
    fn test_fields_pass_through_and_slots_tokenized() {
        let course = normalize(&row("CSE2003", None, "A1+TA1 - SJT304"), &names());
        assert_eq!(course.course_code, "CSE2003");
        assert_eq!(course.class_type, "ETH");
        assert_eq!(course.venue, "SJT 304");
        assert_eq!(course.raw_slot_string, "A1+TA1 - SJT304");
        assert_eq!(
            course.slots,
            vec![SlotToken::from("A1"), SlotToken::from("TA1")]
        );
    }

    #[test]
    fn test_empty_row_never_fails() {
        let course = normalize(&RawExtractedRow::default(), &NameTable::default());
        assert_eq!(course.course_code, "");
        assert_eq!(course.course_name, "");
        assert_eq!(course.venue, "");
        assert!(course.slots.is_empty());
    }
}
