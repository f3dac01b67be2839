//! 时段表
//!
//! 时段代码到每周课程安排的只读映射。进程启动时加载一次，之后不再修改。

use std::collections::HashMap;
use std::path::Path;

use crate::models::slot::{SessionOccurrence, SlotToken};
use crate::reference::ReferenceDataError;

/// 时段表
///
/// 查询未知代码时返回 `None`，从不报错；解析器据此产生 `missing_slot` 警告。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotTable {
    slots: HashMap<SlotToken, Vec<SessionOccurrence>>,
}

impl SlotTable {
    pub fn new(slots: HashMap<SlotToken, Vec<SessionOccurrence>>) -> Self {
        Self { slots }
    }

    /// 解析 JSON：`{ "A1": [ {"day": "Monday", "start": "08:00", "end": "08:50", "type": "TH"} ] }`
    ///
    /// 时刻格式错误属于结构性错误，整个表加载失败。
    pub fn from_json_str(source: &str, json: &str) -> Result<Self, ReferenceDataError> {
        let slots: HashMap<SlotToken, Vec<SessionOccurrence>> =
            serde_json::from_str(json).map_err(|e| ReferenceDataError::Parse {
                source_name: source.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { slots })
    }

    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let json = std::fs::read_to_string(path).map_err(|e| ReferenceDataError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&path.display().to_string(), &json)
    }

    /// 精确查询时段代码
    pub fn get(&self, token: &str) -> Option<&[SessionOccurrence]> {
        self.slots.get(token).map(Vec::as_slice)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.slots.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "A1": [{"day": "Monday", "start": "08:00", "end": "08:50", "type": "TH"}],
        "L1": [
            {"day": "Tuesday", "start": "08:00", "end": "08:50", "type": "LAB"},
            {"day": "Tuesday", "start": "08:51", "end": "09:40", "type": "LAB"}
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let table = SlotTable::from_json_str("sample", SAMPLE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("L1").unwrap().len(), 2);
        assert_eq!(table.get("L1").unwrap()[1].start.to_string(), "08:51");
    }

    #[test]
    fn test_unknown_token_returns_none() {
        let table = SlotTable::from_json_str("sample", SAMPLE).unwrap();
        assert!(table.get("A2").is_none());
        assert!(table.get("a1").is_none());
        assert!(!table.contains("AA1"));
    }

    #[test]
    fn test_invalid_time_is_structural_failure() {
        let json = r#"{"A1": [{"day": "Monday", "start": "8am", "end": "08:50", "type": "TH"}]}"#;
        let err = SlotTable::from_json_str("bad", json).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Parse { .. }));
    }

    #[test]
    fn test_unknown_day_still_loads() {
        let json = r#"{"X1": [{"day": "Someday", "start": "08:00", "end": "08:50", "type": "TH"}]}"#;
        let table = SlotTable::from_json_str("odd", json).unwrap();
        assert_eq!(table.get("X1").unwrap()[0].weekday(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SlotTable::load(Path::new("/nonexistent/slots.json")).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Read { .. }));
    }
}
