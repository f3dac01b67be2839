use std::collections::HashMap;
use std::path::Path;

use crate::reference::ReferenceDataError;

/// 课程代码到课程名称的映射
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameTable {
    names: HashMap<String, String>,
}

impl NameTable {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    pub fn from_json_str(source: &str, json: &str) -> Result<Self, ReferenceDataError> {
        let names = serde_json::from_str(json).map_err(|e| ReferenceDataError::Parse {
            source_name: source.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { names })
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let json = std::fs::read_to_string(path).map_err(|e| ReferenceDataError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&path.display().to_string(), &json)
    }

    pub fn get(&self, course_code: &str) -> Option<&str> {
        self.names.get(course_code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
