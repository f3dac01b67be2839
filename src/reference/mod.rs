//! 参考数据模块
//!
//! 时段表与课程名称表。两者都是启动时加载的静态配置，加载失败属于致命错误。

pub mod name_table;
pub mod slot_table;

pub use name_table::NameTable;
pub use slot_table::SlotTable;

use std::path::Path;
use tracing::info;

use crate::config::config::ReferenceConfig;

/// 参考数据加载错误
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReferenceDataError {
    #[error("无法读取参考数据文件 {path}: {message}")]
    Read { path: String, message: String },

    #[error("参考数据 {source_name} 格式错误: {message}")]
    Parse {
        source_name: String,
        message: String,
    },
}

/// 引擎所需的全部只读参考数据
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub slots: SlotTable,
    pub names: NameTable,
}

impl ReferenceData {
    pub fn new(slots: SlotTable, names: NameTable) -> Self {
        Self { slots, names }
    }

    /// 按配置路径加载
    pub fn load(config: &ReferenceConfig) -> Result<Self, ReferenceDataError> {
        Self::load_from(&config.slots_path, &config.courses_path)
    }

    pub fn load_from(slots_path: &Path, courses_path: &Path) -> Result<Self, ReferenceDataError> {
        let slots = SlotTable::load(slots_path)?;
        info!(
            "Slot table loaded from {}: {} tokens",
            slots_path.display(),
            slots.len()
        );

        let names = NameTable::load(courses_path)?;
        info!(
            "Course name table loaded from {}: {} courses",
            courses_path.display(),
            names.len()
        );

        Ok(Self { slots, names })
    }
}
