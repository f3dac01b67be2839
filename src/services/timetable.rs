//! 课表服务
//!
//! 连接识别服务与引擎：取得原始行，交给引擎生成课表，并记录日志与指标。

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::engine;
use crate::error::Result;
use crate::models::slot::SessionOccurrence;
use crate::models::timetable::Assembly;
use crate::observability::AppMetrics;
use crate::reference::ReferenceData;
use crate::services::recognition::RecognitionService;

/// 课表服务 trait
#[async_trait]
pub trait TimetableService: Send + Sync {
    /// 由调用方提供的原始行生成课表
    fn generate_from_rows(&self, rows: Vec<Value>) -> Result<Assembly>;

    /// 识别图片后生成课表
    async fn generate_from_image(&self, image: &[u8], mime_type: &str) -> Result<Assembly>;

    /// 精确查询单个时段代码
    fn lookup_slot(&self, token: &str) -> Option<Vec<SessionOccurrence>>;
}

/// 课表服务实现
pub struct TimetableServiceImpl {
    reference: Arc<ReferenceData>,
    recognizer: Arc<dyn RecognitionService>,
    metrics: Arc<AppMetrics>,
}

impl TimetableServiceImpl {
    pub fn new(
        reference: Arc<ReferenceData>,
        recognizer: Arc<dyn RecognitionService>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            reference,
            recognizer,
            metrics,
        }
    }
}

#[async_trait]
impl TimetableService for TimetableServiceImpl {
    fn generate_from_rows(&self, rows: Vec<Value>) -> Result<Assembly> {
        let row_count = rows.len();
        let assembly = engine::build_timetable(rows, &self.reference)?;

        for warning in &assembly.warnings {
            debug!(
                kind = ?warning.kind,
                slot = %warning.slot,
                course = %warning.course,
                "Slot resolution warning"
            );
        }

        info!(
            rows = row_count,
            entries = assembly.timetable.total_entries(),
            warnings = assembly.warnings.len(),
            "Timetable assembled"
        );
        debug!("Timetable counts by day: {:?}", assembly.timetable.day_counts());

        self.metrics.record_assembly(row_count, &assembly);
        Ok(assembly)
    }

    async fn generate_from_image(&self, image: &[u8], mime_type: &str) -> Result<Assembly> {
        self.metrics.record_upload();

        let rows = self.recognizer.extract_rows(image, mime_type).await?;
        info!("Recognition returned {} rows", rows.len());

        self.generate_from_rows(rows)
    }

    fn lookup_slot(&self, token: &str) -> Option<Vec<SessionOccurrence>> {
        self.reference.slots.get(token).map(<[SessionOccurrence]>::to_vec)
    }
}

/// 创建课表服务
pub fn create_timetable_service(
    reference: Arc<ReferenceData>,
    recognizer: Arc<dyn RecognitionService>,
    metrics: Arc<AppMetrics>,
) -> Box<dyn TimetableService> {
    Box::new(TimetableServiceImpl::new(reference, recognizer, metrics))
}
