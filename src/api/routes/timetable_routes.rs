//! Timetable Routes
//!
//! 定义课表相关的 API 路由。

use crate::api::handlers::timetable_handler::*;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 为 multipart 边界与表头预留的额外字节
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// 创建课表路由器
pub fn create_timetable_router(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload_timetable)
                .layer(DefaultBodyLimit::max(max_upload_size + MULTIPART_OVERHEAD)),
        )
        .route("/timetable", post(generate_timetable))
        .route("/slots/:token", get(get_slot))
}
