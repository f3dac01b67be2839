//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。
//! 数据质量问题不在此列，它们以警告形式随课表一起返回。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::course::RowError;
use crate::security::redaction::redact_secrets;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 参数验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 上传内容过大
    #[error("上传内容过大: 最大 {max} 字节")]
    PayloadTooLarge { max: usize },

    /// 识别服务错误
    #[error("识别服务错误: {0}")]
    Recognition(String),

    /// 服务不可用
    #[error("服务不可用: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Recognition(format!("请求超时: {}", e))
        } else {
            AppError::Recognition(e.to_string())
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

impl From<RowError> for AppError {
    fn from(e: RowError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code): (u16, String) = (&self).into();
        let body = Json(ErrorResponse::new(&code, &redact_secrets(&self.to_string())));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
            AppError::PayloadTooLarge { .. } => (413, "PAYLOAD_TOO_LARGE".to_string()),
            AppError::Recognition(_) => (502, "RECOGNITION_ERROR".to_string()),
            AppError::Unavailable(_) => (503, "SERVICE_UNAVAILABLE".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Validation("x".into()), 400),
            (AppError::NotFound("x".into()), 404),
            (AppError::PayloadTooLarge { max: 1 }, 413),
            (AppError::Recognition("x".into()), 502),
            (AppError::Unavailable("x".into()), 503),
        ];
        for (err, expected) in cases {
            let (status, _): (u16, String) = (&err).into();
            assert_eq!(status, expected, "{:?}", err);
        }
    }

    #[test]
    fn test_row_error_is_validation() {
        let err: AppError = RowError::NotAnObject {
            index: 0,
            found: "string".into(),
        }
        .into();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_response_body_redacts_secrets() {
        let response =
            AppError::Recognition("Incorrect API key provided: sk-abcdef123456".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RECOGNITION_ERROR");
        assert!(error.message.contains("sk-REDACTED"));
        assert!(!error.message.contains("abcdef123456"));
    }
}
