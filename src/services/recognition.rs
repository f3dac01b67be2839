//! 识别服务
//!
//! 外部协作方：把课表照片转换为原始行。结果不保证确定性，也不保证字段完整，
//! 这里只负责调用与返回结构的检查，字段缺陷交由引擎处理。

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::config::RecognitionConfig;
use crate::error::{AppError, Result};

const SYSTEM_PROMPT: &str = "Transcribe the timetable in the image literally. \
Copy every value character for character: keep repeated letters, digits, punctuation, \
spacing and capitalization exactly as printed. A slot printed as 'TAA2' stays 'TAA2'; \
'L16' stays 'L16'. Never correct, abbreviate, expand or reinterpret anything. \
Extract every timetable row you can see and answer with JSON only, shaped as \
{ \"rows\": [ { \"courseCode\": \"\", \"courseName\": \"\", \"slotString\": \"\", \"type\": \"\", \"venue\": \"\" } ] }.";

const USER_PROMPT: &str = "Transcribe this timetable exactly. No corrections.";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecognitionService: Send + Sync {
    /// 从图片中提取原始行（每行为一个 JSON 值，不保证是对象）
    async fn extract_rows(&self, image: &[u8], mime_type: &str) -> Result<Vec<Value>>;
}

/// 基于 Chat Completions 接口的识别服务
pub struct OpenAiRecognitionService {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiRecognitionService {
    pub fn new(config: &RecognitionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn request_body(&self, image: &[u8], mime_type: &str) -> Value {
        let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(image));

        json!({
            "model": self.model,
            "temperature": 0,
            "response_format": { "type": "json_object" },
            "stop": ["Note:", "Explanation:", "```"],
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": USER_PROMPT },
                        { "type": "image_url", "image_url": { "url": data_url } }
                    ]
                }
            ]
        })
    }
}

/// 从模型回复中取出 `rows` 数组
fn parse_rows(content: &str) -> Result<Vec<Value>> {
    let parsed: Value = serde_json::from_str(content).map_err(|e| {
        debug!("Unparseable recognition content: {}", content);
        AppError::Recognition(format!("返回内容不是合法 JSON: {}", e))
    })?;

    match parsed {
        Value::Object(mut object) => match object.remove("rows") {
            Some(Value::Array(rows)) => Ok(rows),
            _ => Err(AppError::Recognition("返回内容缺少 rows 数组".to_string())),
        },
        _ => Err(AppError::Recognition("返回内容缺少 rows 数组".to_string())),
    }
}

#[async_trait]
impl RecognitionService for OpenAiRecognitionService {
    async fn extract_rows(&self, image: &[u8], mime_type: &str) -> Result<Vec<Value>> {
        debug!(
            "Sending {} byte image to recognition model {}",
            image.len(),
            self.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(image, mime_type))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Recognition service returned {}", status);
            return Err(AppError::Recognition(format!("HTTP {}: {}", status, body)));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Recognition("回复中缺少内容".to_string()))?;

        parse_rows(&content)
    }
}

/// 未配置 API 密钥时使用，所有调用都返回服务不可用
#[derive(Debug, Default)]
pub struct UnconfiguredRecognitionService;

#[async_trait]
impl RecognitionService for UnconfiguredRecognitionService {
    async fn extract_rows(&self, _image: &[u8], _mime_type: &str) -> Result<Vec<Value>> {
        Err(AppError::Unavailable(
            "识别服务未配置 API 密钥".to_string(),
        ))
    }
}

/// 按配置创建识别服务
pub fn create_recognition_service(
    config: &RecognitionConfig,
) -> Result<Box<dyn RecognitionService>> {
    if config.has_api_key() {
        Ok(Box::new(OpenAiRecognitionService::new(config)?))
    } else {
        warn!("No recognition API key configured; image uploads will be rejected");
        Ok(Box::new(UnconfiguredRecognitionService))
    }
}
