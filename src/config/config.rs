use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 上传图片大小上限（字节）
    pub max_upload_size: usize,
}

/// 参考数据配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReferenceConfig {
    /// 时段表路径
    pub slots_path: PathBuf,
    /// 课程名称表路径
    pub courses_path: PathBuf,
}

/// 识别服务配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Chat Completions 接口地址
    pub endpoint: String,
    /// API 密钥
    pub api_key: String,
    /// 模型名称
    pub model: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    /// 允许在没有 API 密钥时启动（上传接口将返回 503）
    pub allow_missing_key: bool,
}

impl RecognitionConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件目录（按天滚动）
    pub log_dir: Option<PathBuf>,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 参考数据配置
    pub reference: ReferenceConfig,
    /// 识别服务配置
    pub recognition: RecognitionConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 3001,
                max_upload_size: 10 * 1024 * 1024,
            },
            reference: ReferenceConfig {
                slots_path: PathBuf::from("data/slots.json"),
                courses_path: PathBuf::from("data/courses.json"),
            },
            recognition: RecognitionConfig {
                endpoint: "https://api.openai.com/v1/chat/completions".into(),
                api_key: String::new(),
                model: "gpt-4o-mini".into(),
                timeout_secs: 30,
                allow_missing_key: true,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            app_name: "vitwise".into(),
            environment: "development".into(),
        }
    }

    /// 按环境名称选择预设，未知名称按开发环境处理
    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "production" => Self::production(),
            _ => Self::development(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.recognition.allow_missing_key = false;
        config
    }
}
