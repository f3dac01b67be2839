use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use std::path::{Path, PathBuf};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "VITWISE_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序（后者覆盖前者）：
    /// 1. `environment` 对应的预设（`production` 或开发环境）
    /// 2. ./config.yaml
    /// 3. `VITWISE_` 前缀的环境变量，嵌套字段用 `__` 分隔，如 `VITWISE_SERVER__PORT`
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        let overrides = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let environment = overrides
            .extract_inner::<String>("environment")
            .unwrap_or_default();

        Figment::new()
            .merge(Serialized::defaults(AppConfig::for_environment(&environment)))
            .merge(overrides)
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.server.max_upload_size == 0 {
            return Err(ConfigValidationError::InvalidUploadSize);
        }

        if config.reference.slots_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::InvalidPath("reference.slots_path".into()));
        }

        if config.reference.courses_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::InvalidPath(
                "reference.courses_path".into(),
            ));
        }

        if !config.recognition.has_api_key() && !config.recognition.allow_missing_key {
            return Err(ConfigValidationError::MissingApiKey);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("上传大小上限无效，必须大于 0")]
    InvalidUploadSize,

    #[error("缺少识别服务 API 密钥，且未设置 recognition.allow_missing_key")]
    MissingApiKey,

    #[error("配置路径无效: {0}")]
    InvalidPath(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        figment::Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_from("missing.yaml")?;
            assert_eq!(config.server.port, 3001);
            assert_eq!(config.reference.slots_path, PathBuf::from("data/slots.json"));
            assert!(ConfigLoader::validate(&config).is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_yaml_and_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
server:
  port: 8080
recognition:
  model: "gpt-4o"
"#,
            )?;
            jail.set_env("VITWISE_SERVER__PORT", "9090");
            jail.set_env("VITWISE_RECOGNITION__API_KEY", "sk-test-key-123456");

            let config = ConfigLoader::load()?;
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.recognition.model, "gpt-4o");
            assert_eq!(config.recognition.api_key, "sk-test-key-123456");
            assert_eq!(config.server.max_upload_size, 10 * 1024 * 1024);
            Ok(())
        });
    }

    #[test]
    fn test_production_environment_selects_production_preset() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VITWISE_ENVIRONMENT", "production");

            let config = ConfigLoader::load_from("missing.yaml")?;
            assert_eq!(config.environment, "production");
            assert!(!config.recognition.allow_missing_key);
            assert!(config.logging.structured);
            assert!(matches!(
                ConfigLoader::validate(&config),
                Err(ConfigValidationError::MissingApiKey)
            ));
            Ok(())
        });
    }

    #[test]
    fn test_production_from_yaml_can_opt_in_missing_key() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
environment: production
recognition:
  allow_missing_key: true
"#,
            )?;

            let config = ConfigLoader::load()?;
            assert_eq!(config.logging.level, "info");
            assert!(config.recognition.allow_missing_key);
            assert!(ConfigLoader::validate(&config).is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = AppConfig::development();
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));

        let mut config = AppConfig::production();
        config.recognition.api_key.clear();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingApiKey)
        ));

        let mut config = AppConfig::development();
        config.reference.courses_path = PathBuf::new();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPath(_))
        ));
    }
}
