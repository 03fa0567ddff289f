use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 生产环境下令牌密钥的最小长度
const MIN_SECRET_LEN: usize = 32;

/// 会话有效期与刷新间隔的上限（秒）
pub const MAX_DURATION_SECS: u64 = 365 * 24 * 60 * 60;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序：
    /// 1. 开发环境默认值
    /// 2. ./config.toml
    /// 3. STATCON_ 前缀的环境变量（嵌套字段用 `__` 分隔）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("STATCON_").split("__"))
            .extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.admin.username.is_empty() || config.admin.password.is_empty() {
            return Err(ConfigValidationError::MissingCredentials);
        }

        if config.admin.token_secret.is_empty()
            || (config.is_production() && config.admin.token_secret.len() < MIN_SECRET_LEN)
        {
            return Err(ConfigValidationError::WeakSecret(MIN_SECRET_LEN));
        }

        if !(1..=MAX_DURATION_SECS).contains(&config.admin.session_ttl_secs) {
            return Err(ConfigValidationError::InvalidDuration("session_ttl_secs"));
        }

        if !(1..=MAX_DURATION_SECS).contains(&config.admin.refresh_interval_secs) {
            return Err(ConfigValidationError::InvalidDuration(
                "refresh_interval_secs",
            ));
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("管理员用户名或密码未配置")]
    MissingCredentials,

    #[error("令牌密钥过短，至少需要 {0} 字节")]
    WeakSecret(usize),

    #[error("时间配置无效，必须在 1 秒到 1 年之间: {0}")]
    InvalidDuration(&'static str),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_development_config_is_valid() {
        assert!(ConfigLoader::validate(&AppConfig::development()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = AppConfig::development();
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));
    }

    #[test]
    fn test_production_requires_real_credentials() {
        let config = AppConfig::production();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingCredentials)
        ));

        let mut config = AppConfig::production();
        config.admin.password = "a-real-password".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::WeakSecret(_))
        ));

        config.admin.token_secret = "x".repeat(MIN_SECRET_LEN);
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_secret_in_production() {
        let mut config = AppConfig::production();
        config.admin.password = "a-real-password".into();
        config.admin.token_secret = "short".into();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::WeakSecret(_))
        ));

        let mut config = AppConfig::development();
        config.admin.token_secret = "short".into();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_refresh_interval() {
        let mut config = AppConfig::development();
        config.admin.refresh_interval_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidDuration("refresh_interval_secs"))
        ));
    }

    #[rstest]
    #[case(MAX_DURATION_SECS + 1)]
    #[case(100_000_000_000_000_000)]
    #[case(u64::MAX)]
    fn test_validate_rejects_oversized_durations(#[case] secs: u64) {
        let mut config = AppConfig::development();
        config.admin.session_ttl_secs = secs;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidDuration("session_ttl_secs"))
        ));

        let mut config = AppConfig::development();
        config.admin.refresh_interval_secs = secs;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidDuration("refresh_interval_secs"))
        ));
    }

    #[test]
    fn test_validate_accepts_one_year() {
        let mut config = AppConfig::development();
        config.admin.session_ttl_secs = MAX_DURATION_SECS;
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9090\n\n[admin]\nusername = \"editor\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from(path).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.admin.username, "editor");
        assert_eq!(config.admin.session_ttl_secs, 24 * 60 * 60);
    }
}
