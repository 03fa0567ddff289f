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
    /// 允许的 CORS 来源
    pub cors_allowed_origins: Vec<String>,
}

/// 会话令牌存储后端
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 进程内存
    #[default]
    Memory,
    /// 本地 JSON 文件
    File,
}

/// 管理员认证配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdminConfig {
    /// 管理员用户名
    pub username: String,
    /// 管理员密码
    pub password: String,
    /// 令牌签名密钥
    pub token_secret: String,
    /// 令牌签发者
    pub token_issuer: String,
    /// 会话有效期（秒），按最后一次刷新计算
    pub session_ttl_secs: u64,
    /// 后台刷新间隔（秒）
    pub refresh_interval_secs: u64,
    /// 令牌存储后端
    pub storage: StorageBackend,
    /// 文件存储路径
    pub storage_path: PathBuf,
    /// 服务运行期间由后台任务持续刷新管理员会话
    pub keep_alive: bool,
}

/// 内容配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// 内容种子文件（JSON）
    pub seed_path: Option<PathBuf>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 管理员配置
    pub admin: AdminConfig,
    /// 内容配置
    pub content: ContentConfig,
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
                port: 8080,
                cors_allowed_origins: vec!["http://localhost:3000".into()],
            },
            admin: AdminConfig {
                username: "admin".into(),
                password: "statcon-dev-password".into(),
                token_secret: "dev-secret-change-in-production-min-32-chars".into(),
                token_issuer: "statcon".into(),
                session_ttl_secs: 24 * 60 * 60,
                refresh_interval_secs: 5 * 60,
                storage: StorageBackend::Memory,
                storage_path: PathBuf::from("./data/session.json"),
                keep_alive: false,
            },
            content: ContentConfig {
                seed_path: Some(PathBuf::from("./data/content.json")),
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
            app_name: "statcon".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    ///
    /// 管理员密码和令牌密钥留空，必须由配置文件或环境变量提供。
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.admin.storage = StorageBackend::File;
        config.admin.password = String::new();
        config.admin.token_secret = String::new();
        config.server.cors_allowed_origins = Vec::new();
        config
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
