//! Web 服务器配置
//!
//! 使用类型安全的环境变量系统进行配置管理

use crate::env::{EnvError, EnvResult, EnvVar};
use crate::provider::ProviderConfig;
use crate::service::TranslateMode;

/// MongoDB 配置
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// MongoDB 连接字符串
    pub connection_string: String,
    /// 数据库名称
    pub database_name: String,
    /// 集合名称
    pub collection_name: String,
}

impl MongoConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::mongodb;

        Ok(Self {
            connection_string: mongodb::ConnectionString::get()?,
            database_name: mongodb::DatabaseName::get()?,
            collection_name: mongodb::CollectionName::get()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.connection_string.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_URL".to_string(),
                message: "Connection string cannot be empty".to_string(),
            });
        }

        if self.database_name.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_DATABASE".to_string(),
                message: "Database name cannot be empty".to_string(),
            });
        }

        if self.collection_name.is_empty() {
            return Err(EnvError {
                variable: "MONGODB_COLLECTION".to_string(),
                message: "Collection name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 静态文件目录
    pub static_dir: Option<String>,
    /// 翻译端点的部署模式
    pub translate_mode: TranslateMode,
    /// MongoDB 配置
    pub mongo: MongoConfig,
    /// 翻译提供方配置
    pub provider: ProviderConfig,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::{provider, web};

        let static_dir_str = web::StaticDir::get()?;
        let static_dir = if static_dir_str.is_empty() {
            None
        } else {
            Some(static_dir_str)
        };

        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            static_dir,
            translate_mode: web::Mode::get()?,
            mongo: MongoConfig::from_env()?,
            provider: ProviderConfig {
                api_url: provider::ApiUrl::get()?,
                api_key: provider::ApiKey::get()?,
                model: provider::Model::get()?,
            },
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.is_empty() {
            return Err(EnvError {
                variable: "WORDBOOK_BIND_ADDRESS".to_string(),
                message: "Bind address cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(EnvError {
                variable: "WORDBOOK_PORT".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if let Some(ref static_dir) = self.static_dir {
            let path = std::path::Path::new(static_dir);
            if !path.exists() {
                tracing::warn!("Static directory '{}' does not exist", static_dir);
            }
        }

        self.mongo.validate()?;

        if self.provider.api_key.is_empty() {
            return Err(EnvError {
                variable: "OPENAI_API_KEY".to_string(),
                message: "API key cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
