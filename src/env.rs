//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问，每个变量一个访问器类型。

use std::env;
use std::fmt;

use crate::service::TranslateMode;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment variable '{}': {}",
            self.variable, self.message
        )
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "WORDBOOK_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// Web 服务器环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "WORDBOOK_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Address the web server binds to";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Bind address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    /// 监听端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "WORDBOOK_PORT";
        const DEFAULT: Option<u16> = Some(3000);
        const DESCRIPTION: &'static str = "Port the web server listens on";

        fn parse(value: &str) -> EnvResult<u16> {
            match value.parse::<u16>() {
                Ok(0) => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                }),
                Ok(port) => Ok(port),
                Err(_) => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid port number '{}'", value),
                }),
            }
        }
    }

    /// 静态文件目录，空串表示关闭静态文件服务
    pub struct StaticDir;
    impl EnvVar<String> for StaticDir {
        const NAME: &'static str = "WORDBOOK_STATIC_DIR";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Directory of static client assets; empty disables";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("public".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }

    /// 翻译端点的部署模式
    pub struct Mode;
    impl EnvVar<TranslateMode> for Mode {
        const NAME: &'static str = "WORDBOOK_TRANSLATE_MODE";
        const DEFAULT: Option<TranslateMode> = Some(TranslateMode::Options);
        const DESCRIPTION: &'static str = "Translate endpoint behavior: single, options";

        fn parse(value: &str) -> EnvResult<TranslateMode> {
            match value.to_lowercase().as_str() {
                "single" => Ok(TranslateMode::Single),
                "options" | "multi" => Ok(TranslateMode::Options),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid translate mode '{}'. Use: single, options", value),
                }),
            }
        }
    }
}

/// MongoDB 环境变量
pub mod mongodb {
    use super::*;

    /// MongoDB 连接字符串
    pub struct ConnectionString;
    impl EnvVar<String> for ConnectionString {
        const NAME: &'static str = "MONGODB_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB connection string";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("mongodb://localhost:27017".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let uri = value.trim();
            if uri.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Connection string cannot be empty".to_string(),
                });
            }
            Ok(uri.to_string())
        }
    }

    /// 数据库名称
    pub struct DatabaseName;
    impl EnvVar<String> for DatabaseName {
        const NAME: &'static str = "MONGODB_DATABASE";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB database name";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("wordbook".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }

    /// 词条集合名称
    pub struct CollectionName;
    impl EnvVar<String> for CollectionName {
        const NAME: &'static str = "MONGODB_COLLECTION";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "MongoDB collection holding word records";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("words".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }
}

/// 翻译提供方环境变量
pub mod provider {
    use super::*;

    /// 外部 API 凭证，必填
    pub struct ApiKey;
    impl EnvVar<String> for ApiKey {
        const NAME: &'static str = "OPENAI_API_KEY";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Credential for the translation provider";

        fn parse(value: &str) -> EnvResult<String> {
            let key = value.trim();
            if key.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "API key cannot be empty".to_string(),
                });
            }
            Ok(key.to_string())
        }
    }

    /// 对话补全 API 地址
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "WORDBOOK_PROVIDER_API_URL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Chat completion endpoint of the translation provider";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("https://api.openai.com/v1/chat/completions".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let url = value.trim();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid API URL '{}'", value),
                });
            }
            Ok(url.to_string())
        }
    }

    /// 模型名称
    pub struct Model;
    impl EnvVar<String> for Model {
        const NAME: &'static str = "WORDBOOK_PROVIDER_MODEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Model requested from the translation provider";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("gpt-3.5-turbo".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }
}
