//! Web 服务器模块
//!
//! 提供词汇翻译与生词本管理的 HTTP 服务

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::error::{WordbookError, WordbookResult};
use crate::provider::ChatCompletionTranslator;
use crate::service::WordService;
use crate::store::MongoWordStore;
use crate::word::Word;

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    /// 建立 MongoDB 连接、初始化依赖并开始监听
    pub async fn start(&self) -> WordbookResult<()> {
        let client = mongodb::Client::with_uri_str(&self.config.mongo.connection_string)
            .await
            .map_err(|e| WordbookError::Database(format!("连接 MongoDB 失败: {}", e)))?;

        let collection = client
            .database(&self.config.mongo.database_name)
            .collection::<Word>(&self.config.mongo.collection_name);

        tracing::info!(
            "已连接 MongoDB 数据库 {}，集合 {}",
            self.config.mongo.database_name,
            self.config.mongo.collection_name
        );

        let store = MongoWordStore::new(collection);
        // 唯一索引必须在接受请求前就绪，它是同词并发写入时的最终去重保障
        store.ensure_indexes().await?;

        let translator = ChatCompletionTranslator::new(self.config.provider.clone());
        let service = WordService::new(Arc::new(store), Arc::new(translator));

        let app_state = Arc::new(AppState {
            service,
            translate_mode: self.config.translate_mode,
        });

        let app = create_router(app_state, &self.config);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address())
            .await
            .map_err(|e| WordbookError::Server(format!("绑定监听地址失败: {}", e)))?;

        tracing::info!(
            "Web 服务器启动于 http://{}，翻译模式 {:?}",
            self.config.listen_address(),
            self.config.translate_mode
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| WordbookError::Server(format!("服务器运行失败: {}", e)))?;

        Ok(())
    }
}

/// 创建路由器
fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut app = create_routes().with_state(app_state);

    // 添加 CORS 支持
    app = app.layer(CorsLayer::permissive());

    // 客户端静态页面（如果配置了）
    if let Some(static_dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app
}
