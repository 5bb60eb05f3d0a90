//! 翻译提供方
//!
//! 对接外部对话补全 API，把一个单词映射为一条译文或若干候选。
//! 外部调用失败不重试，直接作为 `Provider` 错误上报给编排层。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{WordbookError, WordbookResult};

/// 单词翻译能力接口
#[async_trait]
pub trait Translator: Send + Sync {
    /// 请求一条直接的译文
    ///
    /// 低随机性、小 token 预算，结果去除首尾空白后原样使用。
    async fn translate_single(&self, word: &str) -> WordbookResult<String>;

    /// 请求若干候选译文，按模型给出的顺序返回
    async fn translate_options(&self, word: &str) -> WordbookResult<Vec<String>>;
}

/// 翻译提供方配置
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// 对话补全 API 地址
    pub api_url: String,
    /// Bearer 凭证
    pub api_key: String,
    /// 模型名称
    pub model: String,
}

/// 基于 OpenAI Chat Completions 协议的翻译提供方
pub struct ChatCompletionTranslator {
    client: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl ChatCompletionTranslator {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// 发送一次对话补全请求并取出首条回复文本
    async fn complete(
        &self,
        prompt: String,
        max_tokens: u32,
        temperature: f32,
    ) -> WordbookResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| WordbookError::Provider(format!("请求翻译 API 失败: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WordbookError::Provider(format!(
                "翻译 API 返回非成功状态 {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| WordbookError::Provider(format!("解析翻译 API 响应失败: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| WordbookError::Provider("翻译 API 未返回任何回复".to_string()))?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl Translator for ChatCompletionTranslator {
    async fn translate_single(&self, word: &str) -> WordbookResult<String> {
        let prompt = format!("Переведи слово \"{}\" одним словом", word);
        let translation = self.complete(prompt, 16, 0.2).await?;

        if translation.is_empty() {
            return Err(WordbookError::Provider("翻译 API 返回空译文".to_string()));
        }

        Ok(translation)
    }

    async fn translate_options(&self, word: &str) -> WordbookResult<Vec<String>> {
        let prompt = format!("Переведи слово \"{}\" дай только слова", word);
        let content = self.complete(prompt, 100, 0.7).await?;

        let options = split_candidates(&content);
        if options.is_empty() {
            return Err(WordbookError::Provider(
                "翻译 API 未给出可用候选".to_string(),
            ));
        }

        Ok(options)
    }
}

/// 把模型的原始回复切分为候选列表
///
/// 按换行与逗号切分，逐项去除首尾空白。切分产生的空串（末尾分隔符、
/// 连续分隔符）直接丢弃。
pub fn split_candidates(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .collect()
}
