//! Chat platform ports - events, channels, and the gateway

mod console;

pub use console::ConsoleGateway;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::reply::ReplyPayload;
use crate::shared::errors::ChatError;

/// Inbound chat message event
#[derive(Clone)]
pub struct ChatEvent {
    pub author_id: String,
    pub author_is_bot: bool,
    pub content: String,
    pub channel: Arc<dyn ChatChannel>,
}

/// Канал, в который бот отправляет ответы
#[async_trait]
pub trait ChatChannel: Send + Sync {
    /// Отправить rich-ответ
    async fn send_reply(&self, reply: ReplyPayload) -> Result<(), ChatError>;

    /// Отправить плоский текстовый ответ
    async fn send_text(&self, text: &str) -> Result<(), ChatError>;
}

/// Соединение с чат-платформой, выдающее входящие события
#[async_trait]
pub trait ChatGateway: Send {
    /// Авторизоваться на платформе
    async fn connect(&mut self) -> Result<(), ChatError>;

    /// Дождаться следующего события; `None` когда соединение закрыто
    async fn next_event(&mut self) -> Option<ChatEvent>;
}
