//! Консольный адаптер чата для локального запуска и отладки

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

use super::{ChatChannel, ChatEvent, ChatGateway};
use crate::domain::reply::ReplyPayload;
use crate::shared::errors::ChatError;

/// Channel that renders replies to stdout
pub struct ConsoleChannel;

#[async_trait]
impl ChatChannel for ConsoleChannel {
    async fn send_reply(&self, reply: ReplyPayload) -> Result<(), ChatError> {
        println!("[#{:06x}] {}", reply.color, reply.title);
        if !reply.description.is_empty() {
            println!("  {}", reply.description);
        }
        for field in &reply.fields {
            println!("  {}: {}", field.name, field.value);
        }
        if let Some(footer) = &reply.footer_text {
            println!("  ({})", footer);
        }
        Ok(())
    }

    async fn send_text(&self, text: &str) -> Result<(), ChatError> {
        println!("{}", text);
        Ok(())
    }
}

/// Gateway, читающий сообщения построчно из stdin.
///
/// Каждая строка превращается в `ChatEvent` от пользователя `console`.
/// Реальный клиент платформы подключается через те же порты.
pub struct ConsoleGateway {
    token: String,
    lines: Lines<BufReader<Stdin>>,
    channel: Arc<ConsoleChannel>,
}

impl ConsoleGateway {
    pub fn new(token: String) -> Self {
        Self {
            token,
            lines: BufReader::new(tokio::io::stdin()).lines(),
            channel: Arc::new(ConsoleChannel),
        }
    }
}

#[async_trait]
impl ChatGateway for ConsoleGateway {
    async fn connect(&mut self) -> Result<(), ChatError> {
        if self.token.is_empty() {
            return Err(ChatError::Connect("bot token is not configured".to_string()));
        }
        info!("✅ Console gateway connected");
        Ok(())
    }

    async fn next_event(&mut self) -> Option<ChatEvent> {
        let line = self.lines.next_line().await.ok().flatten()?;
        Some(ChatEvent {
            author_id: "console".to_string(),
            author_is_bot: false,
            content: line,
            channel: Arc::clone(&self.channel) as Arc<dyn ChatChannel>,
        })
    }
}
