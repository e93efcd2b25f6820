//! Главный цикл бота: события чата -> обработчики команд

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::router::CommandRouter;
use crate::infrastructure::chat::ChatGateway;

/// Application loop: pulls events from the chat gateway and spawns one
/// handler task per inbound message.
pub struct Bot {
    router: Arc<CommandRouter>,
}

impl Bot {
    pub fn new(router: Arc<CommandRouter>) -> Self {
        Self { router }
    }

    pub async fn run(&self, gateway: &mut dyn ChatGateway) -> Result<()> {
        gateway.connect().await?;
        info!("🚀 Bot is ready, waiting for commands");

        while let Some(event) = gateway.next_event().await {
            let router = Arc::clone(&self.router);
            tokio::spawn(async move {
                router.handle(event).await;
            });
        }

        info!("Chat gateway closed, shutting down");
        Ok(())
    }
}
