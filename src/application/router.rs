//! Маршрутизация команд чата

use std::sync::Arc;

use tracing::{error, info};

use super::command::Command;
use crate::domain::quote::PriceLookupService;
use crate::domain::reply::{build_help_reply, build_price_reply};
use crate::infrastructure::chat::ChatEvent;
use crate::shared::config::{LangCfg, UiColorsCfg};

/// Dispatches parsed chat commands and sends replies back to the
/// originating channel.
///
/// Errors on the `price` path never propagate: each one becomes a plain
/// mention reply with the configured language string.
pub struct CommandRouter {
    prefix: String,
    colors: UiColorsCfg,
    lang: LangCfg,
    lookup: Arc<PriceLookupService>,
}

impl CommandRouter {
    pub fn new(
        prefix: String,
        colors: UiColorsCfg,
        lang: LangCfg,
        lookup: Arc<PriceLookupService>,
    ) -> Self {
        Self {
            prefix,
            colors,
            lang,
            lookup,
        }
    }

    /// Обработать одно входящее сообщение
    pub async fn handle(&self, event: ChatEvent) {
        if event.author_is_bot {
            return;
        }

        let command = match Command::parse(&event.content, &self.prefix) {
            Some(command) => command,
            None => return,
        };

        match command.name.as_str() {
            "help" => {
                let reply = build_help_reply(&self.colors, &self.lang);
                if let Err(e) = event.channel.send_reply(reply).await {
                    error!("❌ Failed to send help reply: {}", e);
                }
            }
            "price" => self.handle_price(&event, &command).await,
            // Незнакомые команды молча игнорируем
            _ => {}
        }
    }

    async fn handle_price(&self, event: &ChatEvent, command: &Command) {
        let symbol = command.args.first().map(String::as_str).unwrap_or("");

        match self.lookup.lookup(symbol).await {
            Ok(quote) => {
                info!("📈 {} -> {} @ {}", symbol, quote.name, quote.price_usd);
                let reply = build_price_reply(&quote, &self.colors);
                if let Err(e) = event.channel.send_reply(reply).await {
                    error!("❌ Failed to send price reply: {}", e);
                }
            }
            Err(err) => {
                let text = format!("<@{}> {}", event.author_id, err.user_message(&self.lang));
                if let Err(e) = event.channel.send_text(&text).await {
                    error!("❌ Failed to send error reply: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::{DirectoryCache, DirectoryEntry};
    use crate::domain::rate_limit::RateLimiter;
    use crate::domain::reply::ReplyPayload;
    use crate::infrastructure::chat::ChatChannel;
    use crate::infrastructure::market_api::testing::{bitcoin_ticker, MockMarketApi};
    use crate::shared::config::HelpField;
    use crate::shared::errors::ChatError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Канал, запоминающий всё отправленное
    #[derive(Default)]
    struct RecordingChannel {
        replies: Mutex<Vec<ReplyPayload>>,
        texts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ChatChannel for RecordingChannel {
        async fn send_reply(&self, reply: ReplyPayload) -> Result<(), ChatError> {
            self.replies.lock().unwrap().push(reply);
            Ok(())
        }

        async fn send_text(&self, text: &str) -> Result<(), ChatError> {
            self.texts.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    impl RecordingChannel {
        fn sent_replies(&self) -> Vec<ReplyPayload> {
            self.replies.lock().unwrap().clone()
        }

        fn sent_texts(&self) -> Vec<String> {
            self.texts.lock().unwrap().clone()
        }

        fn is_silent(&self) -> bool {
            self.sent_replies().is_empty() && self.sent_texts().is_empty()
        }
    }

    fn colors() -> UiColorsCfg {
        UiColorsCfg {
            positive: 0x2ECC71,
            negative: 0xE74C3C,
            neutral: 0x3498DB,
        }
    }

    fn lang() -> LangCfg {
        LangCfg {
            no_listings: "listings are not loaded yet".to_string(),
            no_symbol: "give me a coin symbol".to_string(),
            invalid_symbol: "unknown coin symbol".to_string(),
            too_many_requests: "too many requests".to_string(),
            no_data: "no ticker data".to_string(),
            help_title: "Commands".to_string(),
            help_fields: vec![HelpField {
                name: "!price <symbol>".to_string(),
                value: "Current USD price".to_string(),
            }],
        }
    }

    async fn router_with(api: Arc<MockMarketApi>, refresh: bool) -> CommandRouter {
        let directory = Arc::new(DirectoryCache::new(api.clone()));
        if refresh {
            directory.refresh().await.unwrap();
        }
        let rate_limiter = Arc::new(RateLimiter::new(3, Duration::from_secs(60)));
        let lookup = Arc::new(PriceLookupService::new(directory, rate_limiter, api));
        CommandRouter::new("!".to_string(), colors(), lang(), lookup)
    }

    fn btc_api() -> Arc<MockMarketApi> {
        Arc::new(
            MockMarketApi::with_listings(vec![DirectoryEntry {
                symbol: "BTC".to_string(),
                id: 1,
            }])
            .ticker(bitcoin_ticker()),
        )
    }

    fn event(channel: &Arc<RecordingChannel>, content: &str, is_bot: bool) -> ChatEvent {
        ChatEvent {
            author_id: "42".to_string(),
            author_is_bot: is_bot,
            content: content.to_string(),
            channel: Arc::clone(channel) as Arc<dyn ChatChannel>,
        }
    }

    #[tokio::test]
    async fn test_price_command_end_to_end() {
        let router = router_with(btc_api(), true).await;
        let channel = Arc::new(RecordingChannel::default());

        router.handle(event(&channel, "!price btc", false)).await;

        let replies = channel.sent_replies();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].title, "1. Bitcoin (BTC)");
        assert_eq!(replies[0].description, "$50,000");
        assert_eq!(replies[0].footer_text.as_deref(), Some("+3.2%"));
        assert_eq!(replies[0].color, colors().positive);
        assert!(channel.sent_texts().is_empty());
    }

    #[tokio::test]
    async fn test_price_failure_mentions_the_author() {
        let router = router_with(btc_api(), false).await;
        let channel = Arc::new(RecordingChannel::default());

        // Каталог ещё не загружен
        router.handle(event(&channel, "!price btc", false)).await;

        let texts = channel.sent_texts();
        assert_eq!(texts, vec!["<@42> listings are not loaded yet".to_string()]);
        assert!(channel.sent_replies().is_empty());
    }

    #[tokio::test]
    async fn test_price_without_argument_reports_empty_symbol() {
        let router = router_with(btc_api(), true).await;
        let channel = Arc::new(RecordingChannel::default());

        router.handle(event(&channel, "!price", false)).await;

        assert_eq!(
            channel.sent_texts(),
            vec!["<@42> give me a coin symbol".to_string()]
        );
    }

    #[tokio::test]
    async fn test_help_is_static_regardless_of_args() {
        let router = router_with(btc_api(), true).await;
        let channel = Arc::new(RecordingChannel::default());

        router.handle(event(&channel, "!help", false)).await;
        router.handle(event(&channel, "!help btc whatever", false)).await;

        let replies = channel.sent_replies();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], replies[1]);
        assert_eq!(replies[0].title, "Commands");
        assert_eq!(replies[0].color, colors().neutral);
    }

    #[tokio::test]
    async fn test_ignores_bot_authors() {
        let router = router_with(btc_api(), true).await;
        let channel = Arc::new(RecordingChannel::default());

        router.handle(event(&channel, "!price btc", true)).await;

        assert!(channel.is_silent());
    }

    #[tokio::test]
    async fn test_ignores_messages_without_prefix() {
        let router = router_with(btc_api(), true).await;
        let channel = Arc::new(RecordingChannel::default());

        router.handle(event(&channel, "price btc", false)).await;

        assert!(channel.is_silent());
    }

    #[tokio::test]
    async fn test_ignores_unknown_commands() {
        let router = router_with(btc_api(), true).await;
        let channel = Arc::new(RecordingChannel::default());

        router.handle(event(&channel, "!volume btc", false)).await;

        assert!(channel.is_silent());
    }
}
