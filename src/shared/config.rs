use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Настройки чат-платформы
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCfg {
    pub command_prefix: String,
    pub bot_token: String,
}

/// Настройки market API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCfg {
    pub base_url: String,
}

impl Default for ApiCfg {
    fn default() -> Self {
        Self {
            base_url: "https://api.coinmarketcap.com/v2".to_string(),
        }
    }
}

/// Параметры локального лимитера исходящих запросов
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimiterCfg {
    pub limit: u32,
    pub timespan_ms: u64,
}

/// Цвета rich-ответов
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UiColorsCfg {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

/// Одно поле help-ответа
#[derive(Debug, Clone, Deserialize)]
pub struct HelpField {
    pub name: String,
    pub value: String,
}

/// Языковые строки для ответов пользователю
#[derive(Debug, Clone, Deserialize)]
pub struct LangCfg {
    pub no_listings: String,
    pub no_symbol: String,
    pub invalid_symbol: String,
    pub too_many_requests: String,
    pub no_data: String,
    pub help_title: String,
    #[serde(default)]
    pub help_fields: Vec<HelpField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub chat: ChatCfg,
    #[serde(default)]
    pub api: ApiCfg,
    pub rate_limiter: RateLimiterCfg,
    pub ui_colors: UiColorsCfg,
    pub lang: LangCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read config file {}", path.as_ref().display()))?;
        let cfg: Self = toml::from_str(&s).context("parse Config.toml")?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [chat]
        command_prefix = "!"
        bot_token = "token"

        [rate_limiter]
        limit = 30
        timespan_ms = 60000

        [ui_colors]
        positive = 0x2ECC71
        negative = 0xE74C3C
        neutral = 0x3498DB

        [lang]
        no_listings = "no listings"
        no_symbol = "no symbol"
        invalid_symbol = "invalid symbol"
        too_many_requests = "too many requests"
        no_data = "no data"
        help_title = "Commands"

        [[lang.help_fields]]
        name = "!price <symbol>"
        value = "Current USD price"
    "#;

    #[test]
    fn test_parse_full_config() {
        let cfg: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(cfg.chat.command_prefix, "!");
        assert_eq!(cfg.rate_limiter.limit, 30);
        assert_eq!(cfg.rate_limiter.timespan_ms, 60000);
        assert_eq!(cfg.ui_colors.positive, 0x2ECC71);
        assert_eq!(cfg.lang.help_fields.len(), 1);
        // [api] отсутствует - берём дефолтный base_url
        assert_eq!(cfg.api.base_url, "https://api.coinmarketcap.com/v2");
    }
}
