//! Форматирование котировок в человекочитаемый вид

use super::{ReplyField, ReplyPayload};
use crate::domain::quote::PriceQuote;
use crate::shared::config::{LangCfg, UiColorsCfg};

/// Render a USD price: `$`, thousands-separated integer part, fractional
/// digits verbatim (no rounding).
pub fn format_price(value: f64) -> String {
    let text = value.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("${}{}.{}", sign, grouped, frac),
        None => format!("${}{}", sign, grouped),
    }
}

/// Render a 24h delta; non-negative values (including zero) get a `+`.
pub fn format_delta(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}

/// Цвет ответа по знаку изменения за 24 часа
pub fn select_color(delta: f64, colors: &UiColorsCfg) -> u32 {
    if delta >= 0.0 {
        colors.positive
    } else {
        colors.negative
    }
}

/// Собрать rich-ответ с котировкой
pub fn build_price_reply(quote: &PriceQuote, colors: &UiColorsCfg) -> ReplyPayload {
    ReplyPayload {
        color: select_color(quote.percent_change_24h, colors),
        title: format!("{}. {} ({})", quote.rank, quote.name, quote.symbol),
        description: format_price(quote.price_usd),
        fields: Vec::new(),
        footer_text: Some(format_delta(quote.percent_change_24h)),
    }
}

/// Собрать статический help-ответ
pub fn build_help_reply(colors: &UiColorsCfg, lang: &LangCfg) -> ReplyPayload {
    ReplyPayload {
        color: colors.neutral,
        title: lang.help_title.clone(),
        description: String::new(),
        fields: lang
            .help_fields
            .iter()
            .map(|field| ReplyField {
                name: field.name.clone(),
                value: field.value.clone(),
            })
            .collect(),
        footer_text: None,
    }
}
