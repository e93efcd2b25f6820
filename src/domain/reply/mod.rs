//! Reply domain - outbound payloads and number formatting

mod formatter;

pub use formatter::{build_help_reply, build_price_reply, format_delta, format_price, select_color};

/// Single name/value field of a rich reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
}

/// Structured rich reply (color, title, description, footer)
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyPayload {
    pub color: u32,
    pub title: String,
    pub description: String,
    pub fields: Vec<ReplyField>,
    pub footer_text: Option<String>,
}
