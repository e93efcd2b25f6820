//! Разбор входящих сообщений в команды

/// Parsed chat command: lower-cased name plus positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parse message content against the configured prefix.
    ///
    /// Returns `None` when the content does not start with the prefix or
    /// holds nothing after it. Tokens are split on runs of whitespace.
    pub fn parse(content: &str, prefix: &str) -> Option<Command> {
        let rest = content.strip_prefix(prefix)?;

        let mut tokens = rest.split_whitespace();
        let name = tokens.next()?.to_lowercase();
        let args = tokens.map(str::to_string).collect();

        Some(Command { name, args })
    }
}
