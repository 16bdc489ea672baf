use crossterm::style::Stylize;

/// Severity of a line shown after an operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Tone {
    Success,
    Error,
    Notice,
}

/// Colour a status line for the terminal, or pass it through untouched when
/// colour is disabled.
pub(crate) fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Error => text.red().to_string(),
        Tone::Notice => text.yellow().to_string(),
    }
}
