use log::debug;
use regex::Regex;

use crate::models::{Field, NormalizedText};
use crate::processing::normalizer;

/// One face of the card: the raw transcription plus its normalized forms.
#[derive(Debug, Clone)]
pub struct DocumentSide<'a> {
    pub raw: &'a str,
    pub text: NormalizedText,
}

impl<'a> DocumentSide<'a> {
    pub fn new(raw: &'a str) -> Self {
        DocumentSide {
            raw,
            text: normalizer::normalize(raw),
        }
    }

    pub fn collapsed(&self) -> &str {
        &self.text.collapsed
    }

    pub fn lines(&self) -> &[String] {
        &self.text.lines
    }
}

/// A single named attempt at a field. Attempts are pure and never fail;
/// `None` means "try the next one".
#[derive(Clone, Copy)]
pub struct Strategy {
    pub name: &'static str,
    pub attempt: fn(&DocumentSide<'_>) -> Option<String>,
}

impl Strategy {
    pub const fn new(name: &'static str, attempt: fn(&DocumentSide<'_>) -> Option<String>) -> Self {
        Strategy { name, attempt }
    }
}

/// Runs `strategies` left to right and returns the first value produced.
pub fn first_success(field: Field, side: &DocumentSide<'_>, strategies: &[Strategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| {
        let value = (strategy.attempt)(side)?;
        debug!("{} resolved by '{}' strategy: {:?}", field, strategy.name, value);
        Some(value)
    })
}

/// Text of the first capture group of `pattern` in `text`, if any.
pub fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|matched| matched.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never(_: &DocumentSide<'_>) -> Option<String> {
        None
    }

    fn first_line(side: &DocumentSide<'_>) -> Option<String> {
        side.lines().first().cloned()
    }

    fn whole_text(side: &DocumentSide<'_>) -> Option<String> {
        Some(side.collapsed().to_string())
    }

    #[test]
    fn test_first_success_short_circuits_in_order() {
        let side = DocumentSide::new("alpha\nbeta");
        let strategies = [
            Strategy::new("never", never),
            Strategy::new("first line", first_line),
            Strategy::new("whole text", whole_text),
        ];
        assert_eq!(first_success(Field::Name, &side, &strategies), Some("alpha".to_string()));
    }

    #[test]
    fn test_first_success_exhausted() {
        let side = DocumentSide::new("");
        let strategies = [Strategy::new("never", never), Strategy::new("first line", first_line)];
        assert_eq!(first_success(Field::Name, &side, &strategies), None);
    }

    #[test]
    fn test_capture_returns_first_group() {
        let pattern = Regex::new(r"id=(\d+)").unwrap();
        assert_eq!(capture(&pattern, "x id=42 id=7"), Some("42".to_string()));
        assert_eq!(capture(&pattern, "nothing"), None);
    }
}
