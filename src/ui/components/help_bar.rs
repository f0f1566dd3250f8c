//! Contextual key hints for the status bar.

use ratatui::{style::Style, text::Span};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Styled hint spans for `context`.
pub fn context_hint_spans(context: KeyContext) -> Vec<Span<'static>> {
    parse_hints_to_spans(get_context_hints(context))
}

/// Split hint text into spans, styling `[key]` parts apart from descriptions.
fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let key_style = Style::default().fg(t.accent);
    let text_style = Style::default().fg(t.dim);

    let mut spans = Vec::new();
    let mut rest = hints;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), text_style));
        }
        spans.push(Span::styled(rest[open..=close].to_string(), key_style));
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hints_to_spans_simple() {
        let spans = parse_hints_to_spans("[j/k] navigate");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "[j/k]");
    }

    #[test]
    fn test_parse_hints_to_spans_multiple_keys() {
        let spans = parse_hints_to_spans("[Enter] apply  [Esc] cancel");
        // [Enter], " apply  ", [Esc], " cancel"
        assert_eq!(spans.len(), 4);
    }

    #[test]
    fn test_parse_hints_to_spans_empty() {
        assert!(parse_hints_to_spans("").is_empty());
    }

    #[test]
    fn test_parse_hints_to_spans_unclosed_bracket() {
        let spans = parse_hints_to_spans("text [broken");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "text [broken");
    }

    #[test]
    fn test_context_hint_spans_not_empty() {
        assert!(!context_hint_spans(KeyContext::Table).is_empty());
    }
}
