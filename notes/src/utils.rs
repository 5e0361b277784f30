use crate::types::MODULE_PLACEHOLDER;
use once_cell::sync::Lazy;
use regex::Regex;

pub static MODULE_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("Failed to compile module tag regex"));

/// Module name and note body after the bracketed tag was taken out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTag {
    pub module: String,
    pub body: String,
}

/// Splits a note into its module tag and body.
///
/// The first `[...]` names the module. Every bracketed tag is then removed
/// and the rest trimmed. Without brackets the body is returned untouched.
#[must_use]
pub fn extract_module(note: &str) -> ModuleTag {
    match MODULE_TAG_PATTERN.captures(note) {
        Some(captures) => ModuleTag {
            module: captures[1].to_string(),
            body: MODULE_TAG_PATTERN.replace_all(note, "").trim().to_string(),
        },
        None => ModuleTag {
            module: MODULE_PLACEHOLDER.to_string(),
            body: note.to_string(),
        },
    }
}

/// Escapes text for inclusion in HTML element content
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_leading_tag() {
        let tag = extract_module("[Auth] Fixed login timeout");
        assert_eq!(tag.module, "Auth");
        assert_eq!(tag.body, "Fixed login timeout");
    }

    #[test]
    fn test_extract_tag_in_middle() {
        let tag = extract_module("Fixed [Billing] invoice rounding ");
        assert_eq!(tag.module, "Billing");
        assert_eq!(tag.body, "Fixed  invoice rounding");
    }

    #[test]
    fn test_first_tag_wins_and_all_tags_removed() {
        let tag = extract_module("[Core][UI] Reworked the dashboard");
        assert_eq!(tag.module, "Core");
        assert_eq!(tag.body, "Reworked the dashboard");
    }

    #[test]
    fn test_no_tag_keeps_body_unchanged() {
        let tag = extract_module("  Plain note without module ");
        assert_eq!(tag.module, MODULE_PLACEHOLDER);
        assert_eq!(tag.body, "  Plain note without module ");
    }

    #[test]
    fn test_unclosed_bracket_falls_back_to_placeholder() {
        let tag = extract_module("[Auth Fixed login");
        assert_eq!(tag.module, MODULE_PLACEHOLDER);
        assert_eq!(tag.body, "[Auth Fixed login");
    }

    #[test]
    fn test_empty_tag_yields_empty_module() {
        let tag = extract_module("[] Something");
        assert_eq!(tag.module, "");
        assert_eq!(tag.body, "Something");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#x27;b&#x27;&lt;/b&gt;"
        );
    }
}
