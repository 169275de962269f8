/// Markup-escape a string before it is inserted into any control.
///
/// Catalog text is static and normally literal-safe, but the panel does not
/// assume callers keep it that way. Every option value, option label and
/// section label goes through this transform exactly once at insertion time.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("seriouseats"), "seriouseats");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_markup_characters_escaped() {
        assert_eq!(
            escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape("fish & chips"), "fish &amp; chips");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_ampersand_escaped_first() {
        // An already-escaped entity is escaped again, not passed through.
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }
}
