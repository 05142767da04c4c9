//! HTML entity encoding.

/// Encodes the characters that are special in HTML text and attribute values.
///
/// Both quote styles are encoded so the result is safe inside either
/// `"..."` or `'...'` attribute delimiters.
///
/// # Example
///
/// ```rust
/// use tailflash_html::escape;
///
/// assert_eq!(escape("a < b && \"c\""), "a &lt; b &amp;&amp; &quot;c&quot;");
/// ```
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("closeAlert()"), "closeAlert()");
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape("<b>bold</b>"), "&lt;b&gt;bold&lt;/b&gt;");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape(r#"say "hi" & 'bye'"#), "say &quot;hi&quot; &amp; &#039;bye&#039;");
    }

    #[test]
    fn test_escape_entities_are_double_encoded() {
        assert_eq!(escape("&times;"), "&amp;times;");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }
}
