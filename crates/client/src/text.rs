//! Text helpers for the render layer.

/// Escape text for insertion into raw HTML.
///
/// Anything user- or server-supplied that ends up in an `inner_html` sink
/// must pass through here first. Regular rsx text nodes are escaped by the
/// framework already.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_script_tags_to_literal_text() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_html("who voted for omar?"), "who voted for omar?");
    }
}
