//! Markup escaping for text and attribute positions.

/// Escape `value` for use in element text or a double-quoted attribute.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Keep a value inside a CSS declaration: drops anything that could close
/// the declaration, the rule or the enclosing `<style>` element.
pub fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';' | '\\' | '"' | '\n' | '\r'))
        .collect()
}

/// Relative paths, fragments, http(s) and mailto targets.
pub fn is_safe_href(value: &str) -> bool {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    (trimmed.starts_with('/') && !trimmed.starts_with("//"))
        || trimmed.starts_with('#')
        || lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("mailto:")
}

/// Escaped link target, or `#` when [`is_safe_href`] rejects it.
pub fn safe_href(value: &str) -> String {
    if is_safe_href(value) {
        escape_html(value.trim())
    } else {
        "#".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
        assert_eq!(escape_html("مرحباً بكم"), "مرحباً بكم");
    }

    #[test]
    fn test_css_value_strips_breakout() {
        assert_eq!(css_value("red;}</style>"), "red/style");
        assert_eq!(css_value("'Tajawal', sans-serif"), "'Tajawal', sans-serif");
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("/products"), "/products");
        assert_eq!(safe_href("#faq"), "#faq");
        assert_eq!(safe_href("https://shop.example/?a=1&b=2"), "https://shop.example/?a=1&amp;b=2");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href(" JavaScript:alert(1)"), "#");
        assert_eq!(safe_href("//evil.example"), "#");
        assert_eq!(safe_href("\"><script>"), "#");
    }
}
