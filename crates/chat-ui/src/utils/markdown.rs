use yew::prelude::*;

/// Markdown-lite used for plain assistant replies
///
/// The text is escaped first; only bold, italic and line breaks are turned
/// back into markup afterwards.
pub fn format_plain_text(content: &str) -> String {
    let escaped = html_escape(content);
    let bolded = replace_delimited(&escaped, "**", "<strong>", "</strong>");
    let emphasized = replace_delimited(&bolded, "*", "<em>", "</em>");
    emphasized.replace('\n', "<br>")
}

/// Wrap an already rendered fragment for display
pub fn render_html(fragment: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(fragment.to_string()))
}

/// Replace `delimiter`-wrapped spans with tags
///
/// Matches are leftmost and shortest, may be empty, and never cross a line
/// break. An opener without a closer on its line is left as text.
fn replace_delimited(text: &str, delimiter: &str, open_tag: &str, close_tag: &str) -> String {
    let step = delimiter.chars().next().map_or(1, char::len_utf8);
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delimiter) {
        result.push_str(&rest[..start]);
        let inner = &rest[start + delimiter.len()..];
        let line_end = inner.find('\n').unwrap_or(inner.len());

        match inner[..line_end].find(delimiter) {
            Some(end) => {
                result.push_str(open_tag);
                result.push_str(&inner[..end]);
                result.push_str(close_tag);
                rest = &inner[end + delimiter.len()..];
            }
            None => {
                result.push_str(&rest[start..start + step]);
                rest = &rest[start + step..];
            }
        }
    }

    result.push_str(rest);
    result
}

pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(format_plain_text("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(format_plain_text("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(format_plain_text("line1\nline2"), "line1<br>line2");
    }

    #[test]
    fn test_bold_and_italic_in_one_line() {
        assert_eq!(
            format_plain_text("Fly **direct** or *via* Madrid"),
            "Fly <strong>direct</strong> or <em>via</em> Madrid"
        );
    }

    #[test]
    fn test_markers_do_not_span_lines() {
        // Unclosed bold leaves `**`, which the italic pass reads as empty emphasis
        assert_eq!(
            format_plain_text("**open\nclose**"),
            "<em></em>open<br>close<em></em>"
        );
        assert_eq!(format_plain_text("* one\n* two"), "* one<br>* two");
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        assert_eq!(format_plain_text("5 * 3 = 15"), "5 * 3 = 15");
        assert_eq!(format_plain_text("**a* b"), "<em></em>a* b");
    }

    #[test]
    fn test_shortest_match_wins() {
        assert_eq!(
            format_plain_text("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_markup_is_escaped_before_formatting() {
        assert_eq!(
            format_plain_text("<script>alert('x')</script> **ok**"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; <strong>ok</strong>"
        );
        assert_eq!(
            format_plain_text("**<img src=x onerror=y>**"),
            "<strong>&lt;img src=x onerror=y&gt;</strong>"
        );
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"a & "b""#), "a &amp; &quot;b&quot;");
    }
}
