//! Search term emphasis in product names.

use regex::RegexBuilder;

use crate::html::SafeHtml;
use crate::sanitize::sanitize_markup;

/// Wrap the first case-insensitive occurrence of `term` in `<strong>`.
///
/// The term is matched literally. The name is returned unchanged when the
/// term is empty or does not occur.
pub fn emphasize_first(name: &str, term: &str) -> String {
    if term.is_empty() {
        return name.to_string();
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return name.to_string();
    };

    match pattern.find(name) {
        Some(m) => format!(
            "{}<strong>{}</strong>{}",
            &name[..m.start()],
            m.as_str(),
            &name[m.end()..]
        ),
        None => name.to_string(),
    }
}

/// Emphasize the term in a product name, then sanitize the result for raw
/// injection.
pub fn highlight_match(name: &str, term: &str) -> SafeHtml {
    sanitize_markup(&emphasize_first(name, term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_only() {
        assert_eq!(
            emphasize_first("Runner runner", "RUN"),
            "<strong>Run</strong>ner runner"
        );
    }

    #[test]
    fn test_term_is_literal() {
        assert_eq!(emphasize_first("Size (XL) tee", "(xl)"), "Size <strong>(XL)</strong> tee");
        assert_eq!(emphasize_first("a.b", ".*"), "a.b");
    }

    #[test]
    fn test_no_match_or_empty() {
        assert_eq!(emphasize_first("Blue Boot", "run"), "Blue Boot");
        assert_eq!(emphasize_first("Blue Boot", ""), "Blue Boot");
    }

    #[test]
    fn test_highlight_sanitizes_name() {
        let html = highlight_match(r#"Runner<img src=x onerror="alert(1)">"#, "runner");
        assert_eq!(html.as_str(), "<strong>Runner</strong><img src=x>");

        let html = highlight_match("Run<script>steal()</script>ner", "run");
        assert_eq!(html.as_str(), "<strong>Run</strong>ner");
    }

    #[test]
    fn test_highlight_strips_slash_separated_handler() {
        let html = highlight_match("Shoe<img/src=x/onerror=alert(1)>", "shoe");
        assert_eq!(html.as_str(), "<strong>Shoe</strong><img/src=x>");
        assert!(!html.as_str().contains("onerror"));
    }

    #[test]
    fn test_highlight_keeps_plain_name() {
        let html = highlight_match("Carry onboard=yes bag", "bag");
        assert_eq!(html.as_str(), "Carry onboard=yes <strong>bag</strong>");
    }
}
