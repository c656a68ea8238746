//! Script and event-handler stripping for injected markup.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::html::SafeHtml;

/// `<script ...> ... </script>`, shortest match, across lines.
static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>").expect("script block pattern is valid")
});

/// An opening tag with its attributes, quoted values included. An
/// unterminated tag runs to the end of the input.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<[A-Za-z][^>"']*(?:(?:"[^"]*"|'[^']*')[^>"']*)*>?"#)
        .expect("open tag pattern is valid")
});

/// Inline handler attributes: `onclick="..."`, `onload='...'`, `onerror=x`.
/// Whitespace and `/` both separate attributes.
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)[\s/]+on\w+\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>"']+)"#)
        .expect("event handler pattern is valid")
});

/// Remove `<script>` blocks until none remain.
///
/// A single pass can splice a new block together out of the fragments
/// around a removed one, so removal repeats until the pattern stops matching.
pub fn strip_scripts(html: &str) -> String {
    let mut current = html.to_string();
    while SCRIPT_BLOCK.is_match(&current) {
        current = SCRIPT_BLOCK.replace_all(&current, "").into_owned();
    }
    current
}

/// Remove inline event-handler attributes until none remain.
///
/// Only text inside tags is touched; `onboard=yes` in a product name stays.
pub fn strip_event_handlers(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let next = OPEN_TAG
            .replace_all(&current, |caps: &Captures| {
                EVENT_HANDLER.replace_all(&caps[0], "").into_owned()
            })
            .into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Sanitize markup for raw injection.
///
/// Both strip passes run until neither changes the input, so sanitizing
/// already sanitized markup returns it unchanged.
pub fn sanitize_markup(html: &str) -> SafeHtml {
    let mut current = html.to_string();
    loop {
        let next = strip_event_handlers(&strip_scripts(&current));
        if next == current {
            return SafeHtml::from_sanitized(current);
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_onerror() {
        let safe = sanitize_markup(r#"<img src=x onerror="alert(1)">"#);
        assert_eq!(safe.as_str(), "<img src=x>");
    }

    #[test]
    fn test_removes_handler_variants() {
        assert_eq!(
            sanitize_markup(r#"<a href="/p" onClick='steal()' onmouseover=go()>x</a>"#).as_str(),
            r#"<a href="/p">x</a>"#
        );
        assert_eq!(sanitize_markup("<svg/onload=alert(1)>").as_str(), "<svg>");
        assert_eq!(
            sanitize_markup("Shoe<img/src=x/onerror=alert(1)>").as_str(),
            "Shoe<img/src=x>"
        );
        assert_eq!(
            sanitize_markup(r#"<a title="x>y" onclick="go()">z</a>"#).as_str(),
            r#"<a title="x>y">z</a>"#
        );
    }

    #[test]
    fn test_handler_text_outside_tags_kept() {
        for text in ["Carry onboard=yes bag", "Size 5 < 6 online=true", "a>b onset=1"] {
            assert_eq!(sanitize_markup(text).as_str(), text);
        }
        assert_eq!(
            sanitize_markup(r#"Carry onboard=yes <b onclick="x()">bag</b>"#).as_str(),
            "Carry onboard=yes <b>bag</b>"
        );
    }

    #[test]
    fn test_removes_script_block() {
        let safe = sanitize_markup("Red <script>alert('x')</script>Runner");
        assert_eq!(safe.as_str(), "Red Runner");

        let safe = sanitize_markup("a<SCRIPT type=\"text/javascript\">\nalert(1)\n</SCRIPT >b");
        assert_eq!(safe.as_str(), "ab");
    }

    #[test]
    fn test_removes_spliced_script() {
        // Removing the inner block leaves `<script>alert(1)</script>` behind.
        let safe = sanitize_markup("<scr<script>x</script>ipt>alert(1)</script>");
        assert_eq!(safe.as_str(), "");
    }

    #[test]
    fn test_nested_script_content_removed() {
        let safe = sanitize_markup("<script><script>alert(1)</script></script>ok");
        assert!(!safe.as_str().contains("alert"));
        assert!(!safe.as_str().to_lowercase().contains("<script"));
        assert!(safe.as_str().ends_with("ok"));
    }

    #[test]
    fn test_handler_spliced_by_removal() {
        let safe = sanitize_markup(r#"<a on onx="1"click="y">z</a>"#);
        assert!(!safe.as_str().contains("onclick"), "{}", safe);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            r#"<strong>Red</strong> Runner"#,
            r#"<img src=x onerror="alert(1)">"#,
            "<scr<script>x</script>ipt>alert(1)</script>",
            r#"<a on onx="1"click="y">z</a>"#,
            "<svg/onload=alert(1)>",
            "<img/src=x/onerror=alert(1)>",
            "Carry onboard=yes bag",
            "plain text",
        ];
        for input in inputs {
            let once = sanitize_markup(input);
            let twice = sanitize_markup(once.as_str());
            assert_eq!(once, twice, "{input}");
        }
    }

    #[test]
    fn test_leaves_safe_markup() {
        let markup = "Red <strong>Run</strong>ner";
        assert_eq!(sanitize_markup(markup).as_str(), markup);
    }
}
