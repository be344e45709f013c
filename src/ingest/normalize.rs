use regex::Regex;

/// Placeholder many tabular exports write for a null cell.
const NULL_PLACEHOLDER: &str = "nan";

/// Cleans raw CSV cell text: strips tag-like spans, collapses whitespace,
/// and maps null placeholders to the empty string.
///
/// Compile once per run and reuse for every field.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tag: Regex,
    whitespace: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Regex::new(r"<[^>]+>").expect("tag pattern must compile"),
            whitespace: Regex::new(r"\s+").expect("whitespace pattern must compile"),
        }
    }

    /// Normalize an optional field value.
    ///
    /// `None`, `""` and any casing of `"nan"` yield `""`. Otherwise every
    /// `<...>` span becomes a space, whitespace runs collapse to one space,
    /// and the result is trimmed. A result that is itself `"nan"` is also
    /// emptied so that cleaning twice equals cleaning once.
    #[must_use]
    pub fn clean(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };
        if is_null(raw) {
            return String::new();
        }

        let untagged = self.tag.replace_all(raw, " ");
        let collapsed = self.whitespace.replace_all(&untagged, " ");
        let cleaned = collapsed.trim();

        if is_null(cleaned) {
            String::new()
        } else {
            cleaned.to_string()
        }
    }
}

/// Empty or a null placeholder.
fn is_null(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(NULL_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n() -> Normalizer {
        Normalizer::new()
    }

    #[test]
    fn absent_and_empty_are_empty() {
        assert_eq!(n().clean(None), "");
        assert_eq!(n().clean(Some("")), "");
    }

    #[test]
    fn nan_in_any_case_is_empty() {
        for raw in ["nan", "NaN", "NAN", "nAn"] {
            assert_eq!(n().clean(Some(raw)), "", "{raw}");
        }
    }

    #[test]
    fn nan_inside_text_is_kept() {
        assert_eq!(n().clean(Some("banana")), "banana");
        assert_eq!(n().clean(Some("nan bread")), "nan bread");
    }

    #[test]
    fn padded_or_tagged_nan_is_empty() {
        assert_eq!(n().clean(Some("  nan \n")), "");
        assert_eq!(n().clean(Some("<b>NaN</b>")), "");
    }

    #[test]
    fn strips_tags_with_a_space() {
        assert_eq!(n().clean(Some("Build <b>stuff</b>")), "Build stuff");
        assert_eq!(n().clean(Some("one<br/>two")), "one two");
        assert_eq!(
            n().clean(Some("<p class=\"x\">Hello</p><ul><li>Rust</li></ul>")),
            "Hello Rust"
        );
    }

    #[test]
    fn tags_may_span_lines() {
        assert_eq!(n().clean(Some("a<div\nclass='x'>b")), "a b");
    }

    #[test]
    fn empty_brackets_are_not_a_tag() {
        assert_eq!(n().clean(Some("a <> b")), "a <> b");
        assert_eq!(n().clean(Some("x < y")), "x < y");
    }

    #[test]
    fn collapses_all_whitespace_kinds() {
        assert_eq!(
            n().clean(Some("  lead\t\ttabs\n\nnewlines \r\n end  ")),
            "lead tabs newlines end"
        );
    }

    #[test]
    fn tag_only_input_is_empty() {
        assert_eq!(n().clean(Some("<br><br/>  <p></p>")), "");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "Build <b>stuff</b>",
            "  nan  ",
            "<<a>b>",
            "a <> b > c",
            "x\u{00a0}\u{2003}y",
            "<i>  spaced   out </i> text\n",
            "plain",
        ];
        for raw in inputs {
            let once = n().clean(Some(raw));
            let twice = n().clean(Some(&once));
            assert_eq!(once, twice, "{raw:?}");
        }
    }

    #[test]
    fn output_has_no_tags_or_double_whitespace() {
        let tag = Regex::new(r"<[^>]+>").unwrap();
        let inputs = [
            "<h1>Title</h1>\n\n<p>Para   one</p>\t<p>two</p>",
            "<<nested>> tags",
            "tail <open",
        ];
        for raw in inputs {
            let out = n().clean(Some(raw));
            assert!(!tag.is_match(&out), "{out:?}");
            let chars: Vec<char> = out.chars().collect();
            assert!(
                chars
                    .windows(2)
                    .all(|w| !(w[0].is_whitespace() && w[1].is_whitespace())),
                "{out:?}"
            );
        }
    }
}
