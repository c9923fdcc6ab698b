//! Internal link rewriting for rendered pages.
//!
//! Markdown sources cross-reference each other by their `.md` file names.
//! After rendering, those hrefs must point at the generated `.html` files
//! instead, with any `#fragment` suffix carried over.

use regex::Regex;
use std::sync::LazyLock;

/// An anchor href ending in `.md`, optionally followed by a fragment:
/// `href="notes.md"`, `href="guide/setup.md#install"`. Matching is ASCII
/// case-insensitive; the quoted value cannot span quotes.
static MD_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href="(?P<path>[^"]+?)\.md(?P<frag>#[^"]*)?""#).unwrap()
});

/// Rewrite every markdown href in `html` to its `.html` counterpart.
///
/// The path and fragment are preserved verbatim; only the extension is
/// swapped (and lowercased). Hrefs that do not end in `.md` pass through
/// untouched.
pub fn rewrite_md_hrefs(html: &str) -> String {
    MD_HREF_RE
        .replace_all(html, r#"href="${path}.html${frag}""#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_plain_md_link() {
        assert_eq!(
            rewrite_md_hrefs(r#"<a href="notes.md">notes</a>"#),
            r#"<a href="notes.html">notes</a>"#
        );
    }

    #[test]
    fn preserves_fragment() {
        assert_eq!(
            rewrite_md_hrefs(r#"<a href="guide/setup.md#install">setup</a>"#),
            r#"<a href="guide/setup.html#install">setup</a>"#
        );
    }

    #[test]
    fn leaves_non_markdown_hrefs_alone() {
        let html = r#"<a href="a.html">a</a> <a href="https://example.com/b">b</a>"#;
        assert_eq!(rewrite_md_hrefs(html), html);
    }

    #[test]
    fn rewrites_every_occurrence() {
        assert_eq!(
            rewrite_md_hrefs(r#"<a href="a.md">a</a><a href="b.md#top">b</a>"#),
            r#"<a href="a.html">a</a><a href="b.html#top">b</a>"#
        );
    }

    #[test]
    fn matches_case_insensitively() {
        // The rewritten attribute and extension come out lowercase; the
        // path keeps its original case.
        assert_eq!(
            rewrite_md_hrefs(r#"<a HREF="Guide.MD">g</a>"#),
            r#"<a href="Guide.html">g</a>"#
        );
    }

    #[test]
    fn ignores_md_mentions_outside_hrefs() {
        let html = "<p>see notes.md for details</p>";
        assert_eq!(rewrite_md_hrefs(html), html);
    }

    #[test]
    fn only_strips_the_final_md_suffix() {
        assert_eq!(
            rewrite_md_hrefs(r#"<a href="odd.md.md">x</a>"#),
            r#"<a href="odd.md.html">x</a>"#
        );
    }
}
