//! Footer extraction: split a Markdown document on its "Footer" heading and
//! harvest the links written under it.
//!
//! Content authors end the home page with a heading whose text is exactly
//! "Footer" (any `#` level, any case) followed by a handful of Markdown
//! links. That section is not rendered; instead its links feed the footer
//! UI. Everything before the heading is the page body.
//!
//! The transform is lossy on purpose: the heading line and any footer prose
//! around the links are discarded, never round-tripped.
//!
//! # Example
//!
//! ```rust
//! use hortus_content::footer::split_footer;
//!
//! let doc = "Body text\n# Footer\n[a](http://x)\n[b](http://y)";
//! let split = split_footer(doc);
//! assert_eq!(split.body, "Body text");
//! assert_eq!(split.links.len(), 2);
//! assert_eq!(split.links[1].url, "http://y");
//! ```

use hortus_core::FooterLink;
use regex::Regex;

/// Result of splitting a Markdown document on its footer heading.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterSplit {
    /// The document body: everything before the footer heading, trimmed.
    /// When no footer heading exists this is the input, unchanged.
    pub body: String,
    /// Links harvested from the footer section, in order of appearance.
    /// Empty when there is no footer heading or the section has no links.
    pub links: Vec<FooterLink>,
}

/// Split `markdown` into a body and the links of its footer section.
///
/// Detection looks for the first line-initial heading whose trimmed text is
/// "Footer" (case-insensitive), anchored by line breaks on both sides. Only
/// the first such heading is a split point; later "Footer" headings are
/// ordinary text, and links are harvested from everything after the first
/// heading.
///
/// Total over all inputs: no footer heading means the input comes back as
/// the body with no links, and malformed link syntax simply does not match.
pub fn split_footer(markdown: &str) -> FooterSplit {
    // Same pattern the content convention was written against: a heading
    // line for "Footer" surrounded by line breaks. A document *starting*
    // with the heading has no leading break and is not split.
    let heading_re = Regex::new(r"(?i)\n#+\s*footer\s*\n").expect("Invalid footer heading regex");

    let Some(m) = heading_re.find(markdown) else {
        return FooterSplit {
            body: markdown.to_string(),
            links: Vec::new(),
        };
    };

    let body = markdown[..m.start()].trim().to_string();
    let footer_section = &markdown[m.end()..];

    FooterSplit {
        body,
        links: harvest_links(footer_section),
    }
}

/// Collect all `[name](url)` links in `text`, left to right.
///
/// Duplicates are preserved; unbalanced brackets or parens simply fail to
/// match.
fn harvest_links(text: &str) -> Vec<FooterLink> {
    let link_re = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid markdown link regex");

    link_re
        .captures_iter(text)
        .map(|caps| FooterLink::new(&caps[1], &caps[2]))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Detection tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_no_footer_heading_passes_through() {
        let doc = "# A title\n\nSome prose with a [link](https://example.com).\n";
        let split = split_footer(doc);
        assert_eq!(split.body, doc);
        assert!(split.links.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let split = split_footer("");
        assert_eq!(split.body, "");
        assert!(split.links.is_empty());
    }

    #[test]
    fn test_basic_split() {
        let doc = "Body text\n# Footer\n[a](http://x)\n[b](http://y)";
        let split = split_footer(doc);
        assert_eq!(split.body, "Body text");
        assert_eq!(
            split.links,
            vec![
                FooterLink::new("a", "http://x"),
                FooterLink::new("b", "http://y"),
            ]
        );
    }

    #[test]
    fn test_footer_without_links() {
        let split = split_footer("Intro\n## Footer\nNo links here.");
        assert_eq!(split.body, "Intro");
        assert!(split.links.is_empty());
    }

    #[test]
    fn test_heading_level_and_case_are_ignored() {
        let split = split_footer("Hello\n### fOoTeR \n[x](u)\n");
        assert_eq!(split.body, "Hello");
        assert_eq!(split.links, vec![FooterLink::new("x", "u")]);
    }

    #[test]
    fn test_heading_must_end_with_a_line_break() {
        // No trailing newline after the heading line, so nothing to split on.
        let doc = "Body\n# Footer";
        let split = split_footer(doc);
        assert_eq!(split.body, doc);
        assert!(split.links.is_empty());
    }

    #[test]
    fn test_heading_inside_a_line_is_not_a_split_point() {
        let doc = "See the # Footer heading below\nfor details [a](b)\n";
        let split = split_footer(doc);
        assert_eq!(split.body, doc);
        assert!(split.links.is_empty());
    }

    #[test]
    fn test_body_is_trimmed_but_passthrough_is_not() {
        let split = split_footer("  spaced body  \n# Footer\n[a](b)\n");
        assert_eq!(split.body, "spaced body");

        let untouched = "  spaced body, no footer  ";
        assert_eq!(split_footer(untouched).body, untouched);
    }

    // ------------------------------------------------------------------------
    // First-match semantics
    // ------------------------------------------------------------------------

    #[test]
    fn test_two_footer_headings_split_on_first() {
        let doc = "Body\n# Footer\n[a](1)\n# Footer\n[b](2)\n";
        let split = split_footer(doc);
        assert_eq!(split.body, "Body");
        // Links past the second heading are harvested too; the second
        // heading gets no special treatment.
        assert_eq!(
            split.links,
            vec![FooterLink::new("a", "1"), FooterLink::new("b", "2")]
        );
    }

    #[test]
    fn test_idempotent_on_returned_body() {
        let doc = "Body one\n\nBody two\n## Footer\n[a](1)\n";
        let first = split_footer(doc);
        let second = split_footer(&first.body);
        assert_eq!(second.body, first.body);
        assert!(second.links.is_empty());
    }

    // ------------------------------------------------------------------------
    // Link harvesting tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_links_keep_source_order() {
        let doc = "x\n# Footer\nintro text [z](3) then [a](1), then [m](2)\n";
        let names: Vec<String> = split_footer(doc)
            .links
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_links_are_preserved() {
        let doc = "x\n# Footer\n[a](1) [a](1) [a](2)\n";
        let split = split_footer(doc);
        assert_eq!(split.links.len(), 3);
        assert_eq!(split.links[0], split.links[1]);
    }

    #[test]
    fn test_malformed_links_do_not_match() {
        let doc = "x\n# Footer\n[broken(http://x) [also broken]\n[ok](u)\n";
        let split = split_footer(doc);
        assert_eq!(split.links, vec![FooterLink::new("ok", "u")]);
    }

    #[test]
    fn test_links_before_the_heading_are_not_harvested() {
        let doc = "[body link](b)\n# Footer\n[footer link](f)\n";
        let split = split_footer(doc);
        assert_eq!(split.links, vec![FooterLink::new("footer link", "f")]);
    }

    // ------------------------------------------------------------------------
    // Property tests
    // ------------------------------------------------------------------------

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Total over arbitrary unicode input.
            #[test]
            fn test_never_panics(s in "\\PC*") {
                let _ = split_footer(&s);
            }

            // Without a '#' there can be no footer heading, so the input
            // passes through unchanged.
            #[test]
            fn test_passthrough_without_hash(s in "[a-zA-Z0-9 .,\n\\[\\]()]*") {
                let split = split_footer(&s);
                prop_assert_eq!(&split.body, &s);
                prop_assert!(split.links.is_empty());
            }
        }
    }
}
