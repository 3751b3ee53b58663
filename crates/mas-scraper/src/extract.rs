//! HTML to visible-text extraction.
//!
//! Regex based, in the same spirit as a permissive `get_text()`: comments and
//! non-visible elements are dropped, every remaining tag is removed, entities
//! are decoded and whitespace collapsed. Document structure is not kept.

use std::sync::LazyLock;

use mas_core::{truncate_chars, MAX_PROMPT_CHARS};
use regex::{Captures, Regex};

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));
static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<![^>]*>|<\?[^>]*>").expect("valid declaration regex"));
/// Attribute run of an open tag. Quoted values may contain `>`.
const ATTRS: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)</?\s*([a-zA-Z][a-zA-Z0-9-]*)\b{ATTRS}>")).expect("valid tag regex")
});
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid entity regex")
});

/// Raw-text elements. An unclosed one swallows the rest of the document,
/// as a browser would.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements whose content is never visible text. The regex crate has no
/// backreferences, so each gets its own pattern.
static HIDDEN_ELEMENT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RAW_TEXT_TAGS
        .iter()
        .map(|tag| format!(r"(?is)<{tag}\b{ATTRS}>.*?(?:</{tag}\s*>|\z)"))
        .chain(
            ["svg", "iframe", "object"]
                .iter()
                .map(|tag| format!(r"(?is)<{tag}\b{ATTRS}>.*?</{tag}\s*>")),
        )
        .map(|pattern| Regex::new(&pattern).expect("valid hidden element regex"))
        .collect()
});

/// Tags that break a line when rendered. Removing them leaves a space so
/// adjacent words do not fuse; inline tags are removed without one.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "li", "main", "nav", "ol", "option", "p", "pre", "section", "table", "td", "th", "title", "tr",
    "ul",
];

/// Strips markup from `html` and returns its visible text as one flat string.
#[must_use]
pub fn extract_visible_text(html: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(html, " ");
    let mut visible = DECLARATION_RE
        .replace_all(&without_comments, " ")
        .into_owned();
    for re in HIDDEN_ELEMENT_RES.iter() {
        visible = re.replace_all(&visible, " ").into_owned();
    }

    let untagged = TAG_RE.replace_all(&visible, |caps: &Captures<'_>| {
        let name = caps[1].to_ascii_lowercase();
        if BLOCK_TAGS.contains(&name.as_str()) {
            " "
        } else {
            ""
        }
    });

    let decoded = decode_entities(&untagged);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes named and numeric character references. Unknown names are left
/// as written.
fn decode_entities(input: &str) -> String {
    ENTITY_RE
        .replace_all(input, |caps: &Captures<'_>| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(body)
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "mdash" => '—',
        "ndash" => '–',
        "hellip" => '…',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "bull" => '•',
        "middot" => '·',
        "euro" => '€',
        "pound" => '£',
        _ => return None,
    };
    Some(c)
}

/// Visible text of one fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub url: String,
    pub text: String,
}

impl PageText {
    #[must_use]
    pub fn from_html(url: &str, html: &str) -> Self {
        Self {
            url: url.to_owned(),
            text: extract_visible_text(html),
        }
    }

    /// The part of the text that goes into a prompt, at most
    /// [`MAX_PROMPT_CHARS`] characters.
    #[must_use]
    pub fn excerpt(&self) -> &str {
        truncate_chars(&self.text, MAX_PROMPT_CHARS)
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.excerpt().len() < self.text.len()
    }
}
