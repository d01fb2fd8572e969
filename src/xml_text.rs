//! Tolerant extraction of plain-text content from XML documents.
//!
//! User-supplied corpora are routinely not well-formed (unescaped `&`, stray
//! control bytes), so extraction never hard-fails on malformed markup.
//! Instead it walks an escalation ladder of three tiers, each attempted only
//! when the previous one declined:
//!
//! 1. [`ExtractionTier::Strict`] — parse as well-formed XML, collect text
//!    nodes in document order.
//! 2. [`ExtractionTier::Sanitized`] — strip control characters XML 1.0
//!    forbids, then re-parse.
//! 3. [`ExtractionTier::Untagged`] — pattern-match substrings between a `>`
//!    and the next `<`. This tier does not model nesting; it trades
//!    structural correctness for never raising a parse failure.
//!
//! The tier that produced a result is recorded on the returned
//! [`Extraction`] so callers can distinguish degraded success from a clean
//! parse.

use log::warn;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

/// Which rung of the fallback ladder produced an extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionTier {
    /// The input parsed as well-formed XML on the first attempt.
    Strict,
    /// The input parsed only after disallowed control characters were
    /// stripped.
    Sanitized,
    /// Structural parsing failed twice; text was pattern-matched from
    /// between tags instead.
    Untagged,
}

/// Ordered text content pulled out of one document, plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Trimmed, non-empty text fragments in document order.
    pub texts: Vec<String>,
    /// Ladder rung that produced `texts`.
    pub tier: ExtractionTier,
}

impl Extraction {
    /// True when a tier below [`ExtractionTier::Strict`] was needed.
    pub fn is_degraded(&self) -> bool {
        self.tier != ExtractionTier::Strict
    }
}

static CONTROL_CHARS: OnceLock<Regex> = OnceLock::new();
static BETWEEN_TAGS: OnceLock<Regex> = OnceLock::new();

/// Control characters XML 1.0 disallows (tab/LF/CR stay).
fn control_chars() -> &'static Regex {
    CONTROL_CHARS.get_or_init(|| {
        Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F]").expect("Failed to compile control-char regex")
    })
}

/// Content immediately following a tag close, up to the next tag open.
fn between_tags() -> &'static Regex {
    BETWEEN_TAGS
        .get_or_init(|| Regex::new(r">([^<>]+)<").expect("Failed to compile between-tags regex"))
}

/// Depth-first collection of text nodes under `node`, in document order.
///
/// roxmltree represents element text, tail text, and CDATA content all as
/// text-node children, so walking children in order yields exactly the
/// text/descend/tail sequence.
fn collect_texts(node: roxmltree::Node<'_, '_>, out: &mut Vec<String>) {
    for child in node.children() {
        if child.is_text() {
            if let Some(text) = child.text() {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push(trimmed.to_string());
                }
            }
        } else if child.is_element() {
            collect_texts(child, out);
        }
    }
}

/// Tier 1: well-formed parse, or decline.
fn tier_strict(xml: &str) -> Option<Vec<String>> {
    let doc = roxmltree::Document::parse(xml).ok()?;
    let mut out = Vec::new();
    collect_texts(doc.root(), &mut out);
    Some(out)
}

/// Tier 2: strip disallowed control characters, re-parse, or decline.
fn tier_sanitized(xml: &str) -> Option<Vec<String>> {
    let cleaned = control_chars().replace_all(xml, "");
    tier_strict(&cleaned)
}

/// Tier 3: regex extraction between tags. Never declines.
fn tier_untagged(xml: &str) -> Option<Vec<String>> {
    let cleaned = control_chars().replace_all(xml, "");
    let texts = between_tags()
        .captures_iter(&cleaned)
        .map(|c| c[1].trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    Some(texts)
}

/// The escalation ladder. Each tier runs only if every tier before it
/// declined; the last tier never declines.
const LADDER: &[(ExtractionTier, fn(&str) -> Option<Vec<String>>)] = &[
    (ExtractionTier::Strict, tier_strict),
    (ExtractionTier::Sanitized, tier_sanitized),
    (ExtractionTier::Untagged, tier_untagged),
];

/// Extract ordered text content from an XML string.
///
/// Attribute values and markup are never extracted; CDATA content is treated
/// as ordinary text. Fragments are whitespace-trimmed and empties dropped.
///
/// ```
/// use txt2fnt::xml_text::extract_from_str;
///
/// let e = extract_from_str("<root>hello<b>world</b> tail</root>");
/// assert_eq!(e.texts, ["hello", "world", "tail"]);
/// ```
pub fn extract_from_str(xml: &str) -> Extraction {
    for &(tier, attempt) in LADDER {
        if let Some(texts) = attempt(xml) {
            return Extraction { texts, tier };
        }
    }
    // Unreachable: tier_untagged always returns Some.
    Extraction {
        texts: Vec::new(),
        tier: ExtractionTier::Untagged,
    }
}

/// Extract ordered text content from an XML file.
///
/// Only I/O can fail; malformed XML degrades through the same ladder as
/// [`extract_from_str`]. Bytes that are not valid UTF-8 are decoded
/// permissively (replacement character) rather than failing. A warning is
/// logged when a tier below [`ExtractionTier::Strict`] was needed.
pub fn extract_from_file(path: &Path) -> io::Result<Extraction> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let extraction = extract_from_str(&content);
    if extraction.is_degraded() {
        warn!(
            "XML parse failed for {}; fell back to {:?} extraction",
            path.display(),
            extraction.tier
        );
    }
    Ok(extraction)
}
