//! Partitioning of a harvested character set into "must be rasterized" vs
//! "already covered by the fallback font".
//!
//! The ignore allow-list is a fixed enumerated table: it names `©`, ASCII
//! alphanumerics/space/punctuation, their full-width forms, and a set of
//! CJK punctuation and quotation marks. Any drift in this set changes which
//! characters get rasterized into the atlas, so the pattern is maintained as
//! an explicit literal, not derived from Unicode categories.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Deduplicated pool of harvested characters.
pub type CharacterSet = BTreeSet<char>;

/// Result of classifying a [`CharacterSet`].
///
/// Both sequences are sorted ascending by Unicode scalar value and are
/// disjoint; their union is the input minus tab and newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedCharacters {
    /// Characters the custom atlas must cover.
    pub accepted: Vec<char>,
    /// Characters assumed covered by a baseline/fallback font.
    pub excluded: Vec<char>,
}

static SKIP: OnceLock<Regex> = OnceLock::new();
static IGNORE: OnceLock<Regex> = OnceLock::new();

/// Characters dropped from both outputs.
fn skip_regex() -> &'static Regex {
    SKIP.get_or_init(|| Regex::new(r"[\t\n]").expect("Failed to compile skip regex"))
}

/// The fixed allow-list of characters the fallback font already covers:
/// copyright sign, ASCII letters/digits/space, ASCII punctuation, the
/// full-width (double-byte) punctuation forms, and CJK punctuation and
/// quotation marks. `-` is escaped so nothing forms an accidental range.
fn ignore_regex() -> &'static Regex {
    IGNORE.get_or_init(|| {
        Regex::new(concat!(
            "[©\t\nA-Za-z0-9 `~!@#$%^&*()\\-_=+\\[{\\]}\\\\|;:'\",<.>/?",
            "｀～！＠＃＄％＾＆＊（）－＿＝＋［］｛｝＼｜；：＇＂，＜．＞／？",
            "｢｣《》｟｠“”･·。｡､、…—]",
        ))
        .expect("Failed to compile ignore regex")
    })
}

/// True when the fallback font is assumed to cover `c`, so the custom atlas
/// need not.
pub fn is_covered_by_fallback(c: char) -> bool {
    let mut buf = [0u8; 4];
    ignore_regex().is_match(c.encode_utf8(&mut buf))
}

/// Split a character set into accepted (rasterize) and excluded (skip)
/// sequences, each sorted ascending by code point. Tab and newline appear in
/// neither.
pub fn classify(chars: &CharacterSet) -> ClassifiedCharacters {
    let mut accepted = Vec::new();
    let mut excluded = Vec::new();

    let mut buf = [0u8; 4];
    for &c in chars {
        let s: &str = c.encode_utf8(&mut buf);
        if skip_regex().is_match(s) {
            continue;
        }
        if ignore_regex().is_match(s) {
            excluded.push(c);
        } else {
            accepted.push(c);
        }
    }

    // BTreeSet iterates in ascending scalar order already; sort anyway so the
    // ordering contract does not depend on the input collection type.
    accepted.sort_unstable();
    excluded.sort_unstable();

    ClassifiedCharacters { accepted, excluded }
}
