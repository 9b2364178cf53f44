use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{ManifestError, Result};

pub const FALLBACK_TITLE: &str = "Untitled App";
pub const FALLBACK_DESCRIPTION: &str = "No description provided.";
pub const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/400x300.png";

/// Turns a folder name like `my_cool-app` into `My Cool App`.
///
/// Hyphens and underscores become spaces, then the first character of every
/// whitespace-delimited word is uppercased. Everything else is left alone, so
/// `hello-WORLD` stays `Hello WORLD`.
pub fn format_title(folder_name: &str) -> String {
    let mut title = String::with_capacity(folder_name.len());
    let mut at_word_start = true;

    for c in folder_name.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_whitespace() {
            at_word_start = true;
            title.push(c);
        } else if at_word_start {
            at_word_start = false;
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
    }

    if title.trim().is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

// Everything `encodeURIComponent` escapes: all but alphanumerics and -_.!~*'()
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Placeholder image whose query carries the percent-encoded title.
pub fn placeholder_url(title: &str) -> String {
    format!(
        "{PLACEHOLDER_BASE}?text={}",
        utf8_percent_encode(title, URI_COMPONENT)
    )
}

/// Orders titles with the Unicode root collation: accents and case only break
/// ties between otherwise equal letters, so `Émile` lands between `Eagle` and `Fox`.
pub struct TitleCollator {
    collator: Collator,
}

impl TitleCollator {
    pub fn new() -> Result<Self> {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|err| ManifestError::Collator(err.to_string()))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}
