//! Handwriting normalization.
//!
//! Rules, applied character by character:
//! - `-`, `_` and any whitespace become a word break
//! - letters are uppercased at the start of a word and lowercased elsewhere
//! - everything else (digits, punctuation) is dropped and does not start a
//!   new word
//!
//! Runs of word breaks collapse to a single space and the result is trimmed.

use crate::error::{NameError, Result};

/// Returns `true` for characters that separate words.
pub fn is_separator(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_whitespace()
}

/// Normalize a handwritten name into its canonical display form.
///
/// # Examples
///
/// ```
/// use cookbook_names::normalize;
///
/// assert_eq!(normalize("hamburger-Bun_").unwrap(), "Hamburger Bun");
/// assert_eq!(normalize("BEEF").unwrap(), "Beef");
/// assert_eq!(normalize("French truffle3").unwrap(), "French Truffle");
/// assert!(normalize("   ").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    let mut scanned = String::with_capacity(raw.len());
    let mut word_start = true;

    for ch in raw.chars() {
        if is_separator(ch) {
            scanned.push(' ');
            word_start = true;
        } else if ch.is_alphabetic() {
            if word_start {
                // Only the first char of a multi-char uppercase keeps its case.
                let mut upper = ch.to_uppercase();
                if let Some(first) = upper.next() {
                    scanned.push(first);
                }
                push_lowercase(&mut scanned, upper);
                word_start = false;
            } else {
                push_lowercase(&mut scanned, std::iter::once(ch));
            }
        }
    }

    let words: Vec<&str> = scanned.split(' ').filter(|w| !w.is_empty()).collect();
    if words.is_empty() {
        tracing::debug!(input = raw, "name normalized to nothing");
        return Err(NameError::InvalidName {
            input: raw.to_string(),
        });
    }

    Ok(words.join(" "))
}

fn push_lowercase(out: &mut String, chars: impl Iterator<Item = char>) {
    out.extend(
        chars
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphabetic()),
    );
}
