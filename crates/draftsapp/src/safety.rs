//! Safety scan for new drafts.
//!
//! Drafts are meant to stay anonymous, so text that obviously points at a
//! person or a place online is turned away before it is stored. This is a
//! best-effort privacy scrub, not PII redaction: it is easy to get around and
//! will occasionally flag harmless text (a year in a thought counts towards the
//! digit limit, for instance).
//!
//! Rules, checked in order against the case-folded text (first hit wins):
//!
//! 1. `http://`, `https://` or `www.` anywhere → [`Rejection::Link`]
//! 2. any `@` → [`Rejection::Handle`]
//! 3. eight or more ASCII digits in total, adjacent or not → [`Rejection::PhoneNumber`]

use std::fmt;

const LINK_MARKERS: [&str; 3] = ["http://", "https://", "www."];
const HANDLE_MARKER: char = '@';
const PHONE_DIGIT_LIMIT: usize = 8;

/// Reason a piece of text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Link,
    Handle,
    PhoneNumber,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Link => write!(f, "Please remove links (no URLs)."),
            Rejection::Handle => {
                write!(f, "Please remove @usernames/handles to keep it anonymous.")
            }
            Rejection::PhoneNumber => write!(
                f,
                "Please remove phone-number-like details to protect privacy."
            ),
        }
    }
}

/// Scans `text` and returns the first rule it trips, if any.
///
/// # Examples
/// ```
/// use draftsapp::safety::{check, Rejection};
///
/// assert_eq!(check("see www.example.com"), Some(Rejection::Link));
/// assert_eq!(check("ask @sam"), Some(Rejection::Handle));
/// assert_eq!(check("555 123 4567"), Some(Rejection::PhoneNumber));
/// assert_eq!(check("I miss our talks"), None);
/// ```
pub fn check(text: &str) -> Option<Rejection> {
    let folded = text.to_lowercase();

    if LINK_MARKERS.iter().any(|marker| folded.contains(marker)) {
        return Some(Rejection::Link);
    }
    if folded.contains(HANDLE_MARKER) {
        return Some(Rejection::Handle);
    }
    let digits = folded.chars().filter(|c| c.is_ascii_digit()).count();
    if digits >= PHONE_DIGIT_LIMIT {
        return Some(Rejection::PhoneNumber);
    }
    None
}
