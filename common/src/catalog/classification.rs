//! # Item Classification
//!
//! The closed set of descriptive categories an item can carry.
//!
//! A classification is metadata only: it never influences lending policy
//! (an encyclopedia may circulate as a digital pool, a comic as a single
//! physical copy).

use std::fmt;
use std::str::FromStr;

/// Descriptive category of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    EBook,
    Audiobook,
    Hardback,
    Paperback,
    Encyclopedia,
    Magazine,
    Comic,
}

impl Classification {
    /// Menu ordering. Ordinals accepted by [`FromStr`] are 1-based
    /// indexes into this array.
    pub const ALL: [Classification; 7] = [
        Classification::EBook,
        Classification::Audiobook,
        Classification::Hardback,
        Classification::Paperback,
        Classification::Encyclopedia,
        Classification::Magazine,
        Classification::Comic,
    ];

    /// Human-readable label, as shown in menus and catalog trees.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::EBook => "E-book",
            Classification::Audiobook => "Audiobook",
            Classification::Hardback => "Hardback",
            Classification::Paperback => "Paperback",
            Classification::Encyclopedia => "Encyclopedia",
            Classification::Magazine => "Magazine",
            Classification::Comic => "Comic",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Classification {
    type Err = String;

    /// Parses a string into a `Classification`.
    ///
    /// Supported forms:
    /// * **Names**: "ebook", "audiobook", "hardback", ... (case-insensitive,
    ///   with the common hyphenated/spaced aliases).
    /// * **Ordinals**: "1" through "7", matching the menu order in
    ///   [`Classification::ALL`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        if let Some(classification) = parse_ordinal(&lower) {
            return Ok(classification);
        }

        match lower.as_str() {
            "ebook" | "e-book" | "e book" => Ok(Classification::EBook),
            "audiobook" | "audio-book" | "audio book" => Ok(Classification::Audiobook),
            "hardback" | "hardcover" => Ok(Classification::Hardback),
            "paperback" => Ok(Classification::Paperback),
            "encyclopedia" | "encyclopaedia" => Ok(Classification::Encyclopedia),
            "magazine" => Ok(Classification::Magazine),
            "comic" => Ok(Classification::Comic),
            _ => Err(format!("invalid classification: {s}")),
        }
    }
}

/// Parses a 1-based menu ordinal like "3".
fn parse_ordinal(s: &str) -> Option<Classification> {
    let n: usize = s.parse().ok()?;
    if (1..=Classification::ALL.len()).contains(&n) {
        Some(Classification::ALL[n - 1])
    } else {
        None
    }
}
