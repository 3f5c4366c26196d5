//! Source-system tagged identifiers.
//!
//! Callers address journal entries and cases with a string of the form
//! `<prefix>-<id>`, where the prefix names the system that owns the record:
//!
//! | prefix  | system                                   | id      |
//! |---------|------------------------------------------|---------|
//! | `bid`   | bidrag-dokument-journalpost (system A)   | numeric |
//! | `joark` | bidrag-dokument-arkiv (system B)         | numeric |
//! | `gsak`  | legacy case numbering                    | opaque  |
//!
//! ```
//! # use dokument_core::identifier::{parse, SourceSystem};
//! let id = parse("bid-101").unwrap();
//! assert_eq!(id.source_system(), SourceSystem::Bidrag);
//! assert_eq!(id.raw_id(), "101");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Separates the source-system prefix from the id.
pub const DELIMITER: char = '-';

pub const PREFIX_BIDRAG: &str = "bid";
pub const PREFIX_JOARK: &str = "joark";
pub const PREFIX_GSAK: &str = "gsak";

/// The system a tagged identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceSystem {
    /// bidrag-dokument-journalpost
    Bidrag,
    /// bidrag-dokument-arkiv (joark)
    Joark,
    /// Legacy case numbering (gsak)
    Gsak,
    /// Prefix not recognised. Never produced by [`parse`].
    Unknown,
}

impl SourceSystem {
    /// Map a prefix to its system. Matching is exact and case-sensitive.
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            PREFIX_BIDRAG => SourceSystem::Bidrag,
            PREFIX_JOARK => SourceSystem::Joark,
            PREFIX_GSAK => SourceSystem::Gsak,
            _ => SourceSystem::Unknown,
        }
    }

    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            SourceSystem::Bidrag => Some(PREFIX_BIDRAG),
            SourceSystem::Joark => Some(PREFIX_JOARK),
            SourceSystem::Gsak => Some(PREFIX_GSAK),
            SourceSystem::Unknown => None,
        }
    }

    /// Whether ids in this system must be decimal integers
    pub fn has_numeric_ids(&self) -> bool {
        matches!(self, SourceSystem::Bidrag | SourceSystem::Joark)
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().unwrap_or("unknown"))
    }
}

/// Errors from [`parse`]. Both are caused by caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown source system: {0}")]
    UnknownSourceSystem(String),

    #[error("Invalid id for {system}: {id}")]
    InvalidId { system: SourceSystem, id: String },
}

/// A parsed `<prefix>-<id>` identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedIdentifier {
    source_system: SourceSystem,
    raw_id: String,
}

impl TaggedIdentifier {
    pub fn source_system(&self) -> SourceSystem {
        self.source_system
    }

    /// The id with the prefix and delimiter stripped
    pub fn raw_id(&self) -> &str {
        &self.raw_id
    }

    pub fn is_for(&self, system: SourceSystem) -> bool {
        self.source_system == system
    }
}

impl fmt::Display for TaggedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.source_system, DELIMITER, self.raw_id)
    }
}

impl FromStr for TaggedIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parse a tagged identifier.
///
/// The string is split on the first [`DELIMITER`]; without a delimiter the
/// whole string is treated as the prefix. The ids `.` and `..` are rejected
/// for every system, as no backend path can carry them.
pub fn parse(raw: &str) -> Result<TaggedIdentifier, ParseError> {
    let (prefix, suffix) = raw.split_once(DELIMITER).unwrap_or((raw, ""));

    let source_system = SourceSystem::from_prefix(prefix);
    if source_system == SourceSystem::Unknown {
        return Err(ParseError::UnknownSourceSystem(raw.to_string()));
    }

    let numeric = !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit());
    let dot_segment = matches!(suffix, "." | "..");
    if (source_system.has_numeric_ids() && !numeric) || dot_segment {
        return Err(ParseError::InvalidId {
            system: source_system,
            id: suffix.to_string(),
        });
    }

    Ok(TaggedIdentifier {
        source_system,
        raw_id: suffix.to_string(),
    })
}
