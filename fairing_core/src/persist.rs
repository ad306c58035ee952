// Copyright 2026 the Fairings Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted fairing state.
//!
//! Section shapes are stored as a single string: each section is written as
//! `topY,bottomY,topRadius,bottomRadius` and sections are joined with `:`.
//!
//! ```text
//! 2,0,1.5,1.25:4,2,0.5,1.5
//! ```
//!
//! Numbers use Rust's shortest round-trip float formatting, so
//! [`parse_sections`] of [`encode_sections`] reproduces every value bit for
//! bit. The string is parsed into typed [`SectionGeometry`] values as soon as
//! it is loaded; nothing downstream touches the wire text.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::section::{FairingSection, SectionGeometry};

/// Separator between the four fields of one section.
pub const FIELD_SEPARATOR: char = ',';

/// Separator between sections.
pub const SECTION_SEPARATOR: char = ':';

/// Errors produced while loading persisted section state.
///
/// None of these are fatal: the controller logs them and keeps its
/// configured defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PersistError {
    /// The persisted string was empty.
    Empty,
    /// A section did not have exactly four fields.
    FieldCount {
        /// Zero-based index of the offending section.
        section: usize,
        /// Number of fields found.
        found: usize,
    },
    /// A field was not a valid number.
    InvalidNumber {
        /// Zero-based index of the offending section.
        section: usize,
        /// Zero-based index of the offending field.
        field: usize,
    },
    /// The number of persisted sections differs from the configured count.
    SectionCountMismatch {
        /// Sections the controller is configured with.
        expected: usize,
        /// Sections found in the persisted state.
        found: usize,
    },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("persisted section state is empty"),
            Self::FieldCount { section, found } => {
                write!(f, "section {section} has {found} fields, expected 4")
            }
            Self::InvalidNumber { section, field } => {
                write!(f, "section {section} field {field} is not a number")
            }
            Self::SectionCountMismatch { expected, found } => {
                write!(
                    f,
                    "persisted state has {found} sections, configuration has {expected}"
                )
            }
        }
    }
}

impl core::error::Error for PersistError {}

/// Writes section shapes in the persisted text format.
#[must_use]
pub fn encode_sections(sections: &[FairingSection]) -> String {
    let mut out = String::new();
    for (i, s) in sections.iter().enumerate() {
        if i > 0 {
            out.push(SECTION_SEPARATOR);
        }
        // Writing into a String cannot fail.
        _ = write!(
            out,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            s.top_y, s.bottom_y, s.top_radius, s.bottom_radius
        );
    }
    out
}

/// Parses the persisted text format into section shapes.
///
/// Surrounding whitespace of each field is ignored. Negative radii are
/// clamped to zero.
pub fn parse_sections(text: &str) -> Result<Vec<SectionGeometry>, PersistError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PersistError::Empty);
    }
    text.split(SECTION_SEPARATOR)
        .enumerate()
        .map(|(section, chunk)| parse_section(section, chunk))
        .collect()
}

fn parse_section(section: usize, chunk: &str) -> Result<SectionGeometry, PersistError> {
    let mut values = [0.0_f64; 4];
    let mut found = 0;
    for (field, raw) in chunk.split(FIELD_SEPARATOR).enumerate() {
        if field < values.len() {
            values[field] = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| PersistError::InvalidNumber { section, field })?;
        }
        found += 1;
    }
    if found != values.len() {
        return Err(PersistError::FieldCount { section, found });
    }
    let [top_y, bottom_y, top_radius, bottom_radius] = values;
    Ok(SectionGeometry::new(top_y, bottom_y, top_radius, bottom_radius))
}

/// Applies persisted shapes onto configured sections.
///
/// The section count must match; on mismatch nothing is modified.
pub fn apply_sections(
    sections: &mut [FairingSection],
    shapes: &[SectionGeometry],
) -> Result<(), PersistError> {
    if sections.len() != shapes.len() {
        return Err(PersistError::SectionCountMismatch {
            expected: sections.len(),
            found: shapes.len(),
        });
    }
    for (section, shape) in sections.iter_mut().zip(shapes) {
        section.set_geometry(*shape);
    }
    Ok(())
}

/// A complete snapshot of one controller, as handed to the host's
/// persistence mechanism.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedFairing {
    /// Section shapes in the persisted text format.
    pub sections: String,
    /// Whether the fairing had geometry when saved.
    pub built: bool,
    /// The user's enable toggle.
    pub enabled_by_user: bool,
    /// Whether the fairing had already been jettisoned.
    pub jettisoned: bool,
    /// User-chosen top diameter.
    pub top_diameter: f64,
    /// User-chosen bottom diameter.
    pub bottom_diameter: f64,
    /// Whether the editor renders the fairing translucent.
    pub transparent_in_editor: bool,
}
