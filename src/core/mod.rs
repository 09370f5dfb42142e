//! Core types shared by the decoder, walker, and encoder

pub mod error;
pub mod temporal;

pub use error::{AssembleError, FieldError, FieldErrorKind, Hl7Error, TimeError};

/// Result type alias for HL7 codec operations
pub type Result<T> = std::result::Result<T, Hl7Error>;

/// Default field separator installed when a message carries no delimiter header.
pub const DEFAULT_FIELD_SEPARATOR: u8 = b'|';

/// Default encoding characters (component, repetition, escape, subcomponent).
pub const DEFAULT_ENCODING_CHARACTERS: [u8; 4] = *br"^~\&";

/// Options controlling segment decoding and group assembly.
///
/// All options default to the strict wire-conformant behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Fail on an unknown `Z`-prefixed segment instead of skipping it.
    pub strict_z_segment: bool,
    /// Stop after the first segment, usually the message header.
    pub header_only: bool,
    /// Allow raw separator bytes inside text fields instead of reporting them.
    pub lenient_separator: bool,
    /// When data repeats in a non-repeating field, keep the first element
    /// instead of reporting a field error.
    pub lenient_repetition: bool,
}

/// Options controlling wire encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Defer field separators so that trailing empty fields are trimmed from
    /// each segment line.
    pub trim_trailing_separator: bool,
}

/// The five delimiter bytes declared by a message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Field separator (level 0).
    pub field: u8,
    /// Component separator (level 1).
    pub component: u8,
    /// Repetition separator.
    pub repetition: u8,
    /// Escape character.
    pub escape: u8,
    /// Subcomponent separator (level 2).
    pub subcomponent: u8,
}

impl Delimiters {
    /// Build a delimiter set from the field separator and the four encoding
    /// characters as they appear on the wire after the segment identifier.
    pub fn from_header(field: u8, chars: [u8; 4]) -> Self {
        Self {
            field,
            component: chars[0],
            repetition: chars[1],
            escape: chars[2],
            subcomponent: chars[3],
        }
    }

    /// The separator byte used at a given nesting level.
    ///
    /// Level 0 is the field separator, 1 the component separator, 2 the
    /// subcomponent separator. Deeper levels are not part of the wire format.
    pub fn level(&self, level: usize) -> Option<u8> {
        match level {
            0 => Some(self.field),
            1 => Some(self.component),
            2 => Some(self.subcomponent),
            _ => None,
        }
    }

    /// The four encoding characters in wire order.
    pub fn encoding_characters(&self) -> [u8; 4] {
        [
            self.component,
            self.repetition,
            self.escape,
            self.subcomponent,
        ]
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::from_header(DEFAULT_FIELD_SEPARATOR, DEFAULT_ENCODING_CHARACTERS)
    }
}
