//! Error types for HL7 decoding, assembly, and encoding
//!
//! Three kinds of failures exist: fatal decode errors abort the whole
//! operation, field-scoped errors are attached to the segment they occurred
//! in while the rest of the message keeps decoding, and assembly errors are
//! returned together with the partial trigger tree.

use std::fmt;

use thiserror::Error;

use crate::model::{Message, Segment};

/// Top-level error type for HL7 codec operations.
#[derive(Error, Debug, Clone)]
pub enum Hl7Error {
    /// The input contained no segments.
    #[error("empty message")]
    EmptyMessage,

    /// A line did not start with a segment identifier.
    #[error("line {line}: missing segment type")]
    MissingSegmentId {
        /// 1-based line number.
        line: usize,
    },

    /// A segment identifier has no schema in the active registry.
    #[error("line {line}: unknown segment type {id:?}")]
    UnknownSegment {
        /// 1-based line number.
        line: usize,
        /// The unresolved segment identifier.
        id: String,
    },

    /// A header segment was too short to carry its five delimiter bytes.
    #[error("line {line}: missing delimiter declaration after header segment")]
    MissingDelimiters {
        /// 1-based line number.
        line: usize,
    },

    /// The first segment cannot name a trigger structure.
    #[error("line {line} ({id}): segment does not declare a message structure")]
    MissingStructure {
        /// 1-based line number.
        line: usize,
        /// Identifier of the offending segment.
        id: &'static str,
    },

    /// None of the message-type candidates resolved to a registered trigger.
    #[error("message structure code not found {candidates:?}")]
    UnknownTrigger {
        /// The candidate structure identifiers, in preference order.
        candidates: Vec<String>,
    },

    /// A single field failed to decode; the enclosing segment is still
    /// produced with its remaining fields populated.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A segment has no open slot in the active trigger schedule.
    #[error("line {line} ({id}) not found in trigger \"{trigger}\"", id = .segment.id())]
    UnexpectedSegment {
        /// 1-based line number of the segment in the message.
        line: usize,
        /// Name of the trigger the walker was assembling.
        trigger: &'static str,
        /// The decoded segment value that could not be placed.
        segment: Segment,
    },

    /// Placement tried to install a second value into a required-single slot.
    #[error("cannot add {child} to {parent}: slot already holds a value")]
    SlotOccupied {
        /// Name of the enclosing group.
        parent: &'static str,
        /// Name of the child slot.
        child: &'static str,
    },
}

/// A decode failure scoped to one field of one segment.
///
/// Renders as `line <N>, <SEG>.<Field>(<Type>)[<Ordinal>]: <inner>`, with
/// parts omitted when unset (nested component errors carry no line number).
#[derive(Debug, Clone)]
pub struct FieldError {
    /// 1-based line number, 0 when unset.
    pub line: usize,
    /// Identifier of the segment or composite type, empty when unset.
    pub segment: &'static str,
    /// Schema name of the field.
    pub field: &'static str,
    /// HL7 data-type identifier of the field.
    pub ty: &'static str,
    /// Field ordinal, 0 when unset.
    pub ordinal: u16,
    /// The underlying failure.
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// A bare field error carrying only the type, ordinal, and cause; the
    /// decoder fills in line, segment, and field name at the segment level.
    pub fn unanchored(ty: &'static str, ordinal: u16, kind: FieldErrorKind) -> Self {
        Self {
            line: 0,
            segment: "",
            field: "",
            ty,
            ordinal,
            kind,
        }
    }

    /// True when line, segment, and field name have not been filled in yet.
    pub fn is_unanchored(&self) -> bool {
        self.line == 0 && self.segment.is_empty() && self.field.is_empty()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}, ", self.line)?;
        }
        if !self.segment.is_empty() {
            write!(f, "{}.", self.segment)?;
        }
        if !self.field.is_empty() {
            f.write_str(self.field)?;
        }
        if !self.ty.is_empty() {
            write!(f, "({})", self.ty)?;
        }
        if self.ordinal > 0 {
            write!(f, "[{}]", self.ordinal)?;
        }
        write!(f, ": {}", self.kind)
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// The cause of a [`FieldError`].
#[derive(Error, Debug, Clone)]
pub enum FieldErrorKind {
    /// Timestamp text did not match the HL7 date-time grammar.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// A primitive value contained a raw separator byte.
    #[error("value {value:?} contains an unescaped separator")]
    SeparatorInValue {
        /// The offending wire text.
        value: String,
    },

    /// The wire data repeats but the schema element does not.
    #[error("data repeats but element {ty} does not")]
    Repeats {
        /// HL7 data-type identifier of the non-repeating element.
        ty: &'static str,
    },

    /// A VARIES discriminator named a data type absent from the registry.
    #[error("unknown data type {name:?}")]
    UnknownDataType {
        /// The unresolved data-type identifier.
        name: String,
    },

    /// A component of a composite value failed to decode.
    #[error(transparent)]
    Nested(Box<FieldError>),
}

/// Timestamp parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// A date or time unit fell outside its valid range.
    #[error("parsing time {value:?}: {unit} out of range")]
    OutOfRange {
        /// The cleaned wire text.
        value: String,
        /// The offending unit (`month`, `day`, `hour`, `minute`, `second`).
        unit: &'static str,
    },

    /// The digit count matches no canonical precision bucket.
    #[error("unknown date time string size {value:?}")]
    UnknownSize {
        /// The cleaned wire text.
        value: String,
    },

    /// A byte outside the date-time alphabet was found.
    #[error("invalid characters in date: {value:?}")]
    InvalidCharacters {
        /// The cleaned wire text.
        value: String,
    },

    /// The `+HHMM`/`-HHMM` zone suffix was malformed.
    #[error("parsing time {value:?}: invalid time zone")]
    InvalidZone {
        /// The cleaned wire text.
        value: String,
    },
}

/// Outcome of a failed group assembly.
///
/// Assembly keeps going as far as it can: the partial trigger tree is
/// retained, field-scoped errors collected during segment decoding are
/// joined with the assembly error, and the caller can match on
/// [`Hl7Error::UnexpectedSegment`] to recover the offending segment value.
#[derive(Debug, Clone)]
pub struct AssembleError {
    /// The partial trigger tree, when a root was materialized.
    pub message: Option<Message>,
    /// Every problem encountered, in message order.
    pub errors: Vec<Hl7Error>,
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AssembleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_display_full() {
        let err = FieldError {
            line: 2,
            segment: "PID",
            field: "DateTimeOfBirth",
            ty: "TS",
            ordinal: 7,
            kind: FieldErrorKind::Time(TimeError::OutOfRange {
                value: "19561192000000".into(),
                unit: "day",
            }),
        };
        assert_eq!(
            err.to_string(),
            "line 2, PID.DateTimeOfBirth(TS)[7]: parsing time \"19561192000000\": day out of range"
        );
    }

    #[test]
    fn field_error_display_unanchored() {
        let err = FieldError::unanchored("CE", 3, FieldErrorKind::Repeats { ty: "CE" });
        assert_eq!(
            err.to_string(),
            "(CE)[3]: data repeats but element CE does not"
        );
    }

    #[test]
    fn time_error_display() {
        let err = TimeError::UnknownSize {
            value: "20191".into(),
        };
        assert_eq!(err.to_string(), "unknown date time string size \"20191\"");
    }
}
