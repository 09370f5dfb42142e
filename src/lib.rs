//! HL7 v2.x message codec
//!
//! A bidirectional codec for the pipe-and-caret HL7 v2 wire family: a
//! segment decoder that tokenizes each line into a schema-shaped value
//! tree, a grouping walker that folds the flat segment list into the
//! hierarchical structure a trigger schema prescribes, and an encoder that
//! walks a trigger tree back to exact wire bytes with deferred-separator
//! trimming.
//!
//! ```
//! use octofhir_hl7v2::{DecodeOptions, Decoder, EncodeOptions, Encoder};
//! use octofhir_hl7v2::versions::v251::V251;
//!
//! let raw = b"MSH|^~\\&|LAB|HOSP|EHR|CLINIC|20250115103000||ORU^R01^ORU_R01|MSG001|P|2.5.1\r\
//! PID|1||42||Doe^John\r\
//! OBR|1|ORDER001||GLU^Glucose\r\
//! OBX|1|NM|GLU^Glucose||182|mg/dL\r";
//!
//! let decoder = Decoder::new(V251, DecodeOptions::default());
//! let message = decoder.decode(raw)?;
//! assert_eq!(message.trigger_id(), "ORU_R01");
//!
//! let encoder = Encoder::new(EncodeOptions { trim_trailing_separator: true });
//! assert_eq!(encoder.encode(&message), raw);
//! # Ok::<(), octofhir_hl7v2::AssembleError>(())
//! ```

pub mod core;
pub mod encoder;
pub mod grouping;
pub mod model;
pub mod parser;
pub mod registry;
pub mod versions;

pub use crate::core::temporal::TimeFormat;
pub use crate::core::{
    AssembleError, DecodeOptions, Delimiters, EncodeOptions, FieldError, FieldErrorKind, Hl7Error,
    Result, TimeError,
};
pub use encoder::Encoder;
pub use grouping::assemble;
pub use model::{GroupNode, GroupValue, Message, Segment, SlotValue, Value};
pub use parser::{DecodedSegment, Decoder};
pub use registry::Registry;
