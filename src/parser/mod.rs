//! Segment (line) decoder
//!
//! Splits a raw message into lines, resolves each line's segment schema, and
//! hands the line to [`line::LineDecoder`] for field decoding. Field-scoped
//! problems are collected per segment so one bad field never aborts the
//! message; only structural problems (unknown segment, missing delimiter
//! header) are fatal.

mod line;

use log::debug;

use crate::core::{AssembleError, DecodeOptions, Hl7Error, Result};
use crate::grouping;
use crate::model::{Message, Segment};
use crate::registry::Registry;

/// One decoded segment plus any field-scoped errors raised while decoding
/// it. The segment is populated as far as decoding succeeded.
#[derive(Debug, Clone)]
pub struct DecodedSegment {
    /// The decoded segment value.
    pub segment: Segment,
    /// Field-scoped errors, empty when the segment decoded cleanly.
    pub errors: Vec<Hl7Error>,
}

impl DecodedSegment {
    /// True when no field error was recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Decodes wire bytes into segments and trigger trees.
///
/// A decoder holds no state between calls; one instance may be shared or a
/// fresh one created per message.
pub struct Decoder<R> {
    registry: R,
    options: DecodeOptions,
}

impl<R: Registry> Decoder<R> {
    /// Create a decoder over a version registry.
    pub fn new(registry: R, options: DecodeOptions) -> Self {
        Self { registry, options }
    }

    /// The registry this decoder resolves schemas from.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// The active decode options.
    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decode a message into its flat segment list, in input order.
    ///
    /// Lines end with `\r`, `\n`, or `\r\n`; blank lines are skipped. The
    /// first header segment declares the delimiter set for the rest of the
    /// message; when the first segment is not a header the default set
    /// `|^~\&` is used.
    pub fn decode_segments(&self, data: &[u8]) -> Result<Vec<DecodedSegment>> {
        let mut decoder = line::LineDecoder::new(&self.registry, self.options);
        let mut out = Vec::new();

        let lines = data
            .split(|&b| b == b'\r' || b == b'\n')
            .filter(|l| !l.is_empty());
        for (index, raw) in lines.enumerate() {
            let line_number = index + 1;
            match decoder.decode_line(raw, line_number)? {
                Some(decoded) => out.push(decoded),
                None => continue,
            }
            if self.options.header_only {
                break;
            }
        }
        Ok(out)
    }

    /// Fold an already-decoded segment list into its trigger tree.
    pub fn assemble(&self, list: Vec<DecodedSegment>) -> std::result::Result<Message, AssembleError> {
        grouping::assemble(&self.registry, list)
    }

    /// Decode a message all the way to its trigger tree.
    ///
    /// Fatal decode errors are wrapped into an [`AssembleError`] with no
    /// partial tree so callers see a single error surface.
    pub fn decode(&self, data: &[u8]) -> std::result::Result<Message, AssembleError> {
        let list = self.decode_segments(data).map_err(|err| {
            debug!("segment list decode failed: {err}");
            AssembleError {
                message: None,
                errors: vec![err],
            }
        })?;
        self.assemble(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DecodeOptions;
    use crate::versions::v251::V251;

    #[test]
    fn blank_lines_do_not_advance_line_numbers() {
        let raw = b"MSH|^~\\&|A|B|C|D|20070305170957||ADT^A01^ADT_A01|1|P|2.5.1\r\r\nPID|1||42\r";
        let decoder = Decoder::new(V251, DecodeOptions::default());
        let list = decoder.decode_segments(raw).expect("decode");
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].segment.id(), "PID");
    }

    #[test]
    fn header_only_stops_after_first_segment() {
        let raw = b"MSH|^~\\&|A|B|C|D|20070305170957|XYZ|ORU^R01^ORU_R01|1|P|2.5.1\rPID|1||42\r";
        let decoder = Decoder::new(
            V251,
            DecodeOptions {
                header_only: true,
                ..Default::default()
            },
        );
        let list = decoder.decode_segments(raw).expect("decode");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].segment.id(), "MSH");
        assert_eq!(list[0].segment.field(8).as_text(), Some("XYZ"));
    }

    #[test]
    fn unknown_z_segment_is_skipped() {
        let raw = b"MSH|^~\\&|A|B|C|D|20070305170957||ACK|1|P|2.5.1\rZQQ|custom|data\rMSA|AA|1\r";
        let decoder = Decoder::new(V251, DecodeOptions::default());
        let list = decoder.decode_segments(raw).expect("decode");
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].segment.id(), "MSA");
    }

    #[test]
    fn unknown_z_segment_errors_in_strict_mode() {
        let raw = b"MSH|^~\\&|A|B|C|D|20070305170957||ACK|1|P|2.5.1\rZQQ|custom|data\r";
        let decoder = Decoder::new(
            V251,
            DecodeOptions {
                strict_z_segment: true,
                ..Default::default()
            },
        );
        let err = decoder.decode_segments(raw).expect_err("strict mode");
        assert_eq!(err.to_string(), "line 2: unknown segment type \"ZQQ\"");
    }
}
