//! Field-level decoding of a single segment line
//!
//! A [`LineDecoder`] carries the delimiter state across lines: the first
//! header segment (MSH, BHS, FHS) declares the five delimiter bytes in-band
//! and later lines are tokenized with whatever set is active.

use log::debug;

use crate::core::error::{FieldError, FieldErrorKind};
use crate::core::{temporal, DecodeOptions, Delimiters, Hl7Error, Result};
use crate::model::{Segment, Value};
use crate::registry::{DataTypeDef, DataTypeKind, FieldDef, FieldType, Registry};

use super::DecodedSegment;

/// The shape a run of wire bytes decodes into.
#[derive(Clone, Copy)]
enum ValueShape {
    Text,
    Timestamp,
    Composite(&'static DataTypeDef),
}

impl ValueShape {
    fn of_field(def: &FieldDef) -> Option<Self> {
        match def.ty {
            FieldType::Text => Some(Self::Text),
            FieldType::Timestamp => Some(Self::Timestamp),
            FieldType::Composite(dt) => Some(Self::Composite(dt)),
            FieldType::Varies => None,
        }
    }

    fn of_data_type(def: &'static DataTypeDef) -> Self {
        match def.kind {
            DataTypeKind::Text => Self::Text,
            DataTypeKind::Timestamp(_) => Self::Timestamp,
            DataTypeKind::Composite(_) => Self::Composite(def),
        }
    }
}

pub(super) struct LineDecoder<'r, R> {
    registry: &'r R,
    options: DecodeOptions,
    delims: Option<Delimiters>,
}

impl<'r, R: Registry> LineDecoder<'r, R> {
    pub(super) fn new(registry: &'r R, options: DecodeOptions) -> Self {
        Self {
            registry,
            options,
            delims: None,
        }
    }

    /// Decode one non-empty line. Returns `None` for skipped Z-segments.
    pub(super) fn decode_line(
        &mut self,
        line: &[u8],
        line_number: usize,
    ) -> Result<Option<DecodedSegment>> {
        let id_len = self.id_length(line);
        if id_len == 0 {
            return Err(Hl7Error::MissingSegmentId { line: line_number });
        }
        let id = String::from_utf8_lossy(&line[..id_len]).into_owned();

        let Some(def) = self.registry.segment(&id) else {
            if id.starts_with('Z') && !self.options.strict_z_segment {
                debug!("line {line_number}: skipping unknown Z segment {id}");
                return Ok(None);
            }
            return Err(Hl7Error::UnknownSegment {
                line: line_number,
                id,
            });
        };

        let mut remain = &line[id_len..];
        let offset = if def.declares_delimiters() {
            if remain.len() < 5 {
                return Err(Hl7Error::MissingDelimiters { line: line_number });
            }
            let chars = [remain[1], remain[2], remain[3], remain[4]];
            self.delims = Some(Delimiters::from_header(remain[0], chars));
            remain = &remain[5..];
            2
        } else {
            if self.delims.is_none() {
                debug!("line {line_number}: no delimiter header seen, using default separators");
                self.delims = Some(Delimiters::default());
            }
            0
        };
        let delims = self.delims.unwrap_or_default();

        let mut segment = Segment::new(def);
        let mut errors = Vec::new();

        for field in def.fields {
            if field.field_sep {
                segment.set_field(field.ordinal, Value::Text((delims.field as char).to_string()));
            } else if field.field_chars {
                let chars = delims.encoding_characters();
                segment.set_field(
                    field.ordinal,
                    Value::Text(String::from_utf8_lossy(&chars).into_owned()),
                );
            }
        }

        let parts: Vec<&[u8]> = remain.split(|&b| b == delims.field).collect();

        for field in def.fields {
            if field.omit || field.field_sep || field.field_chars {
                continue;
            }
            let Some(index) = usize::from(field.ordinal).checked_sub(offset) else {
                continue;
            };
            let Some(&data) = parts.get(index) else {
                continue;
            };
            if data.is_empty() {
                continue;
            }
            match self.decode_field(data, field, &segment, delims) {
                Ok(value) => segment.set_field(field.ordinal, value),
                Err(mut err) => {
                    if err.is_unanchored() {
                        err.line = line_number;
                        err.segment = def.id;
                        err.field = field.name;
                    } else {
                        err = FieldError {
                            line: line_number,
                            segment: def.id,
                            field: field.name,
                            ty: "",
                            ordinal: 0,
                            kind: FieldErrorKind::Nested(Box::new(err)),
                        };
                    }
                    errors.push(Hl7Error::Field(err));
                }
            }
        }

        Ok(Some(DecodedSegment { segment, errors }))
    }

    /// Length of the segment identifier at the start of a line: up to the
    /// active field separator, or the alphanumeric prefix before any
    /// delimiter has been declared.
    fn id_length(&self, line: &[u8]) -> usize {
        match self.delims {
            Some(d) => line
                .iter()
                .position(|&b| b == d.field)
                .unwrap_or(line.len()),
            None => line
                .iter()
                .position(|b| !b.is_ascii_alphanumeric())
                .unwrap_or(line.len()),
        }
    }

    /// Decode one field's wire bytes, handling repetition and VARIES
    /// resolution. Errors come back unanchored; the caller adds line and
    /// segment context.
    fn decode_field(
        &self,
        data: &[u8],
        field: &'static FieldDef,
        segment: &Segment,
        delims: Delimiters,
    ) -> std::result::Result<Value, FieldError> {
        let (shape, varies) = match ValueShape::of_field(field) {
            Some(shape) => (shape, None),
            None => {
                let resolved = self.resolve_varies(segment).map_err(|kind| {
                    FieldError::unanchored(field.type_name(), field.ordinal, kind)
                })?;
                (ValueShape::of_data_type(resolved), Some(resolved))
            }
        };
        let ty = match varies {
            Some(dt) => dt.id,
            None => field.type_name(),
        };
        let wrap = |value: Value| match varies {
            Some(resolved) => Value::Varies {
                resolved,
                value: Box::new(value),
            },
            None => value,
        };

        let raw_parts: Vec<&[u8]> = data.split(|&b| b == delims.repetition).collect();

        if field.repeating {
            let mut elements = Vec::new();
            for part in raw_parts.iter().filter(|p| !p.is_empty()) {
                let value = self
                    .decode_value(part, shape, field.no_escape, 1, delims)
                    .map_err(|kind| FieldError::unanchored(ty, field.ordinal, kind))?;
                elements.push(wrap(value));
            }
            if elements.is_empty() {
                return Ok(Value::Empty);
            }
            return Ok(Value::Repeating(elements));
        }

        if raw_parts.len() > 1 {
            if !self.options.lenient_repetition {
                return Err(FieldError::unanchored(
                    ty,
                    field.ordinal,
                    FieldErrorKind::Repeats { ty },
                ));
            }
            // Keep the first repetition, drop the rest.
            let Some(first) = raw_parts.iter().find(|p| !p.is_empty()) else {
                return Ok(Value::Empty);
            };
            let value = self
                .decode_value(first, shape, field.no_escape, 1, delims)
                .map_err(|kind| FieldError::unanchored(ty, field.ordinal, kind))?;
            return Ok(wrap(value));
        }

        let value = self
            .decode_value(data, shape, field.no_escape, 1, delims)
            .map_err(|kind| FieldError::unanchored(ty, field.ordinal, kind))?;
        Ok(wrap(value))
    }

    /// Resolve the effective data type of a VARIES field through the
    /// segment's discriminator (OBX-2 ValueType).
    fn resolve_varies(
        &self,
        segment: &Segment,
    ) -> std::result::Result<&'static DataTypeDef, FieldErrorKind> {
        let Some(ordinal) = segment.def().varies_by else {
            return Err(FieldErrorKind::UnknownDataType {
                name: String::new(),
            });
        };
        let name = segment.field(ordinal).as_text().unwrap_or("").to_string();
        self.registry
            .data_type(&name)
            .ok_or(FieldErrorKind::UnknownDataType { name })
    }

    /// Decode one value at a nesting level. Level 1 splits components,
    /// level 2 subcomponents; deeper levels have no separator and decode as
    /// opaque text.
    fn decode_value(
        &self,
        data: &[u8],
        shape: ValueShape,
        no_escape: bool,
        level: usize,
        delims: Delimiters,
    ) -> std::result::Result<Value, FieldErrorKind> {
        match shape {
            ValueShape::Text => {
                if !self.options.lenient_separator {
                    let special = [delims.field, delims.component, delims.subcomponent];
                    if data.iter().any(|b| special.contains(b)) {
                        return Err(FieldErrorKind::SeparatorInValue {
                            value: String::from_utf8_lossy(data).into_owned(),
                        });
                    }
                }
                Ok(Value::Text(self.unescape(data, no_escape, delims)))
            }
            ValueShape::Timestamp => {
                let text = self.unescape(data, no_escape, delims);
                match temporal::parse_timestamp(&text)? {
                    Some(ts) => Ok(Value::Timestamp(ts)),
                    None => Ok(Value::Empty),
                }
            }
            ValueShape::Composite(dt) => {
                let components = dt.components();
                let size = components
                    .iter()
                    .map(|c| usize::from(c.ordinal))
                    .max()
                    .unwrap_or(0);
                let parts: Vec<&[u8]> = match delims.level(level) {
                    Some(sep) => data.split(move |&b| b == sep).collect(),
                    None => vec![data],
                };
                let mut values = vec![Value::Empty; size];
                for (i, part) in parts.iter().enumerate() {
                    if i >= size || part.is_empty() {
                        continue;
                    }
                    let ordinal = (i + 1) as u16;
                    let Some(component) = components.iter().find(|c| c.ordinal == ordinal) else {
                        continue;
                    };
                    let cshape = ValueShape::of_field(component).unwrap_or(ValueShape::Text);
                    match self.decode_value(part, cshape, component.no_escape, level + 1, delims) {
                        Ok(value) => values[i] = value,
                        Err(kind) => {
                            return Err(FieldErrorKind::Nested(Box::new(FieldError {
                                line: 0,
                                segment: dt.id,
                                field: component.name,
                                ty: component.type_name(),
                                ordinal: component.ordinal,
                                kind,
                            })));
                        }
                    }
                }
                Ok(Value::Composite(values))
            }
        }
    }

    /// Replace `\F\ \S\ \R\ \E\ \T\` with the delimiter bytes declared by
    /// the current message header.
    fn unescape(&self, data: &[u8], no_escape: bool, delims: Delimiters) -> String {
        if no_escape || !data.contains(&delims.escape) {
            return String::from_utf8_lossy(data).into_owned();
        }
        let mut out = Vec::with_capacity(data.len());
        let mut i = 0;
        while i < data.len() {
            let b = data[i];
            if b == delims.escape && i + 2 < data.len() && data[i + 2] == delims.escape {
                let mapped = match data[i + 1] {
                    b'F' => Some(delims.field),
                    b'S' => Some(delims.component),
                    b'R' => Some(delims.repetition),
                    b'E' => Some(delims.escape),
                    b'T' => Some(delims.subcomponent),
                    _ => None,
                };
                if let Some(byte) = mapped {
                    out.push(byte);
                    i += 3;
                    continue;
                }
            }
            out.push(b);
            i += 1;
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versions::v251::V251;

    fn decode_one(line: &[u8]) -> DecodedSegment {
        let mut decoder = LineDecoder::new(&V251, DecodeOptions::default());
        decoder
            .decode_line(line, 1)
            .expect("decode")
            .expect("segment")
    }

    #[test]
    fn header_declares_delimiters() {
        let seg = decode_one(b"MSH|^~\\&|SENDER|FACILITY").segment;
        assert_eq!(seg.field(1).as_text(), Some("|"));
        assert_eq!(seg.field(2).as_text(), Some("^~\\&"));
        assert_eq!(
            seg.field(3).component(1).and_then(Value::as_text),
            Some("SENDER")
        );
    }

    #[test]
    fn alternate_delimiters_apply_to_fields() {
        let seg = decode_one(b"MSH#*~\\&#SENDER#FAC#APP#FAC2#20070305170957").segment;
        assert_eq!(seg.field(1).as_text(), Some("#"));
        assert_eq!(
            seg.field(3).component(1).and_then(Value::as_text),
            Some("SENDER")
        );
    }

    #[test]
    fn missing_trailing_separators_leave_fields_empty() {
        let seg = decode_one(b"MSA|AA|undefined|HL7 ACK").segment;
        assert_eq!(seg.field(1).as_text(), Some("AA"));
        assert_eq!(seg.field(2).as_text(), Some("undefined"));
        assert_eq!(seg.field(3).as_text(), Some("HL7 ACK"));
        assert!(seg.field(4).is_empty());
        assert!(seg.field(6).is_empty());
    }

    #[test]
    fn escape_sequences_decode_to_declared_bytes() {
        let seg = decode_one(b"MSA|AA|X|note \\F\\ and \\S\\ and \\E\\").segment;
        assert_eq!(seg.field(3).as_text(), Some("note | and ^ and \\"));
    }

    #[test]
    fn raw_separator_in_text_is_a_field_error() {
        let mut decoder = LineDecoder::new(&V251, DecodeOptions::default());
        // A raw `&` in MSA-3 is a subcomponent separator.
        let decoded = decoder
            .decode_line(b"MSA|AA|X|black & white", 2)
            .expect("decode")
            .expect("segment");
        assert_eq!(decoded.errors.len(), 1);
        assert_eq!(
            decoded.errors[0].to_string(),
            "line 2, MSA.TextMessage(ST)[3]: value \"black & white\" contains an unescaped separator"
        );
        // The rest of the segment still decoded.
        assert_eq!(decoded.segment.field(1).as_text(), Some("AA"));
    }

    #[test]
    fn lenient_separator_keeps_raw_bytes() {
        let mut decoder = LineDecoder::new(
            &V251,
            DecodeOptions {
                lenient_separator: true,
                ..Default::default()
            },
        );
        let decoded = decoder
            .decode_line(b"MSA|AA|X|black & white", 2)
            .expect("decode")
            .expect("segment");
        assert!(decoded.is_clean());
        assert_eq!(decoded.segment.field(3).as_text(), Some("black & white"));
    }

    #[test]
    fn repeating_field_splits_elements() {
        let seg = decode_one(b"PID|1||42||Smith^John~Smyth^Jon").segment;
        let names = seg.field(5).elements();
        assert_eq!(names.len(), 2);
        assert_eq!(
            names[1].component(1).and_then(|v| v.component(1)).and_then(Value::as_text),
            Some("Smyth")
        );
    }

    #[test]
    fn empty_repetitions_are_skipped() {
        let seg = decode_one(b"PID|1||42||Smith^John~~Smyth^Jon~").segment;
        assert_eq!(seg.field(5).elements().len(), 2);
    }

    #[test]
    fn repeat_in_non_repeating_field_is_reported() {
        let mut decoder = LineDecoder::new(&V251, DecodeOptions::default());
        let decoded = decoder
            .decode_line(b"AIG|1|A|1^White~2^Black|D^^", 6)
            .expect("decode")
            .expect("segment");
        assert_eq!(decoded.errors.len(), 1);
        assert_eq!(
            decoded.errors[0].to_string(),
            "line 6, AIG.ResourceID(CE)[3]: data repeats but element CE does not"
        );
    }

    #[test]
    fn lenient_repetition_keeps_first_element() {
        let mut decoder = LineDecoder::new(
            &V251,
            DecodeOptions {
                lenient_repetition: true,
                ..Default::default()
            },
        );
        let decoded = decoder
            .decode_line(b"AIG|1|A|1^White~2^Black|D^^", 6)
            .expect("decode")
            .expect("segment");
        assert!(decoded.is_clean());
        assert_eq!(
            decoded.segment.field(3).component(1).and_then(Value::as_text),
            Some("1")
        );
    }

    #[test]
    fn varies_field_resolves_through_discriminator() {
        let seg = decode_one(b"OBX|1|NM|GLU^Glucose||182|mg/dL").segment;
        let value = &seg.field(5).elements()[0];
        match value {
            Value::Varies { resolved, value } => {
                assert_eq!(resolved.id, "NM");
                assert_eq!(value.as_text(), Some("182"));
            }
            other => panic!("expected varies value, got {other:?}"),
        }
    }

    #[test]
    fn varies_with_unknown_type_is_a_field_error() {
        let mut decoder = LineDecoder::new(&V251, DecodeOptions::default());
        let decoded = decoder
            .decode_line(b"OBX|1|QQ|GLU^Glucose||182", 3)
            .expect("decode")
            .expect("segment");
        assert_eq!(decoded.errors.len(), 1);
        assert_eq!(
            decoded.errors[0].to_string(),
            "line 3, OBX.ObservationValue(VARIES)[5]: unknown data type \"QQ\""
        );
    }

    #[test]
    fn bad_timestamp_keeps_other_fields() {
        let mut decoder = LineDecoder::new(&V251, DecodeOptions::default());
        let decoded = decoder
            .decode_line(b"PID|1||PID1992299||Smith^John||19561192000000|M", 2)
            .expect("decode")
            .expect("segment");
        assert_eq!(decoded.errors.len(), 1);
        assert_eq!(
            decoded.errors[0].to_string(),
            "line 2, PID.DateTimeOfBirth(TS)[7]: parsing time \"19561192000000\": day out of range"
        );
        let name = &decoded.segment.field(5).elements()[0];
        assert_eq!(
            name.component(1).and_then(|v| v.component(1)).and_then(Value::as_text),
            Some("Smith")
        );
        assert_eq!(name.component(2).and_then(Value::as_text), Some("John"));
        assert_eq!(decoded.segment.field(8).as_text(), Some("M"));
    }

    #[test]
    fn subcomponents_decode_at_level_two() {
        // CX.4 assigning authority is an HD; `&` splits its subcomponents.
        let seg = decode_one(b"PID|1||12345^^^HOSP&2.16.840.1&ISO").segment;
        let id = &seg.field(3).elements()[0];
        let authority = id.component(4).expect("authority");
        assert_eq!(authority.component(1).and_then(Value::as_text), Some("HOSP"));
        assert_eq!(
            authority.component(2).and_then(Value::as_text),
            Some("2.16.840.1")
        );
        assert_eq!(authority.component(3).and_then(Value::as_text), Some("ISO"));
    }
}
