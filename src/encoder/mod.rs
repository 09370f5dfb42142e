//! Wire encoder
//!
//! Walks a trigger tree (or a bare segment) and emits exact wire bytes.
//! Separator emission below the field level is always deferred: a separator
//! is held in a per-level accumulator and only materialized when real
//! content follows it, so trailing empty components and subcomponents never
//! reach the output. Field separators are written directly by default and
//! deferred when `trim_trailing_separator` is set.

use crate::core::temporal::{self, TimeFormat};
use crate::core::{Delimiters, EncodeOptions};
use crate::model::{GroupNode, GroupValue, Message, Segment, SlotValue, Value};
use crate::registry::{DataTypeDef, DataTypeKind, FieldDef, FieldType};

const SEGMENT_TERMINATOR: u8 = b'\r';

/// Encodes trigger trees and segments back to wire bytes.
///
/// An encoder holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder.
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Encode a whole trigger tree. Segments are terminated with `\r`.
    pub fn encode(&self, message: &Message) -> Vec<u8> {
        let mut writer = Writer::new(self.options);
        writer.group(&message.root, 1);
        writer.finish()
    }

    /// Encode a populated group subtree.
    pub fn encode_group(&self, group: &GroupValue) -> Vec<u8> {
        let mut writer = Writer::new(self.options);
        writer.group(group, 1);
        writer.finish()
    }

    /// Encode a single segment line.
    pub fn encode_segment(&self, segment: &Segment) -> Vec<u8> {
        let mut writer = Writer::new(self.options);
        writer.segment(segment, 1);
        writer.finish()
    }
}

/// Encoding view of a field or component schema entry.
#[derive(Clone, Copy)]
struct Shape {
    no_escape: bool,
    format: TimeFormat,
    components: &'static [FieldDef],
}

impl Shape {
    const TEXT: Shape = Shape {
        no_escape: false,
        format: TimeFormat::YmdHms,
        components: &[],
    };

    fn of_field(def: &FieldDef) -> Self {
        let components = match def.ty {
            FieldType::Composite(dt) => dt.components(),
            _ => &[],
        };
        Self {
            no_escape: def.no_escape,
            format: def.format,
            components,
        }
    }

    fn of_data_type(def: &DataTypeDef) -> Self {
        match def.kind {
            DataTypeKind::Text => Self::TEXT,
            DataTypeKind::Timestamp(format) => Self {
                format,
                ..Self::TEXT
            },
            DataTypeKind::Composite(components) => Self {
                components,
                ..Self::TEXT
            },
        }
    }
}

struct Writer {
    delims: Delimiters,
    trim: bool,
    deferred: [Vec<u8>; 3],
    out: Vec<u8>,
}

impl Writer {
    fn new(options: EncodeOptions) -> Self {
        Self {
            delims: Delimiters::default(),
            trim: options.trim_trailing_separator,
            deferred: [Vec::new(), Vec::new(), Vec::new()],
            out: Vec::new(),
        }
    }

    fn finish(self) -> Vec<u8> {
        self.out
    }

    fn group(&mut self, group: &GroupValue, seq: usize) {
        for index in 0..group.def().children.len() {
            match group.slot(index) {
                Some(SlotValue::Single(Some(node))) => self.node(node, seq),
                Some(SlotValue::Many(nodes)) => {
                    for (i, node) in nodes.iter().enumerate() {
                        self.node(node, i + 1);
                    }
                }
                _ => {}
            }
        }
    }

    fn node(&mut self, node: &GroupNode, seq: usize) {
        match node {
            GroupNode::Segment(segment) => self.segment(segment, seq),
            GroupNode::Group(group) => self.group(group, seq),
        }
    }

    fn segment(&mut self, segment: &Segment, seq: usize) {
        let def = segment.def();

        // Header segments re-declare the delimiter set from their marker
        // fields, falling back to the defaults for empty values.
        if def.declares_delimiters() {
            let mut delims = Delimiters::default();
            for field in def.fields {
                if field.field_sep {
                    if let Some(&sep) = segment
                        .field(field.ordinal)
                        .as_text()
                        .and_then(|t| t.as_bytes().first())
                    {
                        delims.field = sep;
                    }
                }
                if field.field_chars {
                    if let Some(text) = segment.field(field.ordinal).as_text() {
                        let bytes = text.as_bytes();
                        if bytes.len() >= 4 {
                            delims.component = bytes[0];
                            delims.repetition = bytes[1];
                            delims.escape = bytes[2];
                            delims.subcomponent = bytes[3];
                        }
                    }
                }
            }
            self.delims = delims;
        }

        self.text(def.id, 0, true);
        for ordinal in 1..=def.size {
            let field = def.field(ordinal);
            match field {
                Some(f) if f.omit => continue,
                Some(f) if f.field_sep => {
                    // The separator byte is the field's own value; it also
                    // bypasses trim deferral.
                    self.separator(0, None, true);
                    continue;
                }
                Some(f) if f.field_chars => {
                    let chars = self.delims.encoding_characters();
                    self.bytes_raw(&chars, 0);
                    continue;
                }
                _ => {}
            }
            let direct = !self.trim;
            self.separator(0, None, direct);
            if let Some(f) = field {
                let value = segment.field(f.ordinal);
                if f.sequence && value.is_empty() {
                    self.text(&seq.to_string(), 0, f.no_escape);
                } else {
                    self.value(value, Shape::of_field(f), 0);
                }
            }
        }
        self.end_segment();
    }

    fn value(&mut self, value: &Value, shape: Shape, level: usize) {
        match value {
            Value::Empty => {}
            Value::Text(text) => self.text(text, level, shape.no_escape),
            Value::Timestamp(ts) => {
                let text = temporal::format_timestamp(ts, shape.format);
                self.text(&text, level, shape.no_escape);
            }
            Value::Repeating(elements) => {
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.separator(level, Some(self.delims.repetition), true);
                    }
                    self.value(element, shape, level);
                }
            }
            Value::Composite(parts) => self.composite(parts, shape, level),
            Value::Varies { resolved, value } => {
                self.value(value, Shape::of_data_type(resolved), level);
            }
        }
    }

    fn composite(&mut self, parts: &[Value], shape: Shape, level: usize) {
        // No separator exists below the subcomponent level; only the first
        // part can carry data there.
        if level >= 2 {
            if let Some(part) = parts.first() {
                let cshape = self.component_shape(shape, 1);
                self.value(part, cshape, level);
            }
            return;
        }

        let size = shape
            .components
            .iter()
            .map(|c| usize::from(c.ordinal))
            .max()
            .unwrap_or(parts.len());
        for index in 0..size {
            if index > 0 {
                self.separator(level + 1, None, false);
            }
            if let Some(part) = parts.get(index) {
                let cshape = self.component_shape(shape, (index + 1) as u16);
                self.value(part, cshape, level + 1);
            }
        }
    }

    fn component_shape(&self, shape: Shape, ordinal: u16) -> Shape {
        shape
            .components
            .iter()
            .find(|c| c.ordinal == ordinal)
            .map(Shape::of_field)
            .unwrap_or(Shape::TEXT)
    }

    /// Queue a separator at a level. Deeper accumulators are cleared: their
    /// held separators can only precede emptiness once a shallower
    /// separator arrives. Direct mode materializes immediately.
    fn separator(&mut self, level: usize, byte: Option<u8>, direct: bool) {
        let byte = byte.unwrap_or(match level {
            0 => self.delims.field,
            1 => self.delims.component,
            _ => self.delims.subcomponent,
        });
        for deeper in self.deferred.iter_mut().skip(level + 1) {
            deeper.clear();
        }
        self.deferred[level].push(byte);
        if direct {
            self.flush(level);
        }
    }

    /// Write escaped text, first materializing every separator held at this
    /// level or above.
    fn text(&mut self, text: &str, level: usize, no_escape: bool) {
        if text.is_empty() {
            return;
        }
        self.flush(level);
        if no_escape {
            self.out.extend_from_slice(text.as_bytes());
            return;
        }
        let esc = self.delims.escape;
        for &b in text.as_bytes() {
            let code = if b == self.delims.field {
                Some(b'F')
            } else if b == self.delims.component {
                Some(b'S')
            } else if b == self.delims.repetition {
                Some(b'R')
            } else if b == self.delims.escape {
                Some(b'E')
            } else if b == self.delims.subcomponent {
                Some(b'T')
            } else {
                None
            };
            match code {
                Some(c) => self.out.extend_from_slice(&[esc, c, esc]),
                None => self.out.push(b),
            }
        }
    }

    /// Write raw bytes at a level without escaping.
    fn bytes_raw(&mut self, bytes: &[u8], level: usize) {
        if bytes.is_empty() {
            return;
        }
        self.flush(level);
        self.out.extend_from_slice(bytes);
    }

    fn flush(&mut self, level: usize) {
        for (index, held) in self.deferred.iter_mut().enumerate() {
            if index <= level {
                self.out.extend_from_slice(held);
            }
            held.clear();
        }
    }

    /// Drop all held separators and terminate the line: pure trailing
    /// emptiness disappears from the output.
    fn end_segment(&mut self) {
        for held in &mut self.deferred {
            held.clear();
        }
        self.out.push(SEGMENT_TERMINATOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DecodeOptions, EncodeOptions};
    use crate::model::Value;
    use crate::parser::Decoder;
    use crate::versions::v251::{segments, V251};

    fn msa(fields: &[(u16, &str)]) -> Segment {
        let mut seg = Segment::new(&segments::MSA);
        for &(ordinal, text) in fields {
            seg.set_field(ordinal, Value::Text(text.to_string()));
        }
        seg
    }

    #[test]
    fn direct_mode_writes_every_field_separator() {
        let encoder = Encoder::new(EncodeOptions::default());
        let out = encoder.encode_segment(&msa(&[(1, "AA"), (2, "161")]));
        assert_eq!(out, b"MSA|AA|161||||\r");
    }

    #[test]
    fn trim_mode_drops_trailing_separators() {
        let encoder = Encoder::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        let out = encoder.encode_segment(&msa(&[(1, "AA"), (2, "161")]));
        assert_eq!(out, b"MSA|AA|161\r");
    }

    #[test]
    fn held_separators_flush_before_later_content() {
        let encoder = Encoder::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        let out = encoder.encode_segment(&msa(&[(1, "AA"), (3, "HL7 ACK")]));
        assert_eq!(out, b"MSA|AA||HL7 ACK\r");
    }

    #[test]
    fn trailing_empty_components_are_trimmed() {
        let mut seg = Segment::new(&segments::PID);
        seg.set_field(
            5,
            Value::Repeating(vec![Value::Composite(vec![
                Value::Composite(vec![Value::Text("Smith".into())]),
                Value::Text("John".into()),
                Value::Empty,
                Value::Empty,
            ])]),
        );
        let encoder = Encoder::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        let out = encoder.encode_segment(&seg);
        assert_eq!(out, b"PID|1||||Smith^John\r");
    }

    #[test]
    fn repetition_joins_elements() {
        let mut seg = Segment::new(&segments::PID);
        seg.set_field(
            5,
            Value::Repeating(vec![
                Value::Composite(vec![Value::Composite(vec![Value::Text("Doe".into())])]),
                Value::Composite(vec![Value::Composite(vec![Value::Text("Smith".into())])]),
            ]),
        );
        let encoder = Encoder::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        let out = encoder.encode_segment(&seg);
        assert_eq!(out, b"PID|1||||Doe~Smith\r");
    }

    #[test]
    fn special_bytes_are_escaped() {
        let encoder = Encoder::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        let out = encoder.encode_segment(&msa(&[(1, "AA"), (3, "a|b^c\\d")]));
        assert_eq!(out, b"MSA|AA||a\\F\\b\\S\\c\\E\\d\r");
    }

    #[test]
    fn sequence_field_defaults_to_slice_index() {
        let seg = Segment::new(&segments::NTE);
        let encoder = Encoder::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        let mut writer = Writer::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        writer.segment(&seg, 3);
        assert_eq!(writer.finish(), b"NTE|3\r");
        // Single segments default to sequence 1.
        assert_eq!(encoder.encode_segment(&seg), b"NTE|1\r");
    }

    #[test]
    fn header_round_trips_through_decode_and_encode() {
        let raw = b"MSH|^~\\&|SEND|FAC|RECV|FAC2|20070305170957||ACK|42|P|2.5.1\r";
        let decoder = Decoder::new(V251, DecodeOptions::default());
        let list = decoder.decode_segments(raw).expect("decode");
        let encoder = Encoder::new(EncodeOptions {
            trim_trailing_separator: true,
        });
        let out = encoder.encode_segment(&list[0].segment);
        assert_eq!(out.as_slice(), raw.as_slice());
    }
}
