//! Schema descriptors and the per-version registry contract
//!
//! Everything the decoder, walker, and encoder know about HL7 structure
//! comes from static descriptor tables: segments with ordinal field
//! definitions, composite data types, and trigger trees. A [`Registry`]
//! bundles the lookups for one HL7 version; any version's tables are
//! interchangeable at the codec boundary.

use crate::core::temporal::TimeFormat;

/// How a field's wire bytes map to a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// Primitive text (ST, ID, IS, NM, SI, TX, FT).
    Text,
    /// HL7 date-time (TS, DTM, DT, TM).
    Timestamp,
    /// Composite split by the next-level separator.
    Composite(&'static DataTypeDef),
    /// Type resolved at decode time from the containing segment's
    /// discriminator field.
    Varies,
}

/// Schema entry for one ordinal of a segment or one component of a
/// composite data type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    /// 1-based ordinal (sequence number) within the parent.
    pub ordinal: u16,
    /// Schema name, used in error paths.
    pub name: &'static str,
    /// Value shape.
    pub ty: FieldType,
    /// Whether the repetition separator may split this field.
    pub repeating: bool,
    /// Escape sequences are left untouched in this field.
    pub no_escape: bool,
    /// The field is never read from or written to the wire.
    pub omit: bool,
    /// Empty values default to the segment's 1-based slice index on output.
    pub sequence: bool,
    /// Marker field holding the field separator byte (MSH-1).
    pub field_sep: bool,
    /// Marker field holding the four encoding characters (MSH-2).
    pub field_chars: bool,
    /// Output precision for timestamp fields.
    pub format: TimeFormat,
}

impl FieldDef {
    /// A primitive text field.
    pub const fn text(ordinal: u16, name: &'static str) -> Self {
        Self {
            ordinal,
            name,
            ty: FieldType::Text,
            repeating: false,
            no_escape: false,
            omit: false,
            sequence: false,
            field_sep: false,
            field_chars: false,
            format: TimeFormat::YmdHms,
        }
    }

    /// A timestamp field at the given output precision.
    pub const fn timestamp(ordinal: u16, name: &'static str, format: TimeFormat) -> Self {
        let mut f = Self::text(ordinal, name);
        f.ty = FieldType::Timestamp;
        f.format = format;
        f
    }

    /// A composite field of the given data type.
    pub const fn composite(ordinal: u16, name: &'static str, def: &'static DataTypeDef) -> Self {
        let mut f = Self::text(ordinal, name);
        f.ty = FieldType::Composite(def);
        f
    }

    /// A field whose type is resolved through the segment's discriminator.
    pub const fn varies(ordinal: u16, name: &'static str) -> Self {
        let mut f = Self::text(ordinal, name);
        f.ty = FieldType::Varies;
        f
    }

    /// Mark the field as repeating.
    pub const fn repeated(mut self) -> Self {
        self.repeating = true;
        self
    }

    /// Mark the field as a SetID sequence field.
    pub const fn seq(mut self) -> Self {
        self.sequence = true;
        self
    }

    /// Disable escape processing for the field.
    pub const fn raw(mut self) -> Self {
        self.no_escape = true;
        self
    }

    /// Mark the field as the field-separator marker.
    pub const fn separator_marker(mut self) -> Self {
        self.field_sep = true;
        self
    }

    /// Mark the field as the encoding-characters marker.
    pub const fn encoding_marker(mut self) -> Self {
        self.field_chars = true;
        self.no_escape = true;
        self
    }

    /// HL7 data-type identifier used in error paths.
    pub fn type_name(&self) -> &'static str {
        match self.ty {
            FieldType::Text => "ST",
            FieldType::Timestamp => "TS",
            FieldType::Composite(def) => def.id,
            FieldType::Varies => "VARIES",
        }
    }
}

/// How a data type's wire bytes map to a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataTypeKind {
    /// Primitive text.
    Text,
    /// HL7 date-time at the given output precision.
    Timestamp(TimeFormat),
    /// Composite of ordered components.
    Composite(&'static [FieldDef]),
}

/// A named HL7 data type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataTypeDef {
    /// Data-type identifier (`CE`, `XPN`, `ST`, …).
    pub id: &'static str,
    /// Human-readable name from the standard.
    pub name: &'static str,
    /// Value shape.
    pub kind: DataTypeKind,
}

impl DataTypeDef {
    /// The component table for composite types, empty otherwise.
    pub fn components(&self) -> &'static [FieldDef] {
        match self.kind {
            DataTypeKind::Composite(fields) => fields,
            _ => &[],
        }
    }
}

/// Schema for one segment type.
#[derive(Debug, Clone, Copy)]
pub struct SegmentDef {
    /// Three-letter segment identifier.
    pub id: &'static str,
    /// Human-readable name from the standard.
    pub name: &'static str,
    /// Declared size: the highest ordinal carried on the wire.
    pub size: u16,
    /// Field table, ordered by ordinal. Ordinals without an entry decode to
    /// nothing and encode as bare separators.
    pub fields: &'static [FieldDef],
    /// Ordinal of the message-type field used for trigger selection (MSH-9).
    pub message_type: Option<u16>,
    /// Ordinal of the discriminator consulted for VARIES fields (OBX-2).
    pub varies_by: Option<u16>,
}

impl SegmentDef {
    /// Look up the field definition for an ordinal.
    pub fn field(&self, ordinal: u16) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.ordinal == ordinal)
    }

    /// True for header segments that declare the delimiter set in-band.
    pub fn declares_delimiters(&self) -> bool {
        self.fields.iter().any(|f| f.field_sep || f.field_chars)
    }
}

/// Cardinality of a trigger child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one.
    Required,
    /// Zero or one.
    Optional,
    /// Zero or more.
    Repeating,
}

/// What a trigger child slot holds.
#[derive(Debug, Clone, Copy)]
pub enum NodeDef {
    /// A segment slot.
    Segment(&'static SegmentDef),
    /// A nested group.
    Group(&'static GroupDef),
}

/// One child slot of a trigger group.
#[derive(Debug, Clone, Copy)]
pub struct ChildDef {
    /// Slot name: the segment identifier or the group name.
    pub name: &'static str,
    /// How many values the slot may hold.
    pub cardinality: Cardinality,
    /// The slot's shape.
    pub node: NodeDef,
}

impl ChildDef {
    /// A child slot holding a segment.
    pub const fn segment(cardinality: Cardinality, def: &'static SegmentDef) -> Self {
        Self {
            name: def.id,
            cardinality,
            node: NodeDef::Segment(def),
        }
    }

    /// A child slot holding a nested group.
    pub const fn group(cardinality: Cardinality, def: &'static GroupDef) -> Self {
        Self {
            name: def.name,
            cardinality,
            node: NodeDef::Group(def),
        }
    }
}

/// A named, ordered collection of child slots inside a trigger.
#[derive(Debug, Clone, Copy)]
pub struct GroupDef {
    /// Group name (`PATIENT_RESULT`, `ORDER_OBSERVATION`, …).
    pub name: &'static str,
    /// Ordered child slots.
    pub children: &'static [ChildDef],
}

/// Schema of a whole message structure.
#[derive(Debug, Clone, Copy)]
pub struct TriggerDef {
    /// Trigger structure identifier (`ORU_R01`).
    pub id: &'static str,
    /// The root group.
    pub root: GroupDef,
}

/// Lookup bundle for one HL7 version.
///
/// Implementations are static per-version tables; a registry is immutable
/// after construction and safe to share across threads.
pub trait Registry {
    /// The HL7 version string these tables describe.
    fn version(&self) -> &'static str;

    /// Look up a segment schema by identifier.
    fn segment(&self, id: &str) -> Option<&'static SegmentDef>;

    /// Look up a batch/file control segment by identifier.
    fn control_segment(&self, id: &str) -> Option<&'static SegmentDef>;

    /// Look up a trigger structure by identifier.
    fn trigger(&self, id: &str) -> Option<&'static TriggerDef>;

    /// Look up a data type by identifier.
    fn data_type(&self, id: &str) -> Option<&'static DataTypeDef>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn version(&self) -> &'static str {
        (**self).version()
    }
    fn segment(&self, id: &str) -> Option<&'static SegmentDef> {
        (**self).segment(id)
    }
    fn control_segment(&self, id: &str) -> Option<&'static SegmentDef> {
        (**self).control_segment(id)
    }
    fn trigger(&self, id: &str) -> Option<&'static TriggerDef> {
        (**self).trigger(id)
    }
    fn data_type(&self, id: &str) -> Option<&'static DataTypeDef> {
        (**self).data_type(id)
    }
}
