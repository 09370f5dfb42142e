//! Dynamic value tree for decoded HL7 messages
//!
//! Decoded content is schema-shaped rather than schema-typed: every segment
//! carries a reference to its static [`SegmentDef`] and a vector of
//! [`Value`]s indexed by ordinal. Trigger trees are built from group values
//! whose slots mirror the trigger schema's children one for one.

use chrono::{DateTime, FixedOffset};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::core::temporal;
use crate::registry::{Cardinality, DataTypeDef, GroupDef, SegmentDef, TriggerDef};

/// A single decoded field value.
///
/// Composite values nest by one wire level per [`Value::Composite`] layer
/// (field, component, subcomponent). Repetition wraps any of the other
/// shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value on the wire.
    #[default]
    Empty,
    /// Primitive text, escape sequences already decoded.
    Text(String),
    /// Parsed HL7 date-time.
    Timestamp(DateTime<FixedOffset>),
    /// Components (or subcomponents) in ordinal order.
    Composite(Vec<Value>),
    /// Elements of a repeating field.
    Repeating(Vec<Value>),
    /// A VARIES value with the data type it resolved to.
    Varies {
        /// The data type named by the segment's discriminator field.
        resolved: &'static DataTypeDef,
        /// The decoded value.
        value: Box<Value>,
    },
}

static EMPTY_VALUE: Value = Value::Empty;

impl Value {
    /// True when nothing would be written to the wire for this value.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            Value::Timestamp(_) => false,
            Value::Composite(parts) | Value::Repeating(parts) => {
                parts.iter().all(Value::is_empty)
            }
            Value::Varies { value, .. } => value.is_empty(),
        }
    }

    /// The text content for primitive values, `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Varies { value, .. } => value.as_text(),
            _ => None,
        }
    }

    /// The parsed timestamp, `None` for other shapes.
    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            Value::Varies { value, .. } => value.as_timestamp(),
            _ => None,
        }
    }

    /// A component of a composite value by 1-based ordinal.
    ///
    /// Primitive values answer ordinal 1 with themselves, matching the wire
    /// rule that an unsplit value is its own first component.
    pub fn component(&self, ordinal: u16) -> Option<&Value> {
        match self {
            Value::Composite(parts) => parts.get(usize::from(ordinal).checked_sub(1)?),
            Value::Varies { value, .. } => value.component(ordinal),
            _ if ordinal == 1 => Some(self),
            _ => None,
        }
    }

    /// The elements of a repeating value; a non-repeating value is a single
    /// element of itself.
    pub fn elements(&self) -> &[Value] {
        match self {
            Value::Repeating(parts) => parts,
            Value::Empty => &[],
            other => std::slice::from_ref(other),
        }
    }
}

/// One decoded segment: a static schema reference plus ordinal field values.
#[derive(Clone)]
pub struct Segment {
    def: &'static SegmentDef,
    fields: Vec<Value>,
}

impl Segment {
    /// An empty segment of the given schema.
    pub fn new(def: &'static SegmentDef) -> Self {
        Self {
            def,
            fields: vec![Value::Empty; usize::from(def.size)],
        }
    }

    /// The segment's schema.
    pub fn def(&self) -> &'static SegmentDef {
        self.def
    }

    /// The three-letter segment identifier.
    pub fn id(&self) -> &'static str {
        self.def.id
    }

    /// The value at a 1-based ordinal; out-of-range ordinals read as empty.
    pub fn field(&self, ordinal: u16) -> &Value {
        usize::from(ordinal)
            .checked_sub(1)
            .and_then(|i| self.fields.get(i))
            .unwrap_or(&EMPTY_VALUE)
    }

    /// Set the value at a 1-based ordinal. Ordinals beyond the declared
    /// size are ignored.
    pub fn set_field(&mut self, ordinal: u16, value: Value) {
        if let Some(slot) = usize::from(ordinal)
            .checked_sub(1)
            .and_then(|i| self.fields.get_mut(i))
        {
            *slot = value;
        }
    }

    /// All field values in ordinal order.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("id", &self.def.id)
            .field("fields", &self.fields)
            .finish()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.fields == other.fields
    }
}

/// A populated trigger-tree node: a segment or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupNode {
    /// A segment leaf.
    Segment(Segment),
    /// A nested group.
    Group(GroupValue),
}

impl GroupNode {
    /// The segment if this node is a leaf.
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            GroupNode::Segment(seg) => Some(seg),
            GroupNode::Group(_) => None,
        }
    }

    /// The group if this node is not a leaf.
    pub fn as_group(&self) -> Option<&GroupValue> {
        match self {
            GroupNode::Group(group) => Some(group),
            GroupNode::Segment(_) => None,
        }
    }
}

/// The populated contents of one trigger child slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    /// A required or optional child: at most one value.
    Single(Option<Box<GroupNode>>),
    /// A repeating child: zero or more values in message order.
    Many(Vec<GroupNode>),
}

impl SlotValue {
    /// True when the slot holds no value.
    pub fn is_empty(&self) -> bool {
        match self {
            SlotValue::Single(node) => node.is_none(),
            SlotValue::Many(nodes) => nodes.is_empty(),
        }
    }

    /// The most recently installed value in the slot.
    pub fn current(&self) -> Option<&GroupNode> {
        match self {
            SlotValue::Single(node) => node.as_deref(),
            SlotValue::Many(nodes) => nodes.last(),
        }
    }

    fn current_mut(&mut self) -> Option<&mut GroupNode> {
        match self {
            SlotValue::Single(node) => node.as_deref_mut(),
            SlotValue::Many(nodes) => nodes.last_mut(),
        }
    }
}

/// A populated trigger group: one slot per schema child, in schema order.
#[derive(Clone)]
pub struct GroupValue {
    def: &'static GroupDef,
    slots: Vec<SlotValue>,
}

impl PartialEq for GroupValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.slots == other.slots
    }
}

impl GroupValue {
    /// An empty group shaped after its schema.
    pub fn new(def: &'static GroupDef) -> Self {
        let slots = def
            .children
            .iter()
            .map(|child| match child.cardinality {
                Cardinality::Repeating => SlotValue::Many(Vec::new()),
                Cardinality::Required | Cardinality::Optional => SlotValue::Single(None),
            })
            .collect();
        Self { def, slots }
    }

    /// The group's schema.
    pub fn def(&self) -> &'static GroupDef {
        self.def
    }

    /// The group's schema name.
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    /// The slot at a schema child index.
    pub fn slot(&self, index: usize) -> Option<&SlotValue> {
        self.slots.get(index)
    }

    /// Mutable access to the slot at a schema child index.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut SlotValue> {
        self.slots.get_mut(index)
    }

    /// The value of a single-cardinality child by name.
    pub fn single(&self, name: &str) -> Option<&GroupNode> {
        match self.named_slot(name)? {
            SlotValue::Single(node) => node.as_deref(),
            SlotValue::Many(_) => None,
        }
    }

    /// The elements of a repeating child by name.
    pub fn many(&self, name: &str) -> &[GroupNode] {
        match self.named_slot(name) {
            Some(SlotValue::Many(nodes)) => nodes,
            _ => &[],
        }
    }

    /// Convenience: the segment held by a single-cardinality child.
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.single(name)?.as_segment()
    }

    /// Convenience: the group held by a single-cardinality child.
    pub fn group(&self, name: &str) -> Option<&GroupValue> {
        self.single(name)?.as_group()
    }

    fn named_slot(&self, name: &str) -> Option<&SlotValue> {
        let index = self.def.children.iter().position(|c| c.name == name)?;
        self.slots.get(index)
    }

    /// Descend along a chain of child indexes, following the current value
    /// of every slot on the way. Used by the walker to re-derive slot
    /// handles after list growth.
    pub(crate) fn descend_mut(&mut self, path: &[usize]) -> Option<&mut GroupValue> {
        let mut current = self;
        for &index in path {
            let node = current.slots.get_mut(index)?.current_mut()?;
            match node {
                GroupNode::Group(group) => current = group,
                GroupNode::Segment(_) => return None,
            }
        }
        Some(current)
    }
}

impl std::fmt::Debug for GroupValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupValue")
            .field("name", &self.def.name)
            .field("slots", &self.slots)
            .finish()
    }
}

/// A fully assembled trigger tree.
#[derive(Clone)]
pub struct Message {
    /// The trigger schema the tree was assembled against.
    pub trigger: &'static TriggerDef,
    /// The populated root group.
    pub root: GroupValue,
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trigger, other.trigger) && self.root == other.root
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Message")
            .field("trigger", &self.trigger.id)
            .field("root", &self.root)
            .finish()
    }
}

impl Message {
    /// The trigger structure identifier.
    pub fn trigger_id(&self) -> &'static str {
        self.trigger.id
    }

    /// The populated root group.
    pub fn root(&self) -> &GroupValue {
        &self.root
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Empty => serializer.serialize_none(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Timestamp(ts) => {
                serializer.serialize_str(&temporal::format_timestamp(ts, Default::default()))
            }
            Value::Composite(parts) | Value::Repeating(parts) => {
                let mut seq = serializer.serialize_seq(Some(parts.len()))?;
                for part in parts {
                    seq.serialize_element(part)?;
                }
                seq.end()
            }
            Value::Varies { value, .. } => value.serialize(serializer),
        }
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("segment", self.def.id)?;
        for field in self.def.fields {
            let value = self.field(field.ordinal);
            if !value.is_empty() {
                map.serialize_entry(field.name, value)?;
            }
        }
        map.end()
    }
}

impl Serialize for GroupNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GroupNode::Segment(seg) => seg.serialize(serializer),
            GroupNode::Group(group) => group.serialize(serializer),
        }
    }
}

impl Serialize for GroupValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (child, slot) in self.def.children.iter().zip(&self.slots) {
            match slot {
                SlotValue::Single(Some(node)) => map.serialize_entry(child.name, node)?,
                SlotValue::Many(nodes) if !nodes.is_empty() => {
                    map.serialize_entry(child.name, nodes)?
                }
                _ => {}
            }
        }
        map.end()
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("trigger", self.trigger.id)?;
        map.serialize_entry("message", &self.root)?;
        map.end()
    }
}
