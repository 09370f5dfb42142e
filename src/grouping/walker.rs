//! Schedule construction and segment placement
//!
//! The trigger tree is flattened into a linear schedule by preorder
//! traversal. Each incoming segment is matched against schedule entries of
//! its type, preferring forward motion from the cursor; a backward match is
//! taken only when it starts a new repetition of an enclosing group. The
//! chosen entry's ancestor path is then materialized in the value tree.
//!
//! Slot handles are never cached: list growth relocates elements, so the
//! current value of every schedule entry is re-derived from the tree by
//! following parent links.

use log::trace;

use crate::core::Hl7Error;
use crate::model::{GroupNode, GroupValue, Message, Segment, SlotValue};
use crate::registry::{Cardinality, GroupDef, NodeDef, Registry, SegmentDef, TriggerDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    /// Required single child.
    Value,
    /// Optional single child.
    Opt,
    /// Repeating child.
    List,
}

#[derive(Debug, Clone, Copy)]
enum ItemKind {
    Group(&'static GroupDef),
    Segment(&'static SegmentDef),
}

/// One preorder schedule entry.
#[derive(Debug)]
struct ScheduleItem {
    /// Position of the parent entry, `None` for the root.
    parent: Option<usize>,
    /// Child slot index within the parent group.
    slot: usize,
    link: Link,
    kind: ItemKind,
    /// True for segment slots; groups are interior nodes.
    leaf: bool,
    /// True when this entry or any ancestor repeats.
    in_array: bool,
    /// Root is depth 0.
    depth: usize,
}

impl ScheduleItem {
    fn name(&self) -> &'static str {
        match self.kind {
            ItemKind::Group(def) => def.name,
            ItemKind::Segment(def) => def.id,
        }
    }
}

pub(super) struct Walker {
    trigger: &'static TriggerDef,
    items: Vec<ScheduleItem>,
    root: Option<GroupValue>,
    /// Schedule cursor: index of the most recently placed entry.
    last: usize,
}

impl Walker {
    pub(super) fn new(trigger: &'static TriggerDef) -> Self {
        let mut walker = Self {
            trigger,
            items: Vec::new(),
            root: None,
            last: 0,
        };
        walker.schedule(None, 0, Link::Value, ItemKind::Group(&trigger.root), false);
        walker
    }

    /// Preorder traversal of the trigger tree into the linear schedule.
    fn schedule(
        &mut self,
        parent: Option<usize>,
        slot: usize,
        link: Link,
        kind: ItemKind,
        in_array: bool,
    ) {
        let in_array = in_array || link == Link::List;
        let depth = parent.map_or(0, |p| self.items[p].depth + 1);
        let leaf = matches!(kind, ItemKind::Segment(_));
        let index = self.items.len();
        self.items.push(ScheduleItem {
            parent,
            slot,
            link,
            kind,
            leaf,
            in_array,
            depth,
        });
        if let ItemKind::Group(group) = kind {
            for (child_slot, child) in group.children.iter().enumerate() {
                let link = match child.cardinality {
                    Cardinality::Required => Link::Value,
                    Cardinality::Optional => Link::Opt,
                    Cardinality::Repeating => Link::List,
                };
                let kind = match child.node {
                    NodeDef::Segment(def) => ItemKind::Segment(def),
                    NodeDef::Group(def) => ItemKind::Group(def),
                };
                self.schedule(Some(index), child_slot, link, kind, in_array);
            }
        }
    }

    /// Place one segment, or drop it when it is a control segment with no
    /// slot in this trigger.
    pub(super) fn digest<R: Registry>(
        &mut self,
        registry: &R,
        line: usize,
        segment: Segment,
    ) -> Result<(), Hl7Error> {
        let id = segment.id();

        let forward = (self.last..self.items.len())
            .filter(|&i| self.matches(i, id))
            .min_by_key(|&i| self.items[i].depth);
        let backward = (0..self.last)
            .rev()
            .filter(|&i| self.matches(i, id))
            .min_by_key(|&i| self.items[i].depth);

        let current_depth = self.items[self.last].depth;
        // A backward match is only taken to break out of a deep position and
        // start a new repetition of an enclosing group.
        let backward_starts_group = backward.is_some_and(|b| {
            self.items[b].in_array && current_depth >= self.items[b].depth + 2
        });

        let chosen = match (forward, backward) {
            (f, Some(b))
                if backward_starts_group
                    && f.map_or(true, |f| self.items[b].depth < self.items[f].depth) =>
            {
                Some(b)
            }
            (Some(f), _) => Some(f),
            (None, b) => b,
        };

        let Some(chosen) = chosen else {
            if registry.control_segment(id).is_some() {
                trace!("line {line}: dropping control segment {id}");
                return Ok(());
            }
            return Err(Hl7Error::UnexpectedSegment {
                line,
                trigger: self.trigger.id,
                segment,
            });
        };

        trace!("line {line}: placing {id} at schedule index {chosen}");
        self.place(chosen, segment)
    }

    /// Hand the assembled tree back, if a root was ever materialized.
    pub(super) fn into_message(self) -> Option<Message> {
        self.root.map(|root| Message {
            trigger: self.trigger,
            root,
        })
    }

    fn matches(&self, index: usize, id: &str) -> bool {
        let item = &self.items[index];
        match item.kind {
            ItemKind::Segment(def) if def.id == id => !self.full(index),
            _ => false,
        }
    }

    /// A slot is full when it cannot take another value: not repeating, not
    /// under a repeating ancestor, and already populated.
    fn full(&self, index: usize) -> bool {
        let item = &self.items[index];
        item.link != Link::List && !item.in_array && self.present(index)
    }

    /// Whether the entry has a value in the current tree context.
    fn present(&self, index: usize) -> bool {
        if self.items[index].parent.is_none() {
            return self.root.is_some();
        }
        self.current_node(index).is_some()
    }

    /// Re-derive the entry's current value by walking down from the root,
    /// taking the newest element of every repeating slot on the way.
    fn current_node(&self, index: usize) -> Option<&GroupNode> {
        let item = &self.items[index];
        let parent = item.parent?;
        let group = if self.items[parent].parent.is_none() {
            self.root.as_ref()?
        } else {
            self.current_node(parent)?.as_group()?
        };
        group.slot(item.slot)?.current()
    }

    /// Child slot indexes from the root down to the entry.
    fn path_to(&self, mut index: usize) -> Vec<usize> {
        let mut path = Vec::new();
        while let Some(parent) = self.items[index].parent {
            path.push(self.items[index].slot);
            index = parent;
        }
        path.reverse();
        path
    }

    /// Materialize the ancestor path of the chosen entry and install the
    /// segment at its leaf.
    fn place(&mut self, chosen: usize, segment: Segment) -> Result<(), Hl7Error> {
        self.last = chosen;

        // When the chosen slot is already occupied, keep collecting
        // ancestors until a repeating one is found so a new repetition can
        // absorb the segment.
        let need_list = self.present(chosen);
        let mut has_list = false;
        let mut chain = Vec::new();
        let mut cursor = Some(chosen);
        while let Some(index) = cursor {
            let item = &self.items[index];
            if !self.present(index) {
                if item.link == Link::List {
                    has_list = true;
                }
                chain.push(index);
                cursor = item.parent;
                continue;
            }
            if !need_list || has_list {
                break;
            }
            chain.push(index);
            if item.link == Link::List {
                break;
            }
            cursor = item.parent;
        }
        if chain.is_empty() {
            return Err(Hl7Error::SlotOccupied {
                parent: self.trigger.id,
                child: segment.def().id,
            });
        }

        let mut incoming = Some(segment);
        for &index in chain.iter().rev() {
            let Some(parent) = self.items[index].parent else {
                if self.root.is_some() {
                    return Err(Hl7Error::SlotOccupied {
                        parent: self.trigger.id,
                        child: self.items[index].name(),
                    });
                }
                self.root = Some(GroupValue::new(&self.trigger.root));
                continue;
            };

            let item = &self.items[index];
            let parent_name = self.items[parent].name();
            let child_name = item.name();
            let node = if item.leaf {
                match incoming.take() {
                    Some(segment) => GroupNode::Segment(segment),
                    None => {
                        return Err(Hl7Error::SlotOccupied {
                            parent: parent_name,
                            child: child_name,
                        });
                    }
                }
            } else {
                match item.kind {
                    ItemKind::Group(def) => GroupNode::Group(GroupValue::new(def)),
                    ItemKind::Segment(_) => {
                        return Err(Hl7Error::SlotOccupied {
                            parent: parent_name,
                            child: child_name,
                        });
                    }
                }
            };

            let slot_index = item.slot;
            let path = self.path_to(parent);
            let slot = self
                .root
                .as_mut()
                .and_then(|root| root.descend_mut(&path))
                .and_then(|group| group.slot_mut(slot_index));
            match slot {
                Some(SlotValue::Single(occupant)) => {
                    if occupant.is_some() {
                        return Err(Hl7Error::SlotOccupied {
                            parent: parent_name,
                            child: child_name,
                        });
                    }
                    *occupant = Some(Box::new(node));
                }
                Some(SlotValue::Many(values)) => values.push(node),
                None => {
                    return Err(Hl7Error::SlotOccupied {
                        parent: parent_name,
                        child: child_name,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versions::v251::{triggers, V251};

    fn schedule_names(trigger: &'static TriggerDef) -> Vec<(&'static str, usize, bool)> {
        let walker = Walker::new(trigger);
        walker
            .items
            .iter()
            .map(|i| (i.name(), i.depth, i.in_array))
            .collect()
    }

    #[test]
    fn schedule_is_preorder() {
        let names = schedule_names(&triggers::ACK);
        assert_eq!(
            names,
            vec![
                ("ACK", 0, false),
                ("MSH", 1, false),
                ("SFT", 1, true),
                ("MSA", 1, false),
                ("ERR", 1, true),
            ]
        );
    }

    #[test]
    fn nested_groups_inherit_array_context() {
        let names = schedule_names(&triggers::ORU_R01);
        // Everything under the repeating PATIENT_RESULT group is in-array.
        let patient = names
            .iter()
            .find(|(name, _, _)| *name == "PID")
            .expect("PID scheduled");
        assert!(patient.2);
        assert_eq!(patient.1, 3);
    }

    #[test]
    fn simple_forward_placement() {
        let mut walker = Walker::new(&triggers::ACK);
        let msh = Segment::new(V251.segment("MSH").expect("MSH"));
        let msa = Segment::new(V251.segment("MSA").expect("MSA"));
        walker.digest(&V251, 1, msh).expect("place MSH");
        walker.digest(&V251, 2, msa).expect("place MSA");
        let message = walker.into_message().expect("root materialized");
        assert!(message.root.segment("MSH").is_some());
        assert!(message.root.segment("MSA").is_some());
    }

    #[test]
    fn unexpected_segment_carries_the_value() {
        let mut walker = Walker::new(&triggers::ORU_R01);
        let msh = Segment::new(V251.segment("MSH").expect("MSH"));
        walker.digest(&V251, 1, msh).expect("place MSH");
        let msa = Segment::new(V251.segment("MSA").expect("MSA"));
        let err = walker.digest(&V251, 2, msa).expect_err("MSA has no slot");
        match err {
            Hl7Error::UnexpectedSegment { line, trigger, segment } => {
                assert_eq!(line, 2);
                assert_eq!(trigger, "ORU_R01");
                assert_eq!(segment.id(), "MSA");
            }
            other => panic!("expected unexpected-segment error, got {other:?}"),
        }
    }

    #[test]
    fn control_segments_are_dropped() {
        let mut walker = Walker::new(&triggers::ORU_R01);
        let msh = Segment::new(V251.segment("MSH").expect("MSH"));
        walker.digest(&V251, 1, msh).expect("place MSH");
        let bts = Segment::new(V251.segment("BTS").expect("BTS"));
        walker.digest(&V251, 2, bts).expect("BTS is control");
    }

    #[test]
    fn repeated_segment_opens_a_new_group_repetition() {
        let mut walker = Walker::new(&triggers::ORU_R01);
        let place = |w: &mut Walker, line: usize, id: &str| {
            let seg = Segment::new(V251.segment(id).expect(id));
            w.digest(&V251, line, seg).expect(id);
        };
        place(&mut walker, 1, "MSH");
        place(&mut walker, 2, "PID");
        place(&mut walker, 3, "OBR");
        place(&mut walker, 4, "OBX");
        place(&mut walker, 5, "PID");
        place(&mut walker, 6, "OBR");
        place(&mut walker, 7, "OBX");
        let message = walker.into_message().expect("root");
        let results = message.root.many("PATIENT_RESULT");
        assert_eq!(results.len(), 2);
        for result in results {
            let group = result.as_group().expect("group");
            assert!(group.group("PATIENT").is_some());
            assert_eq!(group.many("ORDER_OBSERVATION").len(), 1);
        }
    }
}
