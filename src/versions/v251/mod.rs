//! HL7 v2.5.1 definition tables
//!
//! A working subset of the v2.5.1 standard maintained from the official
//! definition set: the segments, data types, and trigger structures for
//! acknowledgment, observation result, order response, and scheduling
//! messaging, plus the batch and file control segments.

pub mod datatypes;
pub mod segments;
pub mod triggers;

use crate::registry::{DataTypeDef, Registry, SegmentDef, TriggerDef};

/// Version string for these tables.
pub const VERSION: &str = "2.5.1";

/// Registry over the v2.5.1 tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct V251;

impl Registry for V251 {
    fn version(&self) -> &'static str {
        VERSION
    }

    fn segment(&self, id: &str) -> Option<&'static SegmentDef> {
        segments::lookup(id)
    }

    fn control_segment(&self, id: &str) -> Option<&'static SegmentDef> {
        segments::lookup_control(id)
    }

    fn trigger(&self, id: &str) -> Option<&'static TriggerDef> {
        triggers::lookup(id)
    }

    fn data_type(&self, id: &str) -> Option<&'static DataTypeDef> {
        datatypes::lookup(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lookups() {
        assert_eq!(V251.version(), "2.5.1");
        assert_eq!(V251.segment("PID").map(|d| d.id), Some("PID"));
        assert_eq!(V251.trigger("ORU_R01").map(|t| t.id), Some("ORU_R01"));
        assert_eq!(V251.data_type("CE").map(|d| d.id), Some("CE"));
        assert!(V251.segment("QQQ").is_none());
        assert!(V251.control_segment("BHS").is_some());
        assert!(V251.control_segment("PID").is_none());
    }

    #[test]
    fn header_segments_declare_delimiters() {
        for id in ["MSH", "BHS", "FHS"] {
            let def = V251.segment(id).expect(id);
            assert!(def.declares_delimiters(), "{id} should carry markers");
        }
        let msa = V251.segment("MSA").expect("MSA");
        assert!(!msa.declares_delimiters());
    }

    #[test]
    fn segment_sizes_cover_their_fields() {
        for id in [
            "MSH", "MSA", "ERR", "NTE", "PID", "PV1", "OBR", "OBX", "ORC", "SPM", "SCH", "AIG",
        ] {
            let def = V251.segment(id).expect(id);
            let max = def.fields.iter().map(|f| f.ordinal).max().unwrap_or(0);
            assert!(def.size >= max, "{id} size {} < max ordinal {max}", def.size);
        }
    }
}
