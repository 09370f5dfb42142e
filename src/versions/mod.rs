//! Per-version HL7 definition tables
//!
//! Each submodule holds the static segment, data-type, and trigger tables
//! for one HL7 version plus a unit registry type over them. The codec only
//! ever sees the [`crate::registry::Registry`] trait, so versions are
//! interchangeable.

pub mod v251;
