//! Trigger grouping
//!
//! Folds the flat, ordered segment list into the hierarchical tree a
//! trigger schema prescribes. The first segment names the trigger; the
//! walker then places every segment into the schedule built from the
//! trigger's nested groups.

mod walker;

use log::debug;

use crate::core::{AssembleError, Hl7Error};
use crate::model::{Message, Segment, Value};
use crate::parser::DecodedSegment;
use crate::registry::{Registry, TriggerDef};

/// Group a decoded segment list into its trigger tree.
///
/// Field-scoped errors collected during decoding are joined with any
/// assembly error so a caller sees every problem in one place; the partial
/// tree is retained on failure.
pub fn assemble<R: Registry>(
    registry: &R,
    list: Vec<DecodedSegment>,
) -> Result<Message, AssembleError> {
    let mut errors: Vec<Hl7Error> = Vec::new();
    let mut segments: Vec<Segment> = Vec::with_capacity(list.len());
    for decoded in list {
        errors.extend(decoded.errors);
        segments.push(decoded.segment);
    }

    let trigger = match select_trigger(registry, segments.first()) {
        Ok(trigger) => trigger,
        Err(err) => {
            errors.push(err);
            return Err(AssembleError {
                message: None,
                errors,
            });
        }
    };
    debug!("assembling {} segments into trigger {}", segments.len(), trigger.id);

    let mut walker = walker::Walker::new(trigger);
    for (index, segment) in segments.into_iter().enumerate() {
        if let Err(err) = walker.digest(registry, index + 1, segment) {
            errors.push(err);
            break;
        }
    }
    let message = walker.into_message();

    if errors.is_empty() {
        message.ok_or_else(|| AssembleError {
            message: None,
            errors: vec![Hl7Error::EmptyMessage],
        })
    } else {
        Err(AssembleError { message, errors })
    }
}

/// Resolve the trigger schema from the first segment's message-type field.
///
/// Candidates in preference order: the explicit structure code, then
/// `<code>_<event>`, then the bare code (ACK messages routinely omit the
/// structure component).
fn select_trigger<R: Registry>(
    registry: &R,
    first: Option<&Segment>,
) -> Result<&'static TriggerDef, Hl7Error> {
    let first = first.ok_or(Hl7Error::EmptyMessage)?;
    let def = first.def();
    let ordinal = def.message_type.ok_or(Hl7Error::MissingStructure {
        line: 1,
        id: def.id,
    })?;

    let value = first.field(ordinal);
    let part = |ordinal: u16| {
        value
            .component(ordinal)
            .and_then(Value::as_text)
            .unwrap_or("")
    };
    let code = part(1);
    let event = part(2);
    let structure = part(3);

    let mut candidates = Vec::new();
    if !structure.is_empty() {
        candidates.push(structure.to_string());
    }
    if !code.is_empty() && !event.is_empty() {
        candidates.push(format!("{code}_{event}"));
    }
    if !code.is_empty() {
        candidates.push(code.to_string());
    }
    if candidates.is_empty() {
        return Err(Hl7Error::MissingStructure {
            line: 1,
            id: def.id,
        });
    }

    for candidate in &candidates {
        if let Some(trigger) = registry.trigger(candidate) {
            debug!("selected trigger {} from candidates {candidates:?}", trigger.id);
            return Ok(trigger);
        }
    }
    Err(Hl7Error::UnknownTrigger { candidates })
}
