//! Sibling scanner: flags table/view definitions containing vendor markers.
//!
//! Unlike the compliance checker this has no violation concept — every hit
//! is reported with status `"OK"` and the full definition as the message,
//! leaving judgement to whoever reads the grid.
use crate::batch::AuditRow;

/// Literal substrings worth flagging: vendor names plus one hard-coded
/// cutoff date that keeps resurfacing in view definitions.
const MARKERS: [&str; 4] = ["gwpnyrt", "zipper", "vegafood", "2024-12-31"];

/// One table or view: schema-qualified name plus its definition text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDefinition {
    pub name: String,
    pub definition: String,
}

impl ObjectDefinition {
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self { name: name.into(), definition: definition.into() }
    }
}

/// Reports every definition containing at least one marker, in input order.
pub fn scan_definitions(objects: &[ObjectDefinition]) -> Vec<AuditRow> {
    objects
        .iter()
        .filter(|object| {
            let lower = object.definition.to_ascii_lowercase();
            MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .map(|object| AuditRow {
            name: object.name.clone(),
            status: "OK".to_string(),
            message: object.definition.clone(),
        })
        .collect()
}
