//! In-memory contact roster
//!
//! The roster is the authoritative list of contacts for one screen instance.
//! It is created empty, filled once from the contacts provider, and then
//! mutated only by user edits. Records keep insertion order and `id` values
//! stay unique for the roster's whole lifetime.
//!
//! The store has no observers. Callers redraw after each mutation, using the
//! return values to decide what changed.

use std::collections::HashSet;

use crate::types::{ContactField, ContactRecord};

/// Ordered, id-unique collection of contact records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStore {
    records: Vec<ContactRecord>,
    /// Next candidate for a generated id. Only ever increases.
    next_id: u64,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Replace the roster with a snapshot from the contacts provider
    ///
    /// Order is kept as supplied. If the snapshot repeats an id, the first
    /// record wins and the rest are dropped.
    pub fn load(&mut self, initial: Vec<ContactRecord>) {
        let mut seen = HashSet::with_capacity(initial.len());
        let mut records = Vec::with_capacity(initial.len());

        for record in initial {
            if seen.insert(record.id.clone()) {
                records.push(record);
            } else {
                tracing::warn!(id = %record.id, "Dropping contact with duplicate id");
            }
        }

        tracing::debug!(count = records.len(), "Roster loaded");
        self.records = records;
    }

    /// Set one field of the record with the given id
    ///
    /// Unknown ids are ignored. Returns true when a record matched, so the
    /// caller knows a row needs redrawing.
    pub fn update_field(&mut self, id: &str, field: ContactField, value: impl Into<String>) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                *record.field_mut(field) = value.into();
                tracing::debug!(id, %field, "Contact updated");
                true
            }
            None => {
                tracing::trace!(id, %field, "Update for unknown contact ignored");
                false
            }
        }
    }

    /// Append a new contact with a freshly generated id
    pub fn add(&mut self, name: impl Into<String>, phone_number: impl Into<String>) -> ContactRecord {
        let record = ContactRecord {
            id: self.generate_id(),
            name: name.into(),
            phone_number: phone_number.into(),
        };

        tracing::debug!(id = %record.id, "Contact added");
        self.records.push(record.clone());
        record
    }

    /// Current contents in insertion order
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take the counter value and advance it, skipping ids that loaded
    /// records already use.
    fn generate_id(&mut self) -> String {
        loop {
            let candidate = self.next_id.to_string();
            self.next_id += 1;
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amy() -> ContactRecord {
        ContactRecord::new("1", "Amy", "555-0100")
    }

    #[test]
    fn test_load_preserves_order() {
        let records = vec![
            ContactRecord::new("c", "Cat", "3"),
            ContactRecord::new("a", "Ann", "1"),
            ContactRecord::new("b", "Bob", "2"),
        ];

        let mut roster = RosterStore::new();
        roster.load(records.clone());

        assert_eq!(roster.records(), records.as_slice());
    }

    #[test]
    fn test_load_replaces_previous_snapshot() {
        let mut roster = RosterStore::new();
        roster.load(vec![amy()]);
        roster.load(vec![ContactRecord::new("9", "Zed", "555-9000")]);

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.records()[0].name, "Zed");
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let mut roster = RosterStore::new();
        roster.load(vec![
            amy(),
            ContactRecord::new("1", "Impostor", "000"),
            ContactRecord::new("2", "Ben", "555-0200"),
        ]);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("1").unwrap().name, "Amy");
        assert_eq!(roster.records()[1].id, "2");
    }

    #[test]
    fn test_add_after_load_generates_distinct_id() {
        let mut roster = RosterStore::new();
        roster.load(vec![amy()]);

        let ben = roster.add("Ben", "555-0200");

        assert_ne!(ben.id, "1");
        assert_eq!(ben.name, "Ben");
        assert_eq!(ben.phone_number, "555-0200");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.records()[0], amy());
        assert_eq!(roster.records()[1], ben);
    }

    #[test]
    fn test_repeated_adds_have_unique_ids() {
        let mut roster = RosterStore::new();
        roster.load(vec![
            ContactRecord::new("2", "Two", ""),
            ContactRecord::new("4", "Four", ""),
        ]);

        let ids: Vec<String> = (0..20).map(|i| roster.add(format!("n{}", i), "").id).collect();
        let unique: HashSet<&String> = roster.records().iter().map(|r| &r.id).collect();

        assert_eq!(ids.len(), 20);
        assert_eq!(unique.len(), 22);
    }

    #[test]
    fn test_add_accepts_empty_fields() {
        let mut roster = RosterStore::new();
        let record = roster.add("", "");

        assert_eq!(record.id, "1");
        assert_eq!(record.name, "");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_update_field_changes_only_target() {
        let mut roster = RosterStore::new();
        roster.load(vec![amy(), ContactRecord::new("2", "Ben", "555-0200")]);

        assert!(roster.update_field("1", ContactField::PhoneNumber, "555-9999"));

        assert_eq!(
            roster.records()[0],
            ContactRecord::new("1", "Amy", "555-9999")
        );
        assert_eq!(
            roster.records()[1],
            ContactRecord::new("2", "Ben", "555-0200")
        );
    }

    #[test]
    fn test_update_field_is_idempotent() {
        let mut roster = RosterStore::new();
        roster.load(vec![amy()]);

        roster.update_field("1", ContactField::Name, "X");
        let once = roster.clone();
        roster.update_field("1", ContactField::Name, "X");

        assert_eq!(roster, once);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut roster = RosterStore::new();
        roster.load(vec![amy()]);
        let before = roster.clone();

        assert!(!roster.update_field("404", ContactField::Name, "Ghost"));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_updated_record_can_be_edited_to_empty() {
        let mut roster = RosterStore::new();
        roster.load(vec![amy()]);

        roster.update_field("1", ContactField::Name, "");
        assert_eq!(roster.get("1").unwrap().name, "");
    }
}
