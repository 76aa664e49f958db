// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{ListSchema, Record};

/// Canonical ordered record collection plus the active free-text query.
/// The filtered view is recomputed on every call -- it is a pure function of
/// (records, query) and is never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<R: Record> {
    records: Vec<R>,
    query: String,
    schema: ListSchema,
}

impl<R: Record> RecordSet<R> {
    pub fn new(schema: ListSchema, records: Vec<R>) -> Self {
        Self {
            records,
            query: String::new(),
            schema,
        }
    }

    pub const fn schema(&self) -> ListSchema {
        self.schema
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Case-insensitive substring match, OR across the schema's searchable
    /// fields. An empty query yields the canonical list in original order.
    pub fn visible(&self) -> Vec<&R> {
        if self.query.is_empty() {
            return self.records.iter().collect();
        }
        let needle = self.query.to_lowercase();
        self.records
            .iter()
            .filter(|record| self.matches(*record, &needle))
            .collect()
    }

    fn matches(&self, record: &R, needle: &str) -> bool {
        self.schema.search_fields().any(|name| {
            record
                .field(name)
                .is_some_and(|value| value.display().to_lowercase().contains(needle))
        })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [R] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Replace the record with a matching id, or append when absent.
    pub fn upsert(&mut self, record: R) {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Newest-first insertion; the ticket queue prepends on submit.
    pub fn insert_front(&mut self, record: R) {
        self.records.insert(0, record);
    }

    /// Swap in a whole new canonical list, keeping the active query.
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Remove the record with the given id. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<R> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::RecordSet;
    use crate::{CLIENT_SCHEMA, Client, Record};

    fn client(id: &str, name: &str, email: &str, country: &str) -> Client {
        Client {
            id: id.to_owned(),
            name: name.to_owned(),
            email: email.to_owned(),
            phone: "555-0100".to_owned(),
            country: country.to_owned(),
        }
    }

    fn sample_set() -> RecordSet<Client> {
        RecordSet::new(
            CLIENT_SCHEMA,
            vec![
                client("CL-1", "Maya Ortiz", "maya@acme.io", "Spain"),
                client("CL-2", "Jon Brook", "jon@brook.co", "Norway"),
                client("CL-3", "Sara Maye", "sara@maye.org", "Brazil"),
            ],
        )
    }

    #[test]
    fn empty_query_returns_all_in_original_order() {
        let set = sample_set();
        let ids: Vec<&str> = set.visible().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["CL-1", "CL-2", "CL-3"]);
    }

    #[test]
    fn query_matches_any_configured_field_case_insensitively() {
        let mut set = sample_set();

        set.set_query("MAY");
        let ids: Vec<&str> = set.visible().iter().map(|c| c.id()).collect();
        // CL-1 via name/email, CL-3 via name/email; CL-2 matches nowhere.
        assert_eq!(ids, vec!["CL-1", "CL-3"]);

        set.set_query("norway");
        let ids: Vec<&str> = set.visible().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["CL-2"]);
    }

    #[test]
    fn non_searchable_fields_are_ignored() {
        let mut set = sample_set();
        // The client schema does not mark id searchable, so an id query
        // matches nothing.
        set.set_query("cl-2");
        let ids: Vec<&str> = set.visible().iter().map(|c| c.id()).collect();
        assert_eq!(ids, Vec::<&str>::new());
    }

    #[test]
    fn every_visible_record_matches_and_every_hidden_one_does_not() {
        let mut set = sample_set();
        set.set_query("o");
        let visible: Vec<String> = set.visible().iter().map(|c| c.id().to_owned()).collect();
        for record in set.records() {
            let matches = CLIENT_SCHEMA.search_fields().any(|field| {
                record
                    .field(field)
                    .is_some_and(|v| v.display().to_lowercase().contains("o"))
            });
            assert_eq!(matches, visible.contains(&record.id().to_owned()));
        }
    }

    #[test]
    fn filtering_never_mutates_the_canonical_list() {
        let mut set = sample_set();
        set.set_query("nothing-matches-this");
        assert!(set.visible().is_empty());
        set.set_query("");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn upsert_replaces_in_place_and_appends_when_new() {
        let mut set = sample_set();
        set.upsert(client("CL-2", "Jon Brook", "jon@new.co", "Norway"));
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("CL-2").expect("CL-2").email, "jon@new.co");

        set.upsert(client("CL-4", "New Person", "np@x.io", "Chile"));
        assert_eq!(set.len(), 4);
        assert_eq!(set.records()[3].id(), "CL-4");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut set = sample_set();
        assert!(set.remove("CL-2").is_some());
        assert!(set.remove("CL-2").is_none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_front_prepends() {
        let mut set = sample_set();
        set.insert_front(client("CL-0", "First Now", "f@n.io", "Peru"));
        assert_eq!(set.records()[0].id(), "CL-0");
    }
}
