// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use tablero_app::{
    RecordSet, TICKET_SCHEMA, Ticket, TicketFormInput, TicketStatus, ids::ticket_id,
};
use time::OffsetDateTime;

use crate::Store;

pub const TICKETS_KEY: &str = "help-tickets";

/// The persisted support-ticket queue, newest first. Every mutation writes
/// the whole queue back through the store; there is no explicit flush, and a
/// failed write leaves the in-memory queue authoritative for the session.
#[derive(Debug, Clone)]
pub struct TicketQueue {
    store: Store,
    tickets: RecordSet<Ticket>,
}

impl TicketQueue {
    /// Load the queue from the store; any load failure starts empty.
    pub fn open(store: Store) -> Self {
        let records = store.load::<Vec<Ticket>>(TICKETS_KEY).unwrap_or_default();
        Self {
            store,
            tickets: RecordSet::new(TICKET_SCHEMA, records),
        }
    }

    /// Validate, assign an identifier and creation time, prepend, persist.
    /// A validation failure aborts with no state change.
    pub fn submit(&mut self, input: &TicketFormInput) -> Result<Ticket> {
        input.validate()?;
        let ticket = Ticket {
            id: ticket_id(),
            subject: input.subject.clone(),
            description: input.description.clone(),
            contact: input.contact.clone(),
            priority: input.priority,
            created_at: OffsetDateTime::now_utc(),
            status: TicketStatus::Open,
        };
        self.tickets.insert_front(ticket.clone());
        self.persist();
        Ok(ticket)
    }

    /// Bulk status transition: every ticket becomes `Resolved` in place,
    /// order and all other fields untouched.
    pub fn resolve_all(&mut self) {
        for ticket in self.tickets.records_mut() {
            ticket.status = TicketStatus::Resolved;
        }
        self.persist();
    }

    /// The only deletion path: drop the whole queue.
    pub fn clear(&mut self) {
        self.tickets.replace_all(Vec::new());
        self.persist();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.tickets.set_query(query);
    }

    pub fn query(&self) -> &str {
        self.tickets.query()
    }

    pub fn visible(&self) -> Vec<&Ticket> {
        self.tickets.visible()
    }

    pub fn records(&self) -> &[Ticket] {
        self.tickets.records()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.tickets
            .records()
            .iter()
            .filter(|ticket| ticket.status == TicketStatus::Open)
            .count()
    }

    fn persist(&self) {
        self.store.save(TICKETS_KEY, &self.tickets.records());
    }
}
