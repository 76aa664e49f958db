// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::TicketPriority;

/// User-entered ticket fields, validated before a ticket is created. A
/// failed validation aborts the submission with no partial state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFormInput {
    pub subject: String,
    pub description: String,
    pub contact: String,
    pub priority: TicketPriority,
}

impl TicketFormInput {
    pub fn blank() -> Self {
        Self {
            subject: String::new(),
            description: String::new(),
            contact: String::new(),
            priority: TicketPriority::Normal,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.subject.trim().is_empty() {
            bail!("ticket subject is required -- enter a subject and retry");
        }
        if self.description.trim().is_empty() {
            bail!("ticket description is required -- describe the issue and retry");
        }
        if self.contact.trim().is_empty() {
            bail!("ticket contact is required -- enter a contact email and retry");
        }
        Ok(())
    }
}
