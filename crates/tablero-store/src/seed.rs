// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use serde::Deserialize;
use tablero_app::{Client, FaqArticle, Order, Product, Ticket, TicketPriority, TicketStatus};
use time::{Duration, OffsetDateTime};

const SEED_JSON: &str = include_str!("../data/seed.json");

/// Initial records for the three tables. This document is the read-only
/// external collaborator: the core mutates its own copies and never writes
/// anything back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedData {
    pub orders: Vec<Order>,
    pub products: Vec<Product>,
    pub clients: Vec<Client>,
}

pub fn seed_data() -> Result<SeedData> {
    serde_json::from_str(SEED_JSON).context("parse embedded seed data")
}

/// Knowledge-base articles; compiled in, like the seed tables.
pub fn faq_articles() -> Vec<FaqArticle> {
    const FAQS: [(&str, &str, &str); 5] = [
        (
            "FAQ-1",
            "How do I reset my password?",
            "Go to Settings, then Security, then Update Password. Choose a strong password and \
             save. If you lost access, request a password reset email.",
        ),
        (
            "FAQ-2",
            "How to contact support by phone?",
            "Open Help, then Contact Support. We offer phone support 9:00-18:00 (UTC+2). Use the \
             ticket form for faster tracking.",
        ),
        (
            "FAQ-3",
            "Where can I find invoices and billing history?",
            "Go to the Billing page in the sidebar. There you can download invoices and view \
             payment history.",
        ),
        (
            "FAQ-4",
            "Can I change my account email?",
            "Yes -- in Profile Settings update your email and verify the new address. Some \
             changes require re-login.",
        ),
        (
            "FAQ-5",
            "How do I export my data?",
            "Visit Settings, then Data Export. Submit an export request and you'll receive a \
             downloadable file by email.",
        ),
    ];

    FAQS.iter()
        .map(|(id, question, answer)| FaqArticle {
            id: (*id).to_owned(),
            question: (*question).to_owned(),
            answer: (*answer).to_owned(),
        })
        .collect()
}

/// A couple of pre-filed tickets for `--demo` sessions, newest first.
pub fn demo_tickets(now: OffsetDateTime) -> Vec<Ticket> {
    vec![
        Ticket {
            id: "T-DEMO02-412".to_owned(),
            subject: "Invoice totals look wrong".to_owned(),
            description: "February invoice shows last month's totals.".to_owned(),
            contact: "maya.ortiz@acme.io".to_owned(),
            priority: TicketPriority::High,
            created_at: now - Duration::hours(3),
            status: TicketStatus::Open,
        },
        Ticket {
            id: "T-DEMO01-207".to_owned(),
            subject: "Export stuck at 0%".to_owned(),
            description: "Data export never finishes on a large workspace.".to_owned(),
            contact: "jon@brookhardware.co".to_owned(),
            priority: TicketPriority::Normal,
            created_at: now - Duration::days(1),
            status: TicketStatus::Resolved,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{demo_tickets, faq_articles, seed_data};
    use tablero_app::{OrderStatus, TicketStatus};
    use time::OffsetDateTime;

    #[test]
    fn embedded_seed_parses() {
        let seed = seed_data().expect("seed data parses");
        assert!(!seed.orders.is_empty());
        assert!(!seed.products.is_empty());
        assert!(!seed.clients.is_empty());
        assert_eq!(seed.orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn seed_identifiers_are_unique_per_table() {
        let seed = seed_data().expect("seed data parses");
        let mut ids: Vec<&str> = seed.orders.iter().map(|o| o.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.orders.len());
    }

    #[test]
    fn faq_list_matches_knowledge_base() {
        let faqs = faq_articles();
        assert_eq!(faqs.len(), 5);
        assert!(faqs[0].question.contains("password"));
    }

    #[test]
    fn demo_tickets_are_newest_first() {
        let tickets = demo_tickets(OffsetDateTime::now_utc());
        assert_eq!(tickets.len(), 2);
        assert!(tickets[0].created_at > tickets[1].created_at);
        assert_eq!(tickets[0].status, TicketStatus::Open);
    }
}
