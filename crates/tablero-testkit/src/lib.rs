// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use tablero_app::{
    Client, Order, OrderStatus, Product, Ticket, TicketFormInput, TicketPriority, TicketStatus,
};
use std::path::PathBuf;
use time::OffsetDateTime;

pub const COUNTRIES: [&str; 6] = ["Spain", "Norway", "Brazil", "Ireland", "Japan", "Germany"];
pub const CATEGORIES: [&str; 4] = ["Electronics", "Accessories", "Fitness", "Home"];

pub fn order(id: &str, client: &str, total: f64) -> Order {
    Order {
        id: id.to_owned(),
        client: client.to_owned(),
        email: format!("{}@example.test", client.to_lowercase().replace(' ', ".")),
        total,
        status: OrderStatus::Pending,
        date: "2026-02-11".to_owned(),
        country: COUNTRIES[id.len() % COUNTRIES.len()].to_owned(),
    }
}

pub fn product(id: &str, name: &str, price: f64, stock: f64) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        category: CATEGORIES[id.len() % CATEGORIES.len()].to_owned(),
        price,
        stock,
        sales: 100.0,
    }
}

pub fn client(id: &str, name: &str, country: &str) -> Client {
    Client {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{}@example.test", name.to_lowercase().replace(' ', ".")),
        phone: "+1 555 0100".to_owned(),
        country: country.to_owned(),
    }
}

pub fn ticket(id: &str, subject: &str, status: TicketStatus) -> Ticket {
    Ticket {
        id: id.to_owned(),
        subject: subject.to_owned(),
        description: format!("{subject} -- details"),
        contact: "reporter@example.test".to_owned(),
        priority: TicketPriority::Normal,
        created_at: OffsetDateTime::now_utc(),
        status,
    }
}

pub fn ticket_form(subject: &str, priority: TicketPriority) -> TicketFormInput {
    TicketFormInput {
        subject: subject.to_owned(),
        description: format!("{subject} -- cannot proceed"),
        contact: "reporter@example.test".to_owned(),
        priority,
    }
}

/// A disposable on-disk data directory; keep the guard alive for the test's
/// duration.
pub fn temp_data_dir() -> Result<(tempfile::TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create temp data dir")?;
    let dir = temp.path().join("tablero-data");
    Ok((temp, dir))
}
