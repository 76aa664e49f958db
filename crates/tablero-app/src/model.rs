// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Canceled => "Canceled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Shipped" => Some(Self::Shipped),
            "Delivered" => Some(Self::Delivered),
            "Canceled" => Some(Self::Canceled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Normal,
    High,
}

impl TicketPriority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Normal, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Normal" => Some(Self::Normal),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    Resolved,
}

impl TicketStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Resolved => "Resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Open" => Some(Self::Open),
            "Resolved" => Some(Self::Resolved),
            _ => None,
        }
    }
}

/// One scalar cell of a record. Numeric-editable fields carry `Number`;
/// everything else is `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => {
                if value.fract() == 0.0 {
                    format!("{value:.0}")
                } else {
                    format!("{value}")
                }
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }

    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Number,
}

/// One column of a list instance: how it renders, whether free-text search
/// covers it, and whether inline edit may touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub header: &'static str,
    pub kind: FieldKind,
    pub searchable: bool,
    pub editable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSchema {
    pub columns: &'static [ColumnSpec],
}

impl ListSchema {
    pub fn column(&self, name: &str) -> Option<&'static ColumnSpec> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn search_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns
            .iter()
            .filter(|column| column.searchable)
            .map(|column| column.name)
    }

    pub fn editable_columns(&self) -> impl Iterator<Item = &'static ColumnSpec> + '_ {
        self.columns.iter().filter(|column| column.editable)
    }
}

/// A row of domain data. The identifier is unique, immutable, and assigned
/// by the data source; `set_field` refuses it along with any unknown name.
pub trait Record {
    fn id(&self) -> &str;
    fn field(&self, name: &str) -> Option<FieldValue>;
    fn set_field(&mut self, name: &str, value: FieldValue) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client: String,
    pub email: String,
    pub total: f64,
    pub status: OrderStatus,
    pub date: String,
    pub country: String,
}

pub const ORDER_SCHEMA: ListSchema = ListSchema {
    columns: &[
        ColumnSpec {
            name: "id",
            header: "Order ID",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "client",
            header: "Client",
            kind: FieldKind::Text,
            searchable: true,
            editable: true,
        },
        ColumnSpec {
            name: "email",
            header: "Email",
            kind: FieldKind::Text,
            searchable: true,
            editable: true,
        },
        ColumnSpec {
            name: "total",
            header: "Total",
            kind: FieldKind::Number,
            searchable: false,
            editable: true,
        },
        ColumnSpec {
            name: "status",
            header: "Status",
            kind: FieldKind::Text,
            searchable: false,
            editable: false,
        },
        ColumnSpec {
            name: "date",
            header: "Date",
            kind: FieldKind::Text,
            searchable: false,
            editable: true,
        },
        ColumnSpec {
            name: "country",
            header: "Country",
            kind: FieldKind::Text,
            searchable: true,
            editable: true,
        },
    ],
};

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "client" => Some(FieldValue::Text(self.client.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "total" => Some(FieldValue::Number(self.total)),
            "status" => Some(FieldValue::Text(self.status.as_str().to_owned())),
            "date" => Some(FieldValue::Text(self.date.clone())),
            "country" => Some(FieldValue::Text(self.country.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        match (name, value) {
            ("client", FieldValue::Text(text)) => self.client = text,
            ("email", FieldValue::Text(text)) => self.email = text,
            ("total", FieldValue::Number(number)) => self.total = number,
            ("date", FieldValue::Text(text)) => self.date = text,
            ("country", FieldValue::Text(text)) => self.country = text,
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: f64,
    pub sales: f64,
}

pub const PRODUCT_SCHEMA: ListSchema = ListSchema {
    columns: &[
        ColumnSpec {
            name: "id",
            header: "ID",
            kind: FieldKind::Text,
            searchable: false,
            editable: false,
        },
        ColumnSpec {
            name: "name",
            header: "Name",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "category",
            header: "Category",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "price",
            header: "Price",
            kind: FieldKind::Number,
            searchable: false,
            editable: true,
        },
        ColumnSpec {
            name: "stock",
            header: "Stock",
            kind: FieldKind::Number,
            searchable: false,
            editable: true,
        },
        ColumnSpec {
            name: "sales",
            header: "Sales",
            kind: FieldKind::Number,
            searchable: false,
            editable: true,
        },
    ],
};

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "category" => Some(FieldValue::Text(self.category.clone())),
            "price" => Some(FieldValue::Number(self.price)),
            "stock" => Some(FieldValue::Number(self.stock)),
            "sales" => Some(FieldValue::Number(self.sales)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        match (name, value) {
            ("price", FieldValue::Number(number)) => self.price = number,
            ("stock", FieldValue::Number(number)) => self.stock = number,
            ("sales", FieldValue::Number(number)) => self.sales = number,
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
}

pub const CLIENT_SCHEMA: ListSchema = ListSchema {
    columns: &[
        ColumnSpec {
            name: "id",
            header: "ID",
            kind: FieldKind::Text,
            searchable: false,
            editable: false,
        },
        ColumnSpec {
            name: "name",
            header: "Name",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "email",
            header: "Email",
            kind: FieldKind::Text,
            searchable: true,
            editable: true,
        },
        ColumnSpec {
            name: "phone",
            header: "Phone",
            kind: FieldKind::Text,
            searchable: true,
            editable: true,
        },
        ColumnSpec {
            name: "country",
            header: "Country",
            kind: FieldKind::Text,
            searchable: true,
            editable: true,
        },
    ],
};

impl Record for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "phone" => Some(FieldValue::Text(self.phone.clone())),
            "country" => Some(FieldValue::Text(self.country.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        match (name, value) {
            ("email", FieldValue::Text(text)) => self.email = text,
            ("phone", FieldValue::Text(text)) => self.phone = text,
            ("country", FieldValue::Text(text)) => self.country = text,
            _ => return false,
        }
        true
    }
}

/// A support request. Tickets are never edited field-by-field: the only
/// mutation after creation is the bulk `Resolved` transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub contact: String,
    pub priority: TicketPriority,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: TicketStatus,
}

pub const TICKET_SCHEMA: ListSchema = ListSchema {
    columns: &[
        ColumnSpec {
            name: "id",
            header: "Ticket",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "subject",
            header: "Subject",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "contact",
            header: "Contact",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "priority",
            header: "Priority",
            kind: FieldKind::Text,
            searchable: false,
            editable: false,
        },
        ColumnSpec {
            name: "status",
            header: "Status",
            kind: FieldKind::Text,
            searchable: false,
            editable: false,
        },
    ],
};

impl Record for Ticket {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "subject" => Some(FieldValue::Text(self.subject.clone())),
            "description" => Some(FieldValue::Text(self.description.clone())),
            "contact" => Some(FieldValue::Text(self.contact.clone())),
            "priority" => Some(FieldValue::Text(self.priority.as_str().to_owned())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_owned())),
            _ => None,
        }
    }

    fn set_field(&mut self, _name: &str, _value: FieldValue) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqArticle {
    pub id: String,
    pub question: String,
    pub answer: String,
}

pub const FAQ_SCHEMA: ListSchema = ListSchema {
    columns: &[
        ColumnSpec {
            name: "id",
            header: "#",
            kind: FieldKind::Text,
            searchable: false,
            editable: false,
        },
        ColumnSpec {
            name: "question",
            header: "Question",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
        ColumnSpec {
            name: "answer",
            header: "Answer",
            kind: FieldKind::Text,
            searchable: true,
            editable: false,
        },
    ],
};

impl Record for FaqArticle {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "question" => Some(FieldValue::Text(self.question.clone())),
            "answer" => Some(FieldValue::Text(self.answer.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, _name: &str, _value: FieldValue) -> bool {
        false
    }
}
