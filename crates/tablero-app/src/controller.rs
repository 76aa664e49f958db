// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{FieldKind, FieldValue, ListSchema, Record, RecordSet, RowState, RowStates};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// Numeric coercion rejected the input; the field keeps its prior value.
    Rejected,
    UnknownField,
    NotEditing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowView<'a, R: Record> {
    pub record: &'a R,
    pub state: RowState,
}

/// One interactive list: a filterable record set plus per-row edit/delete
/// state. The same controller backs orders, products, and clients; only the
/// schema differs.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<R: Record> {
    records: RecordSet<R>,
    rows: RowStates,
}

impl<R: Record> ListController<R> {
    pub fn new(schema: ListSchema, records: Vec<R>) -> Self {
        Self {
            records: RecordSet::new(schema, records),
            rows: RowStates::new(),
        }
    }

    pub const fn schema(&self) -> ListSchema {
        self.records.schema()
    }

    pub fn query(&self) -> &str {
        self.records.query()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.records.set_query(query);
    }

    pub fn visible(&self) -> Vec<RowView<'_, R>> {
        self.records
            .visible()
            .into_iter()
            .map(|record| RowView {
                state: self.rows.state_of(record.id()),
                record,
            })
            .collect()
    }

    pub fn records(&self) -> &[R] {
        self.records.records()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn row_state(&self, id: &str) -> RowState {
        self.rows.state_of(id)
    }

    pub fn editing_row(&self) -> Option<&str> {
        self.rows.editing_row()
    }

    pub fn start_edit(&mut self, id: &str) {
        if self.records.get(id).is_some() {
            self.rows.start_edit(id);
        }
    }

    /// Exit edit mode. Edits were applied in place as they were typed, so
    /// there is nothing further to commit.
    pub fn save_edit(&mut self, id: &str) {
        self.rows.save_edit(id);
    }

    /// Route one keystroke's worth of input into the canonical record.
    /// Numeric fields coerce; rejected input leaves the prior value intact.
    pub fn change_field(&mut self, id: &str, field: &str, raw: &str) -> EditOutcome {
        if self.rows.state_of(id) != RowState::Editing {
            return EditOutcome::NotEditing;
        }
        let Some(column) = self.records.schema().column(field) else {
            return EditOutcome::UnknownField;
        };
        if !column.editable {
            return EditOutcome::UnknownField;
        }
        let value = match column.kind {
            FieldKind::Text => FieldValue::Text(raw.to_owned()),
            FieldKind::Number => match parse_numeric(raw) {
                Some(number) => FieldValue::Number(number),
                None => return EditOutcome::Rejected,
            },
        };
        let Some(record) = self.records.get_mut(id) else {
            return EditOutcome::NotEditing;
        };
        if record.set_field(field, value) {
            EditOutcome::Applied
        } else {
            EditOutcome::UnknownField
        }
    }

    pub fn request_delete(&mut self, id: &str) {
        if self.records.get(id).is_some() {
            self.rows.request_delete(id);
        }
    }

    /// Remove exactly the matching record and clear its row state. Absent
    /// ids are a no-op, not an error.
    pub fn confirm_delete(&mut self, id: &str) -> Option<R> {
        let removed = self.records.remove(id);
        self.rows.clear(id);
        removed
    }

    pub fn cancel_delete(&mut self, id: &str) {
        self.rows.cancel_delete(id);
    }
}

/// The numeric-input gate: digits, at most one decimal point, and at least
/// one digit after it (`^\d*\.?\d+$`). Anything else is silently dropped.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let mut seen_dot = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    if !raw.ends_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
