// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::{Duration, Instant};

pub const TICKET_ACK_DELAY: Duration = Duration::from_millis(300);
pub const ASSISTANT_REPLY_DELAY: Duration = Duration::from_millis(900);
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Delayed acknowledgment after a ticket submission.
    TicketAck { ticket_id: String },
    /// Canned support-assistant reply to the latest chat message.
    AssistantReply,
    /// Expire the status line; stale tokens are ignored by the caller.
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledTask {
    id: TaskId,
    due_at: Instant,
    kind: TaskKind,
}

/// Single-threaded delayed-effect queue, drained by the view loop's poll
/// tick. Owned by the view: clearing it on teardown cancels every pending
/// effect, so no callback ever runs against disposed state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskQueue {
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TaskKind, delay: Duration, now: Instant) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(ScheduledTask {
            id,
            due_at: now + delay,
            kind,
        });
        id
    }

    /// Remove and return every task whose deadline has passed, in schedule
    /// order.
    pub fn due(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut fired = Vec::new();
        self.tasks.retain(|task| {
            if task.due_at <= now {
                fired.push(task.kind.clone());
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
