// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    You,
    Assistant,
}

impl ChatSender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::You => "you",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: ChatSender,
    pub text: String,
}

const GREETING: &str =
    "Hi! I can help with common tasks -- try asking about password reset.";
const CANNED_REPLY: &str = "Quick tip: Check Settings -> Security for password actions. \
If you want I can open a ticket for you.";

/// Session-local chat transcript with simulated assistant replies. Replies
/// are not produced inline: the caller schedules an `AssistantReply` task
/// and invokes [`ChatLog::push_assistant_reply`] when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 0,
        };
        log.push(ChatSender::Assistant, GREETING);
        log
    }
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message. Blank input is dropped and no reply should be
    /// scheduled; the return value says whether anything was sent.
    pub fn send(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.push(ChatSender::You, trimmed);
        true
    }

    pub fn push_assistant_reply(&mut self) {
        self.push(ChatSender::Assistant, CANNED_REPLY);
    }

    fn push(&mut self, sender: ChatSender, text: &str) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            text: text.to_owned(),
        });
    }
}
