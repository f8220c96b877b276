// ABOUTME: Append-only conversation log; insertion order is display order

use super::message::Message;

#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    /// Bumped on every clear so late answers can tell the history they belong to is gone
    epoch: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Message::user(text));
    }

    pub fn push_ai(&mut self, text: impl Into<String>) {
        self.push(Message::ai(text));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Drops the whole history. There is no way to remove a single message.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }
}
