//! Hidden key sequence

/// Longest trigger word the rolling buffer can hold
pub const KEY_BUFFER_LEN: usize = 8;

/// Rolling buffer of the most recent typed characters
#[derive(Debug, Clone)]
pub struct KeySequence {
    buffer: String,
    trigger: String,
    capacity: usize,
}

impl KeySequence {
    pub fn new(trigger: &str) -> Self {
        let trigger = trigger.to_lowercase();
        let capacity = trigger.chars().count().clamp(1, KEY_BUFFER_LEN);
        Self {
            buffer: String::new(),
            trigger,
            capacity,
        }
    }

    /// Record a keydown; true exactly when the buffer now spells the trigger
    ///
    /// Key names longer than one character (`Shift`, `Enter`) are appended
    /// as typed, which breaks any sequence in progress.
    pub fn push(&mut self, key: &str) -> bool {
        self.buffer.push_str(&key.to_lowercase());

        let len = self.buffer.chars().count();
        if len > self.capacity {
            self.buffer = self.buffer.chars().skip(len - self.capacity).collect();
        }

        if self.buffer == self.trigger {
            self.buffer.clear();
            return true;
        }
        false
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
