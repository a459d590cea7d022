use std::sync::Mutex;

/// Latest-value handoff between an asynchronous producer (the hand
/// tracker) and the render tick.
///
/// `post` overwrites any undelivered value and `take` drains the slot:
/// only the most recent observation is ever relevant, so there is no
/// queue, no blocking beyond the slot lock, and no ordering guarantee
/// past "newest wins".
pub struct Mailbox<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Publish a value, replacing any stale unconsumed one.
    pub fn post(&self, value: T) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(value);
        }
    }

    /// Take the most recent value, if one arrived since the last take.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
