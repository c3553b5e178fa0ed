use tokio::sync::watch;

/// Marks one capture or playback attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AttemptToken(u64);

impl AttemptToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic attempt counter. Starting a new attempt or invalidating the
/// current one makes every older token stale.
#[derive(Debug)]
pub struct AttemptCounter {
    current: watch::Sender<u64>,
}

impl Default for AttemptCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: watch::Sender::new(0),
        }
    }

    pub fn begin(&self) -> AttemptToken {
        let mut id = 0;
        self.current.send_modify(|value| {
            *value += 1;
            id = *value;
        });
        AttemptToken(id)
    }

    pub fn invalidate(&self) {
        self.current.send_modify(|value| *value += 1);
    }

    #[must_use]
    pub fn is_current(&self, token: AttemptToken) -> bool {
        *self.current.borrow() == token.0
    }

    /// Resolves once `token` is no longer the current attempt.
    pub async fn superseded(&self, token: AttemptToken) {
        let mut rx = self.current.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|value| *value != token.0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn newer_attempts_supersede_older_ones() {
        let counter = AttemptCounter::new();
        let first = counter.begin();
        assert!(counter.is_current(first));

        let second = counter.begin();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert!(second > first);

        counter.invalidate();
        assert!(!counter.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_resolves_on_invalidate() {
        let counter = std::sync::Arc::new(AttemptCounter::new());
        let token = counter.begin();

        let waiter = {
            let counter = std::sync::Arc::clone(&counter);
            tokio::spawn(async move { counter.superseded(token).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        counter.invalidate();
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn superseded_is_immediate_for_stale_tokens() {
        let counter = AttemptCounter::new();
        let stale = counter.begin();
        counter.begin();
        counter.superseded(stale).await;
    }
}
