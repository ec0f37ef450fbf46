//! Trailing debounce deadline for query input.
//!
//! The engine owns at most one outstanding deadline. Arming while a
//! deadline is pending restarts the quiet window (restart-on-activity,
//! not a queue of callbacks). The deadline is plain data, so dropping
//! the owner cancels it with nothing left to fire after disposal.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// A single optional quiet-window deadline.
#[derive(Debug)]
pub(crate) struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the deadline at `now + delay`.
    pub(crate) fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Clears the deadline without firing.
    pub(crate) fn disarm(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolves once the deadline passes; pends forever while unarmed.
    ///
    /// Intended as a `tokio::select!` branch in the caller's event
    /// loop, followed by a call that commits the debounced value.
    pub(crate) async fn elapsed(&self) {
        match self.deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_resolves_after_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        debouncer.arm();

        tokio::time::advance(Duration::from_millis(999)).await;
        assert!(
            tokio::time::timeout(Duration::ZERO, debouncer.elapsed())
                .await
                .is_err()
        );

        tokio::time::advance(Duration::from_millis(1)).await;
        debouncer.elapsed().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_restarts_the_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        debouncer.arm();

        tokio::time::advance(Duration::from_millis(900)).await;
        debouncer.arm();

        // 100ms short of the original deadline, 200ms into the new one.
        tokio::time::advance(Duration::from_millis(200)).await;
        assert!(
            tokio::time::timeout(Duration::ZERO, debouncer.elapsed())
                .await
                .is_err()
        );

        tokio::time::advance(Duration::from_millis(800)).await;
        debouncer.elapsed().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_unarmed_pends_forever() {
        let debouncer = Debouncer::new(Duration::from_millis(1000));
        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(
            tokio::time::timeout(Duration::ZERO, debouncer.elapsed())
                .await
                .is_err()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_cancels() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        debouncer.arm();
        debouncer.disarm();
        assert!(!debouncer.is_armed());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(
            tokio::time::timeout(Duration::ZERO, debouncer.elapsed())
                .await
                .is_err()
        );
    }
}
