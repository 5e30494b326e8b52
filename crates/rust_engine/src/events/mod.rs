//! Deferred event scheduling
//!
//! Fire-once events are posted with a delivery time and the epoch that was
//! current when they were scheduled. The owner bumps its epoch whenever the
//! world is reset; delivery then hands back the tag so stale events can be
//! recognised and dropped instead of mutating the new world.
//!
//! Events are not cancelable individually, matching wall-clock timers.

/// Monotonic generation counter used to invalidate pending events
pub type Epoch = u64;

/// An event that became due
#[derive(Debug, Clone, PartialEq)]
pub struct DueEvent<E> {
    /// Time the event was scheduled to fire (seconds)
    pub due_at: f64,
    /// Epoch captured when the event was posted
    pub epoch: Epoch,
    /// The event payload
    pub event: E,
}

impl<E> DueEvent<E> {
    /// Whether this event was posted during `current`
    pub fn is_current(&self, current: Epoch) -> bool {
        self.epoch == current
    }
}

/// Queue of pending one-shot events ordered by delivery time
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    pending: Vec<DueEvent<E>>,
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Post `event` for delivery at `due_at`, tagged with `epoch`
    pub fn post(&mut self, due_at: f64, epoch: Epoch, event: E) {
        // Stable insert: equal times keep posting order
        let index = self.pending.partition_point(|pending| pending.due_at <= due_at);
        self.pending.insert(index, DueEvent { due_at, epoch, event });
    }

    /// Remove and return every event due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: f64) -> Vec<DueEvent<E>> {
        let split = self.pending.partition_point(|pending| pending.due_at <= now);
        self.pending.drain(..split).collect()
    }

    /// Number of events still waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Delivery time of the next pending event
    pub fn next_due(&self) -> Option<f64> {
        self.pending.first().map(|pending| pending.due_at)
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deferred_delivery() {
        let mut scheduler = Scheduler::new();
        scheduler.post(1.5, 0, "respawn");

        assert!(scheduler.drain_due(0.5).is_empty());
        assert_eq!(scheduler.len(), 1);

        let due = scheduler.drain_due(1.5);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].event, "respawn");
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_delivery_order_by_time_then_posting() {
        let mut scheduler = Scheduler::new();
        scheduler.post(2.0, 0, 'c');
        scheduler.post(1.0, 0, 'a');
        scheduler.post(1.0, 0, 'b');

        assert_eq!(scheduler.next_due(), Some(1.0));
        let order: Vec<char> = scheduler.drain_due(10.0).into_iter().map(|due| due.event).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_epoch_tag_is_preserved() {
        let mut scheduler = Scheduler::new();
        scheduler.post(0.1, 3, ());
        let due = scheduler.drain_due(1.0);
        assert!(due[0].is_current(3));
        assert!(!due[0].is_current(4));
    }

    #[test]
    fn test_partial_drain_keeps_later_events() {
        let mut scheduler = Scheduler::new();
        scheduler.post(1.0, 0, 1);
        scheduler.post(3.0, 0, 3);
        assert_eq!(scheduler.drain_due(2.0).len(), 1);
        assert_eq!(scheduler.next_due(), Some(3.0));
    }
}
