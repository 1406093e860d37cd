//! Query result channel polling

use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::tui::handlers::query::QueryOutcome;

/// State of one in-flight query after a poll
#[derive(Debug)]
pub enum QueryPoll {
    /// Nothing in flight, or still waiting
    Pending,
    /// The task finished and sent its outcome
    Ready(QueryOutcome),
    /// The task ended without sending anything
    Lost,
}

/// Check a query slot without blocking
///
/// The receiver stays in `slot` while the task is running and is dropped
/// once it has produced a result or disconnected.
pub fn poll_query(slot: &mut Option<UnboundedReceiver<QueryOutcome>>) -> QueryPoll {
    let Some(mut rx) = slot.take() else {
        return QueryPoll::Pending;
    };

    match rx.try_recv() {
        Ok(outcome) => QueryPoll::Ready(outcome),
        Err(TryRecvError::Empty) => {
            *slot = Some(rx);
            QueryPoll::Pending
        }
        Err(TryRecvError::Disconnected) => QueryPoll::Lost,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;

    use super::*;

    fn outcome(text: &str) -> QueryOutcome {
        QueryOutcome {
            result: Ok(text.to_string()),
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_empty_slot_is_pending() {
        let mut slot = None;
        assert!(matches!(poll_query(&mut slot), QueryPoll::Pending));
        assert!(slot.is_none());
    }

    #[test]
    fn test_waiting_keeps_receiver() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut slot = Some(rx);
        assert!(matches!(poll_query(&mut slot), QueryPoll::Pending));
        assert!(slot.is_some());
    }

    #[test]
    fn test_ready_clears_slot() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(outcome("Naruto")).unwrap();
        let mut slot = Some(rx);
        match poll_query(&mut slot) {
            QueryPoll::Ready(o) => assert_eq!(o.result.unwrap(), "Naruto"),
            other => panic!("expected Ready, got {other:?}"),
        }
        assert!(slot.is_none());
    }

    #[test]
    fn test_dropped_sender_is_lost() {
        let (tx, rx) = mpsc::unbounded_channel::<QueryOutcome>();
        drop(tx);
        let mut slot = Some(rx);
        assert!(matches!(poll_query(&mut slot), QueryPoll::Lost));
        assert!(slot.is_none());
    }
}
