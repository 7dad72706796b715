use super::*;

fn token(generation: u64) -> TimerToken {
    TimerToken { item: uuid::Uuid::nil(), generation }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================
// ManualScheduler
// =============================================================

#[test]
fn manual_delivers_only_due_tokens() {
    let mut s = ManualScheduler::new();
    s.schedule(token(1), ms(100));
    s.schedule(token(2), ms(300));
    assert!(s.advance(ms(99)).is_empty());
    assert_eq!(s.advance(ms(1)), vec![token(1)]);
    assert_eq!(s.pending_len(), 1);
    assert_eq!(s.advance(ms(500)), vec![token(2)]);
    assert_eq!(s.pending_len(), 0);
}

#[test]
fn manual_orders_by_due_time_then_insertion() {
    let mut s = ManualScheduler::new();
    s.schedule(token(1), ms(50));
    s.schedule(token(2), ms(10));
    s.schedule(token(3), ms(10));
    assert_eq!(s.advance(ms(60)), vec![token(2), token(3), token(1)]);
}

#[test]
fn manual_cancel_drops_pending() {
    let mut s = ManualScheduler::new();
    s.schedule(token(1), ms(10));
    s.cancel(token(1));
    s.cancel(token(99));
    assert!(s.advance(ms(100)).is_empty());
}

#[test]
fn manual_next_due_in_tracks_clock() {
    let mut s = ManualScheduler::new();
    assert_eq!(s.next_due_in(), None);
    s.schedule(token(1), ms(120));
    s.advance(ms(20));
    assert_eq!(s.next_due_in(), Some(ms(100)));
    assert_eq!(s.now(), ms(20));
}

// =============================================================
// TokioScheduler
// =============================================================

#[tokio::test(start_paused = true)]
async fn tokio_delivers_after_delay() {
    let (mut s, mut rx) = TokioScheduler::new(Handle::current());
    s.schedule(token(7), ms(120));
    assert_eq!(s.pending_len(), 1);

    tokio::time::sleep(ms(119)).await;
    assert!(rx.try_recv().is_err());

    let delivered = rx.recv().await;
    assert_eq!(delivered, Some(token(7)));
}

#[tokio::test(start_paused = true)]
async fn tokio_cancel_prevents_delivery() {
    let (mut s, mut rx) = TokioScheduler::new(Handle::current());
    s.schedule(token(1), ms(50));
    s.schedule(token(2), ms(100));
    s.cancel(token(1));

    assert_eq!(rx.recv().await, Some(token(2)));
    tokio::time::sleep(ms(500)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn tokio_drop_aborts_pending_timers() {
    let (mut s, mut rx) = TokioScheduler::new(Handle::current());
    s.schedule(token(1), ms(50));
    drop(s);
    tokio::time::sleep(ms(100)).await;
    assert!(rx.recv().await.is_none());
}
