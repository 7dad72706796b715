use super::*;

fn blink() -> AlertBlink {
    AlertBlink::new(uuid::Uuid::new_v4())
}

/// Deliver armed tokens until the blink settles; returns the number of deliveries.
fn run_to_quiet(b: &mut AlertBlink, mut token: TimerToken) -> usize {
    let mut fired = 0;
    loop {
        fired += 1;
        match b.fire(token) {
            BlinkStep::Rearm(next) => token = next,
            BlinkStep::Settled => return fired,
            BlinkStep::Stale => panic!("armed token reported stale"),
        }
    }
}

// =============================================================
// Trigger
// =============================================================

#[test]
fn starts_quiet() {
    let b = blink();
    assert_eq!(b.phase(), BlinkPhase::Quiet);
    assert_eq!(b.counter(), 0);
    assert!(!b.is_active());
    assert!(b.pending().is_none());
}

#[test]
fn trigger_flashes_and_arms() {
    let mut b = blink();
    let token = b.trigger().unwrap();
    assert_eq!(b.phase(), BlinkPhase::Flash);
    assert_eq!(b.counter(), 1);
    assert_eq!(b.pending(), Some(token));
}

#[test]
fn trigger_while_active_is_debounced() {
    let mut b = blink();
    let first = b.trigger().unwrap();
    assert!(b.trigger().is_none());
    assert!(b.trigger().is_none());
    assert_eq!(b.pending(), Some(first));
    assert_eq!(b.counter(), 1);
}

#[test]
fn counter_stays_in_cycle_range_until_settled() {
    let mut b = blink();
    let mut token = b.trigger().unwrap();
    let mut seen = vec![b.counter()];
    while let BlinkStep::Rearm(next) = b.fire(token) {
        seen.push(b.counter());
        token = next;
    }
    assert!(seen.iter().all(|c| (1..=ALERT_BLINK_CYCLES).contains(c)), "{seen:?}");
    assert_eq!(seen.iter().max(), Some(&ALERT_BLINK_CYCLES));
    assert_eq!(b.counter(), 0);
}

// =============================================================
// Phases
// =============================================================

#[test]
fn phases_alternate() {
    let mut b = blink();
    let t1 = b.trigger().unwrap();
    let BlinkStep::Rearm(t2) = b.fire(t1) else { panic!("expected rearm") };
    assert_eq!(b.phase(), BlinkPhase::Secondary);
    assert_eq!(b.counter(), 1);
    let BlinkStep::Rearm(_) = b.fire(t2) else { panic!("expected rearm") };
    assert_eq!(b.phase(), BlinkPhase::Flash);
    assert_eq!(b.counter(), 2);
}

#[test]
fn settles_after_three_cycles() {
    let mut b = blink();
    let t = b.trigger().unwrap();
    assert_eq!(run_to_quiet(&mut b, t), 2 * usize::from(ALERT_BLINK_CYCLES));
    assert_eq!(b.phase(), BlinkPhase::Quiet);
    assert_eq!(b.counter(), 0);
    assert!(b.pending().is_none());
}

#[test]
fn can_retrigger_after_settling() {
    let mut b = blink();
    let t = b.trigger().unwrap();
    run_to_quiet(&mut b, t);
    assert!(b.trigger().is_some());
}

#[test]
fn rapid_triggers_settle_once() {
    let mut b = blink();
    let t = b.trigger().unwrap();
    b.trigger();
    b.trigger();
    let mut settles = 0;
    let mut token = t;
    loop {
        match b.fire(token) {
            BlinkStep::Rearm(next) => token = next,
            BlinkStep::Settled => settles += 1,
            BlinkStep::Stale => break,
        }
    }
    assert_eq!(settles, 1);
}

// =============================================================
// Stale tokens and cancellation
// =============================================================

#[test]
fn old_token_is_stale() {
    let mut b = blink();
    let t1 = b.trigger().unwrap();
    b.fire(t1);
    assert_eq!(b.fire(t1), BlinkStep::Stale);
    assert_eq!(b.phase(), BlinkPhase::Secondary);
}

#[test]
fn foreign_item_token_is_stale() {
    let mut b = blink();
    let t = b.trigger().unwrap();
    let foreign = TimerToken { item: uuid::Uuid::new_v4(), generation: t.generation };
    assert_eq!(b.fire(foreign), BlinkStep::Stale);
}

#[test]
fn cancel_returns_armed_token_and_quiets() {
    let mut b = blink();
    let t = b.trigger().unwrap();
    assert_eq!(b.cancel(), Some(t));
    assert_eq!(b.phase(), BlinkPhase::Quiet);
    assert_eq!(b.fire(t), BlinkStep::Stale);
    assert_eq!(b.cancel(), None);
}
