use crate::{SessionTimer, TickOutcome};

#[test]
fn test_timeout_fires_exactly_once() {
    let mut timer = SessionTimer::default();
    timer.start();

    let time_limit = 180.0;
    for tick in 1..=179 {
        assert_eq!(
            timer.register_tick(time_limit),
            TickOutcome::Running,
            "tick {tick} should keep running"
        );
    }

    assert_eq!(timer.register_tick(time_limit), TickOutcome::Expired);
    assert!(!timer.is_running());

    // A stray 181st tick must stay inert.
    assert_eq!(timer.register_tick(time_limit), TickOutcome::Stopped);
    assert_eq!(timer.elapsed(), 180.0);
}

#[test]
fn test_stopped_timer_ignores_ticks() {
    let mut timer = SessionTimer::default();
    timer.start();
    let _ = timer.register_tick(100.0);
    timer.stop();

    assert_eq!(timer.register_tick(100.0), TickOutcome::Stopped);
    assert_eq!(timer.elapsed(), 1.0);
}

#[test]
fn test_start_resets_elapsed() {
    let mut timer = SessionTimer::default();
    timer.start();
    for _ in 0..5 {
        let _ = timer.register_tick(100.0);
    }
    assert_eq!(timer.elapsed(), 5.0);
    assert_eq!(timer.remaining(100.0), 95.0);

    timer.start();
    assert_eq!(timer.elapsed(), 0.0);
    assert!(timer.is_running());
}
