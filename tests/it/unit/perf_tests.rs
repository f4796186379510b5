//! Unit tests for perf module.

use std::thread;
use std::time::Duration;
use zoompan::perf::HandlerTimer;

#[test]
fn test_timer_keeps_handler_name() {
    // Generous budget, so dropping must not warn
    let timer = HandlerTimer::new("handle_wheel", 1000.0);
    assert_eq!(timer.handler(), "handle_wheel");
    assert!(!timer.over_budget());
}

#[test]
fn test_elapsed_is_monotonic() {
    let timer = HandlerTimer::with_default_budget("handle_mouse_move");
    let first = timer.elapsed_ms();
    let second = timer.elapsed_ms();
    assert!(first >= 0.0);
    assert!(second >= first);
}

#[test]
fn test_zero_budget_is_exceeded() {
    let timer = HandlerTimer::new("handle_two_touch_move", 0.0);
    thread::sleep(Duration::from_millis(1));
    assert!(timer.over_budget());
}

#[test]
fn test_timer_armed_only_with_profiling() {
    let timer = HandlerTimer::when_profiling("handle_wheel", 4.0);
    assert_eq!(timer.is_some(), cfg!(feature = "profiling"));
}

#[test]
fn test_time_handler_macro_in_statement_position() {
    fn handler() -> u32 {
        zoompan::time_handler!("handler");
        zoompan::time_handler!("handler_with_budget", 50.0);
        7
    }
    assert_eq!(handler(), 7);
}
