//! Unit tests for perf module.

use folio::perf::ScopedTimer;
use std::time::Duration;

#[test]
fn test_scoped_timer_within_budget() {
    // Generous budget, nothing reported on drop
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
    assert!(!timer.over_budget());
}

#[test]
fn test_scoped_timer_over_budget() {
    let timer = ScopedTimer::new("slow_op", 1.0);
    std::thread::sleep(Duration::from_millis(5));
    assert!(timer.elapsed_ms() >= 5.0);
    assert!(timer.over_budget());
}

#[test]
fn test_profile_scope_macro_forms() {
    folio::profile_scope!("macro_scope");
    folio::profile_scope!("macro_scope_budget", folio::perf::TARGET_FRAME_MS);
}
