use super::*;

#[test]
fn budget_matches_frame_rate() {
    assert_eq!(FrameClock::new(50).budget, Duration::from_millis(20));
}

#[test]
fn zero_fps_is_treated_as_one() {
    assert_eq!(FrameClock::new(0).budget, Duration::from_secs(1));
}

#[test]
fn tick_waits_out_the_budget() {
    let mut clock = FrameClock::new(100);
    let start = Instant::now();
    clock.tick();
    assert!(start.elapsed() >= Duration::from_millis(5));
}
