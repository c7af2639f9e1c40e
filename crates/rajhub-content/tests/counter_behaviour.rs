use rajhub_content::{AnimatedCounter, CounterPhase, StartOutcome};

fn run(target: i64, duration_ms: u32, steps: u32) -> Vec<u64> {
    let mut counter = AnimatedCounter::new(target, duration_ms, steps).unwrap();
    assert_eq!(counter.start(), StartOutcome::Started);
    counter.ticks().collect()
}

#[test]
fn final_value_is_exact_target() {
    for target in [0, 1, 7, 24, 99, 735, 746_000, 38_500_000] {
        for steps in [1, 3, 7, 10, 60, 61] {
            let values = run(target, 2000, steps);
            assert_eq!(values.last().copied(), Some(target as u64), "target={target} steps={steps}");
        }
    }
}

#[test]
fn values_never_decrease_and_never_exceed_target() {
    for target in [5, 13, 1000, 746_000] {
        let values = run(target, 2000, 60);
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "target={target}: {values:?}");
        assert!(values.iter().all(|&v| v <= target as u64));
    }
}

#[test]
fn tick_count_bounded_by_steps() {
    for steps in [1, 2, 9, 60, 120] {
        for target in [0, 1, 3, 50, 38_500_000] {
            let values = run(target, 1000, steps);
            assert!(values.len() <= steps as usize, "target={target} steps={steps} ticks={}", values.len());
        }
    }
}

#[test]
fn hundred_in_ten_steps() {
    assert_eq!(run(100, 1000, 10), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
}

#[test]
fn fractional_steps_are_floored() {
    // 10 / 4 = 2.5 per step
    assert_eq!(run(10, 400, 4), vec![2, 5, 7, 10]);
}

#[test]
fn nothing_after_cancel() {
    let mut counter = AnimatedCounter::new(600, 2000, 60).unwrap();
    counter.start();
    let before: Vec<u64> = counter.ticks().take(5).collect();
    assert_eq!(before, vec![10, 20, 30, 40, 50]);

    counter.cancel();
    assert_eq!(counter.ticks().count(), 0);
    assert_eq!(counter.phase(), CounterPhase::Idle);
}

#[test]
fn retrigger_while_running_keeps_single_sequence() {
    let mut counter = AnimatedCounter::new(30, 300, 3).unwrap();
    counter.start();
    let mut emitted = vec![counter.tick().unwrap()];

    // visibility flickers back on mid-animation
    assert_eq!(counter.start(), StartOutcome::AlreadyRunning);
    emitted.extend(counter.ticks());

    assert_eq!(emitted, vec![10, 20, 30]);
}
