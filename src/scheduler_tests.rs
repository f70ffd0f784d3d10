//! Tests for scheduler

use super::*;
use proptest::prelude::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_new_scheduler_is_empty() {
    let scheduler: Scheduler<&str> = Scheduler::new();
    assert!(scheduler.is_empty());
    assert_eq!(scheduler.next_due(), None);
}

#[test]
fn test_clear_drops_pending_tasks() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(100), "a");
    scheduler.schedule(t0, ms(1000), "b");

    assert_eq!(scheduler.clear(), 2);
    assert!(scheduler.is_empty());
    assert_eq!(scheduler.next_due(), None);
    assert!(scheduler.drain_due(t0 + ms(5000)).is_empty());
}

#[test]
fn test_task_not_due_before_delay() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(2000), "gerado");

    assert!(scheduler.drain_due(t0).is_empty());
    assert!(scheduler.drain_due(t0 + ms(1999)).is_empty());
    assert_eq!(scheduler.len(), 1);
}

#[test]
fn test_task_due_at_delay() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(2000), "gerado");

    assert_eq!(scheduler.drain_due(t0 + ms(2000)), vec!["gerado"]);
    assert!(scheduler.is_empty());
}

#[test]
fn test_zero_delay_is_due_on_next_poll() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, Duration::ZERO, 1);

    assert_eq!(scheduler.drain_due(t0), vec![1]);
}

#[test]
fn test_drain_orders_by_due_time() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(300), "c");
    scheduler.schedule(t0, ms(100), "a");
    scheduler.schedule(t0, ms(200), "b");

    assert_eq!(scheduler.drain_due(t0 + ms(1000)), vec!["a", "b", "c"]);
}

#[test]
fn test_equal_due_times_keep_schedule_order() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(100), "primeiro");
    scheduler.schedule(t0, ms(100), "segundo");

    assert_eq!(scheduler.drain_due(t0 + ms(100)), vec!["primeiro", "segundo"]);
}

#[test]
fn test_partial_drain_keeps_pending() {
    let t0 = Instant::now();
    let mut scheduler = Scheduler::new();
    scheduler.schedule(t0, ms(100), "cedo");
    scheduler.schedule(t0, ms(1000), "tarde");

    assert_eq!(scheduler.drain_due(t0 + ms(500)), vec!["cedo"]);
    assert_eq!(scheduler.next_due(), Some(t0 + ms(1000)));
    assert_eq!(scheduler.drain_due(t0 + ms(1000)), vec!["tarde"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Draining at any cut-off returns exactly the tasks due by then, in
    /// non-decreasing due order, and leaves the rest pending.
    #[test]
    fn prop_drain_partitions_by_due_time(
        delays in prop::collection::vec(0u64..5000, 0..20),
        cutoff in 0u64..5000,
    ) {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        for (index, delay) in delays.iter().enumerate() {
            scheduler.schedule(t0, ms(*delay), (index, *delay));
        }

        let drained = scheduler.drain_due(t0 + ms(cutoff));
        let expected = delays.iter().filter(|d| **d <= cutoff).count();

        prop_assert_eq!(drained.len(), expected);
        prop_assert_eq!(scheduler.len(), delays.len() - expected);
        prop_assert!(drained.windows(2).all(|w| w[0].1 < w[1].1 || (w[0].1 == w[1].1 && w[0].0 < w[1].0)));
    }
}
