//! Tests de la work queue genérica: batch completo, aislamiento de fallos
//! y defectos a nivel de queue.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use artifact_visit::{ParallelExecutor, QueueError, VisitError, WorkQueue, WorkUnit};

struct CountingUnit {
    name: String,
    fail: bool,
    delay: Duration,
    runs: Arc<AtomicUsize>,
}

impl CountingUnit {
    fn ok(name: &str, runs: &Arc<AtomicUsize>) -> Self {
        Self { name: name.to_string(),
               fail: false,
               delay: Duration::ZERO,
               runs: Arc::clone(runs) }
    }

    fn failing(name: &str, runs: &Arc<AtomicUsize>) -> Self {
        Self { fail: true,
               ..Self::ok(name, runs) }
    }
}

impl WorkUnit for CountingUnit {
    fn description(&self) -> String {
        format!("unit {}", self.name)
    }

    fn run(&self) -> Result<(), VisitError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.runs.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(VisitError::Internal(format!("{} exploded", self.name)));
        }
        Ok(())
    }
}

#[test]
fn empty_batch_completes_immediately() {
    let executor = ParallelExecutor::new(4);
    let queue: WorkQueue<CountingUnit> = WorkQueue::new();
    let completed = executor.run(queue).expect("empty batch is not an error");
    assert!(completed.is_empty());
}

#[test]
fn a_failing_unit_never_cancels_its_siblings() {
    let runs = Arc::new(AtomicUsize::new(0));
    let executor = ParallelExecutor::new(2);
    let mut queue = WorkQueue::new();
    queue.submit(CountingUnit::ok("first", &runs));
    queue.submit(CountingUnit::failing("second", &runs));
    queue.submit(CountingUnit::ok("third", &runs));

    let completed = executor.run(queue).expect("unit failures are not queue failures");

    assert_eq!(runs.load(Ordering::SeqCst), 3, "every unit ran to a terminal state");
    assert_eq!(completed.len(), 3);
    // Los resultados vuelven en orden de submit, cada uno con su Result.
    assert!(completed[0].result.is_ok());
    assert_eq!(completed[1].result,
               Err(VisitError::Internal("second exploded".to_string())));
    assert!(completed[2].result.is_ok());
}

#[test]
fn results_come_back_in_submit_order_even_under_contention() {
    let runs = Arc::new(AtomicUsize::new(0));
    let executor = ParallelExecutor::new(4);
    let mut queue = WorkQueue::new();
    for (index, delay_ms) in [50u64, 0, 30, 5].iter().enumerate() {
        let mut unit = CountingUnit::ok(&format!("u{index}"), &runs);
        unit.delay = Duration::from_millis(*delay_ms);
        queue.submit(unit);
    }

    let completed = executor.run(queue).expect("batch should complete");
    let names: Vec<String> = completed.iter().map(|c| c.unit.description()).collect();
    assert_eq!(names, vec!["unit u0", "unit u1", "unit u2", "unit u3"]);
}

#[test]
fn more_units_than_workers_still_all_run() {
    let runs = Arc::new(AtomicUsize::new(0));
    let executor = ParallelExecutor::new(2);
    let mut queue = WorkQueue::new();
    for index in 0..16 {
        queue.submit(CountingUnit::ok(&format!("u{index}"), &runs));
    }

    let completed = executor.run(queue).expect("batch should complete");
    assert_eq!(completed.len(), 16);
    assert_eq!(runs.load(Ordering::SeqCst), 16);
}

#[test]
fn zero_workers_is_a_queue_level_defect() {
    let runs = Arc::new(AtomicUsize::new(0));
    let executor = ParallelExecutor::new(0);
    let mut queue = WorkQueue::new();
    queue.submit(CountingUnit::ok("never", &runs));

    assert_eq!(executor.run(queue).err(), Some(QueueError::NoWorkers));
    assert_eq!(runs.load(Ordering::SeqCst), 0, "nothing must run without workers");
}
