use std::cmp::Ordering;

use anyhow::{bail, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use circq::CircularQueue;

use crate::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Fill,
    Drain,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub operations: usize,
    pub grows: usize,
    pub shrinks: usize,
    pub peak_capacity: usize,
    pub len: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub initial_capacity: usize,
    pub phases: Vec<PhaseReport>,
}

// Feeds the queue increasing sequence numbers so that every dequeue can be
// checked against the next expected value.
#[derive(Debug)]
struct Replay {
    queue: CircularQueue<u64>,
    next_in: u64,
    next_out: u64,
}

impl Replay {
    fn start(&self, phase: Phase) -> PhaseReport {
        PhaseReport {
            phase,
            operations: 0,
            grows: 0,
            shrinks: 0,
            peak_capacity: self.queue.capacity(),
            len: self.queue.len(),
            capacity: self.queue.capacity(),
        }
    }

    fn enqueue(&mut self, report: &mut PhaseReport) {
        let before = self.queue.capacity();
        self.queue.enqueue(self.next_in);
        self.next_in += 1;
        self.observe(report, before);
    }

    fn dequeue(&mut self, report: &mut PhaseReport) -> Result<()> {
        let before = self.queue.capacity();
        match self.queue.dequeue() {
            Some(value) if value != self.next_out => {
                bail!(
                    "out of order: expected {}, got {}",
                    self.next_out,
                    value
                )
            }
            Some(_) => self.next_out += 1,
            None => {
                if self.next_out != self.next_in {
                    bail!(
                        "queue reported empty with {} items outstanding",
                        self.next_in - self.next_out
                    );
                }
            }
        }
        self.observe(report, before);
        Ok(())
    }

    fn observe(&self, report: &mut PhaseReport, before: usize) {
        let after = self.queue.capacity();
        match after.cmp(&before) {
            Ordering::Greater => report.grows += 1,
            Ordering::Less => report.shrinks += 1,
            Ordering::Equal => {}
        }
        report.operations += 1;
        report.peak_capacity = report.peak_capacity.max(after);
        report.len = self.queue.len();
        report.capacity = after;
    }
}

/// Runs the fill, drain and random phases, verifying FIFO order throughout.
pub fn run(config: &AppConfig) -> Result<Report> {
    let queue = config.queue().build::<u64>();
    let initial_capacity = queue.initial_capacity();
    let mut replay = Replay {
        queue,
        next_in: 0,
        next_out: 0,
    };
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut phases = Vec::with_capacity(3);

    let mut report = replay.start(Phase::Fill);
    for _ in 0..config.operations {
        replay.enqueue(&mut report);
    }
    phases.push(finish(report));

    let mut report = replay.start(Phase::Drain);
    while !replay.queue.is_empty() {
        replay.dequeue(&mut report)?;
    }
    phases.push(finish(report));

    let mut report = replay.start(Phase::Random);
    for _ in 0..config.operations {
        if rng.gen_range(0..100) < config.enqueue_ratio {
            replay.enqueue(&mut report);
        } else {
            replay.dequeue(&mut report)?;
        }
    }
    debug!(front = ?replay.queue.peek(), "random phase done");
    phases.push(finish(report));

    Ok(Report {
        initial_capacity,
        phases,
    })
}

fn finish(report: PhaseReport) -> PhaseReport {
    info!(
        phase = ?report.phase,
        operations = report.operations,
        grows = report.grows,
        shrinks = report.shrinks,
        peak_capacity = report.peak_capacity,
        len = report.len,
        capacity = report.capacity,
        "phase finished"
    );
    report
}
