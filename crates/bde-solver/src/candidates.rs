//! Candidate switch times - projections of past switches through the delays
//!
//! Because every equation is Boolean and every delay is a positive
//! constant, a modelled variable can only switch at a time of the form
//! `t_s + delay` for some existing switch `t_s`. That observation bounds
//! the candidate set exactly; the queue below holds it.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bde_core::Tolerance;

/// A candidate time, ordered by `f64::total_cmp` so it can live in a heap.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Candidate(f64);

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Min-heap of candidate switch times within `[start, end]`.
///
/// Tolerance-equal candidates are collapsed at pop time: arithmetic
/// rearrangement (`t1 + d2` vs `t2 + d1`) can yield numerically distinct
/// timestamps for the same physical event, and evaluating it twice would
/// manufacture spurious switches.
pub struct CandidateQueue {
    heap: BinaryHeap<Reverse<Candidate>>,
    start: f64,
    end: f64,
    tol: Tolerance,
}

impl CandidateQueue {
    /// An empty queue accepting candidates in `[start, end]`.
    pub fn new(start: f64, end: f64, tol: Tolerance) -> Self {
        CandidateQueue {
            heap: BinaryHeap::new(),
            start,
            end,
            tol,
        }
    }

    /// Enqueue a candidate, silently dropping it when outside the window.
    pub fn push(&mut self, t: f64) {
        if self.tol.ge(t, self.start) && self.tol.le(t, self.end) {
            self.heap.push(Reverse(Candidate(t)));
        }
    }

    /// Enqueue the projection of a switch time through every delay.
    pub fn push_projections(&mut self, t_switch: f64, delays: &[f64]) {
        for &delay in delays {
            self.push(t_switch + delay);
        }
    }

    /// Pop the earliest candidate, draining every candidate within
    /// tolerance of it. Returns `None` once the queue is exhausted.
    pub fn pop(&mut self) -> Option<f64> {
        let Reverse(Candidate(t)) = self.heap.pop()?;
        while let Some(&Reverse(Candidate(next))) = self.heap.peek() {
            if !self.tol.eq(next, t) {
                break;
            }
            self.heap.pop();
        }
        Some(t)
    }

    /// Number of pending candidates, duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
