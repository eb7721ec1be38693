//! Pre-generated puzzle supply
//!
//! One bounded FIFO queue of ready puzzles per word length. Consumers pop
//! instantly; dropping below half capacity schedules a background refill.
//! Refills for one length are coalesced through an in-flight flag, and each
//! produced puzzle is appended as soon as it exists so a concurrent consumer
//! can observe partial progress. Queues for different lengths share nothing
//! and never contend.

use super::cancel::CancellationToken;
use super::generator::Puzzle;
use crate::core::Word;
use crate::engine::LadderEngine;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

/// Default number of ready puzzles kept per word length
pub const DEFAULT_QUEUE_CAPACITY: usize = 20;

/// Everything one word length needs: its engine, its hub set, its queue.
///
/// The queue is only ever touched under its own mutex; entries are immutable
/// once constructed, so a popped puzzle is never observed half-built.
struct LengthState {
    engine: Arc<LadderEngine>,
    hubs: Vec<Word>,
    queue: Mutex<VecDeque<Puzzle>>,
    refilling: AtomicBool,
}

impl LengthState {
    fn lock_queue(&self) -> MutexGuard<'_, VecDeque<Puzzle>> {
        // Entries are immutable, so a poisoned queue is still coherent.
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serves pre-validated puzzles with no perceptible latency
///
/// Engines are registered per length; consumption and background refill then
/// run independently per length. There is no stopped state: refilling is
/// idempotent and safe to re-trigger at any time.
pub struct PuzzleCache {
    capacity: usize,
    lengths: Mutex<FxHashMap<usize, Arc<LengthState>>>,
    token: CancellationToken,
}

impl PuzzleCache {
    /// Create a cache with the given per-length queue capacity
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lengths: Mutex::new(FxHashMap::default()),
            token: CancellationToken::new(),
        }
    }

    /// Per-length queue capacity
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Register (or replace) the engine serving one word length
    ///
    /// The hub scan runs once here; refill workers reuse the result for every
    /// generation attempt. Replacing an engine discards that length's queued
    /// puzzles, which were generated against the old word set.
    pub fn register(&self, engine: Arc<LadderEngine>) {
        let hubs = engine.generator().hub_words(engine.graph());
        let state = Arc::new(LengthState {
            engine: Arc::clone(&engine),
            hubs,
            queue: Mutex::new(VecDeque::new()),
            refilling: AtomicBool::new(false),
        });

        self.lock_lengths().insert(engine.length(), state);
    }

    /// Pop the oldest ready puzzle for `length`
    ///
    /// FIFO order keeps entry freshness roughly bounded. Returns `None` for
    /// an empty or unregistered queue; that is the signal to fall back to
    /// direct generation, not an error. A pop that leaves the queue below
    /// half capacity schedules a coalesced background refill.
    #[must_use]
    pub fn get_puzzle(&self, length: usize) -> Option<Puzzle> {
        let state = self.state_for(length)?;

        let (puzzle, remaining) = {
            let mut queue = state.lock_queue();
            let puzzle = queue.pop_front();
            (puzzle, queue.len())
        };

        if remaining < self.capacity.div_ceil(2) {
            self.spawn_refill(&state);
        }

        puzzle
    }

    /// Number of puzzles currently queued for `length`
    #[must_use]
    pub fn queued_len(&self, length: usize) -> usize {
        self.state_for(length).map_or(0, |state| state.lock_queue().len())
    }

    /// Schedule a background refill for `length` if none is in flight
    pub fn request_refill(&self, length: usize) {
        if let Some(state) = self.state_for(length) {
            self.spawn_refill(&state);
        }
    }

    /// Run a refill for `length` on the calling thread
    ///
    /// Respects the same coalescing flag as background refills; a no-op when
    /// one is already running. Useful for warming the cache before play
    /// starts.
    pub fn refill_blocking(&self, length: usize) {
        if let Some(state) = self.state_for(length)
            && !state.refilling.swap(true, Ordering::AcqRel)
        {
            Self::run_refill(&state, self.capacity, &self.token);
        }
    }

    /// Cancel all in-flight refill work
    ///
    /// Workers notice between generation attempts and wind down; queued
    /// puzzles stay available.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    fn spawn_refill(&self, state: &Arc<LengthState>) {
        if self.token.is_cancelled() {
            return;
        }

        // Check-and-set must be atomic with task creation: exactly one refill
        // per length may be in flight.
        if state.refilling.swap(true, Ordering::AcqRel) {
            return;
        }

        let state = Arc::clone(state);
        let capacity = self.capacity;
        let token = self.token.clone();
        thread::spawn(move || {
            Self::run_refill(&state, capacity, &token);
        });
    }

    /// Refill loop: generate until the queue is full, progress stalls, or
    /// cancellation is requested. Clears the in-flight flag on the way out.
    fn run_refill(state: &LengthState, capacity: usize, token: &CancellationToken) {
        let mut rng = rand::rng();

        loop {
            if token.is_cancelled() || state.lock_queue().len() >= capacity {
                break;
            }

            let generated = state.engine.generator().generate_with_hubs(
                state.engine.graph(),
                &state.hubs,
                &mut rng,
                token,
            );

            match generated {
                Some(puzzle) => {
                    let mut queue = state.lock_queue();
                    if queue.len() < capacity {
                        queue.push_back(puzzle);
                    }
                }
                // No progress this round; the consumer retries later.
                None => break,
            }
        }

        state.refilling.store(false, Ordering::Release);
    }

    fn state_for(&self, length: usize) -> Option<Arc<LengthState>> {
        self.lock_lengths().get(&length).cloned()
    }

    fn lock_lengths(&self) -> MutexGuard<'_, FxHashMap<usize, Arc<LengthState>>> {
        self.lengths.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn push_for_test(&self, length: usize, puzzle: Puzzle) {
        if let Some(state) = self.state_for(length) {
            state.lock_queue().push_back(puzzle);
        }
    }
}

impl Default for PuzzleCache {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}

impl Drop for PuzzleCache {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
