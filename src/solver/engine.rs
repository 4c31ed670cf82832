//! Suggestion engine
//!
//! Runs board → filter → scorer on a background worker. Each `refresh`
//! supersedes the previous request: its token is canceled, the generation is
//! bumped, and only events of the newest generation are ever published.

use super::filter::{FilterResult, Progress, filter_with};
use super::scorer::{Ranking, score};
use crate::core::{Board, COLS};
use crate::wordlists::WordCorpus;
use log::{debug, warn};
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Message shown when the feedback rules out every answer
pub const NO_CANDIDATES_REASON: &str =
    "No valid answers left, maybe you set a letter to the wrong color?";

/// Engine tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Wait before starting work, so bursts of keystrokes cancel cheaply
    pub debounce: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(100),
        }
    }
}

/// Revocable permission for one computation to keep running and publish
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Ranked suggestions for a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub ranking: Arc<Ranking>,
    /// Letters confirmed per column, for highlighting
    pub locked: [Option<u8>; COLS],
    /// Answers still consistent with the board
    pub remaining: usize,
}

/// Terminal result of a computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Suggestions(Suggestions),
    /// Feedback is self-contradictory
    NoCandidates { reason: String },
}

/// Something the front end should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A computation was picked up
    Loading,
    Progress(Progress),
    Finished(Outcome),
}

/// An event tagged with the refresh that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub generation: u64,
    pub event: EngineEvent,
}

/// Run the whole pipeline inline
///
/// `on_progress` is called once per inspected cell. Returns `None` if the
/// token is canceled at any check, including after the result is ready.
///
/// # Examples
/// ```
/// use wordle_assist::core::Board;
/// use wordle_assist::solver::{CancelToken, Outcome, compute};
/// use wordle_assist::wordlists::{WordCorpus, loader::words_from_slice};
///
/// let corpus = WordCorpus::new(words_from_slice(&["crane", "slate"]), &[], &[]).unwrap();
/// let board = Board::from_guesses(&[("crane", "-----")]).unwrap();
///
/// let outcome = compute(&corpus, &board, &CancelToken::new(), |_| {});
/// assert!(matches!(outcome, Some(Outcome::NoCandidates { .. })));
/// ```
pub fn compute<F>(
    corpus: &WordCorpus,
    board: &Board,
    token: &CancelToken,
    mut on_progress: F,
) -> Option<Outcome>
where
    F: FnMut(Progress),
{
    let filtered = filter_with(board, corpus, |progress| {
        if token.is_canceled() {
            return ControlFlow::Break(());
        }
        on_progress(progress);
        ControlFlow::Continue(())
    });

    let outcome = match filtered {
        ControlFlow::Break(()) => return None,
        ControlFlow::Continue(FilterResult::Unconstrained) => {
            Outcome::Suggestions(Suggestions {
                ranking: corpus.initial_ranking(),
                locked: [None; COLS],
                remaining: corpus.answers().len(),
            })
        }
        ControlFlow::Continue(FilterResult::Filtered(result)) => {
            if result.candidates.is_empty() {
                Outcome::NoCandidates {
                    reason: NO_CANDIDATES_REASON.to_string(),
                }
            } else {
                let stats = score(&result.candidates, corpus);
                Outcome::Suggestions(Suggestions {
                    ranking: Arc::new(Ranking::from_stats(&stats)),
                    locked: result.locked,
                    remaining: result.candidates.len(),
                })
            }
        }
    };

    if token.is_canceled() {
        return None;
    }
    Some(outcome)
}

struct Current {
    generation: u64,
    token: CancelToken,
}

struct Job {
    generation: u64,
    board: Board,
    token: CancelToken,
}

fn lock(current: &Mutex<Current>) -> MutexGuard<'_, Current> {
    current.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sends events for one job while it is still the newest
struct Publisher<'a> {
    current: &'a Mutex<Current>,
    updates: &'a Sender<Update>,
    generation: u64,
}

impl Publisher<'_> {
    fn publish(&self, event: EngineEvent) -> bool {
        // Holding the lock orders this send against `refresh`
        let current = lock(self.current);
        if current.generation != self.generation || current.token.is_canceled() {
            return false;
        }
        self.updates
            .send(Update {
                generation: self.generation,
                event,
            })
            .is_ok()
    }
}

/// Background suggestion engine
///
/// Only constructible from a loaded corpus. At most one computation runs at a
/// time; dropping the engine cancels it and joins the worker.
pub struct SuggestionEngine {
    current: Arc<Mutex<Current>>,
    jobs: Option<Sender<Job>>,
    updates: Receiver<Update>,
    worker: Option<JoinHandle<()>>,
}

impl SuggestionEngine {
    #[must_use]
    pub fn new(corpus: Arc<WordCorpus>, config: EngineConfig) -> Self {
        let current = Arc::new(Mutex::new(Current {
            generation: 0,
            token: CancelToken::new(),
        }));
        let (jobs_tx, jobs_rx) = mpsc::channel();
        let (updates_tx, updates_rx) = mpsc::channel();

        let worker_current = Arc::clone(&current);
        let worker = thread::spawn(move || {
            run_worker(&corpus, config, &worker_current, &jobs_rx, &updates_tx);
        });

        Self {
            current,
            jobs: Some(jobs_tx),
            updates: updates_rx,
            worker: Some(worker),
        }
    }

    /// Schedule a computation for `board`, superseding any earlier one
    ///
    /// Returns the generation its events will carry.
    pub fn refresh(&self, board: &Board) -> u64 {
        let job = {
            let mut current = lock(&self.current);
            current.token.cancel();
            current.generation += 1;
            current.token = CancelToken::new();
            Job {
                generation: current.generation,
                board: board.clone(),
                token: current.token.clone(),
            }
        };
        let generation = job.generation;
        debug!("refresh: generation {generation}");

        if let Some(jobs) = &self.jobs
            && jobs.send(job).is_err()
        {
            warn!("suggestion worker is gone, generation {generation} dropped");
        }
        generation
    }

    /// Cancel the in-flight computation without starting a new one
    pub fn cancel(&self) {
        lock(&self.current).token.cancel();
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        lock(&self.current).generation
    }

    fn is_current(&self, update: &Update) -> bool {
        update.generation == self.generation()
    }

    /// Next pending update of the newest generation, without blocking
    pub fn try_next(&self) -> Option<Update> {
        self.updates.try_iter().find(|update| self.is_current(update))
    }

    /// Wait up to `timeout` for the next update of the newest generation
    pub fn next_timeout(&self, timeout: Duration) -> Option<Update> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            match self.updates.recv_timeout(remaining) {
                Ok(update) if self.is_current(&update) => return Some(update),
                Ok(_) => {}
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Wait up to `timeout` for the newest generation to finish
    ///
    /// Progress and loading events seen on the way are passed to `on_event`.
    pub fn wait_outcome<F>(&self, timeout: Duration, mut on_event: F) -> Option<Outcome>
    where
        F: FnMut(&EngineEvent),
    {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let update = self.next_timeout(remaining)?;
            match update.event {
                EngineEvent::Finished(outcome) => return Some(outcome),
                ref event => on_event(event),
            }
        }
    }
}

impl Drop for SuggestionEngine {
    fn drop(&mut self) {
        self.cancel();
        self.jobs.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            warn!("suggestion worker panicked");
        }
    }
}

fn run_worker(
    corpus: &WordCorpus,
    config: EngineConfig,
    current: &Mutex<Current>,
    jobs: &Receiver<Job>,
    updates: &Sender<Update>,
) {
    while let Ok(mut job) = jobs.recv() {
        // Only the newest queued job matters
        for newer in jobs.try_iter() {
            debug!("generation {} superseded before start", job.generation);
            job = newer;
        }
        if job.token.is_canceled() {
            debug!("generation {} canceled before start", job.generation);
            continue;
        }

        let publisher = Publisher {
            current,
            updates,
            generation: job.generation,
        };
        publisher.publish(EngineEvent::Loading);

        thread::sleep(config.debounce);
        if job.token.is_canceled() {
            debug!("generation {} canceled during debounce", job.generation);
            continue;
        }

        let started = Instant::now();
        let outcome = compute(corpus, &job.board, &job.token, |progress| {
            publisher.publish(EngineEvent::Progress(progress));
        });

        match outcome {
            Some(outcome) => {
                debug!(
                    "generation {} finished in {:?}",
                    job.generation,
                    started.elapsed()
                );
                publisher.publish(EngineEvent::Finished(outcome));
            }
            None => debug!("generation {} canceled while running", job.generation),
        }
    }
    debug!("suggestion worker stopped");
}
