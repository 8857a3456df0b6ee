//! Background fetches tagged with request generations.
//!
//! Every request bumps a generation counter and runs on its own worker thread.
//! Results come back over a channel tagged with the generation they answer,
//! and only the answer to the most recent request is ever handed to the UI.
//! Older answers that arrive late are dropped, so a slow response can never
//! overwrite a newer one.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::models::activity::{Activity, WeekData};
use crate::models::filter::CategoryFilterSet;
use crate::models::week::FetchRange;
use crate::services::source::{ActivitySource, SourceError};

/// Called from the worker thread once a result has been sent.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Failed(String),
}

struct Tagged<T> {
    generation: u64,
    result: Result<T, String>,
}

struct Generations<T> {
    tx: Sender<Tagged<T>>,
    rx: Receiver<Tagged<T>>,
    issued: u64,
    settled: u64,
    label: &'static str,
    notifier: Option<Notifier>,
}

impl<T: Send + 'static> Generations<T> {
    fn new(label: &'static str) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            issued: 0,
            settled: 0,
            label,
            notifier: None,
        }
    }

    fn spawn<F>(&mut self, job: F) -> u64
    where
        F: FnOnce() -> Result<T, SourceError> + Send + 'static,
    {
        self.issued += 1;
        let generation = self.issued;
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();

        thread::spawn(move || {
            let result = job().map_err(|err| err.to_string());
            let _ = tx.send(Tagged { generation, result });
            if let Some(notify) = notifier {
                notify();
            }
        });

        generation
    }

    fn poll(&mut self) -> Option<LoadOutcome<T>> {
        let mut outcome = None;

        loop {
            match self.rx.try_recv() {
                Ok(tagged) if tagged.generation == self.issued => {
                    self.settled = tagged.generation;
                    outcome = Some(match tagged.result {
                        Ok(value) => LoadOutcome::Loaded(value),
                        Err(message) => {
                            log::error!("{} request failed: {}", self.label, message);
                            LoadOutcome::Failed(message)
                        }
                    });
                }
                Ok(tagged) => {
                    log::debug!(
                        "Discarding stale {} response (generation {}, latest {})",
                        self.label,
                        tagged.generation,
                        self.issued
                    );
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        outcome
    }

    fn is_loading(&self) -> bool {
        self.settled < self.issued
    }
}

/// Loads weekly data for the calendar grid.
pub struct WeekLoader {
    source: Arc<dyn ActivitySource>,
    generations: Generations<WeekData>,
}

impl WeekLoader {
    pub fn new(source: Arc<dyn ActivitySource>) -> Self {
        Self {
            source,
            generations: Generations::new("weekly data"),
        }
    }

    /// Wake the UI whenever a response arrives.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.generations.notifier = Some(notifier);
        self
    }

    /// Start fetching `range`; supersedes every earlier request.
    pub fn request(&mut self, range: FetchRange, filter: &CategoryFilterSet) -> u64 {
        let source = Arc::clone(&self.source);
        let filter = filter.clone();
        log::debug!("Requesting weekly data {} to {}", range.start, range.end);
        self.generations
            .spawn(move || source.fetch_week(&range, &filter))
    }

    /// The latest request's result, once it has arrived.
    pub fn poll(&mut self) -> Option<LoadOutcome<WeekData>> {
        self.generations.poll()
    }

    pub fn is_loading(&self) -> bool {
        self.generations.is_loading()
    }

    pub fn generation(&self) -> u64 {
        self.generations.issued
    }
}

/// Loads a single activity for the detail view.
pub struct DetailLoader {
    source: Arc<dyn ActivitySource>,
    generations: Generations<Activity>,
}

impl DetailLoader {
    pub fn new(source: Arc<dyn ActivitySource>) -> Self {
        Self {
            source,
            generations: Generations::new("activity details"),
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.generations.notifier = Some(notifier);
        self
    }

    pub fn request(&mut self, id: i64) -> u64 {
        let source = Arc::clone(&self.source);
        self.generations.spawn(move || source.fetch_activity(id))
    }

    pub fn poll(&mut self) -> Option<LoadOutcome<Activity>> {
        self.generations.poll()
    }

    pub fn is_loading(&self) -> bool {
        self.generations.is_loading()
    }
}
