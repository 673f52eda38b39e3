//! Run an engine search on a worker thread so the caller stays responsive.

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread::{self, JoinHandle};

use gyroad_core::{Engine, GameState, SearchLimits, SearchResult, TimeControl};
use tracing::debug;

/// A search running in the background.
///
/// The engine is handed back together with the result so it can be reused
/// (and keep its transposition table) for the next turn.
pub struct SearchTask {
    time_control: TimeControl,
    result_rx: Receiver<(Box<dyn Engine>, SearchResult)>,
    handle: Option<JoinHandle<()>>,
    finished: Option<(Box<dyn Engine>, SearchResult)>,
}

impl SearchTask {
    pub fn spawn(mut engine: Box<dyn Engine>, state: GameState, limits: SearchLimits) -> io::Result<Self> {
        let time_control = limits.time_control.clone();
        let (result_tx, result_rx) = channel();
        let handle = thread::Builder::new()
            .name(format!("search-{}", engine.name()))
            .spawn(move || {
                let result = engine.search(&state, limits);
                debug!(depth = result.depth, nodes = result.nodes, "background search done");
                let _ = result_tx.send((engine, result));
            })?;

        Ok(Self {
            time_control,
            result_rx,
            handle: Some(handle),
            finished: None,
        })
    }

    /// Ask the search to return its best action so far.
    pub fn stop(&self) {
        self.time_control.stop();
    }

    pub fn is_done(&mut self) -> bool {
        self.poll();
        self.finished.is_some() || self.handle.is_none()
    }

    /// Take the result if the search has finished.
    pub fn try_take(&mut self) -> Option<(Box<dyn Engine>, SearchResult)> {
        self.poll();
        let finished = self.finished.take();
        if finished.is_some() {
            self.join();
        }
        finished
    }

    /// Block until the search finishes. None if the worker panicked.
    pub fn wait(mut self) -> Option<(Box<dyn Engine>, SearchResult)> {
        if let Some(finished) = self.finished.take() {
            self.join();
            return Some(finished);
        }
        let received = self.result_rx.recv().ok();
        self.join();
        received
    }

    fn poll(&mut self) {
        if self.finished.is_some() {
            return;
        }
        match self.result_rx.try_recv() {
            Ok(finished) => self.finished = Some(finished),
            Err(TryRecvError::Disconnected) => self.join(),
            Err(TryRecvError::Empty) => {}
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SearchTask {
    fn drop(&mut self) {
        self.stop();
        self.join();
    }
}

#[cfg(test)]
#[path = "background_tests.rs"]
mod background_tests;
