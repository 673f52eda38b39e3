use std::thread;
use std::time::{Duration, Instant};

use super::*;
use crate::NegamaxEngine;

#[test]
fn returns_the_engine_with_its_result() {
    let engine: Box<dyn Engine> = Box::new(NegamaxEngine::new());
    let state = GameState::default();
    let task = SearchTask::spawn(engine, state.clone(), SearchLimits::depth(1)).unwrap();

    let (engine, result) = task.wait().unwrap();
    assert_eq!(engine.name(), "Gyroad Negamax");
    let action = result.best_action.unwrap();
    assert!(state.clone().apply_action(&action).is_ok());
}

#[test]
fn stop_cuts_a_long_search_short() {
    let engine: Box<dyn Engine> = Box::new(NegamaxEngine::new());
    let limits = SearchLimits::from_budget_ms(30, 60_000);
    let mut task = SearchTask::spawn(engine, GameState::default(), limits).unwrap();

    thread::sleep(Duration::from_millis(50));
    let started = Instant::now();
    task.stop();
    while !task.is_done() {
        assert!(started.elapsed() < Duration::from_secs(30));
        thread::sleep(Duration::from_millis(5));
    }
    let (_, result) = task.try_take().unwrap();
    assert!(result.stopped);
    assert!(result.best_action.is_some());
}

#[test]
fn stop_right_after_spawn_is_honoured() {
    let engine: Box<dyn Engine> = Box::new(NegamaxEngine::new());
    let limits = SearchLimits::from_budget_ms(30, 60_000);
    let task = SearchTask::spawn(engine, GameState::default(), limits).unwrap();
    task.stop();

    let started = Instant::now();
    let (_, result) = task.wait().unwrap();
    assert!(started.elapsed() < Duration::from_secs(30));
    assert!(result.stopped);
    assert!(result.best_action.is_some());
}
