// Driving a session the way the viewer does

use std::time::{Duration, Instant};

use algotrace::algorithms::{AlgorithmInput, Registry};
use algotrace::config::Config;
use algotrace::session::Session;
use algotrace::trace::DisplayState;

fn seeded(seed: u64, algorithm: &str) -> Session {
    let mut config = Config::default();
    config.input.seed = Some(seed);
    config.algorithm = Some(algorithm.to_string());
    Session::new(Registry::standard(), config).expect("session starts")
}

fn array_at_cursor(session: &Session) -> Vec<i64> {
    match session.trace().display_state(session.playback.position()) {
        DisplayState::Array { values, .. } => values,
        other => panic!("expected array state, got {:?}", other),
    }
}

#[test]
fn test_same_seed_same_input() {
    let a = seeded(7, "Merge Sort");
    let b = seeded(7, "Merge Sort");
    assert_eq!(a.input(), b.input());
    assert_eq!(a.trace().steps(), b.trace().steps());
}

#[test]
fn test_stepping_through_a_sort() {
    let mut session = seeded(3, "Insertion Sort");
    let original = session.input().as_array().unwrap().to_vec();

    assert_eq!(session.playback.position(), None);
    assert_eq!(array_at_cursor(&session), original);

    while session.playback.step_forward() {}
    assert!(session.playback.at_end());
    let expected = session.trace().sorted_array().unwrap().to_vec();
    assert_eq!(array_at_cursor(&session), expected);

    session.playback.jump_to_start();
    assert_eq!(array_at_cursor(&session), original);
}

#[test]
fn test_autoplay_reaches_end_and_pauses() {
    let mut session = seeded(11, "Selection Sort");
    session.set_input(AlgorithmInput::Array(vec![3, 1, 2])).unwrap();
    let len = session.trace().len();

    let start = Instant::now();
    session.playback.play(start);
    let interval = session.playback.interval();
    let mut now = start;
    for _ in 0..len + 5 {
        now += interval + Duration::from_millis(1);
        session.playback.tick(now);
    }
    assert!(session.playback.at_end());
    assert!(!session.playback.is_playing());
    assert_eq!(array_at_cursor(&session), vec![1, 2, 3]);
}

#[test]
fn test_switching_algorithm_rewinds() {
    let mut session = seeded(5, "Bubble Sort");
    session.playback.step_by(3);
    assert!(session.playback.position().is_some());

    session.select("Counting Money").unwrap();
    assert_eq!(session.algorithm().name, "Counting Money");
    assert_eq!(session.playback.position(), None);
    assert_eq!(session.playback.len(), session.trace().len());
}

#[test]
fn test_rejected_input_keeps_trace() {
    let mut session = seeded(9, "Quick Sort");
    let before = session.trace().steps().to_vec();
    assert!(session.set_input(AlgorithmInput::Graph).is_err());
    assert_eq!(session.trace().steps(), &before[..]);
}

#[test]
fn test_every_algorithm_runs_on_generated_input() {
    let registry = Registry::standard();
    let names: Vec<&str> = registry.iter().map(|a| a.name).collect();
    for name in names {
        let session = seeded(42, name);
        assert!(!session.trace().is_empty(), "{} produced no steps", name);
    }
}
