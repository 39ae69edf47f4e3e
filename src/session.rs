//! Application state owned by one place
//!
//! [`Session`] holds the registry, the selected algorithm, its input, the
//! recorded trace and the playback controller. Every change that invalidates
//! the trace (new algorithm, new input) re-records it and rewinds playback.

use crate::algorithms::{Algorithm, AlgorithmInput, Registry};
use crate::config::Config;
use crate::errors::TraceError;
use crate::input::{generate, make_rng};
use crate::playback::PlaybackController;
use crate::trace::Trace;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

pub struct Session {
    registry: Registry,
    selected: usize,
    trace: Trace,
    pub playback: PlaybackController,
    config: Config,
    rng: ChaCha8Rng,
}

impl Session {
    /// Start on the configured algorithm (or the first one) with random input
    pub fn new(registry: Registry, config: Config) -> Result<Self, TraceError> {
        let selected = match &config.algorithm {
            Some(name) => registry
                .position(name)
                .ok_or_else(|| TraceError::UnknownAlgorithm(name.clone()))?,
            None => 0,
        };
        let algorithm = registry
            .get(selected)
            .ok_or_else(|| TraceError::UnknownAlgorithm(String::new()))?;

        let mut rng = make_rng(config.input.seed);
        let input = generate(algorithm.input, &config.input, &mut rng);
        let trace = Trace::record(algorithm, input)?;
        let playback = PlaybackController::new(trace.len(), config.interval());

        info!(algorithm = algorithm.name, "session started");
        Ok(Session {
            registry,
            selected,
            trace,
            playback,
            config,
            rng,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn algorithm(&self) -> &'static Algorithm {
        self.trace.algorithm()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn input(&self) -> &AlgorithmInput {
        self.trace.input()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch to the algorithm called `name`, with fresh input
    pub fn select(&mut self, name: &str) -> Result<(), TraceError> {
        let index = self
            .registry
            .position(name)
            .ok_or_else(|| TraceError::UnknownAlgorithm(name.to_string()))?;
        self.select_index(index)
    }

    pub fn select_next(&mut self) -> Result<(), TraceError> {
        let len = self.registry.len();
        self.select_index((self.selected + 1) % len)
    }

    pub fn select_prev(&mut self) -> Result<(), TraceError> {
        let len = self.registry.len();
        self.select_index((self.selected + len - 1) % len)
    }

    /// Re-record the current algorithm on `input`.
    ///
    /// On error the previous trace stays in place.
    pub fn set_input(&mut self, input: AlgorithmInput) -> Result<(), TraceError> {
        let algorithm = self.algorithm();
        match Trace::record(algorithm, input) {
            Ok(trace) => {
                self.install(trace);
                Ok(())
            }
            Err(err) => {
                warn!(algorithm = algorithm.name, error = %err, "input rejected");
                Err(err)
            }
        }
    }

    /// Fresh random input for the current algorithm
    pub fn randomize(&mut self) -> Result<(), TraceError> {
        let input = generate(self.algorithm().input, &self.config.input, &mut self.rng);
        self.set_input(input)
    }

    fn select_index(&mut self, index: usize) -> Result<(), TraceError> {
        let algorithm = self
            .registry
            .get(index)
            .ok_or_else(|| TraceError::UnknownAlgorithm(index.to_string()))?;
        let input = generate(algorithm.input, &self.config.input, &mut self.rng);
        let trace = Trace::record(algorithm, input)?;
        self.selected = index;
        info!(algorithm = algorithm.name, steps = trace.len(), "switched algorithm");
        self.install(trace);
        Ok(())
    }

    fn install(&mut self, trace: Trace) {
        self.playback.reset(trace.len());
        self.trace = trace;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Category;

    fn seeded() -> Session {
        let mut config = Config::default();
        config.input.seed = Some(42);
        Session::new(Registry::standard(), config).unwrap()
    }

    #[test]
    fn test_starts_on_first_algorithm() {
        let session = seeded();
        assert_eq!(session.selected_index(), 0);
        assert_eq!(session.algorithm().category, Category::Sorting);
        assert_eq!(session.playback.position(), None);
        assert_eq!(session.playback.len(), session.trace().len());
    }

    #[test]
    fn test_select_by_name_rewinds() {
        let mut session = seeded();
        session.playback.jump_to_end();
        session.select("Depth-First Search").unwrap();
        assert_eq!(session.algorithm().name, "Depth-First Search");
        assert_eq!(session.playback.position(), None);
        assert_eq!(session.input(), &AlgorithmInput::Graph);
    }

    #[test]
    fn test_select_wraps_around() {
        let mut session = seeded();
        session.select_prev().unwrap();
        assert_eq!(session.selected_index(), session.registry().len() - 1);
        session.select_next().unwrap();
        assert_eq!(session.selected_index(), 0);
    }

    #[test]
    fn test_rejected_input_keeps_trace() {
        let mut session = seeded();
        session.select("Counting Money").unwrap();
        let before = session.trace().len();
        let err = session
            .set_input(AlgorithmInput::Coins {
                coins: vec![0],
                target: 5,
            })
            .unwrap_err();
        assert!(matches!(err, TraceError::InvalidInput { .. }));
        assert_eq!(session.trace().len(), before);
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = seeded();
        let b = seeded();
        assert_eq!(a.input(), b.input());
        assert_eq!(a.trace().steps(), b.trace().steps());
    }

    #[test]
    fn test_unknown_start_algorithm() {
        let config = Config {
            algorithm: Some("Bogo Sort".to_string()),
            ..Config::default()
        };
        assert!(Session::new(Registry::standard(), config).is_err());
    }
}
