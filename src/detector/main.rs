use crate::analysis_log::interface::AnalysisLog;
use crate::analyzer::Analyzer;
use crate::config::Config;
use crate::detector::core::{init, transition, Effect, Event, State};
use crate::detector::run_effect::RunEffect;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Session object driven by the interaction thread. Effects run on worker
/// threads and come back as events through the channel.
pub struct Detector {
    state: State,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Detector {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        analyzer: Arc<Analyzer>,
        analysis_log: Arc<dyn AnalysisLog + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let (state, effects) = init();
        let run_effect = RunEffect::new(
            config,
            logger.clone(),
            analyzer,
            analysis_log,
            event_sender,
        );

        let detector = Self {
            state,
            event_receiver,
            run_effect,
            logger: logger.with_namespace("detector"),
        };
        detector.spawn_effects(effects);
        detector
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Applies every event that has arrived since the last call. Returns how many.
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    #[cfg(test)]
    pub fn poll_blocking(&mut self, timeout: std::time::Duration) -> bool {
        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(_) => false,
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self
            .logger
            .info(&format!("event: {}", event.to_display_string()));

        let (new_state, effects) = transition(self.state.clone(), event);
        self.state = new_state;

        self.spawn_effects(effects);
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
