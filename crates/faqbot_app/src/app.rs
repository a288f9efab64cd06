use std::time::Duration;

use engine_logging::engine_debug;
use faqbot_core::{update, AppState, AppViewModel, CoreOptions, Msg};
use faqbot_engine::{BackendError, EngineHandle};

use crate::{AppConfig, EffectRunner};

/// Owns the core state and is the only place messages are applied, so every
/// append is visible before the next message is processed.
pub struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, BackendError> {
        let engine = EngineHandle::new(config.backend)?;
        Ok(Self::with_engine(engine, config.core))
    }

    pub fn with_engine(engine: EngineHandle, options: CoreOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            runner: EffectRunner::new(engine),
        }
    }

    /// Kicks off the one-shot health probe.
    pub fn start(&mut self) {
        self.dispatch(Msg::ProbeHealth);
    }

    /// Applies one message and starts its effects. Returns whether the view changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        engine_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        self.state = state;
        self.runner.run(effects);
        changed
    }

    /// Applies every engine completion that has already arrived.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(msg) = self.runner.try_next() {
            changed |= self.dispatch(msg);
        }
        changed
    }

    /// Waits up to `timeout` for one engine completion, then pumps the rest.
    /// Returns false if nothing arrived.
    pub fn wait_event(&mut self, timeout: Duration) -> bool {
        match self.runner.next_timeout(timeout) {
            Some(msg) => {
                self.dispatch(msg);
                self.pump();
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }
}
