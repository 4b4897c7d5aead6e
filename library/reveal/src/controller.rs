use std::cell::Cell;

use log::{debug, info};

use crate::config::RevealConfig;
use crate::dom::Document;
use crate::error::Result;
use crate::reveal::{reveal, Revealed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Pending,
    /// Terminal; entered on the first trigger whether or not the reveal succeeded
    Triggered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Revealed(Revealed),
    AlreadyTriggered,
}

/// Runs the reveal at most once.
///
/// The controller is meant to be owned by the content-loaded callback, which runs on the
/// page's only thread, so the state is a plain `Cell`.
#[derive(Debug)]
pub struct PageRevealController {
    config: RevealConfig,
    state: Cell<State>,
}

impl PageRevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: Cell::new(State::Pending),
        }
    }

    pub fn state(&self) -> State {
        self.state.get()
    }

    pub fn trigger<D: Document>(&self, document: &D) -> Result<Trigger> {
        if self.state.replace(State::Triggered) == State::Triggered {
            debug!("#{} reveal already triggered", self.config.table_id);

            return Ok(Trigger::AlreadyTriggered);
        }

        let revealed = reveal(document, &self.config)?;
        info!("#{} revealed", self.config.table_id);

        Ok(Trigger::Revealed(revealed))
    }
}

impl Default for PageRevealController {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}
