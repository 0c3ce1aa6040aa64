//! Canned-answer interface.

use std::collections::VecDeque;

use super::{GameEvent, Interface};
use crate::error::{PigError, Result};

/// Answers decisions from a fixed list and records every event shown.
///
/// Once the answers run out, `read_decision` reports `InputClosed`, the
/// same as a terminal reaching end of input.
#[derive(Default)]
pub struct ScriptedInterface {
    answers: VecDeque<String>,
    events: Vec<GameEvent>,
    prompts: usize,
    on_prompt: Option<Box<dyn FnMut()>>,
}

impl ScriptedInterface {
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Run `hook` every time a decision is requested, before answering.
    ///
    /// Tests use this to let time pass while a player "thinks".
    #[must_use]
    pub fn on_prompt(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_prompt = Some(Box::new(hook));
        self
    }

    /// Every event shown so far, in order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// How many decisions were requested.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Count of shown events matching `pred`.
    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Everything shown, rendered as the console would print it.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.events
            .iter()
            .map(|e| format!("{e}\n"))
            .collect()
    }
}

impl Interface for ScriptedInterface {
    fn show(&mut self, event: &GameEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn read_decision(&mut self) -> Result<String> {
        self.prompts += 1;
        if let Some(hook) = self.on_prompt.as_mut() {
            hook();
        }
        self.answers.pop_front().ok_or(PigError::InputClosed)
    }
}
