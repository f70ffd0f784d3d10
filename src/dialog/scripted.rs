use std::collections::VecDeque;

use super::Dialogs;

/// Headless dialogs answering from a script and recording what was shown.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: VecDeque<bool>,
    default_answer: bool,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedDialogs {
    /// Dialogs that answer every confirmation with `default_answer`
    pub fn new(default_answer: bool) -> Self {
        Self {
            default_answer,
            ..Self::default()
        }
    }

    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn declining() -> Self {
        Self::new(false)
    }

    /// Answer the next confirmations in order, then fall back to the default
    pub fn answering(answers: impl IntoIterator<Item = bool>, default_answer: bool) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::new(default_answer)
        }
    }

    /// Every prompt passed to `confirm`, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message passed to `inform`, in order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }

    fn inform(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
