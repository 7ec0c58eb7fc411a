//! Script-fed prompt adapter for non-interactive hosts and tests.

use crate::MutationPrompts;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers prompts from a pre-loaded script instead of a live user.
///
/// Hosts that gather input ahead of time (CLI flags, piped stdin) load the
/// answers up front; each name prompt consumes the next one. An exhausted
/// script leaves the prompt unanswered forever, which is how an abandoned
/// dialog behaves: the future never resolves and the operation ends without
/// a mutation or an error.
pub struct ScriptedPrompts {
    answers: Mutex<VecDeque<String>>,
    confirm: bool,
}

impl ScriptedPrompts {
    /// Empty script: every prompt hangs, deletions confirm.
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(VecDeque::new()),
            confirm: true,
        }
    }

    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            confirm: true,
        }
    }

    /// Leaves delete confirmations unanswered, as a user dismissing the
    /// dialog would.
    pub fn deny_deletes(mut self) -> Self {
        self.confirm = false;
        self
    }

    fn next_answer(&self) -> Option<String> {
        self.answers.lock().expect("prompt script lock").pop_front()
    }
}

impl Default for ScriptedPrompts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MutationPrompts for ScriptedPrompts {
    async fn prompt_add(&self) -> String {
        match self.next_answer() {
            Some(name) => name,
            None => std::future::pending().await,
        }
    }

    async fn prompt_rename(&self, _current: &str) -> String {
        match self.next_answer() {
            Some(name) => name,
            None => std::future::pending().await,
        }
    }

    async fn confirm_delete(&self, _name: &str) {
        if !self.confirm {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn answers_are_consumed_in_order() {
        let prompts = ScriptedPrompts::with_answers(["Alice", "Bob"]);
        assert_eq!(prompts.prompt_add().await, "Alice");
        assert_eq!(prompts.prompt_rename("Alice").await, "Bob");
    }

    #[tokio::test]
    async fn exhausted_script_never_resolves() {
        let prompts = ScriptedPrompts::new();
        let outcome = timeout(Duration::from_millis(20), prompts.prompt_add()).await;
        assert!(outcome.is_err(), "prompt should hang without an answer");
    }

    #[tokio::test]
    async fn denied_delete_confirmation_never_resolves() {
        let prompts = ScriptedPrompts::new().deny_deletes();
        let outcome = timeout(Duration::from_millis(20), prompts.confirm_delete("Alice")).await;
        assert!(outcome.is_err());
    }
}
