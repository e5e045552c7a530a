use thiserror::Error;

use crate::chat::message::{ChatMessage, Reply};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    OpenIdle,
    OpenAwaiting,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message is empty")]
    Empty,
    #[error("still waiting for the previous reply")]
    Busy,
}

/// A message accepted by [`ChatState::submit`], ready to go to the advisor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    /// Conversation before the new user message.
    pub history: Vec<ChatMessage>,
    pub text: String,
}

/// Chat panel state: visibility, transcript and the in-flight flag.
///
/// Visibility and the in-flight flag are independent so that closing the
/// panel mid-request still lets the reply land in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    open: bool,
    awaiting: bool,
    messages: Vec<ChatMessage>,
}

impl ChatState {
    pub fn new(greeting: &str) -> Self {
        Self {
            open: false,
            awaiting: false,
            messages: vec![ChatMessage::model(greeting)],
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.open, self.awaiting) {
            (false, _) => Phase::Closed,
            (true, false) => Phase::OpenIdle,
            (true, true) => Phase::OpenAwaiting,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the send button should be enabled for `input`.
    pub fn can_send(&self, input: &str) -> bool {
        !self.awaiting && !input.trim().is_empty()
    }

    pub fn submit(&mut self, input: &str) -> Result<Outgoing, SubmitError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(SubmitError::Empty);
        }
        if self.awaiting {
            return Err(SubmitError::Busy);
        }

        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text));
        self.awaiting = true;
        Ok(Outgoing {
            history,
            text: text.to_string(),
        })
    }

    pub fn resolve(&mut self, reply: Reply) {
        self.messages.push(reply.into());
        self.awaiting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Role;

    fn open_state() -> ChatState {
        let mut state = ChatState::new("hello");
        state.toggle();
        state
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = ChatState::new("hello");
        assert_eq!(state.phase(), Phase::Closed);
        state.toggle();
        assert_eq!(state.phase(), Phase::OpenIdle);
        state.toggle();
        assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn one_turn_appends_user_then_model() {
        let mut state = open_state();
        let before = state.messages().len();

        let outgoing = state.submit("What courses do you offer?").unwrap();
        assert_eq!(outgoing.history.len(), before);
        assert_eq!(outgoing.text, "What courses do you offer?");
        assert_eq!(state.phase(), Phase::OpenAwaiting);

        state.resolve(Reply::ok("Plenty."));
        assert_eq!(state.phase(), Phase::OpenIdle);

        let new: Vec<_> = state.messages()[before..]
            .iter()
            .map(|m| (m.role, m.text.as_str()))
            .collect();
        assert_eq!(
            new,
            [(Role::User, "What courses do you offer?"), (Role::Model, "Plenty.")]
        );
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut state = open_state();
        assert_eq!(state.submit("   "), Err(SubmitError::Empty));
        assert!(!state.can_send(""));
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn second_send_is_rejected_while_awaiting() {
        let mut state = open_state();
        state.submit("first").unwrap();
        assert!(!state.can_send("second"));
        assert_eq!(state.submit("second"), Err(SubmitError::Busy));
        assert_eq!(state.messages().len(), 2);

        state.resolve(Reply::ok("reply"));
        assert!(state.can_send("second"));
        assert!(state.submit("second").is_ok());
    }

    #[test]
    fn fallback_reply_re_enables_input() {
        let mut state = open_state();
        state.submit("hi").unwrap();
        state.resolve(Reply::fallback("Signal lost."));

        let last = state.messages().last().unwrap();
        assert_eq!(last.text, "Signal lost.");
        assert!(last.is_error);
        assert_eq!(state.phase(), Phase::OpenIdle);
        assert!(state.can_send("again"));
    }

    #[test]
    fn reply_lands_even_if_panel_was_closed() {
        let mut state = open_state();
        state.submit("hi").unwrap();
        state.close();
        assert_eq!(state.phase(), Phase::Closed);

        state.resolve(Reply::ok("still here"));
        assert_eq!(state.messages().len(), 3);
        assert!(!state.is_awaiting());
    }
}
