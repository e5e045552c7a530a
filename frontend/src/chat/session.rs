use log::{error, info, warn};
use std::cell::RefCell;

use crate::chat::gemini::{ChatError, GeminiTransport, GenerateContentRequest};
use crate::chat::message::{ChatMessage, Reply};
use crate::chat::persona::{HistoryMode, Persona};

/// A conversation with the model, owned by one chat widget.
///
/// Every failure is turned into one of the persona's fixed replies, so
/// callers always get something to show and never see a `ChatError`.
pub struct AdvisorSession<T> {
    transport: T,
    persona: &'static Persona,
    api_key: Option<String>,
    transcript: RefCell<Vec<ChatMessage>>,
}

impl<T: GeminiTransport> AdvisorSession<T> {
    pub fn new(transport: T, persona: &'static Persona, api_key: Option<&str>) -> Self {
        Self {
            transport,
            persona,
            api_key: api_key.map(str::to_string),
            transcript: RefCell::new(Vec::new()),
        }
    }

    pub fn persona(&self) -> &'static Persona {
        self.persona
    }

    /// Turns the session keeps for itself in [`HistoryMode::Retained`].
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.borrow().clone()
    }

    pub async fn send(&self, history: &[ChatMessage], message: &str) -> Reply {
        let api_key = match self.credential() {
            Ok(key) => key,
            Err(err) => match self.persona.offline_reply {
                Some(offline) => {
                    warn!("{}: {}, answering offline", self.persona.name, err);
                    return Reply::fallback(offline);
                }
                None => {
                    warn!("{}: {}, trying anyway", self.persona.name, err);
                    ""
                }
            },
        };

        match self.request(api_key, history, message).await {
            Ok(text) => Reply::ok(text),
            Err(ChatError::EmptyReply) => {
                warn!("{}: model returned no text", self.persona.name);
                Reply::fallback(self.persona.empty_reply)
            }
            Err(err) => {
                error!("{} chat request failed: {}", self.persona.name, err);
                Reply::fallback(self.persona.failure_reply)
            }
        }
    }

    fn credential(&self) -> Result<&str, ChatError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ChatError::MissingCredential)
    }

    async fn request(
        &self,
        api_key: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ChatError> {
        let request = match self.persona.history_mode {
            HistoryMode::Replay => {
                GenerateContentRequest::new(self.persona.system_instruction, history, message)
            }
            HistoryMode::Retained => GenerateContentRequest::new(
                self.persona.system_instruction,
                &self.transcript.borrow(),
                message,
            ),
        };
        info!(
            "{}: sending message with {} turns of context",
            self.persona.name,
            request.contents.len() - 1
        );

        let response = self
            .transport
            .generate(api_key, self.persona.model, &request)
            .await?;
        let text = response.text().ok_or(ChatError::EmptyReply)?;

        if self.persona.history_mode == HistoryMode::Retained {
            let mut transcript = self.transcript.borrow_mut();
            transcript.push(ChatMessage::user(message));
            transcript.push(ChatMessage::model(text.clone()));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::gemini::{Candidate, Content, GenerateContentResponse};
    use crate::chat::message::Role;
    use crate::chat::persona::{LUMI, NOVA};
    use crate::chat::state::ChatState;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct FakeTransport {
        replies: RefCell<VecDeque<Result<GenerateContentResponse, ChatError>>>,
        requests: RefCell<Vec<GenerateContentRequest>>,
        keys: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn replying(replies: Vec<Result<GenerateContentResponse, ChatError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl GeminiTransport for FakeTransport {
        async fn generate(
            &self,
            api_key: &str,
            _model: &str,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, ChatError> {
            self.requests.borrow_mut().push(request.clone());
            self.keys.borrow_mut().push(api_key.to_string());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ChatError::Request("no scripted reply".into())))
        }
    }

    fn text(reply: &str) -> Result<GenerateContentResponse, ChatError> {
        Ok(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content::text(Role::Model, reply)),
            }],
        })
    }

    #[test]
    fn successful_turn_appends_user_then_model() {
        let session = AdvisorSession::new(
            FakeTransport::replying(vec![text("Six courses, from AI to design. 🚀")]),
            &LUMI,
            Some("key"),
        );
        let mut state = ChatState::new(LUMI.greeting);
        state.toggle();
        let before = state.messages().len();

        let outgoing = state.submit("What courses do you offer?").unwrap();
        let reply = block_on(session.send(&outgoing.history, &outgoing.text));
        state.resolve(reply);

        let added = &state.messages()[before..];
        assert_eq!(added.len(), 2);
        assert_eq!(added[0], ChatMessage::user("What courses do you offer?"));
        assert_eq!(added[1], ChatMessage::model("Six courses, from AI to design. 🚀"));
        assert_eq!(session.transport.keys.borrow().as_slice(), ["key"]);
    }

    #[test]
    fn replay_mode_sends_caller_history() {
        let session = AdvisorSession::new(
            FakeTransport::replying(vec![text("a"), text("b")]),
            &LUMI,
            Some("key"),
        );
        let history = vec![ChatMessage::model(LUMI.greeting)];
        block_on(session.send(&history, "first"));

        let request = session.transport.requests.borrow()[0].clone();
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].role, Some(Role::Model));
        assert_eq!(request.contents[1], Content::text(Role::User, "first"));
        assert_eq!(request.system_instruction.parts[0].text, LUMI.system_instruction);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn retained_mode_keeps_its_own_transcript() {
        let session = AdvisorSession::new(
            FakeTransport::replying(vec![text("Kairo Vex plays Saturday."), text("Weekend Pass.")]),
            &NOVA,
            Some("key"),
        );
        let ignored = vec![ChatMessage::user("not replayed")];

        block_on(session.send(&ignored, "When is Kairo Vex?"));
        block_on(session.send(&ignored, "Which ticket?"));

        let requests = session.transport.requests.borrow();
        assert_eq!(requests[0].contents, vec![Content::text(Role::User, "When is Kairo Vex?")]);
        assert_eq!(
            requests[1].contents,
            vec![
                Content::text(Role::User, "When is Kairo Vex?"),
                Content::text(Role::Model, "Kairo Vex plays Saturday."),
                Content::text(Role::User, "Which ticket?"),
            ]
        );
        assert_eq!(session.transcript().len(), 4);
    }

    #[test]
    fn missing_key_answers_offline_without_calling_out() {
        let session = AdvisorSession::new(FakeTransport::default(), &NOVA, None);
        let reply = block_on(session.send(&[], "Hello?"));

        assert_eq!(reply, Reply::fallback(NOVA.offline_reply.unwrap()));
        assert_eq!(session.transport.calls(), 0);

        let blank = AdvisorSession::new(FakeTransport::default(), &NOVA, Some("  "));
        block_on(blank.send(&[], "Hello?"));
        assert_eq!(blank.transport.calls(), 0);
    }

    #[test]
    fn missing_key_without_offline_reply_still_attempts() {
        let session = AdvisorSession::new(
            FakeTransport::replying(vec![Err(ChatError::Status {
                status: 403,
                body: "API key not valid".into(),
            })]),
            &LUMI,
            None,
        );
        let reply = block_on(session.send(&[], "Hello?"));

        assert_eq!(session.transport.calls(), 1);
        assert_eq!(reply, Reply::fallback(LUMI.failure_reply));
    }

    #[test]
    fn transport_failure_becomes_one_fallback_message() {
        let session = AdvisorSession::new(
            FakeTransport::replying(vec![
                Err(ChatError::Request("network down".into())),
                text("Back online."),
            ]),
            &NOVA,
            Some("key"),
        );
        let mut state = ChatState::new(NOVA.greeting);
        state.toggle();

        let outgoing = state.submit("ping").unwrap();
        state.resolve(block_on(session.send(&outgoing.history, &outgoing.text)));

        let last = state.messages().last().unwrap();
        assert_eq!(last.text, NOVA.failure_reply);
        assert!(last.is_error);
        assert_eq!(state.messages().len(), 3);
        assert!(session.transcript().is_empty());

        let outgoing = state.submit("ping again").unwrap();
        state.resolve(block_on(session.send(&outgoing.history, &outgoing.text)));
        assert_eq!(state.messages().last().unwrap().text, "Back online.");
    }

    #[test]
    fn empty_reply_uses_empty_fallback() {
        let session = AdvisorSession::new(
            FakeTransport::replying(vec![Ok(GenerateContentResponse::default())]),
            &LUMI,
            Some("key"),
        );
        let reply = block_on(session.send(&[], "hi"));
        assert_eq!(reply, Reply::fallback(LUMI.empty_reply));
    }

    #[test]
    fn fallback_replies_are_not_replayed() {
        let session = AdvisorSession::new(
            FakeTransport::replying(vec![text("ok")]),
            &LUMI,
            Some("key"),
        );
        let mut failed = ChatMessage::model(LUMI.failure_reply);
        failed.is_error = true;
        let history = vec![ChatMessage::user("hi"), failed];

        block_on(session.send(&history, "again"));
        let request = session.transport.requests.borrow()[0].clone();
        assert_eq!(
            request.contents,
            vec![Content::text(Role::User, "hi"), Content::text(Role::User, "again")]
        );
    }
}
