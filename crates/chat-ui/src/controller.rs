//! Conversation controller
//!
//! Owns the session and the message list and walks one request through
//! `Idle -> Sending -> Idle`. The network call itself happens outside, so the
//! controller is never borrowed across an await point in the browser. The
//! widget dispatches [`ChatAction::Submit`]; only when the controller accepts
//! it does [`ChatController::outgoing`] hold a ticketed request for the widget
//! to send. The outcome comes back as [`ChatAction::Complete`] with the same
//! ticket and is handed to [`ChatController::finish_submit`].

use crate::config::WidgetConfig;
use crate::session::Session;
use crate::transport::ChatTransport;
use crate::types::ChatMessage;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};
use tripchat_http::{ChatReply, ChatRequest, ClientError};
use yew::Reducible;

/// Request lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Sending,
}

/// Why a submit did not start a request
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("message is empty")]
    Empty,
    #[error("a request is already in flight")]
    InFlight,
}

/// An accepted request waiting for its reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub ticket: u64,
    pub request: ChatRequest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatController {
    config: WidgetConfig,
    session: Session,
    messages: Vec<ChatMessage>,
    state: RequestState,
    outgoing: Option<OutgoingRequest>,
    next_ticket: u64,
}

impl ChatController {
    pub fn new(config: WidgetConfig) -> Self {
        let session = Session::generate();
        info!(session_id = %session.id(), "chat session started");
        Self {
            config,
            session,
            messages: Vec::new(),
            state: RequestState::Idle,
            outgoing: None,
            next_ticket: 0,
        }
    }

    /// Replace the session with a freshly generated one
    pub fn initialize_session(&mut self) -> &Session {
        self.session = self.session.regenerate();
        info!(session_id = %self.session.id(), "chat session started");
        &self.session
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn input_enabled(&self) -> bool {
        self.state == RequestState::Idle
    }

    /// Whether the typing indicator should be visible
    pub fn is_typing(&self) -> bool {
        self.state == RequestState::Sending
    }

    /// The accepted request still waiting for a reply
    pub fn outgoing(&self) -> Option<&OutgoingRequest> {
        self.outgoing.as_ref()
    }

    fn prepare_request(&self, text: &str) -> Result<ChatRequest, SubmitRejected> {
        let message = text.trim();
        if message.is_empty() {
            return Err(SubmitRejected::Empty);
        }
        if self.state == RequestState::Sending {
            return Err(SubmitRejected::InFlight);
        }
        Ok(ChatRequest::new(message, self.session.id()))
    }

    /// Append the user's message and enter `Sending`
    pub fn begin_submit(&mut self, text: &str) -> Result<ChatRequest, SubmitRejected> {
        let request = self.prepare_request(text)?;
        self.messages.push(ChatMessage::user(request.message.clone()));
        self.state = RequestState::Sending;
        self.next_ticket += 1;
        self.outgoing = Some(OutgoingRequest {
            ticket: self.next_ticket,
            request: request.clone(),
        });
        Ok(request)
    }

    /// Record the outcome of the request and return to `Idle`
    ///
    /// Failures never propagate: they become an assistant message.
    pub fn finish_submit(&mut self, outcome: Result<ChatReply, ClientError>) {
        match outcome {
            Ok(reply) => {
                if let Some(assigned) = reply.assigned_session() {
                    let previous = self.session.id().to_string();
                    if self.session.adopt(assigned) {
                        debug!(%previous, session_id = %assigned, "server assigned session");
                    }
                }
                self.messages.push(ChatMessage::assistant(reply.response));
            }
            Err(error) => {
                warn!(%error, session_id = %self.session.id(), "chat request failed");
                self.messages
                    .push(ChatMessage::assistant(self.config.error_message.clone()));
            }
        }
        self.outgoing = None;
        self.state = RequestState::Idle;
    }

    /// Run one full request/response cycle
    pub async fn submit<T>(&mut self, transport: &T, text: &str) -> Result<(), SubmitRejected>
    where
        T: ChatTransport + ?Sized,
    {
        let request = self.begin_submit(text)?;
        let outcome = transport.send(&request).await;
        self.finish_submit(outcome);
        Ok(())
    }

    /// Drop the conversation, greet again and start a new session
    pub fn clear_conversation(&mut self) {
        self.messages.clear();
        self.messages
            .push(ChatMessage::assistant(self.config.greeting.clone()));
        self.initialize_session();
    }
}

/// Reducer actions used by the widget
#[derive(Debug)]
pub enum ChatAction {
    Submit(String),
    Complete {
        ticket: u64,
        outcome: Result<ChatReply, ClientError>,
    },
    Clear,
}

impl Reducible for ChatController {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Submit(text) => {
                if let Err(rejected) = next.begin_submit(&text) {
                    debug!(%rejected, "submit ignored");
                    return self;
                }
            }
            ChatAction::Complete { ticket, outcome } => {
                if next.outgoing().map(|outgoing| outgoing.ticket) != Some(ticket) {
                    debug!(ticket, "stale completion ignored");
                    return self;
                }
                next.finish_submit(outcome);
            }
            ChatAction::Clear => next.clear_conversation(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Transport that replays a scripted outcome and records requests
    struct ScriptedTransport {
        outcome: RefCell<Option<Result<ChatReply, ClientError>>>,
        requests: RefCell<Vec<ChatRequest>>,
    }

    impl ScriptedTransport {
        fn replying(response: &str, session_id: Option<&str>) -> Self {
            Self::with_outcome(Ok(ChatReply {
                response: response.to_string(),
                session_id: session_id.map(str::to_string),
            }))
        }

        fn failing() -> Self {
            Self::with_outcome(Err(ClientError::ServerError {
                status: 502,
                message: "bad gateway".into(),
            }))
        }

        fn with_outcome(outcome: Result<ChatReply, ClientError>) -> Self {
            Self {
                outcome: RefCell::new(Some(outcome)),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatTransport for ScriptedTransport {
        async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
            self.requests.borrow_mut().push(request.clone());
            self.outcome
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(ClientError::Configuration("no scripted reply".into())))
        }
    }

    fn controller() -> ChatController {
        ChatController::new(WidgetConfig::default())
    }

    #[test]
    fn test_begin_submit_appends_user_message_before_network() {
        let mut chat = controller();
        let request = chat.begin_submit("  Flights to Oslo  ").unwrap();

        assert_eq!(request.message, "Flights to Oslo");
        assert_eq!(request.session_id, chat.session().id());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender(), Role::User);
        assert_eq!(chat.messages()[0].text(), "Flights to Oslo");
        assert_eq!(chat.state(), RequestState::Sending);
        assert!(!chat.input_enabled());
        assert!(chat.is_typing());
    }

    #[test]
    fn test_whitespace_submit_is_noop() {
        let mut chat = controller();
        let transport = ScriptedTransport::replying("unused", None);

        let result = tokio_test::block_on(chat.submit(&transport, " \n\t "));

        assert_eq!(result, Err(SubmitRejected::Empty));
        assert!(chat.messages().is_empty());
        assert!(transport.requests.borrow().is_empty());
        assert!(chat.input_enabled());
    }

    #[test]
    fn test_submit_round_trip() {
        let mut chat = controller();
        let session_before = chat.session().id().to_string();
        let transport = ScriptedTransport::replying("**Sure!** Where to?", None);

        tokio_test::block_on(chat.submit(&transport, "Plan a trip")).unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].message, "Plan a trip");
        assert_eq!(requests[0].session_id, session_before);

        assert_eq!(chat.messages().len(), 2);
        let reply = &chat.messages()[1];
        assert_eq!(reply.sender(), Role::Assistant);
        assert_eq!(reply.rendered(), "<strong>Sure!</strong> Where to?");
        assert_eq!(chat.session().id(), session_before);
        assert!(chat.input_enabled());
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_server_session_takeover() {
        let mut chat = controller();
        let transport = ScriptedTransport::replying("ok", Some("srv-session-7"));

        tokio_test::block_on(chat.submit(&transport, "hello")).unwrap();
        assert_eq!(chat.session().id(), "srv-session-7");

        let next = chat.prepare_request("again").unwrap();
        assert_eq!(next.session_id, "srv-session-7");
    }

    #[test]
    fn test_empty_server_session_is_ignored() {
        let mut chat = controller();
        let before = chat.session().id().to_string();
        let transport = ScriptedTransport::replying("ok", Some(""));

        tokio_test::block_on(chat.submit(&transport, "hello")).unwrap();
        assert_eq!(chat.session().id(), before);
    }

    #[test]
    fn test_transport_failure_appends_one_error_message() {
        let mut chat = controller();
        let transport = ScriptedTransport::failing();

        tokio_test::block_on(chat.submit(&transport, "hello")).unwrap();

        assert_eq!(chat.messages().len(), 2);
        let assistant: Vec<_> = chat
            .messages()
            .iter()
            .filter(|m| m.sender() == Role::Assistant)
            .collect();
        assert_eq!(assistant.len(), 1);
        assert_eq!(assistant[0].text(), "Error: Could not reach agent.");
        assert!(chat.input_enabled());
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut chat = controller();
        chat.begin_submit("first").unwrap();

        assert_eq!(chat.begin_submit("second"), Err(SubmitRejected::InFlight));
        assert_eq!(chat.messages().len(), 1);

        chat.finish_submit(Ok(ChatReply {
            response: "done".into(),
            session_id: None,
        }));
        assert!(chat.begin_submit("second").is_ok());
    }

    #[test]
    fn test_clear_conversation() {
        let mut chat = controller();
        let transport = ScriptedTransport::replying("ok", None);
        tokio_test::block_on(chat.submit(&transport, "hello")).unwrap();
        let before = chat.session().id().to_string();

        chat.clear_conversation();

        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender(), Role::Assistant);
        assert_eq!(
            chat.messages()[0].text(),
            "Chat cleared! How can I help you today?"
        );
        assert_ne!(chat.session().id(), before);
    }

    #[test]
    fn test_custom_error_and_greeting() {
        let config = WidgetConfig {
            greeting: "Fresh start.".into(),
            error_message: "Agent offline.".into(),
            ..WidgetConfig::default()
        };
        let mut chat = ChatController::new(config);
        tokio_test::block_on(chat.submit(&ScriptedTransport::failing(), "hi")).unwrap();
        assert_eq!(chat.messages()[1].text(), "Agent offline.");

        chat.clear_conversation();
        assert_eq!(chat.messages()[0].text(), "Fresh start.");
    }

    #[test]
    fn test_reducer_actions() {
        let chat = Rc::new(controller());

        let chat = chat.reduce(ChatAction::Submit("hi".into()));
        assert!(chat.is_typing());
        let ticket = chat.outgoing().unwrap().ticket;

        let unchanged = Rc::clone(&chat).reduce(ChatAction::Submit("again".into()));
        assert!(Rc::ptr_eq(&chat, &unchanged));

        let chat = chat.reduce(ChatAction::Complete {
            ticket,
            outcome: Err(ClientError::NotFound("/chat/".into())),
        });
        assert!(chat.input_enabled());
        assert!(chat.outgoing().is_none());
        assert_eq!(chat.messages().len(), 2);

        let session = chat.session().id().to_string();
        let chat = chat.reduce(ChatAction::Clear);
        assert_eq!(chat.messages().len(), 1);
        assert_ne!(chat.session().id(), session);
    }

    #[test]
    fn test_only_accepted_submit_produces_outgoing_request() {
        let chat = Rc::new(controller());
        assert!(chat.outgoing().is_none());

        let chat = chat.reduce(ChatAction::Submit("   ".into()));
        assert!(chat.outgoing().is_none());

        let chat = chat.reduce(ChatAction::Submit("Flights to Rome".into()));
        let first = chat.outgoing().cloned().unwrap();
        assert_eq!(first.request.message, "Flights to Rome");
        assert_eq!(first.request.session_id, chat.session().id());

        let chat = chat.reduce(ChatAction::Submit("and hotels".into()));
        assert_eq!(chat.outgoing(), Some(&first));
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_completion_for_other_ticket_is_ignored() {
        let chat = Rc::new(controller()).reduce(ChatAction::Submit("first".into()));
        let ticket = chat.outgoing().unwrap().ticket;

        let stale = Rc::clone(&chat).reduce(ChatAction::Complete {
            ticket: ticket + 1,
            outcome: Ok(ChatReply {
                response: "late".into(),
                session_id: None,
            }),
        });
        assert!(Rc::ptr_eq(&chat, &stale));
        assert!(stale.is_typing());

        let chat = chat.reduce(ChatAction::Complete {
            ticket,
            outcome: Ok(ChatReply {
                response: "on time".into(),
                session_id: None,
            }),
        });
        assert!(chat.input_enabled());
        assert_eq!(chat.messages()[1].text(), "on time");

        let next = chat.reduce(ChatAction::Submit("second".into()));
        assert_ne!(next.outgoing().unwrap().ticket, ticket);
    }
}
