use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::actors::messages::{EngineEvent, SessionMessage, CRISIS_ADVISORY_TEXT};
use crate::actors::orchestrator::ResponseEngine;
use crate::actors::traits::RemoteGenerator;
use crate::brain::crisis::detects_crisis_signal;
use crate::error::EngineError;
use crate::models::{EngineReply, Message, Sender};

/// Greeting recorded into every fresh session before the first user turn.
const WELCOME_TEXT: &str = "Hello! I'm MindfulAI, your mental wellness companion. \
I can provide information on mental health topics like depression, anxiety, bipolar disorder, \
ADHD, and more. I can also help with coping strategies when you're feeling stressed or anxious. \
How can I assist you today?";

const THINKING_BASE_MS: u64 = 1000;
const THINKING_PER_CHAR_MS: u64 = 10;
const THINKING_MAX_MS: u64 = 3000;

const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Thinking delay scheduled before a turn's reply.
///
/// Scales with input length so longer input never shortens response time,
/// and saturates at the upper bound.
pub fn thinking_delay(input_len: usize) -> Duration {
    let ms = (THINKING_BASE_MS + THINKING_PER_CHAR_MS * input_len as u64)
        .clamp(THINKING_BASE_MS, THINKING_MAX_MS);
    Duration::from_millis(ms)
}

/// A handle to one conversation session's actor.
///
/// This struct provides a public, cloneable interface for submitting turns
/// and querying the transcript. The actor owns the transcript outright:
/// append-only, single writer, dropped with the session.
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
}

impl SessionHandle {
    /// Spawns a new session actor around the given engine.
    ///
    /// Events are delivered on `events` best-effort; a full or closed
    /// channel is logged and skipped rather than blocking the session.
    pub fn spawn<G: RemoteGenerator>(
        engine: ResponseEngine<G>,
        events: mpsc::Sender<EngineEvent>,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let runner = SessionRunner {
            receiver,
            self_sender: sender.downgrade(),
            engine: Arc::new(engine),
            events,
            transcript: Vec::new(),
            in_flight: HashMap::new(),
        };
        tokio::spawn(async move { runner.run().await });
        Self { sender }
    }

    /// Submits one user turn.
    ///
    /// Whitespace-only input is ignored and returns `Ok(None)`; nothing is
    /// recorded and no turn starts. Accepted input returns the new turn's id.
    /// Overlapping turns are permitted: a submission while a prior turn is
    /// still thinking starts a second, independent turn.
    #[instrument(skip(self, text, credential))]
    pub async fn submit(
        &self,
        text: &str,
        credential: Option<String>,
    ) -> Result<Option<Uuid>, EngineError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let turn_id = Uuid::new_v4();
        let msg = SessionMessage::Submit {
            turn_id,
            text: text.to_string(),
            credential,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| EngineError::Actor(e.to_string()))?;
        Ok(Some(turn_id))
    }

    /// Returns a snapshot of the session transcript.
    pub async fn transcript(&self) -> Result<Vec<Message>, EngineError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SessionMessage::Transcript { responder: send })
            .await
            .map_err(|e| EngineError::Actor(e.to_string()))?;
        timeout(QUERY_TIMEOUT, recv)
            .await?
            .map_err(|e| EngineError::Actor(e.to_string()))
    }
}

// --- Actor Runner (Internal Logic) ---
struct SessionRunner<G: RemoteGenerator> {
    receiver: mpsc::Receiver<SessionMessage>,
    /// Weak so the runner's own completion route never keeps the session
    /// alive; in-flight turns hold strong clones until they finish.
    self_sender: mpsc::WeakSender<SessionMessage>,
    engine: Arc<ResponseEngine<G>>,
    events: mpsc::Sender<EngineEvent>,
    transcript: Vec<Message>,
    in_flight: HashMap<Uuid, JoinHandle<()>>,
}

impl<G: RemoteGenerator> SessionRunner<G> {
    async fn run(mut self) {
        info!("Session actor started");
        self.record(Message::new(Sender::Bot, WELCOME_TEXT));

        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg).await;
        }

        info!("Session actor stopped");
    }

    async fn handle_message(&mut self, msg: SessionMessage) {
        match msg {
            SessionMessage::Submit {
                turn_id,
                text,
                credential,
            } => self.handle_submit(turn_id, text, credential),
            SessionMessage::TurnCompleted { turn_id, reply } => {
                self.handle_completed(turn_id, reply)
            }
            SessionMessage::Transcript { responder } => {
                let _ = responder.send(self.transcript.clone());
            }
        }
    }

    /// `Submitted -> Thinking`: records the user message, then schedules the
    /// turn on its own task. No turn-lock is taken, so completions may land
    /// out of submission order when delays or network latencies differ.
    fn handle_submit(&mut self, turn_id: Uuid, text: String, credential: Option<String>) {
        let delay = thinking_delay(text.chars().count());
        self.record(Message::new(Sender::User, text.clone()));
        self.emit(EngineEvent::Typing { turn_id });

        let Some(completions) = self.self_sender.upgrade() else {
            return;
        };
        let engine = Arc::clone(&self.engine);
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            let reply = engine.respond(&text, credential.as_deref()).await;
            if completions
                .send(SessionMessage::TurnCompleted { turn_id, reply })
                .await
                .is_err()
            {
                warn!("Session closed before turn {} completed", turn_id);
            }
        });
        self.in_flight.insert(turn_id, handle);
    }

    /// `Thinking -> Completed`: records the reply and raises the independent
    /// advisories.
    fn handle_completed(&mut self, turn_id: Uuid, reply: EngineReply) {
        self.in_flight.remove(&turn_id);
        self.record(Message::new(Sender::Bot, reply.reply_text.clone()));

        if let Some(detail) = reply.remote_error_detail {
            self.emit(EngineEvent::RemoteAdvisory { detail });
        }
        if detects_crisis_signal(&reply.reply_text) {
            self.emit(EngineEvent::CrisisAdvisory {
                message: CRISIS_ADVISORY_TEXT.to_string(),
            });
        }
    }

    fn record(&mut self, message: Message) {
        self.transcript.push(message.clone());
        self.emit(EngineEvent::MessageRecorded(message));
    }

    fn emit(&self, event: EngineEvent) {
        if let Err(e) = self.events.try_send(event) {
            warn!("Dropping engine event, collaborator not keeping up: {}", e);
        }
    }
}
