use tokio::sync::oneshot;
use uuid::Uuid;

use crate::models::{EngineReply, Message};

/// Advisory text raised alongside a reply that carries a crisis marker.
pub const CRISIS_ADVISORY_TEXT: &str =
    "If you're in crisis, please contact emergency services or a mental health professional immediately.";

/// Messages that can be sent to the session actor.
#[derive(Debug)]
pub enum SessionMessage {
    /// A new user turn entering the `Submitted` state.
    Submit {
        turn_id: Uuid,
        text: String,
        credential: Option<String>,
    },
    /// Internal: a turn finished thinking and produced its reply.
    TurnCompleted { turn_id: Uuid, reply: EngineReply },
    /// A request for a snapshot of the session transcript.
    Transcript {
        /// A channel to send the transcript snapshot back.
        responder: oneshot::Sender<Vec<Message>>,
    },
}

/// Non-blocking notifications raised to the presentation collaborator.
///
/// Delivery is best-effort: a slow or absent consumer never stalls the
/// session, and the transcript remains the source of truth for messages.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A message was appended to the session transcript.
    MessageRecorded(Message),
    /// A turn entered its thinking delay; show a typing indicator.
    Typing { turn_id: Uuid },
    /// The produced reply contained a crisis marker.
    CrisisAdvisory { message: String },
    /// The remote generation path failed; the reply came from the local path.
    RemoteAdvisory { detail: String },
}
