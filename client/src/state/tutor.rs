#[cfg(test)]
#[path = "tutor_test.rs"]
mod tutor_test;

use frames::Identity;

/// Role strings used on tutor messages.
pub const ROLE_USER: &str = "user";
pub const ROLE_MODEL: &str = "model";

/// A single chat turn in the tutor panel.
#[derive(Clone, Debug, PartialEq)]
pub struct TutorMessage {
    pub id: String,
    pub role: String,
    pub text: String,
    /// Milliseconds since Unix epoch; 0 when the browser clock was not read.
    pub ts: f64,
}

/// State for the tutor chat panel.
///
/// Streamed answers append to the trailing model message, so display order
/// is plain vector order and chunk order is arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TutorState {
    pub messages: Vec<TutorMessage>,
    /// True from send until the terminal frame; input is disabled meanwhile.
    pub streaming: bool,
}

/// Identity-specific opening message shown whenever the topic switches.
#[must_use]
pub fn greeting_for(identity: Identity) -> &'static str {
    match identity {
        Identity::First => {
            "We are looking at the First Identity: ∫ x⁻ˣ dx. Curious about its connection to infinite sums?"
        }
        Identity::Second => {
            "This is the Second Identity: ∫ xˣ dx. The terms alternate signs here. Ask me why!"
        }
    }
}

impl TutorState {
    /// Start a fresh conversation for the given identity.
    pub fn reset_for(&mut self, identity: Identity, ts: f64) {
        self.messages.clear();
        self.streaming = false;
        self.messages.push(TutorMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ROLE_MODEL.to_owned(),
            text: greeting_for(identity).to_owned(),
            ts,
        });
    }

    /// Record the user's question.
    pub fn push_user(&mut self, text: impl Into<String>, ts: f64) {
        self.messages.push(TutorMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ROLE_USER.to_owned(),
            text: text.into(),
            ts,
        });
    }

    /// Open an empty model message for the streamed answer to land in.
    pub fn begin_reply(&mut self, ts: f64) {
        self.messages.push(TutorMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: ROLE_MODEL.to_owned(),
            text: String::new(),
            ts,
        });
        self.streaming = true;
    }

    /// Append one streamed chunk to the pending model message.
    pub fn append_chunk(&mut self, chunk: &str) {
        if let Some(last) = self.messages.last_mut() {
            if last.role == ROLE_MODEL {
                last.text.push_str(chunk);
            }
        }
    }

    /// Mark the streamed answer finished.
    pub fn finish(&mut self) {
        self.streaming = false;
    }
}
