/// Read-aloud support
///
/// - `voices.rs` - the voice picker's list, safe to populate repeatedly
/// - `backend.rs` - the `Speaker` trait and the espeak-ng backend
/// - `queue.rs` - worker thread that plays utterances in order

pub mod backend;
pub mod queue;
pub mod voices;

pub use backend::{EspeakSpeaker, Speaker, Utterance};
pub use queue::SpeechQueue;
pub use voices::{Voice, VoiceList, VoiceOption};
