/// Fire-and-forget speech queue
///
/// Utterances are handed to a dedicated worker thread that owns the
/// `Speaker` and plays them one after another in the order received.
/// Callers never wait, and there is no cancellation or completion signal.

use std::thread::{self, JoinHandle};
use tokio::sync::mpsc::{self, UnboundedSender};

use super::backend::{Speaker, Utterance};

pub struct SpeechQueue {
    sender: Option<UnboundedSender<Utterance>>,
    worker: Option<JoinHandle<()>>,
}

impl SpeechQueue {
    /// Start the worker thread for `speaker`
    pub fn spawn(mut speaker: Box<dyn Speaker>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<Utterance>();

        let worker = thread::spawn(move || {
            while let Some(utterance) = receiver.blocking_recv() {
                if let Err(e) = speaker.speak(&utterance) {
                    tracing::warn!("⚠️  Speech failed for {:?}: {}", utterance.text, e);
                }
            }
            tracing::debug!("speech worker stopped");
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Queue an utterance behind anything already waiting
    pub fn enqueue(&self, utterance: Utterance) {
        if let Some(sender) = &self.sender {
            if sender.send(utterance).is_err() {
                tracing::warn!("⚠️  Speech worker is gone, dropping utterance");
            }
        }
    }

    /// Stop accepting utterances and wait for the queued ones to finish
    #[cfg(test)]
    pub fn shutdown(mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for SpeechQueue {
    fn drop(&mut self) {
        // closing the channel lets the worker drain and exit on its own
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.is_finished() {
                let _ = worker.join();
            }
        }
    }
}

impl std::fmt::Debug for SpeechQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechQueue")
            .field("running", &self.sender.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MemeError, Result};
    use crate::speech::voices::Voice;
    use std::sync::{Arc, Mutex};

    /// Records what it was asked to say instead of making noise
    struct RecordingSpeaker {
        spoken: Arc<Mutex<Vec<Utterance>>>,
    }

    impl Speaker for RecordingSpeaker {
        fn voices(&self) -> Result<Vec<Voice>> {
            Ok(Vec::new())
        }

        fn speak(&mut self, utterance: &Utterance) -> Result<()> {
            if utterance.text == "fail" {
                return Err(MemeError::Speech("boom".to_string()));
            }
            self.spoken.lock().unwrap().push(utterance.clone());
            Ok(())
        }
    }

    fn utterance(text: &str) -> Utterance {
        Utterance { text: text.to_string(), voice: Some("gmw/de".to_string()), volume: 0.5 }
    }

    #[test]
    fn test_plays_in_order() {
        let spoken = Arc::new(Mutex::new(Vec::new()));
        let queue = SpeechQueue::spawn(Box::new(RecordingSpeaker { spoken: spoken.clone() }));

        queue.enqueue(utterance("top"));
        queue.enqueue(utterance("bottom"));
        queue.enqueue(utterance("top again"));
        queue.shutdown();

        let texts: Vec<String> = spoken.lock().unwrap().iter().map(|u| u.text.clone()).collect();
        assert_eq!(texts, ["top", "bottom", "top again"]);
    }

    #[test]
    fn test_failure_does_not_stop_the_queue() {
        let spoken = Arc::new(Mutex::new(Vec::new()));
        let queue = SpeechQueue::spawn(Box::new(RecordingSpeaker { spoken: spoken.clone() }));

        queue.enqueue(utterance("fail"));
        queue.enqueue(utterance("still here"));
        queue.shutdown();

        let spoken = spoken.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "still here");
        assert_eq!(spoken[0].volume, 0.5);
    }
}
