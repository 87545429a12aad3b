/// Voice list shown in the voice picker

use std::collections::HashSet;
use std::fmt;

/// A named speech persona offered by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Human readable name, what the user picks by
    pub name: String,
    /// Language tag, e.g. "en-gb"
    pub lang: String,
    /// Backend identifier passed to the synthesizer
    pub id: String,
    /// Whether this is the synthesizer's default voice
    pub default: bool,
}

/// One entry in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOption {
    /// Name of the voice this option selects
    pub name: String,
    pub lang: String,
    label: String,
}

impl VoiceOption {
    fn from_voice(voice: &Voice) -> Self {
        let mut label = format!("{} ({})", voice.name, voice.lang);
        if voice.default {
            label.push_str(" -- DEFAULT");
        }
        Self {
            name: voice.name.clone(),
            lang: voice.lang.clone(),
            label,
        }
    }
}

impl fmt::Display for VoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Available voices plus the picker options built from them
///
/// The synthesizer may announce its voices more than once, so populating is
/// idempotent: a voice whose name is already listed is skipped.
#[derive(Debug, Clone, Default)]
pub struct VoiceList {
    voices: Vec<Voice>,
    options: Vec<VoiceOption>,
    seen: HashSet<String>,
}

impl VoiceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any voices not already listed. Returns how many were added.
    pub fn populate(&mut self, voices: impl IntoIterator<Item = Voice>) -> usize {
        let mut added = 0;
        for voice in voices {
            if !self.seen.insert(voice.name.clone()) {
                continue;
            }
            self.options.push(VoiceOption::from_voice(&voice));
            self.voices.push(voice);
            added += 1;
        }
        added
    }

    pub fn options(&self) -> &[VoiceOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Find the voice with the given name.
    ///
    /// `None` means the synthesizer's default voice gets used.
    pub fn find(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().find(|v| v.name == name)
    }

    /// The option for the synthesizer's default voice, if any
    pub fn default_option(&self) -> Option<&VoiceOption> {
        self.voices
            .iter()
            .position(|v| v.default)
            .map(|i| &self.options[i])
    }
}
