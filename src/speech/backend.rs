/// Speech synthesis backends
///
/// `Speaker` is the seam between the app and whatever actually produces
/// audio. The shipped backend drives the `espeak-ng` command line tool.

use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};

use super::voices::Voice;
use crate::error::{MemeError, Result};

/// One piece of text to read aloud
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Backend voice id; None uses the synthesizer's default voice
    pub voice: Option<String>,
    /// 0.0 (silent) to 1.0 (full)
    pub volume: f32,
}

pub trait Speaker: Send {
    /// Voices the synthesizer offers
    fn voices(&self) -> Result<Vec<Voice>>;

    /// Speak one utterance, returning once playback is done
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;
}

/// Speaks through the `espeak-ng` executable
#[derive(Debug, Clone)]
pub struct EspeakSpeaker {
    program: String,
}

impl EspeakSpeaker {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Speaker for EspeakSpeaker {
    fn voices(&self) -> Result<Vec<Voice>> {
        let output = Command::new(&self.program).arg("--voices").output()?;
        if !output.status.success() {
            return Err(MemeError::Speech(format!(
                "{} --voices exited with {}",
                self.program, output.status
            )));
        }
        Ok(parse_voice_table(&String::from_utf8_lossy(&output.stdout)))
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        // empty text is silence, not an error
        if utterance.text.trim().is_empty() {
            return Ok(());
        }

        let mut command = Command::new(&self.program);
        command
            .arg("-a")
            .arg(amplitude(utterance.volume).to_string())
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null());
        if let Some(voice) = &utterance.voice {
            command.arg("-v").arg(voice);
        }

        let mut child = command.spawn()?;
        let status = feed_and_wait(&mut child, &utterance.text)?;
        if !status.success() {
            return Err(MemeError::Speech(format!("{} exited with {}", self.program, status)));
        }
        Ok(())
    }
}

/// Write `text` to the child's stdin, close it, and always reap the child,
/// even when the write fails.
fn feed_and_wait(child: &mut Child, text: &str) -> Result<ExitStatus> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    written?;
    Ok(status)
}

/// espeak amplitude for a 0.0-1.0 volume; 100 is espeak's normal level
fn amplitude(volume: f32) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Parse the table printed by `espeak-ng --voices`:
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File                 Other Languages
///  5  af              --/M      Afrikaans          gmw/af
///  2  en-gb           --/M      English_(Great_Britain) gmw/en          (en 2)
/// ```
fn parse_voice_table(table: &str) -> Vec<Voice> {
    table
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 5 {
                return None;
            }
            let id = fields[4].to_string();
            Some(Voice {
                name: fields[3].replace('_', " "),
                lang: fields[1].to_string(),
                default: id.rsplit('/').next() == Some("en"),
                id,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  de              --/M      German             gmw/de
 2  en-gb           --/M      English_(Great_Britain) gmw/en          (en 2)
 5  en-us           --/M      English_(America)  gmw/en-US            (en 3)
";

    #[test]
    fn test_parse_voice_table() {
        let voices = parse_voice_table(VOICES);
        assert_eq!(voices.len(), 4);

        assert_eq!(voices[0].name, "Afrikaans");
        assert_eq!(voices[0].lang, "af");
        assert_eq!(voices[0].id, "gmw/af");
        assert!(!voices[0].default);

        assert_eq!(voices[2].name, "English (Great Britain)");
        assert_eq!(voices[2].lang, "en-gb");
        assert!(voices[2].default);
        assert!(!voices[3].default);
    }

    #[test]
    fn test_parse_skips_short_lines() {
        assert!(parse_voice_table("header\n\n  garbage line\n").is_empty());
    }

    #[test]
    fn test_amplitude() {
        assert_eq!(amplitude(0.0), 0);
        assert_eq!(amplitude(0.67), 67);
        assert_eq!(amplitude(1.0), 100);
        assert_eq!(amplitude(3.0), 100);
    }

    #[test]
    fn test_empty_text_is_silence() {
        // never spawns, so a missing program does not matter
        let mut speaker = EspeakSpeaker::new("/nonexistent/espeak-ng");
        let utterance = Utterance { text: "   ".to_string(), voice: None, volume: 1.0 };
        assert!(speaker.speak(&utterance).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_child_is_reaped_when_write_fails() {
        // `true` exits without reading, so a large write hits a closed pipe
        let mut child = Command::new("true")
            .stdin(Stdio::piped())
            .spawn()
            .unwrap();
        let text = "x".repeat(1 << 20);

        let result = feed_and_wait(&mut child, &text);
        assert!(matches!(result, Err(MemeError::Io(_))));
        assert!(child.try_wait().unwrap().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_feed_and_wait_reports_status() {
        let mut child = Command::new("cat")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .unwrap();

        let status = feed_and_wait(&mut child, "hello").unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let mut speaker = EspeakSpeaker::new("/nonexistent/espeak-ng");
        let utterance = Utterance { text: "hello".to_string(), voice: None, volume: 1.0 };
        assert!(matches!(speaker.speak(&utterance), Err(MemeError::Io(_))));
        assert!(speaker.voices().is_err());
    }
}
