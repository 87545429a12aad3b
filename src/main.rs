use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use image::Rgba;
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod error;
mod render;
mod speech;
mod state;
mod ui;

use render::fit::fit_image;
use render::font::CaptionFont;
use render::loader::{self, LoadedImage};
use render::surface::{CaptionStyle, Surface};
use speech::{EspeakSpeaker, Speaker, SpeechQueue, Utterance, Voice, VoiceList, VoiceOption};
use state::caption::CaptionPair;
use state::controller::Controller;
use state::settings::Settings;
use state::volume::Volume;

/// Image extensions offered in the file picker
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico"];

/// Main application state
///
/// Everything the handlers touch lives here; nothing is global.
struct MemeGenerator {
    settings: Settings,
    /// The drawing surface, owned for the whole session
    surface: Surface,
    /// Display snapshot of `surface`
    preview: iced::widget::image::Handle,
    /// Caption font; captions are skipped when none could be loaded
    font: Option<CaptionFont>,
    /// Most recent upload, replaced by each new one
    image: Option<Arc<LoadedImage>>,
    /// Bumped on every file pick; decodes from older picks are dropped
    load_generation: u64,
    captions: CaptionPair,
    controller: Controller,
    voices: VoiceList,
    selected_voice: Option<VoiceOption>,
    volume: Volume,
    speech: SpeechQueue,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Choose Image"
    SelectImage,
    /// Background decode finished for the given load generation
    ImageLoaded(u64, Result<Arc<LoadedImage>, String>),
    TopChanged(String),
    BottomChanged(String),
    /// Caption form submitted
    Generate,
    Clear,
    Read,
    VolumeChanged(u8),
    VoiceSelected(VoiceOption),
    /// The synthesizer reported its voices (may happen more than once)
    VoicesLoaded(Result<Vec<Voice>, String>),
    RefreshVoices,
}

impl MemeGenerator {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let font = match CaptionFont::load(settings.font_path.as_deref()) {
            Ok(font) => Some(font),
            Err(e) => {
                tracing::warn!("⚠️  Captions will not be drawn: {}", e);
                None
            }
        };

        let voices_task = Task::perform(
            list_voices_async(settings.speech_program.clone()),
            Message::VoicesLoaded,
        );

        let speaker = EspeakSpeaker::new(settings.speech_program.clone());
        let app = Self::build(settings, font, Box::new(speaker));

        tracing::info!(
            "🎨 Meme Generator initialized with a {}x{} canvas",
            app.surface.width(), app.surface.height()
        );

        (app, voices_task)
    }

    /// Assemble the state around an already chosen font and speaker
    fn build(settings: Settings, font: Option<CaptionFont>, speaker: Box<dyn Speaker>) -> Self {
        let surface = Surface::new(settings.canvas_width, settings.canvas_height);
        let preview = ui::preview::surface_handle(&surface);

        MemeGenerator {
            volume: Volume::new(settings.initial_volume),
            surface,
            preview,
            font,
            image: None,
            load_generation: 0,
            captions: CaptionPair::default(),
            controller: Controller::new(),
            voices: VoiceList::new(),
            selected_voice: None,
            speech: SpeechQueue::spawn(speaker),
            status: "Ready. Choose an image to get started.".to_string(),
            settings,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        tracing::debug!("{:?} in phase {:?}", message, self.controller.phase());

        match message {
            Message::SelectImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select an Image")
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => self.begin_load(path),
                    None => Task::none(),
                }
            }
            Message::ImageLoaded(generation, _) if generation != self.load_generation => {
                tracing::debug!("Dropping stale decode {} (current {})", generation, self.load_generation);
                Task::none()
            }
            Message::ImageLoaded(_, Ok(image)) => {
                self.draw_loaded_image(&image);
                self.controller.image_loaded();
                self.status = format!("✅ Loaded {} ({}x{})", image.alt, image.width, image.height);
                self.image = Some(image);
                Task::none()
            }
            Message::ImageLoaded(_, Err(e)) => {
                // a failed decode never counts as a load; buttons stay as they were
                tracing::warn!("⚠️  Image load failed: {}", e);
                self.status = format!("⚠️  Could not load image: {}", e);
                Task::none()
            }
            Message::TopChanged(top) => {
                self.captions.top = top;
                Task::none()
            }
            Message::BottomChanged(bottom) => {
                self.captions.bottom = bottom;
                Task::none()
            }
            Message::Generate => {
                if self.controller.submit() {
                    self.draw_captions();
                    self.status = "✅ Captions added.".to_string();
                }
                Task::none()
            }
            Message::Clear => {
                if self.controller.clear() {
                    self.surface.clear();
                    self.refresh_preview();
                    self.captions.reset();
                    self.image = None;
                    self.status = "Canvas cleared.".to_string();
                }
                Task::none()
            }
            Message::Read => {
                if self.controller.can_read() {
                    self.read_captions();
                }
                Task::none()
            }
            Message::VolumeChanged(value) => {
                self.volume = Volume::new(value);
                Task::none()
            }
            Message::VoiceSelected(option) => {
                self.selected_voice = Some(option);
                Task::none()
            }
            Message::VoicesLoaded(Ok(voices)) => {
                let added = self.voices.populate(voices);
                if self.voices.is_empty() {
                    tracing::warn!("⚠️  Synthesizer reported no voices");
                }
                if self.selected_voice.is_none() {
                    self.selected_voice = self.voices.default_option().cloned();
                }
                tracing::info!("🗣️  {} voices added ({} available)", added, self.voices.len());
                Task::none()
            }
            Message::VoicesLoaded(Err(e)) => {
                tracing::warn!("⚠️  Could not list voices: {}", e);
                self.status = format!("⚠️  Speech unavailable: {}", e);
                Task::none()
            }
            Message::RefreshVoices => Task::perform(
                list_voices_async(self.settings.speech_program.clone()),
                Message::VoicesLoaded,
            ),
        }
    }

    /// Start decoding `path`; any decode still running becomes stale
    fn begin_load(&mut self, path: PathBuf) -> Task<Message> {
        self.load_generation += 1;
        let generation = self.load_generation;

        self.status = format!("Loading {}...", path.display());
        Task::perform(load_image_async(path), move |result| Message::ImageLoaded(generation, result))
    }

    /// Clear, fill the background, and draw the fitted image
    fn draw_loaded_image(&mut self, image: &LoadedImage) {
        self.surface.clear();
        self.surface.fill(Rgba(self.settings.background));

        let placement = fit_image(
            self.surface.width() as f64,
            self.surface.height() as f64,
            image.width as f64,
            image.height as f64,
        );
        self.surface.draw_image(&image.pixels, &placement);
        self.refresh_preview();
    }

    fn draw_captions(&mut self) {
        let Some(font) = &self.font else {
            tracing::warn!("⚠️  No caption font available, skipping caption drawing");
            return;
        };

        let style = CaptionStyle {
            size: self.settings.font_size,
            color: Rgba(self.settings.text_color),
        };
        self.surface.draw_caption(&self.captions.top, font, &style, self.settings.top_baseline);
        self.surface.draw_caption(&self.captions.bottom, font, &style, self.settings.bottom_baseline);
        self.refresh_preview();
    }

    /// Top then bottom caption, with the selected voice and volume
    fn utterances(&self) -> Vec<Utterance> {
        // an unmatched selection falls through to the synthesizer's default voice
        let voice = self
            .selected_voice
            .as_ref()
            .and_then(|option| self.voices.find(&option.name))
            .map(|voice| voice.id.clone());

        self.captions
            .utterances()
            .iter()
            .map(|text| Utterance {
                text: text.to_string(),
                voice: voice.clone(),
                volume: self.volume.speech_factor(),
            })
            .collect()
    }

    fn read_captions(&self) {
        for utterance in self.utterances() {
            self.speech.enqueue(utterance);
        }
    }

    fn refresh_preview(&mut self) {
        self.preview = ui::preview::surface_handle(&self.surface);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let buttons = self.controller.buttons();
        let image_alt = self.image.as_ref().map_or("No image selected", |image| image.alt.as_str());

        let form: Column<Message> = column![
            button("Choose Image")
                .on_press(Message::SelectImage)
                .padding(10),
            text_input("Top text", &self.captions.top)
                .on_input(Message::TopChanged)
                .on_submit(Message::Generate)
                .padding(8),
            text_input("Bottom text", &self.captions.bottom)
                .on_input(Message::BottomChanged)
                .on_submit(Message::Generate)
                .padding(8),
            ui::controls::action_buttons(buttons),
            ui::controls::voice_picker(self.voices.options(), self.selected_voice.as_ref()),
            ui::controls::volume_control(self.volume),
        ]
        .spacing(16)
        .width(Length::Fixed(420.0));

        let content: Column<Message> = column![
            text("Meme Generator").size(40),
            row![
                column![
                    ui::preview::surface_view(&self.preview, self.surface.width(), self.surface.height()),
                    text(image_alt).size(14),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
                form,
            ]
            .spacing(30),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load_or_default();

    iced::application("Meme Generator", MemeGenerator::update, MemeGenerator::view)
        .theme(MemeGenerator::theme)
        .centered()
        .run_with(move || MemeGenerator::new(settings))
}

/// Decode the chosen file in the background
async fn load_image_async(path: PathBuf) -> Result<Arc<LoadedImage>, String> {
    loader::load_image(path)
        .await
        .map(Arc::new)
        .map_err(|e| e.to_string())
}

/// Ask the synthesizer for its voices in the background
async fn list_voices_async(program: String) -> Result<Vec<Voice>, String> {
    tokio::task::spawn_blocking(move || EspeakSpeaker::new(program).voices())
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())
}
