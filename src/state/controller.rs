/// Button state machine
///
/// Tracks which of the Generate / Clear / Read buttons are enabled as the
/// user loads an image, generates captions, and clears the surface.

/// Where the session is in the load → caption → clear cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing loaded yet; Generate already works on the blank surface
    #[default]
    Idle,
    /// Image drawn, no captions yet
    ImageLoaded,
    /// Captions rendered onto the surface
    Captioned,
    /// Surface wiped; behaves like a fresh load
    Cleared,
}

/// Enabled flags for the three action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub generate: bool,
    pub clear: bool,
    pub read: bool,
}

impl ButtonState {
    /// Ready to caption: after an image load or a clear
    pub const READY: Self = Self { generate: true, clear: false, read: false };

    /// Captions on the surface
    pub const CAPTIONED: Self = Self { generate: false, clear: true, read: true };
}

#[derive(Debug, Clone)]
pub struct Controller {
    phase: Phase,
    buttons: ButtonState,
}

impl Default for Controller {
    /// Idle starts in the same configuration a clear leaves behind
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            buttons: ButtonState::READY,
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// A new image finished loading. Accepted in any phase.
    pub fn image_loaded(&mut self) {
        self.phase = Phase::ImageLoaded;
        self.buttons = ButtonState::READY;
    }

    /// The caption form was submitted. Ignored unless Generate is enabled.
    pub fn submit(&mut self) -> bool {
        if !self.buttons.generate {
            return false;
        }
        self.phase = Phase::Captioned;
        self.buttons = ButtonState::CAPTIONED;
        true
    }

    /// Clear was clicked. Ignored unless Clear is enabled.
    pub fn clear(&mut self) -> bool {
        if !self.buttons.clear {
            return false;
        }
        self.phase = Phase::Cleared;
        self.buttons = ButtonState::READY;
        true
    }

    /// Whether a read-aloud request should go through. Never changes state.
    pub fn can_read(&self) -> bool {
        self.buttons.read
    }
}
