/// State management module
///
/// This module handles all UI-local application state, including:
/// - The Generate / Clear / Read button state machine (controller.rs)
/// - The top/bottom caption pair (caption.rs)
/// - The read-aloud volume and its icon tier (volume.rs)
/// - Settings read from the config directory (settings.rs)

pub mod caption;
pub mod controller;
pub mod settings;
pub mod volume;
