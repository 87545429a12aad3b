/// View helpers
///
/// - `preview.rs` - turns the drawing surface into a displayable image
/// - `controls.rs` - action buttons, voice picker, volume slider

pub mod controls;
pub mod preview;
