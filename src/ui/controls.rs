use iced::widget::{button, pick_list, row, slider, text, Row};
use iced::{Alignment, Length};

use crate::speech::VoiceOption;
use crate::state::controller::ButtonState;
use crate::state::volume::Volume;
use crate::Message;

/// Generate / Clear / Read, each enabled from the state machine
pub fn action_buttons<'a>(buttons: ButtonState) -> Row<'a, Message> {
    row![
        button("Generate")
            .on_press_maybe(buttons.generate.then_some(Message::Generate))
            .padding(10),
        button("Clear")
            .on_press_maybe(buttons.clear.then_some(Message::Clear))
            .padding(10),
        button("Read Text")
            .on_press_maybe(buttons.read.then_some(Message::Read))
            .padding(10),
    ]
    .spacing(10)
}

/// Voice picker plus a button to re-query the synthesizer
pub fn voice_picker<'a>(options: &'a [VoiceOption], selected: Option<&'a VoiceOption>) -> Row<'a, Message> {
    row![
        pick_list(options, selected, Message::VoiceSelected)
            .placeholder(if options.is_empty() { "No voices available" } else { "Default voice" })
            .width(Length::Fixed(280.0)),
        button("↻").on_press(Message::RefreshVoices),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
}

/// Volume slider with its tier icon
pub fn volume_control<'a>(volume: Volume) -> Row<'a, Message> {
    let tier = volume.tier();
    row![
        text(tier.glyph()).size(24),
        slider(0..=Volume::MAX, volume.value(), Message::VolumeChanged).width(Length::Fixed(200.0)),
        text(tier.alt()).size(14),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
}
