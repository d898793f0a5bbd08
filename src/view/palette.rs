// Palette selection and per-tile color editing
use iced::{
    alignment::Vertical,
    widget::{button, column, pick_list, row, text, text_input, Space},
    Element, Length,
};
use iced_aw::number_input;

use crate::{color_map::is_known_value, message::Message, state::EditorState};

fn save_label(state: &EditorState) -> &'static str {
    if state.is_modified() {
        "Save*"
    } else {
        "Save"
    }
}

pub fn palette_controls_view(state: &EditorState) -> Element<Message> {
    let palette_names: Vec<String> = state.palettes.iter().map(|x| x.name.clone()).collect();
    let selected_palette_name = state.palette().name.clone();

    row![
        text("Palette"),
        pick_list(
            palette_names,
            Some(selected_palette_name),
            Message::SelectPalette
        )
        .width(200),
        button(text("Delete"))
            .style(button::danger)
            .on_press(Message::DeletePalette),
        Space::with_width(20),
        text_input("New palette name", &state.new_palette_name)
            .on_input(Message::SetNewPaletteName)
            .on_submit(Message::AddPalette)
            .width(200),
        button(text("Add"))
            .style(button::success)
            .on_press(Message::AddPalette),
        Space::with_width(Length::Fill),
        button(text(save_label(state))).on_press(Message::SaveProject),
    ]
    .spacing(10)
    .padding(10)
    .align_y(Vertical::Center)
    .into()
}

pub fn selected_tile_view(state: &EditorState) -> Element<Message> {
    let (Some(value), Some(color)) = (state.selected_value, state.selected_color()) else {
        return text("Select a tile to edit its color.").into();
    };
    let source = if state.palette().colors.contains_key(&value) {
        "palette"
    } else if is_known_value(value) {
        "built-in"
    } else {
        "fallback"
    };

    let rgb_width = 80;
    column![
        text(format!("Tile {}: {} ({}, {})", value, color, color.to_hex(), source)),
        row![
            text("Red"),
            number_input(&color.red, 0..=255, Message::ChangeRed).width(rgb_width),
            Space::with_width(10),
            text("Green"),
            number_input(&color.green, 0..=255, Message::ChangeGreen).width(rgb_width),
            Space::with_width(10),
            text("Blue"),
            number_input(&color.blue, 0..=255, Message::ChangeBlue).width(rgb_width),
            Space::with_width(10),
            button(text("Reset"))
                .style(button::secondary)
                .on_press(Message::ResetTileColor),
        ]
        .spacing(5)
        .align_y(Vertical::Center),
    ]
    .spacing(10)
    .padding(10)
    .into()
}
