// Tiles rendered with their mapped background color
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, mouse_area, text, Row},
    Element,
};

use crate::{
    color_map::TilePalette,
    common::{Color, TileValue},
    helpers::{alpha_blend, text_color},
    message::Message,
    state::{EditorState, PREVIEW_VALUES},
};

const TILE_SIZE: f32 = 72.0;
const HIGHLIGHT: Color = Color::new(255, 255, 255);

pub fn tile_style(background: Color, selected: bool) -> container::Style {
    let border = if selected {
        iced::border::rounded(6)
            .color(alpha_blend(background, HIGHLIGHT, 0.6))
            .width(3.0)
    } else {
        iced::border::rounded(6)
    };
    container::Style {
        text_color: Some(text_color(background).into()),
        background: Some(iced::Color::from(background).into()),
        border,
        ..container::Style::default()
    }
}

pub fn tile_view<'a>(value: TileValue, palette: &TilePalette, selected: bool) -> Element<'a, Message> {
    let color = palette.color(value);
    let label_size = if value >= 1000 { 18.0 } else { 24.0 };
    mouse_area(
        container(text(value.to_string()).size(label_size))
            .width(TILE_SIZE)
            .height(TILE_SIZE)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_theme| tile_style(color, selected)),
    )
    .on_press(Message::SelectTile(value))
    .into()
}

pub fn tile_row_view(state: &EditorState) -> Element<Message> {
    let pal = state.palette();
    let mut row = Row::new();
    for value in PREVIEW_VALUES {
        row = row.push(tile_view(value, pal, state.selected_value == Some(value)));
    }
    row.spacing(8).padding(10).into()
}
