mod palette;
mod tile;

use iced::{
    widget::{column, text},
    Element, Length,
};
use palette::{palette_controls_view, selected_tile_view};
use tile::tile_row_view;

pub use tile::{tile_style, tile_view};

use crate::{message::Message, state::EditorState};

pub fn view(state: &EditorState) -> Element<Message> {
    let mut col = column![
        palette_controls_view(state),
        tile_row_view(state),
        selected_tile_view(state),
    ]
    .spacing(10)
    .padding(10)
    .width(Length::Fill)
    .height(Length::Fill);

    if state.global_config.project_dir.is_none() {
        col = col.push(text(
            "No project directory set (use --project); palettes will not be saved.",
        ));
    }
    col.into()
}
