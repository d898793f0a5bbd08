use crate::common::{ColorValue, TileValue};

#[derive(Debug, Clone)]
pub enum Message {
    Event(iced::Event),
    SaveProject,
    WindowClose(iced::window::Id),
    SelectPalette(String),
    SetNewPaletteName(String),
    AddPalette,
    DeletePalette,
    SelectTile(TileValue),
    ChangeRed(ColorValue),
    ChangeGreen(ColorValue),
    ChangeBlue(ColorValue),
    ResetTileColor,
}
