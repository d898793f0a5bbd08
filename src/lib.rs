pub mod color_map;
pub mod common;
pub mod helpers;
pub mod message;
pub mod persist;
pub mod state;
pub mod update;
pub mod view;

pub use color_map::{get_color, TilePalette, FALLBACK_COLOR};
pub use common::{Color, TileValue};
