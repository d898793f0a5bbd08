use std::path::PathBuf;

use clap::Parser;
use iced::{window, Subscription, Task, Theme};
use log::error;
use tile_colors::{
    message::Message,
    state::{self, EditorState},
    update, view,
};

#[derive(Parser, Debug)]
#[command(about = "Edit the background colors of game tiles")]
struct Args {
    /// Project directory holding the Palettes folder
    #[arg(long)]
    project: Option<PathBuf>,
}

fn theme(_state: &EditorState) -> Theme {
    match dark_light::detect().unwrap_or(dark_light::Mode::Unspecified) {
        dark_light::Mode::Light => Theme::Light,
        dark_light::Mode::Dark | dark_light::Mode::Unspecified => Theme::Dark,
    }
}

fn subscription(_state: &EditorState) -> Subscription<Message> {
    Subscription::batch([
        iced::event::listen().map(Message::Event),
        window::close_requests().map(Message::WindowClose),
    ])
}

pub fn main() -> iced::Result {
    env_logger::init();
    let args = Args::parse();

    let editor_state = match state::get_initial_state(args.project.clone()) {
        Ok(s) => s,
        Err(e) => {
            error!("Error loading project: {}\n{}", e, e.backtrace());
            let mut s = EditorState::new(state::get_global_config_path().unwrap_or_default());
            s.global_config.project_dir = args.project;
            s
        }
    };

    iced::application("Tile Colors", update::update, view::view)
        .theme(theme)
        .subscription(subscription)
        .exit_on_close_request(false)
        .run_with(move || (editor_state, Task::none()))
}
