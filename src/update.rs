use iced::{
    keyboard::{self, key},
    window, Event, Task,
};
use log::{error, info, warn};

use crate::{
    color_map::TilePalette,
    common::{Color, ColorValue},
    message::Message,
    persist,
    state::{EditorState, PREVIEW_VALUES},
};

fn move_selection(state: &mut EditorState, step: isize) {
    let Some(value) = state.selected_value else {
        state.selected_value = PREVIEW_VALUES.first().copied();
        return;
    };
    let Some(idx) = PREVIEW_VALUES.iter().position(|&v| v == value) else {
        return;
    };
    let new_idx = idx as isize + step;
    if new_idx >= 0 && (new_idx as usize) < PREVIEW_VALUES.len() {
        state.selected_value = Some(PREVIEW_VALUES[new_idx as usize]);
    }
}

fn change_channel(state: &mut EditorState, f: impl FnOnce(&mut Color, ColorValue), c: ColorValue) {
    let Some(value) = state.selected_value else {
        return;
    };
    let mut color = state.palette().color(value);
    f(&mut color, c);
    state.palette_mut().set_color(value, color);
}

pub fn update(state: &mut EditorState, message: Message) -> Task<Message> {
    match message {
        Message::Event(event) => match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => {
                state.selected_value = None;
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::ArrowRight),
                ..
            }) => move_selection(state, 1),
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::ArrowLeft),
                ..
            }) => move_selection(state, -1),
            _ => {}
        },
        Message::SaveProject => {
            if let Err(e) = persist::save_project(state) {
                error!("Error saving project: {}\n{}", e, e.backtrace());
            }
        }
        Message::WindowClose(id) => {
            if let Err(e) = persist::save_project(state) {
                error!("Error saving project: {}\n{}", e, e.backtrace());
                return Task::none();
            }
            return window::close(id);
        }
        Message::SelectPalette(name) => {
            match state.palettes.iter().position(|p| p.name == name) {
                Some(i) => state.palette_idx = i,
                None => warn!("Unknown palette: {}", name),
            }
        }
        Message::SetNewPaletteName(name) => {
            state.new_palette_name = name;
        }
        Message::AddPalette => {
            let name = state.new_palette_name.trim().to_string();
            if name.is_empty() {
                warn!("Palette name is empty");
                return Task::none();
            }
            if !persist::is_valid_palette_name(&name) {
                warn!("Palette name {:?} is not a valid file name", name);
                return Task::none();
            }
            if state.palettes.iter().any(|p| p.name == name) {
                warn!("Palette {} already exists", name);
                return Task::none();
            }
            info!("Adding palette {}", name);
            let mut pal = TilePalette::new(&name);
            pal.modified = true;
            state.palettes.push(pal);
            state.palettes.sort_by(|x, y| x.name.cmp(&y.name));
            state.palette_idx = state
                .palettes
                .iter()
                .position(|p| p.name == name)
                .unwrap_or(0);
            state.new_palette_name.clear();
        }
        Message::DeletePalette => {
            let name = state.palette().name.clone();
            if state.global_config.project_dir.is_some() {
                if let Err(e) = persist::delete_palette(state, &name) {
                    error!("Error deleting palette: {}\n{}", e, e.backtrace());
                    return Task::none();
                }
            }
            state.palettes.remove(state.palette_idx);
            if state.palettes.is_empty() {
                state.palettes.push(TilePalette::new("Default"));
            }
            state.palette_idx = 0;
        }
        Message::SelectTile(value) => {
            state.selected_value = Some(value);
        }
        Message::ChangeRed(c) => change_channel(state, |color, c| color.red = c, c),
        Message::ChangeGreen(c) => change_channel(state, |color, c| color.green = c, c),
        Message::ChangeBlue(c) => change_channel(state, |color, c| color.blue = c, c),
        Message::ResetTileColor => {
            if let Some(value) = state.selected_value {
                state.palette_mut().clear_color(value);
            }
        }
    }
    Task::none()
}
