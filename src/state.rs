use anyhow::{Context, Result};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use log::warn;

use crate::{
    color_map::TilePalette,
    common::{Color, TileValue},
    persist,
};

// Values shown in the editor's preview row: 2, 4, ..., 2048
pub const PREVIEW_VALUES: [TileValue; 11] = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048];

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct GlobalConfig {
    #[serde(skip_serializing, skip_deserializing)]
    pub modified: bool,
    pub project_dir: Option<PathBuf>,
}

pub struct EditorState {
    pub global_config_path: PathBuf,
    pub global_config: GlobalConfig,

    // Project data:
    pub palettes: Vec<TilePalette>,

    // Temporary editor state:
    pub palette_idx: usize,
    pub selected_value: Option<TileValue>,
    pub new_palette_name: String,
}

impl EditorState {
    pub fn new(global_config_path: PathBuf) -> Self {
        EditorState {
            global_config_path,
            global_config: GlobalConfig::default(),
            palettes: vec![TilePalette::new("Default")],
            palette_idx: 0,
            selected_value: None,
            new_palette_name: String::new(),
        }
    }

    pub fn palette(&self) -> &TilePalette {
        &self.palettes[self.palette_idx]
    }

    pub fn palette_mut(&mut self) -> &mut TilePalette {
        &mut self.palettes[self.palette_idx]
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.selected_value.map(|v| self.palette().color(v))
    }

    pub fn is_modified(&self) -> bool {
        self.global_config.modified || self.palettes.iter().any(|p| p.modified)
    }
}

pub fn get_global_config_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "TileColors")
        .context("Unable to open global config directory.")?;
    let config_dir = project_dirs.config_dir();
    let config_path = config_dir.join("config.json");
    Ok(config_path)
}

pub fn get_initial_state(project_dir: Option<PathBuf>) -> Result<EditorState> {
    load_initial_state(get_global_config_path()?, project_dir)
}

fn load_initial_state(
    global_config_path: PathBuf,
    project_dir: Option<PathBuf>,
) -> Result<EditorState> {
    let mut editor_state = EditorState::new(global_config_path);
    if let Err(e) = persist::load_global_config(&mut editor_state) {
        warn!("Ignoring global config: {:#}", e);
    }
    if let Some(dir) = project_dir {
        editor_state.global_config.project_dir = Some(dir);
        editor_state.global_config.modified = true;
    }
    persist::load_project(&mut editor_state)?;
    Ok(editor_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_default_palette() {
        let state = EditorState::new(PathBuf::from("config.json"));
        assert_eq!(state.palettes.len(), 1);
        assert_eq!(state.palette().name, "Default");
        assert_eq!(state.selected_color(), None);
        assert!(!state.is_modified());
    }

    #[test]
    fn corrupt_config_keeps_project_override() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "{ not json").unwrap();
        let project = dir.path().join("project");

        let state = load_initial_state(config_path, Some(project.clone())).unwrap();
        assert_eq!(state.global_config.project_dir, Some(project));
        assert!(state.global_config.modified);
        assert_eq!(state.palette().name, "Default");
    }

    #[test]
    fn selected_color_follows_palette() {
        let mut state = EditorState::new(PathBuf::from("config.json"));
        state.selected_value = Some(2);
        assert_eq!(state.selected_color(), Some(Color::new(241, 101, 40)));

        state.palette_mut().set_color(2, Color::new(0, 0, 255));
        assert_eq!(state.selected_color(), Some(Color::new(0, 0, 255)));
        assert!(state.is_modified());
    }
}
