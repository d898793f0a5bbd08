use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::{info, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Serializer;

use crate::{color_map::TilePalette, state::EditorState};

fn to_json_bytes<T: Serialize>(data: &T) -> Result<Vec<u8>> {
    let mut out = vec![];
    data.serialize(&mut Serializer::with_formatter(
        &mut out,
        PrettyCompactFormatter::new(),
    ))?;
    Ok(out)
}

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let bytes = to_json_bytes(data)?;
    let dir = path.parent().context("invalid parent directory")?;
    fs::create_dir_all(dir).with_context(|| format!("Unable to create {}", dir.display()))?;
    fs::write(path, bytes).with_context(|| format!("Unable to write {}", path.display()))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    info!("Loading {}", path.display());
    let text =
        fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Unable to parse {}", path.display()))
}

/// Palette names double as file names, so they must stay inside `Palettes/`.
pub fn is_valid_palette_name(name: &str) -> bool {
    const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
    !name.is_empty()
        && name.trim() == name
        && !name.starts_with('.')
        && !name.chars().any(|c| c.is_control() || RESERVED.contains(&c))
}

pub fn load_global_config(state: &mut EditorState) -> Result<()> {
    if !state.global_config_path.exists() {
        info!(
            "No global config at {}, using defaults",
            state.global_config_path.display()
        );
        return Ok(());
    }
    state.global_config = load_json(&state.global_config_path)?;
    Ok(())
}

pub fn save_global_config(state: &mut EditorState) -> Result<()> {
    if state.global_config.modified {
        save_json(&state.global_config_path, &state.global_config)?;
        state.global_config.modified = false;
    }
    Ok(())
}

fn get_project_dir(state: &EditorState) -> Result<PathBuf> {
    Ok(state
        .global_config
        .project_dir
        .as_ref()
        .context("Project directory not set.")?
        .to_owned())
}

fn get_palette_dir(state: &EditorState) -> Result<PathBuf> {
    Ok(get_project_dir(state)?.join("Palettes"))
}

fn get_palette_path(pal_dir: &Path, name: &str) -> Result<PathBuf> {
    ensure!(is_valid_palette_name(name), "Invalid palette name {:?}", name);
    Ok(pal_dir.join(format!("{}.json", name)))
}

pub fn load_palette_file(path: &Path) -> Result<TilePalette> {
    load_json(path)
}

fn save_palettes(state: &mut EditorState) -> Result<()> {
    let pal_dir = get_palette_dir(state)?;
    for pal in &mut state.palettes {
        if pal.modified {
            let pal_path = get_palette_path(&pal_dir, &pal.name)?;
            save_json(&pal_path, pal)?;
            pal.modified = false;
        }
    }
    Ok(())
}

fn load_palettes(state: &mut EditorState) -> Result<()> {
    let pal_dir = get_palette_dir(state)?;
    let pattern = format!(
        "{}/*.json",
        glob::Pattern::escape(&pal_dir.display().to_string())
    );
    state.palettes.clear();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        match load_palette_file(&path) {
            Ok(pal) => state.palettes.push(pal),
            Err(e) => warn!("Skipping palette: {:#}", e),
        }
    }
    if state.palettes.is_empty() {
        state.palettes.push(TilePalette::new("Default"));
    }
    state.palettes.sort_by(|x, y| x.name.cmp(&y.name));
    state.palette_idx = 0;
    Ok(())
}

pub fn delete_palette(state: &mut EditorState, name: &str) -> Result<()> {
    let pal_dir = get_palette_dir(state)?;
    let path = get_palette_path(&pal_dir, name)?;
    if !path.exists() {
        // Palette was never saved.
        return Ok(());
    }
    info!("Deleting {}", path.display());
    std::fs::remove_file(path)?;
    Ok(())
}

pub fn save_project(state: &mut EditorState) -> Result<()> {
    save_global_config(state)?;
    if state.global_config.project_dir.is_none() {
        return Ok(());
    }
    save_palettes(state)?;
    Ok(())
}

pub fn load_project(state: &mut EditorState) -> Result<()> {
    if state.global_config.project_dir.is_none() {
        return Ok(());
    }
    load_palettes(state)?;
    Ok(())
}
