// Mapping from tile values to tile background colors
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{Color, TileValue};

/// Color used for any value without a known entry, including 0.
pub const FALLBACK_COLOR: Color = Color::new(128, 128, 128);

const BUILTIN_COLORS: &[(TileValue, Color)] = &[(2, Color::new(241, 101, 40))];

fn builtin_color(value: TileValue) -> Option<Color> {
    BUILTIN_COLORS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|&(_, c)| c)
}

/// Background color for a tile showing `value`. Never fails.
pub fn get_color(value: TileValue) -> Color {
    builtin_color(value).unwrap_or(FALLBACK_COLOR)
}

pub fn is_known_value(value: TileValue) -> bool {
    builtin_color(value).is_some()
}

// Overrides are stored as `[value, [r, g, b]]` pairs; JSON object keys would
// have to be strings.
mod color_entries {
    use super::*;

    pub fn serialize<S: Serializer>(
        colors: &BTreeMap<TileValue, Color>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        s.collect_seq(colors.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<BTreeMap<TileValue, Color>, D::Error> {
        let entries: Vec<(TileValue, Color)> = Vec::deserialize(d)?;
        Ok(entries.into_iter().collect())
    }
}

/// User-editable colors layered over the built-in table.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TilePalette {
    #[serde(skip_serializing, skip_deserializing)]
    pub modified: bool,
    pub name: String,
    #[serde(default, with = "color_entries")]
    pub colors: BTreeMap<TileValue, Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Color>,
}

impl TilePalette {
    pub fn new(name: &str) -> Self {
        TilePalette {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn color(&self, value: TileValue) -> Color {
        if let Some(&c) = self.colors.get(&value) {
            return c;
        }
        builtin_color(value)
            .or(self.fallback)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn set_color(&mut self, value: TileValue, color: Color) {
        self.colors.insert(value, color);
        self.modified = true;
    }

    pub fn clear_color(&mut self, value: TileValue) {
        if self.colors.remove(&value).is_some() {
            self.modified = true;
        }
    }

    pub fn values(&self) -> Vec<TileValue> {
        let mut values: Vec<TileValue> = self.colors.keys().copied().collect();
        for &(v, _) in BUILTIN_COLORS {
            if !self.colors.contains_key(&v) {
                values.push(v);
            }
        }
        values.sort_unstable();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_is_orange() {
        assert_eq!(get_color(2), Color::new(241, 101, 40));
        assert_eq!(get_color(2).to_string(), "rgb(241, 101, 40)");
    }

    #[test]
    fn unmapped_values_fall_back() {
        assert_eq!(get_color(3), FALLBACK_COLOR);
        assert_eq!(get_color(0), FALLBACK_COLOR);
        assert_eq!(get_color(4096), FALLBACK_COLOR);
        assert_eq!(get_color(u64::MAX), FALLBACK_COLOR);
        assert!(!is_known_value(3));
        assert!(is_known_value(2));
    }

    #[test]
    fn lookups_are_deterministic() {
        for &(v, c) in BUILTIN_COLORS {
            assert_eq!(get_color(v), c);
            assert_eq!(get_color(v), get_color(v));
        }
    }

    #[test]
    fn lookups_agree_across_threads() {
        let expected: Vec<Color> = (0..64).map(get_color).collect();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..64).map(get_color).collect::<Vec<Color>>()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn palette_override_wins() {
        let mut pal = TilePalette::new("Custom");
        assert_eq!(pal.color(2), get_color(2));
        assert!(!pal.modified);

        pal.set_color(2, Color::new(1, 2, 3));
        assert!(pal.modified);
        assert_eq!(pal.color(2), Color::new(1, 2, 3));

        pal.set_color(8, Color::new(9, 9, 9));
        assert_eq!(pal.color(8), Color::new(9, 9, 9));
        assert_eq!(pal.values(), vec![2, 8]);
    }

    #[test]
    fn palette_fallback_used_for_unmapped() {
        let mut pal = TilePalette::new("Dark");
        assert_eq!(pal.color(16), FALLBACK_COLOR);
        pal.fallback = Some(Color::new(10, 10, 10));
        assert_eq!(pal.color(16), Color::new(10, 10, 10));
        assert_eq!(pal.color(2), get_color(2));
    }

    #[test]
    fn clear_only_marks_modified_when_removed() {
        let mut pal = TilePalette::new("Default");
        pal.clear_color(4);
        assert!(!pal.modified);

        pal.set_color(4, Color::new(5, 5, 5));
        pal.modified = false;
        pal.clear_color(4);
        assert!(pal.modified);
        assert_eq!(pal.color(4), FALLBACK_COLOR);
        assert_eq!(pal.values(), vec![2]);
    }

    #[test]
    fn palette_json_stores_value_color_pairs() {
        let mut pal = TilePalette::new("Default");
        pal.set_color(4, Color::new(237, 224, 200));
        pal.set_color(2, Color::new(1, 2, 3));
        let json = serde_json::to_string(&pal).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Default","colors":[[2,[1,2,3]],[4,[237,224,200]]]}"#
        );

        let loaded: TilePalette = serde_json::from_str(&json).unwrap();
        assert!(!loaded.modified);
        assert_eq!(loaded.color(4), Color::new(237, 224, 200));
        assert_eq!(loaded.color(2), Color::new(1, 2, 3));
    }

    #[test]
    fn palette_without_colors_loads_empty() {
        let loaded: TilePalette = serde_json::from_str(r#"{"name":"Bare"}"#).unwrap();
        assert!(loaded.colors.is_empty());
        assert_eq!(loaded.values(), vec![2]);
    }
}
