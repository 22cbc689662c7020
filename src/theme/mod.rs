use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::renderer::BrailleCanvas;
use crate::terminal::{Background, Foreground};

/// Themes compiled into the binary, by name.
const BUILTINS: [(&str, &str); 3] = [
    ("default", include_str!("../../themes/default.yaml")),
    ("mono", include_str!("../../themes/mono.yaml")),
    ("rainbow", include_str!("../../themes/rainbow.yaml")),
];

pub const BUILTIN_THEMES: [&str; 3] = [BUILTINS[0].0, BUILTINS[1].0, BUILTINS[2].0];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    #[serde(default)]
    pub foreground: Foreground,

    #[serde(default)]
    pub background: Background,

    /// Styles stepped through by animations. Empty means the base style
    /// is used for every step.
    #[serde(default)]
    pub cycle: Vec<StylePair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePair {
    pub foreground: Foreground,
    pub background: Background,
}

impl Theme {
    /// Read a theme from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme {}", path.display()))?;
        let theme = Self::parse(&yaml, &path.display().to_string())?;

        debug!("Loaded theme '{}' from {}", theme.name, path.display());
        Ok(theme)
    }

    /// A builtin theme, or `<name>.yaml` from the first theme directory
    /// that has one.
    pub fn load_by_name(name: &str) -> Result<Self> {
        if BUILTIN_THEMES.contains(&name) {
            return Self::load_builtin(name);
        }

        let file = format!("{}.yaml", name);
        match theme_dirs().map(|dir| dir.join(&file)).find(|path| path.is_file()) {
            Some(path) => Self::load(&path),
            None => anyhow::bail!(
                "Theme '{}' not found (builtins: {})",
                name,
                BUILTIN_THEMES.join(", ")
            ),
        }
    }

    pub fn load_builtin(name: &str) -> Result<Self> {
        let (_, yaml) = BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .with_context(|| format!("No builtin theme named '{}'", name))?;
        Self::parse(yaml, name)
    }

    fn parse(yaml: &str, origin: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).with_context(|| format!("Invalid theme {}", origin))
    }

    /// Style for animation step `step`, wrapping around the cycle.
    pub fn style_at(&self, step: usize) -> StylePair {
        if self.cycle.is_empty() {
            StylePair {
                foreground: self.foreground,
                background: self.background,
            }
        } else {
            self.cycle[step % self.cycle.len()]
        }
    }

    /// Number of distinct styles an animation steps through.
    pub fn cycle_len(&self) -> usize {
        self.cycle.len().max(1)
    }

    pub fn apply(&self, canvas: &mut BrailleCanvas, step: usize) {
        let style = self.style_at(step);
        canvas.set_style(style.foreground, style.background);
    }
}

/// Directories searched for `<name>.yaml`, in order: `./themes`, the user
/// data and config directories, then the system share directory.
fn theme_dirs() -> impl Iterator<Item = PathBuf> {
    let user = directories::ProjectDirs::from("", "", "ttybraille")
        .map(|dirs| [dirs.data_dir().join("themes"), dirs.config_dir().join("themes")])
        .into_iter()
        .flatten();

    std::iter::once(PathBuf::from("themes"))
        .chain(user)
        .chain(cfg!(unix).then(|| PathBuf::from("/usr/share/ttybraille/themes")))
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            name: "default".to_string(),
            foreground: Foreground::default(),
            background: Background::default(),
            cycle: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::load_builtin(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn default_builtin_matches_default_theme() {
        assert_eq!(Theme::load_builtin("default").unwrap(), Theme::default());
    }

    #[test]
    fn rainbow_skips_same_colour_pairs() {
        let theme = Theme::load_builtin("rainbow").unwrap();
        assert_eq!(theme.cycle.len(), 25);
        assert!(!theme.cycle.contains(&StylePair {
            foreground: Foreground::Red,
            background: Background::Red,
        }));
    }

    #[test]
    fn style_at_wraps() {
        let theme = Theme::load_builtin("rainbow").unwrap();
        assert_eq!(theme.style_at(0), theme.style_at(25));
        assert_eq!(theme.style_at(1).foreground, Foreground::Red);
    }

    #[test]
    fn plain_theme_always_uses_base_style() {
        let theme = Theme::load_builtin("mono").unwrap();
        assert_eq!(theme.cycle_len(), 1);
        assert_eq!(theme.style_at(7).background, Background::Black);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let theme: Theme = serde_yaml::from_str("name: bare\n").unwrap();
        assert_eq!(theme.foreground, Foreground::White);
        assert_eq!(theme.background, Background::Red);
        assert!(theme.cycle.is_empty());
    }

    #[test]
    fn unknown_colour_is_rejected() {
        let result: Result<Theme, _> = serde_yaml::from_str("name: bad\nforeground: pink\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let err = Theme::load_by_name("no-such-theme").unwrap_err();
        assert!(err.to_string().contains("no-such-theme"));
    }

    #[test]
    fn unknown_builtin_is_an_error() {
        let err = Theme::load_builtin("solarized").unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn theme_file_is_loaded_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("ttybraille-theme-{}.yaml", std::process::id()));
        fs::write(&path, "name: disk\nforeground: cyan\nbackground: grey\n").unwrap();

        let theme = Theme::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(theme.name, "disk");
        assert_eq!(theme.style_at(3).foreground, Foreground::Cyan);
        assert_eq!(theme.style_at(3).background, Background::Grey);
    }

    #[test]
    fn theme_dirs_start_with_local_directory() {
        assert_eq!(theme_dirs().next(), Some(PathBuf::from("themes")));
    }

    #[test]
    fn apply_sets_canvas_style() {
        let theme = Theme::load_builtin("rainbow").unwrap();
        let mut canvas = BrailleCanvas::new(0, 0, 2, 2).unwrap();
        theme.apply(&mut canvas, 7);
        assert_eq!(canvas.foreground, Foreground::White);
        assert_eq!(canvas.background, Background::Red);
    }
}
