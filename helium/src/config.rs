use helium_core::models::Button;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use xdg::BaseDirectories;

mod checks;

pub use checks::Finding;

/// Title bar settings, shared by every frame.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BarConfig {
    /// Height in pixels. Zero disables the bar.
    pub height: i32,
    /// Background colors as `#RRGGBB`.
    pub focused: String,
    pub unfocused: String,
    pub title: String,
    pub center_title: bool,
    /// Distance of an uncentred title from the left edge.
    pub title_offset: i32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            height: 20,
            focused: "#c1c1c1".to_owned(),
            unfocused: "#3f3f3f".to_owned(),
            title: "#000000".to_owned(),
            center_title: true,
            title_offset: 5,
        }
    }
}

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub tags: Vec<String>,
    pub focus_new_windows: bool,
    pub default_width: i32,
    pub default_height: i32,
    pub move_button: Button,
    pub resize_button: Button,
    pub close_button: Button,
    // Tables have to come after plain values in TOML.
    pub bar: BarConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: (1..=9).map(|i| i.to_string()).collect(),
            focus_new_windows: true,
            default_width: 640,
            default_height: 480,
            move_button: Button::Left,
            resize_button: Button::Right,
            close_button: Button::Middle,
            bar: BarConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find the configuration directory: {0}")]
    BaseDirectories(#[from] xdg::BaseDirectoriesError),
    #[error("Could not read or write the configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialize the default configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Loads the configuration, falling back to the defaults when it cannot be read.
#[must_use]
pub fn load(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => load_from_file(path),
        None => load_from_xdg(),
    };
    loaded
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err}"))
        .unwrap_or_default()
}

/// Reads `config.toml` from the XDG config directory, writing out the defaults on first run.
///
/// # Errors
///
/// Fails when the config directory cannot be created, or when the file cannot be read, parsed
/// or written.
pub fn load_from_xdg() -> Result<Config, ConfigError> {
    let path = BaseDirectories::with_prefix("helium")?;
    let config_filename = path.place_config_file("config.toml")?;
    if config_filename.exists() {
        return load_from_file(&config_filename);
    }
    let config = Config::default();
    let toml = toml::to_string(&config)?;
    let mut file = File::create(&config_filename)?;
    file.write_all(toml.as_bytes())?;
    tracing::info!("Wrote default config to {}", config_filename.display());
    Ok(config)
}

/// Reads a config file. A missing file gives the defaults.
///
/// # Errors
///
/// Fails when the file exists but cannot be read or is not valid TOML.
pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    tracing::debug!("Loading config file {}", path.display());
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

impl helium_core::Config for Config {
    fn create_list_of_tag_labels(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn bar_height(&self) -> i32 {
        self.bar.height
    }

    fn focused_bar_color(&self) -> String {
        self.bar.focused.clone()
    }

    fn unfocused_bar_color(&self) -> String {
        self.bar.unfocused.clone()
    }

    fn title_color(&self) -> String {
        self.bar.title.clone()
    }

    fn center_title(&self) -> bool {
        self.bar.center_title
    }

    fn title_offset(&self) -> i32 {
        self.bar.title_offset
    }

    fn focus_new_windows(&self) -> bool {
        self.focus_new_windows
    }

    fn default_width(&self) -> i32 {
        self.default_width
    }

    fn default_height(&self) -> i32 {
        self.default_height
    }

    fn move_button(&self) -> Button {
        self.move_button
    }

    fn resize_button(&self) -> Button {
        self.resize_button
    }

    fn close_button(&self) -> Button {
        self.close_button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_from_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "tags = [\"web\", \"code\"]\nresize_button = \"Middle\"\n\n[bar]\nheight = 16\n",
        );
        let config = load_from_file(&path).unwrap();
        assert_eq!(config.tags, vec!["web".to_owned(), "code".to_owned()]);
        assert_eq!(config.resize_button, Button::Middle);
        assert_eq!(config.bar.height, 16);
        assert_eq!(config.bar.focused, "#c1c1c1");
        assert!(config.focus_new_windows);
    }

    #[test]
    fn malformed_file_is_an_error_and_load_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "tags = [\"1\"\n");
        assert!(matches!(load_from_file(&path), Err(ConfigError::Parse(_))));
        assert_eq!(load(Some(&path)), Config::default());
    }

    #[test]
    fn defaults_survive_a_toml_round_trip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn default_tags_are_one_through_nine() {
        use helium_core::Config as _;
        let labels = Config::default().create_list_of_tag_labels();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels.first().map(String::as_str), Some("1"));
        assert_eq!(labels.last().map(String::as_str), Some("9"));
    }
}
