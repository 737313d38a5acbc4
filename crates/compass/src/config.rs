use crate::events::AppEvent;
use async_channel::Sender;
use compass_core::{ItemId, ItemList, NavigableItem, Navigator, NavigatorError, Orientation};
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub orientation: Orientation,
    /// Section the needle starts on. On reload it is applied like an
    /// active-section signal, so only a changed value moves the needle.
    #[serde(default)]
    pub active: Option<ItemId>,
    #[serde(default = "default_items")]
    pub items: Vec<NavigableItem>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            active: Some(ItemId::new("profile")),
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<NavigableItem> {
    vec![
        NavigableItem::new("profile", "Profile", 60.0),
        NavigableItem::new("work", "Work Experience", 20.0),
        NavigableItem::new("about", "About", -20.0),
        NavigableItem::new("contact", "Contact", -60.0),
    ]
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ItemList::new(self.items.clone())?;
        Ok(())
    }

    /// Pushes a reloaded config into a running navigator. An absent `active`
    /// leaves whatever section the socket last reported.
    pub fn apply_to(self, navigator: &mut Navigator) -> Result<(), NavigatorError> {
        navigator.set_items(self.items)?;
        if let Some(active) = self.active {
            navigator.set_active_section(active);
        }
        navigator.set_orientation(self.orientation);
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid items: {0}")]
    Items(#[from] NavigatorError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "compass", "compass").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Reads `path` (which may be missing) with `COMPASS_*` environment overrides
/// on top, and validates the item list.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("COMPASS"))
        .build()?;

    let config: Config = s.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(contents, config::FileFormat::Toml))
        .build()?;

    let config: Config = s.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

/// Anything unusable falls back to the built-in items so the panel always
/// comes up.
pub fn config_or_default(loaded: Result<Config, ConfigError>) -> Config {
    loaded.unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

/// Loads the user's config, writing the bundled one on first run.
pub fn load_or_default() -> Config {
    let path = match get_config_path() {
        Ok(path) => path,
        Err(e) => return config_or_default(Err(e)),
    };

    match write_default_config(&path) {
        Ok(true) => {
            log::info!("Wrote default config to {}", path.display());
            return Config::default();
        }
        Ok(false) => {}
        Err(e) => log::warn!("Could not write default config: {}", e),
    }
    config_or_default(load_config(&path))
}

/// Writes the bundled config to `path` unless a file is already there.
/// Returns whether it wrote one.
pub fn write_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

fn touches(event: &Event, path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == path)
}

/// Watches the config file and hands every valid revision to the GUI. A
/// revision that fails to parse or validate is logged here and skipped, so
/// the panel keeps its current items.
pub async fn watch_config(tx: Sender<AppEvent>) {
    if let Err(e) = run_watcher(tx).await {
        log::error!("Config watcher stopped: {}", e);
    }
}

async fn run_watcher(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let path = get_config_path()?;
    let dir = path.parent().ok_or(ConfigError::ConfigDirNotFound)?;
    fs_err::create_dir_all(dir)?;

    let (events_tx, events) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    // editors often emit several events per save
    let mut last: Option<Config> = None;

    while let Ok(res) = events.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Watch error: {}", e);
                continue;
            }
        };
        if !touches(&event, &path) {
            continue;
        }

        let config = match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Ignoring invalid config change: {}", e);
                continue;
            }
        };
        if last.as_ref() == Some(&config) {
            continue;
        }
        last = Some(config.clone());

        if tx.send(AppEvent::ConfigReload(config)).await.is_err() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        assert_eq!(parse_config(DEFAULT_CONFIG).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config("orientation = \"top\"").unwrap();
        assert_eq!(config.orientation, Orientation::SecondaryArc);
        assert_eq!(config.active, None);
        assert_eq!(config.items.len(), 4);
    }

    #[test]
    fn test_custom_items() {
        let config = parse_config(
            r#"
            [[items]]
            id = "intro"
            label = "Intro"
            angle = 45.5

            [[items]]
            id = "outro"
            label = "Outro"
            angle = -30
            "#,
        )
        .unwrap();
        assert_eq!(
            config.items,
            vec![
                NavigableItem::new("intro", "Intro", 45.5),
                NavigableItem::new("outro", "Outro", -30.0),
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = parse_config(
            r#"
            [[items]]
            id = "a"
            label = "A"
            angle = 10

            [[items]]
            id = "a"
            label = "B"
            angle = -10
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Items(NavigatorError::DuplicateId(_))));
    }

    #[test]
    fn test_unusable_config_falls_back() {
        let broken = parse_config("items = 3");
        assert!(broken.is_err());
        assert_eq!(config_or_default(broken), Config::default());

        let duplicated = parse_config(
            r#"
            [[items]]
            id = "a"
            label = "A"
            angle = 10

            [[items]]
            id = "a"
            label = "B"
            angle = -10
            "#,
        );
        assert_eq!(config_or_default(duplicated), Config::default());

        let custom = parse_config("orientation = \"top\"").unwrap();
        assert_eq!(config_or_default(Ok(custom.clone())), custom);
    }

    #[test]
    fn test_default_config_is_written_once() {
        let dir = std::env::temp_dir().join(format!("compass-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs_err::remove_dir_all(&dir);

        assert!(write_default_config(&path).unwrap());
        assert_eq!(fs_err::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs_err::write(&path, "orientation = \"top\"").unwrap();
        assert!(!write_default_config(&path).unwrap());
        assert_eq!(
            load_config(&path).unwrap().orientation,
            Orientation::SecondaryArc
        );

        fs_err::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_reload_applies_to_navigator() {
        let mut navigator = Navigator::new(
            default_items(),
            Some(ItemId::new("profile")),
            Orientation::PrimaryArc,
        )
        .unwrap();

        let config = parse_config(
            r#"
            orientation = "top"
            active = "b"

            [[items]]
            id = "a"
            label = "A"
            angle = 30

            [[items]]
            id = "b"
            label = "B"
            angle = -30
            "#,
        )
        .unwrap();
        config.apply_to(&mut navigator).unwrap();

        assert_eq!(navigator.items().len(), 2);
        assert_eq!(navigator.orientation(), Orientation::SecondaryArc);
        assert_eq!(navigator.active_section(), Some(&ItemId::new("b")));
        assert_eq!(navigator.target_angle(), -30.0);
    }

    #[test]
    fn test_reload_without_active_keeps_signal() {
        let mut navigator = Navigator::new(
            default_items(),
            Some(ItemId::new("profile")),
            Orientation::PrimaryArc,
        )
        .unwrap();
        navigator.set_active_section("about");

        let config = parse_config("orientation = \"primary\"").unwrap();
        config.apply_to(&mut navigator).unwrap();
        assert_eq!(navigator.active_section(), Some(&ItemId::new("about")));
        assert_eq!(navigator.target_angle(), -20.0);
    }

    #[test]
    fn test_bad_orientation_is_an_error() {
        assert!(parse_config("orientation = \"sideways\"").is_err());
    }

    #[test]
    fn test_config_json_shape() {
        let json = r#"{
            "orientation": "right",
            "active": "b",
            "items": [{"id": "b", "label": "B", "angle": 0}]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.orientation, Orientation::PrimaryArc);
        assert_eq!(config.active, Some(ItemId::new("b")));
        assert!(config.validate().is_ok());
    }
}
