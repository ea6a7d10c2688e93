use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_CACHE_DIR: &str = ".cinescope_cache";
pub const MAX_RETENTION_DAYS: u64 = 3650;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => egui::Visuals::dark(),
            Self::Light => egui::Visuals::light(),
        }
    }
}

impl Default for ThemeKind {
    fn default() -> Self {
        Self::Dark
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub cache_dir: PathBuf,
    pub poster_workers: usize,
    pub poster_max_width: u32,
    pub poster_quality: u8,
    pub poster_retention_days: u64,
    pub http_timeout_secs: u64,
    pub disable_posters: bool,
    pub theme: ThemeKind,
    pub animation_secs: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_dir: resolve_relative_path(DEFAULT_CACHE_DIR),
            poster_workers: 4,
            poster_max_width: 480,
            poster_quality: 80,
            poster_retention_days: 14,
            http_timeout_secs: 15,
            disable_posters: false,
            theme: ThemeKind::default(),
            animation_secs: 0.2,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    cache_dir: Option<String>,
    poster_workers: Option<usize>,
    poster_max_width: Option<u32>,
    poster_quality: Option<u8>,
    poster_retention_days: Option<u64>,
    http_timeout_secs: Option<u64>,
    disable_posters: Option<bool>,
    theme: Option<String>,
    animation_secs: Option<f32>,
}

/// Load `config.json` from the working directory, falling back to defaults.
/// `CINESCOPE_DISABLE_POSTERS` forces poster loading off regardless of the file.
pub fn load_config() -> AppConfig {
    let mut cfg = load_config_from(Path::new(CONFIG_FILE));
    if std::env::var_os("CINESCOPE_DISABLE_POSTERS").is_some() {
        cfg.disable_posters = true;
    }
    cfg
}

pub fn load_config_from(cfg_path: &Path) -> AppConfig {
    match fs::read_to_string(cfg_path) {
        Ok(raw) => match parse_config(&raw) {
            Ok(cfg) => {
                info!("Loaded config from {}", cfg_path.display());
                cfg
            }
            Err(err) => {
                warn!("Failed to parse {} ({err}). Using defaults.", cfg_path.display());
                AppConfig::default()
            }
        },
        Err(_) => {
            info!("No {} found; using defaults", cfg_path.display());
            AppConfig::default()
        }
    }
}

pub fn parse_config(raw: &str) -> Result<AppConfig, String> {
    let parsed = serde_json::from_str::<RawConfig>(raw).map_err(|e| e.to_string())?;
    let mut cfg = AppConfig::default();

    if let Some(dir) = parsed.cache_dir.filter(|d| !d.trim().is_empty()) {
        cfg.cache_dir = resolve_relative_path(dir.trim());
    }
    if let Some(n) = parsed.poster_workers {
        cfg.poster_workers = n.clamp(1, 16);
    }
    if let Some(w) = parsed.poster_max_width {
        cfg.poster_max_width = w.clamp(64, 2048);
    }
    if let Some(q) = parsed.poster_quality {
        cfg.poster_quality = q.clamp(10, 100);
    }
    if let Some(days) = parsed.poster_retention_days {
        cfg.poster_retention_days = days.min(MAX_RETENTION_DAYS);
    }
    if let Some(secs) = parsed.http_timeout_secs {
        cfg.http_timeout_secs = secs.max(1);
    }
    if let Some(off) = parsed.disable_posters {
        cfg.disable_posters = off;
    }
    if let Some(theme) = parsed.theme {
        match ThemeKind::from_str(&theme) {
            Some(kind) => cfg.theme = kind,
            None => warn!("Unknown theme `{theme}` in config; falling back to dark."),
        }
    }
    if let Some(secs) = parsed.animation_secs {
        cfg.animation_secs = secs.clamp(0.0, 2.0);
    }

    Ok(cfg)
}

/// Absolute paths pass through; relative ones hang off the working directory.
pub fn resolve_relative_path(p: &str) -> PathBuf {
    let path = PathBuf::from(p);
    if path.is_absolute() {
        return path;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&path))
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = parse_config("{}").expect("parse");
        let def = AppConfig::default();
        assert_eq!(cfg.poster_workers, def.poster_workers);
        assert_eq!(cfg.poster_max_width, def.poster_max_width);
        assert_eq!(cfg.theme, ThemeKind::Dark);
        assert!(!cfg.disable_posters);
        assert!(cfg.cache_dir.ends_with(DEFAULT_CACHE_DIR));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let cfg = parse_config(
            r#"{"poster_workers": 99, "poster_max_width": 10, "poster_quality": 0, "animation_secs": 9.0,
                "poster_retention_days": 300000000000000}"#,
        )
        .expect("parse");
        assert_eq!(cfg.poster_retention_days, MAX_RETENTION_DAYS);
        assert_eq!(cfg.poster_workers, 16);
        assert_eq!(cfg.poster_max_width, 64);
        assert_eq!(cfg.poster_quality, 10);
        assert!((cfg.animation_secs - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let cfg = parse_config(r#"{"theme": "sepia"}"#).expect("parse");
        assert_eq!(cfg.theme, ThemeKind::Dark);
        let cfg = parse_config(r#"{"theme": " Light "}"#).expect("parse");
        assert_eq!(cfg.theme, ThemeKind::Light);
    }

    #[test]
    fn invalid_json_in_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        let mut f = fs::File::create(&path).expect("create");
        f.write_all(b"{ not json").expect("write");

        let cfg = load_config_from(&path);
        assert_eq!(cfg.poster_workers, AppConfig::default().poster_workers);
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = dir.path().join("posters");
        let path = dir.path().join("config.json");
        let body = serde_json::json!({
            "cache_dir": cache.to_string_lossy(),
            "disable_posters": true,
            "http_timeout_secs": 3
        });
        fs::write(&path, body.to_string()).expect("write");

        let cfg = load_config_from(&path);
        assert_eq!(cfg.cache_dir, cache);
        assert!(cfg.disable_posters);
        assert_eq!(cfg.http_timeout_secs, 3);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_config_from(&dir.path().join("nope.json"));
        assert_eq!(cfg.poster_quality, AppConfig::default().poster_quality);
    }
}
