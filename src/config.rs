//! Saved command-line defaults.
//!
//! Flags live in plain text files holding the same tokens the command line
//! accepts, one or more per line, with `#` comments. The global file is
//! merged first, then the local `.devopslandingrc`, then the command line.
//! `--manual` is a per-launch switch: it is never saved, and a file that
//! contains it is read as if it did not.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "devops-landing";
const LOCAL_FILE: &str = ".devopslandingrc";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub manual: bool,
    pub no_mouse: bool,
    pub perf: bool,
    pub theme: Option<ThemeMode>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches accumulate, options from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            manual: self.manual || other.manual,
            no_mouse: self.no_mouse || other.no_mouse,
            perf: self.perf || other.perf,
            theme: other.theme.or(self.theme),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR).join("config");
        }
    }

    PathBuf::from(LOCAL_FILE)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

/// Read flags from `path`; a missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(ConfigFlags {
        manual: false,
        ..parse_flag_tokens(&tokens)
    })
}

/// Write `flags` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# devops-landing defaults (saved with --save)".to_string()];
    if flags.no_mouse {
        lines.push("--no-mouse".to_string());
    }
    if let Some(theme) = flags.theme {
        lines.push(format!("--theme {}", theme.as_str()));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove the flag file at `path` if there is one.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list; everything else is ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--manual" | "-m" => flags.manual = true,
            "--no-mouse" => flags.no_mouse = true,
            "--perf" => flags.perf = true,
            "--theme" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.theme = parse_theme(next);
                    i += 1;
                }
            }
            "--render-debug-log" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.render_debug_log = Some(PathBuf::from(next));
                    i += 1;
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--theme=") {
                    flags.theme = parse_theme(value);
                } else if let Some(value) = token.strip_prefix("--render-debug-log=") {
                    flags.render_debug_log = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let flags = parse_flag_tokens(&tokens(&[
            "devops-landing",
            "--manual",
            "--no-mouse",
            "--theme",
            "dark",
            "--render-debug-log=render.log",
            "--save",
        ]));
        assert!(flags.manual);
        assert!(flags.no_mouse);
        assert!(!flags.perf);
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert_eq!(flags.render_debug_log, Some(PathBuf::from("render.log")));
    }

    #[test]
    fn test_parse_flag_tokens_accepts_short_manual() {
        let flags = parse_flag_tokens(&tokens(&["devops-landing", "-m"]));
        assert!(flags.manual);
    }

    #[test]
    fn test_parse_flag_tokens_ignores_unknown_theme() {
        let flags = parse_flag_tokens(&tokens(&["--theme=sepia"]));
        assert_eq!(flags.theme, None);
    }

    #[test]
    fn test_parse_flag_tokens_dangling_option_is_ignored() {
        let flags = parse_flag_tokens(&tokens(&["--perf", "--render-debug-log"]));
        assert!(flags.perf);
        assert_eq!(flags.render_debug_log, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            manual: true,
            theme: Some(ThemeMode::Light),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            perf: true,
            theme: Some(ThemeMode::Dark),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.manual);
        assert!(merged.perf);
        assert_eq!(merged.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_config_union_keeps_file_option_when_cli_unset() {
        let file = ConfigFlags {
            render_debug_log: Some(PathBuf::from("a.log")),
            ..ConfigFlags::default()
        };
        let merged = file.union(&ConfigFlags::default());
        assert_eq!(merged.render_debug_log, Some(PathBuf::from("a.log")));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            manual: true,
            no_mouse: true,
            perf: true,
            theme: Some(ThemeMode::Light),
            render_debug_log: Some(PathBuf::from("render.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(
            loaded,
            ConfigFlags {
                manual: false,
                ..flags.clone()
            }
        );
        let saved = fs::read_to_string(&path).unwrap();
        assert!(!saved.contains("--manual"));

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    }

    #[test]
    fn test_manual_in_flag_file_is_not_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_FILE);
        fs::write(&path, "--manual\n-m\n--perf\n").unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert!(!loaded.manual);
        assert!(loaded.perf);
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_FILE);
        fs::write(&path, "# comment --perf\n\n  --no-mouse  --theme dark\n").unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert!(loaded.no_mouse);
        assert!(!loaded.perf);
        assert_eq!(loaded.theme, Some(ThemeMode::Dark));
    }
}
