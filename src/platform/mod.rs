// Platform paths
// Config/data directories for notion-recents and the default Chrome profile
// history location, selected with `cfg(target_os)` at compile time.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "notion-recents";

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/notion-recents` or `~/.config/notion-recents`
/// - **macOS**: `~/Library/Application Support/notion-recents`
/// - **Windows**: `%APPDATA%/notion-recents`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        roaming_app_data().join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        application_support().join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".config").join(APP_DIR),
        }
    }
}

/// Returns the data directory (pin database).
///
/// - **Linux**: `$XDG_DATA_HOME/notion-recents` or `~/.local/share/notion-recents`
/// - **macOS**: `~/Library/Application Support/notion-recents`
/// - **Windows**: `%APPDATA%/notion-recents`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        roaming_app_data().join(APP_DIR)
    }
    #[cfg(target_os = "macos")]
    {
        application_support().join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".local").join("share").join(APP_DIR),
        }
    }
}

/// Returns the `History` file of Chrome's default profile.
pub fn default_chrome_history_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let local = env::var("LOCALAPPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
        PathBuf::from(local)
            .join("Google")
            .join("Chrome")
            .join("User Data")
            .join("Default")
            .join("History")
    }
    #[cfg(target_os = "macos")]
    {
        application_support()
            .join("Google")
            .join("Chrome")
            .join("Default")
            .join("History")
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        home_dir()
            .join(".config")
            .join("google-chrome")
            .join("Default")
            .join("History")
    }
}

#[cfg(target_os = "windows")]
fn roaming_app_data() -> PathBuf {
    PathBuf::from(
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    )
}

#[cfg(target_os = "macos")]
fn application_support() -> PathBuf {
    home_dir().join("Library").join("Application Support")
}
