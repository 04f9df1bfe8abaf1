use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::path::Path;
use std::process::Command;

/// Program plus leading arguments; the file path is appended last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub program: String,
    pub args: Vec<String>,
}

impl Launcher {
    /// `--with` beats the `opener` config entry, which beats the platform default.
    pub fn resolve(requested: Option<&str>, configured: Option<&str>) -> Self {
        match requested.or(configured).map(str::trim).filter(|s| !s.is_empty()) {
            Some(custom) => {
                let mut parts = custom.split_whitespace().map(str::to_string);
                // non-empty after trim, so there is a first word
                let program = parts.next().unwrap_or_default();
                Self {
                    program,
                    args: parts.collect(),
                }
            }
            None => Self::platform_default(),
        }
    }

    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self {
                program: "open".into(),
                args: Vec::new(),
            }
        } else if cfg!(target_os = "windows") {
            Self {
                program: "cmd".into(),
                args: vec!["/C".into(), "start".into(), String::new()],
            }
        } else {
            Self {
                program: "xdg-open".into(),
                args: Vec::new(),
            }
        }
    }
}

/// High-level business logic for the `open` command.
pub struct OpenLogic;

impl OpenLogic {
    pub fn open(path: &Path, launcher: &Launcher) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::DataFileMissing(path.to_path_buf()));
        }

        let status = Command::new(&launcher.program)
            .args(&launcher.args)
            .arg(path)
            .status()
            .map_err(|e| AppError::Launcher(format!("cannot run '{}': {e}", launcher.program)))?;

        if !status.success() {
            return Err(AppError::Launcher(format!(
                "'{}' exited with {status}",
                launcher.program
            )));
        }

        success(format!("Opened {}", path.display()));
        Ok(())
    }
}
