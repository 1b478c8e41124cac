use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

fn platform_home() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    let var = "APPDATA";
    #[cfg(not(target_os = "windows"))]
    let var = "HOME";

    std::env::var_os(var)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("environment variable {var} is not set"))
}

/// Resolve the service home directory.
///
/// `None` → `<platform home>/<default_subdir>`; a leading `~` is expanded;
/// relative paths are made absolute against the current directory.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let path = match configured {
        None => platform_home()?.join(default_subdir),
        Some(raw) => {
            if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
                platform_home()?.join(rest)
            } else if raw == "~" {
                platform_home()?
            } else {
                PathBuf::from(raw)
            }
        }
    };

    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .context("cannot read current directory")?
            .join(path)
    };

    if create {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("cannot create home dir {}", path.display()))?;
    }
    Ok(path)
}
