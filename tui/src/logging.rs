use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Targets that emit events: the `sharkdeal` binary and the API client
const DEFAULT_FILTER: &str = "sharkdeal=info,sharkdeal_api=info";

/// Log file location (~/.cache/sharkdeal/sharkdeal.log)
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("sharkdeal").join("sharkdeal.log"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Route tracing output to the log file, since the terminal belongs to the UI.
/// Without a usable cache directory the app runs with logging off.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: logging disabled, cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_this_crate() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());

        let crate_target = module_path!().split("::").next().unwrap();
        let targets: Vec<&str> = DEFAULT_FILTER
            .split(',')
            .filter_map(|directive| directive.split('=').next())
            .collect();
        assert!(targets.contains(&crate_target));
        assert!(targets.contains(&"sharkdeal_api"));
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = std::env::temp_dir().join(format!("sharkdeal-log-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        assert!(open_log_file(&blocker.join("sharkdeal.log")).is_err());
        assert!(open_log_file(&dir.join("logs").join("sharkdeal.log")).is_ok());

        fs::remove_dir_all(&dir).unwrap();
    }
}
