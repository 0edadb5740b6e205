//! File logging.
//!
//! Nothing is written until [`init`] has opened a log file, so library users
//! that never call it pay nothing. Picker lifecycle records go through
//! [`log_picker`] so every line carries the picker's title.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use once_cell::sync::Lazy;

use crate::picker::{FocusTarget, PickerEvent, Presentation};

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// `~/.tvpicker/logs`, or `./.tvpicker/logs` without a home directory.
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tvpicker")
        .join("logs")
}

/// Open a fresh timestamped log file under [`default_log_dir`].
pub fn init() -> std::io::Result<PathBuf> {
    init_in(&default_log_dir())
}

/// Open a fresh timestamped log file under `dir` and route all logging there.
pub fn init_in(dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("tvpicker_{}_{}.log", stamp, std::process::id()));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(file);
    }
    log(&format!("tvpicker {} started", env!("CARGO_PKG_VERSION")));

    Ok(path)
}

/// Append one timestamped line. Dropped silently before [`init`].
pub fn log(msg: &str) {
    let Ok(mut slot) = LOG_FILE.lock() else {
        return;
    };
    if let Some(file) = slot.as_mut() {
        let _ = writeln!(file, "[{}] {}", Local::now().format("%H:%M:%S%.3f"), msg);
        let _ = file.flush();
    }
}

/// One step in a picker's life.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerLog<'a> {
    Presented {
        presentation: Presentation,
        items: usize,
        focus: FocusTarget,
    },
    FocusMoved {
        from: FocusTarget,
        to: FocusTarget,
    },
    /// The result sink was gone when the outcome was ready
    Undelivered(&'a PickerEvent),
    Dismissed(&'a PickerEvent),
}

impl fmt::Display for PickerLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerLog::Presented {
                presentation,
                items,
                focus,
            } => write!(f, "presented {:?} with {} items, focus {:?}", presentation, items, focus),
            PickerLog::FocusMoved { from, to } => write!(f, "focus {:?} -> {:?}", from, to),
            PickerLog::Undelivered(event) => write!(f, "no sink, dropped {}", describe(event)),
            PickerLog::Dismissed(event) => write!(f, "dismissed after {}", describe(event)),
        }
    }
}

fn describe(event: &PickerEvent) -> String {
    match event {
        PickerEvent::Selected { item, index } => format!("select '{}' at {}", item, index),
        PickerEvent::Cancelled => "cancel".to_string(),
    }
}

/// Log a lifecycle record for the picker titled `title`.
pub fn log_picker(title: &str, record: &PickerLog<'_>) {
    log(&format!("[PICKER '{}'] {}", title, record));
}

/// Log panics to the file before handing over to the previous hook.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log(&format!("[PANIC] {}", info));
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_without_init_is_noop() {
        // Must not panic when no log file is open
        log("nothing to see");
        log_picker("Example Picker", &PickerLog::Dismissed(&PickerEvent::Cancelled));
    }

    #[test]
    fn test_picker_records() {
        let selected = PickerEvent::Selected {
            item: "Item 3".to_string(),
            index: 3,
        };
        assert_eq!(
            PickerLog::Presented {
                presentation: Presentation::Modal,
                items: 12,
                focus: FocusTarget::Cell(0),
            }
            .to_string(),
            "presented Modal with 12 items, focus Cell(0)"
        );
        assert_eq!(
            PickerLog::FocusMoved {
                from: FocusTarget::Cell(11),
                to: FocusTarget::Cancel,
            }
            .to_string(),
            "focus Cell(11) -> Cancel"
        );
        assert_eq!(
            PickerLog::Undelivered(&selected).to_string(),
            "no sink, dropped select 'Item 3' at 3"
        );
        assert_eq!(
            PickerLog::Dismissed(&PickerEvent::Cancelled).to_string(),
            "dismissed after cancel"
        );
    }

    #[test]
    fn test_init_in_writes_picker_lines() {
        let dir = std::env::temp_dir().join(format!("tvpicker_log_{}", std::process::id()));
        let path = init_in(&dir).unwrap();
        log_picker("Example Picker", &PickerLog::Dismissed(&PickerEvent::Cancelled));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("tvpicker"));
        assert!(contents.contains("[PICKER 'Example Picker'] dismissed after cancel"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
