use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::element::RECORD_LINES;
use crate::error::{MapError, MapResult};

/// Partition lines into consecutive records of `RECORD_LINES`, keyed by `index / RECORD_LINES`.
///
/// A trailing group that is not complete is dropped.
pub fn group_records<I, S>(lines: I) -> BTreeMap<usize, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (index, line) in lines.into_iter().enumerate() {
        groups
            .entry(index / RECORD_LINES)
            .or_default()
            .push(line.into());
    }

    let incomplete = groups
        .last_key_value()
        .filter(|(_, lines)| lines.len() < RECORD_LINES)
        .map(|(&key, lines)| (key, lines.len()));
    if let Some((key, found)) = incomplete {
        log::warn!(
            "Dropping incomplete trailing record {} ({} of {} lines)",
            key,
            found,
            RECORD_LINES
        );
        groups.remove(&key);
    }
    groups
}

/// Write serialized map text to `path`, creating the file if needed
pub fn save_map(path: &Path, contents: &str) -> MapResult<()> {
    fs::write(path, contents).map_err(|err| MapError::io(path, err))?;
    log::info!("Saved map to {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Read a map file and group its lines into shape records
pub fn load_map(path: &Path) -> MapResult<BTreeMap<usize, Vec<String>>> {
    let text = fs::read_to_string(path).map_err(|err| MapError::io(path, err))?;
    let records = group_records(text.lines());
    log::info!("Read {} shape record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Read a text resource, joining its lines with `separator`.
///
/// Failures never propagate: the returned text names the path and the I/O
/// message so it can go straight into a dialog.
pub fn load_text_file(path: &Path, separator: &str) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text.lines().collect::<Vec<_>>().join(separator),
        Err(err) => {
            let err = MapError::io(path, err);
            log::error!("{}", err);
            format!(
                "\"{}\" was probably not found\nmessage: {}",
                path.display(),
                err
            )
        }
    }
}

/// Ensure `path` ends with `.extension`
pub fn with_extension(path: PathBuf, extension: &str) -> PathBuf {
    let matches = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if matches {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    }
}

/// Native open/save dialogs for map files
#[derive(Debug, Clone)]
pub struct FileHandler {
    directory: PathBuf,
    extension: String,
}

impl FileHandler {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            directory: config.maps_directory.clone(),
            extension: config.map_extension.clone(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn dialog(&self, title: &str) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Maps", &[self.extension.as_str()]);
        if self.directory.is_dir() {
            dialog.set_directory(&self.directory)
        } else {
            dialog
        }
    }

    /// Ask where to save; the map extension is appended when missing
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick_save_path(&self) -> Option<PathBuf> {
        self.dialog("Save Map")
            .save_file()
            .map(|path| with_extension(path, &self.extension))
    }

    /// Ask which existing map to open
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick_open_path(&self) -> Option<PathBuf> {
        self.dialog("Open Map")
            .pick_file()
            .filter(|path| path.exists())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn pick_save_path(&self) -> Option<PathBuf> {
        log::warn!("File dialogs are not available on the web");
        None
    }

    #[cfg(target_arch = "wasm32")]
    pub fn pick_open_path(&self) -> Option<PathBuf> {
        log::warn!("File dialogs are not available on the web");
        None
    }

    /// Remember the folder of the last map used
    pub fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.directory = parent.to_path_buf();
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
