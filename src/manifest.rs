//! "icons" snippet for a WebExtension manifest.json
//!
//! Browser extension manifests declare their icons as an object mapping a
//! pixel size to a path relative to the extension root, e.g.
//! `{ "icons": { "16": "icons/icon16.png" } }`. This module writes that
//! object to `icons.json` next to the generated PNGs so it can be pasted
//! into manifest.json.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The `"icons"` object of a manifest.json, keyed by pixel size.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconsManifest {
    pub icons: BTreeMap<u32, String>,
}

impl IconsManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_icon(&mut self, size: u32, path: String) {
        self.icons.insert(size, path);
    }
}

/// Write `<out_dir>/icons.json` covering the given sizes and return its path.
pub fn write_icons_json(out_dir: &Path, sizes: &[u32]) -> Result<PathBuf> {
    // Manifest paths are relative to the extension root, so only the final
    // directory component goes into the snippet.
    let dir_name = out_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icons".to_string());

    let mut manifest = IconsManifest::new();
    for &size in sizes {
        manifest.add_icon(size, format!("{dir_name}/icon{size}.png"));
    }

    let path = out_dir.join("icons.json");
    let json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize icons.json")?;
    std::fs::write(&path, json).context("Failed to write icons.json file")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn snippet_maps_each_size_to_its_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let out_dir = temp_dir.path().join("icons");
        std::fs::create_dir_all(&out_dir).unwrap();

        let path = write_icons_json(&out_dir, &[16, 48, 128]).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        let icons = parsed["icons"].as_object().unwrap();
        assert_eq!(icons.len(), 3);
        assert_eq!(icons["16"], "icons/icon16.png");
        assert_eq!(icons["48"], "icons/icon48.png");
        assert_eq!(icons["128"], "icons/icon128.png");
    }

    #[test]
    fn sizes_are_sorted_numerically() {
        let mut manifest = IconsManifest::new();
        manifest.add_icon(128, "icons/icon128.png".to_string());
        manifest.add_icon(16, "icons/icon16.png".to_string());
        manifest.add_icon(48, "icons/icon48.png".to_string());

        let sizes: Vec<u32> = manifest.icons.keys().copied().collect();
        assert_eq!(sizes, vec![16, 48, 128]);
    }
}
