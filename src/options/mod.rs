//! Persistent viewer options with TOML preset support.
//!
//! Asset locations, the standalone preview surface, UI styling and render
//! pacing are consolidated here. Options serialize to/from TOML; every
//! section uses `#[serde(default)]` so partial files work.

mod assets;
mod preview;
mod render;
mod ui;

use std::path::Path;

pub use assets::AssetOptions;
pub use preview::PreviewOptions;
pub use render::RenderOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use ui::UiOptions;

use crate::error::StageError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Model file locations.
    #[schemars(skip)]
    pub assets: AssetOptions,
    /// Standalone render surface and camera.
    pub preview: PreviewOptions,
    /// Page styling hints.
    pub ui: UiOptions,
    /// Render loop pacing.
    pub render: RenderOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Io`] if the file cannot be read and
    /// [`StageError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, StageError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| StageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`StageError::OptionsParse`] on serialization failure and
    /// [`StageError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[assets]
model_dir = "/srv/models"

[ui]
highlight_color = "orange"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.assets.model_dir, PathBuf::from("/srv/models"));
        assert_eq!(opts.assets.ball_dir, "pdb");
        assert_eq!(opts.ui.highlight_color, "orange");
        assert_eq!(opts.preview.width, 1024);
        assert_eq!(opts.preview.half_extent, 1.5);
    }

    #[test]
    fn asset_paths_follow_identity() {
        let assets = AssetOptions::default();
        let id = "2VAA".into();
        assert_eq!(assets.ball_path(&id), PathBuf::from("models/pdb/2VAA.pdb"));
        assert_eq!(
            assets.ribbon_path(&id),
            PathBuf::from("models/ribbon/2VAA.gltf")
        );
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = Options::default();
        opts.render.target_fps = 90;
        opts.save(&dir.path().join("presets/fast.toml")).unwrap();
        std::fs::write(dir.path().join("presets/notes.txt"), "x").unwrap();

        let loaded = Options::load(&dir.path().join("presets/fast.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir.path().join("presets")), [
            "fast"
        ]);
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[preview]\nwidth = \"wide\"\n").unwrap();
        assert!(matches!(Options::load(&path), Err(StageError::OptionsParse(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("preview"));
        assert!(props.contains_key("ui"));
        assert!(props.contains_key("render"));
        assert!(!props.contains_key("assets"));

        let preview = &props["preview"]["properties"];
        assert!(preview.get("width").is_some());
        assert!(preview.get("eye").is_none());
    }
}
