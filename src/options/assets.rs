use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::StructureIdentity;

/// Where model files live, relative to `model_dir`.
///
/// The ball model for `2VAA` is read from
/// `<model_dir>/<ball_dir>/2VAA.<ball_extension>` and the ribbon model from
/// `<model_dir>/<ribbon_dir>/2VAA.<ribbon_extension>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Assets", inline)]
#[serde(default)]
pub struct AssetOptions {
    /// Root directory for model files.
    pub model_dir: PathBuf,
    /// Sub-directory holding ball (coordinate) files.
    pub ball_dir: String,
    /// Extension of ball files.
    pub ball_extension: String,
    /// Sub-directory holding ribbon (scene) files.
    pub ribbon_dir: String,
    /// Extension of ribbon files.
    pub ribbon_extension: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            ball_dir: "pdb".to_owned(),
            ball_extension: "pdb".to_owned(),
            ribbon_dir: "ribbon".to_owned(),
            ribbon_extension: "gltf".to_owned(),
        }
    }
}

impl AssetOptions {
    /// Path of the ball file for `identity`.
    #[must_use]
    pub fn ball_path(&self, identity: &StructureIdentity) -> PathBuf {
        self.model_dir
            .join(&self.ball_dir)
            .join(format!("{identity}.{}", self.ball_extension))
    }

    /// Path of the ribbon file for `identity`.
    #[must_use]
    pub fn ribbon_path(&self, identity: &StructureIdentity) -> PathBuf {
        self.model_dir
            .join(&self.ribbon_dir)
            .join(format!("{identity}.{}", self.ribbon_extension))
    }
}
