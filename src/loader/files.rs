use std::path::Path;

use super::{gltf_import, pdb_import, AssetSource, RibbonScene};
use crate::error::{AssetKind, StageError};
use crate::identity::StructureIdentity;
use crate::options::AssetOptions;
use crate::scene::SceneNode;

/// Asset source backed by a local model directory.
#[derive(Debug, Clone, Default)]
pub struct FileAssets {
    options: AssetOptions,
}

impl FileAssets {
    /// Source reading from the locations described by `options`.
    #[must_use]
    pub fn new(options: AssetOptions) -> Self {
        Self { options }
    }
}

fn require_file(
    path: &Path,
    asset: AssetKind,
    identity: &StructureIdentity,
) -> Result<(), StageError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(StageError::asset_fetch(
            asset,
            identity,
            format!("{} not found", path.display()),
        ))
    }
}

impl AssetSource for FileAssets {
    async fn fetch_ball(
        &self,
        identity: &StructureIdentity,
    ) -> Result<SceneNode, StageError> {
        let path = self.options.ball_path(identity);
        require_file(&path, AssetKind::Ball, identity)?;
        log::debug!("{identity}: reading ball model {}", path.display());
        pdb_import::read_ball(&path)
            .map_err(|reason| StageError::asset_fetch(AssetKind::Ball, identity, reason))
    }

    async fn fetch_ribbon(
        &self,
        identity: &StructureIdentity,
    ) -> Result<RibbonScene, StageError> {
        let path = self.options.ribbon_path(identity);
        require_file(&path, AssetKind::Ribbon, identity)?;
        log::debug!("{identity}: reading ribbon model {}", path.display());
        gltf_import::import_scene(&path)
            .map(|scene| RibbonScene { scene })
            .map_err(|reason| {
                StageError::asset_fetch(AssetKind::Ribbon, identity, reason)
            })
    }
}
