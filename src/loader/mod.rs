//! Concurrent acquisition of the ball and ribbon models.
//!
//! The two loads are independent: either may be disabled by the viewer
//! configuration (its slot then resolves to `None` without touching the
//! source), and they may finish in any order. The join is fail-fast: the
//! first failing load fails the pair and the other result is dropped.
//! Whatever the outcome, the loading indicator is hidden when the pair
//! settles.

mod files;
mod gltf_import;
mod pdb_import;
mod ribbon;

pub use files::FileAssets;
pub use ribbon::{adapt_ribbon, palette_color, RIBBON_PALETTE};

use crate::config::ViewerConfiguration;
use crate::error::StageError;
use crate::identity::StructureIdentity;
use crate::scene::SceneNode;
use crate::ui::{self, UiChannel};

/// Raw result of a ribbon import: the whole imported scene, before the
/// ribbon root is located and recolored.
#[derive(Debug, Clone, Default)]
pub struct RibbonScene {
    /// Import root; the ribbon itself sits at `children[0].children[0]`.
    pub scene: SceneNode,
}

/// Whichever models were enabled and loaded.
#[derive(Debug, Clone, Default)]
pub struct LoadedAssets {
    /// Ball model, if enabled.
    pub ball: Option<SceneNode>,
    /// Adapted ribbon root, if enabled.
    pub ribbon: Option<SceneNode>,
}

/// Where model files come from.
///
/// Both fetches are suspension points; implementations decide how the bytes
/// are obtained and decoded.
pub trait AssetSource {
    /// Fetch and decode the ball model for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::AssetFetch`] if the model cannot be obtained or
    /// decoded.
    async fn fetch_ball(
        &self,
        identity: &StructureIdentity,
    ) -> Result<SceneNode, StageError>;

    /// Fetch and import the ribbon scene for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::AssetFetch`] if the scene cannot be obtained or
    /// imported.
    async fn fetch_ribbon(
        &self,
        identity: &StructureIdentity,
    ) -> Result<RibbonScene, StageError>;
}

/// Load the enabled models for `identity` concurrently.
///
/// # Errors
///
/// Returns the first [`StageError::AssetFetch`] raised by an enabled load.
pub async fn load_assets<S: AssetSource>(
    source: &S,
    identity: &StructureIdentity,
    config: &ViewerConfiguration,
    ui: &dyn UiChannel,
) -> Result<LoadedAssets, StageError> {
    let joined = futures::try_join!(
        load_ball(source, identity, config.ball_enabled),
        load_ribbon(source, identity, config.ribbon_enabled),
    );
    ui.set_visible(ui::LOADING, false);

    let (ball, ribbon) = joined?;
    log::debug!(
        "{identity}: assets loaded (ball: {}, ribbon: {})",
        ball.is_some(),
        ribbon.is_some()
    );
    Ok(LoadedAssets { ball, ribbon })
}

async fn load_ball<S: AssetSource>(
    source: &S,
    identity: &StructureIdentity,
    enabled: bool,
) -> Result<Option<SceneNode>, StageError> {
    if !enabled {
        log::debug!("{identity}: ball model disabled");
        return Ok(None);
    }
    let ball = source.fetch_ball(identity).await?;
    Ok(Some(ball))
}

async fn load_ribbon<S: AssetSource>(
    source: &S,
    identity: &StructureIdentity,
    enabled: bool,
) -> Result<Option<SceneNode>, StageError> {
    if !enabled {
        log::debug!("{identity}: ribbon model disabled");
        return Ok(None);
    }
    let raw = source.fetch_ribbon(identity).await?;
    adapt_ribbon(raw, identity).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetKind;
    use crate::testing::{FakeAssets, RecordingUi, UiCall};

    fn run(
        source: &FakeAssets,
        query: &str,
        ui: &RecordingUi,
    ) -> Result<LoadedAssets, StageError> {
        let config = ViewerConfiguration::from_query(query);
        let identity = config.identity.clone().unwrap_or_else(|| "1CRN".into());
        pollster::block_on(load_assets(source, &identity, &config, ui))
    }

    #[test]
    fn both_enabled_loads_both() {
        let source = FakeAssets::new();
        let ui = RecordingUi::default();
        let assets = run(&source, "?molecule=1CRN", &ui).unwrap();
        assert!(assets.ball.is_some());
        assert!(assets.ribbon.is_some());
        assert_eq!(source.ball_calls(), 1);
        assert_eq!(source.ribbon_calls(), 1);
    }

    #[test]
    fn noball_never_fetches_ball() {
        let source = FakeAssets::new();
        let ui = RecordingUi::default();
        let assets = run(&source, "?molecule=1CRN&noball", &ui).unwrap();
        assert!(assets.ball.is_none());
        assert!(assets.ribbon.is_some());
        assert_eq!(source.ball_calls(), 0);
    }

    #[test]
    fn both_disabled_resolves_empty() {
        let source = FakeAssets::new().failing_ball().failing_ribbon();
        let ui = RecordingUi::default();
        let assets =
            run(&source, "?molecule=1CRN&noball&noribbon", &ui).unwrap();
        assert!(assets.ball.is_none());
        assert!(assets.ribbon.is_none());
        assert_eq!(source.ball_calls() + source.ribbon_calls(), 0);
    }

    #[test]
    fn ribbon_failure_fails_the_pair() {
        let source = FakeAssets::new().failing_ribbon();
        let ui = RecordingUi::default();
        let err = run(&source, "?molecule=1CRN", &ui).unwrap_err();
        assert!(matches!(
            err,
            StageError::AssetFetch {
                asset: AssetKind::Ribbon,
                ..
            }
        ));
    }

    #[test]
    fn disabled_failing_load_does_not_fail_the_pair() {
        let source = FakeAssets::new().failing_ribbon();
        let ui = RecordingUi::default();
        let assets = run(&source, "?molecule=1CRN&noribbon", &ui).unwrap();
        assert!(assets.ball.is_some());
    }

    #[test]
    fn indicator_hidden_on_success_and_failure() {
        let hidden = UiCall::Visible(ui::LOADING.to_owned(), false);

        let ui = RecordingUi::default();
        let _ = run(&FakeAssets::new(), "?molecule=1CRN", &ui);
        assert_eq!(ui.calls(), vec![hidden.clone()]);

        let ui = RecordingUi::default();
        let _ = run(&FakeAssets::new().failing_ball(), "?molecule=1CRN", &ui);
        assert_eq!(ui.calls(), vec![hidden]);
    }

    #[test]
    fn completion_order_does_not_matter() {
        // Ball finishes long after the ribbon.
        let source = FakeAssets::new().with_ball_delay(5);
        let ui = RecordingUi::default();
        let assets = run(&source, "?molecule=1CRN", &ui).unwrap();
        assert_eq!(source.completion_order(), [AssetKind::Ribbon, AssetKind::Ball]);
        assert_eq!(
            assets.ball.and_then(|b| b.name),
            Some("ball".to_owned())
        );
    }

    #[test]
    fn early_failure_discards_slow_sibling() {
        let source = FakeAssets::new().with_ball_delay(5).failing_ribbon();
        let ui = RecordingUi::default();
        assert!(run(&source, "?molecule=1CRN", &ui).is_err());
        assert_eq!(source.completion_order(), [AssetKind::Ribbon]);
    }
}
