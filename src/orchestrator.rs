//! Top-level composition pipeline.
//!
//! One run takes a [`ViewerConfiguration`] and drives three independent
//! tasks concurrently on the current thread:
//!
//! 1. loading the enabled models and resolving the composite's placement
//! 2. acquiring the render surface
//! 3. reconciling the host frame
//!
//! The tasks are joined fail-fast. Only when all three have succeeded are the
//! surface and the composite inserted into the live scene, in a single
//! mutation. A failure is logged here and nothing is attached.

use std::rc::Rc;

use crate::config::ViewerConfiguration;
use crate::error::StageError;
use crate::host::{reconcile_host_frame, HostFrame};
use crate::identity::StructureIdentity;
use crate::loader::{load_assets, AssetSource};
use crate::options::Options;
use crate::placement::{resolve_placement, CompositeModel, Placement};
use crate::scene::{Scene, SharedScene};
use crate::surface::SurfaceProvider;
use crate::ui::{self, highlight_menu, UiChannel};

/// Everything the pipeline stages share: the live scene, the options and the
/// UI side channel.
pub struct ViewerContext {
    /// The live scene, also read by the render loop.
    pub scene: SharedScene,
    /// Persistent viewer options.
    pub options: Options,
    /// Write-only page hints.
    pub ui: Rc<dyn UiChannel>,
}

impl ViewerContext {
    /// Fresh context with an empty scene.
    #[must_use]
    pub fn new(options: Options, ui: Rc<dyn UiChannel>) -> Self {
        Self {
            scene: Scene::shared(),
            options,
            ui,
        }
    }
}

impl std::fmt::Debug for ViewerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerContext")
            .field("scene", &self.scene)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No structure was requested; nothing was loaded or set up.
    Skipped,
    /// The composite was attached to the root container.
    Attached {
        /// Structure that was attached.
        identity: StructureIdentity,
        /// How its transform was chosen.
        placement: Placement,
        /// Host flat-panel flag, when running inside a host.
        flat: Option<bool>,
    },
}

/// Runs the composition pipeline against a set of collaborators.
pub struct CompositionOrchestrator<A, S, H> {
    context: ViewerContext,
    assets: A,
    surface: S,
    host: H,
}

impl<A, S, H> CompositionOrchestrator<A, S, H>
where
    A: AssetSource,
    S: SurfaceProvider,
    H: HostFrame,
{
    /// Wire the pipeline to its collaborators.
    #[must_use]
    pub fn new(context: ViewerContext, assets: A, surface: S, host: H) -> Self {
        Self {
            context,
            assets,
            surface,
            host,
        }
    }

    /// The shared context.
    #[must_use]
    pub fn context(&self) -> &ViewerContext {
        &self.context
    }

    /// Handle to the live scene, for the render loop.
    #[must_use]
    pub fn scene(&self) -> SharedScene {
        Rc::clone(&self.context.scene)
    }

    /// Run the pipeline once.
    ///
    /// # Errors
    ///
    /// Returns the first failure among the asset loads and surface setup, or
    /// [`StageError::ModelAlreadyAttached`] if a previous run already
    /// attached a composite. In every error case the scene is left without
    /// a new composite or surface.
    pub async fn run(
        &self,
        config: &ViewerConfiguration,
    ) -> Result<RunOutcome, StageError> {
        let ui = &*self.context.ui;
        highlight_menu(ui, config, &self.context.options.ui.highlight_color);

        let Some(identity) = &config.identity else {
            ui.set_visible(ui::LOADING, false);
            log::info!("no molecule requested; nothing to load");
            return Ok(RunOutcome::Skipped);
        };
        log::info!("{identity}: composing scene");

        let joined = futures::try_join!(
            self.compose(identity, config),
            self.surface.acquire(),
            async {
                Ok::<_, StageError>(
                    reconcile_host_frame(&self.host, &self.context.scene).await,
                )
            },
        );
        let (composite, surface, host) = match joined {
            Ok(parts) => parts,
            Err(e) => {
                // A sibling failure drops the asset load before it settles.
                ui.set_visible(ui::LOADING, false);
                log::error!("{identity}: {e}; nothing attached");
                return Err(e);
            }
        };

        let placement = composite.placement();
        {
            let mut scene = self.context.scene.borrow_mut();
            if let Err(e) = scene.attach_model(composite) {
                log::error!("{e}");
                return Err(e);
            }
            scene.install_surface(surface);
        }
        log::info!("{identity}: attached ({placement:?})");

        Ok(RunOutcome::Attached {
            identity: identity.clone(),
            placement,
            flat: host.flat,
        })
    }

    async fn compose(
        &self,
        identity: &StructureIdentity,
        config: &ViewerConfiguration,
    ) -> Result<CompositeModel, StageError> {
        let assets =
            load_assets(&self.assets, identity, config, &*self.context.ui)
                .await?;
        Ok(resolve_placement(identity, assets))
    }
}
