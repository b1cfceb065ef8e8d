//! Scripted fakes for pipeline tests.

use std::cell::{Cell, RefCell};
use std::task::Poll;

use glam::Vec3;

use crate::error::{AssetKind, StageError};
use crate::host::{Enclosure, HostFrame};
use crate::identity::StructureIdentity;
use crate::loader::{AssetSource, RibbonScene};
use crate::options::PreviewOptions;
use crate::scene::{Mesh, SceneNode};
use crate::surface::{PreviewSurface, RenderSurface, SurfaceProvider};
use crate::ui::UiChannel;

/// Return `Pending` `times` times (waking immediately) before completing.
pub(crate) async fn yield_times(times: usize) {
    let mut remaining = times;
    futures::future::poll_fn(move |cx| {
        if remaining == 0 {
            Poll::Ready(())
        } else {
            remaining -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

/// Ball model whose farthest vertex is 2 from the origin.
pub(crate) fn sample_ball() -> SceneNode {
    SceneNode::named("ball").with_child(SceneNode::with_mesh(Mesh::from_points(&[
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ])))
}

/// Import-shaped ribbon scene: `scene/wrapper/ribbon/{chainA, chainB}`.
pub(crate) fn sample_ribbon() -> RibbonScene {
    let chain = |x: f32| {
        SceneNode::with_mesh(Mesh::from_points(&[
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.5),
        ]))
    };
    RibbonScene {
        scene: SceneNode::named("scene").with_child(
            SceneNode::named("wrapper").with_child(
                SceneNode::named("ribbon")
                    .with_child(chain(0.5))
                    .with_child(chain(-1.0)),
            ),
        ),
    }
}

/// Asset source with call counters, scripted failures and per-load delays.
#[derive(Debug, Default)]
pub(crate) struct FakeAssets {
    fail_ball: bool,
    fail_ribbon: bool,
    ball_delay: usize,
    ribbon_delay: usize,
    ball_calls: Cell<usize>,
    ribbon_calls: Cell<usize>,
    completed: RefCell<Vec<AssetKind>>,
}

impl FakeAssets {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_ball(mut self) -> Self {
        self.fail_ball = true;
        self
    }

    pub(crate) fn failing_ribbon(mut self) -> Self {
        self.fail_ribbon = true;
        self
    }

    pub(crate) fn with_ball_delay(mut self, polls: usize) -> Self {
        self.ball_delay = polls;
        self
    }

    pub(crate) fn with_ribbon_delay(mut self, polls: usize) -> Self {
        self.ribbon_delay = polls;
        self
    }

    pub(crate) fn ball_calls(&self) -> usize {
        self.ball_calls.get()
    }

    pub(crate) fn ribbon_calls(&self) -> usize {
        self.ribbon_calls.get()
    }

    /// Loads in the order they finished, successfully or not.
    pub(crate) fn completion_order(&self) -> Vec<AssetKind> {
        self.completed.borrow().clone()
    }
}

impl AssetSource for FakeAssets {
    async fn fetch_ball(
        &self,
        identity: &StructureIdentity,
    ) -> Result<SceneNode, StageError> {
        self.ball_calls.set(self.ball_calls.get() + 1);
        yield_times(self.ball_delay).await;
        self.completed.borrow_mut().push(AssetKind::Ball);
        if self.fail_ball {
            return Err(StageError::asset_fetch(AssetKind::Ball, identity, "scripted"));
        }
        Ok(sample_ball())
    }

    async fn fetch_ribbon(
        &self,
        identity: &StructureIdentity,
    ) -> Result<RibbonScene, StageError> {
        self.ribbon_calls.set(self.ribbon_calls.get() + 1);
        yield_times(self.ribbon_delay).await;
        self.completed.borrow_mut().push(AssetKind::Ribbon);
        if self.fail_ribbon {
            return Err(StageError::asset_fetch(
                AssetKind::Ribbon,
                identity,
                "scripted",
            ));
        }
        Ok(sample_ribbon())
    }
}

/// One recorded UI side-channel write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UiCall {
    Visible(String, bool),
    Color(String, String),
}

/// UI channel that records every write in order.
#[derive(Debug, Default)]
pub(crate) struct RecordingUi {
    calls: RefCell<Vec<UiCall>>,
}

impl RecordingUi {
    pub(crate) fn calls(&self) -> Vec<UiCall> {
        self.calls.borrow().clone()
    }
}

impl UiChannel for RecordingUi {
    fn set_visible(&self, element: &str, visible: bool) {
        self.calls
            .borrow_mut()
            .push(UiCall::Visible(element.to_owned(), visible));
    }

    fn set_color(&self, element: &str, color: &str) {
        self.calls
            .borrow_mut()
            .push(UiCall::Color(element.to_owned(), color.to_owned()));
    }
}

/// In-host environment with a scripted negotiation result.
#[derive(Debug)]
pub(crate) struct ScriptedHost {
    enclosure: Option<Enclosure>,
    delay: usize,
    negotiations: Cell<usize>,
}

impl ScriptedHost {
    pub(crate) fn with_enclosure(enclosure: Enclosure) -> Self {
        Self {
            enclosure: Some(enclosure),
            delay: 0,
            negotiations: Cell::new(0),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            enclosure: None,
            delay: 0,
            negotiations: Cell::new(0),
        }
    }

    pub(crate) fn with_delay(mut self, polls: usize) -> Self {
        self.delay = polls;
        self
    }

    pub(crate) fn negotiations(&self) -> usize {
        self.negotiations.get()
    }
}

impl HostFrame for ScriptedHost {
    fn in_client(&self) -> bool {
        true
    }

    async fn negotiate_enclosure(&self) -> Result<Enclosure, StageError> {
        self.negotiations.set(self.negotiations.get() + 1);
        yield_times(self.delay).await;
        self.enclosure.ok_or_else(|| {
            StageError::HostNegotiation("host went away".to_owned())
        })
    }
}

/// Surface provider that can be told to fail.
#[derive(Debug, Default)]
pub(crate) struct FakeSurface {
    fail: bool,
    acquisitions: Cell<usize>,
}

impl FakeSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn acquisitions(&self) -> usize {
        self.acquisitions.get()
    }
}

impl SurfaceProvider for FakeSurface {
    async fn acquire(&self) -> Result<RenderSurface, StageError> {
        self.acquisitions.set(self.acquisitions.get() + 1);
        if self.fail {
            return Err(StageError::SurfaceSetup("scripted".to_owned()));
        }
        PreviewSurface::new(PreviewOptions::default()).acquire().await
    }
}
