//! Repeating render task.
//!
//! The loop is scheduled independently of the composition pipeline: on every
//! tick it reads the shared scene as it currently is and hands it to a
//! [`FrameSink`]. It never changes the scene beyond marking the current
//! generation as rendered.

use std::task::Poll;

use web_time::{Duration, Instant};

use crate::options::RenderOptions;
use crate::scene::{Scene, SharedScene};

/// Per-frame information passed to the sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Zero-based index of this frame.
    pub index: u64,
    /// Smoothed frames per second.
    pub fps: f32,
    /// Whether the scene changed since the previous frame.
    pub dirty: bool,
}

/// The external renderer.
pub trait FrameSink {
    /// Draw `scene`.
    fn render(&mut self, scene: &Scene, frame: &FrameInfo);
}

/// Frame timing with FPS calculation and optional frame limiting
#[derive(Debug)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.target_fps == 0
            || self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + frame_time.recip() * self.smoothing;
        }
    }

    /// The current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

/// Reads the shared scene once per tick and forwards it to a sink.
#[derive(Debug)]
pub struct RenderLoop {
    scene: SharedScene,
    timing: FrameTiming,
    frames: u64,
}

impl RenderLoop {
    /// Loop over `scene`, paced by `options`.
    #[must_use]
    pub fn new(scene: SharedScene, options: &RenderOptions) -> Self {
        Self {
            scene,
            timing: FrameTiming::new(options.target_fps),
            frames: 0,
        }
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Smoothed frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Render one frame if the frame cap allows it. Returns whether a frame
    /// was rendered.
    pub fn tick(&mut self, sink: &mut impl FrameSink) -> bool {
        if !self.timing.should_render() {
            return false;
        }
        self.render_frame(sink);
        true
    }

    /// Render one frame now, regardless of the frame cap.
    pub fn render_frame(&mut self, sink: &mut impl FrameSink) {
        {
            let scene = self.scene.borrow();
            let frame = FrameInfo {
                index: self.frames,
                fps: self.timing.fps(),
                dirty: scene.is_dirty(),
            };
            sink.render(&scene, &frame);
        }
        self.scene.borrow_mut().mark_rendered();
        self.timing.end_frame();
        self.frames += 1;
    }

    /// Tick `ticks` times, yielding to other tasks on the same executor
    /// between ticks.
    pub async fn run_ticks(&mut self, sink: &mut impl FrameSink, ticks: usize) {
        for _ in 0..ticks {
            let _ = self.tick(sink);
            let mut yielded = false;
            futures::future::poll_fn(|cx| {
                if yielded {
                    Poll::Ready(())
                } else {
                    yielded = true;
                    cx.waker().wake_by_ref();
                    Poll::Pending
                }
            })
            .await;
        }
    }
}
