//! Write-only UI side channel.
//!
//! The page around the viewer has a loading indicator and a menu with one
//! entry per representation and per known structure. The pipeline only ever
//! toggles visibility and sets text colors on those elements; it never reads
//! them back.

use crate::config::ViewerConfiguration;

/// Element id of the loading indicator.
pub const LOADING: &str = "loading";
/// Element id of the ball-model menu toggle.
pub const BALL_MENU: &str = "ball";
/// Element id of the ribbon-model menu toggle.
pub const RIBBON_MENU: &str = "ribbon";

/// Sink for element visibility and color hints, keyed by element id.
pub trait UiChannel {
    /// Show or hide an element.
    fn set_visible(&self, element: &str, visible: bool);
    /// Set an element's text color (CSS color string).
    fn set_color(&self, element: &str, color: &str);
}

/// UI channel that only logs, for running without a page.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogUi;

impl UiChannel for LogUi {
    fn set_visible(&self, element: &str, visible: bool) {
        log::debug!("ui: #{element} visible={visible}");
    }

    fn set_color(&self, element: &str, color: &str) {
        log::debug!("ui: #{element} color={color}");
    }
}

/// Color the menu entries for every enabled representation and for the
/// requested structure.
pub fn highlight_menu(
    ui: &dyn UiChannel,
    config: &ViewerConfiguration,
    color: &str,
) {
    if config.ribbon_enabled {
        ui.set_color(RIBBON_MENU, color);
    }
    if config.ball_enabled {
        ui.set_color(BALL_MENU, color);
    }
    if let Some(identity) = &config.identity {
        ui.set_color(identity.as_str(), color);
    }
}
