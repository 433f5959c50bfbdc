use novawm_core::types::Rect;
use serde::{Deserialize, Serialize};

use crate::clients::types::{Desktop, Layer, ScaleMode, WindowId};

/// One state mutation performed by the client model, queued for the display
/// binding to turn into real windowing-system effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    LayerChanged {
        window: WindowId,
        layer: Layer,
    },
    FocusChanged {
        prev: Option<WindowId>,
        next: Option<WindowId>,
    },
    /// `prev` is `None` when the window has just started being managed.
    ClientDesktopChanged {
        window: WindowId,
        prev: Option<Desktop>,
        next: Desktop,
    },
    CurrentDesktopChanged {
        prev: Desktop,
        next: Desktop,
    },
    /// `new_box` is `None` when the window is now off every monitor.
    ScreenChanged {
        window: WindowId,
        new_box: Option<Rect>,
    },
    ModeChanged {
        window: WindowId,
        mode: ScaleMode,
    },
    LocationChanged {
        window: WindowId,
        x: i32,
        y: i32,
    },
    SizeChanged {
        window: WindowId,
        width: u32,
        height: u32,
    },
    Destroyed {
        window: WindowId,
        last_desktop: Desktop,
        last_layer: Layer,
    },
    Unmapped {
        window: WindowId,
    },
}

impl Change {
    /// The window a per-window change is about. `CurrentDesktopChanged` has
    /// none, and `FocusChanged` reports the newly focused window if any.
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Change::LayerChanged { window, .. }
            | Change::ClientDesktopChanged { window, .. }
            | Change::ScreenChanged { window, .. }
            | Change::ModeChanged { window, .. }
            | Change::LocationChanged { window, .. }
            | Change::SizeChanged { window, .. }
            | Change::Destroyed { window, .. }
            | Change::Unmapped { window } => Some(*window),
            Change::FocusChanged { next, .. } => *next,
            Change::CurrentDesktopChanged { .. } => None,
        }
    }
}
