use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a managed top-level window. The model only compares
/// and hashes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<u64> for WindowId {
    fn from(raw: u64) -> Self {
        WindowId(raw)
    }
}

/// The exclusive bucket a window currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Desktop {
    /// A numbered virtual desktop, `0..max_desktops`.
    User(u32),
    /// Stuck windows, visible on every user desktop.
    All,
    /// Iconified windows.
    Icon,
    /// The single window being dragged.
    Moving,
    /// The single window being resized.
    Resizing,
}

impl Desktop {
    pub fn is_user(&self) -> bool {
        matches!(self, Desktop::User(_))
    }

    pub fn user_index(&self) -> Option<u32> {
        match self {
            Desktop::User(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for Desktop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Desktop::User(index) => write!(f, "desktop {}", index),
            Desktop::All => write!(f, "all desktops"),
            Desktop::Icon => write!(f, "icons"),
            Desktop::Moving => write!(f, "moving"),
            Desktop::Resizing => write!(f, "resizing"),
        }
    }
}

/// Stacking layer; among visible windows, higher layers are drawn above lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Layer(u8);

pub const MIN_LAYER: Layer = Layer(1);
pub const MAX_LAYER: Layer = Layer(9);
pub const DEF_LAYER: Layer = Layer(5);

impl Layer {
    /// Returns `None` outside `[MIN_LAYER, MAX_LAYER]`.
    pub fn new(value: u8) -> Option<Self> {
        if (MIN_LAYER.0..=MAX_LAYER.0).contains(&value) {
            Some(Layer(value))
        } else {
            None
        }
    }

    /// Clamps any value into `[MIN_LAYER, MAX_LAYER]`.
    pub fn clamped(value: i32) -> Self {
        Layer(value.clamp(MIN_LAYER.0 as i32, MAX_LAYER.0 as i32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Every valid layer, lowest first.
    pub fn all() -> impl Iterator<Item = Layer> {
        (MIN_LAYER.0..=MAX_LAYER.0).map(Layer)
    }
}

impl Default for Layer {
    fn default() -> Self {
        DEF_LAYER
    }
}

impl TryFrom<u8> for Layer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Layer::new(value).ok_or_else(|| {
            format!("layer {} is outside {}..={}", value, MIN_LAYER.0, MAX_LAYER.0)
        })
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.0
    }
}

/// How a window is positioned and scaled on its monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleMode {
    #[default]
    Floating,
    SplitLeft,
    SplitRight,
    SplitTop,
    SplitBottom,
    Maximized,
}

/// Where a newly managed window starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialState {
    /// On the current user desktop.
    #[default]
    Visible,
    /// Iconified.
    Iconified,
}

/// Plain configuration values the model is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfig {
    /// Number of user desktops; values below 1 are treated as 1.
    pub max_desktops: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { max_desktops: 5 }
    }
}
