//! Per-window-class rules applied when a window of that class is first managed.
//!
//! Actions are written as short strings in the configuration file:
//!
//! ```toml
//! [class_actions]
//! Firefox = ["maximize", "layer:6"]
//! xclock = ["stick", "nofocus"]
//! ```

pub mod errors;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clients::{ClientModel, Desktop, Layer, ScaleMode, WindowId};

pub use errors::ClassActionError;

/// Half of the monitor a snapped window occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl SnapSide {
    pub fn mode(&self) -> ScaleMode {
        match self {
            SnapSide::Left => ScaleMode::SplitLeft,
            SnapSide::Right => ScaleMode::SplitRight,
            SnapSide::Top => ScaleMode::SplitTop,
            SnapSide::Bottom => ScaleMode::SplitBottom,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SnapSide::Left => "left",
            SnapSide::Right => "right",
            SnapSide::Top => "top",
            SnapSide::Bottom => "bottom",
        }
    }
}

impl FromStr for SnapSide {
    type Err = ClassActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(SnapSide::Left),
            "right" => Ok(SnapSide::Right),
            "top" => Ok(SnapSide::Top),
            "bottom" => Ok(SnapSide::Bottom),
            other => Err(ClassActionError::UnknownSnapSide(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClassAction {
    Stick,
    Maximize,
    Snap(SnapSide),
    Layer(Layer),
    Iconify,
    /// Never give the window the focus automatically.
    NoAutofocus,
}

impl ClassAction {
    pub(crate) fn apply_to(&self, model: &mut ClientModel, window: WindowId) {
        match *self {
            ClassAction::Stick => {
                if model.get_desktop(window) != Some(Desktop::All) {
                    model.toggle_stick(window);
                }
            }
            ClassAction::Maximize => model.change_mode(window, ScaleMode::Maximized),
            ClassAction::Snap(side) => model.change_mode(window, side.mode()),
            ClassAction::Layer(layer) => model.set_layer(window, layer),
            ClassAction::Iconify => model.iconify(window),
            // Consumed when the window is added.
            ClassAction::NoAutofocus => {}
        }
    }
}

impl FromStr for ClassAction {
    type Err = ClassActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(side) = s.strip_prefix("snap:") {
            return Ok(ClassAction::Snap(side.parse()?));
        }
        if let Some(value) = s.strip_prefix("layer:") {
            return value
                .parse::<u8>()
                .ok()
                .and_then(Layer::new)
                .map(ClassAction::Layer)
                .ok_or_else(|| ClassActionError::InvalidLayer(s.to_string()));
        }
        match s {
            "stick" => Ok(ClassAction::Stick),
            "maximize" => Ok(ClassAction::Maximize),
            "iconify" => Ok(ClassAction::Iconify),
            "nofocus" => Ok(ClassAction::NoAutofocus),
            other => Err(ClassActionError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ClassAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassAction::Stick => write!(f, "stick"),
            ClassAction::Maximize => write!(f, "maximize"),
            ClassAction::Snap(side) => write!(f, "snap:{}", side.as_str()),
            ClassAction::Layer(layer) => write!(f, "layer:{}", layer.value()),
            ClassAction::Iconify => write!(f, "iconify"),
            ClassAction::NoAutofocus => write!(f, "nofocus"),
        }
    }
}

impl TryFrom<String> for ClassAction {
    type Error = ClassActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClassAction> for String {
    fn from(action: ClassAction) -> Self {
        action.to_string()
    }
}

/// The ordered actions configured for one window class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassActions(Vec<ClassAction>);

impl ClassActions {
    pub fn new(actions: Vec<ClassAction>) -> Self {
        ClassActions(actions)
    }

    /// The autofocus flag to pass to [`ClientModel::add_client`].
    pub fn autofocus(&self) -> bool {
        !self.0.contains(&ClassAction::NoAutofocus)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassAction> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses a comma or whitespace separated list such as `"stick, layer:7"`.
impl FromStr for ClassActions {
    type Err = ClassActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(ClassActions)
    }
}
