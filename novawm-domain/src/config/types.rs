use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::actions::ClassActions;
use crate::clients::ModelConfig;

use super::errors::WmConfigError;

mod defaults {
    pub(super) fn desktops() -> u32 {
        5
    }

    pub(super) fn border_width() -> u32 {
        4
    }

    pub(super) fn shell() -> String {
        "xterm".to_string()
    }
}

/// Window-manager settings read from `wm.toml`.
///
/// Every field is optional in the file; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WmConfig {
    #[serde(default = "defaults::desktops")]
    pub desktops: u32,
    #[serde(default = "defaults::border_width")]
    pub border_width: u32,
    /// Command launched by the "spawn terminal" binding.
    #[serde(default = "defaults::shell")]
    pub shell: String,
    /// Window class name to the actions applied when such a window appears.
    #[serde(default)]
    pub class_actions: BTreeMap<String, ClassActions>,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            desktops: defaults::desktops(),
            border_width: defaults::border_width(),
            shell: defaults::shell(),
            class_actions: BTreeMap::new(),
        }
    }
}

impl WmConfig {
    pub fn validate(&self) -> Result<(), WmConfigError> {
        if self.desktops < 1 {
            return Err(WmConfigError::invalid_data("desktops must be at least 1"));
        }
        if self.shell.trim().is_empty() {
            return Err(WmConfigError::invalid_data("shell must not be empty"));
        }
        Ok(())
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            max_desktops: self.desktops,
        }
    }

    /// Actions for a window class; windows of unlisted classes get none.
    pub fn actions_for(&self, class: &str) -> ClassActions {
        self.class_actions.get(class).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ClassAction;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_gives_defaults() {
        let config: WmConfig = toml::from_str("").unwrap();
        assert_eq!(config, WmConfig::default());
        assert_eq!(config.model_config(), ModelConfig { max_desktops: 5 });
    }

    #[test]
    fn parses_class_actions() {
        let toml_str = r#"
            desktops = 3
            shell = "alacritty"

            [class_actions]
            Firefox = ["maximize", "layer:6"]
            xclock = ["stick", "nofocus"]
        "#;
        let config: WmConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.desktops, 3);
        assert_eq!(config.border_width, 4);
        assert_eq!(config.shell, "alacritty");
        assert_eq!(
            config.actions_for("Firefox").iter().copied().collect::<Vec<_>>(),
            vec![ClassAction::Maximize, "layer:6".parse().unwrap()]
        );
        assert!(!config.actions_for("xclock").autofocus());
        assert!(config.actions_for("XTerm").is_empty());
    }

    #[test]
    fn rejects_unknown_keys_and_actions() {
        assert!(toml::from_str::<WmConfig>("workspaces = 4").is_err());
        assert!(toml::from_str::<WmConfig>("[class_actions]\nFoo = [\"fly\"]").is_err());
    }

    #[test]
    fn validation() {
        let zero = WmConfig { desktops: 0, ..WmConfig::default() };
        assert!(matches!(zero.validate(), Err(WmConfigError::InvalidData { .. })));
        let blank_shell = WmConfig { shell: "  ".to_string(), ..WmConfig::default() };
        assert!(blank_shell.validate().is_err());
        assert!(WmConfig::default().validate().is_ok());
    }
}
