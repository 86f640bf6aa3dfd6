//! Injector configuration: selectors, button labels and reset timing.
//!
//! Defaults reproduce the behaviour netclip pages were written against, so
//! `InjectorConfig::default()` is what `initialize` uses. Hosts that need
//! different markup or wording pass a JSON object to `initialize_with_config`.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Delay before a button returns to its idle label.
pub const DEFAULT_RESET_DELAY_MS: u32 = 1000;

/// Text shown on the button in each copy state
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub idle: String,
    pub copying: String,
    pub copied: String,
    pub failed: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            idle: "Copy".to_string(),
            copying: "Copying..".to_string(),
            copied: "Copied!".to_string(),
            failed: "Copy failed".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InjectorConfig {
    /// Selector for the element wrapping a code block (default: `.snippet`)
    #[serde(default = "default_container_selector")]
    pub container_selector: String,
    /// Selector for the code block inside a container (default: `pre`)
    #[serde(default = "default_code_selector")]
    pub code_selector: String,
    /// Class added to every injected button (default: `btn-copy`)
    #[serde(default = "default_button_class")]
    pub button_class: String,
    #[serde(default)]
    pub labels: Labels,
    /// Milliseconds between the copy outcome and the idle label
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u32,
    /// Rewrite each code block's displayed text to its own markup after injection
    #[serde(default = "default_true")]
    pub reveal_markup: bool,
}

fn default_container_selector() -> String {
    ".snippet".to_string()
}

fn default_code_selector() -> String {
    "pre".to_string()
}

fn default_button_class() -> String {
    "btn-copy".to_string()
}

fn default_reset_delay_ms() -> u32 {
    DEFAULT_RESET_DELAY_MS
}

fn default_true() -> bool {
    true
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            container_selector: default_container_selector(),
            code_selector: default_code_selector(),
            button_class: default_button_class(),
            labels: Labels::default(),
            reset_delay_ms: default_reset_delay_ms(),
            reveal_markup: true,
        }
    }
}

impl InjectorConfig {
    /// Parse a JSON object. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse injector config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.container_selector.trim().is_empty() {
            bail!("container_selector must not be empty");
        }
        if self.code_selector.trim().is_empty() {
            bail!("code_selector must not be empty");
        }
        if self.button_class.split_whitespace().count() != 1 {
            bail!("button_class must be a single class name, got {:?}", self.button_class);
        }
        Ok(())
    }

    /// Descendant selector matching code blocks inside containers, e.g. `.snippet pre`
    pub fn snippet_selector(&self) -> String {
        format!("{} {}", self.container_selector.trim(), self.code_selector.trim())
    }
}
