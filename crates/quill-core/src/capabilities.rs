//! Optional platform features, queried once at startup.
//!
//! Commands backed by a missing feature stay visible in the menus but are
//! disabled.

use serde::{Deserialize, Serialize};

use crate::config::FeatureConfig;

/// How a feature's availability is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureToggle {
    /// Probe the platform
    #[default]
    Auto,
    /// Always enabled
    On,
    /// Always disabled
    Off,
}

impl FeatureToggle {
    /// Resolves the toggle, running `probe` only in `Auto` mode.
    pub fn resolve(self, probe: impl FnOnce() -> bool) -> bool {
        match self {
            FeatureToggle::Auto => probe(),
            FeatureToggle::On => true,
            FeatureToggle::Off => false,
        }
    }
}

/// Features available in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub printing: bool,
    pub clipboard: bool,
}

impl Capabilities {
    /// Everything available.
    pub fn all() -> Self {
        Self {
            printing: true,
            clipboard: true,
        }
    }

    /// Nothing optional available.
    pub fn none() -> Self {
        Self {
            printing: false,
            clipboard: false,
        }
    }

    /// Combines the config toggles with platform probes.
    pub fn detect(
        features: &FeatureConfig,
        printer_found: bool,
        clipboard_probe: impl FnOnce() -> bool,
    ) -> Self {
        let caps = Self {
            printing: features.printing.resolve(|| printer_found),
            clipboard: features.clipboard.resolve(clipboard_probe),
        };
        tracing::info!(
            "Capabilities: printing={} clipboard={}",
            caps.printing,
            caps.clipboard
        );
        caps
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}
