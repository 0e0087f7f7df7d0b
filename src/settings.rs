use anyhow::Context;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Sizes and animation parameters shared by every menu in the app.
///
/// Provide one with `use_context_provider` near the root of the app to
/// override the defaults; components fall back to [`MenuSettings::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuSettings {
    /// Width of menu and submenu panels, in pixels.
    pub content_width: u32,
    /// Horizontal gap between a submenu trigger and its panel, in pixels.
    pub submenu_offset: u32,
    pub animation: AnimationSettings,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            content_width: 170,
            submenu_offset: 8,
            animation: AnimationSettings::default(),
        }
    }
}

impl MenuSettings {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid menu settings")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationSettings {
    /// When false, panels mount and unmount without animating.
    pub enabled: bool,
    /// Scale a panel starts from when opening and shrinks to when closing.
    pub initial_scale: f64,
    pub content: Spring,
    pub submenu: Spring,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            initial_scale: 0.7,
            content: Spring {
                stiffness: 1400.0,
                damping: 100.0,
            },
            submenu: Spring {
                stiffness: 1500.0,
                damping: 90.0,
            },
        }
    }
}

/// A unit-mass damped spring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
}

impl Spring {
    /// Approximate time for the spring to settle within 2% of its target,
    /// used as the CSS animation duration.
    pub fn settle_ms(&self) -> u32 {
        if self.stiffness <= 0.0 || self.damping <= 0.0 {
            return 0;
        }
        let omega = self.stiffness.sqrt();
        let zeta = self.damping / (2.0 * omega);
        // decay rate of the slowest pole
        let rate = if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        (4.0 / rate * 1000.0).round() as u32
    }
}

/// Settings from context, or the defaults.
pub fn use_menu_settings() -> MenuSettings {
    try_use_context::<MenuSettings>().unwrap_or_default()
}
