use serde::Deserialize;
use crate::error::FxError;

/// Selectors, class names and timings for every page behavior.
///
/// All fields are optional when deserializing; anything left out keeps the
/// stock value, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub theme: ThemeConfig,
    pub sidebar: SidebarConfig,
    pub reveal: RevealConfig,
    pub hover: HoverConfig,
    pub ripple: RippleConfig,
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// Attribute set on the root element while the dark theme is active.
    pub attribute: String,
    pub toggle_selector: String,
    pub transition_class: String,
    pub transition_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub sidebar_selector: String,
    pub overlay_selector: String,
    pub nav_link_selector: String,
    pub open_button_id: String,
    pub close_button_id: String,
    pub open_class: String,
    pub slide_class: String,
    pub show_class: String,
    /// Nav-link clicks close the sidebar only below this viewport width.
    pub breakpoint: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    /// The reveal line sits at `viewport_height / ratio`.
    pub ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub selector: String,
    pub hovered_class: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub selector: String,
    pub ripple_class: String,
    pub delay_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            sidebar: SidebarConfig::default(),
            reveal: RevealConfig::default(),
            hover: HoverConfig::default(),
            ripple: RippleConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_selector: ".theme-toggle".to_string(),
            transition_class: "theme-transition".to_string(),
            transition_ms: 300,
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_selector: ".sidebar".to_string(),
            overlay_selector: ".content-overlay".to_string(),
            nav_link_selector: ".sidebar .nav-link".to_string(),
            open_button_id: "sidebarOpen".to_string(),
            close_button_id: "sidebarClose".to_string(),
            open_class: "open".to_string(),
            slide_class: "slide-in".to_string(),
            show_class: "show".to_string(),
            breakpoint: 992.0,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".animate-on-scroll".to_string(),
            visible_class: "visible".to_string(),
            ratio: 1.3,
        }
    }
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            selector: ".card".to_string(),
            hovered_class: "hovered".to_string(),
        }
    }
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            selector: ".btn".to_string(),
            ripple_class: "ripple".to_string(),
            delay_ms: 600,
        }
    }
}

impl FxConfig {
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        let config: FxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FxError> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(FxError::Config("theme.storage_key must not be empty".to_string()));
        }
        if !(self.reveal.ratio.is_finite() && self.reveal.ratio > 0.0) {
            return Err(FxError::Config(format!("reveal.ratio must be positive, got {}", self.reveal.ratio)));
        }
        if !(self.sidebar.breakpoint.is_finite() && self.sidebar.breakpoint > 0.0) {
            return Err(FxError::Config(format!(
                "sidebar.breakpoint must be positive, got {}",
                self.sidebar.breakpoint
            )));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(FxError::Config(format!("unknown log level '{}'", self.log_level)));
        }
        Ok(())
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
