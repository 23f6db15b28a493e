//! Indicator configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::transitions::{Easing, TransitionConfig};
use crate::types::LayerStyle;

/// Key of the caller's scroll handler. The component wraps it, so it is never
/// taken from configuration and never forwarded to the scroll view.
pub const SCROLL_HANDLER_KEY: &str = "onScroll";

/// Options of a [`ScrollViewIndicator`](crate::ScrollViewIndicator).
///
/// Deserializes from the same camelCase keys the component accepts as props.
/// Keys it does not recognize are kept in `passthrough` and handed to the
/// scroll view verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorConfig {
    /// Fixed thumb height, and the starting height in flexible mode.
    pub indicator_height: f32,

    /// Derive the thumb height from the visible share of the content.
    pub flexible_indicator: bool,

    /// Fade the thumb out when scrolling settles and in when a drag starts.
    #[serde(rename = "shouldIndicatorHide")]
    pub auto_hide: bool,

    /// Duration of each fade. Configured as `hideTimeout` in milliseconds;
    /// despite the name it is not a delay before hiding.
    #[serde(rename = "hideTimeout", deserialize_with = "duration_from_millis")]
    pub fade_duration: Duration,

    #[serde(skip)]
    pub fade_easing: Easing,

    /// Outer container style.
    pub style: LayerStyle,

    pub scroll_view_style: LayerStyle,

    /// Style of the track container the thumb moves in.
    #[serde(rename = "scrollIndicatorContainerStyle")]
    pub track_style: LayerStyle,

    /// Style of the thumb.
    #[serde(rename = "scrollIndicatorStyle")]
    pub thumb_style: LayerStyle,

    #[serde(flatten)]
    pub passthrough: BTreeMap<String, Value>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            indicator_height: 200.0,
            flexible_indicator: true,
            auto_hide: true,
            fade_duration: Duration::from_millis(500),
            fade_easing: Easing::default(),
            style: LayerStyle::default(),
            scroll_view_style: LayerStyle::default(),
            track_style: LayerStyle::default(),
            thumb_style: LayerStyle::default(),
            passthrough: BTreeMap::new(),
        }
    }
}

impl IndicatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: IndicatorConfig = serde_json::from_str(json)?;
        if config.passthrough.contains_key(SCROLL_HANDLER_KEY) {
            return Err(ConfigError::ReservedKey(SCROLL_HANDLER_KEY.to_string()));
        }
        log::debug!(
            "[config] loaded indicator config ({} passthrough props)",
            config.passthrough.len()
        );
        Ok(config)
    }

    pub fn indicator_height(mut self, height: f32) -> Self {
        self.indicator_height = height;
        self
    }

    pub fn flexible_indicator(mut self, enabled: bool) -> Self {
        self.flexible_indicator = enabled;
        self
    }

    pub fn auto_hide(mut self, enabled: bool) -> Self {
        self.auto_hide = enabled;
        self
    }

    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    pub fn fade_easing(mut self, easing: Easing) -> Self {
        self.fade_easing = easing;
        self
    }

    pub fn style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn scroll_view_style(mut self, style: LayerStyle) -> Self {
        self.scroll_view_style = style;
        self
    }

    pub fn track_style(mut self, style: LayerStyle) -> Self {
        self.track_style = style;
        self
    }

    pub fn thumb_style(mut self, style: LayerStyle) -> Self {
        self.thumb_style = style;
        self
    }

    /// Add a prop that is forwarded to the scroll view unchanged.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.passthrough.insert(key.into(), value.into());
        self
    }

    pub fn fade(&self) -> TransitionConfig {
        TransitionConfig::new(self.fade_duration, self.fade_easing)
    }
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(millis.max(0.0) / 1000.0)
        .map_err(|e| serde::de::Error::custom(format!("hideTimeout {millis}: {e}")))
}

/// Errors that can occur when loading indicator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not a valid configuration object.
    #[error("Invalid indicator configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input set a key the component owns.
    #[error("'{0}' cannot be set from configuration")]
    ReservedKey(String),
}
