use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Selector for a single RGB channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// An RGB triple with clamping mutation and CSS string rendering.
///
/// Channels always hold valid values in [0, 255]; `set` clamps rather than
/// rejects out-of-range input. Defaults to black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All three channels as an ordered (red, green, blue) triple.
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Channel values in selector order.
    ///
    /// Accepts 1 to 3 selectors; an empty or over-long list is rejected. For a
    /// single channel prefer [`Color::channel`], which returns the value
    /// directly.
    pub fn select(&self, channels: &[Channel]) -> Result<Vec<u8>, EngineError> {
        if channels.is_empty() || channels.len() > 3 {
            return Err(EngineError::InvalidArgument(format!(
                "expected 1 to 3 channel selectors, got {}",
                channels.len()
            )));
        }
        Ok(channels.iter().map(|c| self.channel(*c)).collect())
    }

    /// Replaces all three channels at once.
    ///
    /// Each value is clamped into [0, 255]; out-of-range input is never an
    /// error.
    pub fn set(&mut self, rgb: [i32; 3]) {
        self.r = clamp_channel(rgb[0]);
        self.g = clamp_channel(rgb[1]);
        self.b = clamp_channel(rgb[2]);
    }

    /// Renders the color as a CSS `rgb(r,g,b)` string.
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Renders the color as a CSS `rgba(r,g,b,opacity)` string.
    ///
    /// The opacity is interpolated verbatim; callers own keeping it in a
    /// range their renderer accepts.
    pub fn to_css_alpha(&self, opacity: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, opacity)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_round_trips_valid_triples() {
        let mut color = Color::default();
        color.set([10, 20, 30]);
        assert_eq!(color.rgb(), [10, 20, 30]);
    }

    #[test]
    fn test_set_clamps_out_of_range_values() {
        let mut color = Color::default();
        color.set([300, -5, 128]);
        assert_eq!(color.rgb(), [255, 0, 128]);
    }

    #[test]
    fn test_select_returns_values_in_selector_order() {
        let color = Color::new(1, 2, 3);
        let values = color.select(&[Channel::Blue, Channel::Red]).unwrap();
        assert_eq!(values, vec![3, 1]);
        assert_eq!(color.channel(Channel::Green), 2);
    }

    #[test]
    fn test_select_rejects_empty_selector() {
        let color = Color::new(1, 2, 3);
        assert!(matches!(
            color.select(&[]),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_select_rejects_over_long_selector() {
        let color = Color::new(1, 2, 3);
        let selectors = [Channel::Red, Channel::Red, Channel::Red, Channel::Red];
        assert!(matches!(
            color.select(&selectors),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_css_rendering() {
        let color = Color::new(10, 20, 30);
        assert_eq!(color.to_css(), "rgb(10,20,30)");
        assert_eq!(color.to_css_alpha(0.5), "rgba(10,20,30,0.5)");
    }

    #[test]
    fn test_css_opacity_is_verbatim() {
        let color = Color::new(0, 0, 0);
        assert_eq!(color.to_css_alpha(2.0), "rgba(0,0,0,2)");
    }
}
