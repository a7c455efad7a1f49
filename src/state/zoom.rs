/// Font zoom for the editor's text buffer
///
/// Purely cosmetic: nothing here ever touches the document.

use std::ops::RangeInclusive;

/// Font size the editor starts with (points)
pub const DEFAULT_FONT_SIZE: u16 = 12;

/// How much one zoom step changes the font size
pub const ZOOM_STEP: u16 = 2;

/// Zooming out never goes below this
pub const MIN_FONT_SIZE: u16 = 6;

/// Zooming in never goes above this
pub const MAX_FONT_SIZE: u16 = 48;

/// Range offered by the font-size slider
pub const SLIDER_RANGE: RangeInclusive<u16> = 8..=MAX_FONT_SIZE;

/// Current zoom state of the text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomSettings {
    font_size: u16,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ZoomSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Value to show on the slider (the font may sit below the slider's minimum)
    pub fn slider_value(&self) -> u16 {
        self.font_size
            .clamp(*SLIDER_RANGE.start(), *SLIDER_RANGE.end())
    }

    /// Increase by one step, capped at `MAX_FONT_SIZE`
    pub fn zoom_in(&mut self) {
        self.font_size = (self.font_size + ZOOM_STEP).min(MAX_FONT_SIZE);
    }

    /// Decrease by one step, floored at `MIN_FONT_SIZE`
    pub fn zoom_out(&mut self) {
        self.font_size = self
            .font_size
            .saturating_sub(ZOOM_STEP)
            .max(MIN_FONT_SIZE);
    }

    /// Set an explicit size (from the slider)
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Back to the default size
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        assert_eq!(ZoomSettings::new().font_size(), 12);
    }

    #[test]
    fn test_zoom_in_and_out() {
        let mut zoom = ZoomSettings::default();
        zoom.zoom_in();
        assert_eq!(zoom.font_size(), 14);
        zoom.zoom_out();
        zoom.zoom_out();
        assert_eq!(zoom.font_size(), 10);
    }

    #[test]
    fn test_zoom_out_floor() {
        let mut zoom = ZoomSettings::default();
        for _ in 0..10 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.font_size(), MIN_FONT_SIZE);
        // Slider can't show 6, it pins to its own minimum
        assert_eq!(zoom.slider_value(), 8);
    }

    #[test]
    fn test_zoom_in_cap() {
        let mut zoom = ZoomSettings::default();
        for _ in 0..40 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.font_size(), MAX_FONT_SIZE);
    }

    #[test]
    fn test_set_font_size_clamps() {
        let mut zoom = ZoomSettings::default();
        zoom.set_font_size(30);
        assert_eq!(zoom.font_size(), 30);
        zoom.set_font_size(2);
        assert_eq!(zoom.font_size(), MIN_FONT_SIZE);
        zoom.set_font_size(500);
        assert_eq!(zoom.font_size(), MAX_FONT_SIZE);
    }

    #[test]
    fn test_reset() {
        let mut zoom = ZoomSettings::default();
        zoom.zoom_in();
        zoom.reset();
        assert_eq!(zoom, ZoomSettings::default());
    }
}
