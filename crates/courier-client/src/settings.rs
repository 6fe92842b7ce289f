//! Cross-cutting display settings: accent theme and font scale.
//!
//! Held once in [`crate::AppState`] and read by every screen, so a change
//! is visible everywhere without navigation. Out-of-range writes are
//! rejected, never clamped: an accepted value is always exactly what the
//! user asked for.

use serde::{Deserialize, Serialize};

use courier_shared::constants::{
    DEFAULT_FONT_SIZE_PX, FONT_SIZE_MAX_PX, FONT_SIZE_MIN_PX, THEME_GRADIENTS, ThemeGradient,
};
use courier_shared::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    theme_index: usize,
    font_size_px: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme_index: 0,
            font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

impl DisplaySettings {
    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn font_size_px(&self) -> u8 {
        self.font_size_px
    }

    /// The palette entry the active theme index points at.
    pub fn gradient(&self) -> &'static ThemeGradient {
        &THEME_GRADIENTS[self.theme_index]
    }

    /// Select an accent theme. Indices outside the fixed palette are
    /// rejected and the previous theme stays active.
    pub fn set_theme(&mut self, index: usize) -> Result<(), ValidationError> {
        if index >= THEME_GRADIENTS.len() {
            return Err(ValidationError::ThemeOutOfRange {
                index,
                palette_len: THEME_GRADIENTS.len(),
            });
        }
        self.theme_index = index;
        Ok(())
    }

    /// Set the interface font size. Values outside the supported range
    /// are rejected and the previous size stays active.
    pub fn set_font_size(&mut self, px: u8) -> Result<(), ValidationError> {
        if !(FONT_SIZE_MIN_PX..=FONT_SIZE_MAX_PX).contains(&px) {
            return Err(ValidationError::FontSizeOutOfRange(px));
        }
        self.font_size_px = px;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.theme_index(), 0);
        assert_eq!(settings.font_size_px(), 16);
        assert_eq!(settings.gradient().name, THEME_GRADIENTS[0].name);
    }

    #[test]
    fn theme_outside_palette_is_rejected() {
        let mut settings = DisplaySettings::default();
        settings.set_theme(3).unwrap();
        let err = settings.set_theme(4).unwrap_err();
        assert!(matches!(err, ValidationError::ThemeOutOfRange { index: 4, .. }));
        assert_eq!(settings.theme_index(), 3);
    }

    #[test]
    fn font_size_bounds_are_inclusive() {
        let mut settings = DisplaySettings::default();
        settings.set_font_size(12).unwrap();
        settings.set_font_size(20).unwrap();
        assert_eq!(
            settings.set_font_size(11).unwrap_err(),
            ValidationError::FontSizeOutOfRange(11)
        );
        assert_eq!(
            settings.set_font_size(21).unwrap_err(),
            ValidationError::FontSizeOutOfRange(21)
        );
        // Last accepted value survives the rejections.
        assert_eq!(settings.font_size_px(), 20);
    }
}
