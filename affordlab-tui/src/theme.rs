//! Night-navy theme tokens for the AffordLab TUI
//!
//! Provides a consistent color palette:
//! - Deep navy background with a slate chart surface
//! - One color per likelihood band (mint / amber / coral)
//! - Bright green for the deposit region hatch
//!
//! # Color Palette
//! - **Background**: Deep navy (base layer)
//! - **Surface**: Slate blue-grey (chart area fill)
//! - **High**: Mint green (high-likelihood band)
//! - **Moderate**: Soft amber (moderate-likelihood band)
//! - **Low**: Coral red (low-likelihood band)
//! - **Deposit**: Bright green (deposit hatch, sweet-spot accents)
//! - **Muted**: Mid grey (tooltips, secondary labels)

use ratatui::style::Color;

use affordlab_core::hover::SweetSpotRelation;
use affordlab_core::point::LikelihoodBand;

/// Night-navy theme for the AffordLab TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep navy background (primary surface)
    pub background: Color,
    /// Slate blue-grey (chart area fill below the curve)
    pub surface: Color,
    /// Mint green (high-likelihood band)
    pub high: Color,
    /// Soft amber (moderate-likelihood band)
    pub moderate: Color,
    /// Coral red (low-likelihood band)
    pub low: Color,
    /// Bright green (deposit hatch, sweet-spot highlights)
    pub deposit: Color,
    /// White (curve line, point markers)
    pub line: Color,
    /// Mid grey (tooltip text, de-emphasized labels)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::night_navy()
    }
}

impl Theme {
    /// Create the default night-navy theme
    pub fn night_navy() -> Self {
        Self {
            // Background: deep navy
            background: Color::Rgb(0, 9, 40),

            // Surface: slate blue-grey
            surface: Color::Rgb(59, 66, 88),

            // Likelihood bands: mint / amber / coral
            high: Color::Rgb(128, 254, 193),
            moderate: Color::Rgb(255, 196, 127),
            low: Color::Rgb(254, 128, 128),

            // Deposit: bright green
            deposit: Color::Rgb(1, 228, 118),

            // Curve line and markers
            line: Color::White,

            // Muted: mid grey
            muted: Color::Rgb(102, 102, 102),

            // Text colors
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Get color for a likelihood band
    pub fn band_color(&self, band: LikelihoodBand) -> Color {
        match band {
            LikelihoodBand::High => self.high,
            LikelihoodBand::Moderate => self.moderate,
            LikelihoodBand::Low => self.low,
        }
    }

    /// Get color for a point's position relative to the sweet spot
    pub fn relation_color(&self, relation: SweetSpotRelation) -> Color {
        match relation {
            SweetSpotRelation::Below => self.high,
            SweetSpotRelation::At => self.deposit,
            SweetSpotRelation::Above => self.low,
        }
    }
}
