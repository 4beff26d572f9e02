//! Theme palettes
//!
//! The engine only consumes the active theme; selection and persistence live
//! in the host. A palette resolves every color the painters need, plus which
//! field kinds are worth running at all under that theme.

use serde::{Deserialize, Serialize};
use vesper_core::{Color, VesperError};
use vesper_field::{FieldKind, StarTint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    /// Fandom skin: gold-on-crimson page chrome. Fields behave as in dark
    /// mode except the starfield, which stays off like in light mode.
    Fandom,
}

impl std::str::FromStr for Theme {
    type Err = VesperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "fandom" => Ok(Theme::Fandom),
            other => Err(VesperError::InvalidEnumValue {
                value: other.to_string(),
                allowed: vec!["dark".into(), "light".into(), "fandom".into()],
            }),
        }
    }
}

/// Resolved colors for one theme
#[derive(Debug, Clone)]
pub struct Palette {
    pub theme: Theme,
    /// Clear color behind star and mote fields
    pub base: Color,
    pub star_primary: Color,
    pub star_secondary: Color,
    pub mote_core: Color,
    pub mote_glow: Color,
    pub link: Color,
    pub flyer_body: Color,
    pub flyer_head: Color,
    pub flyer_beak: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                theme,
                base: Color::from_rgb8(12, 10, 24),
                star_primary: Color::WHITE,
                star_secondary: Color::from_rgb8(200, 180, 255),
                mote_core: Color::from_rgb8(147, 51, 234),
                mote_glow: Color::from_rgb8(168, 85, 247),
                link: Color::from_rgb8(139, 92, 246),
                flyer_body: Color::from_hex(0x2C3E50),
                flyer_head: Color::from_hex(0x34495E),
                flyer_beak: Color::from_hex(0xF39C12),
            },
            Theme::Light => Self {
                theme,
                base: Color::from_rgb8(214, 204, 228),
                star_primary: Color::WHITE,
                star_secondary: Color::from_rgb8(200, 180, 255),
                mote_core: Color::from_rgb8(147, 51, 234),
                mote_glow: Color::from_rgb8(168, 85, 247),
                link: Color::from_rgb8(139, 92, 246),
                // Body and head swap in light mode
                flyer_body: Color::from_hex(0x34495E),
                flyer_head: Color::from_hex(0x2C3E50),
                flyer_beak: Color::from_hex(0xF39C12),
            },
            // Same field colors as dark over the skin's earthy midtone
            Theme::Fandom => Self {
                theme,
                base: Color::from_hex(0x372E29),
                star_primary: Color::WHITE,
                star_secondary: Color::from_rgb8(200, 180, 255),
                mote_core: Color::from_rgb8(147, 51, 234),
                mote_glow: Color::from_rgb8(168, 85, 247),
                link: Color::from_rgb8(139, 92, 246),
                flyer_body: Color::from_hex(0x2C3E50),
                flyer_head: Color::from_hex(0x34495E),
                flyer_beak: Color::from_hex(0xF39C12),
            },
        }
    }

    /// Whether this theme runs the given field at all. The starfield only
    /// comes on in dark mode; light and fandom skip it entirely and the
    /// engine stays idle for it.
    pub fn field_enabled(&self, kind: FieldKind) -> bool {
        match (self.theme, kind) {
            (Theme::Light | Theme::Fandom, FieldKind::Stars) => false,
            _ => true,
        }
    }

    pub fn star_tint(&self, tint: StarTint) -> Color {
        match tint {
            StarTint::Primary => self.star_primary,
            StarTint::Secondary => self.star_secondary,
        }
    }

    /// Scene background for the flyer field as a function of its horizontal
    /// progress: a three-segment piecewise-linear day/night ramp.
    pub fn flyer_background(&self, progress: f32) -> Color {
        let p = progress.clamp(0.0, 1.0);
        let (from, to, t) = match self.theme {
            // Every non-light theme flies through the night ramp
            Theme::Dark | Theme::Fandom => {
                if p < 0.3 {
                    (
                        Color::from_rgb8(10, 15, 30),
                        Color::from_rgb8(30, 45, 90),
                        p / 0.3,
                    )
                } else if p < 0.7 {
                    (
                        Color::from_rgb8(30, 45, 90),
                        Color::from_rgb8(50, 80, 140),
                        (p - 0.3) / 0.4,
                    )
                } else {
                    (
                        Color::from_rgb8(50, 80, 140),
                        Color::from_rgb8(10, 15, 30),
                        (p - 0.7) / 0.3,
                    )
                }
            }
            Theme::Light => {
                if p < 0.3 {
                    (
                        Color::from_rgb8(100, 200, 150),
                        Color::from_rgb8(200, 220, 180),
                        p / 0.3,
                    )
                } else if p < 0.7 {
                    (
                        Color::from_rgb8(200, 220, 180),
                        Color::from_rgb8(180, 170, 230),
                        (p - 0.3) / 0.4,
                    )
                } else {
                    (
                        Color::from_rgb8(180, 170, 230),
                        Color::from_rgb8(240, 120, 180),
                        (p - 0.7) / 0.3,
                    )
                }
            }
        };
        Color::lerp(from, to, t)
    }
}
