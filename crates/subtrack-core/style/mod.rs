//! Style definitions and the registry that resolves them by name.
//!
//! Styles describe how an event's text is presented: font selection,
//! colors, outline and shadow geometry, alignment, and placement margins.
//! Events reference styles by name; resolution goes through
//! [`StyleRegistry`] and falls back to the registry's default style for
//! unknown names, so rendering paths never deal with a missing style.

mod registry;

pub use registry::StyleRegistry;

use crate::track::Margins;

/// Style name events carry by default and the rebind target for unknown
/// names.
pub const DEFAULT_STYLE: &str = "Default";

/// How the region behind the glyph outline is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    /// Glyph outline plus drop shadow.
    #[default]
    Outline,
    /// Filled box behind the whole line.
    OpaqueBox,
}

/// Coordinate space the margins and alignment refer to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelativeTo {
    /// Position against the window.
    Window,
    /// Position against the video frame inside the window.
    VideoFrame,
    /// Left to the host to decide; kept when the source does not say.
    #[default]
    Unspecified,
}

/// Presentation parameters for rendering an event's text.
///
/// The field set follows the usual subtitle style model: font selection,
/// four render colors, outline and shadow geometry, alignment, margins,
/// and per-style transforms. Colors are straight RGBA.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font family name.
    pub font_name: String,
    /// Font size in script pixels.
    pub font_size: f64,
    /// Weight on the 100-900 scale; 400 regular, 700 bold.
    pub font_weight: u32,
    /// Italic flag.
    pub italic: bool,
    /// Underline flag.
    pub underline: bool,
    /// Strike-out flag.
    pub strike_out: bool,
    /// Horizontal glyph scale in percent.
    pub font_scale_x: f64,
    /// Vertical glyph scale in percent.
    pub font_scale_y: f64,
    /// Extra spacing between glyphs in pixels.
    pub font_spacing: f64,
    /// Font charset/encoding identifier.
    pub encoding: u8,
    /// Fill color.
    pub primary_color: [u8; 4],
    /// Collision and karaoke alternate fill.
    pub secondary_color: [u8; 4],
    /// Outline (or opaque box) color.
    pub outline_color: [u8; 4],
    /// Shadow color.
    pub shadow_color: [u8; 4],
    /// How the outline region is drawn.
    pub border_style: BorderStyle,
    /// Outline thickness, horizontal.
    pub outline_width_x: f64,
    /// Outline thickness, vertical.
    pub outline_width_y: f64,
    /// Shadow offset, horizontal.
    pub shadow_depth_x: f64,
    /// Shadow offset, vertical.
    pub shadow_depth_y: f64,
    /// Number of box blur passes over the glyph edges.
    pub blur: u32,
    /// Gaussian blur radius, zero to disable.
    pub gaussian_blur: f64,
    /// Numpad-layout alignment code, 1-9.
    pub alignment: u8,
    /// Default placement margins.
    pub margins: Margins,
    /// Z-axis rotation in degrees.
    pub angle_z: f64,
    /// X-axis rotation in degrees.
    pub angle_x: f64,
    /// Y-axis rotation in degrees.
    pub angle_y: f64,
    /// Horizontal shear factor.
    pub shift_x: f64,
    /// Vertical shear factor.
    pub shift_y: f64,
    /// Coordinate space for margins and alignment.
    pub relative_to: RelativeTo,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_name: String::from("Arial"),
            font_size: 18.0,
            font_weight: 700,
            italic: false,
            underline: false,
            strike_out: false,
            font_scale_x: 100.0,
            font_scale_y: 100.0,
            font_spacing: 0.0,
            encoding: 1,
            primary_color: [255, 255, 255, 255],
            secondary_color: [255, 255, 0, 255],
            outline_color: [0, 0, 0, 255],
            shadow_color: [0, 0, 0, 128],
            border_style: BorderStyle::Outline,
            outline_width_x: 2.0,
            outline_width_y: 2.0,
            shadow_depth_x: 3.0,
            shadow_depth_y: 3.0,
            blur: 0,
            gaussian_blur: 0.0,
            alignment: 2,
            margins: Margins::uniform(20),
            angle_z: 0.0,
            angle_x: 0.0,
            angle_y: 0.0,
            shift_x: 0.0,
            shift_y: 0.0,
            relative_to: RelativeTo::Unspecified,
        }
    }
}

impl Style {
    /// Compares only the fields that affect font face selection and glyph
    /// shaping.
    ///
    /// Colors, geometry, margins, and alignment are ignored, so two
    /// styles that differ only in presentation can share shaped glyph
    /// runs.
    #[must_use]
    pub fn font_eq(&self, other: &Self) -> bool {
        self.font_name == other.font_name
            && self.font_size == other.font_size
            && self.font_weight == other.font_weight
            && self.italic == other.italic
            && self.underline == other.underline
            && self.strike_out == other.strike_out
            && self.font_scale_x == other.font_scale_x
            && self.font_scale_y == other.font_scale_y
            && self.font_spacing == other.font_spacing
            && self.encoding == other.encoding
    }
}
