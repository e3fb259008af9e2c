//! Rendering configuration, passed through unchanged by every crate that
//! doesn't actually draw (`tc-catalog`, `tc-graph`, `tc-router` never see
//! these fields).

/// An `(x, y)` pixel offset, used for label positioning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// SVG color, stored verbatim as a CSS color string (`"red"`, `"rgb(1,2,3)"`,
/// `"rgba(1,2,3,0.5)"`) — matching how colors are represented in the JSON
/// render-settings document.
pub type Color = String;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Offset,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Offset,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}
