//! JSON request document shapes, deserialized with `serde_json`.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use tc_render::{Color, Offset, RenderSettings};
use tc_router::RouterSettings;

#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: HashMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: u64, name: String },
    Stop { id: u64, name: String },
    Map { id: u64 },
    Route { id: u64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> u64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

#[derive(Deserialize, Debug, Copy, Clone)]
pub struct RoutingSettings {
    pub bus_wait_time: u32,
    pub bus_velocity: f64,
}

impl From<RoutingSettings> for RouterSettings {
    fn from(s: RoutingSettings) -> Self {
        RouterSettings { bus_velocity_km_h: s.bus_velocity, bus_wait_time_min: s.bus_wait_time }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SerializationSettings {
    pub file: PathBuf,
}

/// Either a CSS color name or an `[r, g, b]` / `[r, g, b, a]` array, matching
/// the two shapes the render-settings document allows.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum ColorJson {
    Named(String),
    Rgb([u8; 3]),
    Rgba(u8, u8, u8, f64),
}

impl ColorJson {
    fn into_color(self) -> Color {
        match self {
            ColorJson::Named(s) => s,
            ColorJson::Rgb([r, g, b]) => format!("rgb({r},{g},{b})"),
            ColorJson::Rgba(r, g, b, a) => format!("rgba({r},{g},{b},{a})"),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RenderSettingsDoc {
    width: f64,
    height: f64,
    padding: f64,
    line_width: f64,
    stop_radius: f64,
    bus_label_font_size: u32,
    bus_label_offset: (f64, f64),
    stop_label_font_size: u32,
    stop_label_offset: (f64, f64),
    underlayer_color: ColorJson,
    underlayer_width: f64,
    color_palette: Vec<ColorJson>,
}

impl From<RenderSettingsDoc> for RenderSettings {
    fn from(d: RenderSettingsDoc) -> Self {
        RenderSettings {
            width: d.width,
            height: d.height,
            padding: d.padding,
            line_width: d.line_width,
            stop_radius: d.stop_radius,
            bus_label_font_size: d.bus_label_font_size,
            bus_label_offset: Offset { x: d.bus_label_offset.0, y: d.bus_label_offset.1 },
            stop_label_font_size: d.stop_label_font_size,
            stop_label_offset: Offset { x: d.stop_label_offset.0, y: d.stop_label_offset.1 },
            underlayer_color: d.underlayer_color.into_color(),
            underlayer_width: d.underlayer_width,
            color_palette: d.color_palette.into_iter().map(ColorJson::into_color).collect(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct MakeBaseDocument {
    pub base_requests: Vec<BaseRequest>,
    pub render_settings: RenderSettingsDoc,
    pub routing_settings: RoutingSettings,
    pub serialization_settings: SerializationSettings,
}

#[derive(Deserialize, Debug)]
pub struct ProcessRequestsDocument {
    pub serialization_settings: SerializationSettings,
    pub stat_requests: Vec<StatRequest>,
}
