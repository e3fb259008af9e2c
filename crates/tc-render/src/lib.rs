//! `tc-render` — SVG map renderer.
//!
//! | Module       | Contents                                  |
//! |--------------|---------------------------------------------|
//! | [`settings`] | `RenderSettings`, `Offset`, `Color`       |
//! | [`projector`]| `SphereProjector`                          |
//! | [`document`] | `Document` (owned SVG builder)             |
//! | [`renderer`] | `render_map`                               |

pub mod document;
pub mod projector;
pub mod renderer;
pub mod settings;

pub use document::Document;
pub use projector::SphereProjector;
pub use renderer::render_map;
pub use settings::{Color, Offset, RenderSettings};
