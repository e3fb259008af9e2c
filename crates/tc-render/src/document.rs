//! An owned SVG document builder.
//!
//! Draw calls push elements into an internal list; `render` is the only way
//! to get a finished document, called once after every draw call has
//! returned. This replaces a pattern of mutating a single shared document
//! object across several draw passes with one that can't observe a
//! partially-drawn document.

use std::fmt::Write as _;

#[derive(Clone, Debug)]
enum Element {
    Polyline { points: Vec<(f64, f64)>, stroke: String, stroke_width: f64 },
    Circle { cx: f64, cy: f64, r: f64, fill: String },
    Text {
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        font_size: u32,
        text: String,
        fill: String,
        stroke: Option<(String, f64)>,
    },
}

/// An accumulating SVG document. Nothing is rendered until [`Document::render`]
/// is called.
#[derive(Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_polyline(&mut self, points: Vec<(f64, f64)>, stroke: impl Into<String>, stroke_width: f64) {
        self.elements.push(Element::Polyline { points, stroke: stroke.into(), stroke_width });
    }

    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, fill: impl Into<String>) {
        self.elements.push(Element::Circle { cx, cy, r, fill: fill.into() });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_text(
        &mut self,
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        font_size: u32,
        text: impl Into<String>,
        fill: impl Into<String>,
        stroke: Option<(String, f64)>,
    ) {
        self.elements.push(Element::Text {
            x,
            y,
            dx,
            dy,
            font_size,
            text: text.into(),
            fill: fill.into(),
            stroke,
        });
    }

    /// Render the accumulated elements into a complete SVG document string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8" ?>"#);
        out.push('\n');
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#);
        out.push('\n');

        for el in &self.elements {
            match el {
                Element::Polyline { points, stroke, stroke_width } => {
                    out.push_str("  <polyline points=\"");
                    for (i, (x, y)) in points.iter().enumerate() {
                        if i > 0 {
                            out.push(' ');
                        }
                        let _ = write!(out, "{x},{y}");
                    }
                    let _ = write!(
                        out,
                        "\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n"
                    );
                }
                Element::Circle { cx, cy, r, fill } => {
                    let _ = write!(out, "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"/>\n");
                }
                Element::Text { x, y, dx, dy, font_size, text, fill, stroke } => {
                    let escaped = escape_xml(text);
                    if let Some((stroke_color, stroke_width)) = stroke {
                        let _ = write!(
                            out,
                            "  <text x=\"{x}\" y=\"{y}\" dx=\"{dx}\" dy=\"{dy}\" font-size=\"{font_size}\" fill=\"{stroke_color}\" stroke=\"{stroke_color}\" stroke-width=\"{stroke_width}\" stroke-linecap=\"round\" stroke-linejoin=\"round\">{escaped}</text>\n"
                        );
                    } else {
                        let _ = write!(
                            out,
                            "  <text x=\"{x}\" y=\"{y}\" dx=\"{dx}\" dy=\"{dy}\" font-size=\"{font_size}\" fill=\"{fill}\">{escaped}</text>\n"
                        );
                    }
                }
            }
        }

        out.push_str("</svg>");
        out
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_no_elements() {
        let doc = Document::new();
        let rendered = doc.render();
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("</svg>"));
        assert!(!rendered.contains("<circle"));
    }

    #[test]
    fn render_is_deterministic() {
        let mut doc = Document::new();
        doc.add_circle(1.0, 2.0, 3.0, "red");
        assert_eq!(doc.render(), doc.render());
    }
}
