//! Figure description types.
//!
//! DESIGN
//! ======
//! Field names and nesting follow the Plotly figure JSON schema so the
//! serialized value renders without translation on the client. Only the
//! subset this planner emits is modeled; optional styling fields serialize
//! only when set.

use serde::Serialize;

// =============================================================================
// FIGURE
// =============================================================================

/// Complete chart description: the sole response artifact of `/calculate`.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

// =============================================================================
// TRACES
// =============================================================================

/// A scatter trace. The planner emits exactly one: the fixture markers.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub marker: Marker,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub size: u32,
    pub color: &'static str,
}

impl Trace {
    /// Marker-only scatter trace.
    #[must_use]
    pub fn markers(x: Vec<f64>, y: Vec<f64>, size: u32, color: &'static str, name: &'static str) -> Self {
        Self { kind: "scatter", x, y, mode: "markers", marker: Marker { size, color }, name }
    }
}

// =============================================================================
// SHAPES
// =============================================================================

/// Line style for shapes. `color` and `dash` are omitted from the JSON when
/// unset (outline rects carry no dash; zero-width borders carry no color).
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

/// A layout shape: reference line, shelf strip, or room outline.
#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: Line,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Shape {
    /// Line segment from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn line(x0: f64, y0: f64, x1: f64, y1: f64, line: Line) -> Self {
        Self { kind: "line", x0, y0, x1, y1, line, fillcolor: None, opacity: None }
    }

    /// Borderless filled rectangle.
    #[must_use]
    pub fn filled_rect(x0: f64, y0: f64, x1: f64, y1: f64, fill: &'static str, opacity: f64) -> Self {
        Self {
            kind: "rect",
            x0,
            y0,
            x1,
            y1,
            line: Line { color: None, width: 0.0, dash: None },
            fillcolor: Some(fill),
            opacity: Some(opacity),
        }
    }

    /// Unfilled outlined rectangle.
    #[must_use]
    pub fn outline_rect(x0: f64, y0: f64, x1: f64, y1: f64, color: &'static str, width: f64) -> Self {
        Self {
            kind: "rect",
            x0,
            y0,
            x1,
            y1,
            line: Line { color: Some(color), width, dash: None },
            fillcolor: None,
            opacity: None,
        }
    }
}

// =============================================================================
// ANNOTATIONS
// =============================================================================

/// Arrowed text label. `ax`/`ay` are the arrow tail offset in pixels;
/// anchors are set per axis direction by the builder.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
    pub arrowhead: u32,
    pub arrowsize: u32,
    pub arrowcolor: &'static str,
    pub ax: f64,
    pub ay: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<&'static str>,
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Axis configuration. Ranges are fixed: the client may not zoom or pan the
/// plot away from the room bounds, and spike (cross-hair) lines are always
/// on.
#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constrain: Option<&'static str>,
    pub fixedrange: bool,
    pub showspikes: bool,
    pub spikemode: &'static str,
    pub spikethickness: u32,
}

/// Modebar configuration: buttons stripped from the interaction surface.
#[derive(Debug, Clone, Serialize)]
pub struct ModeBar {
    pub remove: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
    pub width: f64,
    pub height: f64,
    pub plot_bgcolor: &'static str,
    pub dragmode: &'static str,
    pub hovermode: &'static str,
    pub spikedistance: i32,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
    pub modebar: ModeBar,
}

#[cfg(test)]
#[path = "figure_test.rs"]
mod tests;
