//! Declarative chart description and its builder.
//!
//! ARCHITECTURE
//! ============
//! The chart is data, not pixels: `figure` defines a serializable value in
//! the Plotly figure JSON shape (traces under `data`, shapes/annotations/
//! axes/sizing under `layout`) and `builder` assembles one from computed
//! fixture positions. The host page hands the serialized value to
//! `Plotly.newPlot` unchanged; the server never renders anything.

pub mod builder;
pub mod figure;

pub use builder::build_figure;
pub use figure::Figure;
