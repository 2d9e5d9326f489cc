//! Figure assembly: fixture positions + room geometry → chart description.

use crate::grid::{PositionSet, RoomGeometry, ShelfMargins};

use super::figure::{Annotation, Axis, Figure, Layout, Line, ModeBar, Shape, Trace};

// Styling constants (Plotly units).
const MARKER_SIZE: u32 = 10;
const MARKER_COLOR: &str = "blue";
const GRID_LINE_COLOR: &str = "grey";
const GRID_LINE_DASH: &str = "dash";
const SHELF_FILL: &str = "grey";
const SHELF_OPACITY: f64 = 0.5;
const OUTLINE_COLOR: &str = "black";
const OUTLINE_WIDTH: f64 = 2.0;
const ARROW_OFFSET_PX: f64 = 30.0;
// Distance labels sit 10% of the cross dimension inside the room.
const LABEL_INSET_FRAC: f64 = 0.1;
const MAX_WIDTH: f64 = 1000.0;
const MAX_HEIGHT: f64 = 1000.0;

/// Build the full chart description for a computed fixture grid.
///
/// Accepts whatever it is given: empty position sets render as a bare room,
/// and nonsensical geometry renders nonsensically. No validation happens at
/// this layer.
#[must_use]
pub fn build_figure(positions: &PositionSet, room: RoomGeometry, shelves: ShelfMargins) -> Figure {
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();

    // Fixture markers: full cross-product of column and row coordinates.
    let mut mesh_x = Vec::with_capacity(positions.x.len() * positions.y.len());
    let mut mesh_y = Vec::with_capacity(positions.x.len() * positions.y.len());
    for &y in &positions.y {
        for &x in &positions.x {
            mesh_x.push(x);
            mesh_y.push(y);
        }
    }
    let downlights = Trace::markers(mesh_x, mesh_y, MARKER_SIZE, MARKER_COLOR, "Downlights");

    // Dashed reference lines through every fixture row and column.
    let grid_line = || Line { color: Some(GRID_LINE_COLOR), width: 1.0, dash: Some(GRID_LINE_DASH) };
    for &x in &positions.x {
        shapes.push(Shape::line(x, 0.0, x, room.length, grid_line()));
    }
    for &y in &positions.y {
        shapes.push(Shape::line(0.0, y, room.width, y, grid_line()));
    }

    // Shelf strips. A side with zero depth gets no shape at all rather than
    // a degenerate rectangle.
    if shelves.north > 0.0 {
        shapes.push(shelf_rect(0.0, room.length - shelves.north, room.width, room.length));
    }
    if shelves.south > 0.0 {
        shapes.push(shelf_rect(0.0, 0.0, room.width, shelves.south));
    }
    if shelves.east > 0.0 {
        shapes.push(shelf_rect(room.width - shelves.east, 0.0, room.width, room.length));
    }
    if shelves.west > 0.0 {
        shapes.push(shelf_rect(0.0, 0.0, shelves.west, room.length));
    }

    // Room outline on top of the strips.
    shapes.push(Shape::outline_rect(0.0, 0.0, room.width, room.length, OUTLINE_COLOR, OUTLINE_WIDTH));

    // Column distances: first label measures from the west shelf edge, the
    // rest measure the gap to the previous column and sit at the midpoint.
    let label_y = shelves.south + room.length * LABEL_INSET_FRAC;
    for (i, &x) in positions.x.iter().enumerate() {
        let (anchor_x, value, color) = if i == 0 {
            (x, x - shelves.west, "red")
        } else {
            let prev = positions.x[i - 1];
            ((x + prev) / 2.0, x - prev, "blue")
        };
        annotations.push(Annotation {
            x: anchor_x,
            y: label_y,
            text: format!("{value:.2}"),
            showarrow: true,
            arrowhead: 2,
            arrowsize: 1,
            arrowcolor: color,
            ax: 0.0,
            ay: -ARROW_OFFSET_PX,
            xanchor: Some("center"),
            yanchor: None,
        });
    }

    // Row distances, same rule against the south shelf edge.
    let label_x = shelves.west + room.width * LABEL_INSET_FRAC;
    for (j, &y) in positions.y.iter().enumerate() {
        let (anchor_y, value, color) = if j == 0 {
            (y, y - shelves.south, "green")
        } else {
            let prev = positions.y[j - 1];
            ((y + prev) / 2.0, y - prev, "purple")
        };
        annotations.push(Annotation {
            x: label_x,
            y: anchor_y,
            text: format!("{value:.2}"),
            showarrow: true,
            arrowhead: 2,
            arrowsize: 1,
            arrowcolor: color,
            ax: -ARROW_OFFSET_PX,
            ay: 0.0,
            xanchor: None,
            yanchor: Some("middle"),
        });
    }

    let (width, height) = fit_display(room);

    Figure {
        data: vec![downlights],
        layout: Layout {
            title: "Downlight Positions",
            xaxis: Axis {
                range: [0.0, room.width],
                title: "Width (m)",
                constrain: Some("domain"),
                fixedrange: true,
                showspikes: true,
                spikemode: "across",
                spikethickness: 1,
            },
            yaxis: Axis {
                range: [0.0, room.length],
                title: "Length (m)",
                constrain: None,
                fixedrange: true,
                showspikes: true,
                spikemode: "across",
                spikethickness: 1,
            },
            showlegend: false,
            width,
            height,
            plot_bgcolor: "white",
            dragmode: "pan",
            hovermode: "closest",
            spikedistance: -1,
            shapes,
            annotations,
            modebar: ModeBar {
                remove: vec!["toggleSpikelines", "hoverClosestCartesian", "select2d", "lasso2d"],
            },
        },
    }
}

fn shelf_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
    Shape::filled_rect(x0, y0, x1, y1, SHELF_FILL, SHELF_OPACITY)
}

/// Fit the room's aspect ratio into the maximum display box, shrinking the
/// short dimension so the plot never distorts the floor plan.
fn fit_display(room: RoomGeometry) -> (f64, f64) {
    let aspect_ratio = room.length / room.width;
    if aspect_ratio > 1.0 {
        (MAX_WIDTH / aspect_ratio, MAX_HEIGHT)
    } else {
        (MAX_WIDTH, MAX_HEIGHT * aspect_ratio)
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
