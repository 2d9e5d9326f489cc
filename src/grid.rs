//! Downlight position calculator.
//!
//! DESIGN
//! ======
//! Pure geometry, no validation. The caller hands in final row/column counts
//! (any form-level adjustment happens at the route boundary) and gets back
//! two ordered coordinate sequences. Oversized shelves produce inverted or
//! negative ranges and those flow through un-clamped; rejecting them here
//! would change observable behavior the front end relies on.

// =============================================================================
// TYPES
// =============================================================================

/// Rectangular room extents, in meters. `length` runs along the y axis,
/// `width` along the x axis.
#[derive(Debug, Clone, Copy)]
pub struct RoomGeometry {
    pub length: f64,
    pub width: f64,
}

/// Excluded border depth per side. North/south shrink the usable length,
/// east/west the usable width. All non-negative in sane input, but nothing
/// here enforces that.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShelfMargins {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Final fixture counts per axis. These are the counts the calculator uses
/// directly; they are NOT the raw form values (see `routes::calculate`).
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

/// Optional fixed edge offsets. Zero means "distribute evenly, outer gaps
/// included"; positive means "pin the first and last position exactly this
/// far inside the shelf edges and spread the rest evenly between".
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomDistances {
    pub top_bottom: f64,
    pub left_right: f64,
}

/// Computed fixture coordinates: `x` columns along the width, `y` rows along
/// the length. Either sequence may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

// =============================================================================
// CALCULATION
// =============================================================================

/// `n` evenly spaced values from `start` to `stop`, both endpoints included.
///
/// `n == 1` yields `[start]` and `n == 0` yields nothing. `stop < start` is
/// allowed and produces a descending sequence.
#[allow(clippy::cast_precision_loss)]
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Spacing rule for one axis: `extent` is the room dimension along it,
/// `near`/`far` the shelf depths at its low and high ends.
///
/// With a positive custom offset the first and last fixture sit exactly
/// `custom` inside the shelf edges and `count` positions are produced.
/// Without one, `count + 1` inclusive positions are laid over the usable
/// span and the two endpoints dropped, leaving `count - 1` interior values
/// (so a count of 1 yields an empty axis, which is legitimate output).
fn axis_positions(extent: f64, near: f64, far: f64, custom: f64, count: usize) -> Vec<f64> {
    if custom > 0.0 {
        linspace(near + custom, extent - far - custom, count)
    } else {
        let mut inclusive = linspace(near, extent - far, count + 1);
        inclusive.pop();
        if !inclusive.is_empty() {
            inclusive.remove(0);
        }
        inclusive
    }
}

/// Compute the fixture grid for a room.
///
/// Deterministic: identical inputs give bit-identical output. Never fails;
/// nonsensical geometry yields nonsensical (but well-formed) coordinates.
#[must_use]
pub fn compute_positions(
    room: RoomGeometry,
    grid: GridSpec,
    shelves: ShelfMargins,
    custom: CustomDistances,
) -> PositionSet {
    let y = axis_positions(
        room.length,
        shelves.south,
        shelves.north,
        custom.top_bottom,
        grid.rows,
    );
    let x = axis_positions(
        room.width,
        shelves.west,
        shelves.east,
        custom.left_right,
        grid.cols,
    );
    PositionSet { x, y }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
