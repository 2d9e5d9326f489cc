//! `POST /calculate` — the single computation endpoint.
//!
//! DESIGN
//! ======
//! The request body is a loose JSON object coming straight from an HTML
//! form, so every field is coerced individually: missing, null, blank, or
//! falsy values default to zero, numeric strings parse, and anything else
//! is a `RequestError`. All errors collapse to one response shape,
//! `{"error": <message>}` with HTTP 400; bad input never produces a 500.
//!
//! The off-by-one count contract lives here and only here: the form's
//! `rows`/`cols` mean "interior divisions", so the value is incremented by
//! one before it becomes the fixture count handed to `grid`. A caller who
//! wants N fixtures per axis sends N - 1. Falsy `rows`/`cols` skip the
//! increment and default to a count of 1 (which yields an empty axis).

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::chart::{Figure, build_figure};
use crate::grid::{CustomDistances, GridSpec, RoomGeometry, ShelfMargins, compute_positions};

// =============================================================================
// ERRORS
// =============================================================================

/// Anything that can go wrong between receiving the body and building the
/// figure. One taxonomy, one response shape.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid request body: {0}")]
    Body(String),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("field '{0}' must be a number")]
    NotANumber(String),
    #[error("field '{0}' must be an integer")]
    NotAnInteger(String),
    #[error("field '{0}' must not be negative")]
    NegativeCount(String),
}

// =============================================================================
// FIELD COERCION
// =============================================================================

/// Coerce an optional numeric field. Missing, `null`, blank string, `false`,
/// and `0` all mean 0.0; `true` reads as 1.0.
fn float_field(data: &Map<String, Value>, key: &str) -> Result<f64, RequestError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| RequestError::NotANumber(key.into())),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(0.0)
            } else {
                s.parse().map_err(|_| RequestError::NotANumber(key.into()))
            }
        }
        Some(_) => Err(RequestError::NotANumber(key.into())),
    }
}

/// Coerce a row/column field into a fixture count. Falsy values mean a
/// count of 1; everything else is parsed as an integer (numbers truncate
/// toward zero) and incremented by one. A negative result is rejected up
/// front rather than handed to the calculator.
#[allow(clippy::cast_possible_truncation)]
fn count_field(data: &Map<String, Value>, key: &str) -> Result<usize, RequestError> {
    let raw = match data.get(key) {
        None | Some(Value::Null | Value::Bool(false)) => return Ok(1),
        Some(Value::Bool(true)) => 1,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i,
            None => n.as_f64().ok_or_else(|| RequestError::NotAnInteger(key.into()))? as i64,
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(1);
            }
            s.parse::<i64>().map_err(|_| RequestError::NotAnInteger(key.into()))?
        }
        Some(_) => return Err(RequestError::NotAnInteger(key.into())),
    };
    if raw == 0 {
        // Zero is falsy in the form contract: no increment, count of 1.
        return Ok(1);
    }
    let count = raw.saturating_add(1);
    usize::try_from(count).map_err(|_| RequestError::NegativeCount(key.into()))
}

// =============================================================================
// HANDLER
// =============================================================================

/// Parse the form payload and run the two-stage computation.
fn figure_for_request(body: &Value) -> Result<Figure, RequestError> {
    let data = body.as_object().ok_or(RequestError::NotAnObject)?;

    let room = RoomGeometry {
        length: float_field(data, "room_length")?,
        width: float_field(data, "room_width")?,
    };
    let grid = GridSpec {
        rows: count_field(data, "rows")?,
        cols: count_field(data, "cols")?,
    };
    let shelves = ShelfMargins {
        north: float_field(data, "north_shelf")?,
        south: float_field(data, "south_shelf")?,
        east: float_field(data, "east_shelf")?,
        west: float_field(data, "west_shelf")?,
    };
    let custom = CustomDistances {
        top_bottom: float_field(data, "top_bottom_distance")?,
        left_right: float_field(data, "left_right_distance")?,
    };

    let positions = compute_positions(room, grid, shelves, custom);
    tracing::debug!(
        cols = positions.x.len(),
        rows = positions.y.len(),
        length = room.length,
        width = room.width,
        "computed fixture grid"
    );
    Ok(build_figure(&positions, room, shelves))
}

/// `POST /calculate` — compute fixture positions and return the figure.
pub async fn calculate(payload: Result<Json<Value>, JsonRejection>) -> Response {
    let result = payload
        .map_err(|e| RequestError::Body(e.body_text()))
        .and_then(|Json(body)| figure_for_request(&body));
    match result {
        Ok(figure) => (StatusCode::OK, Json(figure)).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "rejected calculate request");
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "calculate_test.rs"]
mod tests;
