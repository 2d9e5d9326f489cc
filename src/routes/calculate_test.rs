use super::*;

fn obj(v: Value) -> Map<String, Value> {
    v.as_object().cloned().expect("test payload must be an object")
}

// =============================================================================
// float_field coercion table
// =============================================================================

#[test]
fn float_field_missing_defaults_to_zero() {
    let data = obj(json!({}));
    assert!((float_field(&data, "room_length").unwrap()).abs() < f64::EPSILON);
}

#[test]
fn float_field_null_and_blank_default_to_zero() {
    let data = obj(json!({ "a": null, "b": "", "c": "   " }));
    assert_eq!(float_field(&data, "a").unwrap(), 0.0);
    assert_eq!(float_field(&data, "b").unwrap(), 0.0);
    assert_eq!(float_field(&data, "c").unwrap(), 0.0);
}

#[test]
fn float_field_parses_numbers_and_numeric_strings() {
    let data = obj(json!({ "n": 4.25, "s": "3.5", "i": 7 }));
    assert_eq!(float_field(&data, "n").unwrap(), 4.25);
    assert_eq!(float_field(&data, "s").unwrap(), 3.5);
    assert_eq!(float_field(&data, "i").unwrap(), 7.0);
}

#[test]
fn float_field_bools_follow_truthiness() {
    let data = obj(json!({ "t": true, "f": false }));
    assert_eq!(float_field(&data, "t").unwrap(), 1.0);
    assert_eq!(float_field(&data, "f").unwrap(), 0.0);
}

#[test]
fn float_field_rejects_non_numeric_values() {
    let data = obj(json!({ "s": "wide", "arr": [1, 2] }));
    assert!(matches!(float_field(&data, "s"), Err(RequestError::NotANumber(_))));
    assert!(matches!(float_field(&data, "arr"), Err(RequestError::NotANumber(_))));
}

// =============================================================================
// count_field: the off-by-one contract
// =============================================================================

#[test]
fn count_field_increments_by_one() {
    let data = obj(json!({ "rows": 3, "cols": "5" }));
    assert_eq!(count_field(&data, "rows").unwrap(), 4);
    assert_eq!(count_field(&data, "cols").unwrap(), 6);
}

#[test]
fn count_field_falsy_values_mean_count_one() {
    let data = obj(json!({ "zero": 0, "blank": "", "null": null, "off": false }));
    for key in ["zero", "blank", "null", "off", "missing"] {
        assert_eq!(count_field(&data, key).unwrap(), 1, "key {key}");
    }
}

#[test]
fn count_field_string_zero_is_truthy_but_still_one() {
    // "0" parses to 0 and gets the falsy treatment after parsing.
    let data = obj(json!({ "rows": "0" }));
    assert_eq!(count_field(&data, "rows").unwrap(), 1);
}

#[test]
fn count_field_truncates_float_counts() {
    let data = obj(json!({ "rows": 2.9 }));
    assert_eq!(count_field(&data, "rows").unwrap(), 3);
}

#[test]
fn count_field_rejects_non_integer_strings() {
    let data = obj(json!({ "rows": "2.5", "cols": "many" }));
    assert!(matches!(count_field(&data, "rows"), Err(RequestError::NotAnInteger(_))));
    assert!(matches!(count_field(&data, "cols"), Err(RequestError::NotAnInteger(_))));
}

#[test]
fn count_field_minus_one_collapses_to_empty_axis_count() {
    // -1 + 1 = 0 positions requested; legitimate, yields an empty axis.
    let data = obj(json!({ "rows": -1 }));
    assert_eq!(count_field(&data, "rows").unwrap(), 0);
}

#[test]
fn count_field_rejects_counts_below_minus_one() {
    let data = obj(json!({ "rows": -2 }));
    assert!(matches!(count_field(&data, "rows"), Err(RequestError::NegativeCount(_))));
}

// =============================================================================
// figure_for_request end to end
// =============================================================================

#[test]
fn full_request_produces_interior_grid() {
    let body = json!({
        "room_length": 4, "room_width": 3,
        "rows": 3, "cols": 3,
        "north_shelf": "", "south_shelf": "", "east_shelf": "", "west_shelf": "",
        "top_bottom_distance": 0, "left_right_distance": 0
    });
    let fig = figure_for_request(&body).unwrap();
    // 3 columns x 3 rows of fixtures, strictly inside the room.
    assert_eq!(fig.data[0].x.len(), 9);
    for &x in &fig.data[0].x {
        assert!(x > 0.0 && x < 3.0);
    }
    for &y in &fig.data[0].y {
        assert!(y > 0.0 && y < 4.0);
    }
    // No shelves: no filled rects, just grid lines and the outline.
    assert!(fig.layout.shapes.iter().all(|s| s.fillcolor.is_none()));
    assert_eq!(fig.layout.annotations.len(), 6);
}

#[test]
fn string_fields_from_html_form_are_accepted() {
    let body = json!({
        "room_length": "6.0", "room_width": "4.5",
        "rows": "2", "cols": "1",
        "south_shelf": "0.5", "west_shelf": "0.25"
    });
    let fig = figure_for_request(&body).unwrap();
    assert_eq!(fig.layout.yaxis.range, [0.0, 6.0]);
    assert_eq!(fig.layout.xaxis.range, [0.0, 4.5]);
    // rows "2" → count 3 → 2 interior rows; cols "1" → count 2 → 1 column.
    assert_eq!(fig.data[0].x.len(), 2);
    // South and west shelves each contribute one filled rect.
    let filled = fig.layout.shapes.iter().filter(|s| s.fillcolor.is_some()).count();
    assert_eq!(filled, 2);
}

#[test]
fn custom_distances_pin_first_and_last_fixture() {
    let body = json!({
        "room_length": 10, "room_width": 8,
        "rows": 2, "cols": 2,
        "top_bottom_distance": 1, "left_right_distance": 0.5
    });
    let fig = figure_for_request(&body).unwrap();
    // cols 2 → count 3 pinned between 0.5 and 7.5.
    assert_eq!(fig.data[0].x.len(), 9);
    let first = &fig.layout.annotations[0];
    assert_eq!(first.text, "0.50");
}

#[test]
fn missing_everything_is_still_a_valid_request() {
    // Defaulting rules: zero-size room, counts of 1, no shelves. The grid
    // comes back empty and the figure renders a degenerate bare room.
    let fig = figure_for_request(&json!({})).unwrap();
    assert!(fig.data[0].x.is_empty());
    assert!(fig.layout.annotations.is_empty());
}

#[test]
fn non_object_body_is_a_request_error() {
    let err = figure_for_request(&json!([1, 2, 3])).unwrap_err();
    assert!(!err.to_string().is_empty());
    assert!(matches!(err, RequestError::NotAnObject));
}

#[test]
fn bad_field_surfaces_as_error_with_message() {
    let body = json!({ "room_length": "huge", "rows": 3 });
    let err = figure_for_request(&body).unwrap_err();
    assert_eq!(err.to_string(), "field 'room_length' must be a number");
}
