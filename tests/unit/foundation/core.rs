use super::*;

#[test]
fn canvas_rejects_zero_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(3, 4).unwrap().bounds().area(), 12);
}

#[test]
fn canvas_contains_edges_inclusive() {
    let c = Canvas::new(100, 50).unwrap();
    assert!(c.contains(Bounds {
        x: 60,
        y: 0,
        width: 40,
        height: 50,
    }));
    assert!(!c.contains(Bounds {
        x: 61,
        y: 0,
        width: 40,
        height: 50,
    }));
}

#[test]
fn touching_bounds_do_not_overlap() {
    let a = Bounds {
        x: 0,
        y: 0,
        width: 10,
        height: 10,
    };
    let b = Bounds {
        x: 10,
        y: 0,
        width: 10,
        height: 10,
    };
    let c = Bounds {
        x: 9,
        y: 9,
        width: 5,
        height: 5,
    };
    assert!(!a.overlaps(b));
    assert!(a.overlaps(c));
    assert!(b.overlaps(c));
}

#[test]
fn grid_position_serializes_camel_case_spans() {
    let v = serde_json::to_value(GridPosition::cell(1, 2)).unwrap();
    assert_eq!(v["rowSpan"], 1);
    assert_eq!(v["colSpan"], 1);
    assert_eq!(v["col"], 2);
}

#[test]
fn hex_colour_forms() {
    assert!(is_hex_colour("#1a1a1a"));
    assert!(is_hex_colour("#FFF"));
    assert!(!is_hex_colour("1a1a1a"));
    assert!(!is_hex_colour("#12345"));
    assert!(!is_hex_colour("#gggggg"));
}
