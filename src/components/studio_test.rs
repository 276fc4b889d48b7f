use super::*;

#[test]
fn marker_style_positions_by_center_coordinates() {
    assert_eq!(marker_style(Point::new(150.0, 125.5)), "left: 150.00px; top: 125.50px;");
}

#[test]
fn ghost_style_adds_translucency() {
    let style = ghost_style(Point::new(1.0, 2.0));
    assert!(style.starts_with("left: 1.00px; top: 2.00px;"));
    assert!(style.ends_with("opacity: 0.7;"));
}
