#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- Point / Rect ---

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), pt(0.0, 0.0));
}

#[test]
fn point_offset_from_subtracts_components() {
    assert_eq!(pt(10.0, 4.0).offset_from(pt(3.0, 5.0)), pt(7.0, -1.0));
}

#[test]
fn rect_center_is_midpoint() {
    let r = Rect::new(100.0, 50.0, 40.0, 20.0);
    assert_eq!(r.center(), pt(120.0, 60.0));
}

#[test]
fn zero_sized_rect_center_is_its_corner() {
    let r = Rect::new(7.0, 9.0, 0.0, 0.0);
    assert_eq!(r.center(), pt(7.0, 9.0));
}

// --- LayoutVariant ---

#[test]
fn default_layout_is_surface_relative() {
    assert_eq!(LayoutVariant::default(), LayoutVariant::SurfaceRelative);
    assert_eq!(LayoutVariant::SurfaceRelative.palette_offset(), 0.0);
}

#[test]
fn window_relative_layout_adds_palette_width() {
    assert_eq!(LayoutVariant::WindowRelative.palette_offset(), PALETTE_WIDTH_PX);
}

// --- to_local ---

#[test]
fn to_local_subtracts_surface_origin() {
    let surface = Rect::new(100.0, 50.0, 800.0, 600.0);
    let local = to_local(pt(250.0, 175.0), &surface, LayoutVariant::SurfaceRelative);
    assert_eq!(local, pt(150.0, 125.0));
}

#[test]
fn to_local_applies_palette_offset_on_x_only() {
    let surface = Rect::new(96.0, 0.0, 800.0, 600.0);
    let local = to_local(pt(96.0, 40.0), &surface, LayoutVariant::WindowRelative);
    assert_eq!(local, pt(96.0, 40.0));
}

#[test]
fn to_local_can_go_negative_outside_the_surface() {
    let surface = Rect::new(100.0, 50.0, 800.0, 600.0);
    let local = to_local(pt(90.0, 10.0), &surface, LayoutVariant::SurfaceRelative);
    assert_eq!(local, pt(-10.0, -40.0));
}

// --- grab_offset ---

#[test]
fn grab_at_center_has_zero_offset() {
    let el = Rect::new(10.0, 10.0, 40.0, 40.0);
    assert_eq!(grab_offset(pt(30.0, 30.0), &el), pt(0.0, 0.0));
}

#[test]
fn grab_off_center_reports_distance_from_center() {
    let el = Rect::new(10.0, 10.0, 40.0, 40.0);
    assert_eq!(grab_offset(pt(15.0, 45.0), &el), pt(-15.0, 15.0));
}

#[test]
fn mapping_pointer_minus_grab_recovers_element_center() {
    let surface = Rect::new(100.0, 50.0, 800.0, 600.0);
    let el = Rect::new(180.0, 130.0, 40.0, 40.0);
    let pointer = pt(190.0, 160.0);
    let grab = grab_offset(pointer, &el);
    let local = to_local(pointer.offset_from(grab), &surface, LayoutVariant::SurfaceRelative);
    assert_eq!(local, pt(100.0, 100.0));
}

// --- to_surface / palette touches ---

#[test]
fn to_surface_ignores_layout_correction() {
    let surface = Rect::new(96.0, 10.0, 800.0, 600.0);
    assert_eq!(to_surface(pt(396.0, 210.0), &surface), pt(300.0, 200.0));
}

#[test]
fn clamp_local_keeps_points_inside_the_surface() {
    let surface = Rect::new(96.0, 0.0, 800.0, 600.0);
    assert_eq!(surface.clamp_local(pt(-12.0, 700.0)), pt(0.0, 600.0));
    assert_eq!(surface.clamp_local(pt(400.0, 300.0)), pt(400.0, 300.0));
}

#[test]
fn palette_touch_maps_the_whole_palette_onto_the_surface() {
    let surface = Rect::new(PALETTE_WIDTH_PX, 0.0, 900.0, 700.0);
    for x in [0.0, 1.0, 48.0, 95.0] {
        let local = palette_touch_to_local(pt(x, 48.0), &surface);
        assert!((0.0..=surface.width).contains(&local.x), "x={x} mapped to {}", local.x);
        assert_eq!(local.y, 48.0);
    }
}
