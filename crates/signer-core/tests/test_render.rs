mod common;

use image::Rgba;
use signer_core::consts::GRID_COLOUR;
use signer_core::template::TemplateImage;
use signer_core::viewport::{rasterize, Axis, GridOrientation, ViewportController};

use common::{blank_template, controller};

fn grid_positions(c: &ViewportController) -> (Vec<f64>, Vec<f64>) {
    let directive = c.render();
    let vertical = directive
        .grid
        .iter()
        .filter(|l| l.orientation == GridOrientation::Vertical)
        .map(|l| l.start.0)
        .collect();
    let horizontal = directive
        .grid
        .iter()
        .filter(|l| l.orientation == GridOrientation::Horizontal)
        .map(|l| l.start.1)
        .collect();
    (vertical, horizontal)
}

#[test]
fn test_grid_line_placement() {
    let c = ViewportController::new(blank_template(400, 200), true);
    let directive = c.render();
    assert_eq!((directive.scaled_width, directive.scaled_height), (400, 200));
    assert_eq!(directive.grid.len(), 6);

    let (vertical, horizontal) = grid_positions(&c);
    assert_eq!(vertical, vec![100.0, 200.0, 300.0]);
    assert_eq!(horizontal, vec![50.0, 100.0, 150.0]);

    for line in &directive.grid {
        match line.orientation {
            GridOrientation::Vertical => {
                assert_eq!(line.start.1, 0.0);
                assert_eq!(line.end, (line.start.0, 200.0));
            }
            GridOrientation::Horizontal => {
                assert_eq!(line.start.0, 0.0);
                assert_eq!(line.end, (400.0, line.start.1));
            }
        }
    }
}

#[test]
fn test_grid_follows_scale() {
    let mut c = ViewportController::new(blank_template(200, 100), true);
    c.zoom(0.0, 0.0, 2.0);
    let (vertical, horizontal) = grid_positions(&c);
    assert_eq!(vertical, vec![100.0, 200.0, 300.0]);
    assert_eq!(horizontal, vec![50.0, 100.0, 150.0]);
}

#[test]
fn test_no_grid_when_disabled() {
    let c = controller(400, 200);
    assert!(c.render().grid.is_empty());
}

#[test]
fn test_scaled_size_rounds() {
    let mut c = controller(201, 99);
    c.zoom(0.0, 0.0, 0.5);
    let d = c.render();
    assert_eq!((d.scaled_width, d.scaled_height), (101, 50));
}

#[test]
fn test_scaled_size_never_zero() {
    let mut c = controller(3, 2);
    for _ in 0..50 {
        c.zoom(0.0, 0.0, 0.5);
    }
    assert_eq!(c.scale(), 0.1);
    let d = c.render();
    assert_eq!((d.scaled_width, d.scaled_height), (1, 1));
}

#[test]
fn test_render_is_pure() {
    let mut c = controller(300, 300);
    c.zoom(100.0, 100.0, 1.5);
    assert_eq!(c.render(), c.render());
}

#[test]
fn test_scroll_offset_and_origin() {
    let mut c = controller(400, 400);
    c.scroll(Axis::Horizontal, 2);
    let d = c.render();
    assert_eq!(d.scroll_offset, (40.0, 0.0));
    assert_eq!(d.image_origin(), (-40.0, -0.0));
    assert!(d.visible.is_none());
}

#[test]
fn test_visible_region() {
    let mut c = controller(400, 300);
    c.set_viewport_size(250.0, 500.0);
    c.scroll(Axis::Horizontal, 5);
    let rect = c.render().visible.expect("viewport size known");
    assert_eq!(rect.x, 100.0);
    assert_eq!(rect.y, 0.0);
    assert_eq!(rect.width, 250.0);
    assert_eq!(rect.height, 300.0);
}

#[test]
fn test_rasterize_whole_image_with_grid() {
    let c = ViewportController::new(blank_template(80, 40), true);
    let bitmap = rasterize(c.image(), &c.render());
    assert_eq!(bitmap.dimensions(), (80, 40));
    assert_eq!(*bitmap.get_pixel(20, 5), Rgba(GRID_COLOUR));
    assert_eq!(*bitmap.get_pixel(5, 10), Rgba(GRID_COLOUR));
    assert_eq!(*bitmap.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_rasterize_visible_crop() {
    let mut c = ViewportController::new(blank_template(100, 100), true);
    c.set_viewport_size(60.0, 50.0);
    c.zoom(0.0, 0.0, 2.0);
    c.set_scroll_unit(10.0);
    c.scroll(Axis::Horizontal, 4);
    let d = c.render();
    let bitmap = rasterize(c.image(), &d);
    assert_eq!(bitmap.dimensions(), (60, 50));
    // Vertical grid line at canvas x = 50 lands at bitmap x = 10.
    assert_eq!(*bitmap.get_pixel(10, 30), Rgba(GRID_COLOUR));
    assert_eq!(*bitmap.get_pixel(11, 30), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_template_rejects_empty_image() {
    let empty = image::DynamicImage::new_rgba8(0, 0);
    assert!(TemplateImage::from_image(empty).is_err());
}

#[test]
fn test_template_resize() {
    let t = blank_template(10, 20);
    assert_eq!(t.resize(5, 10).dimensions(), (5, 10));
    assert_eq!(t.resize(0, 0).dimensions(), (1, 1));
}
