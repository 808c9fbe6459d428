use sightline_core::Point;
use sightline_render::{render, save_png, RenderConfig, RenderError};
use sightline_test_utils::fixtures;

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("nested").join("visualization.png");
    let scene = fixtures::corridor().scene(Point::new(15.0, 20.0));
    let image = render(&scene, &scene.scan(), &RenderConfig::default()).unwrap();

    save_png(&image, &path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(reloaded.dimensions(), (601, 401));
    assert_eq!(reloaded, image);
}

#[test]
fn save_into_a_file_path_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let path = blocker.join("visualization.png");

    let scene = fixtures::open_field().scene(Point::new(20.0, 20.0));
    let image = render(&scene, &scene.scan(), &RenderConfig::default()).unwrap();
    let err = save_png(&image, &path).unwrap_err();
    assert!(matches!(err, RenderError::CreateDir { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn boxed_in_endpoints_sit_on_cell_edges() {
    let scene = fixtures::boxed_in().scene(Point::new(7.5, 7.5));
    let cfg = RenderConfig::default();
    let image = render(&scene, &scene.scan(), &cfg).unwrap();
    // The right endpoint is at x = 10 physical = 200 px, centred on row 150.
    assert_eq!(*image.get_pixel(197, 153), cfg.sightline);
}
