use floorplan::{
    FloorFillerConfig, FloorplanError, WallExtractorConfig, generate_floor_mask, load_grayscale,
    remove_interior_lines,
};
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

fn room_blueprint() -> GrayImage {
    // 120x120 page with 8px walls around a room, a thin dimension line and a
    // small furniture block inside
    let mut img = GrayImage::from_pixel(120, 120, Luma([250]));
    draw_filled_rect_mut(&mut img, Rect::at(10, 10).of_size(100, 100), Luma([5]));
    draw_filled_rect_mut(&mut img, Rect::at(18, 18).of_size(84, 84), Luma([250]));
    draw_filled_rect_mut(&mut img, Rect::at(25, 60).of_size(60, 1), Luma([5]));
    draw_filled_rect_mut(&mut img, Rect::at(50, 40).of_size(10, 10), Luma([5]));
    img.put_pixel(0, 0, Luma([60]));
    img
}

#[test]
fn walls_then_floor_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blueprint.png");
    let walls_path = dir.path().join("walls_only.png");
    let floor_path = dir.path().join("floor_filled.png");
    let texture_path = dir.path().join("texture.png");

    room_blueprint().save(&input).unwrap();
    RgbImage::from_fn(5, 5, |x, y| Rgb([120 + x as u8, 80 + y as u8, 40]))
        .save(&texture_path)
        .unwrap();

    remove_interior_lines(&input, &walls_path, &WallExtractorConfig::default()).unwrap();
    let walls = load_grayscale(&walls_path).unwrap();
    assert_eq!(walls.dimensions(), (120, 120));
    // Wall ring kept, thin line and furniture gone
    assert_eq!(walls.get_pixel(12, 60).0[0], 0);
    assert_eq!(walls.get_pixel(55, 60).0[0], 255);
    assert_eq!(walls.get_pixel(55, 45).0[0], 255);
    assert_eq!(walls.get_pixel(2, 2).0[0], 255);

    generate_floor_mask(&walls_path, &floor_path, &texture_path, &FloorFillerConfig::default())
        .unwrap();
    let floor = image::open(&floor_path).unwrap().to_rgb8();
    assert_eq!(floor.dimensions(), (120, 120));
    assert_eq!(floor.get_pixel(2, 2), &Rgb([255, 255, 255]));
    assert_eq!(floor.get_pixel(12, 60), &Rgb([0, 0, 0]));
    assert_eq!(floor.get_pixel(60, 60), &Rgb([120, 80, 40]));
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let err = remove_interior_lines(
        dir.path().join("missing.png"),
        &output,
        &WallExtractorConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FloorplanError::Load { .. }));
    assert!(!output.exists());
}

#[test]
fn missing_texture_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("walls.png");
    let output = dir.path().join("floor.png");
    GrayImage::from_pixel(20, 20, Luma([255])).save(&input).unwrap();

    let err = generate_floor_mask(
        &input,
        &output,
        dir.path().join("no_texture.jpg"),
        &FloorFillerConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FloorplanError::Texture { .. }));
    assert!(!output.exists());
}
