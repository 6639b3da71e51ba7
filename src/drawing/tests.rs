use {
  super::*,
  std::f32::consts::PI,
};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[test] fn circle_fills_inside_only() {
  let mut canvas = Canvas::new(20, 20);
  canvas.fill_circle(Point2D::new(10.0, 10.0), 4.0);
  let image = canvas.image();
  assert_eq!(*image.get_pixel(10, 10), RED);
  assert_eq!(*image.get_pixel(7, 10), RED);
  assert_eq!(*image.get_pixel(0, 0), CLEAR);
  assert_eq!(*image.get_pixel(15, 10), CLEAR);
  assert_eq!(*image.get_pixel(10, 15), CLEAR);
}

#[test] fn circle_clipped_at_edges() {
  let mut canvas = Canvas::new(8, 8);
  canvas.fill_circle(Point2D::new(0.0, 0.0), 3.0);
  canvas.fill_circle(Point2D::new(-50.0, 4.0), 3.0);
  let image = canvas.image();
  assert_eq!(*image.get_pixel(0, 0), RED);
  assert_eq!(*image.get_pixel(7, 7), CLEAR);
  assert_eq!(image.pixels().filter(|px| **px == RED).count(), 8);
}

#[test] fn zero_radius_draws_nothing() {
  let mut canvas = Canvas::new(8, 8);
  canvas.fill_circle(Point2D::new(4.0, 4.0), 0.0);
  canvas.fill_circle(Point2D::new(4.0, 4.0), -2.0);
  assert!(canvas.image().pixels().all(|px| *px == CLEAR));
}

#[test] fn half_arc_fills_lower_half() {
  let mut canvas = Canvas::new(20, 20);
  canvas.begin_path();
  canvas.arc(Point2D::new(10.0, 10.0), 5.0, 0.0, PI);
  canvas.fill();
  let image = canvas.image();
  assert_eq!(*image.get_pixel(10, 12), RED);
  assert_eq!(*image.get_pixel(10, 7), CLEAR);
}

#[test] fn fill_style_is_used() -> Result<()> {
  let mut canvas = Canvas::new(8, 8);
  canvas.set_fill_style("#00f".parse()?);
  canvas.fill_circle(Point2D::new(4.0, 4.0), 2.0);
  assert_eq!(*canvas.image().get_pixel(4, 4), Rgba([0, 0, 255, 255]));
  assert_eq!(*canvas.paint(), Paint::Solid(Rgba([0, 0, 255, 255])));
  Ok(())
}

#[test] fn gradient_interpolates() {
  let paint = Paint::Linear(LinearGradient {
    start: Point2D::new(0.0, 0.0),
    end: Point2D::new(10.0, 0.0),
    from: Rgba([0, 0, 0, 255]),
    to: Rgba([255, 255, 255, 255]),
  });
  assert_eq!(paint.color_at(Point2D::new(-3.0, 7.0)), Rgba([0, 0, 0, 255]));
  assert_eq!(paint.color_at(Point2D::new(5.0, 2.0)), Rgba([128, 128, 128, 255]));
  assert_eq!(paint.color_at(Point2D::new(42.0, 0.0)), Rgba([255, 255, 255, 255]));
}

#[test] fn color_parsing() -> Result<()> {
  assert_eq!(parse_color("#f00")?, RED);
  assert_eq!(parse_color("#00ff0080")?, Rgba([0, 255, 0, 128]));
  assert_eq!(parse_color(" Pink ")?, Rgba([255, 192, 203, 255]));
  assert_eq!(parse_color("#1a2B3c")?, Rgba([0x1a, 0x2b, 0x3c, 255]));
  assert!(parse_color("nope").unwrap_err().is_validation());
  assert!(parse_color("#12345").is_err());
  assert!(parse_color("#gg0000").is_err());
  Ok(())
}

#[test] fn into_image_keeps_drawn_pixels() {
  let mut canvas = Canvas::from_image(RgbaImage::new(12, 12));
  canvas.fill_circle(Point2D::new(6.0, 6.0), 3.0);
  let image = canvas.into_image();
  assert_eq!(image.dimensions(), (12, 12));
  assert_eq!(*image.get_pixel(6, 6), RED);
  assert_eq!(*image.get_pixel(0, 11), CLEAR);
}
