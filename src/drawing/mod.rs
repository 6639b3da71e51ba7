//! Raster [`Surface`](crate::surface::Surface) backed by an [`image::RgbaImage`].
//!
//! Arcs are filled as pie slices, without anti-aliasing. Pixel `(x, y)` is sampled at its
//! center, `(x + 0.5, y + 0.5)`.

use {
  std::{f32::consts::TAU, str::FromStr},
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    error::{Error, Result},
    geometry::{BoundingBox, Circle, Dot, SurfaceSpace},
    surface::Surface
  }
};

#[cfg(test)] mod tests;

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Fill style of a [`Canvas`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
  Solid(Rgba<u8>),
  Linear(LinearGradient),
}

impl Default for Paint {
  fn default() -> Self {
    Paint::Solid(RED)
  }
}

/// Two stop gradient along the line `start -> end`, clamped past both ends.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
  pub start: Dot,
  pub end: Dot,
  pub from: Rgba<u8>,
  pub to: Rgba<u8>,
}

impl Paint {
  pub fn color_at(&self, point: Dot) -> Rgba<u8> {
    match self {
      Paint::Solid(color) => *color,
      Paint::Linear(LinearGradient { start, end, from, to }) => {
        let axis = *end - *start;
        let length = axis.square_length();
        let t = if length > 0.0 {
          ((point - *start).dot(axis) / length).clamp(0.0, 1.0)
        } else {
          0.0
        };
        from.map2(to, |a, b| (a as f32 + (b as f32 - a as f32) * t).round() as u8)
      }
    }
  }
}

impl FromStr for Paint {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    parse_color(s).map(Paint::Solid)
  }
}

/// `#rgb`, `#rrggbb`, `#rrggbbaa`, or one of a few CSS color names.
pub fn parse_color(s: &str) -> Result<Rgba<u8>> {
  let s = s.trim();
  let invalid = || Error::validation(format!("unrecognized color {:?}", s));
  let named = match s.to_ascii_lowercase().as_str() {
    "black" => Some([0, 0, 0, 255]),
    "white" => Some([255, 255, 255, 255]),
    "red" => Some([255, 0, 0, 255]),
    "green" => Some([0, 128, 0, 255]),
    "lime" => Some([0, 255, 0, 255]),
    "blue" => Some([0, 0, 255, 255]),
    "yellow" => Some([255, 255, 0, 255]),
    "orange" => Some([255, 165, 0, 255]),
    "pink" => Some([255, 192, 203, 255]),
    "purple" => Some([128, 0, 128, 255]),
    "gray" | "grey" => Some([128, 128, 128, 255]),
    "transparent" => Some([0, 0, 0, 0]),
    _ => None
  };
  if let Some(rgba) = named {
    return Ok(Rgba(rgba));
  }

  let hex = s.strip_prefix('#').ok_or_else(invalid)?;
  if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
    return Err(invalid());
  }
  let channel = |i: usize, width: usize| -> Result<u8> {
    let digits = hex.get(i * width..(i + 1) * width).ok_or_else(invalid)?;
    let value = u8::from_str_radix(digits, 16).map_err(|_| invalid())?;
    // #rgb: every digit is doubled
    Ok(if width == 1 { value * 17 } else { value })
  };
  match hex.len() {
    3 => Ok(Rgba([channel(0, 1)?, channel(1, 1)?, channel(2, 1)?, 255])),
    6 => Ok(Rgba([channel(0, 2)?, channel(1, 2)?, channel(2, 2)?, 255])),
    8 => Ok(Rgba([channel(0, 2)?, channel(1, 2)?, channel(2, 2)?, channel(3, 2)?])),
    _ => Err(invalid())
  }
}

#[derive(Debug, Copy, Clone)]
struct Segment {
  circle: Circle<f32, SurfaceSpace>,
  start: f32,
  sweep: f32,
}

impl Segment {
  fn covers(&self, point: Dot) -> bool {
    if self.circle.sdf(point) > 0.0 {
      return false;
    }
    if self.sweep >= TAU {
      return true;
    }
    let offset = point - self.circle.xy;
    (offset.y.atan2(offset.x) - self.start).rem_euclid(TAU) <= self.sweep
  }
}

pub struct Canvas {
  image: RgbaImage,
  paint: Paint,
  path: Vec<Segment>,
}

impl Canvas {
  /// Fully transparent canvas.
  pub fn new(width: u32, height: u32) -> Self {
    Self::from_image(RgbaImage::new(width, height))
  }

  pub fn from_image(image: RgbaImage) -> Self {
    Self {
      image,
      paint: Paint::default(),
      path: vec![]
    }
  }

  pub fn size(&self) -> Size2D<f32, SurfaceSpace> {
    Size2D::<u32, SurfaceSpace>::from(self.image.dimensions()).to_f32()
  }

  pub fn paint(&self) -> &Paint {
    &self.paint
  }

  pub fn image(&self) -> &RgbaImage {
    &self.image
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }

  fn fill_segment(&mut self, segment: Segment) {
    let bounds = Box2D::from_size(self.size());
    let bounding_box = match segment.circle.bounding_box()
      .round_out()
      .intersection(&bounds)
    {
      Some(x) => x.to_u32(),
      None => return // segment has no intersection with the canvas at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let center = Point2D::new(x as f32 + 0.5, y as f32 + 0.5);
        if segment.covers(center) {
          let color = self.paint.color_at(center);
          self.image.get_pixel_mut(x, y).blend(&color);
        }
      });
  }
}

impl Surface for Canvas {
  type FillStyle = Paint;

  fn set_fill_style(&mut self, style: Paint) {
    self.paint = style;
  }

  fn begin_path(&mut self) {
    self.path.clear();
  }

  fn arc(&mut self, center: Dot, radius: f32, start_angle: f32, end_angle: f32) {
    if !radius.is_finite() || radius < 0.0 {
      tracing::debug!(radius, "arc with invalid radius ignored");
      return;
    }
    let sweep = end_angle - start_angle;
    let sweep = if sweep >= TAU { TAU } else { sweep.rem_euclid(TAU) };
    self.path.push(Segment {
      circle: Circle { xy: center, r: radius },
      start: start_angle,
      sweep
    });
  }

  fn fill(&mut self) {
    let path = std::mem::take(&mut self.path);
    path.iter().for_each(|segment| self.fill_segment(*segment));
    self.path = path;
  }
}
