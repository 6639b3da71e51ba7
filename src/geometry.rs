//! Coordinate spaces, the bitmap container and small shape helpers.
//!
//! The origin of both coordinate systems is in the top-left corner, `y` grows downwards.

use {
  euclid::{Point2D, Box2D, Size2D, Vector2D as V2},
  crate::error::{Error, Result}
};

/// Bitmap grid coordinate, one unit per cell.
#[derive(Debug, Copy, Clone)]
pub struct CellSpace;
/// Drawing surface coordinate, e.g. pixels.
#[derive(Debug, Copy, Clone)]
pub struct SurfaceSpace;

/// Center of a single dot on the surface.
pub type Dot = Point2D<f32, SurfaceSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T, U> {
  pub xy: Point2D<T, U>,
  pub r: T,
}

impl<S> BoundingBox<f32, S> for Circle<f32, S> {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      (self.xy.to_vector() - V2::splat(self.r)).to_point(),
      (self.xy.to_vector() + V2::splat(self.r)).to_point()
    )
  }
}

impl<S> Circle<f32, S> {
  /// Signed distance to the circle edge, negative inside.
  pub fn sdf(&self, point: Point2D<f32, S>) -> f32 {
    (point - self.xy).length() - self.r
  }
}

/// Rows of cells, `'1'` is filled, anything else is empty.
///
/// Rows may differ in length; missing cells past the end of a row are empty.
/// A bitmap always has at least one row and at least one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
  rows: Vec<String>,
}

impl Bitmap {
  pub fn new<R: AsRef<str>>(rows: &[R]) -> Result<Self> {
    if rows.is_empty() {
      return Err(Error::validation("bitmap has no rows"));
    }
    let rows = rows.iter()
      .map(|row| row.as_ref().to_owned())
      .collect::<Vec<_>>();
    if rows.iter().all(|row| row.is_empty()) {
      return Err(Error::validation("bitmap has no columns"));
    }
    Ok(Self { rows })
  }

  /// One row per line, trailing `\r` stripped.
  pub fn parse(text: &str) -> Result<Self> {
    let rows = text.lines()
      .map(|line| line.trim_end_matches('\r'))
      .collect::<Vec<_>>();
    Self::new(&rows)
  }

  pub fn rows(&self) -> impl Iterator<Item = &str> + '_ {
    self.rows.iter().map(String::as_str)
  }

  /// Number of filled cells.
  pub fn count_ones(&self) -> usize {
    self.rows()
      .map(|row| row.chars().filter(|&c| c == '1').count())
      .sum()
  }
}

/// Surface sizes must be finite and strictly positive.
pub fn validate_size(size: Size2D<f32, SurfaceSpace>) -> Result<Size2D<f32, SurfaceSpace>> {
  let valid = |v: f32| v.is_finite() && v > 0.0;
  if valid(size.width) && valid(size.height) {
    Ok(size)
  } else {
    Err(Error::validation(format!(
      "surface size must be positive, got {}x{}", size.width, size.height
    )))
  }
}

/// Spacing must be finite and non-negative.
pub fn validate_spacing(spacing: f32) -> Result<f32> {
  if spacing.is_finite() && spacing >= 0.0 {
    Ok(spacing)
  } else {
    Err(Error::validation(format!("spacing must be non-negative, got {}", spacing)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn bitmap_rejects_empty() {
    let rows: [&str; 0] = [];
    assert!(Bitmap::new(&rows).unwrap_err().is_validation());
    assert!(Bitmap::new(&["", ""]).unwrap_err().is_validation());
    assert!(Bitmap::parse("").unwrap_err().is_validation());
  }

  #[test] fn bitmap_parse_lines() -> Result<()> {
    let bitmap = Bitmap::parse("101\r\n010\n")?;
    assert_eq!(bitmap.rows().collect::<Vec<_>>(), vec!["101", "010"]);
    assert_eq!(bitmap.count_ones(), 3);
    Ok(())
  }

  #[test] fn count_ones_ignores_other_chars() -> Result<()> {
    let bitmap = Bitmap::new(&["1x1", "", "0#11"])?;
    assert_eq!(bitmap.count_ones(), 4);
    Ok(())
  }

  #[test] fn size_validation() {
    assert!(validate_size(Size2D::new(10.0, 20.0)).is_ok());
    assert!(validate_size(Size2D::new(0.0, 20.0)).is_err());
    assert!(validate_size(Size2D::new(10.0, f32::NAN)).is_err());
    assert!(validate_spacing(0.0).is_ok());
    assert!(validate_spacing(-1.0).is_err());
    assert!(validate_spacing(f32::INFINITY).is_err());
  }

  #[test] fn circle_bounds() {
    let circle = Circle::<f32, SurfaceSpace> { xy: Point2D::new(10.0, 5.0), r: 2.0 };
    let bbox = circle.bounding_box();
    assert_eq!(bbox.min, Point2D::new(8.0, 3.0));
    assert_eq!(bbox.max, Point2D::new(12.0, 7.0));
    assert!(circle.sdf(Point2D::new(10.0, 5.0)) < 0.0);
    assert!(circle.sdf(Point2D::new(13.0, 5.0)) > 0.0);
  }
}
