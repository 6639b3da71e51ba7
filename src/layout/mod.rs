//! Fitting a bitmap into a surface as a grid of equally sized dots.
//!
//! Three steps, each a pure function:
//! - [`measure`] the bitmap in cells,
//! - [`compute_radius`] of a dot so that the whole grid fits the surface,
//! - [`layout`] the centers of every filled cell.
//!
//! `spacing` is always the gap between the *edges* of two neighbouring dots. The distance
//! between two neighbouring centers is therefore `spacing + 2 * radius`.

use {
  euclid::{Point2D, Size2D},
  crate::{
    error::Result,
    geometry::{Bitmap, CellSpace, Dot, SurfaceSpace, validate_size, validate_spacing}
  }
};


/// Width is the longest row, height is the number of rows.
pub fn measure(bitmap: &Bitmap) -> Size2D<u32, CellSpace> {
  let width = bitmap.rows()
    .map(|row| row.chars().count())
    .max()
    .unwrap_or(0);
  let height = bitmap.rows().count();
  Size2D::new(width as u32, height as u32)
}

/// Largest whole radius for which `image` cells, `spacing` apart, fit into `surface`.
///
/// Not clamped: a bitmap that cannot fit at the requested spacing yields a zero or
/// negative radius. `image` must not be empty in either direction.
pub fn compute_radius(
  image: Size2D<u32, CellSpace>,
  surface: Size2D<f32, SurfaceSpace>,
  spacing: f32
) -> f32 {
  let (width, height) = (image.width as f32, image.height as f32);
  let effective_width = surface.width - width * spacing;
  let effective_height = surface.height - height * spacing;
  let diameter = (effective_width / width).min(effective_height / height);
  (diameter / 2.0).floor()
}

/// Centers of all filled cells, in row-major order.
///
/// The first cell is centered at `(radius, radius)`. Every cell advances the cursor by one
/// step, filled or not, so empty cells leave gaps.
pub fn layout(bitmap: &Bitmap, radius: f32, spacing: f32) -> Vec<Dot> {
  let step = spacing + 2.0 * radius;
  bitmap.rows()
    .enumerate()
    .flat_map(|(row, cells)| cells.chars()
      .enumerate()
      .filter(|&(_, cell)| cell == '1')
      .map(move |(column, _)| Point2D::new(
        radius + column as f32 * step,
        radius + row as f32 * step
      )))
    .collect()
}

/// Output of the layout engine: a shared radius and the dot centers.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
  /// Bitmap size in cells.
  pub grid: Size2D<u32, CellSpace>,
  pub radius: f32,
  pub dots: Vec<Dot>,
}

impl Layout {
  /// Runs the whole layout pipeline.
  ///
  /// A degenerate radius is clamped to zero before the dots are laid out; see
  /// [`Layout::is_degenerate`].
  pub fn fit(
    bitmap: &Bitmap,
    surface: Size2D<f32, SurfaceSpace>,
    spacing: f32
  ) -> Result<Self> {
    let surface = validate_size(surface)?;
    let spacing = validate_spacing(spacing)?;
    let grid = measure(bitmap);
    let radius = compute_radius(grid, surface, spacing);
    if radius <= 0.0 {
      tracing::warn!(
        radius, spacing,
        grid_width = grid.width, grid_height = grid.height,
        surface_width = surface.width, surface_height = surface.height,
        "bitmap does not fit the surface, dots are degenerate"
      );
    }
    let radius = radius.max(0.0);
    Ok(Self {
      grid,
      radius,
      dots: layout(bitmap, radius, spacing)
    })
  }

  pub fn is_degenerate(&self) -> bool {
    self.radius <= 0.0
  }
}
