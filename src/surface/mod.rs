//! The drawing primitive the reveal scheduler paints through.
//!
//! Modelled after a 2D canvas context: a current fill style, a path made of arcs, and a fill
//! operation. Any target that can paint a filled circle in the current style qualifies.

use {
  std::{f32::consts::TAU, sync::{Arc, Mutex}},
  crate::geometry::Dot
};

#[cfg(test)] pub(crate) mod recording;

pub trait Surface {
  /// Colour, gradient or whatever the surface paints with. Passed through untouched.
  type FillStyle;

  fn set_fill_style(&mut self, style: Self::FillStyle);
  fn begin_path(&mut self);
  /// Adds an arc around `center` from `start_angle` to `end_angle`, radians, clockwise.
  fn arc(&mut self, center: Dot, radius: f32, start_angle: f32, end_angle: f32);
  /// Fills the current path with the current fill style.
  fn fill(&mut self);

  fn fill_circle(&mut self, center: Dot, radius: f32) {
    self.begin_path();
    self.arc(center, radius, 0.0, TAU);
    self.fill();
  }
}

/// Surface handle shared between the caller and the scheduled draw tasks.
pub type SharedSurface<S> = Arc<Mutex<S>>;

pub fn shared<S: Surface>(surface: S) -> SharedSurface<S> {
  Arc::new(Mutex::new(surface))
}
