//! Top-level entry point: validate, lay out, and start the reveal.

use {
  std::collections::HashMap,
  euclid::Size2D,
  rand::SeedableRng,
  rand_pcg::Pcg64,
  crate::{
    error::{Error, Result},
    geometry::{Bitmap, SurfaceSpace},
    layout::Layout,
    options::RenderOptions,
    reveal::{self, Reveal},
    surface::{SharedSurface, Surface},
    timer::Timer
  }
};

/// Services the embedding environment provides.
pub trait Host {
  type Surface: Surface + Send + 'static;
  type Timer: Timer;

  /// Drawing surface registered under `id`, if any.
  fn surface(&self, id: &str) -> Option<SharedSurface<Self::Surface>>;
  /// Size used when a render does not ask for one.
  fn viewport(&self) -> Size2D<f32, SurfaceSpace>;
  fn timer(&self) -> &Self::Timer;
}

/// A ready-made [`Host`]: named surfaces, a fixed viewport and a timer.
pub struct Stage<S, T> {
  surfaces: HashMap<String, SharedSurface<S>>,
  viewport: Size2D<f32, SurfaceSpace>,
  timer: T,
}

impl<S, T> Stage<S, T> {
  pub fn new(viewport: Size2D<f32, SurfaceSpace>, timer: T) -> Self {
    Self {
      surfaces: HashMap::new(),
      viewport,
      timer
    }
  }

  /// Registers `surface` under `id`, replacing any previous one.
  pub fn insert(&mut self, id: impl Into<String>, surface: SharedSurface<S>) -> &mut Self {
    self.surfaces.insert(id.into(), surface);
    self
  }
}

impl<S, T> Host for Stage<S, T>
  where S: Surface + Send + 'static,
        T: Timer
{
  type Surface = S;
  type Timer = T;

  fn surface(&self, id: &str) -> Option<SharedSurface<S>> {
    self.surfaces.get(id).cloned()
  }

  fn viewport(&self) -> Size2D<f32, SurfaceSpace> {
    self.viewport
  }

  fn timer(&self) -> &T {
    &self.timer
  }
}

/// Draws `rows` onto the surface `surface_id` as dots appearing in random order.
///
/// Returns as soon as the draws are scheduled; they run on the host timer. Invalid input is
/// logged and returned as an error before anything is drawn. Every call is an independent
/// run, several runs may share a surface.
pub fn render_dots<H, R>(
  host: &H,
  rows: &[R],
  surface_id: &str,
  options: RenderOptions<<H::Surface as Surface>::FillStyle>
) -> Result<Reveal>
  where H: Host + ?Sized,
        R: AsRef<str>
{
  schedule(host, rows, surface_id, options)
    .map_err(|e| {
      tracing::error!(surface = surface_id, error = %e, "render_dots rejected");
      e
    })
}

fn schedule<H, R>(
  host: &H,
  rows: &[R],
  surface_id: &str,
  options: RenderOptions<<H::Surface as Surface>::FillStyle>
) -> Result<Reveal>
  where H: Host + ?Sized,
        R: AsRef<str>
{
  let RenderOptions { surface_size, fill_style, spacing, policy, seed } = options;
  let bitmap = Bitmap::new(rows)?;
  let surface = host.surface(surface_id)
    .ok_or_else(|| Error::validation(format!("no drawing surface named {:?}", surface_id)))?;
  policy.validate()?;
  let size = surface_size.unwrap_or_else(|| host.viewport());
  let layout = Layout::fit(&bitmap, size, spacing)?;

  let mut rng = match seed {
    Some(seed) => Pcg64::seed_from_u64(seed),
    None => Pcg64::from_entropy()
  };
  reveal::reveal(&surface, layout, fill_style, policy, &mut rng, host.timer())
}
