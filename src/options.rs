use {
  std::time::Duration,
  euclid::Size2D,
  crate::{
    error::{Error, Result},
    geometry::SurfaceSpace
  }
};

/// Pause between two pops of the shuffled queue.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1);
/// Window the random delays are drawn from.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(2);

/// How the dots are spread over time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RevealPolicy {
  /// Shuffle all dots once, then draw one per `tick` until none are left.
  ///
  /// Every dot is drawn exactly once, draws never overlap, and the interval is cancelled by
  /// the tick that draws the last dot.
  ShuffledQueue { tick: Duration },
  /// Draw every dot once, after its own delay, uniform in `[0, window)` whole milliseconds.
  ///
  /// Completion order is the order the delays elapse in; equal delays run in layout order.
  RandomDelay { window: Duration },
}

impl Default for RevealPolicy {
  fn default() -> Self {
    Self::ShuffledQueue { tick: DEFAULT_TICK }
  }
}

impl RevealPolicy {
  pub fn random_delay(seconds: f32) -> Result<Self> {
    if !seconds.is_finite() || seconds <= 0.0 {
      return Err(Error::validation(format!("timer window must be positive, got {}s", seconds)));
    }
    let policy = Self::RandomDelay { window: Duration::from_secs_f32(seconds) };
    policy.validate()?;
    Ok(policy)
  }

  pub fn validate(&self) -> Result<()> {
    match *self {
      Self::RandomDelay { window } if window < Duration::from_millis(1) =>
        Err(Error::validation(format!("timer window must be at least 1ms, got {:?}", window))),
      Self::ShuffledQueue { tick } if tick.is_zero() =>
        Err(Error::validation("queue tick must be positive")),
      _ => Ok(())
    }
  }
}

/// Everything about a render besides the bitmap and the surface.
///
/// ```
/// # use dot_reveal::options::RenderOptions;
/// let options = RenderOptions::<&str> {
///   spacing: 2.0,
///   ..Default::default()
/// };
/// assert_eq!(options.seed, None);
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions<F> {
  /// Area to fit the bitmap into. `None` means the host viewport.
  pub surface_size: Option<Size2D<f32, SurfaceSpace>>,
  pub fill_style: F,
  /// Gap between the edges of two neighbouring dots.
  pub spacing: f32,
  pub policy: RevealPolicy,
  /// Fixes the reveal order. `None` seeds from system entropy.
  pub seed: Option<u64>,
}

impl<F: Default> Default for RenderOptions<F> {
  fn default() -> Self {
    Self {
      surface_size: None,
      fill_style: F::default(),
      spacing: 1.0,
      policy: RevealPolicy::default(),
      seed: None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn random_delay_window() -> Result<()> {
    assert_eq!(
      RevealPolicy::random_delay(2.0)?,
      RevealPolicy::RandomDelay { window: DEFAULT_WINDOW }
    );
    assert!(RevealPolicy::random_delay(0.0).is_err());
    assert!(RevealPolicy::random_delay(-1.0).is_err());
    assert!(RevealPolicy::random_delay(0.0001).is_err());
    Ok(())
  }

  #[test] fn zero_tick_is_rejected() {
    let err = RevealPolicy::ShuffledQueue { tick: Duration::ZERO }.validate().unwrap_err();
    assert!(err.is_validation());
    assert!(RevealPolicy::ShuffledQueue { tick: Duration::from_micros(10) }.validate().is_ok());
    assert!(RevealPolicy::default().validate().is_ok());
  }

  #[test] fn defaults() {
    let options = RenderOptions::<u8>::default();
    assert_eq!(options.spacing, 1.0);
    assert_eq!(options.policy, RevealPolicy::ShuffledQueue { tick: DEFAULT_TICK });
    assert!(options.surface_size.is_none());
  }
}
