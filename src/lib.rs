//! Progressive dot-matrix rendering of binary bitmaps.
//!
//! A bitmap (rows of `'0'`/`'1'` characters) is fitted into a drawing surface as a grid of
//! equally sized circular dots, which then appear one by one, in random order, driven by a
//! timer instead of being drawn at once.
//!
//! It is split into two stages: [`layout`] turns the bitmap into a shared radius and a list of
//! dot centers, and [`reveal`] paints them over time. [`render::render_dots`] runs both.
//!
//! # Basic usage
//! ```
//! # use {
//! #   dot_reveal::{
//! #     drawing::{Canvas, Paint},
//! #     error::Result,
//! #     options::RenderOptions,
//! #     render::{render_dots, Stage},
//! #     surface,
//! #     timer::ManualTimer,
//! #   },
//! #   euclid::Size2D,
//! # };
//! # fn main() -> Result<()> {
//! let canvas = surface::shared(Canvas::new(100, 100));
//! // The timer decides when dots are drawn. `ManualTimer` only moves when told to,
//! // `ThreadTimer` runs in real time on a background tokio runtime.
//! let timer = ManualTimer::new();
//! let mut stage = Stage::new(Size2D::new(100.0, 100.0), timer.clone());
//! stage.insert("canvas", canvas.clone());
//!
//! let reveal = render_dots(&stage, &["101", "010"], "canvas", RenderOptions {
//!   fill_style: "pink".parse::<Paint>()?,
//!   seed: Some(0),
//!   ..Default::default()
//! })?;
//! assert_eq!(reveal.radius(), 16.0);
//! assert_eq!(reveal.drawn(), 0); // nothing happens until the timer fires
//!
//! timer.run_until_idle();
//! assert!(reveal.is_finished());
//! assert_eq!(reveal.drawn(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Reveal policies
//! - [`RevealPolicy::ShuffledQueue`](options::RevealPolicy::ShuffledQueue) (default): the dots
//!   are shuffled once and popped one per tick. Exactly one draw per dot, draws never overlap,
//!   and the interval ends with the last pop.
//! - [`RevealPolicy::RandomDelay`](options::RevealPolicy::RandomDelay): every dot gets its own
//!   timeout, uniform in `[0, window)`.
//!
//! # Hosts
//! The crate never looks anything up on its own: surfaces, the default viewport size and the
//! timer all come from a [`Host`](render::Host). Implement [`Surface`](surface::Surface) to
//! draw somewhere other than an [`image::RgbaImage`].

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geometry;
pub mod layout;
pub mod options;
pub mod render;
pub mod reveal;
pub mod surface;
pub mod timer;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
