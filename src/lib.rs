//! # Lienzo - Strange Attractor Renderer
//!
//! Lienzo plots the orbits of iterated point maps ("strange attractors")
//! onto a histogram canvas and renders the result to image files. It
//! provides:
//!
//! - **Accumulation canvas**: continuous-to-grid coordinate mapping with
//!   hit counting and min/max normalization
//! - **Gradient coloring**: piecewise-linear control-point gradients with
//!   square-root-biased blending
//! - **Antialiasing**: a single weighted box-blur pass
//! - **Encoders**: hand-assembled 16-bit BMP and filtered, deflate
//!   compressed truecolor PNG output
//!
//! ## Quick Start
//!
//! ```no_run
//! use lienzo::{
//!     art::{self, Attractor, Hopalong},
//!     canvas::Canvas,
//!     encode::png,
//!     gradient::Gradient,
//! };
//!
//! // Iterate the map onto a canvas
//! let map = Hopalong::default();
//! let mut canvas = Canvas::new(map.default_domain(), 800, 800);
//! art::plot(&map, &mut canvas, 1_000_000);
//!
//! // Color the histogram and write the image
//! let gradient = Gradient::new(vec![[0, 0, 0], [0, 255, 0]]);
//! let pixels = canvas.colorize(&gradient).antialias();
//! png::write_file("hopalong.png", &pixels, "a=5 b=7 c=2")?;
//!
//! # Ok::<(), lienzo::LienzoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`art`] | Attractor point sources |
//! | [`canvas`] | Accumulation grid and normalization |
//! | [`gradient`] | Control-point color gradients |
//! | [`raster`] | Packed-color pixel grid and antialiasing |
//! | [`color`] | 5-5-5 packed color codec |
//! | [`encode`] | BMP and PNG serializers |
//! | [`error`] | Error types |

pub mod art;
pub mod canvas;
pub mod color;
pub mod encode;
pub mod error;
pub mod gradient;
pub mod raster;

// Re-exports for convenience
pub use canvas::{Canvas, Domain};
pub use error::LienzoError;
pub use gradient::Gradient;
pub use raster::PixelGrid;
