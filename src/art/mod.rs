//! # Attractor Maps
//!
//! Point sources for the renderer. Each attractor is a pure iterated
//! map in its own module: given the current `(x, y)` it produces the
//! next point, and the orbit of that map (millions of points hopping
//! around the plane) is what gets accumulated onto the canvas.
//!
//! ## Adding a New Attractor
//!
//! 1. Create `src/art/mymap.rs` with a struct implementing [`Attractor`]
//! 2. Add `pub mod mymap;` below
//! 3. Add it to [`ATTRACTORS`] and [`by_name`]

pub mod hopalong;
pub mod pickover;

pub use hopalong::Hopalong;
pub use pickover::Pickover;

use crate::canvas::{Canvas, Domain};

/// All available attractors, in display order.
pub const ATTRACTORS: &[&str] = &["hopalong", "pickover"];

/// Steps discarded before plotting begins, so the recorded orbit has
/// settled onto the attractor instead of tracing the approach to it.
pub const TRANSIENT_STEPS: u32 = 1000;

/// An iterated point map.
pub trait Attractor {
    /// Map name (lowercase, e.g., "hopalong").
    fn name(&self) -> &'static str;

    /// One application of the map.
    fn step(&self, x: f64, y: f64) -> (f64, f64);

    /// Starting point of the orbit.
    fn seed(&self) -> (f64, f64);

    /// The window of the plane where this map's structure lives.
    fn default_domain(&self) -> Domain;

    /// Resolution that renders well over the default window.
    fn default_resolution(&self) -> (u32, u32) {
        (800, 800)
    }

    /// Human-readable parameter summary.
    fn params_description(&self) -> String;
}

/// Get an attractor by name, with its default parameters.
pub fn by_name(name: &str) -> Option<Box<dyn Attractor>> {
    match name.to_lowercase().as_str() {
        "hopalong" => Some(Box::new(Hopalong::default())),
        "pickover" => Some(Box::new(Pickover::default())),
        _ => None,
    }
}

/// Get an attractor by name with randomized parameters.
pub fn by_name_random(name: &str) -> Option<Box<dyn Attractor>> {
    match name.to_lowercase().as_str() {
        "hopalong" => Some(Box::new(Hopalong::random())),
        "pickover" => Some(Box::new(Pickover::random())),
        _ => None,
    }
}

/// Run `map` for `iterations` steps, recording every point onto
/// `canvas`. The transient is skipped first.
pub fn plot(map: &dyn Attractor, canvas: &mut Canvas, iterations: u64) {
    plot_with_progress(map, canvas, iterations, |_| {});
}

/// Like [`plot`], invoking `tick` with the index of each recorded point.
/// The callback keeps progress reporting in the caller; the library
/// itself never prints.
pub fn plot_with_progress<F>(map: &dyn Attractor, canvas: &mut Canvas, iterations: u64, mut tick: F)
where
    F: FnMut(u64),
{
    let (mut x, mut y) = map.seed();
    for _ in 0..TRANSIENT_STEPS {
        (x, y) = map.step(x, y);
    }
    for i in 0..iterations {
        (x, y) = map.step(x, y);
        canvas.record_hit(x, y);
        tick(i);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_lookup() {
        for &name in ATTRACTORS {
            assert!(by_name(name).is_some(), "missing attractor {}", name);
        }
        assert!(by_name("HOPALONG").is_some());
        assert!(by_name("julia").is_none());
    }

    #[test]
    fn test_plot_is_deterministic() {
        let map = Hopalong::default();
        let mut first = Canvas::new(map.default_domain(), 64, 64);
        let mut second = Canvas::new(map.default_domain(), 64, 64);
        plot(&map, &mut first, 5000);
        plot(&map, &mut second, 5000);
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn test_plot_accumulates_hits() {
        let map = Hopalong::default();
        let mut canvas = Canvas::new(map.default_domain(), 64, 64);
        plot(&map, &mut canvas, 5000);
        let total: i64 = canvas.cells().iter().sum();
        assert!(total > 0, "orbit never hit the canvas");
    }

    #[test]
    fn test_progress_callback_counts_iterations() {
        let map = Pickover::default();
        let mut canvas = Canvas::new(map.default_domain(), 16, 16);
        let mut ticks = 0u64;
        plot_with_progress(&map, &mut canvas, 1234, |_| ticks += 1);
        assert_eq!(ticks, 1234);
    }
}
