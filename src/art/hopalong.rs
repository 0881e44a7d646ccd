//! # Hopalong Attractor
//!
//! Barry Martin's "hopalong" map. The orbit hops between the arms of a
//! swirling, vaguely floral figure; different parameter choices give
//! radically different structures, most of them living comfortably
//! inside a ±20 window.

use rand::Rng;
use std::fmt;

use super::Attractor;
use crate::canvas::Domain;

/// Hopalong map parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hopalong {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for Hopalong {
    fn default() -> Self {
        Self {
            a: 5.0,
            b: 7.0,
            c: 2.0,
        }
    }
}

impl Hopalong {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Random parameters in a range that keeps the figure on-canvas.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self {
            a: rng.random_range(1.0..10.0),
            b: rng.random_range(1.0..10.0),
            c: rng.random_range(0.0..8.0),
        }
    }
}

impl fmt::Display for Hopalong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={:.2} b={:.2} c={:.2}", self.a, self.b, self.c)
    }
}

impl Attractor for Hopalong {
    fn name(&self) -> &'static str {
        "hopalong"
    }

    fn step(&self, x: f64, y: f64) -> (f64, f64) {
        let x_new = y - 1.0 - (self.b * x - 1.0 - self.c).abs().sqrt() * sign(x - 1.0);
        let y_new = self.a - x - 1.0;
        (x_new, y_new)
    }

    fn seed(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    fn default_domain(&self) -> Domain {
        Domain::square(20.0)
    }

    fn params_description(&self) -> String {
        self.to_string()
    }
}

/// Sign with a zero case: -1, 0 or 1. `f64::signum` would turn 0 into 1
/// and bend the orbit at the x = 1 line.
fn sign(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}
