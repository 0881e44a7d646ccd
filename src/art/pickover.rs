//! # Pickover Attractor
//!
//! Clifford Pickover's sine map. Because both coordinates are sums of
//! two bounded sine terms, the orbit is confined to
//! `|x| <= 1 + |c|`, `|y| <= 1 + |d|`. With the default parameters it
//! never leaves the ±2 window.

use rand::Rng;
use std::fmt;

use super::Attractor;
use crate::canvas::Domain;

/// Pickover map parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickover {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for Pickover {
    fn default() -> Self {
        Self {
            a: -2.0,
            b: 3.0,
            c: 0.75,
            d: 0.74,
        }
    }
}

impl Pickover {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Random parameters in ranges that produce dense, layered figures.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self {
            a: rng.random_range(-3.0..-1.0),
            b: rng.random_range(1.5..3.5),
            c: rng.random_range(0.4..1.0),
            d: rng.random_range(0.4..1.0),
        }
    }
}

impl fmt::Display for Pickover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={:.2} b={:.2} c={:.2} d={:.2}",
            self.a, self.b, self.c, self.d
        )
    }
}

impl Attractor for Pickover {
    fn name(&self) -> &'static str {
        "pickover"
    }

    fn step(&self, x: f64, y: f64) -> (f64, f64) {
        let x_new = (y * self.b).sin() + self.c * (x * self.b).sin();
        let y_new = (x * self.a).sin() + self.d * (y * self.a).sin();
        (x_new, y_new)
    }

    fn seed(&self) -> (f64, f64) {
        (0.1, 0.1)
    }

    fn default_domain(&self) -> Domain {
        Domain::square(2.0)
    }

    fn default_resolution(&self) -> (u32, u32) {
        (1800, 1800)
    }

    fn params_description(&self) -> String {
        self.to_string()
    }
}
