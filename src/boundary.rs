// src/boundary.rs

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Named Dirichlet data that can be selected from an input deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryProfile {
    /// g(x, y) = value
    Constant { value: f64 },
    /// g(x, y) = amplitude * cos(2 pi modes x / L)
    CosineX { amplitude: f64, modes: f64 },
    /// g(x, y) = a x + b y + c
    Linear { a: f64, b: f64, c: f64 },
    /// g(x, y) = scale (x^2 - y^2)
    Saddle { scale: f64 },
}

impl BoundaryProfile {
    /// Evaluates the profile at `(x, y)` on a domain of side `length`.
    pub fn evaluate(&self, x: f64, y: f64, length: f64) -> f64 {
        match *self {
            BoundaryProfile::Constant { value } => value,
            BoundaryProfile::CosineX { amplitude, modes } => {
                amplitude * (2.0 * PI * modes * x / length).cos()
            }
            BoundaryProfile::Linear { a, b, c } => a * x + b * y + c,
            BoundaryProfile::Saddle { scale } => scale * (x * x - y * y),
        }
    }

    /// Binds the domain size, giving a plain boundary function.
    pub fn as_fn(&self, length: f64) -> impl Fn(f64, f64) -> f64 + '_ {
        move |x, y| self.evaluate(x, y, length)
    }

    /// True when the profile is harmonic for the 5-point stencil, so the
    /// discrete solution equals the profile at every node.
    pub fn is_discrete_harmonic(&self) -> bool {
        matches!(
            self,
            BoundaryProfile::Constant { .. }
                | BoundaryProfile::Linear { .. }
                | BoundaryProfile::Saddle { .. }
        )
    }
}

impl Default for BoundaryProfile {
    fn default() -> Self {
        BoundaryProfile::CosineX {
            amplitude: 1.0,
            modes: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let l = 2.0;
        assert_eq!(BoundaryProfile::Constant { value: 3.0 }.evaluate(0.1, 0.2, l), 3.0);
        let cos = BoundaryProfile::CosineX { amplitude: 2.0, modes: 1.0 };
        assert!((cos.evaluate(0.0, 5.0, l) - 2.0).abs() < 1e-15);
        assert!((cos.evaluate(1.0, 0.0, l) + 2.0).abs() < 1e-15);
        let lin = BoundaryProfile::Linear { a: 1.0, b: -2.0, c: 0.5 };
        assert_eq!(lin.evaluate(1.0, 1.0, l), -0.5);
        let saddle = BoundaryProfile::Saddle { scale: 2.0 };
        assert_eq!(saddle.evaluate(1.0, 0.5, l), 1.5);
        assert!(!cos.is_discrete_harmonic());
        assert!(saddle.is_discrete_harmonic());
    }

    #[test]
    fn test_deserialize_tagged() {
        let profile: BoundaryProfile =
            serde_yaml::from_str("kind: cosine_x\namplitude: 1.5\nmodes: 2.0\n").unwrap();
        assert_eq!(profile, BoundaryProfile::CosineX { amplitude: 1.5, modes: 2.0 });

        let profile: BoundaryProfile = serde_yaml::from_str("kind: saddle\nscale: 0.25\n").unwrap();
        assert_eq!(profile, BoundaryProfile::Saddle { scale: 0.25 });
    }

    #[test]
    fn test_as_fn_binds_length() {
        let profile = BoundaryProfile::CosineX { amplitude: 1.0, modes: 1.0 };
        let g = profile.as_fn(4.0);
        assert!((g(2.0, 0.0) + 1.0).abs() < 1e-15);
    }
}
