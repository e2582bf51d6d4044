/*!
# Utilities

Provides helpers used by the generators:
- [`GeometricJumper`](self::geometric::GeometricJumper): skips over failed Bernoulli trials, used to
  sample the edges of random graphs,
- [`Probability`]: a validity check for probabilities / densities.

You probably do not need to interact with this module directly.
*/

use num::{One, Zero};

pub mod geometric;

pub use geometric::GeometricJumper;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities() {
        for p in [0.0, 0.25, 1.0] {
            assert!(p.is_valid_probility());
        }
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(!p.is_valid_probility());
        }
    }
}
