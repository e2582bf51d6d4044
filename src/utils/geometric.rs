use rand::Rng;
use rand_distr::{Distribution, Geometric, StandardGeometric};

use crate::utils::Probability;

/// A geometric distribution.
/// As the case for `p = 1/2` can be siginificantly sped up by using `StandardGeometric` instead of
/// `Geometric`, we abstract over both using an enum.
#[derive(Debug, Copy, Clone)]
pub enum GeometricDistribution {
    /// General geometric distribution
    General(Geometric),
    /// Geometric distribution for `p = 1/2`
    OneHalf(StandardGeometric),
}

impl Distribution<u64> for GeometricDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            GeometricDistribution::General(distr) => distr.sample(rng),
            GeometricDistribution::OneHalf(distr) => distr.sample(rng),
        }
    }
}

impl GeometricDistribution {
    /// Creates a new geometric distribution from a probability in `(0, 1]`.
    /// Returns `None` for `p = 0` where no success ever happens.
    pub fn from_prob(prob: f64) -> Option<Self> {
        assert!(prob.is_valid_probility());

        if prob == 0.0 {
            None
        } else if prob == 0.5 {
            Some(Self::OneHalf(StandardGeometric))
        } else {
            Geometric::new(prob).ok().map(Self::General)
        }
    }
}

/// A geometric jumper enumerates the successes of independent Bernoulli(`p`) trials
/// `0, 1, 2, ...` without drawing one random number per trial: the gap to the next success is
/// drawn from a geometric distribution instead.
///
/// It keeps doing that until the stop value (exclusive) is reached.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    /// `None` if no trial can succeed (`p = 0`)
    distr: Option<GeometricDistribution>,
    /// Next trial to consider
    cur: u64,
    /// Trials are `0..stop`
    stop: u64,
}

impl GeometricJumper {
    /// Creates a new geometric jumper from a probability with no stop value
    pub fn new(prob: f64) -> Self {
        Self {
            distr: GeometricDistribution::from_prob(prob),
            cur: 0,
            stop: u64::MAX,
        }
    }

    /// Updates the stop value of the jumper
    pub fn stop_at(mut self, stop: u64) -> Self {
        self.stop = stop;
        self
    }

    /// Returns the next successful trial or `None` if none remains before the stop value
    pub fn jump<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u64> {
        let distr = self.distr?;
        if self.cur >= self.stop {
            return None;
        }

        let next = match self.cur.checked_add(distr.sample(rng)) {
            Some(x) if x < self.stop => x,
            _ => {
                self.cur = self.stop;
                return None;
            }
        };

        self.cur = next + 1;
        Some(next)
    }

    /// Creates an iterator of geometric jumps
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        GeometricJumperIter { jumper: self, rng }
    }
}

/// An iterator over geometric jumps
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R>
where
    R: Rng,
{
    jumper: GeometricJumper,
    rng: &'a mut R,
}

impl<R> Iterator for GeometricJumperIter<'_, R>
where
    R: Rng,
{
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.jumper.jump(self.rng)
    }
}
