use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The random draws tile spawning needs. Injected so tests can script them.
pub trait TileRng {
    /// Uniform index in `0..len`; callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

/// Seeded generator owned by a single game; the same seed replays the same game.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl TileRng for SessionRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }
}

/// Replays fixed draws; panics when a script runs dry so tests notice extra draws.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    indices: std::collections::VecDeque<usize>,
    chances: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(indices: &[usize], chances: &[bool]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            chances: chances.iter().copied().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.indices.is_empty() && self.chances.is_empty()
    }
}

#[cfg(test)]
impl TileRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        let index = self.indices.pop_front().expect("no scripted index left");
        assert!(index < len, "scripted index {} out of range {}", index, len);
        index
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().expect("no scripted chance left")
    }
}
