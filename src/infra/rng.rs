use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::TableConfig;
use crate::engine::RandomSource;

/// Системный RNG (thread_rng), для обычной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG стола по конфигу: с seed – детерминированный, без – системный.
#[derive(Clone, Debug)]
pub enum TableRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl TableRng {
    pub fn from_config(config: &TableConfig) -> Self {
        match config.seed {
            Some(seed) => TableRng::Seeded(DeterministicRng::from_seed(seed)),
            None => TableRng::System(SystemRng),
        }
    }
}

impl RandomSource for TableRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            TableRng::System(rng) => rng.shuffle(slice),
            TableRng::Seeded(rng) => rng.shuffle(slice),
        }
    }
}
