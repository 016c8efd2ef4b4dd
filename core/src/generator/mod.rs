use crate::*;
pub use random::*;

mod random;

pub trait GridGenerator {
    fn generate(self, config: BoardConfig) -> LightGrid;
}

/// Creates a fresh random board for `config`, reproducible for a given `seed`.
pub fn initialize(config: BoardConfig, seed: u64) -> LightGrid {
    RandomGridGenerator::new(seed).generate(config)
}
