use ndarray::Array2;

use super::*;

/// Generation strategy that lights every cell independently, each with `chance_light_starts_on` probability.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: BoardConfig) -> LightGrid {
        use rand::prelude::*;

        let chance = config.chance_light_starts_on;
        if !(0.0..=1.0).contains(&chance) {
            log::warn!(
                "Chance {} is outside [0, 1], generated anyway",
                chance
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        // a draw in [0, 1) lights the cell only when strictly below the chance
        let lights = Array2::from_shape_simple_fn(config.size.to_nd_index(), || {
            rng.random::<f64>() < chance
        });

        let grid = LightGrid::from_lights_unchecked(lights);
        log::debug!(
            "Generated {:?} grid with {} of {} lit (seed {})",
            grid.size(),
            grid.lit_count(),
            grid.total_cells(),
            self.seed
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_dimensions() {
        for (size, seed) in [((1, 1), 0), ((3, 5), 1), ((5, 3), 2), ((12, 7), 3)] {
            let grid = initialize(BoardConfig::new(size, 0.5), seed);

            assert_eq!(grid.size(), size);
            assert_eq!(grid.to_rows().len(), size.0 as usize);
            assert!(grid.to_rows().iter().all(|row| row.len() == size.1 as usize));
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let config = BoardConfig::new((6, 6), 0.4);

        assert_eq!(initialize(config, 1234), initialize(config, 1234));
    }

    #[test]
    fn zero_chance_is_already_won() {
        let grid = initialize(BoardConfig::new((8, 8), 0.0), 7);

        assert!(grid.has_won());
    }

    #[test]
    fn full_chance_lights_everything() {
        let grid = RandomGridGenerator::new(7).generate(BoardConfig::new((4, 9), 1.0));

        assert_eq!(grid.lit_count(), 36);
        assert!(!grid.has_won());
    }

    #[test]
    fn half_chance_lights_some_but_not_all() {
        let grid = initialize(BoardConfig::new((20, 20), 0.5), 42);

        let lit = grid.lit_count();
        assert!(lit > 100 && lit < 300, "lit count {} far from expected 200", lit);
    }
}
