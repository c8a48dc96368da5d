// src/generator/driver.rs
//! The generation loop: seed one random cell, then keep filling the first
//! eligible cell until the frontier runs dry.

use log::{debug, info, warn};
use rand::Rng;

use super::report::{GenerationIssue, GenerationReport, Placement};
use super::rotation::{compute_rotation, Rotation};
use super::scanner::{scan_neighbors, SlotCheck};
use super::selector::find_next_eligible;
use super::GenerationError;
use crate::config::GeneratorConfig;
use crate::grid::{CellState, GridPos, GridState};
use crate::scene::{cell_to_world, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Grid allocated, nothing placed.
    Uninitialized,
    /// Start cell chosen, root piece not yet placed.
    Seeding { start: GridPos },
    Expanding,
    /// Terminal.
    Done,
}

/// One generation run over a scene.
///
/// The generator borrows the scene and the random source exclusively for the
/// whole run. A finished or abandoned generator is not reusable; build a new
/// one for another layout.
pub struct Generator<'a, S: Scene, R: Rng> {
    config: &'a GeneratorConfig,
    scene: &'a mut S,
    rng: &'a mut R,
    grid: GridState<S::Handle>,
    phase: Phase,
    last_filled: Option<GridPos>,
    report: GenerationReport,
}

impl<'a, S: Scene, R: Rng> Generator<'a, S, R> {
    /// Validates `config` and allocates an empty grid.
    pub fn new(
        config: &'a GeneratorConfig,
        scene: &'a mut S,
        rng: &'a mut R,
    ) -> Result<Self, GenerationError> {
        config.validate()?;
        info!(
            "Generating {}x{} layout from {} prefabs",
            config.columns,
            config.rows,
            config.prefabs.len()
        );
        let grid = GridState::new(config.columns, config.rows);
        let report = GenerationReport::new(grid.columns(), grid.rows());
        Ok(Self {
            config,
            scene,
            rng,
            grid,
            phase: Phase::Uninitialized,
            last_filled: None,
            report,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &GridState<S::Handle> {
        &self.grid
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn last_filled(&self) -> Option<GridPos> {
        self.last_filled
    }

    /// Chooses the start cell instead of drawing it at random. Only valid
    /// before the first step.
    pub fn start_at(&mut self, start: GridPos) -> Result<Phase, GenerationError> {
        if self.phase != Phase::Uninitialized {
            return Err(GenerationError::AlreadyStarted);
        }
        self.grid.get(start)?;
        self.phase = Phase::Seeding { start };
        Ok(self.phase)
    }

    /// Advances by one transition and returns the new phase.
    pub fn step(&mut self) -> Result<Phase, GenerationError> {
        self.phase = match self.phase {
            Phase::Uninitialized => {
                let start = GridPos::new(
                    self.rng.random_range(0..self.config.columns),
                    self.rng.random_range(0..self.config.rows),
                );
                debug!("Start cell {}", start);
                Phase::Seeding { start }
            }
            Phase::Seeding { start } => {
                self.place(None, start)?;
                Phase::Expanding
            }
            Phase::Expanding => match find_next_eligible(&self.grid) {
                Some(next) => {
                    self.place(self.last_filled, next)?;
                    Phase::Expanding
                }
                None => {
                    info!(
                        "Generation finished: {} pieces placed, {} issues",
                        self.report.filled_count(),
                        self.report.issues.len()
                    );
                    Phase::Done
                }
            },
            Phase::Done => Phase::Done,
        };
        Ok(self.phase)
    }

    /// Steps until `Done` and hands back the report.
    pub fn run(mut self) -> Result<GenerationReport, GenerationError> {
        while self.step()? != Phase::Done {}
        Ok(self.report)
    }

    /// Places a random prefab at `current`, scans around it and orients it
    /// relative to `previous`. The seed (`previous == None`) is never rotated,
    /// but an unrecognized seed category is still reported.
    fn place(
        &mut self,
        previous: Option<GridPos>,
        current: GridPos,
    ) -> Result<(), GenerationError> {
        let config = self.config;
        let prefab = &config.prefabs[self.rng.random_range(0..config.prefabs.len())];
        let handle = self
            .scene
            .instantiate(prefab, cell_to_world(current, config.spacing));

        self.grid.set(current, CellState::Filled)?;
        self.grid.set_piece(current, handle.clone())?;

        let check = SlotCheck {
            spacing: config.spacing,
            radius: config.check_radius,
        };
        let discovered = scan_neighbors(&mut self.grid, &*self.scene, current, check)?;

        let order = self.report.placements.len();
        let approach = previous.map_or((0, 0), |prev| current.delta_from(prev));
        // The seed has a zero approach, so its category is checked but it never turns.
        let rotation = match compute_rotation(&prefab.category, approach, &mut *self.rng) {
            Ok(rotation) => {
                if previous.is_some() {
                    self.scene.rotate(&handle, rotation);
                }
                rotation
            }
            Err(error) => {
                warn!("Piece #{} at {} left unrotated: {}", order, current, error);
                self.report.issues.push(GenerationIssue {
                    order,
                    pos: current,
                    error,
                });
                Rotation::Rot0
            }
        };

        debug!(
            "#{} {} at {} approach {:?} rotated {} deg, {} new eligible",
            order,
            prefab.category,
            current,
            approach,
            rotation.degrees(),
            discovered.len()
        );

        self.report.placements.push(Placement {
            order,
            pos: current,
            category: prefab.category.clone(),
            visual: prefab.visual.clone(),
            rotation,
            approach,
        });
        self.last_filled = Some(current);
        Ok(())
    }
}

/// Runs a whole generation with a random start cell.
pub fn generate<S: Scene, R: Rng>(
    config: &GeneratorConfig,
    scene: &mut S,
    rng: &mut R,
) -> Result<GenerationReport, GenerationError> {
    Generator::new(config, scene, rng)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, PieceCategory, Prefab};
    use crate::generator::RotationError;
    use crate::scene::mock::MockScene;
    use crate::scene::ConnectorScene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config_with(columns: usize, rows: usize, prefabs: Vec<Prefab>) -> GeneratorConfig {
        GeneratorConfig {
            prefabs,
            ..GeneratorConfig::with_size(columns, rows)
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let config = GeneratorConfig::with_size(1, 1);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(1);

        let report = generate(&config, &mut scene, &mut rng).unwrap();
        assert_eq!(report.filled_count(), 1);
        assert_eq!(report.placements[0].pos, GridPos::new(0, 0));
        assert_eq!(report.placements[0].rotation, Rotation::Rot0);
        assert!(scene.rotations.is_empty());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_phases_in_order() {
        let config = GeneratorConfig::with_size(1, 1);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(1);
        let mut generator = Generator::new(&config, &mut scene, &mut rng).unwrap();

        assert_eq!(generator.phase(), Phase::Uninitialized);
        assert_eq!(
            generator.step().unwrap(),
            Phase::Seeding {
                start: GridPos::new(0, 0)
            }
        );
        assert_eq!(generator.step().unwrap(), Phase::Expanding);
        assert_eq!(generator.step().unwrap(), Phase::Done);
        // Done is terminal.
        assert_eq!(generator.step().unwrap(), Phase::Done);
        assert_eq!(generator.report().filled_count(), 1);
        assert_eq!(generator.grid().get(GridPos::new(0, 0)).unwrap(), CellState::Filled);
    }

    #[test]
    fn test_three_by_one_from_middle() {
        let config = config_with(3, 1, vec![Prefab::new(PieceCategory::EndCap, "cap")]);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(8);
        let mut generator = Generator::new(&config, &mut scene, &mut rng).unwrap();

        generator.start_at(GridPos::new(1, 0)).unwrap();
        generator.step().unwrap(); // seed
        assert_eq!(generator.grid().get(GridPos::new(0, 0)).unwrap(), CellState::Eligible);
        assert_eq!(generator.grid().get(GridPos::new(2, 0)).unwrap(), CellState::Eligible);

        generator.step().unwrap();
        assert_eq!(generator.last_filled(), Some(GridPos::new(0, 0)));
        let second = &generator.report().placements[1];
        assert_eq!(second.approach, (-1, 0));
        // EndCap arriving along -col keeps its orientation.
        assert_eq!(second.rotation, Rotation::Rot0);

        let report = generator.run().unwrap();
        assert_eq!(report.filled_count(), 3);
        let third = &report.placements[2];
        assert_eq!(third.pos, GridPos::new(2, 0));
        // The previous placement was column 0, two steps back.
        assert_eq!(third.approach, (2, 0));
        assert_eq!(third.rotation, Rotation::Rot90);
    }

    #[test]
    fn test_unrecognized_category_is_reported_per_piece() {
        let config = config_with(3, 1, vec![Prefab::new(PieceCategory::Other("Stairs".into()), "stairs")]);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(4);
        let mut generator = Generator::new(&config, &mut scene, &mut rng).unwrap();
        generator.start_at(GridPos::new(0, 0)).unwrap();

        let report = generator.run().unwrap();
        assert_eq!(report.filled_count(), 3);
        assert_eq!(report.issues.len(), 3);
        assert_eq!(
            report.issues.iter().map(|i| i.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(report.placements.iter().all(|p| p.rotation == Rotation::Rot0));
        assert!(scene.rotations.is_empty());
    }

    #[test]
    fn test_unrecognized_seed_on_single_cell() {
        let config = config_with(1, 1, vec![Prefab::new(PieceCategory::Other("Stairs".into()), "stairs")]);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(6);

        let report = generate(&config, &mut scene, &mut rng).unwrap();
        assert_eq!(report.filled_count(), 1);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].order, 0);
        assert_eq!(report.issues[0].pos, GridPos::new(0, 0));
        assert_eq!(
            report.issues[0].error,
            RotationError::UnrecognizedCategory {
                category: "Stairs".into()
            }
        );
        assert_eq!(report.placements[0].rotation, Rotation::Rot0);
        assert!(scene.rotations.is_empty());
    }

    #[test]
    fn test_isolated_seed_stops_immediately() {
        let config = GeneratorConfig::with_size(5, 5);
        let mut scene = MockScene::never_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(12);

        let report = generate(&config, &mut scene, &mut rng).unwrap();
        assert_eq!(report.filled_count(), 1);
        assert_eq!(scene.spawned.len(), 1);
    }

    #[test]
    fn test_always_occupied_fills_everything() {
        let config = GeneratorConfig::with_size(4, 3);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(77);

        let report = generate(&config, &mut scene, &mut rng).unwrap();
        assert_eq!(report.filled_count(), 12);
        assert!(report.is_connected());
        // Every non-seed piece gets exactly one rotate call.
        assert_eq!(scene.rotations.len(), 11);
    }

    #[test]
    fn test_spawn_positions_follow_spacing() {
        let config = GeneratorConfig::with_size(2, 2);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(3);

        let report = generate(&config, &mut scene, &mut rng).unwrap();
        for (placement, (_, at)) in report.placements.iter().zip(&scene.spawned) {
            assert_eq!(*at, cell_to_world(placement.pos, config.spacing));
        }
    }

    #[test]
    fn test_rotations_reach_the_scene() {
        let config = GeneratorConfig::with_size(4, 4);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(31);

        let report = generate(&config, &mut scene, &mut rng).unwrap();
        for (handle, placement) in report.placements.iter().enumerate() {
            assert_eq!(scene.total_rotation(handle), placement.rotation);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GeneratorConfig::with_size(8, 8);
        let run = |seed| {
            let mut scene = ConnectorScene::new(config.spacing);
            let mut rng = StdRng::seed_from_u64(seed);
            generate(&config, &mut scene, &mut rng).unwrap().placements
        };
        assert_eq!(run(2718), run(2718));
    }

    #[test]
    fn test_connector_scene_layouts_terminate_connected() {
        for seed in 0..25 {
            for (columns, rows) in [(1, 1), (1, 6), (6, 1), (5, 7), (12, 12)] {
                let config = GeneratorConfig::with_size(columns, rows);
                let mut scene = ConnectorScene::new(config.spacing);
                let mut rng = StdRng::seed_from_u64(seed);
                let report = generate(&config, &mut scene, &mut rng).unwrap();
                assert!(report.filled_count() >= 1);
                assert!(report.filled_count() <= columns * rows);
                assert!(report.is_connected(), "seed {seed} {columns}x{rows}");
                assert_eq!(scene.len(), report.filled_count());
            }
        }
    }

    #[test]
    fn test_filled_cells_have_pieces() {
        let config = GeneratorConfig::with_size(6, 6);
        let mut scene = ConnectorScene::new(config.spacing);
        let mut rng = StdRng::seed_from_u64(5);
        let mut generator = Generator::new(&config, &mut scene, &mut rng).unwrap();
        while generator.step().unwrap() != Phase::Done {}

        let grid = generator.grid();
        assert_eq!(grid.count(CellState::Eligible), 0);
        for pos in grid.positions() {
            let filled = grid.get(pos).unwrap() == CellState::Filled;
            assert_eq!(filled, grid.piece(pos).is_some());
        }
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = GeneratorConfig::with_size(0, 3);
        let mut scene = MockScene::always_occupied(3.0);
        let mut rng = StdRng::seed_from_u64(0);
        let err = Generator::new(&config, &mut scene, &mut rng).err().unwrap();
        assert!(matches!(err, GenerationError::Config(ConfigError::ZeroColumns)));

        let config = config_with(2, 2, Vec::new());
        let err = generate(&config, &mut scene, &mut rng).unwrap_err();
        assert!(matches!(err, GenerationError::Config(ConfigError::EmptyCatalog)));
        assert!(scene.spawned.is_empty());
    }

    #[test]
    fn test_start_at_checks_bounds_and_phase() {
        let config = GeneratorConfig::with_size(2, 2);
        let mut scene = MockScene::always_occupied(config.spacing);
        let mut rng = StdRng::seed_from_u64(0);
        let mut generator = Generator::new(&config, &mut scene, &mut rng).unwrap();

        assert!(matches!(
            generator.start_at(GridPos::new(2, 0)),
            Err(GenerationError::Grid(_))
        ));
        generator.step().unwrap();
        assert!(matches!(
            generator.start_at(GridPos::new(0, 0)),
            Err(GenerationError::AlreadyStarted)
        ));
    }
}
