use rand::Rng;

use crate::application::config::Config;
use crate::domain::{StepStrategy, VoxelGrid};
use crate::error::ConfigError;

/// Accepted generation interval, both in `Config` and for runtime speed
/// adjustments (which clamp instead of failing).
pub const MIN_UPDATE_INTERVAL_MS: f32 = 16.0;
pub const MAX_UPDATE_INTERVAL_MS: f32 = 5000.0;

/// Lifecycle of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Seeded but never started; the grid only re-renders
    #[default]
    Idle,
    /// Ticks advance generations
    Running,
    /// Started, then halted by the user
    Paused,
}

/// Simulation orchestrates the automaton.
/// Owns the current grid and decides when the next generation is due.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub grid: VoxelGrid,
    phase: Phase,
    generation: u64,
    elapsed_ms: f32,
    update_interval_ms: f32,
    live_probability: f64,
    pub step_strategy: StepStrategy,
    /// Wall time of the latest step, for the HUD
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Seed a fresh grid from `config`
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = VoxelGrid::random(config.edge, config.live_probability, rng)?;
        log::info!(
            "Seeded {0}x{0}x{0} grid with {1} live cells",
            config.edge,
            grid.population()
        );
        Self::from_grid(grid, config)
    }

    /// Wrap an existing grid; `config` supplies timing and reseed settings
    pub fn from_grid(grid: VoxelGrid, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid,
            phase: Phase::Idle,
            generation: 0,
            elapsed_ms: 0.0,
            update_interval_ms: config.update_interval_ms,
            live_probability: config.live_probability,
            step_strategy: config.step_strategy,
            last_step_time_ms: 0.0,
        })
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn update_interval_ms(&self) -> f32 {
        self.update_interval_ms
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Begin or resume stepping
    pub fn start(mut self) -> Self {
        if self.phase != Phase::Running {
            log::info!("Simulation started at generation {}", self.generation);
            self.phase = Phase::Running;
        }
        self
    }

    /// Halt stepping; only a running simulation can pause
    pub fn pause(mut self) -> Self {
        if self.phase == Phase::Running {
            log::info!("Simulation paused at generation {}", self.generation);
            self.phase = Phase::Paused;
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.pause() } else { self.start() }
    }

    /// Reseed the grid and return to `Idle`
    pub fn reset<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<Self, ConfigError> {
        self.grid = VoxelGrid::random(self.grid.edge(), self.live_probability, rng)?;
        self.phase = Phase::Idle;
        self.generation = 0;
        self.elapsed_ms = 0.0;
        log::info!("Simulation reset with {} live cells", self.grid.population());
        Ok(self)
    }

    /// Set the generation interval, clamped to the adjustable range
    pub fn set_update_interval(mut self, interval_ms: f32) -> Self {
        self.update_interval_ms = clamp_interval(interval_ms);
        self
    }

    /// Nudge the generation interval (the speed slider)
    pub fn adjust_update_interval(self, delta_ms: f32) -> Self {
        let interval = self.update_interval_ms + delta_ms;
        self.set_update_interval(interval)
    }

    /// Advance exactly one generation regardless of phase or timer
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        self.grid = self.step_strategy.step(&self.grid);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        log::debug!(
            "Generation {} population {} ({:.2} ms)",
            self.generation,
            self.grid.population(),
            self.last_step_time_ms
        );
        self
    }

    /// Feed elapsed frame time.
    /// While running, at most one generation is produced per tick, once the
    /// accumulated time reaches the update interval.
    pub fn tick(mut self, elapsed_ms: f32) -> Self {
        if !self.is_running() || !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
            return self;
        }

        self.elapsed_ms += elapsed_ms;
        if self.elapsed_ms >= self.update_interval_ms {
            self = self.step();
            self.elapsed_ms = 0.0;
        }
        self
    }
}

fn clamp_interval(interval_ms: f32) -> f32 {
    if interval_ms.is_finite() {
        interval_ms.clamp(MIN_UPDATE_INTERVAL_MS, MAX_UPDATE_INTERVAL_MS)
    } else {
        MAX_UPDATE_INTERVAL_MS
    }
}
