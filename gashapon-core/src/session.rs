//! GashaponSession - the primary public API for the widget.
//!
//! A session is one component instance: a draw engine, the reset lever and
//! the stretch pulse, wired together. The presentation layer feeds it input
//! events one at a time and renders from [`SessionSnapshot`].

use crate::catalog::{Catalog, CatalogError, Item};
use crate::draw::DrawEngine;
use crate::grid::SlotGrid;
use crate::lever::{LeverRelease, LeverTracker, TrackGeometry, DEFAULT_RESET_THRESHOLD};
use crate::pulse::{StretchPulse, DEFAULT_PULSE_DURATION};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming a catalog JSON file.
pub const CATALOG_ENV: &str = "GASHAPON_CATALOG";
/// Environment variable holding a fixed RNG seed.
pub const SEED_ENV: &str = "GASHAPON_SEED";

/// Errors from creating a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for creating a new session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Catalog file to load. `None` uses the bundled catalog.
    pub catalog_path: Option<PathBuf>,

    /// Layout of the slot grid.
    pub grid: SlotGrid,

    /// Lever position above which a release resets the session.
    pub reset_threshold: f32,

    /// Length of the stretch pulse after each draw.
    pub pulse_duration: Duration,

    /// Fixed RNG seed for a reproducible draw order.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            grid: SlotGrid::default(),
            reset_threshold: DEFAULT_RESET_THRESHOLD,
            pulse_duration: DEFAULT_PULSE_DURATION,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `GASHAPON_CATALOG` and `GASHAPON_SEED` from the environment.
    ///
    /// An unparsable seed is ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(seed) = std::env::var(SEED_ENV) {
            match seed.trim().parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(value = %seed, "ignoring invalid {SEED_ENV}"),
            }
        }

        config
    }

    /// Load the catalog from a file instead of the bundled one.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Set the grid layout.
    pub fn with_grid(mut self, grid: SlotGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Set the lever reset threshold.
    pub fn with_reset_threshold(mut self, threshold: f32) -> Self {
        self.reset_threshold = threshold;
        self
    }

    /// Set the stretch pulse duration.
    pub fn with_pulse_duration(mut self, duration: Duration) -> Self {
        self.pulse_duration = duration;
        self
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<(), SessionError> {
        if !(0.0..=100.0).contains(&self.reset_threshold) {
            return Err(SessionError::InvalidConfig(format!(
                "reset threshold {} is outside 0-100",
                self.reset_threshold
            )));
        }
        match self.grid.checked_capacity() {
            Some(0) => Err(SessionError::InvalidConfig(
                "slot grid has no cells".to_string(),
            )),
            None => Err(SessionError::InvalidConfig(format!(
                "slot grid {}x{} has more cells than slot ids",
                self.grid.columns, self.grid.rows
            ))),
            Some(_) => Ok(()),
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub pool_len: usize,
    pub exhausted: bool,
    pub selection: Option<Arc<Item>>,
    pub filled: BTreeMap<u32, Arc<Item>>,
    pub lever_position: f32,
    pub dragging: bool,
    pub show_reset_label: bool,
    pub stretching: bool,
}

/// One gashapon widget instance.
#[derive(Debug)]
pub struct GashaponSession {
    engine: DrawEngine,
    lever: LeverTracker,
    pulse: StretchPulse,
    grid: SlotGrid,
}

impl GashaponSession {
    /// Create a session, loading the catalog named by the config.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                info!(path = %path.display(), "loading catalog");
                Catalog::load(path)?
            }
            None => Catalog::bundled()?,
        };
        Self::with_catalog(catalog, config)
    }

    /// Create a session around an already-loaded catalog.
    pub fn with_catalog(catalog: Catalog, config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let outside = catalog.ids_outside(&config.grid);
        if !outside.is_empty() {
            warn!(
                ids = ?outside,
                capacity = config.grid.capacity(),
                "catalog ids have no grid slot; they can be drawn but will not be shown in the grid"
            );
        }

        let catalog = Arc::new(catalog);
        let engine = match config.seed {
            Some(seed) => DrawEngine::seeded(catalog, seed),
            None => DrawEngine::new(catalog),
        };

        info!(items = engine.pool_len(), "gashapon session ready");

        Ok(Self {
            engine,
            lever: LeverTracker::default().with_threshold(config.reset_threshold),
            pulse: StretchPulse::new(config.pulse_duration),
            grid: config.grid,
        })
    }

    /// Draw an item and start the stretch pulse.
    ///
    /// Does nothing (and starts no pulse) once the pool is empty.
    pub fn draw(&mut self, now: f64) -> Option<Arc<Item>> {
        let item = self.engine.draw()?;
        self.pulse.trigger(now);
        Some(item)
    }

    /// Select the item in a filled slot. Empty slots are ignored.
    pub fn inspect(&mut self, id: u32) -> bool {
        self.engine.inspect(id)
    }

    /// Refill the pool and clear the selection and slots.
    pub fn reset(&mut self) {
        self.engine.reset();
        info!("session reset");
    }

    /// Record where the lever track currently sits on screen.
    pub fn set_track(&mut self, track: TrackGeometry) {
        self.lever.set_track(track);
    }

    pub fn press_lever(&mut self) {
        self.lever.press();
    }

    pub fn move_lever(&mut self, pointer_x: f32) {
        self.lever.move_to(pointer_x);
    }

    /// Release the lever, resetting the session if it was pulled far enough.
    pub fn release_lever(&mut self) -> LeverRelease {
        let outcome = self.lever.release();
        if outcome == LeverRelease::Triggered {
            self.reset();
        }
        outcome
    }

    /// Abandon a lever drag without resetting, e.g. when pointer capture is
    /// lost before a real release.
    pub fn cancel_lever(&mut self) {
        self.lever.cancel();
    }

    /// Advance host time. Returns `true` when the stretch pulse lapses.
    pub fn tick(&mut self, now: f64) -> bool {
        self.pulse.poll(now)
    }

    /// Tear down: cancel the pending pulse and any drag in progress.
    pub fn shutdown(&mut self) {
        self.pulse.cancel();
        self.lever.cancel();
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    pub fn lever(&self) -> &LeverTracker {
        &self.lever
    }

    pub fn grid(&self) -> SlotGrid {
        self.grid
    }

    pub fn is_stretching(&self, now: f64) -> bool {
        self.pulse.is_active(now)
    }

    /// Capture the render state at host time `now`.
    pub fn snapshot(&self, now: f64) -> SessionSnapshot {
        SessionSnapshot {
            pool_len: self.engine.pool_len(),
            exhausted: self.engine.is_exhausted(),
            selection: self.engine.selection().cloned(),
            filled: self.engine.filled_slots().clone(),
            lever_position: self.lever.position(),
            dragging: self.lever.is_dragging(),
            show_reset_label: self.lever.shows_reset_label(),
            stretching: self.pulse.is_active(now),
        }
    }
}

impl Drop for GashaponSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
