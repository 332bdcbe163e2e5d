//! Testing utilities for the gashapon engine.
//!
//! This module provides tools for integration testing:
//! - `catalog_of` / `item` for synthetic catalogs of any size
//! - `TestHarness` for scripted sessions with a seeded RNG and a fixed track

use crate::catalog::{Catalog, Item};
use crate::lever::{LeverRelease, TrackGeometry};
use crate::session::{GashaponSession, SessionConfig, SessionSnapshot};

/// A synthetic item with the given id and title.
pub fn item(id: u32, title: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: format!("Description of {title}"),
        url: format!("https://example.com/items/{id}"),
        image: format!("items/{id}.png"),
    }
}

/// A catalog of `n` items with ids `1..=n`.
pub fn catalog_of(n: u32) -> Catalog {
    let items = (1..=n).map(|id| item(id, &format!("Item {id}"))).collect();
    Catalog::from_items(items).expect("synthetic ids are unique and positive")
}

/// Left edge of the harness lever track.
pub const TRACK_LEFT: f32 = 0.0;
/// Width of the harness lever track.
pub const TRACK_WIDTH: f32 = 100.0;

/// Test harness for running widget scenarios.
pub struct TestHarness {
    /// The session under test.
    pub session: GashaponSession,
    /// Host clock in seconds, advanced by `advance`.
    pub now: f64,
}

impl TestHarness {
    /// Harness around a synthetic catalog of `n` items.
    pub fn new(n: u32) -> Self {
        Self::with_catalog(catalog_of(n))
    }

    /// Harness around a specific catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let config = SessionConfig::new().with_seed(0x6a5a);
        let mut session = GashaponSession::with_catalog(catalog, config)
            .expect("default config is valid");
        session.set_track(TrackGeometry::new(TRACK_LEFT, TRACK_WIDTH));
        Self { session, now: 0.0 }
    }

    /// Pointer x that puts the lever at `position` on the harness track.
    pub fn pointer_x_for(position: f32) -> f32 {
        TRACK_LEFT + TRACK_WIDTH - position / 100.0 * TRACK_WIDTH
    }

    /// Move the host clock forward and tick the session.
    pub fn advance(&mut self, seconds: f64) -> bool {
        self.now += seconds;
        self.session.tick(self.now)
    }

    /// Draw `count` times, returning the ids that came out.
    pub fn draw_n(&mut self, count: usize) -> Vec<u32> {
        (0..count)
            .filter_map(|_| self.session.draw(self.now))
            .map(|item| item.id)
            .collect()
    }

    /// Press, drag to `position`, release.
    pub fn pull_lever_to(&mut self, position: f32) -> LeverRelease {
        self.session.press_lever();
        self.session.move_lever(Self::pointer_x_for(position));
        self.session.release_lever()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot(self.now)
    }

    /// Assert the engine invariants: pool and slots are disjoint, and
    /// together they cover each catalog item exactly once.
    pub fn assert_invariants(&self) {
        let engine = self.session.engine();
        let filled = engine.filled_slots();

        for item in engine.pool() {
            assert!(
                !filled.contains_key(&item.id),
                "item {} is both in the pool and in a slot",
                item.id
            );
        }
        for (id, item) in filled {
            assert_eq!(*id, item.id, "slot {id} holds item {}", item.id);
        }
        assert_eq!(
            engine.pool_len() + filled.len(),
            engine.catalog().len(),
            "pool and slots do not cover the catalog"
        );
    }
}
