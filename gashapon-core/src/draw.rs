//! Draw engine: sampling without replacement.
//!
//! The engine holds the three pieces of per-session state (the remaining
//! pool, the current selection and the filled slots) in one value, so every
//! operation moves them together. None of the operations can fail: drawing
//! from an empty pool and inspecting an empty slot are no-ops.

use crate::catalog::{Catalog, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Draw-without-replacement state for one session.
#[derive(Debug)]
pub struct DrawEngine<R = StdRng> {
    catalog: Arc<Catalog>,
    pool: Vec<Arc<Item>>,
    selection: Option<Arc<Item>>,
    filled: BTreeMap<u32, Arc<Item>>,
    rng: R,
}

impl DrawEngine<StdRng> {
    /// Create an engine seeded from OS entropy.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed (reproducible draw order).
    pub fn seeded(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawEngine<R> {
    /// Create an engine with a specific random source (useful for testing).
    pub fn with_rng(catalog: Arc<Catalog>, rng: R) -> Self {
        let pool = catalog.to_pool();
        Self {
            catalog,
            pool,
            selection: None,
            filled: BTreeMap::new(),
            rng,
        }
    }

    /// Draw one item uniformly at random from the pool.
    ///
    /// The item leaves the pool, becomes the current selection and fills the
    /// slot at its id. Returns `None` and changes nothing once the pool is
    /// exhausted.
    pub fn draw(&mut self) -> Option<Arc<Item>> {
        if self.pool.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..self.pool.len());
        let item = self.pool.remove(index);

        self.selection = Some(Arc::clone(&item));
        self.filled.insert(item.id, Arc::clone(&item));

        debug!(id = item.id, title = %item.title, remaining = self.pool.len(), "drew item");
        Some(item)
    }

    /// Re-select an item that already fills a slot.
    ///
    /// Returns `false` (and leaves the selection alone) if the slot is empty.
    pub fn inspect(&mut self, id: u32) -> bool {
        match self.filled.get(&id) {
            Some(item) => {
                self.selection = Some(Arc::clone(item));
                debug!(id, "inspecting slot");
                true
            }
            None => false,
        }
    }

    /// Refill the pool from the catalog and clear the selection and slots.
    pub fn reset(&mut self) {
        self.pool = self.catalog.to_pool();
        self.selection = None;
        self.filled.clear();
        debug!(pool = self.pool.len(), "session reset");
    }
}

impl<R> DrawEngine<R> {
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Items not yet drawn this session.
    pub fn pool(&self) -> &[Arc<Item>] {
        &self.pool
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Whether `draw` is inert until the next reset.
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// The most recently drawn or inspected item.
    pub fn selection(&self) -> Option<&Arc<Item>> {
        self.selection.as_ref()
    }

    /// Filled slots keyed by item id.
    pub fn filled_slots(&self) -> &BTreeMap<u32, Arc<Item>> {
        &self.filled
    }

    pub fn slot(&self, id: u32) -> Option<&Arc<Item>> {
        self.filled.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::catalog_of;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn engine(n: u32) -> DrawEngine {
        DrawEngine::seeded(Arc::new(catalog_of(n)), 7)
    }

    #[test]
    fn test_fresh_engine() {
        let engine = engine(3);
        assert_eq!(engine.pool_len(), 3);
        assert!(!engine.is_exhausted());
        assert!(engine.selection().is_none());
        assert!(engine.filled_slots().is_empty());
    }

    #[test]
    fn test_draw_moves_item_out_of_pool() {
        let mut engine = engine(3);
        let item = engine.draw().unwrap();

        assert_eq!(engine.pool_len(), 2);
        assert!(!engine.pool().iter().any(|i| i.id == item.id));
        assert_eq!(engine.selection().unwrap().id, item.id);
        assert_eq!(engine.slot(item.id).unwrap().id, item.id);
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut engine = engine(5);
        let mut drawn = HashSet::new();
        for _ in 0..5 {
            let item = engine.draw().unwrap();
            assert!(drawn.insert(item.id), "item {} drawn twice", item.id);
        }

        assert!(engine.is_exhausted());
        assert_eq!(engine.filled_slots().len(), 5);

        let selection = engine.selection().cloned();
        assert!(engine.draw().is_none());
        assert_eq!(engine.selection().cloned(), selection);
        assert_eq!(engine.filled_slots().len(), 5);
    }

    #[test]
    fn test_draw_uses_index_from_rng() {
        // A zero RNG always picks index 0, so items come out in catalog order.
        let mut engine = DrawEngine::with_rng(Arc::new(catalog_of(4)), StepRng::new(0, 0));
        let order: Vec<u32> = std::iter::from_fn(|| engine.draw()).map(|i| i.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let catalog = Arc::new(catalog_of(16));
        let mut a = DrawEngine::seeded(Arc::clone(&catalog), 42);
        let mut b = DrawEngine::seeded(catalog, 42);
        for _ in 0..16 {
            assert_eq!(a.draw().unwrap().id, b.draw().unwrap().id);
        }
    }

    #[test]
    fn test_empty_catalog_is_exhausted() {
        let mut engine = engine(0);
        assert!(engine.is_exhausted());
        assert!(engine.draw().is_none());
        assert!(engine.selection().is_none());
    }

    #[test]
    fn test_inspect_filled_slot() {
        let mut engine = engine(3);
        let first = engine.draw().unwrap();
        let second = engine.draw().unwrap();
        assert_eq!(engine.selection().unwrap().id, second.id);

        let pool_before = engine.pool_len();
        assert!(engine.inspect(first.id));
        assert_eq!(engine.selection().unwrap().as_ref(), first.as_ref());
        assert_eq!(engine.pool_len(), pool_before);
        assert_eq!(engine.filled_slots().len(), 2);
    }

    #[test]
    fn test_inspect_empty_slot_is_noop() {
        let mut engine = engine(3);
        let drawn = engine.draw().unwrap();
        let empty = (1..=3).find(|id| *id != drawn.id).unwrap();

        assert!(!engine.inspect(empty));
        assert!(!engine.inspect(99));
        assert_eq!(engine.selection().unwrap().id, drawn.id);
    }

    #[test]
    fn test_reset() {
        let mut engine = engine(3);
        engine.draw();
        engine.draw();
        engine.reset();

        assert_eq!(engine.pool_len(), 3);
        assert!(engine.selection().is_none());
        assert!(engine.filled_slots().is_empty());
    }

    #[test]
    fn test_reset_twice_matches_once() {
        let mut engine = engine(4);
        engine.draw();
        engine.reset();
        let once: Vec<u32> = engine.pool().iter().map(|i| i.id).collect();
        engine.reset();
        let twice: Vec<u32> = engine.pool().iter().map(|i| i.id).collect();

        assert_eq!(once, twice);
        assert!(engine.selection().is_none());
        assert!(engine.filled_slots().is_empty());
    }

    #[test]
    fn test_draw_after_reset() {
        let mut engine = engine(2);
        engine.draw();
        engine.draw();
        assert!(engine.is_exhausted());

        engine.reset();
        assert!(engine.draw().is_some());
        assert_eq!(engine.pool_len(), 1);
    }
}
