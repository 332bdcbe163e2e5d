//! Capsule-toy ("gashapon") dispenser engine.
//!
//! This crate provides:
//! - A fixed item catalog with a bundled default set
//! - Draw-without-replacement over the catalog, with filled grid slots
//! - A drag-operated reset lever with a release threshold
//! - A transient stretch pulse for draw feedback
//!
//! # Quick Start
//!
//! ```
//! use gashapon_core::{GashaponSession, LeverRelease, SessionConfig, TrackGeometry};
//!
//! let mut session = GashaponSession::new(SessionConfig::new().with_seed(7)).unwrap();
//!
//! let item = session.draw(0.0).unwrap();
//! println!("Got {} (slot {})", item.title, item.id);
//!
//! // Pull the lever most of the way along a 100px track and let go.
//! session.set_track(TrackGeometry::new(0.0, 100.0));
//! session.press_lever();
//! session.move_lever(10.0);
//! assert_eq!(session.release_lever(), LeverRelease::Triggered);
//! assert_eq!(session.snapshot(0.0).pool_len, 16);
//! ```

pub mod catalog;
pub mod draw;
pub mod grid;
pub mod lever;
pub mod pulse;
pub mod session;
pub mod testing;

// Primary public API
pub use catalog::{Catalog, CatalogError, Item};
pub use draw::DrawEngine;
pub use grid::SlotGrid;
pub use lever::{LeverRelease, LeverTracker, TrackGeometry};
pub use pulse::StretchPulse;
pub use session::{GashaponSession, SessionConfig, SessionError, SessionSnapshot};
pub use testing::TestHarness;
