//! Core library for sprout: plant records, the tab-separated line codec,
//! the owned collection, and flat-file persistence.
//!
//! The CLI crate is a thin driver; every invariant and failure policy
//! lives here. Bulk operations report recoverable conditions through the
//! [`observer::EventSink`] seam instead of a process-wide logger.

pub mod codec;
pub mod collection;
pub mod observer;
pub mod record;
pub mod store;

pub use codec::ParseError;
pub use collection::{IndexError, PlantCollection};
pub use observer::{CapturingSink, Event, EventSink, TracingSink};
pub use record::{PlantError, PlantRecord};
pub use store::StoreError;
