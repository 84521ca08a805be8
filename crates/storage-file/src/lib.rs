//! File storage implementation for WorthAI.
//!
//! The persistence model is a single named slot holding the whole serialized
//! estimate collection as one JSON blob: a read returns the full blob or
//! "absent", a write replaces it. This crate is the only place in the
//! application that touches the filesystem; everything else works against
//! the repository trait defined in `worthai-core`.

pub mod errors;
pub mod history;

pub use history::FileHistoryRepository;
