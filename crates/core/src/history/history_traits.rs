//! Repository and service traits for the history store.

use async_trait::async_trait;

use crate::errors::Result;
use crate::history::{EstimateRecord, NewEstimate};

/// Persistence collaborator for the estimate collection.
///
/// The backing store is a single named slot holding the whole serialized
/// collection; there is no partial write. Every mutation on the service is
/// therefore a read-modify-write of the full collection, and two concurrent
/// mutations can lose an update (last write wins). Callers that need
/// stronger guarantees must serialize mutations themselves.
#[async_trait]
pub trait HistoryRepositoryTrait: Send + Sync {
    /// Load the stored collection in persisted order, empty if nothing has
    /// been persisted yet.
    fn load_all(&self) -> Result<Vec<EstimateRecord>>;

    /// Replace the stored collection wholesale.
    async fn save_all(&self, records: &[EstimateRecord]) -> Result<()>;
}

/// Trait for history store operations.
#[async_trait]
pub trait HistoryServiceTrait: Send + Sync {
    /// All records, most recent first.
    fn load_all(&self) -> Result<Vec<EstimateRecord>>;

    /// Save an accepted analysis at the front of the collection.
    async fn append(&self, new_estimate: NewEstimate) -> Result<EstimateRecord>;

    /// Record the actual sale/purchase price for a record, recomputing its
    /// profit and tone together. A missing id is a no-op, not an error.
    async fn record_actual_price(&self, id: i64, amount: i64) -> Result<Option<EstimateRecord>>;

    /// Delete one record. Returns whether anything was removed.
    async fn remove_by_id(&self, id: i64) -> Result<bool>;

    /// Delete the whole history.
    async fn clear(&self) -> Result<()>;
}
