use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::analytics::compute_profit;
use crate::constants::{CURRENCY_SYMBOL, PROFIT_UNAVAILABLE};
use crate::errors::Result;
use crate::history::history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};
use crate::history::{EstimateRecord, NewEstimate, ProfitTone};
use crate::money::format_amount;

/// History store: the five operations over the persisted collection.
///
/// Every mutation is a read-modify-write of the whole collection, since the
/// collaborator offers no partial persistence primitive. Mutations are
/// serialized through a single lock so a delete racing a price edit cannot
/// silently lose a write; a mutation that finds its record already gone is
/// still a tolerated no-op, not an error.
pub struct HistoryService {
    history_repository: Arc<dyn HistoryRepositoryTrait>,
    write_lock: tokio::sync::Mutex<()>,
}

impl HistoryService {
    pub fn new(history_repository: Arc<dyn HistoryRepositoryTrait>) -> Self {
        HistoryService {
            history_repository,
            write_lock: tokio::sync::Mutex::new(()),
        }
    }
}

#[async_trait]
impl HistoryServiceTrait for HistoryService {
    fn load_all(&self) -> Result<Vec<EstimateRecord>> {
        self.history_repository.load_all()
    }

    async fn append(&self, new_estimate: NewEstimate) -> Result<EstimateRecord> {
        let _guard = self.write_lock.lock().await;
        let record = EstimateRecord::from_analysis(new_estimate, Utc::now());
        let mut records = self.history_repository.load_all()?;
        records.insert(0, record.clone());
        self.history_repository.save_all(&records).await?;
        Ok(record)
    }

    async fn record_actual_price(&self, id: i64, amount: i64) -> Result<Option<EstimateRecord>> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.history_repository.load_all()?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            // The record may have been deleted since the edit started; a
            // missing id is tolerated as a no-op.
            debug!("record_actual_price: id {} not found, skipping", id);
            return Ok(None);
        };

        record.actual_price = format_amount(amount, CURRENCY_SYMBOL);
        match compute_profit(&record.ai_price_range, amount) {
            Some(outcome) => {
                record.profit = outcome.display;
                record.profit_color = outcome.tone;
            }
            None => {
                // Malformed range from older data: the record is resolved
                // but no profit can be computed, so it gets the unavailable
                // token and stays out of the aggregates. The pending
                // sentinel is reserved for records without an actual price.
                record.profit = PROFIT_UNAVAILABLE.to_string();
                record.profit_color = ProfitTone::Neutral;
            }
        }

        let updated = record.clone();
        self.history_repository.save_all(&records).await?;
        Ok(Some(updated))
    }

    async fn remove_by_id(&self, id: i64) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.history_repository.load_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() < before;
        self.history_repository.save_all(&records).await?;
        Ok(removed)
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.history_repository.save_all(&[]).await
    }
}
