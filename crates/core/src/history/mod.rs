//! History module - the persisted estimate collection and its store.

mod history_model;
mod history_service;
mod history_traits;

pub use history_model::{EstimateRecord, NewEstimate, ProfitTone, TransactionType};
pub use history_service::HistoryService;
pub use history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};
