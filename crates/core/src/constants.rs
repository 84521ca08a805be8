/// Name of the persistence slot holding the whole estimate history.
pub const HISTORY_STORAGE_KEY: &str = "priceHistory";

/// Display symbol for the base currency.
pub const CURRENCY_SYMBOL: &str = "₦";

/// ISO code of the base currency.
pub const BASE_CURRENCY: &str = "NGN";

/// Thumbnail glyph used when an estimate has no image attached.
pub const TEXT_THUMBNAIL: &str = "📝";

/// Display sentinel for a record whose actual price is not yet known.
pub const PROFIT_PENDING: &str = "Not sold yet";

/// Display token for a resolved record whose stored range cannot be
/// parsed, so no profit can be computed. Distinct from [`PROFIT_PENDING`]:
/// a record shows the pending sentinel only while it has no actual price.
pub const PROFIT_UNAVAILABLE: &str = "Unavailable";

/// Fallback price range when the model gives no usable range.
pub const FALLBACK_RANGE_MIN: i64 = 1_000;
pub const FALLBACK_RANGE_MAX: i64 = 5_000;

/// Confidence forced onto a fallback range.
pub const FALLBACK_CONFIDENCE: u8 = 30;

/// Confidence assumed when the model reply carries none.
pub const DEFAULT_CONFIDENCE: u8 = 50;
