use serde::{Deserialize, Serialize};

/// A purchasable subscription product, as reported by the store backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Display price, already localized by the store (e.g. "$9.99").
    pub price: String,
    /// Billing period, e.g. "year".
    pub duration: String,
}

/// A completed or restored purchase receipt.
///
/// Cryptographic receipt validation happens on the store side; this type only
/// carries the boundary effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub product_id: String,
    pub transaction_id: String,
    /// Epoch milliseconds.
    pub purchased_at: i64,
}
