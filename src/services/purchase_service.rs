//! Purchase integration boundary for Markd.
//!
//! A plain service object constructed with an injected store backend and an
//! explicit `open`/`close` lifecycle. Receipt validation is the store's
//! concern; the only effect crossing this boundary is "subscription becomes
//! active" on the injected subscription state.

use crate::config::SUBSCRIPTION_PRODUCT_ID;
use crate::services::subscription_service::SubscriptionServiceTrait;
use crate::types::errors::PurchaseError;
use crate::types::purchase::{Product, Purchase};

/// Platform store boundary (StoreKit / Play Billing / test double).
pub trait PurchaseBackend {
    fn fetch_products(&mut self, product_ids: &[&str]) -> Result<Vec<Product>, PurchaseError>;
    fn request_purchase(&mut self, product_id: &str) -> Result<Purchase, PurchaseError>;
    fn restore_purchases(&mut self) -> Result<Vec<Purchase>, PurchaseError>;
}

/// Purchase service over an injected backend.
///
/// Every operation except `open`/`close` requires the service to be open;
/// `close` releases the backend session state and a closed service can be
/// re-opened.
pub struct PurchaseService<B: PurchaseBackend> {
    backend: B,
    products: Vec<Product>,
    open: bool,
}

impl<B: PurchaseBackend> PurchaseService<B> {
    /// Creates a closed service. Call [`open`](Self::open) before use.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            products: Vec::new(),
            open: false,
        }
    }

    /// Opens the store connection and loads the subscription product.
    pub fn open(&mut self) -> Result<(), PurchaseError> {
        self.products = self.backend.fetch_products(&[SUBSCRIPTION_PRODUCT_ID])?;
        self.open = true;
        Ok(())
    }

    /// Closes the store connection. Idempotent.
    pub fn close(&mut self) {
        self.products.clear();
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Products loaded at `open`.
    pub fn available_products(&self) -> &[Product] {
        &self.products
    }

    /// Purchases `product_id` and, on completion, activates the subscription
    /// on `subscription`.
    pub fn purchase_subscription(
        &mut self,
        product_id: &str,
        subscription: &mut dyn SubscriptionServiceTrait,
    ) -> Result<Purchase, PurchaseError> {
        if !self.open {
            return Err(PurchaseError::NotOpen);
        }
        if !self.products.iter().any(|p| p.id == product_id) {
            return Err(PurchaseError::ProductNotFound(product_id.to_string()));
        }

        let purchase = self.backend.request_purchase(product_id)?;
        subscription
            .activate_subscription_with_product(&purchase.product_id, None)
            .map_err(|e| PurchaseError::Backend(format!("activation failed: {}", e)))?;
        Ok(purchase)
    }

    /// Restores prior purchases; a non-empty result re-activates the
    /// subscription.
    pub fn restore(
        &mut self,
        subscription: &mut dyn SubscriptionServiceTrait,
    ) -> Result<Vec<Purchase>, PurchaseError> {
        if !self.open {
            return Err(PurchaseError::NotOpen);
        }

        let purchases = self.backend.restore_purchases()?;
        if let Some(latest) = purchases.last() {
            subscription
                .activate_subscription_with_product(&latest.product_id, None)
                .map_err(|e| PurchaseError::Backend(format!("activation failed: {}", e)))?;
        }
        Ok(purchases)
    }
}
