//! In-memory store implementations (dev/test).
//!
//! `Mutex<HashMap>` keyed stores, cheap to seed and inspect. Not for
//! production: nothing survives a restart.

use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;

use stitchkart_catalog::{Sku, Variant};
use stitchkart_checkout::{
    CustomerStore, GatewayError, GatewayOrder, GatewayOrderRequest, OrderStore, PaymentGateway,
    StoreError, VariantStore,
};
use stitchkart_core::CustomerId;
use stitchkart_customers::{Customer, NewCustomer};
use stitchkart_orders::{NewOrder, NewOrderLineItem};

/// In-memory variant catalog.
#[derive(Debug, Default)]
pub struct InMemoryVariantStore {
    variants: Mutex<HashMap<Sku, Variant>>,
}

impl InMemoryVariantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a variant (dev seeding).
    pub fn upsert(&self, variant: Variant) {
        self.variants
            .lock()
            .unwrap()
            .insert(variant.sku.clone(), variant);
    }

    pub fn len(&self) -> usize {
        self.variants.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl VariantStore for InMemoryVariantStore {
    async fn find_by_skus(&self, skus: &[Sku]) -> Result<Vec<Variant>, StoreError> {
        let variants = self.variants.lock().unwrap();
        Ok(skus.iter().filter_map(|s| variants.get(s).cloned()).collect())
    }
}

/// In-memory customer directory with session linkage.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    by_id: Mutex<HashMap<CustomerId, Customer>>,
    by_session: Mutex<HashMap<String, CustomerId>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, customer: Customer) {
        self.by_id.lock().unwrap().insert(customer.id, customer);
    }

    pub fn link_session(&self, token: impl Into<String>, id: CustomerId) {
        self.by_session.lock().unwrap().insert(token.into(), id);
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        Ok(self.by_id.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_session(&self, session_token: &str) -> Result<Option<Customer>, StoreError> {
        let id = match self.by_session.lock().unwrap().get(session_token) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.by_id.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, new: NewCustomer) -> Result<Customer, StoreError> {
        let customer = Customer {
            id: CustomerId::new(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            created_at: Utc::now(),
        };
        if let Some(token) = new.session_token {
            self.by_session.lock().unwrap().insert(token, customer.id);
        }
        self.by_id
            .lock()
            .unwrap()
            .insert(customer.id, customer.clone());
        Ok(customer)
    }
}

/// In-memory order log; keeps insertion order for inspection.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<Vec<NewOrder>>,
    line_items: Mutex<Vec<NewOrderLineItem>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> Vec<NewOrder> {
        self.orders.lock().unwrap().clone()
    }

    pub fn line_items(&self) -> Vec<NewOrderLineItem> {
        self.line_items.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert_order(&self, order: &NewOrder) -> Result<(), StoreError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn insert_line_items(&self, items: &[NewOrderLineItem]) -> Result<(), StoreError> {
        self.line_items.lock().unwrap().extend_from_slice(items);
        Ok(())
    }
}

/// Deterministic gateway double for dev mode and tests.
///
/// Hands out sequential order ids and never talks to the network. Wired in
/// when no Razorpay credentials are configured.
#[derive(Debug)]
pub struct StubPaymentGateway {
    counter: AtomicU64,
    public_key: String,
}

impl StubPaymentGateway {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            public_key: public_key.into(),
        }
    }
}

impl Default for StubPaymentGateway {
    fn default() -> Self {
        Self::new("rzp_test_stub")
    }
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn create_order(
        &self,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrder, GatewayError> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(GatewayOrder {
            id: format!("order_stub{n:08}"),
            amount: request.amount.as_u64(),
            currency: request.currency.clone(),
            status: "created".to_string(),
        })
    }

    fn provider(&self) -> &str {
        "razorpay"
    }

    fn public_key(&self) -> &str {
        &self.public_key
    }
}
