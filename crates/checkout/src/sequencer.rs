//! The checkout order sequencer.

use chrono::Utc;

use stitchkart_catalog::{Variant, check_stock};
use stitchkart_core::{MIN_CHARGEABLE, OrderId, Paise, Phone, Pincode};
use stitchkart_customers::{Address, CheckoutSource, Customer, NewCustomer};
use stitchkart_orders::{
    NewOrder, NewOrderLineItem, OrderMetadata, OrderNumber, OrderStatus, OrderTotals,
    PaymentStatus, PricedItemSnapshot, ShippingStatus,
};

use crate::error::CheckoutError;
use crate::gateway::{GatewayError, GatewayNotes, GatewayOrderRequest, PaymentGateway};
use crate::request::{CartLine, CheckoutRequest};
use crate::stores::{CustomerStore, OrderStore, VariantStore};

/// Success payload: everything the caller's payment widget needs to proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub subtotal: Paise,
    pub shipping_fee: Paise,
    pub total: Paise,
    pub provider: String,
    pub gateway_order_id: String,
    pub gateway_public_key: String,
}

struct PricedLine {
    line: CartLine,
    unit_price: Paise,
    subtotal: Paise,
}

/// Executes the checkout pipeline against injected collaborators.
///
/// Stateless across requests; safe to share behind an `Arc`.
pub struct CheckoutSequencer<V, C, O, G> {
    variants: V,
    customers: C,
    orders: O,
    gateway: G,
}

impl<V, C, O, G> CheckoutSequencer<V, C, O, G>
where
    V: VariantStore,
    C: CustomerStore,
    O: OrderStore,
    G: PaymentGateway,
{
    pub fn new(variants: V, customers: C, orders: O, gateway: G) -> Self {
        Self {
            variants,
            customers,
            orders,
            gateway,
        }
    }

    /// Run the pipeline: either a durably persisted order bound to a valid
    /// gateway order comes back, or an error with no partial local state.
    pub async fn execute(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        validate_cart_shape(&request.items)?;

        // Read-only stock check; must precede every external side effect.
        // The fetched variants are reused later for line-item unit costs.
        let variants = self.validate_stock(&request.items).await?;

        let phone = Phone::normalize(&request.customer.phone)
            .map_err(|e| CheckoutError::validation("phone", e.to_string()))?;
        let address = normalize_address(&request)?;
        let source = CheckoutSource::from_tag(request.checkout_source.as_deref());

        let customer = self.resolve_customer(&request, &phone, source).await?;

        let (lines, subtotal) = price_lines(&request.items)?;
        let totals = OrderTotals::from_subtotal(subtotal);
        if totals.total < MIN_CHARGEABLE {
            return Err(CheckoutError::AmountBelowMinimum {
                total: totals.total,
                minimum: MIN_CHARGEABLE,
            });
        }

        let now = Utc::now();
        let order_id = OrderId::new();
        let order_number = OrderNumber::generate(now);

        // External order first. If this fails, no local row is ever written.
        let gateway_order = self
            .gateway
            .create_order(&GatewayOrderRequest {
                amount: totals.total,
                currency: "INR".to_string(),
                receipt: order_number.clone(),
                notes: GatewayNotes {
                    order_number: order_number.clone(),
                    customer_name: request.customer.name.clone(),
                    customer_phone: phone.clone(),
                },
            })
            .await
            .inspect_err(|e| {
                tracing::warn!(order_number = %order_number, error = %e, "gateway order creation failed");
            })?;
        if gateway_order.id.is_empty() {
            return Err(GatewayError::MissingOrderId.into());
        }

        let metadata = OrderMetadata {
            customer_name: request.customer.name.clone(),
            customer_email: request.customer.email.clone(),
            customer_phone: phone.clone(),
            address,
            items: lines
                .iter()
                .map(|l| PricedItemSnapshot {
                    sku: l.line.sku.clone(),
                    product_id: l.line.product_id,
                    name: l.line.name.clone(),
                    size: l.line.size.clone(),
                    quantity: l.line.quantity,
                    unit_price: l.unit_price,
                    subtotal: l.subtotal,
                })
                .collect(),
            checkout_source: source.as_str().to_string(),
            guest_session_id: request.guest_session_id.clone(),
        };

        let order = NewOrder {
            id: order_id,
            number: order_number.clone(),
            customer_id: customer.as_ref().map(|c| c.id),
            totals,
            status: OrderStatus::Created,
            payment_status: PaymentStatus::Pending,
            shipping_status: ShippingStatus::Pending,
            gateway_order_id: gateway_order.id.clone(),
            metadata,
            created_at: now,
        };

        if let Err(e) = self.orders.insert_order(&order).await {
            // Orphaned gateway order: accepted, it expires unused.
            tracing::warn!(
                order_number = %order_number,
                gateway_order_id = %gateway_order.id,
                error = %e,
                "order insert failed after gateway order creation"
            );
            return Err(e.into());
        }

        let items: Vec<NewOrderLineItem> = lines
            .iter()
            .map(|l| NewOrderLineItem {
                order_id,
                sku: l.line.sku.clone(),
                product_id: l.line.product_id,
                name: l.line.name.clone(),
                size: l.line.size.clone(),
                quantity: l.line.quantity,
                unit_price: l.unit_price,
                unit_cost: variants
                    .iter()
                    .find(|v| v.sku == l.line.sku)
                    .map(|v| v.cost)
                    .unwrap_or(Paise::ZERO),
                subtotal: l.subtotal,
            })
            .collect();

        // Non-fatal: the order row is the unit of success.
        if let Err(e) = self.orders.insert_line_items(&items).await {
            tracing::warn!(order_number = %order_number, error = %e, "line item insert failed");
        }

        tracing::info!(
            order_number = %order_number,
            gateway_order_id = %gateway_order.id,
            total_paise = totals.total.as_u64(),
            "order created"
        );

        Ok(CheckoutReceipt {
            order_id,
            order_number,
            subtotal: totals.subtotal,
            shipping_fee: totals.shipping_fee,
            total: totals.total,
            provider: self.gateway.provider().to_string(),
            gateway_order_id: gateway_order.id,
            gateway_public_key: self.gateway.public_key().to_string(),
        })
    }

    /// Runs the read-only stock check and hands back the fetched variants,
    /// so later steps (line-item unit costs) reuse the same read.
    async fn validate_stock(&self, items: &[CartLine]) -> Result<Vec<Variant>, CheckoutError> {
        let mut skus: Vec<_> = items.iter().map(|l| l.sku.clone()).collect();
        skus.sort();
        skus.dedup();

        let variants = self.variants.find_by_skus(&skus).await?;
        let failures = check_stock(items.iter().map(|l| (&l.sku, l.quantity)), &variants);
        if failures.is_empty() {
            Ok(variants)
        } else {
            Err(CheckoutError::StockConflict(failures))
        }
    }

    /// Customer resolution, first match wins: caller-supplied id, then the
    /// authenticated session's linked customer (created on the fly if the
    /// session has none), otherwise guest.
    async fn resolve_customer(
        &self,
        request: &CheckoutRequest,
        phone: &Phone,
        source: CheckoutSource,
    ) -> Result<Option<Customer>, CheckoutError> {
        if let Some(id) = request.customer_id {
            if let Some(customer) = self.customers.find_by_id(id).await? {
                return Ok(Some(customer));
            }
        }

        if source.is_authenticated() {
            if let Some(token) = request.guest_session_id.as_deref() {
                if let Some(customer) = self.customers.find_by_session(token).await? {
                    return Ok(Some(customer));
                }
                let created = self
                    .customers
                    .create(NewCustomer {
                        name: request.customer.name.clone(),
                        email: request.customer.email.clone(),
                        phone: phone.clone(),
                        session_token: Some(token.to_string()),
                    })
                    .await?;
                return Ok(Some(created));
            }
        }

        Ok(None)
    }
}

fn validate_cart_shape(items: &[CartLine]) -> Result<(), CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::validation("items", "cart must not be empty"));
    }
    for line in items {
        if line.quantity == 0 {
            return Err(CheckoutError::validation(
                "items",
                format!("quantity for sku {} must be positive", line.sku),
            ));
        }
        if !line.price.is_finite() || line.price < 0.0 {
            return Err(CheckoutError::validation(
                "items",
                format!("price for sku {} must not be negative", line.sku),
            ));
        }
    }
    Ok(())
}

fn normalize_address(request: &CheckoutRequest) -> Result<Address, CheckoutError> {
    if request.customer.name.trim().is_empty() {
        return Err(CheckoutError::validation("name", "name must not be empty"));
    }
    if request.address.line1.trim().is_empty() {
        return Err(CheckoutError::validation(
            "address",
            "address line1 must not be empty",
        ));
    }
    if request.address.state.trim().is_empty() {
        return Err(CheckoutError::validation(
            "state",
            "state must not be empty",
        ));
    }
    let pincode = Pincode::normalize(&request.address.pincode)
        .map_err(|e| CheckoutError::validation("pincode", e.to_string()))?;

    Ok(Address {
        line1: request.address.line1.trim().to_string(),
        line2: request.address.line2.clone(),
        city: request.address.city.clone(),
        state: request.address.state.clone(),
        pincode,
        country: request
            .address
            .country
            .clone()
            .unwrap_or_else(|| Address::DEFAULT_COUNTRY.to_string()),
    })
}

fn price_lines(items: &[CartLine]) -> Result<(Vec<PricedLine>, Paise), CheckoutError> {
    let mut lines = Vec::with_capacity(items.len());
    let mut subtotal = Paise::ZERO;
    for item in items {
        let unit_price = Paise::from_rupees(item.price)
            .map_err(|e| CheckoutError::validation("items", e.to_string()))?;
        let line_subtotal = unit_price
            .checked_mul(item.quantity)
            .map_err(|e| CheckoutError::validation("items", e.to_string()))?;
        subtotal = subtotal
            .checked_add(line_subtotal)
            .map_err(|e| CheckoutError::validation("items", e.to_string()))?;
        lines.push(PricedLine {
            line: item.clone(),
            unit_price,
            subtotal: line_subtotal,
        });
    }
    Ok((lines, subtotal))
}
