use std::sync::Arc;

use sqlx::PgPool;

use stitchkart_checkout::{
    CheckoutSequencer, CustomerStore, OrderStore, PaymentGateway, VariantStore,
};
use stitchkart_infra::{
    InMemoryCustomerStore, InMemoryOrderStore, InMemoryVariantStore, PostgresCustomerStore,
    PostgresOrderStore, PostgresVariantStore, RazorpayGateway, StubPaymentGateway,
};

/// Sequencer over trait objects so both wirings share one type.
pub type AppSequencer = CheckoutSequencer<
    Arc<dyn VariantStore>,
    Arc<dyn CustomerStore>,
    Arc<dyn OrderStore>,
    Arc<dyn PaymentGateway>,
>;

/// Handles kept on the in-memory stores for dev seeding and inspection.
/// Absent when running against Postgres.
pub struct DevStores {
    pub variants: Arc<InMemoryVariantStore>,
    pub orders: Arc<InMemoryOrderStore>,
}

pub struct AppServices {
    sequencer: AppSequencer,
    dev: Option<DevStores>,
}

impl AppServices {
    pub fn sequencer(&self) -> &AppSequencer {
        &self.sequencer
    }

    pub fn dev(&self) -> Option<&DevStores> {
        self.dev.as_ref()
    }

    /// In-memory wiring with an explicit gateway (tests).
    pub fn in_memory_with_gateway(gateway: Arc<dyn PaymentGateway>) -> Self {
        let variants = Arc::new(InMemoryVariantStore::new());
        let customers = Arc::new(InMemoryCustomerStore::new());
        let orders = Arc::new(InMemoryOrderStore::new());

        let sequencer = CheckoutSequencer::new(
            variants.clone() as Arc<dyn VariantStore>,
            customers as Arc<dyn CustomerStore>,
            orders.clone() as Arc<dyn OrderStore>,
            gateway,
        );

        Self {
            sequencer,
            dev: Some(DevStores { variants, orders }),
        }
    }
}

/// Wire services from the environment.
///
/// `USE_PERSISTENT_STORES=true` selects Postgres (requires `DATABASE_URL`
/// and Razorpay credentials); anything else runs fully in-memory, with the
/// stub gateway unless Razorpay credentials are present.
pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        build_persistent_services().await
    } else {
        build_in_memory_services()
    }
}

fn razorpay_from_env() -> Option<RazorpayGateway> {
    let key_id = std::env::var("RAZORPAY_KEY_ID").ok()?;
    let key_secret = std::env::var("RAZORPAY_KEY_SECRET").ok()?;
    Some(RazorpayGateway::new(key_id, key_secret))
}

fn build_in_memory_services() -> AppServices {
    let gateway: Arc<dyn PaymentGateway> = match razorpay_from_env() {
        Some(gw) => Arc::new(gw),
        None => {
            tracing::warn!("RAZORPAY_KEY_ID not set; using stub payment gateway");
            Arc::new(StubPaymentGateway::default())
        }
    };
    AppServices::in_memory_with_gateway(gateway)
}

async fn build_persistent_services() -> AppServices {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    let gateway = razorpay_from_env()
        .expect("RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET must be set when USE_PERSISTENT_STORES=true");

    let sequencer = CheckoutSequencer::new(
        Arc::new(PostgresVariantStore::new(pool.clone())) as Arc<dyn VariantStore>,
        Arc::new(PostgresCustomerStore::new(pool.clone())) as Arc<dyn CustomerStore>,
        Arc::new(PostgresOrderStore::new(pool)) as Arc<dyn OrderStore>,
        Arc::new(gateway) as Arc<dyn PaymentGateway>,
    );

    AppServices {
        sequencer,
        dev: None,
    }
}
