use axum::Router;

pub mod catalog;
pub mod checkout;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .merge(system::router())
        .merge(checkout::router())
        .merge(catalog::router())
}
