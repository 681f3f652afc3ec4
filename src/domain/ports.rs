use std::future::Future;

use super::errors::DomainError;
use super::insights::{Prediction, SalesReport, Stats};
use super::order::{HistoricalOrder, OrderSubmission};
use super::profile::Profile;

/// Local persistence for small string values that must survive restarts.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}

/// The ordering backend.
///
/// Implementations turn a `{ "success": false }` reply into
/// [`DomainError::Rejected`] and transport or status failures into
/// [`DomainError::Backend`]. Methods that return `Option<String>` yield the
/// server's confirmation message, if it sent one.
pub trait OrderingApi: Send + Sync + 'static {
    fn login(
        &self,
        phone: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<String>, DomainError>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), DomainError>> + Send;

    fn submit_sales(
        &self,
        user_phone: &str,
        report: &SalesReport,
    ) -> impl Future<Output = Result<Option<String>, DomainError>> + Send;

    /// Returns the backend's id for the new order.
    fn place_order(
        &self,
        submission: &OrderSubmission,
    ) -> impl Future<Output = Result<String, DomainError>> + Send;

    fn confirm_order(&self, order_id: &str) -> impl Future<Output = Result<(), DomainError>> + Send;

    fn fetch_profile(
        &self,
        phone: &str,
    ) -> impl Future<Output = Result<Option<Profile>, DomainError>> + Send;

    fn save_profile(
        &self,
        profile: &Profile,
    ) -> impl Future<Output = Result<Option<String>, DomainError>> + Send;

    fn order_history(
        &self,
        phone: &str,
    ) -> impl Future<Output = Result<Vec<HistoricalOrder>, DomainError>> + Send;

    fn stats(&self, phone: &str) -> impl Future<Output = Result<Stats, DomainError>> + Send;

    fn prediction(&self, phone: &str) -> impl Future<Output = Result<Prediction, DomainError>> + Send;
}
