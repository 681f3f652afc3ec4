use bigdecimal::BigDecimal;

use crate::domain::catalog::PriceTable;
use crate::domain::errors::DomainError;
use crate::domain::insights::{Prediction, PredictionDashboard, SalesReport, Stats};
use crate::domain::order::{OrderForm, PlacedOrder, PricedHistoricalOrder};
use crate::domain::ports::{KeyValueStore, OrderingApi};
use crate::domain::pricing::PricedOrder;
use crate::domain::profile::Profile;
use crate::domain::session::SessionContext;

/// One operation per screen of the ordering app.
///
/// Owns the session: everything except login, quoting and the mock
/// dashboard needs a logged-in user and fails with
/// [`DomainError::Unauthenticated`] otherwise.
pub struct OrderingService<A, S> {
    api: A,
    store: S,
    session: SessionContext,
    prices: PriceTable,
    max_quantity: BigDecimal,
}

impl<A: OrderingApi, S: KeyValueStore> OrderingService<A, S> {
    pub fn new(api: A, store: S, prices: PriceTable, max_quantity: BigDecimal) -> Self {
        Self {
            api,
            store,
            session: SessionContext::new(),
            prices,
            max_quantity,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read the persisted session; returns the logged-in phone, if any.
    pub fn restore_session(&mut self) -> Option<&str> {
        self.session.load(&self.store);
        self.session.phone()
    }

    pub async fn login(&mut self, phone: &str, password: &str) -> Result<Option<String>, DomainError> {
        let phone = phone.trim();
        if phone.is_empty() || password.is_empty() {
            return Err(DomainError::InvalidInput(
                "phone number and password are required".to_string(),
            ));
        }
        log::info!("Attempting login for {}", phone);
        let message = self.api.login(phone, password).await?;
        self.session.save(&self.store, phone)?;
        Ok(message)
    }

    /// Forget the local session. The server-side logout is best effort.
    pub async fn logout(&mut self) -> Result<(), DomainError> {
        self.session.clear(&self.store)?;
        if let Err(e) = self.api.logout().await {
            log::warn!("Logout API error (non-critical): {}", e);
        }
        Ok(())
    }

    pub async fn submit_sales(&self, bread_count: &str, waste_weight: &str) -> Result<Option<String>, DomainError> {
        let phone = self.session.require_phone()?;
        let report = SalesReport::from_raw(bread_count, waste_weight);
        log::info!("Submitting sales for {}", phone);
        self.api.submit_sales(phone, &report).await
    }

    /// Live total for the form as typed so far.
    pub fn quote(&self, form: &OrderForm) -> PricedOrder {
        form.quote(&self.prices)
    }

    pub async fn place_order(&self, form: &OrderForm) -> Result<PlacedOrder, DomainError> {
        let phone = self.session.require_phone()?;
        let submission = form.submit(phone, &self.prices, &self.max_quantity)?;
        log::info!("Placing order for {}", phone);
        let order_id = self.api.place_order(&submission).await?;
        log::info!("Order {} accepted", order_id);
        Ok(PlacedOrder {
            order_id,
            priced: submission.priced(&self.prices),
        })
    }

    /// The stored profile, or an empty one carrying the session phone.
    pub async fn load_profile(&self) -> Result<Profile, DomainError> {
        let phone = self.session.require_phone()?;
        let profile = self.api.fetch_profile(phone).await?;
        Ok(profile.unwrap_or_else(|| Profile {
            phone: phone.to_string(),
            ..Profile::default()
        }))
    }

    pub async fn save_profile(&self, profile: &Profile) -> Result<Option<String>, DomainError> {
        self.session.require_phone()?;
        profile.validate()?;
        self.api.save_profile(profile).await
    }

    /// Save the delivery details, then confirm the order if there is one.
    pub async fn confirm_order(&self, order_id: Option<&str>, profile: &Profile) -> Result<(), DomainError> {
        self.save_profile(profile).await?;
        if let Some(order_id) = order_id {
            self.api.confirm_order(order_id).await?;
            log::info!("Order {} confirmed", order_id);
        }
        Ok(())
    }

    /// Past orders with totals recomputed from their items.
    pub async fn order_history(&self) -> Result<Vec<PricedHistoricalOrder>, DomainError> {
        let phone = self.session.require_phone()?;
        let orders = self.api.order_history(phone).await?;
        log::debug!("Fetched {} orders for {}", orders.len(), phone);
        Ok(orders
            .into_iter()
            .map(|order| PricedHistoricalOrder {
                priced: order.priced(&self.prices),
                order,
            })
            .collect())
    }

    pub async fn stats(&self) -> Result<Stats, DomainError> {
        let phone = self.session.require_phone()?;
        self.api.stats(phone).await
    }

    pub async fn prediction(&self) -> Result<Prediction, DomainError> {
        let phone = self.session.require_phone()?;
        self.api.prediction(phone).await
    }

    pub fn prediction_dashboard(&self) -> PredictionDashboard {
        PredictionDashboard::mock()
    }
}
