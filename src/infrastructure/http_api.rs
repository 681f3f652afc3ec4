use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::insights::{Prediction, SalesReport, Stats};
use crate::domain::order::{HistoricalOrder, OrderSubmission};
use crate::domain::ports::OrderingApi;
use crate::domain::profile::Profile;

use super::models::{
    ApiReply, ConfirmOrderRequest, HistoricalOrderDto, LoginRequest, OrderRequest, ProfileDto,
    ProfileRequest, SalesRequest, StatsDto,
};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Backend(e.to_string())
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

/// [`OrderingApi`] over the backend's REST endpoints.
pub struct HttpOrderingApi {
    client: Client,
    base: Url,
}

impl HttpOrderingApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let base = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidInput(format!("API base URL '{}': {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(DomainError::InvalidInput(format!(
                "API base URL '{}' cannot have paths appended",
                base_url
            )));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `base` joined with `segments`, each percent-encoded as a path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::Internal(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn post<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<Response, DomainError> {
        let url = self.endpoint(segments)?;
        log::info!("POST {}", url);
        let resp = self.client.post(url).json(body).send().await?;
        ensure_success(resp)
    }

    async fn get(&self, segments: &[&str]) -> Result<Response, DomainError> {
        let url = self.endpoint(segments)?;
        log::info!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        ensure_success(resp)
    }

    /// POST and unwrap the `{ success, message }` envelope.
    async fn post_expecting_success<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        rejected: &str,
    ) -> Result<ApiReply, DomainError> {
        let reply: ApiReply = self.post(segments, body).await?.json().await?;
        log::debug!("{} replied success={} message={:?}", segments.join("/"), reply.success, reply.message);
        if reply.success {
            Ok(reply)
        } else {
            let message = reply
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| rejected.to_string());
            Err(DomainError::Rejected(message))
        }
    }
}

fn ensure_success(resp: Response) -> Result<Response, DomainError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else if status == StatusCode::NOT_FOUND {
        Err(DomainError::NotFound)
    } else {
        Err(DomainError::Backend(format!("HTTP error! status: {}", status)))
    }
}

impl OrderingApi for HttpOrderingApi {
    async fn login(&self, phone: &str, password: &str) -> Result<Option<String>, DomainError> {
        let reply = self
            .post_expecting_success(&["login"], &LoginRequest { phone, password }, "Login failed")
            .await?;
        Ok(reply.message)
    }

    async fn logout(&self) -> Result<(), DomainError> {
        let url = self.endpoint(&["logout"])?;
        log::info!("POST {}", url);
        let resp = self.client.post(url).send().await?;
        ensure_success(resp)?;
        Ok(())
    }

    async fn submit_sales(&self, user_phone: &str, report: &SalesReport) -> Result<Option<String>, DomainError> {
        let reply = self
            .post_expecting_success(
                &["sales"],
                &SalesRequest::new(user_phone, report),
                "Could not save sales data",
            )
            .await?;
        Ok(reply.message)
    }

    async fn place_order(&self, submission: &OrderSubmission) -> Result<String, DomainError> {
        let reply = self
            .post_expecting_success(&["orders"], &OrderRequest::from(submission), "Could not place order")
            .await?;
        reply
            .order_id()
            .ok_or_else(|| DomainError::Backend("order accepted without an orderId".to_string()))
    }

    async fn confirm_order(&self, order_id: &str) -> Result<(), DomainError> {
        self.post_expecting_success(
            &["confirm-order"],
            &ConfirmOrderRequest { order_id },
            "Could not confirm order",
        )
        .await?;
        Ok(())
    }

    async fn fetch_profile(&self, phone: &str) -> Result<Option<Profile>, DomainError> {
        let resp = match self.get(&["profiles", phone]).await {
            Ok(resp) => resp,
            Err(DomainError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        let dto: Option<ProfileDto> = resp.json().await?;
        Ok(dto.map(|d| d.into_profile(phone)))
    }

    async fn save_profile(&self, profile: &Profile) -> Result<Option<String>, DomainError> {
        let reply = self
            .post_expecting_success(&["profiles"], &ProfileRequest::from(profile), "Could not save profile")
            .await?;
        Ok(reply.message)
    }

    async fn order_history(&self, phone: &str) -> Result<Vec<HistoricalOrder>, DomainError> {
        let orders: Vec<HistoricalOrderDto> = self.get(&["orders", phone]).await?.json().await?;
        Ok(orders.into_iter().map(HistoricalOrder::from).collect())
    }

    async fn stats(&self, phone: &str) -> Result<Stats, DomainError> {
        let dto: StatsDto = self.get(&["stats", phone]).await?.json().await?;
        Ok(dto.into())
    }

    async fn prediction(&self, phone: &str) -> Result<Prediction, DomainError> {
        let raw: Value = self.get(&["predictions", phone]).await?.json().await?;
        Ok(Prediction { raw })
    }
}
