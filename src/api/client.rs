//! Typed calls against the travel API endpoints

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{
    AgentCommissions, ItineraryDay, NewPayment, Payment, SaveItineraryDay, SaveTripFinancials,
    Trip, TripFinancials, YearlySummary,
};

/// HTTP client bound to one resolved base URL
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, auth: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match auth {
            Some(value) => builder.header(reqwest::header::AUTHORIZATION, value),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(path.to_string()));
        }
        Err(AppError::Upstream {
            status: status.as_u16(),
            path: path.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, auth: Option<&str>) -> Result<T> {
        tracing::debug!("GET {}", path);
        let response = self.send(self.request(Method::GET, path, auth), path).await?;
        decode(response, path).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B, auth: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("{} {}", method, path);
        let builder = self.request(method, path, auth).json(body);
        let response = self.send(builder, path).await?;
        decode(response, path).await
    }

    /// `GET /trips`
    pub async fn list_trips(&self, auth: Option<&str>) -> Result<Vec<Trip>> {
        self.get_json("/trips", auth).await
    }

    /// `GET /trips/{id}`
    pub async fn get_trip(&self, trip_id: Uuid, auth: Option<&str>) -> Result<Trip> {
        self.get_json(&format!("/trips/{}", trip_id), auth).await
    }

    /// `GET /trips/{id}/admin`
    pub async fn get_trip_financials(&self, trip_id: Uuid, auth: Option<&str>) -> Result<TripFinancials> {
        self.get_json(&format!("/trips/{}/admin", trip_id), auth).await
    }

    /// `POST /trips/{id}/admin` for a new record, `PUT /trip-admin/{id}` to replace one
    pub async fn save_trip_financials(
        &self,
        existing_id: Option<Uuid>,
        financials: &SaveTripFinancials,
        auth: Option<&str>,
    ) -> Result<TripFinancials> {
        match existing_id {
            Some(id) => {
                self.send_json(Method::PUT, &format!("/trip-admin/{}", id), financials, auth)
                    .await
            }
            None => {
                self.send_json(
                    Method::POST,
                    &format!("/trips/{}/admin", financials.trip_id),
                    financials,
                    auth,
                )
                .await
            }
        }
    }

    /// `GET /trip-admin/{id}/payments`
    pub async fn list_payments(&self, trip_admin_id: Uuid, auth: Option<&str>) -> Result<Vec<Payment>> {
        self.get_json(&format!("/trip-admin/{}/payments", trip_admin_id), auth)
            .await
    }

    /// `POST /trip-admin/{id}/payments`
    pub async fn create_payment(
        &self,
        trip_admin_id: Uuid,
        payment: &NewPayment,
        auth: Option<&str>,
    ) -> Result<Payment> {
        self.send_json(
            Method::POST,
            &format!("/trip-admin/{}/payments", trip_admin_id),
            payment,
            auth,
        )
        .await
    }

    /// `DELETE /payments/{id}`
    pub async fn delete_payment(&self, payment_id: Uuid, auth: Option<&str>) -> Result<()> {
        let path = format!("/payments/{}", payment_id);
        tracing::debug!("DELETE {}", path);
        self.send(self.request(Method::DELETE, &path, auth), &path)
            .await?;
        Ok(())
    }

    /// `GET /trips/{id}/itineraries`
    pub async fn list_itineraries(&self, trip_id: Uuid, auth: Option<&str>) -> Result<Vec<ItineraryDay>> {
        self.get_json(&format!("/trips/{}/itineraries", trip_id), auth)
            .await
    }

    /// `POST /itineraries` for a new day, `PUT /itineraries/{id}` to replace one
    pub async fn save_itinerary(
        &self,
        existing_id: Option<Uuid>,
        day: &SaveItineraryDay,
        auth: Option<&str>,
    ) -> Result<ItineraryDay> {
        match existing_id {
            Some(id) => {
                self.send_json(Method::PUT, &format!("/itineraries/{}", id), day, auth)
                    .await
            }
            None => self.send_json(Method::POST, "/itineraries", day, auth).await,
        }
    }

    /// `GET /analytics/yearly-summary/{year}`
    pub async fn yearly_summary(&self, year: i32, auth: Option<&str>) -> Result<YearlySummary> {
        self.get_json(&format!("/analytics/yearly-summary/{}", year), auth)
            .await
    }

    /// `GET /analytics/agent-commissions?year&agent_id`
    pub async fn agent_commissions(
        &self,
        year: i32,
        agent_id: Option<Uuid>,
        auth: Option<&str>,
    ) -> Result<AgentCommissions> {
        let path = match agent_id {
            Some(agent) => format!("/analytics/agent-commissions?year={}&agent_id={}", year, agent),
            None => format!("/analytics/agent-commissions?year={}", year),
        };
        self.get_json(&path, auth).await
    }
}

/// Parse a JSON body; a body that does not match the record shape is
/// reported separately from transport failures.
async fn decode<T: DeserializeOwned>(response: reqwest::Response, path: &str) -> Result<T> {
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            tracing::warn!("Unreadable travel API response for {}: {}", path, e);
            AppError::UpstreamPayload {
                path: path.to_string(),
            }
        } else {
            AppError::Transport(e)
        }
    })
}
