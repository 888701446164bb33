//! Travel Desk back-office engine
//!
//! Commission and balance arithmetic, calendar aggregation over trips,
//! itinerary day expansion and yearly reports, served over HTTP in front
//! of the agency's travel API.

pub mod api;
pub mod cache;
pub mod calendar;
pub mod commission;
pub mod config;
pub mod dates;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod reports;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use api::ApiClient;
use cache::AppCache;
use itinerary::DefaultItineraryTypes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub cache: AppCache,
    pub itinerary_defaults: DefaultItineraryTypes,
}

impl AppState {
    pub fn new(api: ApiClient, itinerary_defaults: DefaultItineraryTypes) -> Self {
        Self {
            api,
            cache: AppCache::new(),
            itinerary_defaults,
        }
    }
}

/// Full HTTP surface with middleware applied
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(commission::router())
        .merge(calendar::router())
        .merge(itinerary::router())
        .merge(reports::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
