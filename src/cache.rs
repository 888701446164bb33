//! In-memory caching using moka
//!
//! Holds short-lived copies of trip and itinerary lists fetched from the
//! travel API. Entries are scoped to the caller's credentials, so one user
//! never sees another user's trips. Payments and financials are not cached.

use moka::future::Cache;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::models::{ItineraryDay, Trip};

/// Application cache for travel API reads
#[derive(Clone)]
pub struct AppCache {
    /// Trip listings (credential scope -> trips)
    pub trips: Cache<String, Arc<Vec<Trip>>>,
    /// Itineraries (credential scope + trip id -> days)
    pub itineraries: Cache<String, Arc<Vec<ItineraryDay>>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Trip listings: 200 callers, 60 s TTL
            trips: Cache::builder()
                .max_capacity(200)
                .time_to_live(Duration::from_secs(60))
                .build(),

            // Itineraries: 1000 entries, 60 s TTL, 30 s idle
            itineraries: Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(60))
                .time_to_idle(Duration::from_secs(30))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            trips_size: self.trips.entry_count(),
            itineraries_size: self.itineraries.entry_count(),
        }
    }

    /// Drop the cached itinerary of one trip for one caller
    pub async fn invalidate_itinerary(&self, auth: Option<&str>, trip_id: Uuid) {
        self.itineraries
            .invalidate(&Self::itinerary_key(auth, trip_id))
            .await;
    }

    /// Opaque scope derived from the caller's Authorization header
    pub fn scope(auth: Option<&str>) -> String {
        match auth {
            Some(token) => {
                let mut hasher = DefaultHasher::new();
                token.hash(&mut hasher);
                format!("{:016x}", hasher.finish())
            }
            None => "anonymous".to_string(),
        }
    }

    /// Generate cache key for a trip listing
    pub fn trips_key(auth: Option<&str>) -> String {
        format!("trips:{}", Self::scope(auth))
    }

    /// Generate cache key for a trip itinerary
    pub fn itinerary_key(auth: Option<&str>, trip_id: Uuid) -> String {
        format!("itinerary:{}:{}", Self::scope(auth), trip_id)
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub trips_size: u64,
    pub itineraries_size: u64,
}
