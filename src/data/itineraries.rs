//! Itinerary endpoint client
//!
//! Typed access to the `/itineraries` endpoints: listing a user's stored
//! itineraries, fetching one by id, creating and deleting. Deletes are never
//! cached; note that list/get responses cached before a delete remain
//! visible until their TTL lapses.

use crate::api::{ApiClient, RequestOptions, ResponseError};

use super::{DeleteReceipt, InsertReceipt, Itinerary, NewItinerary};

/// Client for the `/itineraries` endpoints
#[derive(Debug, Clone)]
pub struct ItineraryClient {
    api: ApiClient,
}

impl ItineraryClient {
    /// Creates an itinerary client sharing the given API client
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Lists itineraries belonging to `user_id`
    pub async fn list(&self, user_id: i64) -> Result<Vec<Itinerary>, ResponseError> {
        let options = RequestOptions::new().with_param("userId", user_id.to_string());
        self.api.get("/itineraries", options).await.into_json()
    }

    /// Fetches a single itinerary by row id
    pub async fn get(&self, id: i64) -> Result<Itinerary, ResponseError> {
        self.api
            .get(&format!("/itineraries/{id}"), RequestOptions::new())
            .await
            .into_json()
    }

    /// Stores a new itinerary and returns its row id
    pub async fn create(&self, itinerary: &NewItinerary) -> Result<InsertReceipt, ResponseError> {
        let body = serde_json::to_value(itinerary)?;
        let options = RequestOptions::new().with_body(body);
        self.api.post("/itineraries", options).await.into_json()
    }

    /// Deletes an itinerary by row id
    pub async fn delete(&self, id: i64) -> Result<DeleteReceipt, ResponseError> {
        self.api
            .delete(&format!("/itineraries/{id}"), RequestOptions::new())
            .await
            .into_json()
    }
}
