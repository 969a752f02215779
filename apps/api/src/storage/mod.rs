//! Persistence collaborator for saved itineraries.
//!
//! Itineraries are read and written wholesale, keyed by id; there is no
//! partial-record locking. The store is a trait so the routes stay
//! decoupled from where itineraries actually live; the default backend is
//! an in-process map.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::trip::Itinerary;

#[async_trait]
pub trait ItineraryStore: Send + Sync {
    /// Inserts or replaces the itinerary under its id.
    async fn save(&self, itinerary: Itinerary);

    async fn load_by_id(&self, id: &str) -> Option<Itinerary>;

    /// Removes the itinerary. Returns false when the id was absent.
    async fn delete_by_id(&self, id: &str) -> bool;

    async fn list(&self) -> Vec<Itinerary>;
}

/// In-process store backed by a `RwLock`ed map.
#[derive(Default)]
pub struct MemoryStore {
    itineraries: RwLock<HashMap<String, Itinerary>>,
}

#[async_trait]
impl ItineraryStore for MemoryStore {
    async fn save(&self, itinerary: Itinerary) {
        self.itineraries
            .write()
            .await
            .insert(itinerary.id.clone(), itinerary);
    }

    async fn load_by_id(&self, id: &str) -> Option<Itinerary> {
        self.itineraries.read().await.get(id).cloned()
    }

    async fn delete_by_id(&self, id: &str) -> bool {
        self.itineraries.write().await.remove(id).is_some()
    }

    async fn list(&self) -> Vec<Itinerary> {
        let mut all: Vec<Itinerary> = self.itineraries.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }
}
