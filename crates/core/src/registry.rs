//! Event registry - maps event ids to their seat inventories
//!
//! The registry is the only place events are created or removed. Each
//! registered event owns its inventory behind its own lock, so bookings
//! on different events never block each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::models::{Category, Event};

/// An event plus its mutable seat state
#[derive(Debug)]
pub struct RegisteredEvent {
    pub event: Event,
    pub inventory: Mutex<SeatInventory>,
}

/// Events grouped under one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: String,
    pub events: Vec<String>,
}

/// Central store of registered events
#[derive(Debug, Default)]
pub struct EventRegistry {
    events: RwLock<HashMap<String, Arc<RegisteredEvent>>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new event and allocate its empty inventory
    pub fn create(
        &self,
        id: &str,
        name: &str,
        category: Category,
        venue: &str,
        total_seats: u32,
    ) -> Result<Event> {
        if total_seats == 0 {
            return Err(Error::InvalidCapacity(total_seats as i64));
        }
        let mut events = self.events.write().unwrap();
        if events.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        let event = Event::new(
            id.to_string(),
            name.to_string(),
            category,
            venue.to_string(),
            total_seats,
        );
        tracing::info!(event_id = %id, category = %category, total_seats, "Registered event");
        events.insert(
            id.to_string(),
            Arc::new(RegisteredEvent {
                event: event.clone(),
                inventory: Mutex::new(SeatInventory::new(total_seats)),
            }),
        );
        Ok(event)
    }

    /// Look up an event and its inventory
    pub fn get(&self, id: &str) -> Result<Arc<RegisteredEvent>> {
        self.events
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("event {}", id)))
    }

    /// Delete an event; its inventory goes with it
    pub fn remove(&self, id: &str) -> Result<()> {
        let removed = self.events.write().unwrap().remove(id);
        match removed {
            Some(_) => {
                tracing::info!(event_id = %id, "Deleted event");
                Ok(())
            }
            None => Err(Error::NotFound(format!("event {}", id))),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.events.read().unwrap().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().unwrap().is_empty()
    }

    /// Event ids grouped by category: categories in their fixed order,
    /// ids sorted ascending within each, so output is reproducible.
    pub fn by_category(&self) -> Vec<CategoryGroup> {
        let events = self.events.read().unwrap();
        Category::ALL
            .iter()
            .map(|cat| {
                let mut ids: Vec<String> = events
                    .values()
                    .filter(|r| r.event.category == *cat)
                    .map(|r| r.event.id.clone())
                    .collect();
                ids.sort();
                CategoryGroup {
                    name: cat.to_string(),
                    events: ids,
                }
            })
            .collect()
    }
}
