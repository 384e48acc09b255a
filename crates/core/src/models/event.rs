//! Event model - a ticketed event with fixed seat capacity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed category set for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Movies,
    Plays,
    Sports,
    Concerts,
}

impl Category {
    /// All categories, in their stable display order
    pub const ALL: [Category; 4] = [
        Category::Movies,
        Category::Plays,
        Category::Sports,
        Category::Concerts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Movies => "Movies",
            Category::Plays => "Plays",
            Category::Sports => "Sports",
            Category::Concerts => "Concerts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movies" => Ok(Category::Movies),
            "Plays" => Ok(Category::Plays),
            "Sports" => Ok(Category::Sports),
            "Concerts" => Ok(Category::Concerts),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// A registered event. Capacity is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub venue: String,
    pub total_seats: u32,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        id: String,
        name: String,
        category: Category,
        venue: String,
        total_seats: u32,
    ) -> Self {
        Self {
            id,
            name,
            category,
            venue,
            total_seats,
            created_at: Utc::now(),
        }
    }
}
