use serde::{Deserialize, Serialize};

/// names of the dataset columns read and written by each stage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnNames {
    /// raw itinerary text from the routing collaborator
    pub route_column: String,
    /// simplified itinerary text
    pub simplified_column: String,
    /// total trip duration in minutes
    pub total_duration_column: String,
    pub ascending_column: String,
    pub descending_column: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            route_column: String::from("Optimized Route"),
            simplified_column: String::from("Total Trip"),
            total_duration_column: String::from("Total Minutes"),
            ascending_column: String::from("Ascending"),
            descending_column: String::from("Descending"),
        }
    }
}
