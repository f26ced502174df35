use serde::{Deserialize, Serialize};

/// one itinerary of the input dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRow {
    pub row_id: usize,
    pub itinerary: String,
}

impl TripRow {
    pub fn new(row_id: usize, itinerary: &str) -> TripRow {
        TripRow {
            row_id,
            itinerary: itinerary.to_string(),
        }
    }
}
