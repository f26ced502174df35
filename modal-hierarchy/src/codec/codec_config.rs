use serde::{Deserialize, Serialize};

/// describes the literal tokens of the itinerary text format. the defaults match
/// the Korean-language routing output the pipeline was built around.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CodecConfig {
    /// accepted segment delimiters. the first is used when writing.
    pub delimiters: Vec<String>,
    /// suffix following a minutes value, e.g. "분"
    pub minute_suffix: String,
    /// suffix following an hours value, e.g. "시간"
    pub hour_suffix: String,
    /// write durations of an hour or more as hours and minutes
    pub write_hours: bool,
    /// text that stands for a phase with no segments
    pub empty_phase_marker: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            delimiters: vec![String::from("->"), String::from("→")],
            minute_suffix: String::from("분"),
            hour_suffix: String::from("시간"),
            write_hours: false,
            empty_phase_marker: String::from("N/A"),
        }
    }
}
