//! reading and writing the itinerary text format `mode(N분) -> mode(N분) -> ...`.
mod codec_config;
mod duration_text;
mod itinerary_codec;

pub use codec_config::CodecConfig;
pub use itinerary_codec::ItineraryCodec;
