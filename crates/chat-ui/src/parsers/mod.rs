pub mod flight;

pub use flight::{FlightLeg, FlightSegmentBlock, parse_flights};

/// Structure detected in an assistant reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyContent {
    PlainText(String),
    FlightItinerary(Vec<FlightSegmentBlock>),
}

/// Classify an assistant reply before rendering
///
/// Only replies mentioning both `Flight` and `Duration:` are scanned for
/// itinerary blocks; anything without a complete block stays plain text.
pub fn parse_reply(text: &str) -> ReplyContent {
    if text.contains("Flight") && text.contains("Duration:") {
        let flights = parse_flights(text);
        if !flights.is_empty() {
            return ReplyContent::FlightItinerary(flights);
        }
    }
    ReplyContent::PlainText(text.to_string())
}
