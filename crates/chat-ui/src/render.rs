//! Reply rendering: raw message text to an HTML fragment

use crate::parsers::{FlightSegmentBlock, ReplyContent, parse_reply};
use crate::styles::{
    FLIGHT_BADGE, FLIGHT_CARD, FLIGHT_DURATION, FLIGHT_LIST, FLIGHT_PRICE, FLIGHT_SEGMENTS,
    FLIGHT_TITLE,
};
use crate::types::Role;
use crate::utils::markdown::{format_plain_text, html_escape};

/// Render message text for display
///
/// User text is only escaped. Assistant text is parsed for flight
/// itineraries and otherwise gets the markdown-lite treatment.
pub fn render(text: &str, sender: Role) -> String {
    match sender {
        Role::User => html_escape(text),
        Role::Assistant => render_content(&parse_reply(text)),
    }
}

pub fn render_content(content: &ReplyContent) -> String {
    match content {
        ReplyContent::PlainText(text) => format_plain_text(text),
        ReplyContent::FlightItinerary(flights) => render_flight_cards(flights),
    }
}

fn render_flight_cards(flights: &[FlightSegmentBlock]) -> String {
    let cards: String = flights.iter().map(flight_card).collect();
    format!(r#"<div class="{FLIGHT_LIST}">{cards}</div>"#)
}

fn flight_card(flight: &FlightSegmentBlock) -> String {
    let bullets: String = flight
        .legs
        .iter()
        .flat_map(|leg| leg.bullets())
        .map(|bullet| format!("<li>{}</li>", html_escape(&bullet)))
        .collect();

    format!(
        concat!(
            r#"<div class="{card}">"#,
            r#"<div class="flex items-center mb-2">"#,
            r#"<i class="fas fa-plane text-blue-500 mr-2"></i>"#,
            r#"<span class="{title}">Flight {number}</span>"#,
            r#"<span class="{badge}">ID: {id}</span>"#,
            "</div>",
            r#"<div class="{duration_class}"><strong>Duration:</strong> {duration}</div>"#,
            r#"<div class="mb-2"><strong>Segments:</strong><ul class="{segments}">"#,
            "{bullets}",
            r#"</ul></div><div class="{price_class}">Price: {price} EUR</div></div>"#,
        ),
        card = FLIGHT_CARD,
        title = FLIGHT_TITLE,
        number = html_escape(&flight.flight_number),
        badge = FLIGHT_BADGE,
        id = html_escape(&flight.id),
        duration_class = FLIGHT_DURATION,
        duration = html_escape(&flight.duration),
        segments = FLIGHT_SEGMENTS,
        bullets = bullets,
        price_class = FLIGHT_PRICE,
        price = html_escape(&flight.price),
    )
}
