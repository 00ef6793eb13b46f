//! Flight itinerary block parser
//!
//! The agent lists flight offers as markdown-ish blocks:
//!
//! ```text
//! **Flight 1 (ID: 4711):**
//! *   **Duration:** 7h 05m
//! *   **Segments:**
//!     *   Departure: JFK at 2025-06-01T18:00
//!     *   Arrival: LHR at 2025-06-02T06:05
//!     *   Carrier: BA
//! *   **Price:** 412.30 EUR
//! ```
//!
//! Any number of Departure/Arrival/Carrier triples may follow `Segments:`,
//! with blank lines allowed between segment lines and before the price.
//! Blocks that only partially match are skipped.

const HEADER_OPEN: &str = "**Flight ";
const HEADER_ID: &str = " (ID: ";
const HEADER_CLOSE: &str = "):**";
const DURATION_LABEL: &str = "**Duration:** ";
const SEGMENTS_LABEL: &str = "**Segments:**";
const PRICE_LABEL: &str = "**Price:** ";
const PRICE_CURRENCY: &str = " EUR";

const DEPARTURE_LABEL: &str = "Departure:";
const ARRIVAL_LABEL: &str = "Arrival:";
const CARRIER_LABEL: &str = "Carrier:";

/// One leg of an itinerary
///
/// Values are kept verbatim, including the whitespace after the label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightLeg {
    pub departure: String,
    pub arrival: String,
    pub carrier: String,
}

impl FlightLeg {
    /// The leg as the three bullet lines the agent wrote
    pub fn bullets(&self) -> [String; 3] {
        [
            format!("{DEPARTURE_LABEL}{}", self.departure),
            format!("{ARRIVAL_LABEL}{}", self.arrival),
            format!("{CARRIER_LABEL}{}", self.carrier),
        ]
    }
}

/// A flight offer extracted from an assistant reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightSegmentBlock {
    pub flight_number: String,
    pub id: String,
    pub duration: String,
    pub legs: Vec<FlightLeg>,
    /// Amount in EUR, verbatim
    pub price: String,
}

impl FlightSegmentBlock {
    /// Segment lines joined with newlines, bullet markers removed
    pub fn segments_text(&self) -> String {
        self.legs
            .iter()
            .flat_map(FlightLeg::bullets)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Extract every well-formed flight block from `text`, in order
pub fn parse_flights(text: &str) -> Vec<FlightSegmentBlock> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut flights = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        match parse_block(&lines[index..]) {
            Some((block, consumed)) => {
                flights.push(block);
                index += consumed;
            }
            None => index += 1,
        }
    }

    flights
}

/// Parse a block starting at the first line, returning it with the number of
/// lines it spans
fn parse_block(lines: &[&str]) -> Option<(FlightSegmentBlock, usize)> {
    let (flight_number, id) = parse_header(lines.first()?)?;

    let duration = strip_bullet(lines.get(1)?, false)
        .and_then(|body| labelled(body, DURATION_LABEL))?;

    if strip_bullet(lines.get(2)?, false)? != SEGMENTS_LABEL {
        return None;
    }

    let mut cursor = 3;
    let mut legs = Vec::new();
    while let Some((leg, next)) = parse_leg(lines, cursor) {
        legs.push(leg);
        cursor = next;
    }
    if legs.is_empty() {
        return None;
    }

    let cursor = skip_blank(lines, cursor);
    let price = strip_bullet(lines.get(cursor)?, false)
        .and_then(|body| labelled(body, PRICE_LABEL))
        .and_then(parse_price)?;

    Some((
        FlightSegmentBlock {
            flight_number,
            id,
            duration: duration.to_string(),
            legs,
            price: price.to_string(),
        },
        cursor + 1,
    ))
}

/// `**Flight <digits> (ID: <digits>):**` closing its line; text before the
/// header on the same line is allowed
fn parse_header(line: &str) -> Option<(String, String)> {
    let rest = line.strip_suffix(HEADER_CLOSE)?;
    let start = rest.rfind(HEADER_OPEN)?;
    let (number, id) = rest[start + HEADER_OPEN.len()..].split_once(HEADER_ID)?;
    (is_digits(number) && is_digits(id)).then(|| (number.to_string(), id.to_string()))
}

/// A Departure/Arrival/Carrier triple starting at `start`, with the index of
/// the line after it
fn parse_leg(lines: &[&str], start: usize) -> Option<(FlightLeg, usize)> {
    let (departure, next) = leg_field(lines, start, DEPARTURE_LABEL)?;
    let (arrival, next) = leg_field(lines, next, ARRIVAL_LABEL)?;
    let (carrier, next) = leg_field(lines, next, CARRIER_LABEL)?;
    Some((FlightLeg { departure, arrival, carrier }, next))
}

/// An indented `* <label>` bullet at or after `start`
///
/// Blank lines before the bullet are skipped and stand in for its
/// indentation.
fn leg_field(lines: &[&str], start: usize, label: &str) -> Option<(String, usize)> {
    let at = skip_blank(lines, start);
    let line = lines.get(at)?;
    let body = if at > start {
        strip_bullet(line.trim_start(), false)
    } else {
        strip_bullet(line, true)
    }?;
    let value = labelled(body, label)?;
    Some((value.to_string(), at + 1))
}

/// Index of the first non-blank line at or after `start`
fn skip_blank(lines: &[&str], start: usize) -> usize {
    start
        + lines
            .iter()
            .skip(start)
            .take_while(|line| line.trim().is_empty())
            .count()
}

/// Strip a `*` bullet followed by at least one whitespace character
///
/// Indented bullets must be preceded by whitespace as well.
fn strip_bullet(line: &str, indented: bool) -> Option<&str> {
    let line = if indented {
        let trimmed = line.trim_start();
        if trimmed.len() == line.len() {
            return None;
        }
        trimmed
    } else {
        line
    };
    let rest = line.strip_prefix('*')?;
    let body = rest.trim_start();
    (body.len() < rest.len()).then_some(body)
}

/// Value after `label`, which must be non-empty
fn labelled<'a>(body: &'a str, label: &str) -> Option<&'a str> {
    body.strip_prefix(label).filter(|value| !value.is_empty())
}

/// Amount before the last ` EUR` on the line
fn parse_price(value: &str) -> Option<&str> {
    let end = value.rfind(PRICE_CURRENCY)?;
    (end > 0).then(|| &value[..end])
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
