//! Turning an assistant request into a reply.

use tracing::{debug, info, warn};

use crate::domain::ResourceKind;
use crate::provider::{StationSource, fetch_stations_near};
use crate::ranking::{DEFAULT_LIMIT, take_suggested};

use super::format;
use super::request::WebhookRequest;
use super::response::WebhookResponse;

/// Reply when the request carries no usable coordinate.
pub const NO_LOCATION: &str = "Sorry, I couldn't find any station.";

/// Reply when the provider could not be reached or answered badly.
pub const SERVICE_UNAVAILABLE: &str = "Sorry, the service seems unavailable right now.";

/// Reply when no nearby station is open with enough of `kind`.
pub fn no_station_nearby(kind: ResourceKind) -> String {
    format!("Sorry, I couldn't find any station with available {kind} nearby.")
}

/// Answer one webhook request.
///
/// User-facing failures become spoken replies rather than errors, so this
/// always produces a response. `source` is only consulted once the request
/// has yielded a coordinate.
pub async fn fulfill<S: StationSource>(
    source: &S,
    contract: &str,
    request: &WebhookRequest,
) -> WebhookResponse {
    let kind = request.kind();
    debug!(
        intent = request.intent_name().unwrap_or("-"),
        ?kind,
        "handling fulfillment request"
    );

    let Some(origin) = request.origin() else {
        info!("no coordinate in request");
        return WebhookResponse::speak(NO_LOCATION);
    };

    let ranked = match fetch_stations_near(source, contract, origin).await {
        Ok(ranked) => ranked,
        Err(e) => {
            warn!(error = %e, contract, "station fetch failed");
            return WebhookResponse::speak(SERVICE_UNAVAILABLE);
        }
    };

    let total = ranked.len();
    let stations = take_suggested(ranked, kind, DEFAULT_LIMIT);
    let addresses: Vec<&str> = stations.iter().map(|s| s.address.as_str()).collect();
    debug!(total, selected = stations.len(), ?addresses, "selected stations");

    let Some(top) = stations.first() else {
        info!(?kind, total, "no suggested station");
        return WebhookResponse::speak(no_station_nearby(kind));
    };

    let reply = WebhookResponse::speak(format::spoken(top, kind));

    if !request.has_screen() {
        return reply;
    }

    match format::card(&stations, kind) {
        Some(card) => reply.with_card(card),
        None => reply,
    }
}
