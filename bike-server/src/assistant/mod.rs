//! Voice assistant fulfillment.
//!
//! Reads the user's location and the requested resource out of a webhook
//! request, picks the nearest suitable stations and phrases the reply.
//! Intent routing and permission prompts are handled by the assistant
//! platform; by the time a request reaches us it either carries a
//! coordinate or it does not.

mod format;
mod fulfill;
mod request;
mod response;

pub use format::{card, directions_url, spoken};
pub use fulfill::{NO_LOCATION, SERVICE_UNAVAILABLE, fulfill, no_station_nearby};
pub use request::{SCREEN_OUTPUT, WebhookRequest};
pub use response::{
    BasicCard, Button, GooglePayload, OpenUrlAction, ResponsePayload, RichItem, RichResponse,
    SimpleResponse, WebhookResponse,
};
