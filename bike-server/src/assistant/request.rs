//! Inbound webhook payload.
//!
//! A subset of the Dialogflow v2 webhook request, with the Actions on Google
//! payload nested under `originalDetectIntentRequest`. Unknown fields are
//! ignored and every field is optional, so partial payloads still parse.

use serde::Deserialize;

use crate::domain::{Coordinate, ResourceKind};

/// Capability name reported by devices that can show cards.
pub const SCREEN_OUTPUT: &str = "actions.capability.SCREEN_OUTPUT";

/// Argument name the place helper uses for the user's pick.
const PLACE_ARGUMENT: &str = "PLACE";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub query_result: QueryResult,
    #[serde(default)]
    pub original_detect_intent_request: OriginalRequest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub intent: Option<Intent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Parameters {
    /// `"bikes"` or `"stands"`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct OriginalRequest {
    #[serde(default)]
    pub payload: AssistantPayload,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssistantPayload {
    #[serde(default)]
    pub device: Option<Device>,
    #[serde(default)]
    pub surface: Option<Surface>,
    #[serde(default)]
    pub inputs: Vec<Input>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub coordinates: Option<LatLng>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A position as the assistant sends it.
///
/// Zero-valued fields are dropped from the JSON, so a point on the equator
/// or the prime meridian arrives with one of the two missing.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LatLng {
    /// The coordinate, if both halves are present.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.latitude?, self.longitude?))
    }
}

impl Location {
    fn coordinate(&self) -> Option<Coordinate> {
        self.coordinates.as_ref()?.coordinate()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Surface {
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Capability {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    #[serde(default)]
    pub place_value: Option<Location>,
}

impl WebhookRequest {
    /// The resource the user asked for.
    pub fn kind(&self) -> ResourceKind {
        ResourceKind::from_param(self.query_result.parameters.kind.as_deref())
    }

    /// Name of the matched intent, if any.
    pub fn intent_name(&self) -> Option<&str> {
        self.query_result
            .intent
            .as_ref()
            .map(|i| i.display_name.as_str())
    }

    /// The place the user picked, if it came with coordinates.
    pub fn place(&self) -> Option<&Location> {
        self.original_detect_intent_request
            .payload
            .inputs
            .iter()
            .flat_map(|input| &input.arguments)
            .filter(|arg| arg.name == PLACE_ARGUMENT)
            .filter_map(|arg| arg.place_value.as_ref())
            .find(|place| place.coordinate().is_some())
    }

    /// The device's reported position, if the user shared it.
    pub fn device_coordinates(&self) -> Option<Coordinate> {
        self.original_detect_intent_request
            .payload
            .device
            .as_ref()?
            .location
            .as_ref()?
            .coordinate()
    }

    /// Where to search from: a picked place wins over the device location.
    pub fn origin(&self) -> Option<Coordinate> {
        self.place()
            .and_then(Location::coordinate)
            .or_else(|| self.device_coordinates())
    }

    /// Whether the device can display a card.
    pub fn has_screen(&self) -> bool {
        self.original_detect_intent_request
            .payload
            .surface
            .as_ref()
            .is_some_and(|s| s.capabilities.iter().any(|c| c.name == SCREEN_OUTPUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> WebhookRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_object_parses() {
        let req = parse(json!({}));
        assert_eq!(req.origin(), None);
        assert_eq!(req.kind(), ResourceKind::Bikes);
        assert!(!req.has_screen());
        assert_eq!(req.intent_name(), None);
    }

    #[test]
    fn device_location_request() {
        let req = parse(json!({
            "queryResult": {
                "parameters": {"type": "stands"},
                "intent": {"displayName": "near.done"}
            },
            "originalDetectIntentRequest": {
                "source": "google",
                "payload": {
                    "device": {
                        "location": {
                            "coordinates": {"latitude": 57.7089, "longitude": 11.9746}
                        }
                    },
                    "surface": {
                        "capabilities": [
                            {"name": "actions.capability.AUDIO_OUTPUT"},
                            {"name": "actions.capability.SCREEN_OUTPUT"}
                        ]
                    }
                }
            }
        }));

        assert_eq!(req.kind(), ResourceKind::Stands);
        assert_eq!(req.intent_name(), Some("near.done"));
        assert_eq!(req.origin(), Some(Coordinate::new(57.7089, 11.9746)));
        assert!(req.has_screen());
    }

    #[test]
    fn place_request() {
        let req = parse(json!({
            "queryResult": {"parameters": {"type": "bikes"}},
            "originalDetectIntentRequest": {
                "payload": {
                    "inputs": [{
                        "intent": "actions.intent.PLACE",
                        "arguments": [{
                            "name": "PLACE",
                            "placeValue": {
                                "coordinates": {"latitude": 57.6969, "longitude": 11.9865},
                                "name": "Götaplatsen"
                            }
                        }]
                    }],
                    "surface": {"capabilities": [{"name": "actions.capability.AUDIO_OUTPUT"}]}
                }
            }
        }));

        let place = req.place().unwrap();
        assert_eq!(place.name.as_deref(), Some("Götaplatsen"));
        assert_eq!(req.origin(), Some(Coordinate::new(57.6969, 11.9865)));
        assert!(!req.has_screen());
    }

    #[test]
    fn place_wins_over_device() {
        let req = parse(json!({
            "originalDetectIntentRequest": {
                "payload": {
                    "device": {"location": {"coordinates": {"latitude": 1.0, "longitude": 1.0}}},
                    "inputs": [{"arguments": [{
                        "name": "PLACE",
                        "placeValue": {"coordinates": {"latitude": 2.0, "longitude": 2.0}}
                    }]}]
                }
            }
        }));

        assert_eq!(req.origin(), Some(Coordinate::new(2.0, 2.0)));
    }

    #[test]
    fn place_without_coordinates_falls_back_to_device() {
        let req = parse(json!({
            "originalDetectIntentRequest": {
                "payload": {
                    "device": {"location": {"coordinates": {"latitude": 1.0, "longitude": 1.0}}},
                    "inputs": [{"arguments": [{
                        "name": "PLACE",
                        "placeValue": {"name": "Somewhere"}
                    }]}]
                }
            }
        }));

        assert!(req.place().is_none());
        assert_eq!(req.origin(), Some(Coordinate::new(1.0, 1.0)));
    }

    #[test]
    fn device_without_coordinates_has_no_origin() {
        let req = parse(json!({
            "originalDetectIntentRequest": {
                "payload": {"device": {"location": {"name": "Unknown"}}}
            }
        }));

        assert_eq!(req.origin(), None);
    }

    #[test]
    fn other_arguments_are_ignored() {
        let req = parse(json!({
            "originalDetectIntentRequest": {
                "payload": {
                    "inputs": [{"arguments": [{
                        "name": "PERMISSION",
                        "placeValue": {"coordinates": {"latitude": 3.0, "longitude": 3.0}}
                    }]}]
                }
            }
        }));

        assert_eq!(req.origin(), None);
    }

    #[test]
    fn half_a_device_coordinate_is_no_origin() {
        let req = parse(json!({
            "originalDetectIntentRequest": {
                "payload": {"device": {"location": {"coordinates": {"latitude": 57.7}}}}
            }
        }));

        assert_eq!(req.device_coordinates(), None);
        assert_eq!(req.origin(), None);
    }

    #[test]
    fn null_coordinate_half_is_no_origin() {
        let req = parse(json!({
            "originalDetectIntentRequest": {
                "payload": {"device": {"location": {
                    "coordinates": {"latitude": null, "longitude": 11.97}
                }}}
            }
        }));

        assert_eq!(req.origin(), None);
    }

    #[test]
    fn half_a_place_coordinate_falls_back_to_device() {
        let req = parse(json!({
            "originalDetectIntentRequest": {
                "payload": {
                    "device": {"location": {"coordinates": {"latitude": 1.0, "longitude": 1.0}}},
                    "inputs": [{"arguments": [{
                        "name": "PLACE",
                        "placeValue": {"coordinates": {"longitude": 11.98}}
                    }]}]
                }
            }
        }));

        assert!(req.place().is_none());
        assert_eq!(req.origin(), Some(Coordinate::new(1.0, 1.0)));
    }
}
