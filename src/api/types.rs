//! Wire types for the optimize request and response.
//!
//! The request and response shapes are camelCase JSON. Destinations are
//! opaque apart from their `location` and are echoed back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{GeoPoint, Waypoint};

/// A destination as it appears on the wire.
///
/// Only `location` is read. The object is otherwise kept as received, so the
/// response echoes it unchanged: `null` fields, a missing `id`, and extra keys
/// nested under `location` all come back as they arrived.
///
/// # Examples
///
/// ```
/// use route_optimizer::api::Destination;
///
/// let json = r#"{"id": "a", "name": null, "location": {"lat": 1, "lng": 2, "alt": 3}}"#;
/// let d: Destination = serde_json::from_str(json).unwrap();
/// assert_eq!(d.location().lng, 2.0);
///
/// let back = serde_json::to_value(&d).unwrap();
/// assert!(back["name"].is_null());
/// assert_eq!(back["location"]["alt"], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Destination {
    location: GeoPoint,
    fields: Map<String, Value>,
}

impl Destination {
    /// Builds a destination carrying only `id` and `location`.
    pub fn new(id: impl Into<String>, location: GeoPoint) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.into()));
        fields.insert(
            "location".to_string(),
            serde_json::json!({"lat": location.lat, "lng": location.lng}),
        );
        Self { location, fields }
    }

    /// Adds an echoed field. `location` cannot be replaced this way.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "location" {
            self.fields.insert(key, value.into());
        }
        self
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// The `id` field when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    /// The `name` field when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// The `placeId` field when it is a string.
    pub fn place_id(&self) -> Option<&str> {
        self.fields.get("placeId").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Converts to the optimizer's waypoint. Destinations without a usable
    /// `id` are named by their position in the request.
    pub fn to_waypoint(&self, position: usize) -> Waypoint {
        let id = match self.fields.get("id") {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => format!("#{position}"),
            Some(other) => other.to_string(),
        };
        let waypoint = Waypoint::new(id, self.location);
        match self.name() {
            Some(name) => waypoint.with_label(name),
            None => waypoint,
        }
    }
}

impl TryFrom<Map<String, Value>> for Destination {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let location = match fields.get("location") {
            Some(value) => GeoPoint::deserialize(value)?,
            None => return Err(serde::de::Error::missing_field("location")),
        };
        Ok(Self { location, fields })
    }
}

impl From<Destination> for Map<String, Value> {
    fn from(destination: Destination) -> Self {
        destination.fields
    }
}

/// An optimize request.
///
/// Both fields are optional at the wire level; absence is reported as an
/// invalid request rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub origin: Option<GeoPoint>,

    #[serde(default)]
    pub destinations: Option<Vec<Destination>>,
}

/// A successful optimize response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Destinations in visiting order, as they arrived.
    pub route: Vec<Destination>,

    /// Meters.
    #[serde(rename = "totalDistance")]
    pub total_distance: f64,

    /// Seconds.
    #[serde(rename = "totalDuration")]
    pub total_duration: f64,
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_destination_wire_shape() {
        let json = r#"{
            "id": "d1",
            "name": "Coffee",
            "placeId": "ChIJ123",
            "location": {"lat": 1.0, "lng": 2.0}
        }"#;
        let d: Destination = serde_json::from_str(json).expect("valid");
        assert_eq!(d.id(), Some("d1"));
        assert_eq!(d.name(), Some("Coffee"));
        assert_eq!(d.place_id(), Some("ChIJ123"));
        assert_eq!(d.location(), GeoPoint::new(1.0, 2.0));

        let back = serde_json::to_value(&d).expect("serializable");
        assert_eq!(back["placeId"], "ChIJ123");
        assert_eq!(back["location"]["lng"], 2.0);
    }

    #[test]
    fn test_destination_echoed_verbatim() {
        let original = json!({
            "id": "a",
            "name": null,
            "placeId": null,
            "color": "red",
            "location": {"lat": 0, "lng": 1, "alt": 3}
        });
        let d: Destination = serde_json::from_value(original.clone()).expect("valid");
        assert_eq!(d.name(), None);
        assert_eq!(d.location(), GeoPoint::new(0.0, 1.0));
        assert_eq!(serde_json::to_value(&d).expect("serializable"), original);
    }

    #[test]
    fn test_destination_without_id() {
        let d: Destination =
            serde_json::from_value(json!({"location": {"lat": 1, "lng": 1}})).expect("valid");
        assert_eq!(d.id(), None);
        assert_eq!(d.to_waypoint(4).id(), "#4");

        let numeric: Destination =
            serde_json::from_value(json!({"id": 7, "location": {"lat": 1, "lng": 1}}))
                .expect("valid");
        assert_eq!(numeric.to_waypoint(0).id(), "7");
    }

    #[test]
    fn test_destination_requires_location() {
        assert!(serde_json::from_value::<Destination>(json!({"id": "a"})).is_err());
        assert!(serde_json::from_value::<Destination>(
            json!({"id": "a", "location": {"lat": "north", "lng": 1}})
        )
        .is_err());
        assert!(serde_json::from_value::<Destination>(json!("a")).is_err());
    }

    #[test]
    fn test_to_waypoint_uses_name_as_label() {
        let d = Destination::new("d1", GeoPoint::new(3.0, 4.0));
        assert_eq!(d.to_waypoint(0).label(), None);
        let d = d.with_field("name", "Bakery");
        let w = d.to_waypoint(0);
        assert_eq!(w.id(), "d1");
        assert_eq!(w.label(), Some("Bakery"));
        assert_eq!(w.point(), GeoPoint::new(3.0, 4.0));
    }

    #[test]
    fn test_with_field_keeps_location() {
        let d = Destination::new("d1", GeoPoint::new(3.0, 4.0))
            .with_field("location", json!({"lat": 9, "lng": 9}));
        assert_eq!(d.location(), GeoPoint::new(3.0, 4.0));
        assert_eq!(d.get("location"), Some(&json!({"lat": 3.0, "lng": 4.0})));
    }

    #[test]
    fn test_request_fields_optional() {
        let r: RouteRequest = serde_json::from_str("{}").expect("valid");
        assert!(r.origin.is_none());
        assert!(r.destinations.is_none());

        let r: RouteRequest =
            serde_json::from_str(r#"{"origin": null, "destinations": null}"#).expect("valid");
        assert_eq!(r, RouteRequest::default());
    }

    #[test]
    fn test_response_camel_case() {
        let r = RouteResponse {
            route: vec![],
            total_distance: 10.0,
            total_duration: 0.72,
        };
        let v = serde_json::to_value(&r).expect("serializable");
        assert_eq!(v["totalDistance"], 10.0);
        assert_eq!(v["totalDuration"], 0.72);
    }
}
