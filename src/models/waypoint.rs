//! Destination waypoint type.

use super::GeoPoint;

/// A destination with identity, an optional display label, and a location.
///
/// The origin of a trip is not a waypoint; it is a bare [`GeoPoint`].
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{GeoPoint, Waypoint};
///
/// let w = Waypoint::new("stop-1", GeoPoint::new(40.0, -74.0)).with_label("Warehouse");
/// assert_eq!(w.id(), "stop-1");
/// assert_eq!(w.label(), Some("Warehouse"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    id: String,
    label: Option<String>,
    point: GeoPoint,
}

impl Waypoint {
    /// Creates an unlabeled waypoint.
    pub fn new(id: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            id: id.into(),
            label: None,
            point,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Location of this waypoint.
    pub fn point(&self) -> GeoPoint {
        self.point
    }
}
