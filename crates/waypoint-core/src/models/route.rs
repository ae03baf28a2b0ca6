//! Derived route types: legs between consecutive destinations and the trip
//! summary.

use serde::{Deserialize, Serialize};

/// Whether the routing provider produced a usable driving route for a leg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegKind {
    /// A road route exists; distance and duration are known
    Drivable,
    /// No road route (ocean crossing, no connectivity, provider failure)
    Unroutable,
}

impl LegKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegKind::Drivable => "DRIVABLE",
            LegKind::Unroutable => "UNROUTABLE",
        }
    }
}

/// Distance and duration of a drivable leg as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegMetrics {
    pub distance_meters: u64,
    pub duration_seconds: u64,
    /// Provider-formatted distance, e.g. "465 km"
    pub distance_text: String,
    /// Provider-formatted duration, e.g. "4 hours 38 mins"
    pub duration_text: String,
}

/// The segment between two consecutive destinations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteLeg {
    /// Display name of the leg's starting destination
    pub origin: String,
    /// Display name of the leg's ending destination
    pub destination: String,
    pub kind: LegKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    /// Straight-line distance between the endpoints; informational only
    pub great_circle_meters: u64,
}

impl RouteLeg {
    pub fn drivable(
        origin: impl Into<String>,
        destination: impl Into<String>,
        metrics: LegMetrics,
        great_circle_meters: u64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            kind: LegKind::Drivable,
            distance_text: Some(metrics.distance_text),
            duration_text: Some(metrics.duration_text),
            distance_meters: Some(metrics.distance_meters),
            duration_seconds: Some(metrics.duration_seconds),
            great_circle_meters,
        }
    }

    pub fn unroutable(
        origin: impl Into<String>,
        destination: impl Into<String>,
        great_circle_meters: u64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            kind: LegKind::Unroutable,
            distance_text: None,
            duration_text: None,
            distance_meters: None,
            duration_seconds: None,
            great_circle_meters,
        }
    }

    pub fn is_drivable(&self) -> bool {
        self.kind == LegKind::Drivable
    }
}

/// Legs in itinerary order plus totals over the drivable legs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RouteSummary {
    pub legs: Vec<RouteLeg>,
    pub total_distance_meters: u64,
    pub total_duration_seconds: u64,
}

impl RouteSummary {
    /// Builds a summary, summing only drivable legs.
    pub fn from_legs(legs: Vec<RouteLeg>) -> Self {
        let (total_distance_meters, total_duration_seconds) = legs
            .iter()
            .filter(|leg| leg.is_drivable())
            .fold((0u64, 0u64), |(distance, duration), leg| {
                (
                    distance + leg.distance_meters.unwrap_or(0),
                    duration + leg.duration_seconds.unwrap_or(0),
                )
            });

        Self {
            legs,
            total_distance_meters,
            total_duration_seconds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn drivable_count(&self) -> usize {
        self.legs.iter().filter(|leg| leg.is_drivable()).count()
    }

    pub fn unroutable_count(&self) -> usize {
        self.legs.len() - self.drivable_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(distance_meters: u64, duration_seconds: u64) -> LegMetrics {
        LegMetrics {
            distance_meters,
            duration_seconds,
            distance_text: format!("{distance_meters} m"),
            duration_text: format!("{duration_seconds} s"),
        }
    }

    #[test]
    fn test_totals_exclude_unroutable_legs() {
        let summary = RouteSummary::from_legs(vec![
            RouteLeg::drivable("A", "B", metrics(100, 60), 90),
            RouteLeg::unroutable("B", "C", 5_000_000),
            RouteLeg::drivable("C", "D", metrics(200, 90), 150),
        ]);

        assert_eq!(summary.total_distance_meters, 300);
        assert_eq!(summary.total_duration_seconds, 150);
        assert_eq!(summary.drivable_count(), 2);
        assert_eq!(summary.unroutable_count(), 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = RouteSummary::from_legs(Vec::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total_distance_meters, 0);
        assert_eq!(summary.total_duration_seconds, 0);
    }

    #[test]
    fn test_leg_kind_serializes_uppercase() {
        let leg = RouteLeg::unroutable("Lisbon", "New York", 5_400_000);
        let json = serde_json::to_value(&leg).unwrap();
        assert_eq!(json["kind"], "UNROUTABLE");
        assert!(json.get("distance_meters").is_none());
    }
}
