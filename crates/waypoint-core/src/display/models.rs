//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it through termimad and MCP
//! clients receive readable text.

use std::fmt;

use super::format::{HoursMinutes, Kilometers, LocalDateTime};
use crate::models::{
    short_place_name, Coordinates, Destination, Itinerary, ItinerarySummary, LegKind, RouteLeg,
    RouteSummary,
};

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.destinations.is_empty() {
            writeln!(f, "\nNo destinations in this itinerary.")?;
        } else {
            writeln!(f, "\n## Destinations")?;
            writeln!(f)?;
            for destination in &self.destinations {
                write!(f, "{destination}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ItinerarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stops = match self.destination_count {
            1 => "1 destination".to_string(),
            n => format!("{n} destinations"),
        };

        writeln!(f, "## {} (ID: {}) ({stops})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} (ID: {})", self.position, self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Coordinates: {}", self.coordinates)?;
        if let Some(image_url) = &self.image_url {
            writeln!(f, "- Image: {image_url}")?;
        }
        writeln!(f)?;

        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** → **{}**: ",
            short_place_name(&self.origin),
            short_place_name(&self.destination)
        )?;

        match (self.kind, &self.distance_text, &self.duration_text) {
            (LegKind::Drivable, Some(distance), Some(duration)) => {
                writeln!(f, "{distance}, {duration}")
            }
            _ => writeln!(
                f,
                "no drivable route (long-distance or air travel, ~{} direct)",
                Kilometers(self.great_circle_meters)
            ),
        }
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(
                f,
                "Add at least two destinations to see route details."
            );
        }

        writeln!(f, "# Route")?;
        writeln!(f)?;

        // Totals only mean something once at least one leg is drivable
        if self.drivable_count() > 0 {
            writeln!(
                f,
                "- **Total distance**: {}",
                Kilometers(self.total_distance_meters)
            )?;
            writeln!(
                f,
                "- **Total duration**: {}",
                HoursMinutes(self.total_duration_seconds)
            )?;
        }
        if self.unroutable_count() > 0 {
            writeln!(
                f,
                "- **Unroutable legs**: {} (excluded from totals)",
                self.unroutable_count()
            )?;
        }

        writeln!(f, "\n## Legs")?;
        writeln!(f)?;
        for leg in &self.legs {
            write!(f, "{leg}")?;
        }

        Ok(())
    }
}
