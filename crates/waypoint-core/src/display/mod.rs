//! Display formatting for itineraries, destinations and routes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! This module adds newtype wrappers for collections and operation results so
//! every interface prints the same markdown.
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models   │    │ Wrappers and    │    │   Markdown      │
//! │ (Itinerary, Leg) │───▶│ value formatters│───▶│ (Terminal/MCP)  │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `ItinerarySummaries`, `Destinations`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`format`]: `LocalDateTime`, `Kilometers`, `HoursMinutes`
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::display::{HoursMinutes, Kilometers};
//!
//! assert_eq!(Kilometers(465_321).to_string(), "465.3 km");
//! assert_eq!(HoursMinutes(16_680).to_string(), "4h 38min");
//! ```

pub mod collections;
pub mod format;
pub mod models;
pub mod results;

pub use collections::{Destinations, ItinerarySummaries};
pub use format::{HoursMinutes, Kilometers, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
