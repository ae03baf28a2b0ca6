//! Error handling utilities for MCP server

use rmcp::ErrorData;
use waypoint_core::ItineraryError;

/// Converts a planner error into an MCP error.
///
/// Bad input and unknown IDs are the caller's to fix, so they map to
/// `invalid_params`; everything else is an `internal_error`.
pub fn to_mcp_error(message: &str, error: &ItineraryError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_validation() || error.is_not_found() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_errors_are_invalid_params() {
        let not_found = to_mcp_error(
            "Failed to show itinerary",
            &ItineraryError::ItineraryNotFound { id: 3 },
        );
        assert_eq!(not_found.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(
            not_found.message,
            "Failed to show itinerary: Itinerary with ID 3 not found"
        );

        let duplicate = to_mcp_error(
            "Failed to add destination",
            &ItineraryError::AdjacentDuplicateName {
                name: "Lyon".to_string(),
            },
        );
        assert_eq!(duplicate.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = to_mcp_error(
            "Failed to compute route",
            &ItineraryError::RoutingConfiguration {
                message: "missing API key".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
