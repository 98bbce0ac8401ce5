//! Status-code-to-message classification shared by the three features.
//!
//! Codes below 100 never come from a server: {0, 1, 2} are synthesized by the
//! repositories when the exchange produced no response, no status code, or an
//! unexpected local failure.

/// Sentinel for "no HTTP response was received at all".
pub const NO_RESPONSE: u16 = 0;

/// Sentinel for "a body arrived but no HTTP status code did".
pub const NO_STATUS: u16 = 1;

/// Sentinel for "an unexpected local error short-circuited the exchange".
pub const UNEXPECTED: u16 = 2;

/// Total mapping from a status code to the message shown to the user.
///
/// The 200 case is feature-specific (success payloads differ per screen) and
/// is handled by each state holder before falling back to this ladder, which
/// is why a 200 reaching it lands in the catch-all arm.
pub fn status_message(code: Option<u16>) -> String {
    match code {
        Some(0) => "HTTP status code 0: no response from API".to_string(),
        Some(1) => "HTTP status code 1: API has not returned HTTP status code".to_string(),
        Some(2) => "HTTP status code 2: unexpected error".to_string(),
        Some(c @ 3..=99) | Some(c @ 600..=999) => format!("HTTP status code {c}: Unknown Error"),
        Some(c @ 100..=199) => format!("HTTP status code {c}: Information Error"),
        Some(c @ 201..=299) => format!("HTTP status code {c}: Success Error"),
        Some(c @ 300..=399) => format!("HTTP status code {c}: Redirection Error"),
        Some(c @ 400..=499) => format!("HTTP status code {c}: Client Error"),
        Some(c @ 500..=599) => format!("HTTP status code {c}: Server Error"),
        _ => "Unexpected Error. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_have_fixed_messages() {
        assert_eq!(
            status_message(Some(NO_RESPONSE)),
            "HTTP status code 0: no response from API"
        );
        assert_eq!(
            status_message(Some(NO_STATUS)),
            "HTTP status code 1: API has not returned HTTP status code"
        );
        assert_eq!(
            status_message(Some(UNEXPECTED)),
            "HTTP status code 2: unexpected error"
        );
    }

    #[test]
    fn ranges_map_to_their_class() {
        assert_eq!(
            status_message(Some(150)),
            "HTTP status code 150: Information Error"
        );
        assert_eq!(
            status_message(Some(204)),
            "HTTP status code 204: Success Error"
        );
        assert_eq!(
            status_message(Some(301)),
            "HTTP status code 301: Redirection Error"
        );
        assert_eq!(
            status_message(Some(404)),
            "HTTP status code 404: Client Error"
        );
        assert_eq!(
            status_message(Some(503)),
            "HTTP status code 503: Server Error"
        );
    }

    #[test]
    fn range_boundaries_are_exact() {
        assert_eq!(status_message(Some(3)), "HTTP status code 3: Unknown Error");
        assert_eq!(
            status_message(Some(99)),
            "HTTP status code 99: Unknown Error"
        );
        assert_eq!(
            status_message(Some(100)),
            "HTTP status code 100: Information Error"
        );
        assert_eq!(
            status_message(Some(199)),
            "HTTP status code 199: Information Error"
        );
        assert_eq!(
            status_message(Some(201)),
            "HTTP status code 201: Success Error"
        );
        assert_eq!(
            status_message(Some(299)),
            "HTTP status code 299: Success Error"
        );
        assert_eq!(
            status_message(Some(599)),
            "HTTP status code 599: Server Error"
        );
        assert_eq!(
            status_message(Some(600)),
            "HTTP status code 600: Unknown Error"
        );
        assert_eq!(
            status_message(Some(999)),
            "HTTP status code 999: Unknown Error"
        );
    }

    #[test]
    fn everything_else_is_the_catch_all() {
        let fallback = "Unexpected Error. Please try again.";
        assert_eq!(status_message(None), fallback);
        assert_eq!(status_message(Some(200)), fallback);
        assert_eq!(status_message(Some(1000)), fallback);
        assert_eq!(status_message(Some(u16::MAX)), fallback);
    }

    #[test]
    fn classification_is_deterministic() {
        for code in 0..1200u16 {
            assert_eq!(status_message(Some(code)), status_message(Some(code)));
        }
    }
}
