use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod slug;

pub use catalog::{CatalogError, CatalogIssue, LocationDataset};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A physical service hub. Owns its service areas outright.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub geo: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub service_areas: Vec<ServiceArea>,
}

/// A named sub-region served by exactly one [`Location`]. `slug` is unique
/// across the whole catalog, not only within its owner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceArea {
    #[serde(default)]
    pub slug: String,
    pub name: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<GeoPoint>,
}

/// Resolved geographic context for a single navigation. Never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AreaIdentity {
    pub slug: String,
    pub display_name: String,
    pub owner_location_id: Option<String>,
}

/// Campaign phone number captured from the inbound query string.
///
/// Holds digits with at most one leading `+`; construct through
/// [`TrackedNumber::parse`] so the invariant holds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TrackedNumber(String);

impl TrackedNumber {
    pub const MIN_DIGITS: usize = 7;
    pub const MAX_DIGITS: usize = 15;

    /// Sanitizes `raw` and accepts it when the digit count is E.164-plausible.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = digits_and_plus(raw);
        let digits = digit_count(&cleaned);
        (Self::MIN_DIGITS..=Self::MAX_DIGITS)
            .contains(&digits)
            .then_some(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TrackedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps ASCII digits plus a `+` only when it leads the cleaned result.
pub fn digits_and_plus(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_plus_keeps_only_leading_plus() {
        assert_eq!(digits_and_plus("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(digits_and_plus("555+123"), "555123");
        assert_eq!(digits_and_plus("++1555"), "+1555");
        assert_eq!(digits_and_plus("call me"), "");
    }

    #[test]
    fn tracked_number_enforces_digit_bounds() {
        assert!(TrackedNumber::parse("123").is_none());
        assert!(TrackedNumber::parse("123456").is_none());
        assert_eq!(
            TrackedNumber::parse("1234567").map(TrackedNumber::into_inner),
            Some("1234567".to_string())
        );
        assert!(TrackedNumber::parse("+123456789012345").is_some());
        assert!(TrackedNumber::parse("1234567890123456").is_none());
    }

    #[test]
    fn plus_does_not_count_toward_digits() {
        assert!(TrackedNumber::parse("+123456").is_none());
        assert_eq!(
            TrackedNumber::parse("+1-201-555-0100").unwrap().as_str(),
            "+12015550100"
        );
    }

    #[test]
    fn location_deserializes_with_optional_fields_missing() {
        let json = r#"{"id":"hub","name":"Hub","geo":{"lat":1.0,"lng":2.0}}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.phone, None);
        assert!(location.service_areas.is_empty());
    }
}
