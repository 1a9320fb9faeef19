//! Postal address returned by a lookup.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A candidate postal address.
///
/// `id` is only meaningful within a single lookup batch: the search state
/// machine overwrites it with the submitted house number, so every candidate
/// of one search shares the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub postcode: String,
    pub house_number: String,
    pub street: String,
    pub city: String,
    pub lat: f64,
    pub long: f64,
}

impl Address {
    /// Returns a copy of this address keyed by `house_number`.
    ///
    /// Both `id` and `house_number` are replaced with the submitted value.
    #[must_use]
    pub fn keyed_by_house_number(self, house_number: &str) -> Self {
        Self {
            id: house_number.to_owned(),
            house_number: house_number.to_owned(),
            ..self
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.street, self.house_number, self.postcode, self.city
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address {
            id: "1234-5-0".to_string(),
            postcode: "1234".to_string(),
            house_number: "5".to_string(),
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            lat: 51.5237,
            long: -0.1585,
        }
    }

    #[test]
    fn test_keyed_by_house_number_overwrites_id_and_house_number() {
        let address = sample().keyed_by_house_number("7");
        assert_eq!(address.id, "7");
        assert_eq!(address.house_number, "7");
        assert_eq!(address.street, "Baker Street");
        assert_eq!(address.postcode, "1234");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["houseNumber"], "5");
        assert!(json.get("house_number").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "Baker Street 5, 1234 London");
    }
}
