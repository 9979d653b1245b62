use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Typed key for a photographer. Ids coming from URLs are parsed into this
/// once, so lookups never compare strings against numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotographerId(pub u64);

impl fmt::Display for PhotographerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhotographerId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PhotographerId)
            .map_err(|_| AppError::BadRequest(format!("Invalid photographer id: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photographer {
    pub id: PhotographerId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub tagline: String,
    /// Day rate, in euros.
    pub price: u32,
    /// Filename under the photographer asset directory.
    pub portrait: String,
}

impl Photographer {
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    pub fn day_rate(&self) -> String {
        format!("{}€/jour", self.price)
    }
}

/// Listing card, with the portrait already resolved to a URL.
#[derive(Debug, Clone, Serialize)]
pub struct PhotographerCard {
    pub id: PhotographerId,
    pub name: String,
    pub location: String,
    pub tagline: String,
    pub day_rate: String,
    pub portrait_url: String,
    pub profile_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_with_surrounding_whitespace() {
        assert_eq!(" 243 ".parse::<PhotographerId>().unwrap(), PhotographerId(243));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(matches!("abc".parse::<PhotographerId>(), Err(AppError::BadRequest(_))));
        assert!(matches!("-1".parse::<PhotographerId>(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "name": "Mimi Keel",
            "id": 243,
            "city": "London",
            "country": "UK",
            "tagline": "Voir le beau dans le quotidien",
            "price": 400,
            "portrait": "MimiKeel.jpg"
        }"#;

        let photographer: Photographer = serde_json::from_str(json).unwrap();

        assert_eq!(photographer.id, PhotographerId(243));
        assert_eq!(photographer.location(), "London, UK");
        assert_eq!(photographer.day_rate(), "400€/jour");
    }
}
