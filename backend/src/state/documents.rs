//! Named document catalogue
//!
//! Every JSON document the service knows about, keyed by the logical name
//! clients and handlers use to refer to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A JSON document stored at a well-known location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedDocument {
    /// Sample itineraries, also returned by itinerary generation
    Itineraries,
    /// The traveller's profile
    UserProfile,
    /// Lesser-known places worth visiting
    HiddenGems,
    /// Local guide listings
    LocalGuides,
    /// Festival calendar
    Festivals,
    /// Community-submitted stories
    CommunityStories,
    /// Hotel listings
    Hotels,
    /// Hotel-booking document holding the `bookings` array
    Bookings,
}

impl NamedDocument {
    /// All documents, in the order they're checked at startup
    pub const ALL: [NamedDocument; 8] = [
        NamedDocument::Itineraries,
        NamedDocument::UserProfile,
        NamedDocument::HiddenGems,
        NamedDocument::LocalGuides,
        NamedDocument::Festivals,
        NamedDocument::CommunityStories,
        NamedDocument::Hotels,
        NamedDocument::Bookings,
    ];

    /// Logical name used in lookups and log lines
    pub fn name(&self) -> &'static str {
        match self {
            NamedDocument::Itineraries => "itineraries",
            NamedDocument::UserProfile => "user_profile",
            NamedDocument::HiddenGems => "hidden_gems",
            NamedDocument::LocalGuides => "local_guides",
            NamedDocument::Festivals => "festivals",
            NamedDocument::CommunityStories => "community_stories",
            NamedDocument::Hotels => "hotels",
            NamedDocument::Bookings => "bookings",
        }
    }

    /// Default file name inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            NamedDocument::Itineraries => "itineraries.json",
            NamedDocument::UserProfile => "user_profile.json",
            NamedDocument::HiddenGems => "hidden_gems.json",
            NamedDocument::LocalGuides => "local_guides.json",
            NamedDocument::Festivals => "festivals.json",
            NamedDocument::CommunityStories => "community_stories.json",
            NamedDocument::Hotels => "hotel_data.json",
            NamedDocument::Bookings => "hotels.json",
        }
    }
}

impl fmt::Display for NamedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedDocument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedDocument::ALL
            .into_iter()
            .find(|doc| doc.name() == s)
            .ok_or_else(|| format!("Unknown document: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for doc in NamedDocument::ALL {
            assert_eq!(doc.name().parse::<NamedDocument>(), Ok(doc));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "weather".parse::<NamedDocument>().unwrap_err();
        assert!(err.contains("weather"));
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = NamedDocument::ALL.iter().map(|d| d.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), NamedDocument::ALL.len());
    }

    #[test]
    fn test_serializes_as_logical_name() {
        let json = serde_json::to_string(&NamedDocument::CommunityStories).unwrap();
        assert_eq!(json, "\"community_stories\"");
    }
}
