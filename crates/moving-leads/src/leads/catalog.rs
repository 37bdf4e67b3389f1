use super::domain::Platform;

/// Moving-intent phrases a mock lead may exhibit.
pub const SIGNALS: [&str; 14] = [
    "Posted: \"Moving to new apartment next month!\"",
    "Asked: \"Any good movers in the area?\"",
    "Joined: \"City Relocation Help\" group",
    "Changed location from NYC to Chicago",
    "Selling furniture on Marketplace",
    "Researching moving truck rentals",
    "Complained about packing stress",
    "Looking for new neighborhood recommendations",
    "Posted moving timeline",
    "Asked about storage unit prices",
    "Requested quotes for packing supplies",
    "Updated job location to a new city",
    "Asked about school districts in another state",
    "Listed current apartment for sublet",
];

pub const NAMES: [&str; 5] = [
    "John Smith",
    "Sarah Johnson",
    "Mike Williams",
    "Lisa Brown",
    "David Wilson",
];

pub const CITIES: [&str; 5] = [
    "New York, NY",
    "Chicago, IL",
    "Los Angeles, CA",
    "Miami, FL",
    "Houston, TX",
];

/// Platforms the factory draws from. `Platform::Mock` is reserved for
/// externally submitted leads.
pub const PLATFORMS: [Platform; 4] = [
    Platform::Facebook,
    Platform::Twitter,
    Platform::Linkedin,
    Platform::Instagram,
];

/// The catalogs a [`crate::leads::MockLeadFactory`] samples from.
#[derive(Debug, Clone, Copy)]
pub struct SignalCatalog {
    signals: &'static [&'static str],
    names: &'static [&'static str],
    cities: &'static [&'static str],
    platforms: &'static [Platform],
}

impl SignalCatalog {
    pub const fn standard() -> Self {
        Self {
            signals: &SIGNALS,
            names: &NAMES,
            cities: &CITIES,
            platforms: &PLATFORMS,
        }
    }

    /// Builds a catalog from custom lists.
    ///
    /// # Panics
    ///
    /// Panics when any list is empty; a factory cannot draw from it.
    pub fn new(
        signals: &'static [&'static str],
        names: &'static [&'static str],
        cities: &'static [&'static str],
        platforms: &'static [Platform],
    ) -> Self {
        assert!(!signals.is_empty(), "signal catalog must not be empty");
        assert!(!names.is_empty(), "name catalog must not be empty");
        assert!(!cities.is_empty(), "city catalog must not be empty");
        assert!(!platforms.is_empty(), "platform catalog must not be empty");
        Self {
            signals,
            names,
            cities,
            platforms,
        }
    }

    pub fn signals(&self) -> &'static [&'static str] {
        self.signals
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn cities(&self) -> &'static [&'static str] {
        self.cities
    }

    pub fn platforms(&self) -> &'static [Platform] {
        self.platforms
    }
}

impl Default for SignalCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
