// Hotel record types: the base hotel, resort hotels and motels
use crate::attribute::{AttributeValue, Attributes};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hotel {
    pub name: String,
    pub total_rooms: u32,
    pub rating: u8,
    pub location: String,
}

impl Hotel {
    pub fn new(name: &str, total_rooms: u32, rating: u8, location: &str) -> Self {
        Self {
            name: name.to_string(),
            total_rooms,
            rating,
            location: location.to_string(),
        }
    }
}

impl Attributes for Hotel {
    fn attributes(&self) -> Vec<(&'static str, AttributeValue)> {
        vec![
            ("name", (&self.name).into()),
            ("total_rooms", self.total_rooms.into()),
            ("rating", self.rating.into()),
            ("location", (&self.location).into()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResortHotel {
    #[serde(flatten)]
    pub base: Hotel,
    pub pool_for_adults: bool,
    pub pool_for_children: bool,
    pub pool_count: u32,
    pub resort_area: String,
}

impl ResortHotel {
    pub fn new(
        base: Hotel,
        pool_for_adults: bool,
        pool_for_children: bool,
        pool_count: u32,
        resort_area: &str,
    ) -> Self {
        Self {
            base,
            pool_for_adults,
            pool_for_children,
            pool_count,
            resort_area: resort_area.to_string(),
        }
    }
}

impl Attributes for ResortHotel {
    fn attributes(&self) -> Vec<(&'static str, AttributeValue)> {
        let mut attributes = self.base.attributes();
        attributes.extend([
            ("pool_for_adults", AttributeValue::from(self.pool_for_adults)),
            ("pool_for_children", AttributeValue::from(self.pool_for_children)),
            ("pool_count", AttributeValue::from(self.pool_count)),
            ("resort_area", AttributeValue::from(&self.resort_area)),
        ]);
        attributes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Motel {
    #[serde(flatten)]
    pub base: Hotel,
    pub number_of_buildings: u32,
    pub nearby_cities: (String, String),
}

impl Motel {
    pub fn new(base: Hotel, number_of_buildings: u32, city_a: &str, city_b: &str) -> Self {
        Self {
            base,
            number_of_buildings,
            nearby_cities: (city_a.to_string(), city_b.to_string()),
        }
    }
}

impl Attributes for Motel {
    fn attributes(&self) -> Vec<(&'static str, AttributeValue)> {
        let mut attributes = self.base.attributes();
        attributes.extend([
            ("number_of_buildings", AttributeValue::from(self.number_of_buildings)),
            ("nearby_city_a", AttributeValue::from(&self.nearby_cities.0)),
            ("nearby_city_b", AttributeValue::from(&self.nearby_cities.1)),
        ]);
        attributes
    }
}

/// Any record the manager can hold.
///
/// Serialized with an internal `kind` tag, so a JSON record looks like
/// `{"kind": "motel", "name": "Motel1", ...}` with the base fields inlined.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotelRecord {
    Hotel(Hotel),
    Resort(ResortHotel),
    Motel(Motel),
}

impl HotelRecord {
    pub fn base(&self) -> &Hotel {
        match self {
            HotelRecord::Hotel(hotel) => hotel,
            HotelRecord::Resort(resort) => &resort.base,
            HotelRecord::Motel(motel) => &motel.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn total_rooms(&self) -> u32 {
        self.base().total_rooms
    }

    pub fn rating(&self) -> u8 {
        self.base().rating
    }

    /// Human-readable location; resorts prefix their area, motels name the
    /// two cities they sit between.
    pub fn location(&self) -> String {
        match self {
            HotelRecord::Hotel(hotel) => hotel.location.clone(),
            HotelRecord::Resort(resort) => {
                format!("{}, {}", resort.resort_area, resort.base.location)
            }
            HotelRecord::Motel(motel) => format!(
                "{} (between {} and {})",
                motel.base.location, motel.nearby_cities.0, motel.nearby_cities.1
            ),
        }
    }

    fn kind_label(&self) -> &'static str {
        match self {
            HotelRecord::Hotel(_) => "Hotel",
            HotelRecord::Resort(_) => "Resort Hotel",
            HotelRecord::Motel(_) => "Motel",
        }
    }
}

impl Attributes for HotelRecord {
    fn attributes(&self) -> Vec<(&'static str, AttributeValue)> {
        match self {
            HotelRecord::Hotel(hotel) => hotel.attributes(),
            HotelRecord::Resort(resort) => resort.attributes(),
            HotelRecord::Motel(motel) => motel.attributes(),
        }
    }
}

impl fmt::Display for HotelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} stars, {} rooms) in {}",
            self.kind_label(),
            self.name(),
            self.rating(),
            self.total_rooms(),
            self.location()
        )
    }
}

impl From<Hotel> for HotelRecord {
    fn from(hotel: Hotel) -> Self {
        HotelRecord::Hotel(hotel)
    }
}

impl From<ResortHotel> for HotelRecord {
    fn from(resort: ResortHotel) -> Self {
        HotelRecord::Resort(resort)
    }
}

impl From<Motel> for HotelRecord {
    fn from(motel: Motel) -> Self {
        HotelRecord::Motel(motel)
    }
}
