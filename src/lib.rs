// Main library file for the hotel collection manager

pub mod attribute;
pub mod config;
pub mod error;
pub mod hotel;
pub mod manager;

// Re-export key types for convenience
pub use attribute::{AttributeType, AttributeValue, Attributes};
pub use config::ManagerConfig;
pub use error::{ManagerError, Result};
pub use hotel::{Hotel, HotelRecord, Motel, ResortHotel};
pub use manager::{HotelManager, PredicateSummary};
