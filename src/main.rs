// Demonstration driver: builds a small hotel collection and runs every
// manager operation over it, printing the results.

#[macro_use]
extern crate clap;

use anyhow::{Context, Result};
use clap::{App, Arg};
use env_logger::Env;
use hotel_manager::{
    AttributeType, Hotel, HotelManager, HotelRecord, ManagerConfig, Motel, ResortHotel,
};
use std::fs;

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let matches = App::new("hotel_manager")
        .version(crate_version!())
        .about("Runs the hotel manager operations over a sample collection")
        .arg(
            Arg::with_name("hotels")
                .long("hotels")
                .value_name("FILE")
                .help("JSON array of hotel records to load instead of the built-in sample")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("min-rooms")
                .long("min-rooms")
                .value_name("N")
                .help("Room threshold for the room-count query")
                .takes_value(true),
        )
        .get_matches();

    let mut config = ManagerConfig::default();
    if let Some(min_rooms) = matches.value_of("min-rooms") {
        config.default_min_rooms = min_rooms
            .parse()
            .with_context(|| format!("invalid --min-rooms value '{}'", min_rooms))?;
    }

    let hotels = match matches.value_of("hotels") {
        Some(path) => load_hotels(path)?,
        None => sample_hotels(),
    };
    tracing::info!("loaded {} hotels", hotels.len());

    run(HotelManager::with_config(hotels, config))
}

fn load_hotels(path: &str) -> Result<Vec<HotelRecord>> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    serde_json::from_str(&json).with_context(|| format!("failed to parse hotels in {}", path))
}

fn sample_hotels() -> Vec<HotelRecord> {
    vec![
        ResortHotel::new(
            Hotel::new("Resort1", 100, 4, "South Coast"),
            true,
            true,
            5,
            "Paradise Resort",
        )
        .into(),
        Motel::new(Hotel::new("Motel1", 50, 3, "Route 9"), 1, "CityA", "CityB").into(),
        ResortHotel::new(
            Hotel::new("Resort2", 200, 5, "East Bay"),
            true,
            false,
            8,
            "Beach Resort",
        )
        .into(),
    ]
}

fn run(mut manager: HotelManager) -> Result<()> {
    manager.display(None);

    manager.add(
        ResortHotel::new(
            Hotel::new("New Resort", 150, 4, "Islands"),
            false,
            true,
            6,
            "Tropical Oasis",
        )
        .into(),
    );

    let min_rooms = manager.config().default_min_rooms;
    println!("Hotels with at least {} rooms:", min_rooms);
    manager.display(Some(manager.find_with_default_min_rooms().as_slice()));

    println!("Resort hotels with a pool for adults:");
    manager.display(Some(manager.find_with_adult_pool().as_slice()));

    println!("Locations:");
    println!("{:?}", manager.locations());

    println!("Hotels with index:");
    for (index, hotel) in manager.indexed_pairs() {
        println!("{}: {}", index, hotel.name());
    }

    println!("Hotels with locations:");
    for (hotel, location) in manager.paired_with_locations() {
        println!("{} -> {}", hotel.name(), location);
    }

    println!("Integer attributes:");
    let integers = manager.attributes_of_type(AttributeType::Integer);
    println!("{}", serde_json::to_string(&integers)?);

    println!("Condition 'rating >= 4':");
    let summary = manager.evaluate_predicate(|hotel| hotel.rating() >= 4);
    println!("{}", serde_json::to_string(&summary)?);

    let last = manager.len() - 1;
    println!("Last hotel: {}", manager.at(last)?);

    Ok(())
}
