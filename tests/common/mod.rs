//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_resource;

use motolist::config::{Config, RemoteConfig};
use motolist::listing::ListingForm;
use motolist::remote::ResourceClient;
use motolist::store::CollectionStore;
use serde_json::{json, Value};
use std::net::TcpListener;

pub const RESOURCE: &str = "listings";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn config_for(base_url: &str) -> Config {
    Config {
        remote: RemoteConfig {
            base_url: base_url.to_string(),
            resource: RESOURCE.to_string(),
            timeout_seconds: Some(5),
            connect_timeout_seconds: 1,
        },
        ..Config::default()
    }
}

/// A store talking to `base_url`.
pub fn store_for(base_url: &str) -> CollectionStore {
    let config = config_for(base_url);
    let client = ResourceClient::new(config.endpoint().unwrap(), &config.remote)
        .expect("Failed to build client");
    CollectionStore::new(client)
}

pub fn honda_wave_form() -> ListingForm {
    ListingForm {
        name: "Honda Wave".to_string(),
        color: "Red".to_string(),
        price: "18500000".to_string(),
        description: "test".to_string(),
        image_url: "https://x/y.jpg".to_string(),
    }
}

/// Server-side record as the mock stores it.
pub fn listing_json(id: &str, name: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": "Black",
        "price": price,
        "description": "seeded",
        "imageUrl": "https://img.example.com/bike.jpg"
    })
}
