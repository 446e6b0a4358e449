// --- File: crates/wwex_speedship/examples/quote_parcel.rs ---
//! Quotes one parcel shipment against the configured SpeedShip endpoint.
//!
//! Reads `config/` and `.env` like any host application would:
//!
//! ```sh
//! RUN_ENV=debug cargo run -p wwex-speedship --example quote_parcel
//! ```

use std::error::Error;

use tracing::Level;
use wwex_common::{logging, Address, Measurement, Shipment, ShipmentItem, ShippingMethod, Unit};
use wwex_config::load_config;
use wwex_speedship::SpeedShipMethod;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_with_level(Level::DEBUG);

    let config = load_config()?;
    let speedship = match config.speedship {
        Some(speedship) if config.use_speedship => speedship,
        _ => {
            println!("SpeedShip is disabled; set use_speedship = true in config/default.toml");
            return Ok(());
        }
    };

    let method = SpeedShipMethod::from_config("speedship", "WWEX SpeedShip", speedship)?;

    let mut shipment = Shipment::new(
        "example-1",
        Address {
            country_code: "US".to_string(),
            administrative_area: "IL".to_string(),
            locality: "Chicago".to_string(),
            postal_code: "60601".to_string(),
            ..Address::default()
        },
    );
    shipment.shipping_address = Some(Address {
        country_code: "US".to_string(),
        administrative_area: "TX".to_string(),
        locality: "Austin".to_string(),
        postal_code: "78701".to_string(),
        ..Address::default()
    });
    shipment.items = vec![ShipmentItem {
        order_item_id: "1".to_string(),
        title: "Widget".to_string(),
        quantity: 2,
        weight: Measurement::new(3.0, Unit::Pound),
        purchased_entity: None,
    }];

    let rates = method.quote(&shipment).await?;
    for rate in &rates {
        println!(
            "{:<28} {:>10} {}",
            rate.service.label,
            rate.amount.number,
            rate.amount.currency_code
        );
    }
    Ok(())
}
