//! Output formatting module

use chauffeur_domain::model::{DiscountSnapshot, FareResult, RideRecord, TripRequest, Vehicle};
use chauffeur_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct QuoteOutput<'a> {
    vehicle_id: &'a str,
    trip: &'a TripRequest,
    fare: &'a FareResult,
    discount: &'a DiscountSnapshot,
}

fn describe_trip(trip: &TripRequest) -> String {
    match trip {
        TripRequest::OneWay { distance_km } => format!("one-way, {:.1} km", distance_km),
        TripRequest::RoundTrip { distance_km } => {
            format!("round-trip, {:.1} km each way", distance_km)
        }
        TripRequest::Hourly { duration_hours } => format!("hourly, {} h", duration_hours),
    }
}

fn print_fare(fare: &FareResult) {
    println!("Base fare:       {:>10.2}", fare.base_fare);
    if fare.has_discount() {
        println!("Discount:        {:>10.2}", -fare.discount_amount);
    }
    println!("Total amount:    {:>10.2}", fare.final_fare);
}

pub fn output_quote(
    output_format: OutputFormat,
    vehicle: &Vehicle,
    trip: &TripRequest,
    fare: &FareResult,
    discount: &DiscountSnapshot,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&QuoteOutput {
            vehicle_id: &vehicle.id,
            trip,
            fare,
            discount,
        })?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nFare Quote");
    println!("==========");
    println!("Vehicle:         {}", vehicle.display_name());
    println!("Trip:            {}", describe_trip(trip));
    if let Some(ref d) = discount.discount {
        println!(
            "Code:            {} ({}, {}%){}",
            d.code.as_deref().unwrap_or("-"),
            d.kind,
            d.percentage,
            if discount.is_valid { "" } else { " - expired" }
        );
        if let Some(expires_at) = d.expires_at {
            println!("Valid until:     {}", expires_at.format("%Y-%m-%d %H:%M UTC"));
        }
    }
    println!();
    print_fare(fare);
    Ok(())
}

pub fn output_ride(output_format: OutputFormat, ride: &RideRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(ride)?);
        return Ok(());
    }

    println!("\nBooking Confirmed");
    println!("=================");
    println!("Ride:            {}", ride.id);
    println!("Status:          {}", ride.status);
    println!("Vehicle:         {}", ride.vehicle_id);
    println!("Trip:            {}", describe_trip(&ride.trip));
    if let Some(ref d) = ride.discount {
        println!(
            "Code:            {} ({}%)",
            d.code.as_deref().unwrap_or(d.kind.label()),
            d.percentage
        );
    }
    println!();
    print_fare(&ride.fare);
    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }

    println!(
        "{:<16} {:<20} {:>4} {:>4} {:>9} {:>7} {:>8}",
        "ID", "Name", "Pax", "Bags", "Fixed", "Per km", "Hourly"
    );
    println!("{}", "-".repeat(74));
    for v in vehicles {
        println!(
            "{:<16} {:<20} {:>4} {:>4} {:>9.2} {:>7.2} {:>8.2}",
            v.id,
            v.name,
            v.passenger_capacity,
            v.luggage_capacity,
            v.fixed_fare,
            v.per_km_rate,
            v.hourly_rate
        );
    }
    Ok(())
}
