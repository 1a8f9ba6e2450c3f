use std::sync::Arc;

use anyhow::{anyhow, bail};
use colored::Colorize;

use innkeep_booking::ReservationService;
use innkeep_catalog::{CustomerStore, HotelStore};
use innkeep_types::{Customer, CustomerId, Hotel, HotelId, Reservation, ReservationId};

use crate::cli::*;
use crate::config::InnkeepConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = InnkeepConfig::resolve(cli.config.as_deref(), cli.data_dir)?;
    let service = open_service(&config);
    match cli.command {
        Command::Customer(args) => cmd_customer(&service, args.action),
        Command::Hotel(args) => cmd_hotel(&service, args.action),
        Command::Reserve(args) => cmd_reserve(&service, args),
        Command::Cancel(args) => cmd_cancel(&service, args),
        Command::Reservations(args) => cmd_reservations(&service, args),
        Command::Audit => cmd_audit(&service),
    }
}

/// Wire the three JSON file collections into a reservation service.
pub fn open_service(config: &InnkeepConfig) -> ReservationService {
    let storage = &config.storage;
    let customers = storage.open::<Customer>(storage.customers_path());
    let hotels = storage.open::<Hotel>(storage.hotels_path());
    let reservations = storage.open::<Reservation>(storage.reservations_path());
    ReservationService::new(
        Arc::new(CustomerStore::new(Arc::new(customers))),
        Arc::new(HotelStore::new(Arc::new(hotels))),
        Arc::new(reservations),
        config.booking.clone(),
    )
}

fn cmd_customer(service: &ReservationService, action: CustomerAction) -> anyhow::Result<()> {
    let store = service.customers();
    match action {
        CustomerAction::Create { id, name, email } => {
            let customer = store.create(CustomerId::new(id), name, email)?;
            println!("{} Created {}", "✓".green().bold(), customer);
        }
        CustomerAction::Delete { id } => {
            let id = CustomerId::new(id);
            if !store.delete(id) {
                bail!("{id} was not deleted");
            }
            println!("{} Deleted {}", "✓".green().bold(), id.to_string().yellow());
        }
        CustomerAction::Modify { id, name, email } => {
            let customer = store.modify(CustomerId::new(id), name, email)?;
            println!("{} Updated {}", "✓".green().bold(), customer);
        }
        CustomerAction::Show { id } => {
            let id = CustomerId::new(id);
            let customer = store.get(id).ok_or_else(|| anyhow!("{id} not found"))?;
            println!("{customer}");
        }
        CustomerAction::List => print_all("customers", &store.load_all()),
    }
    Ok(())
}

fn cmd_hotel(service: &ReservationService, action: HotelAction) -> anyhow::Result<()> {
    let store = service.hotels();
    match action {
        HotelAction::Create { id, name, location, rooms } => {
            let hotel = store.create(HotelId::new(id), name, location, rooms)?;
            println!("{} Created {}", "✓".green().bold(), hotel);
        }
        HotelAction::Delete { id } => {
            let id = HotelId::new(id);
            if !store.delete(id) {
                bail!("{id} was not deleted");
            }
            println!("{} Deleted {}", "✓".green().bold(), id.to_string().yellow());
        }
        HotelAction::Modify { id, name, location, rooms } => {
            let hotel = store.modify(HotelId::new(id), name, location, rooms)?;
            println!("{} Updated {}", "✓".green().bold(), hotel);
        }
        HotelAction::Show { id } => {
            let id = HotelId::new(id);
            let hotel = store.get(id).ok_or_else(|| anyhow!("{id} not found"))?;
            println!("{hotel}");
        }
        HotelAction::List => print_all("hotels", &store.load_all()),
    }
    Ok(())
}

fn cmd_reserve(service: &ReservationService, args: ReserveArgs) -> anyhow::Result<()> {
    let hotel_id = HotelId::new(args.hotel);
    let reservation = service.try_create_reservation(
        ReservationId::new(args.reservation),
        CustomerId::new(args.customer),
        hotel_id,
    )?;
    println!("{} Reserved {}", "✓".green().bold(), reservation);
    if let Some(hotel) = service.hotels().get(hotel_id) {
        println!("  Rooms left: {}", hotel.available_rooms().to_string().cyan());
    }
    Ok(())
}

fn cmd_cancel(service: &ReservationService, args: CancelArgs) -> anyhow::Result<()> {
    let reservation = service.try_cancel_reservation(ReservationId::new(args.reservation))?;
    println!("{} Cancelled {}", "✓".green().bold(), reservation);
    Ok(())
}

fn cmd_reservations(service: &ReservationService, args: ReservationsArgs) -> anyhow::Result<()> {
    let customer = args.customer.map(CustomerId::new);
    let hotel = args.hotel.map(HotelId::new);
    let matching: Vec<Reservation> = service
        .reservations()
        .into_iter()
        .filter(|r| customer.map_or(true, |c| r.customer_id == c))
        .filter(|r| hotel.map_or(true, |h| r.hotel_id == h))
        .collect();
    print_all("reservations", &matching);
    Ok(())
}

fn cmd_audit(service: &ReservationService) -> anyhow::Result<()> {
    let report = service.audit();
    if report.is_clean() {
        println!("{} Collections are consistent", "✓".green().bold());
        return Ok(());
    }
    for r in &report.missing_customer {
        println!("  {} {} (customer missing)", "orphan:".red(), r);
    }
    for r in &report.missing_hotel {
        println!("  {} {} (hotel missing)", "orphan:".red(), r);
    }
    for d in &report.capacity_drift {
        println!(
            "  {} {}: {} rooms booked, {} reservations",
            "drift:".yellow(),
            d.hotel_id,
            d.booked_rooms,
            d.reservation_count
        );
    }
    let issues = report.missing_customer.len() + report.missing_hotel.len() + report.capacity_drift.len();
    bail!("audit found {issues} issue(s)")
}

fn print_all<T: std::fmt::Display>(what: &str, records: &[T]) {
    if records.is_empty() {
        println!("No {what}.");
        return;
    }
    for record in records {
        println!("{record}");
    }
    println!("{}", format!("{} {what}", records.len()).dimmed());
}
