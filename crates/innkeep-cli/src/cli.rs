use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "innkeep",
    about = "Innkeep: customers, hotels and room reservations",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log every store mutation
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file [default: ./innkeep.toml if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the JSON collections; overrides the configuration
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage customers
    Customer(CustomerArgs),
    /// Manage hotels
    Hotel(HotelArgs),
    /// Book one room for a customer
    Reserve(ReserveArgs),
    /// Cancel a reservation and return its room
    Cancel(CancelArgs),
    /// List reservations
    Reservations(ReservationsArgs),
    /// Check the collections against each other
    Audit,
}

#[derive(Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub action: CustomerAction,
}

#[derive(Subcommand)]
pub enum CustomerAction {
    /// Add a customer
    Create { id: i64, name: String, email: String },
    /// Remove a customer (reservations are kept)
    Delete { id: i64 },
    /// Change a customer's name or email
    Modify {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Show one customer
    Show { id: i64 },
    /// List every customer
    List,
}

#[derive(Args)]
pub struct HotelArgs {
    #[command(subcommand)]
    pub action: HotelAction,
}

#[derive(Subcommand)]
pub enum HotelAction {
    /// Add a hotel with every room available
    Create {
        id: i64,
        name: String,
        location: String,
        rooms: u32,
    },
    /// Remove a hotel (reservations are kept)
    Delete { id: i64 },
    /// Change a hotel's name, location or room count
    Modify {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        rooms: Option<u32>,
    },
    /// Show one hotel
    Show { id: i64 },
    /// List every hotel
    List,
}

#[derive(Args)]
pub struct ReserveArgs {
    pub reservation: i64,
    pub customer: i64,
    pub hotel: i64,
}

#[derive(Args)]
pub struct CancelArgs {
    pub reservation: i64,
}

#[derive(Args)]
pub struct ReservationsArgs {
    /// Only reservations for this customer
    #[arg(long)]
    pub customer: Option<i64>,
    /// Only reservations at this hotel
    #[arg(long)]
    pub hotel: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_reserve_with_global_flags() {
        let cli = Cli::try_parse_from(["innkeep", "reserve", "500", "1", "2", "--data-dir", "/tmp/x", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        match cli.command {
            Command::Reserve(args) => {
                assert_eq!((args.reservation, args.customer, args.hotel), (500, 1, 2));
            }
            _ => panic!("expected reserve"),
        }
    }

    #[test]
    fn parses_hotel_modify_options() {
        let cli = Cli::try_parse_from(["innkeep", "hotel", "modify", "3", "--rooms", "12"]).unwrap();
        match cli.command {
            Command::Hotel(HotelArgs {
                action: HotelAction::Modify { id, name, location, rooms },
            }) => {
                assert_eq!(id, 3);
                assert_eq!(rooms, Some(12));
                assert!(name.is_none() && location.is_none());
            }
            _ => panic!("expected hotel modify"),
        }
    }

    #[test]
    fn rejects_negative_room_count() {
        assert!(Cli::try_parse_from(["innkeep", "hotel", "create", "1", "Plaza", "Cancun", "-4"]).is_err());
    }
}
