//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hotel::Role;

#[derive(Parser, Debug)]
#[command(name = "hotel-cli", about = "Hotel desk terminal client")]
pub struct Cli {
    /// Backend base URL. Defaults to http://localhost:8080.
    #[arg(long, env = "HOTEL_API_URL")]
    pub api_url: Option<String>,

    /// Where the session token is kept between invocations.
    #[arg(long, env = "HOTEL_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Role sent as `X-User-Role` when the session has no user record.
    #[arg(long, env = "HOTEL_ROLE")]
    pub role: Option<Role>,

    /// Email sent as `X-User-Email` when the session has no user record.
    #[arg(long, env = "HOTEL_EMAIL")]
    pub email: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HOTEL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HOTEL_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        role: Role,
    },
    Logout,
    /// Show whether a token is held and who it belongs to, if known.
    Status,
    Rooms(RoomsCommand),
    Inventory(InventoryCommand),
    Users(UsersCommand),
    Reservations(ReservationsCommand),
    Payments(PaymentsCommand),
}

impl Command {
    /// Commands that need a session, mirroring the browser's protected routes.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login { .. } | Self::Register { .. } | Self::Logout | Self::Status)
    }
}

#[derive(Args, Debug)]
pub struct RoomsCommand {
    #[command(subcommand)]
    pub command: RoomsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RoomsSubcommand {
    List,
    Available {
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
    },
    Add {
        #[arg(long)]
        number: String,
        #[arg(long = "type", default_value = "SINGLE")]
        kind: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value_t = false)]
        unavailable: bool,
    },
}

#[derive(Args, Debug)]
pub struct InventoryCommand {
    #[command(subcommand)]
    pub command: InventorySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum InventorySubcommand {
    Items,
    AddItem(ItemArgs),
    UpdateItem {
        id: i64,
        #[command(flatten)]
        item: ItemArgs,
    },
    DeleteItem {
        id: i64,
    },
    Staff,
    AddStaff(StaffArgs),
    UpdateStaff {
        id: i64,
        #[command(flatten)]
        staff: StaffArgs,
    },
    DeleteStaff {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct ItemArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub quantity: i32,
    #[arg(long)]
    pub category: String,
}

#[derive(Args, Debug)]
pub struct StaffArgs {
    #[arg(long)]
    pub name: String,
    /// Duty such as CHEF or HOUSEKEEPING.
    #[arg(long)]
    pub duty: String,
    #[arg(long, default_value_t = false)]
    pub on_duty: bool,
}

#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    List,
    Update {
        id: i64,
        #[arg(long = "new-email")]
        email: String,
        #[arg(long = "new-role")]
        role: Role,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct ReservationsCommand {
    #[command(subcommand)]
    pub command: ReservationsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReservationsSubcommand {
    List {
        /// Case-insensitive filter on guest name or email.
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: i64,
    },
    Book {
        #[arg(long)]
        guest_name: String,
        #[arg(long)]
        guest_email: String,
        #[arg(long)]
        room_id: i64,
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct PaymentsCommand {
    #[command(subcommand)]
    pub command: PaymentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PaymentsSubcommand {
    Process { reservation_id: i64 },
    Show { reservation_id: i64 },
}
