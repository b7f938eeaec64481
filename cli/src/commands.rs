//! Subcommand dispatch.
//!
//! Every protected command passes the route guard first, then sends its
//! request through [`Context::call`] so a 401 clears the stored session the
//! same way the browser does.

use hotel::model::{
    BookingRequest, Credentials, InventoryItem, NewRoom, RegistrationRequest, Reservation, Role, Staff,
    UserUpdate, validate_stay,
};
use hotel::policy::{self, Action};
use hotel::{ApiRequest, AuthSessionManager, RouteAccess, RouteDecision, SessionPhase, endpoints};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;

use crate::CliError;
use crate::args::{
    Command, InventorySubcommand, ItemArgs, PaymentsSubcommand, ReservationsSubcommand, RoomsSubcommand,
    StaffArgs, UsersSubcommand,
};
use crate::http::RestClient;
use crate::store::FileStore;

pub type Manager = AuthSessionManager<RestClient, FileStore>;

/// Who the caller is, as far as request headers are concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub token: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl Actor {
    fn role(&self) -> Result<Role, CliError> {
        self.role.ok_or(CliError::IdentityUnknown)
    }

    fn email(&self) -> Result<&str, CliError> {
        self.email.as_deref().ok_or(CliError::IdentityUnknown)
    }
}

/// Session manager plus the identity fallbacks from the command line.
pub struct Context {
    manager: Manager,
    role: Option<Role>,
    email: Option<String>,
}

impl Context {
    #[must_use]
    pub fn new(manager: Manager, role: Option<Role>, email: Option<String>) -> Self {
        Self { manager, role, email }
    }

    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Token and identity for a protected command.
    ///
    /// # Errors
    ///
    /// [`CliError::NotLoggedIn`] when the guard would redirect to login.
    pub fn actor(&self) -> Result<Actor, CliError> {
        if self.manager.decide(RouteAccess::Protected) != RouteDecision::Allow {
            return Err(CliError::NotLoggedIn);
        }
        let session = self.manager.session();
        let token = session.token().ok_or(CliError::NotLoggedIn)?.to_owned();
        Ok(Actor {
            token,
            email: session.email().map(ToOwned::to_owned).or_else(|| self.email.clone()),
            role: session.role().or(self.role),
        })
    }

    /// Send a protected request; a rejected token logs the session out.
    ///
    /// # Errors
    ///
    /// The backend's error, unchanged.
    pub async fn call<T: DeserializeOwned>(&mut self, request: ApiRequest) -> Result<T, CliError> {
        let result = self.manager.api().execute(request).await;
        self.settle(result)
    }

    /// [`Context::call`] for endpoints whose success body is ignored.
    ///
    /// # Errors
    ///
    /// The backend's error, unchanged.
    pub async fn call_unit(&mut self, request: ApiRequest) -> Result<(), CliError> {
        let result = self.manager.api().execute_unit(request).await;
        self.settle(result)
    }

    fn settle<T>(&mut self, result: Result<T, hotel::ApiError>) -> Result<T, CliError> {
        result.map_err(|e| {
            if self.manager.handle_rejection(&e) {
                info!("cli: stored session cleared after rejection");
            }
            CliError::Api(e)
        })
    }
}

/// Run `command` and return the JSON to print.
///
/// # Errors
///
/// Guard refusals, identity gaps, validation and backend failures.
pub async fn dispatch(ctx: &mut Context, command: Command) -> Result<Value, CliError> {
    if command.is_protected() {
        ctx.actor()?;
    }
    match command {
        Command::Login { email, password } => {
            let credentials = Credentials { email, password };
            let session = ctx.manager.login(&credentials).await?;
            Ok(json!({ "loggedIn": true, "user": session.user() }))
        }
        Command::Register { email, password, role } => {
            let request = RegistrationRequest { email, password, role };
            let session = ctx.manager.register(&request).await?;
            Ok(json!({ "registered": true, "user": session.user() }))
        }
        Command::Logout => {
            ctx.manager.logout();
            Ok(json!({ "loggedIn": false }))
        }
        Command::Status => Ok(status(ctx)),
        Command::Rooms(rooms) => run_rooms(ctx, rooms.command).await,
        Command::Inventory(inventory) => run_inventory(ctx, inventory.command).await,
        Command::Users(users) => run_users(ctx, users.command).await,
        Command::Reservations(reservations) => run_reservations(ctx, reservations.command).await,
        Command::Payments(payments) => run_payments(ctx, payments.command).await,
    }
}

fn status(ctx: &Context) -> Value {
    let session = ctx.manager.session();
    let phase = match session.phase() {
        SessionPhase::Uninitialized => "uninitialized",
        SessionPhase::Anonymous => "anonymous",
        SessionPhase::Authenticated => "authenticated",
    };
    json!({ "phase": phase, "user": session.user() })
}

fn done(message: &str) -> Value {
    json!({ "message": message })
}

async fn run_rooms(ctx: &mut Context, command: RoomsSubcommand) -> Result<Value, CliError> {
    let actor = ctx.actor()?;
    match command {
        RoomsSubcommand::List => ctx.call(endpoints::all_rooms()).await,
        RoomsSubcommand::Available { check_in, check_out } => {
            validate_stay(&check_in, &check_out).map_err(|m| CliError::Invalid(m.to_owned()))?;
            ctx.call(endpoints::available_rooms(&check_in, &check_out)).await
        }
        RoomsSubcommand::Add { number, kind, price, unavailable } => {
            let room = NewRoom { room_number: number, kind: kind.to_uppercase(), price, available: !unavailable };
            ctx.call(endpoints::add_room(&room, &actor.token)).await
        }
    }
}

fn item_of(args: ItemArgs) -> InventoryItem {
    InventoryItem { id: None, name: args.name, quantity: args.quantity, category: args.category }
}

fn staff_of(args: StaffArgs) -> Staff {
    Staff { id: None, name: args.name, role: args.duty.to_uppercase(), on_duty: args.on_duty }
}

async fn run_inventory(ctx: &mut Context, command: InventorySubcommand) -> Result<Value, CliError> {
    let actor = ctx.actor()?;
    match command {
        InventorySubcommand::Items => ctx.call(endpoints::list_items()).await,
        InventorySubcommand::Staff => ctx.call(endpoints::list_staff()).await,
        InventorySubcommand::AddItem(args) => {
            let role = permitted(&actor, Action::ManageInventory)?;
            ctx.call(endpoints::add_item(&item_of(args), &actor.token, role)).await
        }
        InventorySubcommand::UpdateItem { id, item } => {
            let role = permitted(&actor, Action::ManageInventory)?;
            ctx.call(endpoints::update_item(id, &item_of(item), &actor.token, role)).await
        }
        InventorySubcommand::DeleteItem { id } => {
            let role = permitted(&actor, Action::ManageInventory)?;
            ctx.call_unit(endpoints::delete_item(id, &actor.token, role)).await?;
            Ok(done("Item deleted"))
        }
        InventorySubcommand::AddStaff(args) => {
            let role = permitted(&actor, Action::ManageStaff)?;
            ctx.call(endpoints::add_staff(&staff_of(args), &actor.token, role)).await
        }
        InventorySubcommand::UpdateStaff { id, staff } => {
            let role = permitted(&actor, Action::ManageStaff)?;
            ctx.call(endpoints::update_staff(id, &staff_of(staff), &actor.token, role)).await
        }
        InventorySubcommand::DeleteStaff { id } => {
            let role = permitted(&actor, Action::ManageStaff)?;
            ctx.call_unit(endpoints::delete_staff(id, &actor.token, role)).await?;
            Ok(done("Staff member deleted"))
        }
    }
}

/// Role of `actor`, refused early when the advisory policy says no.
fn permitted(actor: &Actor, action: Action) -> Result<Role, CliError> {
    let role = actor.role()?;
    policy::require(role, action)?;
    Ok(role)
}

async fn run_users(ctx: &mut Context, command: UsersSubcommand) -> Result<Value, CliError> {
    let actor = ctx.actor()?;
    match command {
        UsersSubcommand::List => ctx.call(endpoints::list_users(&actor.token)).await,
        UsersSubcommand::Update { id, email, role } => {
            let update = UserUpdate { email, role };
            let request = endpoints::update_user(id, &update, &actor.token, actor.role()?)?;
            ctx.call(request).await
        }
        UsersSubcommand::Delete { id } => {
            let request = endpoints::delete_user(id, &actor.token, actor.role()?)?;
            ctx.call_unit(request).await?;
            Ok(done("User deleted"))
        }
    }
}

async fn run_reservations(ctx: &mut Context, command: ReservationsSubcommand) -> Result<Value, CliError> {
    let actor = ctx.actor()?;
    match command {
        ReservationsSubcommand::List { search } => {
            let all: Vec<Reservation> = ctx.call(endpoints::all_reservations(&actor.token)).await?;
            let query = search.unwrap_or_default();
            let matching: Vec<Reservation> = all.into_iter().filter(|r| r.matches(&query)).collect();
            Ok(serde_json::to_value(matching)?)
        }
        ReservationsSubcommand::Show { id } => {
            ctx.call(endpoints::reservation_details(id, &actor.token, actor.role()?)).await
        }
        ReservationsSubcommand::Book { guest_name, guest_email, room_id, check_in, check_out } => {
            validate_stay(&check_in, &check_out).map_err(|m| CliError::Invalid(m.to_owned()))?;
            let booking = BookingRequest {
                guest_name,
                guest_email,
                room_id,
                check_in_date: check_in,
                check_out_date: check_out,
            };
            let request = endpoints::book_room(&booking, &actor.token, actor.email()?, actor.role()?);
            ctx.call(request).await
        }
        ReservationsSubcommand::Delete { id } => {
            ctx.call_unit(endpoints::delete_reservation(id, &actor.token)).await?;
            Ok(done("Reservation deleted"))
        }
    }
}

async fn run_payments(ctx: &mut Context, command: PaymentsSubcommand) -> Result<Value, CliError> {
    let actor = ctx.actor()?;
    let (email, role) = (actor.email()?, actor.role()?);
    match command {
        PaymentsSubcommand::Process { reservation_id } => {
            ctx.call(endpoints::process_payment(reservation_id, &actor.token, email, role)).await
        }
        PaymentsSubcommand::Show { reservation_id } => {
            ctx.call(endpoints::payment_details(reservation_id, &actor.token, email, role)).await
        }
    }
}
