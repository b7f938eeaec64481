//! Root component and route table.
//!
//! Every route except `/login` and `/register` sits behind [`Protected`].
//! Unknown paths redirect to the login page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::pages::add_room::AddRoomPage;
use crate::pages::book_room::BookRoomPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::inventory::InventoryPage;
use crate::pages::login::LoginPage;
use crate::pages::make_payment::MakePaymentPage;
use crate::pages::register::RegisterPage;
use crate::pages::reservation_details::ReservationDetailsPage;
use crate::pages::reservations::ReservationsPage;
use crate::pages::users::UsersPage;
use crate::state::session::SessionProvider;
use crate::util::guard::Protected;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Hotel Desk"/>
        <SessionProvider>
            <Router>
                <main class="app">
                    <Routes fallback=|| view! { <Redirect path="/login"/> }>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/dashboard") view=|| view! { <Protected><DashboardPage/></Protected> }/>
                        <Route path=path!("/inventory") view=|| view! { <Protected><InventoryPage/></Protected> }/>
                        <Route path=path!("/users") view=|| view! { <Protected><UsersPage/></Protected> }/>
                        <Route path=path!("/book-room") view=|| view! { <Protected><BookRoomPage/></Protected> }/>
                        <Route path=path!("/reservations") view=|| view! { <Protected><ReservationsPage/></Protected> }/>
                        <Route
                            path=path!("/reservations/:reservationId")
                            view=|| view! { <Protected><ReservationDetailsPage/></Protected> }
                        />
                        <Route path=path!("/add-room") view=|| view! { <Protected><AddRoomPage/></Protected> }/>
                        <Route path=path!("/make-payment") view=|| view! { <Protected><MakePaymentPage/></Protected> }/>
                        <Route
                            path=path!("/make-payment/:reservationId")
                            view=|| view! { <Protected><MakePaymentPage/></Protected> }
                        />
                    </Routes>
                </main>
            </Router>
        </SessionProvider>
    }
}
