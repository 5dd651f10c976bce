use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, NavTarget},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{
            DashboardPage, FuelSettingsPage, InventoryPage, OrdersPage, PlaceOrderPage,
            TrucksPage, UsersPage,
        },
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/users")]
    Users {},
    #[route("/fuel-settings")]
    FuelSettings {},
    #[route("/trucks")]
    Trucks {},
    #[route("/orders")]
    Orders {},
    #[route("/orders/new")]
    PlaceOrder {},
    #[route("/inventory")]
    Inventory {},
}

impl Route {
    /// The navigation target this route represents, for the shell's
    /// role-based route guard.
    pub fn nav_target(&self) -> NavTarget {
        match self {
            Route::Dashboard {} => NavTarget::Dashboard,
            Route::Users {} => NavTarget::Users,
            Route::FuelSettings {} => NavTarget::FuelSettings,
            Route::Trucks {} => NavTarget::Trucks,
            Route::Orders {} => NavTarget::Orders,
            Route::PlaceOrder {} => NavTarget::PlaceOrder,
            Route::Inventory {} => NavTarget::Inventory,
        }
    }

    pub fn for_target(target: NavTarget) -> Route {
        match target {
            NavTarget::Dashboard => Route::Dashboard {},
            NavTarget::Users => Route::Users {},
            NavTarget::FuelSettings => Route::FuelSettings {},
            NavTarget::Trucks => Route::Trucks {},
            NavTarget::Orders => Route::Orders {},
            NavTarget::PlaceOrder => Route::PlaceOrder {},
            NavTarget::Inventory => Route::Inventory {},
        }
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::seeded);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::logo_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("Failed to persist user state: {err}");
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Users() -> Element {
    rsx! { Shell { UsersPage {} } }
}

#[component]
pub fn FuelSettings() -> Element {
    rsx! { Shell { FuelSettingsPage {} } }
}

#[component]
pub fn Trucks() -> Element {
    rsx! { Shell { TrucksPage {} } }
}

#[component]
pub fn Orders() -> Element {
    rsx! { Shell { OrdersPage {} } }
}

#[component]
pub fn PlaceOrder() -> Element {
    rsx! { Shell { PlaceOrderPage {} } }
}

#[component]
pub fn Inventory() -> Element {
    rsx! { Shell { InventoryPage {} } }
}
