//! StayHub Frontend App
//!
//! Sidebar navigation over the data screens. The API client is built
//! once here and shared with every screen through context.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{ComplaintScreen, FacilityScreen, RoomScreen, RoomTypeScreen};
use crate::config::Config;

/// Top-level screen selection
#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Rooms,
    RoomTypes,
    Facilities,
    Complaints,
}

const NAV_ITEMS: &[(Screen, &str)] = &[
    (Screen::Rooms, "Data Kamar"),
    (Screen::RoomTypes, "Data Tipe Kamar"),
    (Screen::Facilities, "Fasilitas Kos"),
    (Screen::Complaints, "List Ajuan"),
];

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::new(Config::from_env()));

    let (current_screen, set_current_screen) = signal(Screen::Rooms);

    view! {
        <div class="app-shell">
            <nav class="sidebar">
                <div class="sidebar-brand">"StayHub"</div>
                {NAV_ITEMS.iter().map(|(screen, label)| {
                    let target = *screen;
                    view! {
                        <button
                            class=move || if current_screen.get() == target { "nav-item active" } else { "nav-item" }
                            on:click=move |_| set_current_screen.set(target)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>
            // Switching screens remounts them, so entering a screen always
            // starts a fresh fetch cycle
            <main class="screen-host">
                {move || match current_screen.get() {
                    Screen::Rooms => view! { <RoomScreen /> }.into_any(),
                    Screen::RoomTypes => view! { <RoomTypeScreen /> }.into_any(),
                    Screen::Facilities => view! { <FacilityScreen /> }.into_any(),
                    Screen::Complaints => view! { <ComplaintScreen /> }.into_any(),
                }}
            </main>
        </div>
    }
}
