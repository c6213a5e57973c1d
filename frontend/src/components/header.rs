use chat_widget_core::render::TRIP_HEADER;
use leptos::prelude::*;

const MENU_ICON: &str = "https://cdn.builder.io/api/v1/image/assets/TEMP/19499dd8d93534454a9fe1072a321d2995b15abd10050f9a584b9ed2a4d615ba?apiKey=ad0536c147a54b0ab52575a2dda9bd51&";
const LOCATION_ICON: &str = "https://cdn.builder.io/api/v1/image/assets/TEMP/ba77c655c7867f2cdcfdf05b175b6c8595e39cd4e657a4e4ebbc8c2c64d9745f?apiKey=ad0536c147a54b0ab52575a2dda9bd51&";
const MAP_ICON: &str = "https://cdn.builder.io/api/v1/image/assets/TEMP/16d59e03f69b3a48c18f2e18e045131389869b0b357dda2d1cd7c705069cccce?apiKey=ad0536c147a54b0ab52575a2dda9bd51&";

/// Sticky header with the group name and trip route. Purely decorative.
#[component]
pub fn TripHeaderBar() -> impl IntoView {
    let trip = TRIP_HEADER;

    view! {
        <header class="chat-header">
            <div class="header-title">
                <div class="group-name">{trip.group_name}</div>
                <img class="icon-sm" loading="lazy" src=MENU_ICON alt="icon" />
            </div>
            <div class="header-route">
                <div class="route">
                    <img class="icon-lg" loading="lazy" src=LOCATION_ICON alt="location" />
                    <div>
                        <span class="route-label">"From"</span>" "
                        <span class="route-stop">{trip.from}</span>
                        <span class="route-stop">{trip.from_detail}</span>
                        <br />
                        <span class="route-label">"To"</span>" "
                        <span class="route-stop">{trip.to}</span>
                    </div>
                </div>
                <img class="icon-md" loading="lazy" src=MAP_ICON alt="map" />
            </div>
        </header>
    }
}
