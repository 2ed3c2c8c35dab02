use leptos::prelude::*;

use crate::{
    components::{CallButton, ErrorView, LoadingView},
    server::{fetch_locations, HubPage},
};

/// Hub page: every location and the areas it serves, in catalog order.
#[component]
pub fn HomePage() -> impl IntoView {
    let hub = Resource::new(|| (), |_| async move { fetch_locations().await });

    view! {
        <Suspense fallback=move || view! { <LoadingView /> }>
            {move || hub.get().map(|result| match result {
                Ok(hub) => view! { <HubView hub=hub /> }.into_any(),
                Err(e) => view! { <ErrorView message=Some(e.to_string()) /> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn HubView(hub: HubPage) -> impl IntoView {
    let HubPage {
        business_name,
        default_phone,
        locations,
    } = hub;

    view! {
        <div class="hub-page">
            <header class="hub-header">
                <h1>{business_name}</h1>
                <CallButton default_phone=default_phone location_phone=None />
            </header>
            <div class="hub-locations">
                {locations.into_iter().map(|location| view! {
                    <section class="hub-location">
                        <h2>{location.name}</h2>
                        <ul>
                            {location.areas.into_iter().map(|area| view! {
                                <li>
                                    <a href={format!("/service-areas/{}", area.slug)}>{area.name}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </section>
                }).collect_view()}
            </div>
        </div>
    }
}
