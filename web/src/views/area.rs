use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use shared_types::slug::title_case;

use crate::{
    components::{CallButton, ErrorView, LoadingView},
    server::{fetch_area_page, AreaPage},
};

/// `/locations/:state/:city` and `/locations/:state/:city/:neighborhood`
#[component]
pub fn AreaLandingPage() -> impl IntoView {
    let params = use_params_map();

    let segments = Memo::new(move |_| {
        let params = params.read();
        (
            params.get("state").unwrap_or_default(),
            params.get("city").unwrap_or_default(),
            params.get("neighborhood").unwrap_or_default(),
        )
    });

    let page = Resource::new(
        move || segments.get(),
        move |(state, city, neighborhood)| async move {
            fetch_area_page(state, city, neighborhood).await
        },
    );

    let area_hint = move || {
        let (state, city, _) = segments.get();
        format!("{}, {}", title_case(&city), state.to_uppercase())
    };

    view! {
        <Suspense fallback=move || view! { <LoadingView area={area_hint()} /> }>
            {move || page.get().map(|result| match result {
                Ok(page) => view! { <AreaPageView page=page /> }.into_any(),
                Err(e) => view! { <ErrorView message=Some(e.to_string()) /> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
pub fn AreaPageView(page: AreaPage) -> impl IntoView {
    let AreaPage {
        business_name,
        default_phone,
        identity,
        location,
    } = page;
    let location_phone = location.as_ref().and_then(|l| l.phone.clone());

    view! {
        <div class="area-page">
            <header class="area-header">
                <h1 class="area-title">
                    {format!("Locksmith & Garage Door Repair in {}", identity.display_name)}
                </h1>
                <p class="area-subtitle">{business_name}</p>
                <CallButton default_phone=default_phone location_phone=location_phone label="Call for service" />
            </header>

            {location.map(|location| view! {
                <section class="area-location">
                    <h2>{format!("Served from our {} location", location.name)}</h2>
                    <ul class="area-links">
                        {location.areas.into_iter().map(|area| view! {
                            <li>
                                <a href={format!("/service-areas/{}", area.slug)}>
                                    {format!("{}, {}", area.name, area.state)}
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            })}
        </div>
    }
}
