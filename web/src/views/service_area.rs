use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use shared_types::slug::title_case;

use crate::{
    components::{ErrorView, InvalidAreaView, LoadingView},
    server::{fetch_service_area_page, ServiceAreaLookup},
    views::area::AreaPageView,
};

/// `/service-areas/:slug`
#[component]
pub fn ServiceAreaPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug"));

    let lookup = Resource::new(
        move || slug.get(),
        move |slug| async move { fetch_service_area_page(slug).await },
    );

    view! {
        <Suspense fallback=move || view! {
            <LoadingView area={slug.get().map(|slug| title_case(&slug)).unwrap_or_default()} />
        }>
            {move || lookup.get().map(|result| match result {
                Ok(ServiceAreaLookup::Found(page)) => view! { <AreaPageView page=page /> }.into_any(),
                Ok(ServiceAreaLookup::MissingIdentifier) => view! { <InvalidAreaView /> }.into_any(),
                Err(e) => view! { <ErrorView message=Some(e.to_string()) /> }.into_any(),
            })}
        </Suspense>
    }
}
