use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

pub fn loading_message(area: Option<&str>) -> String {
    match area.map(str::trim).filter(|area| !area.is_empty()) {
        Some(area) => format!("Finding technicians near {area}..."),
        None => "Loading service areas...".to_string(),
    }
}

/// Suspense fallback for area pages. `area` is the display name already
/// known from the URL, shown while the catalog lookup runs.
#[component]
pub fn LoadingView(#[prop(optional, into)] area: Option<String>) -> impl IntoView {
    view! {
        <div class="area-loading" role="status">
            <Spinner size=SpinnerSize::Medium />
            <p class="area-loading-message">{loading_message(area.as_deref())}</p>
        </div>
    }
}
