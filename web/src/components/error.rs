use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
        </MessageBar>
    }
}

/// Shown when a service-area page is reached without an area slug.
#[component]
pub fn InvalidAreaView() -> impl IntoView {
    view! {
        <div class="invalid-area">
            <MessageBar intent=MessageBarIntent::Warning>
                "We couldn't tell which service area you were looking for."
            </MessageBar>
            <a href="/" class="invalid-area-link">"Browse all service areas"</a>
        </div>
    }
}
