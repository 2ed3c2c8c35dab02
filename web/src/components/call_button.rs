use leptos::prelude::*;

use crate::components::attribution_tracker::use_tracked_number;
use crate::contact::resolve_contact;

#[component]
pub fn CallButton(
    /// Business-wide fallback number
    default_phone: String,
    /// Number of the location serving this page, if any
    location_phone: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let tracked = use_tracked_number();
    let contact = Memo::new(move |_| {
        let tracked = tracked.get();
        resolve_contact(tracked.as_ref(), &default_phone, location_phone.as_deref())
    });
    let label = label.unwrap_or_else(|| "Call now".to_string());

    view! {
        <a
            class="call-button"
            href=move || contact.get().dial_href
            style="display: inline-block; background: #d97706; color: white; padding: 0.75rem 1.5rem; border-radius: 10px; font-weight: 600; text-decoration: none;"
        >
            {label} " " {move || contact.get().phone}
        </a>
    }
}
