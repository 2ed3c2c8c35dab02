use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shared_types::TrackedNumber;

/// Tracked number as last read from browser storage. Provided by [`App`].
///
/// [`App`]: crate::app::App
#[derive(Clone, Copy)]
pub struct TrackedNumberContext(pub RwSignal<Option<TrackedNumber>>);

pub fn provide_tracked_number() -> TrackedNumberContext {
    let context = TrackedNumberContext(RwSignal::new(None));
    provide_context(context);
    context
}

/// Reactive read of the tracked number; `None` outside an [`App`] tree.
///
/// [`App`]: crate::app::App
pub fn use_tracked_number() -> Signal<Option<TrackedNumber>> {
    let context = use_context::<TrackedNumberContext>();
    Signal::derive(move || context.and_then(|TrackedNumberContext(signal)| signal.get()))
}

/// Captures `ctn`/`phone` from every navigation's query string into
/// localStorage and republishes the stored number.
#[component]
pub fn AttributionTracker() -> impl IntoView {
    let location = use_location();
    let tracked = use_context::<TrackedNumberContext>().unwrap_or_else(provide_tracked_number);

    Effect::new(move |_| {
        let search = location.search.get();

        #[cfg(feature = "hydrate")]
        {
            use crate::attribution::{AttributionStore, BrowserStorage};

            let store = AttributionStore::new(BrowserStorage);
            store.capture_from_query(&search);
            tracked.0.set(store.tracked());
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (search, tracked);
        }
    });
}
