use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::attribution_tracker::{provide_tracked_number, AttributionTracker};
use crate::views::{
    area::AreaLandingPage, home::HomePage, not_found::NotFoundPage,
    service_area::ServiceAreaPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_tracked_number();

    view! {
        <Stylesheet id="leptos" href="/pkg/keyway-web.css"/>

        <Title text="Keyway Lock & Door"/>

        <ConfigProvider>
            <Router>
                <AttributionTracker/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route
                            path=(StaticSegment("locations"), ParamSegment("state"), ParamSegment("city"))
                            view=AreaLandingPage
                        />
                        <Route
                            path=(
                                StaticSegment("locations"),
                                ParamSegment("state"),
                                ParamSegment("city"),
                                ParamSegment("neighborhood"),
                            )
                            view=AreaLandingPage
                        />
                        <Route
                            path=(StaticSegment("service-areas"), ParamSegment("slug"))
                            view=ServiceAreaPage
                        />
                        <Route path=StaticSegment("service-areas") view=ServiceAreaPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
