use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div style="min-height: 60vh; display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 600px; width: 100%; text-align: center;">
                <div style="font-size: 6rem; font-weight: 900; color: #d97706; line-height: 1;">"404"</div>
                <h1 style="font-size: 2rem; font-weight: 700; color: #2d3748;">"Page Not Found"</h1>
                <p style="font-size: 1.1rem; color: #4a5568;">
                    "We couldn't find that page. Our service areas are listed on the home page."
                </p>
                <a href="/" style="color: #d97706; font-weight: 600;">"View service areas"</a>
            </div>
        </div>
    }
}
