//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center p-4">
            <div class="organic-card p-10 text-center">
                <h1 class="font-display text-6xl font-bold text-foreground mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-foreground mb-2">"Page Not Found"</h2>

                <p class="text-muted-foreground mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="organic-button">
                    "Back to the bag"
                </A>
            </div>
        </main>
    }
}
