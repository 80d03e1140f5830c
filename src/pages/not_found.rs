use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container not-found-page">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"That page doesn't exist"</p>
            </header>

            <p>
                "Looking for a climate risk report? Start from the "
                <A href="/report">"report page"</A>
                "."
            </p>

            <nav class="back-nav">
                <A href="/">"< Back home"</A>
            </nav>
        </main>
    }
}
