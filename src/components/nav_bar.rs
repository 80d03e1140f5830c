use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: &'static str| {
        if pathname() == href {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"ClimateLens"</A>
                <div class="nav-links">
                    <A href="/" class=move || link_class("/")>"Home"</A>
                    <A href="/report" class=move || link_class("/report")>"Report"</A>
                    <A href="/about" class=move || link_class("/about")>"About"</A>
                    <A href="/contact" class=move || link_class("/contact")>"Contact"</A>
                </div>
                <A href="/report" class="nav-cta">"Get Started"</A>
            </div>
        </nav>
    }
}
