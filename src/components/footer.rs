use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <span class="footer-brand">"ClimateLens"</span>
                <span class="footer-note">"Made with care for climate awareness"</span>
                <span class="footer-copyright">"© 2025 ClimateLens. All rights reserved."</span>
            </div>
        </footer>
    }
}
