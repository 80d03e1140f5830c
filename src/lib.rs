pub mod analytics;
pub mod api;
pub mod components;
pub mod config;
pub mod flow;
pub mod notify;
pub mod pages;
pub mod storage;

use components::{NavBar, ToastHost};
use leptos::*;
use leptos_router::*;
use notify::Toaster;
use pages::{AboutPage, ContactPage, HomePage, NotFoundPage, ReportPage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for the Leptos 0.6 router not always re-rendering on browser
/// back/forward: force a reload on `popstate` so the app re-mounts at the
/// correct URL. The only persisted state (the paid flag) lives in
/// localStorage and survives the reload.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The page hit an unexpected error. Reloading usually clears it."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Inner root that provides the toast queue and declares routes.
/// Wrapped by ErrorBoundary so initialization panics are caught.
#[component]
fn RootInner() -> impl IntoView {
    Toaster::provide();

    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/report" view=ReportPage/>
                <Route path="/about" view=AboutPage/>
                <Route path="/contact" view=ContactPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
            <ToastHost/>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    setup_popstate_reload();
    mount_to_body(Root);
}
