use leptos::*;

use crate::notify::Toaster;

/// Fixed-position viewport for the toast queue. Click a toast to dismiss it
/// early; otherwise it times out on its own.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = Toaster::expect();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toaster.entries().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class() on:click=move |_| toaster.dismiss(id)>
                            <strong class="toast-title">{toast.title}</strong>
                            <span class="toast-body">{toast.body}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
