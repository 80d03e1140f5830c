use leptos::*;

use crate::analytics::{track_event, EVENT_CONTACT_SUBMITTED};
use crate::api::{self, ContactForm};
use crate::components::Footer;
use crate::notify::Toaster;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toaster = Toaster::expect();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (is_submitting, set_is_submitting) = create_signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        if !form.is_complete() {
            toaster.error(
                "Please fill in all fields",
                "All fields are required to send your message.",
            );
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::submit_contact_form(&form).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                    track_event(EVENT_CONTACT_SUBMITTED);
                    toaster.success(
                        "Message Sent!",
                        "Thank you for your message. We'll get back to you soon.",
                    );
                }
                Err(_) => toaster.error(
                    "Error",
                    "Failed to send message. Please try again later.",
                ),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <main class="container contact-page">
            <header>
                <h1>"Get in Touch"</h1>
                <p class="tagline">
                    "Have questions about climate risks or ClimateLens? We'd love to hear from you."
                </p>
            </header>

            <div class="contact-grid">
                <div class="contact-info">
                    <div class="card">
                        <h2>"Let's Start a Conversation"</h2>
                        <p>
                            "Whether you're curious about climate risks, interested in our "
                            "technology, or have feedback about ClimateLens, we're here to help."
                        </p>
                        <dl class="contact-details">
                            <dt>"Email"</dt>
                            <dd>"hello@climatelens.ai"</dd>
                            <dt>"Response Time"</dt>
                            <dd>"Usually within 24 hours"</dd>
                        </dl>
                    </div>
                </div>

                <form class="card contact-form" on:submit=submit>
                    <h2>"Send us a Message"</h2>

                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="your.email@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="message">"Message"</label>
                        <textarea
                            id="message"
                            rows="6"
                            placeholder="Tell us about your questions, feedback, or how we can help..."
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <button
                        type="submit"
                        class="btn primary"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>

            <Footer/>
        </main>
    }
}
