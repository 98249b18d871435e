use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::*;
use shared::{ContactForm, SubmissionStatus};

use crate::components::alert::Alert;
use crate::components::button::SubmitButton;
use crate::components::footer::Footer;
use crate::components::form_group::FormGroup;
use crate::components::text_area::TextArea;
use crate::components::text_input::TextInput;
use crate::config::use_site_config;

fn status_message(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Success => "Thank you! Your message has been sent successfully.",
        SubmissionStatus::Error => "Error sending message. Please try again later.",
    }
}

#[component]
fn ContactDetail(#[prop(into)] title: String, #[prop(into)] content: String) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div>
                <p class="font-semibold text-sm mb-1">{title}</p>
                <p class="text-sm">{content}</p>
            </div>
        </div>
    }
}

/// Signals backing the contact form.
#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    message: RwSignal<String>,
    is_submitting: RwSignal<bool>,
    status: RwSignal<Option<SubmissionStatus>>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            message: create_rw_signal(String::new()),
            is_submitting: create_rw_signal(false),
            status: create_rw_signal(None),
        }
    }

    /// Finishes a pending submission. Returns `None` when the page was
    /// unmounted while the submission was in flight.
    fn complete(&self) -> Option<SubmissionStatus> {
        let mut form = ContactForm {
            name: self.name.try_get_untracked()?,
            email: self.email.try_get_untracked()?,
            message: self.message.try_get_untracked()?,
        };
        let outcome = form.submit();

        let _ = self.name.try_set(form.name);
        let _ = self.email.try_set(form.email);
        let _ = self.message.try_set(form.message);
        let _ = self.is_submitting.try_set(false);
        let _ = self.status.try_set(Some(outcome));
        Some(outcome)
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_site_config();
    let submit_delay_ms = config.contact_submit_delay_ms;

    let fields = ContactFields::new();
    let ContactFields {
        name,
        email,
        message,
        is_submitting,
        status,
    } = fields;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        is_submitting.set(true);
        status.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            // No backend behind this form; the delay stands in for a request.
            TimeoutFuture::new(submit_delay_ms).await;
            if fields.complete().is_none() {
                log!("contact page left before the submission finished");
            }
        });
    };

    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 md:py-24">
            <div class="text-center mb-16">
                <h1 class="section-heading mb-4">"Get In Touch"</h1>
                <p class="section-subheading">"We're here to help you understand your health better"</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 card p-8 rounded-2xl">
                    <h2 class="text-xl font-bold mb-6 tracking-tight">"Send Us a Message"</h2>

                    <form on:submit=on_submit class="space-y-5">
                        <FormGroup label="Name" for_id="name">
                            <TextInput value=name id="name" placeholder="Your name" required=true />
                        </FormGroup>
                        <FormGroup label="Email" for_id="email">
                            <TextInput
                                value=email
                                id="email"
                                input_type="email"
                                placeholder="your@email.com"
                                required=true
                            />
                        </FormGroup>
                        <FormGroup label="Message" for_id="message">
                            <TextArea
                                value=message
                                id="message"
                                placeholder="How can we help you?"
                                required=true
                            />
                        </FormGroup>

                        {move || {
                            status
                                .get()
                                .map(|s| view! { <Alert variant=s>{status_message(s)}</Alert> })
                        }}

                        <SubmitButton loading=is_submitting busy_label="Sending...">
                            "Send Message"
                        </SubmitButton>
                    </form>
                </div>

                <div class="card p-8 rounded-2xl space-y-6">
                    <h2 class="text-xl font-bold mb-6 tracking-tight">"Contact Info"</h2>
                    <ContactDetail title="Email" content=config.support_email.clone() />
                    <ContactDetail title="Phone" content=config.support_phone.clone() />
                    <ContactDetail title="Office" content=config.office_address.clone() />
                    <p class="pt-6 border-t text-sm leading-relaxed">
                        "Our team typically responds within 24 hours during business days."
                    </p>
                </div>
            </div>
        </section>

        <Footer />
    }
}
