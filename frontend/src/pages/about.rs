use leptos::*;

use crate::components::card::{Card, SectionHeader};
use crate::components::footer::Footer;

const VALUES: &[(&str, &str, &str)] = &[
    (
        "Our Mission",
        "Make medical documents understandable for everyone, without replacing the people who treat them.",
        "card-sky",
    ),
    (
        "Our Vision",
        "A world where no patient leaves an appointment confused about their own health.",
        "card-rose",
    ),
    (
        "Why Choose MedAI?",
        "Specialised agents, plain language and a strict focus on education over diagnosis.",
        "card-green",
    ),
];

const APPROACH: &[(&str, &str)] = &[
    ("AI-Driven Analysis", "Each agent is tuned for one document type and the terminology that comes with it."),
    ("User-Friendly Interface", "Upload, read and ask follow-up questions in a single flow."),
    ("24/7 Assistance", "Get explanations whenever a new report arrives, not only during office hours."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 md:py-24">
            <div class="text-center mb-16">
                <h1 class="section-heading mb-4">"About MedAI"</h1>
                <p class="section-subheading">
                    "We build AI agents that translate medical language into everyday language."
                </p>
            </div>

            <SectionHeader title="Our Core Values" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-24">
                {VALUES
                    .iter()
                    .map(|(title, description, accent)| {
                        view! { <Card title=*title description=*description accent=*accent /> }
                    })
                    .collect_view()}
            </div>

            <SectionHeader title="Our Approach" />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {APPROACH
                    .iter()
                    .map(|(title, description)| view! { <Card title=*title description=*description /> })
                    .collect_view()}
            </div>
        </section>

        <Footer />
    }
}
