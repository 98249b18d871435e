use leptos::*;

use crate::components::card::{Card, SectionHeader};
use crate::components::footer::Footer;

const WHAT_WE_DO: &[(&str, &str, &str)] = &[
    (
        "Doctor Agent",
        "Describe your symptoms and receive a structured, non-diagnostic overview of possible causes and next steps.",
        "card-sky",
    ),
    (
        "Report Reader",
        "Turn lab results full of abbreviations and reference ranges into a plain-language summary.",
        "card-green",
    ),
    (
        "Prescription Helper",
        "Understand medication names, dosages, purpose and common side effects at a glance.",
        "card-rose",
    ),
];

const HOW_IT_WORKS: &[(&str, &str)] = &[
    ("Upload", "Upload your prescription, lab result, or medical report"),
    ("Analyze", "AI agents process and extract key findings instantly"),
    ("Summarize", "Get a clean, easy-to-read summary without jargon"),
    ("Clarify", "Ask follow-up questions for deeper understanding"),
];

const AUDIENCES: &[&str] = &[
    "Patients who want to understand their own reports",
    "Caregivers keeping track of a family member's treatment",
    "Students learning to read clinical documents",
    "Anyone who left an appointment with more questions than answers",
];

const PROMISES: &[(&str, &str)] = &[
    ("Simple", "Medical information translated into everyday language"),
    ("Accurate", "Reliable analysis based on medical knowledge"),
    ("Private", "Your health data is always protected and secure"),
    ("Honest", "For educational purposes, not medical advice"),
];

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 md:py-24">
            <span class="badge-pill text-sm font-medium">"AI-Powered Medical Analysis"</span>
            <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold mb-6 leading-tight tracking-tight">
                "Your " <span class="text-gradient">"smart companion"</span> <br/> "for medical reports"
            </h1>
            <p class="text-lg sm:text-xl mb-8 max-w-xl leading-relaxed">
                "Understand prescriptions, medical reports, and health information in a simple and clear way. "
                "No confusion. No medical jargon. Just easy explanations you can trust."
            </p>
            <div class="flex flex-col sm:flex-row gap-4">
                <a href="/ai-agent" class="btn-primary text-lg">"Start Analysis Now"</a>
                <a href="/about" class="btn-ghost px-6 py-3 rounded-full text-lg font-medium">"Learn More"</a>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <Hero />

            <div class="divider max-w-7xl mx-auto"></div>

            <section class="max-w-7xl mx-auto px-4 py-16">
                <SectionHeader title="What Our AI Agents Do" />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {WHAT_WE_DO
                        .iter()
                        .map(|(title, description, accent)| {
                            view! { <Card title=*title description=*description accent=*accent /> }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 py-16">
                <SectionHeader title="How It Works" />
                <ol class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    {HOW_IT_WORKS
                        .iter()
                        .enumerate()
                        .map(|(index, (title, description))| {
                            view! {
                                <li class="card p-6 rounded-2xl">
                                    <span class="step-number">{index + 1}</span>
                                    <h3 class="text-lg font-bold mt-3">{*title}</h3>
                                    <p class="text-sm mt-2">{*description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="max-w-7xl mx-auto px-4 py-16">
                <SectionHeader title="Who This Is For" />
                <ul class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {AUDIENCES
                        .iter()
                        .map(|audience| view! { <li class="card p-5 rounded-xl text-sm">{*audience}</li> })
                        .collect_view()}
                </ul>
            </section>

            <section class="max-w-7xl mx-auto px-4 py-16">
                <SectionHeader title="Our Promise" />
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {PROMISES
                        .iter()
                        .map(|(title, description)| view! { <Card title=*title description=*description /> })
                        .collect_view()}
                </div>
            </section>

            <Footer />
        </div>
    }
}
