//! Legal pages: Privacy Policy and Terms of Service

use leptos::*;

use crate::components::footer::Footer;

/// Reusable layout for legal pages
#[component]
fn LegalPageContent(#[prop(into)] title: String, paragraphs: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="legal-page max-w-3xl mx-auto px-4 py-16">
            <div class="legal-page-header mb-8">
                <a href="/" class="legal-back-link text-sm">"← Back to home"</a>
            </div>
            <div class="legal-page-content card p-8 rounded-2xl">
                <h1 class="legal-page-title section-heading mb-6">{title}</h1>
                {paragraphs
                    .iter()
                    .map(|p| view! { <p class="text-sm leading-relaxed mb-4">{*p}</p> })
                    .collect_view()}
            </div>
        </div>
        <Footer />
    }
}

const PRIVACY: &[&str] = &[
    "Documents you upload are processed only to produce the explanation you asked for.",
    "Session history is kept so you can continue a conversation, and you can clear it at any time.",
    "We do not sell personal or health data to third parties.",
];

const TERMS: &[&str] = &[
    "MedAI provides educational explanations of medical documents. It does not provide medical advice, diagnosis or treatment.",
    "Always consult a qualified healthcare professional about your health.",
    "You are responsible for the documents you upload and must have the right to share them.",
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPageContent title="Privacy Policy" paragraphs=PRIVACY /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPageContent title="Terms of Service" paragraphs=TERMS /> }
}
