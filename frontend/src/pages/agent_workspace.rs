//! Full-screen agent pages.
//!
//! The agents talk to their own backend and are rendered without the site
//! navbar. This module provides their frame and the way back to the agent
//! selection page.

use leptos::*;
use shared::AppRoute;

#[component]
fn AgentWorkspace(
    #[prop(into)] title: String,
    #[prop(into)] tagline: String,
) -> impl IntoView {
    view! {
        <div class="agent-workspace min-h-screen flex flex-col">
            <header class="agent-workspace-header flex items-center justify-between px-6 py-4 border-b">
                <a href=AppRoute::AiAgents.path() class="agent-back-link text-sm">"← All agents"</a>
                <h1 class="text-lg font-bold tracking-tight">{title}</h1>
            </header>
            <section class="flex-1 flex items-center justify-center p-8">
                <p class="text-sm text-center max-w-md">{tagline}</p>
            </section>
        </div>
    }
}

#[component]
pub fn DoctorAgentPage() -> impl IntoView {
    view! {
        <AgentWorkspace
            title="Doctor Assistant"
            tagline="Describe your symptoms to start a session with the doctor assistant."
        />
    }
}

#[component]
pub fn ReportReaderPage() -> impl IntoView {
    view! {
        <AgentWorkspace
            title="Report Reader"
            tagline="Upload a lab report to get a plain-language breakdown."
        />
    }
}

#[component]
pub fn PrescriptionReaderPage() -> impl IntoView {
    view! {
        <AgentWorkspace
            title="Prescription Reader"
            tagline="Upload a prescription to learn what each medication is for."
        />
    }
}
