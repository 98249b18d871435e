use leptos::*;

use crate::components::card::Card;
use crate::components::footer::Footer;

struct AgentSummary {
    title: &'static str,
    path: &'static str,
    accent: &'static str,
    description: &'static str,
}

const AGENTS: &[AgentSummary] = &[
    AgentSummary {
        title: "Doctor Assistant",
        path: "/doctor-agent",
        accent: "card-sky",
        description: "Analyze symptoms and receive a structured, non-diagnostic report highlighting possible conditions and recommended next steps.",
    },
    AgentSummary {
        title: "Report Reader",
        path: "/report-reader-agent",
        accent: "card-green",
        description: "Upload lab results to get a simplified breakdown of complex medical jargon, flags, and provider summaries.",
    },
    AgentSummary {
        title: "Prescription Reader",
        path: "/prescription-reader-agent",
        accent: "card-rose",
        description: "Upload a prescription to understand medication names, dosages, purpose, and potential side effects.",
    },
];

/// Agent selection page.
#[component]
pub fn AiAgentsPage() -> impl IntoView {
    view! {
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 md:py-24 min-h-screen">
            <div class="text-center mb-16">
                <span class="badge-pill text-sm font-medium">"Specialized AI Tools"</span>
                <h1 class="section-heading mb-4">"Our AI Agents"</h1>
                <p class="section-subheading">
                    "Choose an agent below to begin simplifying your healthcare information. "
                    "Each agent is specialized for accuracy and clarity."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 lg:gap-8">
                {AGENTS
                    .iter()
                    .map(|agent| {
                        view! {
                            <Card title=agent.title description=agent.description accent=agent.accent>
                                <a
                                    href=agent.path
                                    class="agent-start w-full flex items-center justify-center gap-2 px-6 py-3 mt-8 rounded-xl text-sm font-semibold"
                                >
                                    "Start Analysis →"
                                </a>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <Footer />
    }
}
