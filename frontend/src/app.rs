use leptos::*;
use leptos_router::*;
use shared::decide_for_viewport;

use crate::components::navbar::Navbar;
use crate::config::{provide_site_config, use_site_config};
use crate::pages::{
    about::AboutPage,
    agent_workspace::{DoctorAgentPage, PrescriptionReaderPage, ReportReaderPage},
    ai_agents::AiAgentsPage,
    contact::ContactPage,
    home::HomePage,
    legal::{PrivacyPage, TermsPage},
};
use crate::utils::{viewport_width, WindowListener};

#[component]
pub fn App() -> impl IntoView {
    provide_site_config();

    view! {
        <Router>
            <PageShell />
        </Router>
    }
}

/// Applies the route-driven chrome: navbar, mesh background and the top
/// padding that keeps content clear of the fixed navbar.
#[component]
fn PageShell() -> impl IntoView {
    let config = use_site_config();
    let location = use_location();

    let width = create_rw_signal(viewport_width());
    let resize_listener = WindowListener::register("resize", move |_| {
        width.set(viewport_width());
    });
    on_cleanup(move || drop(resize_listener));

    let desktop_min_width = config.desktop_min_width;
    let decision = create_memo(move |_| {
        location
            .pathname
            .with(|path| decide_for_viewport(path, width.get(), desktop_min_width))
    });

    view! {
        <div class=move || decision.get().container_class()>
            <Show when=move || decision.get().show_navbar fallback=|| ()>
                <Navbar />
            </Show>

            <div class=move || decision.get().top_inset.padding_class()>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage />
                        <Route path="/about" view=AboutPage />
                        <Route path="/contact" view=ContactPage />
                        <Route path="/ai-agent" view=AiAgentsPage />
                        <Route path="/doctor-agent" view=DoctorAgentPage />
                        <Route path="/report-reader-agent" view=ReportReaderPage />
                        <Route path="/prescription-reader-agent" view=PrescriptionReaderPage />
                        <Route path="/privacy" view=PrivacyPage />
                        <Route path="/terms" view=TermsPage />
                    </Routes>
                </main>
            </div>
        </div>
    }
}
