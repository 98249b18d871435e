use chrono::Datelike;
use leptos::*;
use shared::nav::{FOOTER_AGENT_LINKS, FOOTER_SITE_LINKS, LEGAL_LINKS};
use shared::NavLink;

use crate::config::use_site_config;

fn link_column(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div>
            <h4 class="footer-heading text-sm font-semibold mb-4">{title}</h4>
            <ul class="space-y-3">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.path class="footer-link text-sm">{link.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Site footer. The legal links live here only, not in the navbar.
#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer mt-16 border-t">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 pb-8">
                    <div>
                        <a href="/" class="text-lg font-bold tracking-tight">{config.brand_name.clone()}</a>
                        <p class="text-sm mt-3 footer-muted">
                            "Making medical information simple, clear and accessible."
                        </p>
                    </div>
                    {link_column("Quick Links", FOOTER_SITE_LINKS)}
                    {link_column("AI Agents", FOOTER_AGENT_LINKS)}
                    <div>
                        <h4 class="footer-heading text-sm font-semibold mb-4">"Get in Touch"</h4>
                        <ul class="space-y-3 text-sm">
                            <li>{config.support_email.clone()}</li>
                            <li>{config.support_phone.clone()}</li>
                            <li>{config.office_address.clone()}</li>
                        </ul>
                    </div>
                </div>

                <div class="pt-8 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-sm footer-muted">
                        {format!("© {} {}. All rights reserved.", year, config.brand_name)}
                    </p>
                    <div class="flex items-center gap-6 text-sm">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.path class="footer-link">{link.label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
