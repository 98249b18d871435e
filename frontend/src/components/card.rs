use leptos::*;

/// Feature card used by the marketing pages.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional, into)] accent: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let full_class = match accent {
        Some(accent) => format!("card card-hover p-8 rounded-2xl flex flex-col {}", accent),
        None => "card card-hover p-8 rounded-2xl flex flex-col".to_string(),
    };

    view! {
        <div class=full_class>
            <h3 class="text-xl font-bold mb-3 tracking-tight">{title}</h3>
            <p class="text-sm leading-relaxed flex-1 card-text">{description}</p>
            {children.map(|children| children())}
        </div>
    }
}

/// Centered heading with a subtitle, opening each page section.
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="section-heading mb-4">{title}</h2>
            {subtitle.map(|s| view! { <p class="section-subheading">{s}</p> })}
        </div>
    }
}
