use leptos::*;

/// Multi-line form field bound to a signal.
#[component]
pub fn TextArea(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] id: String,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <textarea
            id=id.clone()
            name=id
            class="input-field w-full px-4 py-3 rounded-xl text-sm resize-none"
            rows=rows.unwrap_or(5)
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        ></textarea>
    }
}
