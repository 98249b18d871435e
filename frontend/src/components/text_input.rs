use leptos::*;

/// Single-line form field bound to a signal.
#[component]
pub fn TextInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] id: String,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <input
            type=input_type
            id=id.clone()
            name=id
            class="input-field w-full px-4 py-3 rounded-xl text-sm"
            placeholder=placeholder
            required=required
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}
