use leptos::*;

/// Full-width primary submit button with a busy state.
#[component]
pub fn SubmitButton(
    #[prop(into)] loading: MaybeSignal<bool>,
    #[prop(into)] busy_label: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn-primary w-full flex items-center justify-center gap-2 py-3.5 text-sm disabled:opacity-50 disabled:cursor-not-allowed"
            disabled=move || loading.get()
        >
            {move || {
                if loading.get() {
                    view! {
                        <span class="spinner w-4 h-4 rounded-full animate-spin"></span>
                        {busy_label.clone()}
                    }
                    .into_view()
                } else {
                    children().into_view()
                }
            }}
        </button>
    }
}
