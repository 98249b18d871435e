use leptos::*;

/// Label above a form control.
#[component]
pub fn FormGroup(
    #[prop(into)] label: String,
    #[prop(into)] for_id: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="block text-sm font-medium mb-2 form-label" for=for_id>
                {label}
            </label>
            {children()}
        </div>
    }
}
