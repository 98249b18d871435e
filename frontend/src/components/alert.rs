use leptos::*;
use shared::SubmissionStatus;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Success => "alert alert-success flex items-center gap-2 p-4 rounded-xl",
            AlertVariant::Error => "alert alert-error flex items-center gap-2 p-4 rounded-xl",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            AlertVariant::Success => "✓",
            AlertVariant::Error => "!",
        }
    }
}

impl From<SubmissionStatus> for AlertVariant {
    fn from(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Success => AlertVariant::Success,
            SubmissionStatus::Error => AlertVariant::Error,
        }
    }
}

/// Inline status message under a form.
#[component]
pub fn Alert(#[prop(into)] variant: AlertVariant, children: Children) -> impl IntoView {
    view! {
        <div class=variant.class() role="status">
            <span class="alert-icon">{variant.icon()}</span>
            <span class="text-sm font-medium">{children()}</span>
        </div>
    }
}
