use crate::shared::icons::icon;
use contracts::shared::field_types::unsupported_message;
use leptos::prelude::*;

/// Placeholder for a type the registry does not know
#[component]
pub fn UnsupportedField(field_type: String, label: String) -> impl IntoView {
    view! {
        <div class="cms-field cms-field--unsupported" role="note">
            <span class="cms-field__label">{label}</span>
            <div class="cms-field__unsupported">
                {icon("alert")}
                <span>{unsupported_message(&field_type)}</span>
            </div>
        </div>
    }
}
