//! Input behaviour options: key filter, stepper buttons, adornments.

use super::controls::{ChoiceRow, SwitchRow, TextRow};
use contracts::shared::advanced::{AdvancedSettings, ButtonLayout, KeyFilter};
use contracts::shared::field_types::{lookup, ValidationKind};
use leptos::prelude::*;

#[component]
pub fn AdvancedPanel(
    field_type: String,
    initial: AdvancedSettings,
    on_save: Callback<AdvancedSettings>,
) -> impl IntoView {
    let kind = lookup(&field_type).validation_kind;
    let settings = RwSignal::new(initial);

    let edit = Callback::new(move |patch: Box<dyn FnOnce(&mut AdvancedSettings)>| {
        settings.update(|s| patch(s));
        on_save.run(settings.get_untracked());
    });
    let set = move |patch: Box<dyn FnOnce(&mut AdvancedSettings)>| edit.run(patch);

    let key_filter = (kind == ValidationKind::Text).then(|| {
        view! {
            <ChoiceRow
                label="Key Filter"
                options=KeyFilter::all().into_iter().map(|k| (k.as_str(), k.label())).collect()
                current=Signal::derive(move || settings.with(|s| s.key_filter.as_str().to_string()))
                on_pick=Callback::new(move |v: String| {
                    set(Box::new(move |s| s.key_filter = KeyFilter::from_str_lossy(&v)))
                })
            />
        }
    });

    let stepper = kind.supports_numeric_bounds().then(|| {
        view! {
            <SwitchRow
                label="Show +/- Buttons"
                checked=Signal::derive(move || settings.with(|s| s.show_buttons))
                on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.show_buttons = v)))
            />
            <ChoiceRow
                label="Button Layout"
                options=vec![("horizontal", "Horizontal"), ("vertical", "Vertical")]
                current=Signal::derive(move || settings.with(|s| s.button_layout.as_str().to_string()))
                disabled=Signal::derive(move || !settings.with(|s| s.show_buttons))
                on_pick=Callback::new(move |v: String| {
                    set(Box::new(move |s| s.button_layout = ButtonLayout::from_str_lossy(&v)))
                })
            />
        }
    });

    view! {
        <div class="settings-tab settings-tab--advanced">
            {key_filter}
            {stepper}
            <TextRow
                label="Prefix"
                placeholder="$"
                value=Signal::derive(move || settings.with(|s| s.prefix.clone()))
                on_input=Callback::new(move |v: String| set(Box::new(move |s| s.prefix = v)))
            />
            <TextRow
                label="Suffix"
                placeholder=".com"
                value=Signal::derive(move || settings.with(|s| s.suffix.clone()))
                on_input=Callback::new(move |v: String| set(Box::new(move |s| s.suffix = v)))
            />
            <TextRow
                label="Default Value"
                value=Signal::derive(move || settings.with(|s| s.default_value.clone()))
                on_input=Callback::new(move |v: String| set(Box::new(move |s| s.default_value = v)))
            />
            <SwitchRow
                label="Read Only"
                checked=Signal::derive(move || settings.with(|s| s.read_only))
                on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.read_only = v)))
            />
        </div>
    }
}
