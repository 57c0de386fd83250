//! Field-type gallery: one live sample of every registered type.

use crate::domain::a002_field::ui::FieldRenderer;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::domain::a002_field::FieldValue;
use contracts::shared::field_types::{self, sample_field};
use leptos::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thaw::*;

/// Values of the gallery keyed by the sample field's DOM id
fn values_json(values: &HashMap<String, FieldValue>) -> String {
    let mut keys: Vec<_> = values.keys().collect();
    keys.sort();
    let map: Map<String, Value> = keys
        .into_iter()
        .map(|k| (k.clone(), values[k].to_json()))
        .collect();
    serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_default()
}

#[component]
pub fn ComponentsGalleryPage() -> impl IntoView {
    let samples: Vec<_> = field_types::all()
        .iter()
        .map(|spec| (spec, sample_field(spec.tag)))
        .collect();

    let values = RwSignal::new(
        samples
            .iter()
            .map(|(_, field)| (field.dom_id(), field.empty_value()))
            .collect::<HashMap<_, _>>(),
    );
    let show_json = RwSignal::new(false);
    let (copied, set_copied) = signal(false);

    let on_change = Callback::new(move |(id, value): (String, FieldValue)| {
        values.update(|map| {
            map.insert(id, value);
        });
    });

    let copy_json = move |_| {
        let text = values.with_untracked(values_json);
        copy_to_clipboard_with_callback(&text, move || {
            set_copied.try_set(true);
        });
    };

    let cards = samples
        .into_iter()
        .map(|(spec, field)| {
            let id = field.dom_id();
            let value = Signal::derive(move || values.with(|m| m.get(&id).cloned().unwrap_or_default()));
            view! {
                <div class="gallery-card">
                    <div class="gallery-card__header">
                        <span class="gallery-card__title">{spec.label}</span>
                        <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
                            {spec.tag}
                        </Badge>
                    </div>
                    <p class="gallery-card__description">{spec.description}</p>
                    <FieldRenderer field=field value=value on_change=on_change />
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="components_gallery--custom" category=PAGE_CAT_CUSTOM>
            <PageHeader
                title="Components".to_string()
                subtitle="Every field type rendered with its sample configuration".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| show_json.update(|v| *v = !*v)
                >
                    {move || if show_json.get() { icon("eye-off") } else { icon("eye") }}
                    {move || if show_json.get() { " Hide Values" } else { " Show Values" }}
                </Button>
            </PageHeader>

            <Show when=move || show_json.get()>
                <div class="json-view">
                    <div class="json-view__toolbar">
                        <Button size=ButtonSize::Small on_click=copy_json>
                            {icon("copy")}
                            {move || if copied.get() { " Copied" } else { " Copy" }}
                        </Button>
                    </div>
                    <pre class="json-view__body">{move || values.with(values_json)}</pre>
                </div>
            </Show>

            <div class="gallery-grid">{cards}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_json_is_sorted_by_id() {
        let mut values = HashMap::new();
        values.insert("field-b".to_string(), FieldValue::Bool(true));
        values.insert("field-a".to_string(), FieldValue::List(vec!["x".into()]));
        let json = values_json(&values);
        assert!(json.find("field-a").unwrap() < json.find("field-b").unwrap());
        assert!(json.contains("true"));
    }
}
