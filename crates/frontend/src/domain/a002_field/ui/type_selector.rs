//! Palette of registry types shown when adding a field

use contracts::shared::field_types::all;
use leptos::prelude::*;

#[component]
pub fn FieldTypeSelector(on_select: Callback<String>) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let visible = move || {
        let q = query.get().trim().to_lowercase();
        all()
            .iter()
            .filter(|spec| {
                q.is_empty()
                    || spec.label.to_lowercase().contains(&q)
                    || spec.tag.contains(&q)
                    || spec.description.to_lowercase().contains(&q)
            })
            .copied()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="type-selector">
            <input
                type="search"
                class="type-selector__search"
                placeholder="Search field types..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="type-selector__grid">
                {move || {
                    visible()
                        .into_iter()
                        .map(|spec| {
                            view! {
                                <button
                                    type="button"
                                    class="type-selector__item"
                                    data-type=spec.tag
                                    on:click=move |_| on_select.run(spec.tag.to_string())
                                >
                                    <span class="type-selector__label">{spec.label}</span>
                                    <span class="type-selector__description">{spec.description}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
