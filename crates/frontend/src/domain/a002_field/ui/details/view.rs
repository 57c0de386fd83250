use super::kind_options::KindOptionsEditor;
use super::view_model::FieldsViewModel;
use crate::domain::a002_field::ui::advanced_panel::AdvancedPanel;
use crate::domain::a002_field::ui::appearance_panel::AppearancePanel;
use crate::domain::a002_field::ui::controls::{SwitchRow, TextRow};
use crate::domain::a002_field::ui::field_renderer::FieldRenderer;
use crate::domain::a002_field::ui::type_selector::FieldTypeSelector;
use crate::domain::a002_field::ui::validation_panel::{SaveDone, ValidationPanel};
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_field::{validate_field, FieldKind, FieldValue};
use contracts::shared::field_types::lookup;
use contracts::shared::advanced::AdvancedSettings;
use contracts::shared::appearance::AppearanceSettings;
use contracts::shared::validation::ValidationSettings;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use std::collections::HashMap;
use thaw::*;

#[component]
pub fn FieldDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let collection_id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let vm = FieldsViewModel::new(collection_id);
    let ctx = use_app_context();
    vm.load();

    let show_selector = RwSignal::new(false);
    let selected_tab = RwSignal::new("basic".to_string());

    let title = Signal::derive(move || {
        vm.collection
            .with(|c| c.as_ref().map(|c| format!("{} Fields", c.title)))
            .unwrap_or_else(|| "Fields".to_string())
    });
    let subtitle = Signal::derive(move || vm.collection.with(|c| c.as_ref().map(|c| c.api_id.clone())));

    let on_type_selected = Callback::new(move |tag: String| {
        show_selector.set(false);
        vm.add_field(tag, ctx);
    });

    // ── Field list ──
    let field_list = move || {
        vm.fields
            .get()
            .into_iter()
            .map(|field| {
                let id = field.id.clone().unwrap_or_default();
                let active_id = id.clone();
                let is_active = move || vm.selected_id.get().as_deref() == Some(active_id.as_str());
                let type_label = lookup(field.kind.tag()).label;
                let required = field.is_required();
                view! {
                    <li
                        class="field-list__item"
                        class:field-list__item--active=is_active
                        on:click=move |_| vm.select(&id)
                    >
                        <span class="field-list__name">{field.label()}</span>
                        <span class="field-list__api-id">{field.api_id.clone().unwrap_or_default()}</span>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {type_label}
                        </Badge>
                        {required.then(|| view! {
                            <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Danger>"Required"</Badge>
                        })}
                    </li>
                }
            })
            .collect_view()
    };

    // ── Editor tabs ──
    // Panels own their local state, so they are rebuilt only when the
    // draft is replaced (selection, save, revert).
    let basic_tab = move || {
        view! {
            <div class="settings-tab settings-tab--basic">
                <TextRow
                    label="Name"
                    value=Signal::derive(move || vm.draft.with(|d| d.as_ref().and_then(|f| f.name.clone()).unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.edit_draft(|f| f.name = Some(v)))
                />
                <TextRow
                    label="API ID"
                    value=Signal::derive(move || vm.draft.with(|d| d.as_ref().and_then(|f| f.api_id.clone()).unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.edit_draft(|f| f.api_id = Some(v)))
                />
                <SwitchRow
                    label="Required"
                    checked=Signal::derive(move || vm.draft.with(|d| d.as_ref().is_some_and(|f| f.required)))
                    on_toggle=Callback::new(move |v: bool| vm.edit_draft(|f| f.required = v))
                />
                <TextRow
                    label="Description"
                    value=Signal::derive(move || vm.draft.with(|d| d.as_ref().and_then(|f| f.description.clone()).unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.edit_draft(|f| f.description = Some(v)))
                />
                <TextRow
                    label="Help Text"
                    value=Signal::derive(move || vm.draft.with(|d| d.as_ref().and_then(|f| f.help_text.clone()).unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.edit_draft(|f| f.help_text = Some(v)))
                />
                <TextRow
                    label="Placeholder"
                    value=Signal::derive(move || vm.draft.with(|d| d.as_ref().and_then(|f| f.ui_options.placeholder.clone()).unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.edit_draft(|f| f.ui_options.placeholder = Some(v)))
                />
                <KindOptionsEditor
                    kind=Signal::derive(move || vm.draft.with(|d| d.as_ref().map(|f| f.kind.clone()).unwrap_or_default()))
                    on_change=Callback::new(move |k: FieldKind| vm.edit_draft(|f| f.kind = k))
                />
            </div>
        }
    };

    let settings_tab = move |tab: String| {
        vm.revision.track();
        let Some(field) = vm.draft.get_untracked() else {
            return ().into_any();
        };
        let field_type = field.kind.tag().to_string();
        match tab.as_str() {
            "validation" => view! {
                <ValidationPanel
                    field_type=field_type
                    initial=field.settings.validation.clone()
                    on_update=Callback::new(move |s: ValidationSettings| {
                        vm.edit_draft(|f| f.settings.validation = s)
                    })
                    on_save_to_database=Some(Callback::new(move |(s, done): (ValidationSettings, SaveDone)| {
                        vm.save_validation(s, done, ctx)
                    }))
                />
            }
            .into_any(),
            "appearance" => view! {
                <AppearancePanel
                    field_type=field_type
                    initial=field.settings.appearance.clone()
                    on_save=Callback::new(move |s: AppearanceSettings| vm.edit_draft(|f| f.settings.appearance = s))
                />
            }
            .into_any(),
            "advanced" => view! {
                <AdvancedPanel
                    field_type=field_type
                    initial=field.settings.advanced.clone()
                    on_save=Callback::new(move |s: AdvancedSettings| vm.edit_draft(|f| f.settings.advanced = s))
                />
            }
            .into_any(),
            _ => basic_tab().into_any(),
        }
    };

    // ── Preview ──
    let preview_value = RwSignal::new(FieldValue::Text(String::new()));
    Effect::new(move |_| {
        vm.selected_id.track();
        if let Some(empty) = vm.draft.with_untracked(|d| d.as_ref().map(|f| f.empty_value())) {
            preview_value.set(empty);
        }
    });
    let preview_errors = Signal::derive(move || {
        let mut errors = HashMap::new();
        vm.draft.with(|d| {
            if let Some(field) = d {
                let outcome = preview_value.with(|v| validate_field(field, v));
                if !outcome.is_valid() {
                    errors.insert(field.dom_id(), outcome.errors);
                }
            }
        });
        errors
    });
    let preview = move || {
        vm.draft.get().map(|field| {
            view! {
                <FieldRenderer
                    field=field
                    value=Signal::derive(move || preview_value.get())
                    on_change=Callback::new(move |(_, v): (String, FieldValue)| preview_value.set(v))
                    errors=preview_errors
                />
            }
        })
    };

    let has_draft = Memo::new(move |_| vm.draft.with(Option::is_some));
    let editor = move || {
        if !has_draft.get() {
            return view! {
                <div class="field-editor__empty">
                    "Select a field on the left or add a new one."
                </div>
            }
            .into_any();
        }
        view! {
            <div class="field-editor">
                <TabList selected_value=selected_tab>
                    <Tab value="basic">"Basic"</Tab>
                    <Tab value="validation">"Validation"</Tab>
                    <Tab value="appearance">"Appearance"</Tab>
                    <Tab value="advanced">"Advanced"</Tab>
                </TabList>
                <div class="field-editor__body">
                    <div class="field-editor__settings">
                        {move || settings_tab(selected_tab.get())}
                    </div>
                    <div class="field-editor__preview">
                        <h4>"Preview"</h4>
                        {preview}
                    </div>
                </div>
                <div class="field-editor__actions">
                    <Show when=move || vm.is_dirty()>
                        <span class="field-editor__unsaved">"Unsaved changes"</span>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.delete_selected(ctx)
                    >
                        {icon("trash")}
                        " Delete Field"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.is_dirty() || vm.saving.get())
                        loading=vm.saving
                        on_click=move |_| vm.save_draft(ctx)
                    >
                        {icon("save")}
                        " Save Field"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a002_field--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_selector.update(|v| *v = !*v)
                >
                    {icon("plus")}
                    " Add Field"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="page__error">{e}</div> })}

            <Show when=move || show_selector.get()>
                <FieldTypeSelector on_select=on_type_selected />
            </Show>

            <div class="field-config">
                <aside class="field-config__list">
                    <Show
                        when=move || !vm.loading.get()
                        fallback=|| view! { <Spinner /> }
                    >
                        <Show
                            when=move || vm.fields.with(|f| !f.is_empty())
                            fallback=|| view! { <p class="field-list__empty">"No fields yet."</p> }
                        >
                            <ul class="field-list">{field_list}</ul>
                        </Show>
                    </Show>
                </aside>
                <section class="field-config__editor">{editor}</section>
            </div>
        </PageFrame>
    }
}
