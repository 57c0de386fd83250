use super::view_model::CollectionFormViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_collection::{Collection, CollectionStatus};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CollectionForm(
    #[prop(default = None)] existing: Option<Collection>,
    on_saved: Callback<Collection>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CollectionFormViewModel::new(existing);
    let name_error = vm.field_error("name");
    let api_id_error = vm.field_error("api_id");
    let edit_mode = vm.is_edit_mode();

    view! {
        <div class="details-container collection-form">
            <div class="details-header">
                <h3>{if edit_mode { "Edit Collection" } else { "New Collection" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group" class:form-group--invalid=move || name_error.get().is_some()>
                    <label for="collection-name">"Name"</label>
                    <input
                        type="text"
                        id="collection-name"
                        placeholder="Blog Posts"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                    />
                    {move || name_error.get().map(|e| view! { <span class="form-group__error">{e}</span> })}
                </div>

                <div class="form-group" class:form-group--invalid=move || api_id_error.get().is_some()>
                    <label for="collection-api-id">"API ID"</label>
                    <input
                        type="text"
                        id="collection-api-id"
                        placeholder="blog-posts"
                        prop:value=move || vm.form.with(|f| f.api_id.clone())
                        on:input=move |ev| vm.set_api_id(event_target_value(&ev))
                    />
                    {move || api_id_error.get().map(|e| view! { <span class="form-group__error">{e}</span> })}
                    <span class="form-group__hint">"Used in API endpoints: lowercase letters, numbers and hyphens"</span>
                </div>

                <div class="form-group">
                    <label for="collection-description">"Description"</label>
                    <textarea
                        id="collection-description"
                        rows="3"
                        placeholder="What this collection holds"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="collection-status">"Status"</label>
                    <select
                        id="collection-status"
                        on:change=move |ev| {
                            let status = CollectionStatus::from_str_lossy(&event_target_value(&ev));
                            vm.form.update(|f| f.status = status);
                        }
                    >
                        {CollectionStatus::all()
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || vm.form.with(|f| f.status == status)
                                    >
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    loading=vm.saving
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {icon("save")}
                    {if edit_mode { " Save" } else { " Create Collection" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    " Cancel"
                </Button>
            </div>
        </div>
    }
}
