use crate::domain::a001_collection::model::fetch_collection;
use crate::domain::a002_field::model;
use crate::domain::a002_field::ui::validation_panel::SaveDone;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_collection::Collection;
use contracts::domain::a002_field::dto::field_api_id_from_name;
use contracts::domain::a002_field::{FieldDescriptor, FieldPatch, NewField};
use contracts::shared::field_types::{lookup, sample_field};
use contracts::shared::validation::ValidationSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// State of the field configuration page for one collection
#[derive(Clone, Copy)]
pub struct FieldsViewModel {
    pub collection_id: StoredValue<String>,
    pub collection: RwSignal<Option<Collection>>,
    pub fields: RwSignal<Vec<FieldDescriptor>>,
    pub selected_id: RwSignal<Option<String>>,
    /// Working copy of the selected field
    pub draft: RwSignal<Option<FieldDescriptor>>,
    /// Bumped whenever the draft is replaced from outside the editors
    pub revision: RwSignal<u32>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl FieldsViewModel {
    pub fn new(collection_id: String) -> Self {
        Self {
            collection_id: StoredValue::new(collection_id),
            collection: RwSignal::new(None),
            fields: RwSignal::new(Vec::new()),
            selected_id: RwSignal::new(None),
            draft: RwSignal::new(None),
            revision: RwSignal::new(0),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn cid(&self) -> String {
        self.collection_id.get_value()
    }

    /// Load the collection header and its fields
    pub fn load(&self) {
        let vm = *self;
        let cid = self.cid();
        vm.loading.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match fetch_collection(&cid).await {
                Ok(c) => {
                    vm.collection.try_set(Some(c));
                }
                Err(e) => log::warn!("Collection header unavailable: {}", e),
            }
            match model::get_fields_for_collection(&cid).await {
                Ok(fields) => {
                    let first = fields.first().and_then(|f| f.id.clone());
                    vm.fields.try_set(fields);
                    if let Some(id) = first {
                        vm.select(&id);
                    }
                }
                Err(e) => {
                    vm.error.try_set(Some(format!("Failed to load fields: {}", e)));
                }
            }
            vm.loading.try_set(false);
        });
    }

    /// Server copy of the selected field
    pub fn selected(&self) -> Option<FieldDescriptor> {
        let id = self.selected_id.get()?;
        self.fields
            .with(|list| list.iter().find(|f| f.id.as_deref() == Some(id.as_str())).cloned())
    }

    pub fn select(&self, id: &str) {
        let field = self
            .fields
            .with_untracked(|list| list.iter().find(|f| f.id.as_deref() == Some(id)).cloned());
        self.selected_id.try_set(Some(id.to_string()));
        self.draft.try_set(field);
        self.revision.try_update(|r| *r += 1);
    }

    pub fn is_dirty(&self) -> bool {
        let saved = self.selected();
        self.draft.with(|d| d.as_ref() != saved.as_ref())
    }

    pub fn edit_draft(&self, f: impl FnOnce(&mut FieldDescriptor)) {
        self.draft.update(|d| {
            if let Some(field) = d {
                f(field);
            }
        });
    }

    /// Create a field of the given registry type and select it
    pub fn add_field(&self, tag: String, ctx: AppGlobalContext) {
        let vm = *self;
        let cid = self.cid();
        let new_field = self.fields.with_untracked(|list| new_field_for_type(&tag, list));
        spawn_local(async move {
            match model::create_field(&cid, new_field).await {
                Ok(field) => {
                    let id = field.id.clone();
                    let label = field.label();
                    vm.fields.try_update(|list| list.push(field));
                    if let Some(id) = id {
                        vm.select(&id);
                    }
                    ctx.success(format!("Field \"{}\" added", label));
                }
                Err(e) => ctx.error(format!("Failed to add field: {}", e)),
            }
        });
    }

    /// Persist the whole draft; failure restores the last saved copy
    pub fn save_draft(&self, ctx: AppGlobalContext) {
        let Some(draft) = self.draft.get_untracked() else {
            return;
        };
        let Some(field_id) = draft.id.clone() else {
            return;
        };
        let snapshot = self.selected_untracked();
        let vm = *self;
        let cid = self.cid();
        vm.saving.set(true);
        spawn_local(async move {
            match model::update_field(&cid, &field_id, FieldPatch::from_descriptor(&draft)).await {
                Ok(server) => {
                    log::info!("Field {} saved", field_id);
                    vm.fields.try_update(|list| replace_field(list, server.clone()));
                    vm.draft.try_set(Some(server));
                    ctx.success("Field saved");
                }
                Err(e) => {
                    log::error!("Failed to save field {}: {}", field_id, e);
                    vm.draft.try_set(snapshot);
                    ctx.error(format!("Failed to save field: {}", e));
                }
            }
            vm.revision.try_update(|r| *r += 1);
            vm.saving.try_set(false);
        });
    }

    /// Persist only the validation rules of the selected field
    pub fn save_validation(&self, settings: ValidationSettings, done: SaveDone, ctx: AppGlobalContext) {
        let Some(field_id) = self.selected_id.get_untracked() else {
            done.run(Err("No field selected".to_string()));
            return;
        };
        let vm = *self;
        let cid = self.cid();
        spawn_local(async move {
            let patch = FieldPatch::settings_only(serde_json::json!({ "validation": settings }));
            match model::update_field(&cid, &field_id, patch).await {
                Ok(server) => {
                    let saved = server.settings.validation.clone();
                    vm.fields.try_update(|list| replace_field(list, server));
                    vm.draft.try_update(|d| {
                        if let Some(d) = d {
                            d.settings.validation = saved.clone();
                        }
                    });
                    ctx.success("Validation settings saved");
                    done.run(Ok(saved));
                }
                Err(e) => {
                    ctx.error(format!("Failed to save validation settings: {}", e));
                    done.run(Err(e));
                }
            }
        });
    }

    pub fn delete_selected(&self, ctx: AppGlobalContext) {
        let Some(field_id) = self.selected_id.get_untracked() else {
            return;
        };
        let vm = *self;
        let cid = self.cid();
        spawn_local(async move {
            match model::delete_field(&cid, &field_id).await {
                Ok(result) if result.success => {
                    vm.fields
                        .try_update(|list| list.retain(|f| f.id.as_deref() != Some(field_id.as_str())));
                    let next = vm
                        .fields
                        .try_with_untracked(|list| list.first().and_then(|f| f.id.clone()))
                        .flatten();
                    match next {
                        Some(id) => vm.select(&id),
                        None => {
                            vm.selected_id.try_set(None);
                            vm.draft.try_set(None);
                        }
                    }
                    ctx.success("Field deleted");
                }
                Ok(_) => ctx.error("Failed to delete field"),
                Err(e) => ctx.error(format!("Failed to delete field: {}", e)),
            }
        });
    }

    fn selected_untracked(&self) -> Option<FieldDescriptor> {
        let id = self.selected_id.get_untracked()?;
        self.fields.with_untracked(|list| {
            list.iter()
                .find(|f| f.id.as_deref() == Some(id.as_str()))
                .cloned()
        })
    }
}

/// Swap in the server copy of a field, matched by id
pub fn replace_field(list: &mut [FieldDescriptor], updated: FieldDescriptor) {
    if let Some(slot) = list.iter_mut().find(|f| f.id.is_some() && f.id == updated.id) {
        *slot = updated;
    }
}

/// Api id not yet used in the collection: `base`, `base_2`, `base_3`...
pub fn unique_api_id(base: &str, existing: &[FieldDescriptor]) -> String {
    let taken = |candidate: &str| {
        existing
            .iter()
            .any(|f| f.api_id.as_deref() == Some(candidate))
    };
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Draft of a new field of a registry type, appended after the existing ones
pub fn new_field_for_type(tag: &str, existing: &[FieldDescriptor]) -> NewField {
    let spec = lookup(tag);
    let mut field = FieldDescriptor::of_type(tag);
    // sample options and mask give the new field something to render
    field.kind = sample_field(tag).kind;
    let name = format!("{} Field", spec.label);
    field.api_id = Some(unique_api_id(&field_api_id_from_name(&name), existing));
    field.name = Some(name);
    field.sort_order = existing.iter().map(|f| f.sort_order).max().map_or(0, |m| m + 1);
    NewField::from_descriptor(&field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_field::FieldKind;

    fn field(id: &str, api_id: &str, sort_order: i32) -> FieldDescriptor {
        FieldDescriptor {
            id: Some(id.to_string()),
            api_id: Some(api_id.to_string()),
            name: Some(api_id.to_string()),
            sort_order,
            ..Default::default()
        }
    }

    #[test]
    fn test_unique_api_id_appends_suffix() {
        let existing = vec![field("1", "text_field", 0), field("2", "text_field_2", 1)];
        assert_eq!(unique_api_id("text_field", &existing), "text_field_3");
        assert_eq!(unique_api_id("slug_field", &existing), "slug_field");
    }

    #[test]
    fn test_new_field_for_type_appends_after_existing() {
        let existing = vec![field("1", "title", 0), field("2", "body", 4)];
        let new_field = new_field_for_type("select", &existing);
        assert_eq!(new_field.sort_order, 5);
        assert_eq!(new_field.name.as_deref(), Some("Select Field"));
        assert_eq!(new_field.api_id.as_deref(), Some("select_field"));
        match new_field.kind {
            Some(FieldKind::Select { options }) => assert_eq!(options.len(), 3),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_replace_field_matches_by_id() {
        let mut list = vec![field("1", "title", 0), field("2", "body", 1)];
        let mut updated = field("2", "content", 1);
        updated.required = true;
        replace_field(&mut list, updated);
        assert_eq!(list[1].api_id.as_deref(), Some("content"));
        assert!(list[1].required);

        replace_field(&mut list, field("9", "ghost", 9));
        assert_eq!(list.len(), 2);
    }
}
