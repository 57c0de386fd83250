use crate::domain::a001_collection::model;
use contracts::domain::a001_collection::{
    generate_api_id, Collection, CollectionFormData, CollectionFormError,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Copy the name into the form and keep the api id generated
/// from it until the user edits the api id directly
pub fn apply_name(form: &mut CollectionFormData, name: String, api_id_touched: bool) {
    if !api_id_touched {
        form.api_id = generate_api_id(&name);
    }
    form.name = name;
}

/// First validation error for one form field
pub fn error_for(errors: &[CollectionFormError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(ToString::to_string)
}

#[derive(Clone, Copy)]
pub struct CollectionFormViewModel {
    /// Id and counts of the edited collection; `None` when creating
    pub existing: StoredValue<Option<Collection>>,
    pub form: RwSignal<CollectionFormData>,
    pub api_id_touched: RwSignal<bool>,
    /// Errors are shown only after the first submit attempt
    pub submitted: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CollectionFormViewModel {
    pub fn new(existing: Option<Collection>) -> Self {
        let form = existing.as_ref().map(CollectionFormData::from).unwrap_or_default();
        let touched = existing.is_some();
        Self {
            existing: StoredValue::new(existing),
            form: RwSignal::new(form),
            api_id_touched: RwSignal::new(touched),
            submitted: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing.with_value(Option::is_some)
    }

    pub fn set_name(&self, name: String) {
        let touched = self.api_id_touched.get_untracked();
        self.form.update(|f| apply_name(f, name, touched));
    }

    pub fn set_api_id(&self, api_id: String) {
        self.api_id_touched.set(true);
        self.form.update(|f| f.api_id = api_id);
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let form = self.form;
        let submitted = self.submitted;
        Signal::derive(move || {
            if !submitted.get() {
                return None;
            }
            form.with(|f| error_for(&f.validate(), field))
        })
    }

    pub fn save_command(&self, on_saved: Callback<Collection>) {
        self.submitted.set(true);
        let current = self.form.get_untracked();
        if !current.is_valid() {
            return;
        }
        let existing = self.existing.get_value();
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = match &existing {
                Some(c) => model::update_collection(&c.id, &current)
                    .await
                    .map(|saved| saved.with_counts(c.field_count, c.item_count)),
                None => model::create_collection(&current).await,
            };
            vm.saving.try_set(false);
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) => {
                    vm.error.try_set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_drives_api_id_until_touched() {
        let mut form = CollectionFormData::default();
        apply_name(&mut form, "Blog Posts".to_string(), false);
        assert_eq!(form.api_id, "blog-posts");

        form.api_id = "articles".to_string();
        apply_name(&mut form, "Blog Posts 2".to_string(), true);
        assert_eq!(form.name, "Blog Posts 2");
        assert_eq!(form.api_id, "articles");
    }

    #[test]
    fn test_error_for_field() {
        let errors = vec![CollectionFormError::NameRequired, CollectionFormError::ApiIdInvalid];
        assert_eq!(error_for(&errors, "name").as_deref(), Some("Name is required"));
        assert!(error_for(&errors, "api_id").is_some_and(|e| e.contains("lowercase")));
        assert_eq!(error_for(&errors, "description"), None);
    }
}
