//! Validation panel: rule editor, live test input and accessibility options.
//!
//! Edits reach the parent through a debounced `on_update`. When the parent
//! supplies `on_save_to_database`, the panel also tracks the last saved
//! snapshot and offers an explicit Save.

use super::controls::{NumberRow, SwitchRow, TextRow};
use crate::shared::timers::Debounce;
use contracts::shared::field_types::{lookup, ValidationKind};
use contracts::shared::predicate::Predicate;
use contracts::shared::validation::{
    validate_list, validate_value, ValidationOutcome, ValidationSettings, NO_RULES_MESSAGE,
};
use leptos::prelude::*;
use thaw::*;

pub const UPDATE_DEBOUNCE_MS: u32 = 300;

/// Completion handle passed along with a save request
pub type SaveDone = Callback<Result<ValidationSettings, String>>;

/// Local edits against the last persisted snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationDraft {
    pub current: ValidationSettings,
    pub saved: ValidationSettings,
    pub saving: bool,
    pub error: Option<String>,
}

impl ValidationDraft {
    pub fn new(initial: ValidationSettings) -> Self {
        Self {
            current: initial.clone(),
            saved: initial,
            saving: false,
            error: None,
        }
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.current != self.saved
    }

    pub fn can_save(&self) -> bool {
        self.has_unsaved_changes() && !self.saving
    }

    /// Marks the draft as in flight; `None` when there is nothing to save
    pub fn begin_save(&mut self) -> Option<ValidationSettings> {
        if !self.can_save() {
            return None;
        }
        self.saving = true;
        self.error = None;
        Some(self.current.clone())
    }

    /// Success adopts the server copy; failure restores the snapshot
    pub fn finish_save(&mut self, result: Result<ValidationSettings, String>) {
        self.saving = false;
        match result {
            Ok(server) => {
                self.saved = server.clone();
                self.current = server;
            }
            Err(e) => {
                self.current = self.saved.clone();
                self.error = Some(e);
            }
        }
    }
}

/// Syntax error of the custom expression, if the rule is on and the source is bad
pub fn predicate_error(settings: &ValidationSettings) -> Option<String> {
    if !settings.custom_validation_enabled || settings.custom_validation.trim().is_empty() {
        return None;
    }
    Predicate::parse(&settings.custom_validation)
        .err()
        .map(|e| e.to_string())
}

/// Live test against the current rules; list kinds split on commas
pub fn run_live_test(kind: ValidationKind, settings: &ValidationSettings, input: &str) -> ValidationOutcome {
    match kind {
        ValidationKind::Tags => {
            let values: Vec<String> = input
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            validate_list(settings, &values)
        }
        _ => validate_value(settings, input),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationTab {
    Rules,
    Testing,
    Accessibility,
}

impl ValidationTab {
    fn from_value(s: &str) -> Self {
        match s {
            "testing" => ValidationTab::Testing,
            "accessibility" => ValidationTab::Accessibility,
            _ => ValidationTab::Rules,
        }
    }
}

#[component]
pub fn ValidationPanel(
    /// Registry tag of the configured field
    field_type: String,
    initial: ValidationSettings,
    on_update: Callback<ValidationSettings>,
    #[prop(default = None)] on_save_to_database: Option<Callback<(ValidationSettings, SaveDone)>>,
) -> impl IntoView {
    let kind = lookup(&field_type).validation_kind;
    let draft = RwSignal::new(ValidationDraft::new(initial));
    let selected_tab = RwSignal::new("rules".to_string());
    let active_tab = Memo::new(move |_| ValidationTab::from_value(&selected_tab.get()));
    let test_input = RwSignal::new(String::new());
    let debounce = Debounce::new(UPDATE_DEBOUNCE_MS);

    let settings = Memo::new(move |_| draft.with(|d| d.current.clone()));
    let syntax_error = Memo::new(move |_| settings.with(predicate_error));

    let push_update = move || {
        debounce.schedule(move || {
            if let Some(current) = draft.try_with_untracked(|d| d.current.clone()) {
                if let Some(e) = predicate_error(&current) {
                    log::warn!("Custom validation does not parse: {}", e);
                }
                on_update.run(current);
            }
        });
    };

    let edit = Callback::new(move |patch: Box<dyn FnOnce(&mut ValidationSettings)>| {
        draft.update(|d| {
            patch(&mut d.current);
            d.error = None;
        });
        push_update();
    });
    let set = move |patch: Box<dyn FnOnce(&mut ValidationSettings)>| edit.run(patch);

    let save = move |_| {
        let Some(save_cb) = on_save_to_database else {
            return;
        };
        let mut pending = None;
        draft.update(|d| pending = d.begin_save());
        let Some(payload) = pending else {
            return;
        };
        let done = Callback::new(move |result: Result<ValidationSettings, String>| {
            if let Err(e) = &result {
                log::error!("Failed to save validation settings: {}", e);
            }
            draft.try_update(|d| d.finish_save(result));
            if let Some(current) = draft.try_with_untracked(|d| d.current.clone()) {
                debounce.cancel();
                on_update.run(current);
            }
        });
        save_cb.run((payload, done));
    };

    // ── Rules ──
    let rules_tab = move || {
        let length_rules = kind.supports_length().then(|| {
            view! {
                <div class="rule-group">
                    <SwitchRow
                        label="Minimum Length"
                        checked=Signal::derive(move || settings.with(|s| s.min_length_enabled))
                        on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.min_length_enabled = v)))
                    />
                    <NumberRow
                        label="Min characters"
                        value=Signal::derive(move || settings.with(|s| Some(s.min_length as f64)))
                        disabled=Signal::derive(move || !settings.with(|s| s.min_length_enabled))
                        on_input=Callback::new(move |v: Option<f64>| {
                            let n = v.unwrap_or(0.0).max(0.0) as u32;
                            set(Box::new(move |s| s.min_length = n))
                        })
                    />
                    <SwitchRow
                        label="Maximum Length"
                        checked=Signal::derive(move || settings.with(|s| s.max_length_enabled))
                        on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.max_length_enabled = v)))
                    />
                    <NumberRow
                        label="Max characters"
                        value=Signal::derive(move || settings.with(|s| Some(s.max_length as f64)))
                        disabled=Signal::derive(move || !settings.with(|s| s.max_length_enabled))
                        on_input=Callback::new(move |v: Option<f64>| {
                            let n = v.unwrap_or(0.0).max(0.0) as u32;
                            set(Box::new(move |s| s.max_length = n))
                        })
                    />
                </div>
            }
        });

        let text_rules = kind.supports_text_rules().then(|| {
            view! {
                <div class="rule-group">
                    <SwitchRow
                        label="Pattern"
                        checked=Signal::derive(move || settings.with(|s| s.pattern_enabled))
                        on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.pattern_enabled = v)))
                    />
                    <TextRow
                        label="Regular expression"
                        placeholder="^[A-Z].*"
                        value=Signal::derive(move || settings.with(|s| s.pattern.clone()))
                        disabled=Signal::derive(move || !settings.with(|s| s.pattern_enabled))
                        on_input=Callback::new(move |v: String| set(Box::new(move |s| s.pattern = v)))
                    />
                    <SwitchRow
                        label="Custom Validation"
                        hint="e.g. length >= 3 and value starts_with \"A\""
                        checked=Signal::derive(move || settings.with(|s| s.custom_validation_enabled))
                        on_toggle=Callback::new(move |v: bool| {
                            set(Box::new(move |s| s.custom_validation_enabled = v))
                        })
                    />
                    <TextRow
                        label="Expression"
                        placeholder="value != \"\""
                        value=Signal::derive(move || settings.with(|s| s.custom_validation.clone()))
                        disabled=Signal::derive(move || !settings.with(|s| s.custom_validation_enabled))
                        on_input=Callback::new(move |v: String| set(Box::new(move |s| s.custom_validation = v)))
                    />
                    {move || syntax_error.get().map(|e| view! {
                        <p class="rule-group__error">{format!("Syntax error: {}", e)}</p>
                    })}
                    <TextRow
                        label="Error Message"
                        placeholder="Shown when the pattern or expression fails"
                        value=Signal::derive(move || settings.with(|s| s.custom_message.clone()))
                        on_input=Callback::new(move |v: String| set(Box::new(move |s| s.custom_message = v)))
                    />
                </div>
            }
        });

        let numeric_rules = kind.supports_numeric_bounds().then(|| {
            view! {
                <div class="rule-group">
                    <NumberRow
                        label="Minimum Value"
                        value=Signal::derive(move || settings.with(|s| s.min))
                        on_input=Callback::new(move |v: Option<f64>| set(Box::new(move |s| s.min = v)))
                    />
                    <NumberRow
                        label="Maximum Value"
                        value=Signal::derive(move || settings.with(|s| s.max))
                        on_input=Callback::new(move |v: Option<f64>| set(Box::new(move |s| s.max = v)))
                    />
                </div>
            }
        });

        let format_rules = (kind == ValidationKind::Text).then(|| {
            view! {
                <div class="rule-group">
                    <SwitchRow
                        label="Email"
                        checked=Signal::derive(move || settings.with(|s| s.email))
                        on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.email = v)))
                    />
                    <SwitchRow
                        label="URL"
                        checked=Signal::derive(move || settings.with(|s| s.url))
                        on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.url = v)))
                    />
                    <SwitchRow
                        label="Unique"
                        hint="Checked by the backend on save"
                        checked=Signal::derive(move || settings.with(|s| s.unique))
                        on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.unique = v)))
                    />
                </div>
            }
        });

        let tag_rules = (kind == ValidationKind::Tags).then(|| {
            view! {
                <div class="rule-group">
                    <NumberRow
                        label="Maximum Tags"
                        value=Signal::derive(move || settings.with(|s| s.max_tags.map(|n| n as f64)))
                        on_input=Callback::new(move |v: Option<f64>| {
                            let n = v.map(|n| n.max(1.0) as u32);
                            set(Box::new(move |s| s.max_tags = n))
                        })
                    />
                </div>
            }
        });

        view! {
            <div class="settings-tab settings-tab--rules">
                <SwitchRow
                    label="Required"
                    checked=Signal::derive(move || settings.with(|s| s.required))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.required = v)))
                />
                {length_rules}
                {text_rules}
                {numeric_rules}
                {format_rules}
                {tag_rules}
            </div>
        }
    };

    // ── Testing ──
    let outcome = Memo::new(move |_| {
        let input = test_input.get();
        settings.with(|s| run_live_test(kind, s, &input))
    });
    let testing_tab = move || {
        view! {
            <div class="settings-tab settings-tab--testing">
                <label class="settings-row">
                    <span class="settings-row__label">"Test Value"</span>
                    <input
                        type="text"
                        class="settings-row__input"
                        placeholder="Type a value to check"
                        prop:value=move || test_input.get()
                        on:input=move |ev| test_input.set(event_target_value(&ev))
                    />
                </label>
                <div class="live-test__result">
                    {move || {
                        let result = outcome.get();
                        if result.is_valid() {
                            view! {
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                    "Valid"
                                </Badge>
                            }
                            .into_any()
                        } else {
                            view! {
                                <ul class="live-test__errors">
                                    {result
                                        .errors
                                        .into_iter()
                                        .map(|e| view! { <li>{e}</li> })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }
                    }}
                </div>
                <div class="live-test__summary">
                    <h4>"Active Rules"</h4>
                    {move || {
                        let rules = settings.with(ValidationSettings::rules_summary);
                        if rules.is_empty() {
                            view! { <p class="live-test__empty">{NO_RULES_MESSAGE}</p> }.into_any()
                        } else {
                            view! {
                                <ul>{rules.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}</ul>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        }
    };

    // ── Accessibility ──
    let accessibility_tab = move || {
        view! {
            <div class="settings-tab settings-tab--accessibility">
                <SwitchRow
                    label="aria-required"
                    checked=Signal::derive(move || settings.with(|s| s.aria_required))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.aria_required = v)))
                />
                <SwitchRow
                    label="aria-invalid"
                    hint="Set while the field shows an error"
                    checked=Signal::derive(move || settings.with(|s| s.aria_invalid))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.aria_invalid = v)))
                />
                <TextRow
                    label="aria-label"
                    value=Signal::derive(move || settings.with(|s| s.aria_label.clone()))
                    on_input=Callback::new(move |v: String| set(Box::new(move |s| s.aria_label = v)))
                />
                <TextRow
                    label="aria-labelledby"
                    value=Signal::derive(move || settings.with(|s| s.aria_labelled_by.clone()))
                    on_input=Callback::new(move |v: String| set(Box::new(move |s| s.aria_labelled_by = v)))
                />
                <TextRow
                    label="aria-describedby"
                    value=Signal::derive(move || settings.with(|s| s.aria_described_by.clone()))
                    on_input=Callback::new(move |v: String| set(Box::new(move |s| s.aria_described_by = v)))
                />
                <TextRow
                    label="autocomplete"
                    placeholder="off, email, name..."
                    value=Signal::derive(move || settings.with(|s| s.autocomplete.clone()))
                    on_input=Callback::new(move |v: String| set(Box::new(move |s| s.autocomplete = v)))
                />
            </div>
        }
    };

    let can_save = Signal::derive(move || draft.with(ValidationDraft::can_save));
    let saving = Signal::derive(move || draft.with(|d| d.saving));

    view! {
        <div class="validation-panel">
            <TabList selected_value=selected_tab>
                <Tab value="rules">"Rules"</Tab>
                <Tab value="testing">"Testing"</Tab>
                <Tab value="accessibility">"Accessibility"</Tab>
            </TabList>
            <div class="validation-panel__body">
                {move || match active_tab.get() {
                    ValidationTab::Rules => rules_tab().into_any(),
                    ValidationTab::Testing => testing_tab().into_any(),
                    ValidationTab::Accessibility => accessibility_tab().into_any(),
                }}
            </div>
            {on_save_to_database.is_some().then(|| view! {
                <div class="validation-panel__footer">
                    {move || draft.with(|d| d.error.clone()).map(|e| view! {
                        <span class="validation-panel__error">{e}</span>
                    })}
                    <Show when=move || draft.with(ValidationDraft::has_unsaved_changes)>
                        <span class="validation-panel__unsaved">"Unsaved changes"</span>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !can_save.get())
                        loading=saving
                        on_click=save
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Validation" }}
                    </Button>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_min_length(n: u32) -> ValidationSettings {
        ValidationSettings {
            min_length_enabled: true,
            min_length: n,
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_tracks_unsaved_changes() {
        let mut draft = ValidationDraft::new(ValidationSettings::default());
        assert!(!draft.has_unsaved_changes());
        assert!(draft.begin_save().is_none());

        draft.current.required = true;
        assert!(draft.can_save());
        let payload = draft.begin_save().expect("changes to save");
        assert!(payload.required);
        assert!(!draft.can_save());
    }

    #[test]
    fn test_failed_save_reverts_to_snapshot() {
        let mut draft = ValidationDraft::new(with_min_length(2));
        draft.current.min_length = 5;
        draft.begin_save();
        draft.finish_save(Err("network down".to_string()));
        assert_eq!(draft.current.min_length, 2);
        assert_eq!(draft.error.as_deref(), Some("network down"));
        assert!(!draft.saving);
    }

    #[test]
    fn test_successful_save_adopts_server_copy() {
        let mut draft = ValidationDraft::new(ValidationSettings::default());
        draft.current.required = true;
        draft.begin_save();
        let mut server = draft.current.clone();
        server.aria_required = true;
        draft.finish_save(Ok(server.clone()));
        assert_eq!(draft.saved, server);
        assert_eq!(draft.current, server);
        assert!(!draft.has_unsaved_changes());
    }

    #[test]
    fn test_live_test_min_length() {
        let settings = with_min_length(3);
        let short = run_live_test(ValidationKind::Text, &settings, "ab");
        assert!(!short.is_valid());
        assert!(short.joined().contains("3 characters"));
        assert!(run_live_test(ValidationKind::Text, &settings, "abc").is_valid());
    }

    #[test]
    fn test_live_test_tags_splits_on_commas() {
        let settings = ValidationSettings {
            max_tags: Some(2),
            ..Default::default()
        };
        assert!(run_live_test(ValidationKind::Tags, &settings, "a, b").is_valid());
        assert!(!run_live_test(ValidationKind::Tags, &settings, "a, b, c").is_valid());
    }

    #[test]
    fn test_predicate_error_only_when_enabled() {
        let mut settings = ValidationSettings {
            custom_validation: "length >=".to_string(),
            ..Default::default()
        };
        assert_eq!(predicate_error(&settings), None);
        settings.custom_validation_enabled = true;
        assert!(predicate_error(&settings).is_some());
        settings.custom_validation = "length >= 3".to_string();
        assert_eq!(predicate_error(&settings), None);
    }
}
