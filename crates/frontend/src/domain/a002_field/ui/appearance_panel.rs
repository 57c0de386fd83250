//! Appearance panel: layout, theme presets, colours and UI variant.
//!
//! Every edit is applied to the local copy and emitted through `on_save`
//! right away; the live preview re-renders a sample field of the same type.

use super::controls::{ChoiceRow, PercentRow, SwitchRow, TextRow};
use super::field_renderer::FieldRenderer;
use contracts::domain::a002_field::FieldValue;
use contracts::shared::appearance::{
    AppearanceSettings, ColorChannel, DisplayMode, LabelPosition, RoundedCorners, Size,
    TextAlign, Theme, UiVariant, FIELD_WIDTH_MAX, FIELD_WIDTH_MIN, LABEL_WIDTH_MAX,
    LABEL_WIDTH_MIN,
};
use contracts::shared::field_types::{lookup, sample_field};
use contracts::shared::input::color::{is_hex_color, PRESET_COLORS};
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppearanceTab {
    Layout,
    Theme,
    Colors,
    Advanced,
}

impl AppearanceTab {
    fn all() -> [AppearanceTab; 4] {
        [
            AppearanceTab::Layout,
            AppearanceTab::Theme,
            AppearanceTab::Colors,
            AppearanceTab::Advanced,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            AppearanceTab::Layout => "layout",
            AppearanceTab::Theme => "theme",
            AppearanceTab::Colors => "colors",
            AppearanceTab::Advanced => "advanced",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AppearanceTab::Layout => "Layout",
            AppearanceTab::Theme => "Theme",
            AppearanceTab::Colors => "Colors",
            AppearanceTab::Advanced => "Advanced",
        }
    }

    fn from_value(s: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|t| t.value() == s)
            .unwrap_or(AppearanceTab::Layout)
    }
}

fn size_options() -> Vec<(&'static str, &'static str)> {
    Size::all()
        .into_iter()
        .map(|s| {
            let label = match s {
                Size::Small => "Small",
                Size::Medium => "Medium",
                Size::Large => "Large",
            };
            (s.as_str(), label)
        })
        .collect()
}

fn rounded_options() -> Vec<(&'static str, &'static str)> {
    RoundedCorners::all()
        .into_iter()
        .map(|r| {
            let label = match r {
                RoundedCorners::None => "None",
                RoundedCorners::Small => "Small",
                RoundedCorners::Medium => "Medium",
                RoundedCorners::Large => "Large",
            };
            (r.as_str(), label)
        })
        .collect()
}

#[component]
pub fn AppearancePanel(
    /// Registry tag of the configured field
    field_type: String,
    initial: AppearanceSettings,
    on_save: Callback<AppearanceSettings>,
) -> impl IntoView {
    let settings = RwSignal::new(initial.normalized());
    let selected_tab = RwSignal::new(AppearanceTab::Layout.value().to_string());
    let active_tab = Memo::new(move |_| AppearanceTab::from_value(&selected_tab.get()));
    let supports_char_count = lookup(&field_type).supports_char_count;

    // Patch one member, then hand the whole object to the parent
    let edit = Callback::new(move |patch: Box<dyn FnOnce(&mut AppearanceSettings)>| {
        settings.update(|s| {
            patch(s);
            *s = s.clone().normalized();
        });
        on_save.run(settings.get_untracked());
    });
    let set = move |patch: Box<dyn FnOnce(&mut AppearanceSettings)>| edit.run(patch);

    // ── Layout ──
    let layout_tab = move || {
        let inline = Signal::derive(move || settings.with(|s| s.label_position.is_inline()));
        view! {
            <div class="settings-tab settings-tab--layout">
                <ChoiceRow
                    label="Label Position"
                    options=vec![("top", "Top"), ("left", "Left"), ("right", "Right")]
                    current=Signal::derive(move || settings.with(|s| s.label_position.as_str().to_string()))
                    on_pick=Callback::new(move |v: String| {
                        set(Box::new(move |s| s.label_position = LabelPosition::from_str_lossy(&v)))
                    })
                />
                <ChoiceRow
                    label="Text Alignment"
                    options=vec![("left", "Left"), ("center", "Center"), ("right", "Right")]
                    current=Signal::derive(move || settings.with(|s| s.text_align.as_str().to_string()))
                    on_pick=Callback::new(move |v: String| {
                        set(Box::new(move |s| s.text_align = TextAlign::from_str_lossy(&v)))
                    })
                />
                <PercentRow
                    label="Label Width"
                    min=LABEL_WIDTH_MIN
                    max=LABEL_WIDTH_MAX
                    value=Signal::derive(move || settings.with(|s| s.label_width))
                    disabled=Signal::derive(move || !inline.get())
                    on_input=Callback::new(move |v: u8| set(Box::new(move |s| s.label_width = v)))
                />
                <PercentRow
                    label="Field Width"
                    min=FIELD_WIDTH_MIN
                    max=FIELD_WIDTH_MAX
                    value=Signal::derive(move || settings.with(|s| s.width))
                    on_input=Callback::new(move |v: u8| set(Box::new(move |s| s.width = v)))
                />
                <ChoiceRow
                    label="Field Size"
                    options=size_options()
                    current=Signal::derive(move || settings.with(|s| s.field_size.as_str().to_string()))
                    on_pick=Callback::new(move |v: String| {
                        set(Box::new(move |s| s.field_size = Size::from_str_lossy(&v)))
                    })
                />
                <ChoiceRow
                    label="Label Size"
                    options=size_options()
                    current=Signal::derive(move || settings.with(|s| s.label_size.as_str().to_string()))
                    on_pick=Callback::new(move |v: String| {
                        set(Box::new(move |s| s.label_size = Size::from_str_lossy(&v)))
                    })
                />
                <ChoiceRow
                    label="Display Mode"
                    options=vec![("default", "Default"), ("compact", "Compact"), ("expanded", "Expanded")]
                    current=Signal::derive(move || settings.with(|s| s.display_mode.as_str().to_string()))
                    on_pick=Callback::new(move |v: String| {
                        set(Box::new(move |s| s.display_mode = DisplayMode::from_str_lossy(&v)))
                    })
                />
                <ChoiceRow
                    label="Rounded Corners"
                    options=rounded_options()
                    current=Signal::derive(move || settings.with(|s| s.rounded_corners.as_str().to_string()))
                    on_pick=Callback::new(move |v: String| {
                        set(Box::new(move |s| s.rounded_corners = RoundedCorners::from_str_lossy(&v)))
                    })
                />
                <SwitchRow
                    label="Floating Label"
                    checked=Signal::derive(move || settings.with(|s| s.float_label))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.float_label = v)))
                />
                <SwitchRow
                    label="Filled"
                    checked=Signal::derive(move || settings.with(|s| s.filled))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.filled = v)))
                />
                <SwitchRow
                    label="Show Border"
                    checked=Signal::derive(move || settings.with(|s| s.show_border))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.show_border = v)))
                />
                <SwitchRow
                    label="Show Background"
                    checked=Signal::derive(move || settings.with(|s| s.show_background))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.show_background = v)))
                />
                {supports_char_count.then(|| view! {
                    <SwitchRow
                        label="Character Count"
                        hint="Shows {length}/{max} under the input"
                        checked=Signal::derive(move || settings.with(|s| s.show_char_count))
                        on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.show_char_count = v)))
                    />
                })}
            </div>
        }
    };

    // ── Theme ──
    let theme_tab = move || {
        view! {
            <div class="settings-tab settings-tab--theme">
                <div class="theme-grid">
                    {Theme::all()
                        .into_iter()
                        .map(|theme| {
                            let active = move || settings.with(|s| s.theme == Some(theme));
                            view! {
                                <button
                                    type="button"
                                    class="theme-card"
                                    class:theme-card--active=active
                                    on:click=move |_| set(Box::new(move |s| s.apply_theme(theme)))
                                >
                                    <span class="theme-card__title">{theme.label()}</span>
                                    <span class="theme-card__description">{theme.description()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <SwitchRow
                    label="Dark Mode"
                    checked=Signal::derive(move || settings.with(|s| s.is_dark_mode))
                    on_toggle=Callback::new(move |v: bool| set(Box::new(move |s| s.is_dark_mode = v)))
                />
            </div>
        }
    };

    // ── Colors ──
    let colors_tab = move || {
        view! {
            <div class="settings-tab settings-tab--colors">
                {ColorChannel::all()
                    .into_iter()
                    .map(|channel| {
                        let current = move || settings.with(|s| s.colors.get(channel).to_string());
                        view! {
                            <div class="color-channel">
                                <div class="color-channel__header">
                                    <span class="color-channel__title">{channel.label()}</span>
                                    <span class="color-channel__description">{channel.description()}</span>
                                </div>
                                <div class="color-channel__controls">
                                    <span
                                        class="cms-color__preview"
                                        style=move || {
                                            let c = current();
                                            let fill = if is_hex_color(&c) { c } else { "transparent".to_string() };
                                            format!("background: {};", fill)
                                        }
                                    ></span>
                                    <input
                                        type="text"
                                        class="settings-row__input"
                                        placeholder="Default"
                                        prop:value=current
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev);
                                            set(Box::new(move |s| s.colors.set(channel, v)))
                                        }
                                    />
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| set(Box::new(move |s| s.colors.set(channel, "")))
                                    >
                                        "Reset"
                                    </Button>
                                </div>
                                <div class="cms-color__swatches">
                                    {PRESET_COLORS
                                        .iter()
                                        .map(|preset| {
                                            let preset: &'static str = preset;
                                            view! {
                                                <button
                                                    type="button"
                                                    class="cms-color__swatch"
                                                    class:cms-color__swatch--active=move || current().eq_ignore_ascii_case(preset)
                                                    style=format!("background: {};", preset)
                                                    title=preset
                                                    on:click=move |_| set(Box::new(move |s| s.colors.set(channel, preset)))
                                                ></button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    // ── Advanced ──
    let advanced_tab = move || {
        view! {
            <div class="settings-tab settings-tab--advanced">
                <div class="variant-grid">
                    {UiVariant::all()
                        .into_iter()
                        .map(|variant| {
                            let active = move || settings.with(|s| s.ui_variant == variant);
                            view! {
                                <button
                                    type="button"
                                    class="variant-card"
                                    class:variant-card--active=active
                                    on:click=move |_| set(Box::new(move |s| s.ui_variant = variant))
                                >
                                    <span class="variant-card__title">{variant.label()}</span>
                                    <span class="variant-card__description">{variant.description()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <TextRow
                    label="Custom CSS Class"
                    placeholder="my-field"
                    value=Signal::derive(move || settings.with(|s| s.custom_class.clone()))
                    on_input=Callback::new(move |v: String| set(Box::new(move |s| s.custom_class = v)))
                />
                <label class="settings-row">
                    <span class="settings-row__label">"Custom CSS"</span>
                    <textarea
                        class="settings-row__textarea"
                        rows=4
                        placeholder="margin-top: 1rem;"
                        prop:value=move || settings.with(|s| s.custom_css.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            set(Box::new(move |s| s.custom_css = v))
                        }
                    ></textarea>
                </label>
            </div>
        }
    };

    // ── Preview ──
    let sample = sample_field(&field_type);
    let preview_value = RwSignal::new(sample.empty_value());
    let preview = move || {
        let mut field = sample.clone();
        field.settings.appearance = settings.get();
        view! {
            <FieldRenderer
                field=field
                value=Signal::derive(move || preview_value.get())
                on_change=Callback::new(move |(_, v): (String, FieldValue)| preview_value.set(v))
            />
        }
    };

    view! {
        <div class="appearance-panel">
            <TabList selected_value=selected_tab>
                {AppearanceTab::all()
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.value()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>
            <div class="appearance-panel__body">
                <div class="appearance-panel__settings">
                    {move || match active_tab.get() {
                        AppearanceTab::Layout => layout_tab().into_any(),
                        AppearanceTab::Theme => theme_tab().into_any(),
                        AppearanceTab::Colors => colors_tab().into_any(),
                        AppearanceTab::Advanced => advanced_tab().into_any(),
                    }}
                </div>
                <div class="appearance-panel__preview">
                    <h4 class="appearance-panel__preview-title">"Preview"</h4>
                    {preview}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_values_round_trip() {
        for tab in AppearanceTab::all() {
            assert_eq!(AppearanceTab::from_value(tab.value()), tab);
        }
        assert_eq!(AppearanceTab::from_value("bogus"), AppearanceTab::Layout);
    }

    #[test]
    fn test_option_lists_use_stored_values() {
        let sizes: Vec<_> = size_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(sizes, vec!["small", "medium", "large"]);
        assert_eq!(rounded_options().len(), 4);
    }
}
