use super::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "center" => TextAlign::Center,
            "right" => TextAlign::Right,
            _ => TextAlign::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Top,
    Left,
    Right,
}

impl LabelPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelPosition::Top => "top",
            LabelPosition::Left => "left",
            LabelPosition::Right => "right",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "left" => LabelPosition::Left,
            "right" => LabelPosition::Right,
            _ => LabelPosition::Top,
        }
    }

    /// Метка и поле стоят в одну строку
    pub fn is_inline(&self) -> bool {
        !matches!(self, LabelPosition::Top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundedCorners {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

impl RoundedCorners {
    pub fn all() -> [RoundedCorners; 4] {
        [
            RoundedCorners::None,
            RoundedCorners::Small,
            RoundedCorners::Medium,
            RoundedCorners::Large,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundedCorners::None => "none",
            RoundedCorners::Small => "small",
            RoundedCorners::Medium => "medium",
            RoundedCorners::Large => "large",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "none" => RoundedCorners::None,
            "small" => RoundedCorners::Small,
            "large" => RoundedCorners::Large,
            _ => RoundedCorners::Medium,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            RoundedCorners::None => "0",
            RoundedCorners::Small => ".25rem",
            RoundedCorners::Medium => ".375rem",
            RoundedCorners::Large => ".5rem",
        }
    }
}

/// Размер поля или метки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub fn all() -> [Size; 3] {
        [Size::Small, Size::Medium, Size::Large]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "small" => Size::Small,
            "large" => Size::Large,
            _ => Size::Medium,
        }
    }

    pub fn padding(&self) -> &'static str {
        match self {
            Size::Small => ".375rem .5rem",
            Size::Medium => ".5rem .75rem",
            Size::Large => ".75rem 1rem",
        }
    }

    pub fn font_size(&self) -> &'static str {
        match self {
            Size::Small => ".75rem",
            Size::Medium => ".875rem",
            Size::Large => "1rem",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiVariant {
    #[default]
    Default,
    Bordered,
    Shadowed,
    Gradient,
    Outlined,
    Underlined,
}

impl UiVariant {
    pub fn all() -> [UiVariant; 6] {
        [
            UiVariant::Default,
            UiVariant::Bordered,
            UiVariant::Shadowed,
            UiVariant::Gradient,
            UiVariant::Outlined,
            UiVariant::Underlined,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UiVariant::Default => "default",
            UiVariant::Bordered => "bordered",
            UiVariant::Shadowed => "shadowed",
            UiVariant::Gradient => "gradient",
            UiVariant::Outlined => "outlined",
            UiVariant::Underlined => "underlined",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|v| v.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiVariant::Default => "Default",
            UiVariant::Bordered => "Bordered",
            UiVariant::Shadowed => "Shadowed",
            UiVariant::Gradient => "Gradient",
            UiVariant::Outlined => "Outlined",
            UiVariant::Underlined => "Underlined",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UiVariant::Default => "Standard UI component",
            UiVariant::Bordered => "Component with distinct borders",
            UiVariant::Shadowed => "Component with drop shadow",
            UiVariant::Gradient => "Gradient background",
            UiVariant::Outlined => "Outline with transparent background",
            UiVariant::Underlined => "Bottom border only",
        }
    }

    /// Дополнительные CSS-декларации варианта для элемента ввода
    pub fn input_css(&self) -> &'static str {
        match self {
            UiVariant::Default => "",
            UiVariant::Bordered => "border-width: 2px; border-color: #000000;",
            UiVariant::Shadowed => {
                "box-shadow: 0 10px 15px -3px rgba(0,0,0,.1), 0 4px 6px -4px rgba(0,0,0,.1);"
            }
            UiVariant::Gradient => "background: linear-gradient(to right, #dbeafe, #f3e8ff);",
            UiVariant::Outlined => {
                "border-width: 2px; border-color: #3b82f6; background: transparent;"
            }
            UiVariant::Underlined => {
                "border-width: 0 0 2px 0; border-color: #d1d5db; border-radius: 0; background: transparent;"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Default,
    Compact,
    Expanded,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Default => "default",
            DisplayMode::Compact => "compact",
            DisplayMode::Expanded => "expanded",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "compact" => DisplayMode::Compact,
            "expanded" => DisplayMode::Expanded,
            _ => DisplayMode::Default,
        }
    }

    fn gap(&self) -> &'static str {
        match self {
            DisplayMode::Compact => ".25rem",
            DisplayMode::Default => ".5rem",
            DisplayMode::Expanded => ".75rem",
        }
    }
}

// ============================================================================
// Themes
// ============================================================================

/// Предустановленная тема: атомарно задаёт группу настроек
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Default,
    Material,
    Filled,
    Compact,
    Large,
    Inline,
}

impl Theme {
    pub fn all() -> [Theme; 6] {
        [
            Theme::Default,
            Theme::Material,
            Theme::Filled,
            Theme::Compact,
            Theme::Large,
            Theme::Inline,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Material => "material",
            Theme::Filled => "filled",
            Theme::Compact => "compact",
            Theme::Large => "large",
            Theme::Inline => "inline",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Material => "Material Design",
            Theme::Filled => "Filled Style",
            Theme::Compact => "Compact",
            Theme::Large => "Large",
            Theme::Inline => "Inline Label",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Default => "Standard form field appearance",
            Theme::Material => "Google's Material Design style",
            Theme::Filled => "Fields with background color",
            Theme::Compact => "Smaller field size",
            Theme::Large => "Bigger field size",
            Theme::Inline => "Label next to the field",
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

pub const DEFAULT_LABEL_COLOR: &str = "#64748b";
pub const DEFAULT_BORDER_COLOR: &str = "#e2e8f0";
pub const DEFAULT_TEXT_COLOR: &str = "#1e293b";
pub const DEFAULT_FILLED_BACKGROUND: &str = "#f1f5f9";
pub const DEFAULT_FOCUS_COLOR: &str = "#3b82f6";
pub const DEFAULT_HELP_TEXT_COLOR: &str = "#64748b";
pub const ERROR_COLOR: &str = "#ef4444";

const DARK_TEXT_COLOR: &str = "#f1f5f9";
const DARK_BACKGROUND: &str = "#1e293b";
const DARK_BORDER_COLOR: &str = "#334155";
const DARK_LABEL_COLOR: &str = "#94a3b8";

/// Цветовые каналы поля. Пустая строка означает цвет по умолчанию.
///
/// Принимаются обе исторические формы ключей: `border` и `borderColor`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSettings {
    #[serde(alias = "borderColor")]
    pub border: String,
    #[serde(alias = "textColor")]
    pub text: String,
    #[serde(alias = "backgroundColor")]
    pub background: String,
    #[serde(alias = "focusColor")]
    pub focus: String,
    #[serde(alias = "labelColor")]
    pub label: String,
    #[serde(alias = "helpTextColor")]
    pub help_text: String,
}

/// Один из цветовых каналов; используется вкладкой Colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Text,
    Background,
    Border,
    Focus,
    Label,
    HelpText,
}

impl ColorChannel {
    pub fn all() -> [ColorChannel; 6] {
        [
            ColorChannel::Text,
            ColorChannel::Background,
            ColorChannel::Border,
            ColorChannel::Focus,
            ColorChannel::Label,
            ColorChannel::HelpText,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorChannel::Text => "Text Color",
            ColorChannel::Background => "Background Color",
            ColorChannel::Border => "Border Color",
            ColorChannel::Focus => "Focus Color",
            ColorChannel::Label => "Label Color",
            ColorChannel::HelpText => "Help Text Color",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ColorChannel::Text => "Color of the input text",
            ColorChannel::Background => "Color of the field background",
            ColorChannel::Border => "Color of the field border",
            ColorChannel::Focus => "Border color while the field has focus",
            ColorChannel::Label => "Color of the field label",
            ColorChannel::HelpText => "Color of the help text",
        }
    }
}

impl ColorSettings {
    pub fn get(&self, channel: ColorChannel) -> &str {
        match channel {
            ColorChannel::Text => &self.text,
            ColorChannel::Background => &self.background,
            ColorChannel::Border => &self.border,
            ColorChannel::Focus => &self.focus,
            ColorChannel::Label => &self.label,
            ColorChannel::HelpText => &self.help_text,
        }
    }

    pub fn set(&mut self, channel: ColorChannel, value: impl Into<String>) {
        let value = value.into().trim().to_string();
        match channel {
            ColorChannel::Text => self.text = value,
            ColorChannel::Background => self.background = value,
            ColorChannel::Border => self.border = value,
            ColorChannel::Focus => self.focus = value,
            ColorChannel::Label => self.label = value,
            ColorChannel::HelpText => self.help_text = value,
        }
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

// ============================================================================
// AppearanceSettings
// ============================================================================

pub const LABEL_WIDTH_MIN: u8 = 10;
pub const LABEL_WIDTH_MAX: u8 = 90;
pub const FIELD_WIDTH_MIN: u8 = 10;
pub const FIELD_WIDTH_MAX: u8 = 100;

/// Настройки внешнего вида поля (`settings.appearance`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub text_align: TextAlign,
    pub label_position: LabelPosition,
    pub label_width: u8,
    pub float_label: bool,
    pub filled: bool,
    pub show_border: bool,
    pub show_background: bool,
    pub rounded_corners: RoundedCorners,
    pub field_size: Size,
    pub label_size: Size,
    pub ui_variant: UiVariant,
    pub is_dark_mode: bool,
    pub custom_class: String,
    pub custom_css: String,
    pub width: u8,
    #[serde(alias = "display_mode")]
    pub display_mode: DisplayMode,
    pub show_char_count: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    pub colors: ColorSettings,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            text_align: TextAlign::Left,
            label_position: LabelPosition::Top,
            label_width: 30,
            float_label: false,
            filled: false,
            show_border: true,
            show_background: false,
            rounded_corners: RoundedCorners::Medium,
            field_size: Size::Medium,
            label_size: Size::Medium,
            ui_variant: UiVariant::Default,
            is_dark_mode: false,
            custom_class: String::new(),
            custom_css: String::new(),
            width: 100,
            display_mode: DisplayMode::Default,
            show_char_count: false,
            theme: None,
            colors: ColorSettings::default(),
        }
    }
}

/// Ширины контейнеров метки и поля (CSS-значения)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutWidths {
    pub label: String,
    pub input: String,
}

impl AppearanceSettings {
    /// Разбор из JSON без ошибок с приведением диапазонов.
    ///
    /// Ширины приводятся до разбора, поэтому `labelWidth: 300` даёт 90,
    /// а не значение по умолчанию.
    pub fn from_json_lossy(value: &serde_json::Value) -> Self {
        let mut value = value.clone();
        if let Some(obj) = value.as_object_mut() {
            lenient::clamp_number(
                obj,
                "labelWidth",
                LABEL_WIDTH_MIN.into(),
                LABEL_WIDTH_MAX.into(),
            );
            lenient::clamp_number(obj, "width", FIELD_WIDTH_MIN.into(), FIELD_WIDTH_MAX.into());
        }

        let colors = value
            .get("colors")
            .map(lenient::from_object_lossy::<ColorSettings>);
        let mut settings: AppearanceSettings = lenient::from_object_lossy(&value);
        if let Some(colors) = colors {
            settings.colors = colors;
        }
        settings.normalized()
    }

    /// Приводит числовые настройки к допустимым диапазонам
    pub fn normalized(mut self) -> Self {
        self.label_width = self.label_width.clamp(LABEL_WIDTH_MIN, LABEL_WIDTH_MAX);
        self.width = self.width.clamp(FIELD_WIDTH_MIN, FIELD_WIDTH_MAX);
        self
    }

    /// Применить тему: перезаписывает выравнивание, позицию метки,
    /// заливку, скругление и размер поля одним шагом
    pub fn apply_theme(&mut self, theme: Theme) {
        self.text_align = TextAlign::Left;
        self.label_position = LabelPosition::Top;
        self.filled = false;
        self.rounded_corners = RoundedCorners::Medium;
        self.field_size = Size::Medium;

        match theme {
            Theme::Default => {}
            Theme::Material => {
                self.float_label = true;
                self.rounded_corners = RoundedCorners::None;
            }
            Theme::Filled => {
                self.filled = true;
            }
            Theme::Compact => {
                self.rounded_corners = RoundedCorners::Small;
                self.field_size = Size::Small;
            }
            Theme::Large => {
                self.rounded_corners = RoundedCorners::Large;
                self.field_size = Size::Large;
            }
            Theme::Inline => {
                self.label_position = LabelPosition::Left;
                self.label_width = 30;
            }
        }
        self.theme = Some(theme);
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.apply_theme(theme);
        self
    }

    pub fn layout_widths(&self) -> LayoutWidths {
        if self.label_position.is_inline() {
            let label = self.label_width.clamp(LABEL_WIDTH_MIN, LABEL_WIDTH_MAX);
            LayoutWidths {
                label: format!("{}%", label),
                input: format!("{}%", 100 - label),
            }
        } else {
            LayoutWidths {
                label: "100%".to_string(),
                input: "100%".to_string(),
            }
        }
    }

    pub fn label_color(&self) -> &str {
        let fallback = if self.is_dark_mode {
            DARK_LABEL_COLOR
        } else {
            DEFAULT_LABEL_COLOR
        };
        or_default(&self.colors.label, fallback)
    }

    pub fn border_color(&self) -> &str {
        let fallback = if self.is_dark_mode {
            DARK_BORDER_COLOR
        } else {
            DEFAULT_BORDER_COLOR
        };
        or_default(&self.colors.border, fallback)
    }

    pub fn text_color(&self) -> &str {
        let fallback = if self.is_dark_mode {
            DARK_TEXT_COLOR
        } else {
            DEFAULT_TEXT_COLOR
        };
        or_default(&self.colors.text, fallback)
    }

    pub fn focus_color(&self) -> &str {
        or_default(&self.colors.focus, DEFAULT_FOCUS_COLOR)
    }

    pub fn help_text_color(&self) -> &str {
        or_default(&self.colors.help_text, DEFAULT_HELP_TEXT_COLOR)
    }

    pub fn background_color(&self) -> &str {
        if !self.colors.background.trim().is_empty() {
            return &self.colors.background;
        }
        if self.is_dark_mode {
            DARK_BACKGROUND
        } else if self.filled || self.show_background {
            DEFAULT_FILLED_BACKGROUND
        } else {
            "transparent"
        }
    }

    // ------------------------------------------------------------------------
    // Inline styles
    // ------------------------------------------------------------------------

    /// Стиль внешнего контейнера поля (метка + ввод + подсказка)
    pub fn container_style(&self) -> String {
        let direction = match self.label_position {
            LabelPosition::Top => "column",
            LabelPosition::Left => "row",
            LabelPosition::Right => "row-reverse",
        };
        let align = if self.label_position.is_inline() {
            "center"
        } else {
            "stretch"
        };
        format!(
            "display: flex; flex-direction: {}; align-items: {}; gap: {}; width: {}%;",
            direction,
            align,
            self.display_mode.gap(),
            self.width.clamp(FIELD_WIDTH_MIN, FIELD_WIDTH_MAX)
        )
    }

    pub fn label_style(&self) -> String {
        let widths = self.layout_widths();
        format!(
            "width: {}; color: {}; font-size: {}; font-weight: 500; text-align: {};",
            widths.label,
            self.label_color(),
            self.label_size.font_size(),
            if self.label_position == LabelPosition::Right {
                "right"
            } else {
                self.text_align.as_str()
            }
        )
    }

    /// Стиль обёртки элемента ввода (занимает оставшуюся ширину)
    pub fn input_wrapper_style(&self) -> String {
        format!("width: {}; position: relative;", self.layout_widths().input)
    }

    /// Стиль элемента ввода с учётом фокуса и ошибки
    pub fn input_style(&self, focused: bool, invalid: bool) -> String {
        let border_color = if invalid {
            ERROR_COLOR
        } else if focused {
            self.focus_color()
        } else {
            self.border_color()
        };
        let border = if self.show_border {
            format!("1px solid {}", border_color)
        } else {
            "none".to_string()
        };
        format!(
            "width: 100%; text-align: {}; padding: {}; font-size: {}; border: {}; border-radius: {}; background: {}; color: {}; outline: none; {}",
            self.text_align.as_str(),
            self.field_size.padding(),
            self.field_size.font_size(),
            border,
            self.rounded_corners.css(),
            self.background_color(),
            self.text_color(),
            self.ui_variant.input_css()
        )
    }

    pub fn help_style(&self, invalid: bool) -> String {
        format!(
            "font-size: .75rem; margin-top: .25rem; color: {};",
            if invalid {
                ERROR_COLOR
            } else {
                self.help_text_color()
            }
        )
    }

    /// CSS-классы контейнера; `custom_class` добавляется как есть
    pub fn container_class(&self, invalid: bool) -> String {
        let mut classes = vec![
            "cms-field".to_string(),
            format!("cms-field--{}", self.ui_variant.as_str()),
            format!("cms-field--{}", self.display_mode.as_str()),
        ];
        if self.float_label {
            classes.push("cms-field--float-label".into());
        }
        if self.is_dark_mode {
            classes.push("cms-field--dark".into());
        }
        if invalid {
            classes.push("has-error".into());
        }
        let custom = self.custom_class.trim();
        if !custom.is_empty() {
            classes.push(custom.to_string());
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_left_label_40_gives_input_60() {
        let a = AppearanceSettings::from_json_lossy(&json!({
            "labelPosition": "left",
            "labelWidth": 40
        }));
        let widths = a.layout_widths();
        assert_eq!(widths.label, "40%");
        assert_eq!(widths.input, "60%");
        assert!(a.label_style().contains("width: 40%"));
        assert!(a.input_wrapper_style().contains("width: 60%"));
    }

    #[test]
    fn test_top_label_is_full_width() {
        let widths = AppearanceSettings::default().layout_widths();
        assert_eq!(widths.label, "100%");
        assert_eq!(widths.input, "100%");
    }

    #[test]
    fn test_label_width_is_clamped() {
        let a = AppearanceSettings::from_json_lossy(&json!({
            "labelPosition": "right",
            "labelWidth": 95,
            "width": 3
        }));
        assert_eq!(a.label_width, 90);
        assert_eq!(a.width, 10);
        assert_eq!(a.layout_widths().input, "10%");
    }

    #[test]
    fn test_out_of_range_width_keeps_position() {
        let a = AppearanceSettings::from_json_lossy(&json!({
            "labelPosition": "left",
            "labelWidth": 300
        }));
        assert_eq!(a.label_position, LabelPosition::Left);
        assert_eq!(a.label_width, 90);
    }

    #[test]
    fn test_null_key_keeps_other_settings() {
        let a = AppearanceSettings::from_json_lossy(&json!({
            "labelPosition": "left",
            "labelWidth": 40,
            "customCss": null,
            "colors": { "label": "#ff0000", "border": null }
        }));
        assert_eq!(a.label_position, LabelPosition::Left);
        assert_eq!(a.label_width, 40);
        assert_eq!(a.custom_css, "");
        assert_eq!(a.label_color(), "#ff0000");
        assert_eq!(a.border_color(), DEFAULT_BORDER_COLOR);
    }

    #[test]
    fn test_defaults() {
        let a = AppearanceSettings::default();
        assert_eq!(a.text_align, TextAlign::Left);
        assert_eq!(a.label_position, LabelPosition::Top);
        assert_eq!(a.label_width, 30);
        assert!(a.show_border);
        assert_eq!(a.rounded_corners, RoundedCorners::Medium);
        assert_eq!(a.field_size, Size::Medium);
        assert_eq!(a.label_size, Size::Medium);
        assert_eq!(a.label_color(), DEFAULT_LABEL_COLOR);
        assert_eq!(a.border_color(), DEFAULT_BORDER_COLOR);
        assert_eq!(a.background_color(), "transparent");
    }

    #[test]
    fn test_show_border_missing_means_true() {
        let a = AppearanceSettings::from_json_lossy(&json!({ "filled": true }));
        assert!(a.show_border);
        assert_eq!(a.background_color(), DEFAULT_FILLED_BACKGROUND);
    }

    #[test]
    fn test_theme_overwrites_group_atomically() {
        let mut a = AppearanceSettings {
            text_align: TextAlign::Right,
            label_position: LabelPosition::Left,
            filled: true,
            rounded_corners: RoundedCorners::Large,
            field_size: Size::Large,
            ..Default::default()
        };
        a.apply_theme(Theme::Compact);
        assert_eq!(a.text_align, TextAlign::Left);
        assert_eq!(a.label_position, LabelPosition::Top);
        assert!(!a.filled);
        assert_eq!(a.rounded_corners, RoundedCorners::Small);
        assert_eq!(a.field_size, Size::Small);
        assert_eq!(a.theme, Some(Theme::Compact));
    }

    #[test]
    fn test_material_and_inline_themes() {
        let material = AppearanceSettings::default().with_theme(Theme::Material);
        assert!(material.float_label);
        assert_eq!(material.rounded_corners, RoundedCorners::None);

        let inline = AppearanceSettings {
            label_width: 55,
            ..Default::default()
        }
        .with_theme(Theme::Inline);
        assert_eq!(inline.label_position, LabelPosition::Left);
        assert_eq!(inline.label_width, 30);
    }

    #[test]
    fn test_legacy_color_keys_are_accepted() {
        let a = AppearanceSettings::from_json_lossy(&json!({
            "colors": { "labelColor": "#ff0000", "border": "#00ff00" }
        }));
        assert_eq!(a.label_color(), "#ff0000");
        assert_eq!(a.border_color(), "#00ff00");
    }

    #[test]
    fn test_input_style_reflects_state() {
        let a = AppearanceSettings::default();
        assert!(a.input_style(false, false).contains(DEFAULT_BORDER_COLOR));
        assert!(a.input_style(true, false).contains(DEFAULT_FOCUS_COLOR));
        assert!(a.input_style(true, true).contains(ERROR_COLOR));
        assert!(a.input_style(false, false).contains("border-radius: .375rem"));

        let borderless = AppearanceSettings {
            show_border: false,
            ..Default::default()
        };
        assert!(borderless.input_style(false, false).contains("border: none"));
    }

    #[test]
    fn test_container_class_contains_custom_class() {
        let a = AppearanceSettings {
            custom_class: " my-field ".into(),
            ui_variant: UiVariant::Underlined,
            ..Default::default()
        };
        let class = a.container_class(true);
        assert!(class.contains("cms-field--underlined"));
        assert!(class.contains("has-error"));
        assert!(class.ends_with("my-field"));
    }
}
