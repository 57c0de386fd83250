use serde::{Deserialize, Serialize};

/// Посимвольный фильтр ввода для текстовых полей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFilter {
    #[default]
    None,
    Letters,
    Numbers,
    Alphanumeric,
}

impl KeyFilter {
    pub fn all() -> [KeyFilter; 4] {
        [
            KeyFilter::None,
            KeyFilter::Letters,
            KeyFilter::Numbers,
            KeyFilter::Alphanumeric,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFilter::None => "none",
            KeyFilter::Letters => "letters",
            KeyFilter::Numbers => "numbers",
            KeyFilter::Alphanumeric => "alphanumeric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KeyFilter::None => "None",
            KeyFilter::Letters => "Letters Only",
            KeyFilter::Numbers => "Numbers Only",
            KeyFilter::Alphanumeric => "Alphanumeric",
        }
    }

    /// Неизвестные значения трактуются как отсутствие фильтра
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "letters" => KeyFilter::Letters,
            "numbers" => KeyFilter::Numbers,
            "alphanumeric" => KeyFilter::Alphanumeric,
            _ => KeyFilter::None,
        }
    }
}

/// Расположение кнопок +/- у числового поля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLayout {
    #[default]
    Horizontal,
    Vertical,
}

impl ButtonLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLayout::Horizontal => "horizontal",
            ButtonLayout::Vertical => "vertical",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "vertical" => ButtonLayout::Vertical,
            _ => ButtonLayout::Horizontal,
        }
    }
}

/// Расширенные настройки поля (`settings.advanced`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedSettings {
    pub key_filter: KeyFilter,
    pub show_buttons: bool,
    pub button_layout: ButtonLayout,
    pub prefix: String,
    pub suffix: String,
    pub read_only: bool,
    pub default_value: String,
}

impl AdvancedSettings {
    /// Разбор из JSON без ошибок: битый ключ получает значение по умолчанию
    pub fn from_json_lossy(value: &serde_json::Value) -> Self {
        super::lenient::from_object_lossy(value)
    }

    pub fn has_adornments(&self) -> bool {
        !self.prefix.is_empty() || !self.suffix.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_match_renderer_contract() {
        let adv = AdvancedSettings::default();
        assert_eq!(adv.key_filter, KeyFilter::None);
        assert!(!adv.show_buttons);
        assert_eq!(adv.button_layout, ButtonLayout::Horizontal);
        assert_eq!(adv.prefix, "");
        assert_eq!(adv.suffix, "");
    }

    #[test]
    fn test_camel_case_wire_format() {
        let adv = AdvancedSettings::from_json_lossy(&json!({
            "keyFilter": "letters",
            "showButtons": true,
            "buttonLayout": "vertical",
            "prefix": "$"
        }));
        assert_eq!(adv.key_filter, KeyFilter::Letters);
        assert!(adv.show_buttons);
        assert_eq!(adv.button_layout, ButtonLayout::Vertical);
        assert_eq!(adv.prefix, "$");
        assert!(adv.has_adornments());
    }

    #[test]
    fn test_broken_key_falls_back_to_default() {
        let adv = AdvancedSettings::from_json_lossy(&json!({
            "keyFilter": "emoji",
            "prefix": null,
            "suffix": "kg",
            "showButtons": true
        }));
        assert_eq!(adv.key_filter, KeyFilter::None);
        assert_eq!(adv.prefix, "");
        assert_eq!(adv.suffix, "kg");
        assert!(adv.show_buttons);
        assert_eq!(KeyFilter::from_str_lossy("emoji"), KeyFilter::None);
    }
}
