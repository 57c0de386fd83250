/// Палитра быстрого выбора цвета
pub const PRESET_COLORS: [&str; 16] = [
    "#000000", "#ffffff", "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#10b981",
    "#06b6d4", "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#d946ef", "#ec4899", "#f43f5e",
];

/// `#rgb` или `#rrggbb`
pub fn is_hex_color(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Значение для нативного `<input type="color">`, которому нужен `#rrggbb`
pub fn to_native_color(s: &str) -> String {
    if !is_hex_color(s) {
        return "#000000".to_string();
    }
    let hex = &s[1..];
    if hex.len() == 3 {
        let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
        format!("#{}", expanded.to_lowercase())
    } else {
        s.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_hex() {
        assert!(PRESET_COLORS.iter().all(|c| is_hex_color(c)));
    }

    #[test]
    fn test_native_color() {
        assert_eq!(to_native_color("#FA0"), "#ffaa00");
        assert_eq!(to_native_color("#3B82F6"), "#3b82f6");
        assert_eq!(to_native_color("red"), "#000000");
        assert_eq!(to_native_color(""), "#000000");
    }
}
