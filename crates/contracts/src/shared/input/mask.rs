//! Позиционная маска ввода: `#` цифра, `A` латинская буква, `*` любой символ,
//! остальные символы шаблона выводятся как есть.

fn is_slot(c: char) -> bool {
    matches!(c, '#' | 'A' | '*')
}

fn slot_accepts(slot: char, c: char) -> bool {
    match slot {
        '#' => c.is_ascii_digit(),
        'A' => c.is_ascii_alphabetic(),
        '*' => true,
        _ => false,
    }
}

/// Применить шаблон к вводу.
///
/// Неподходящие символы ввода пропускаются; литерал шаблона выводится
/// всегда и поглощает символ ввода только при совпадении. Результат
/// обрывается, когда ввод закончился.
pub fn apply_mask(template: &str, input: &str) -> String {
    if template.is_empty() {
        return input.to_string();
    }

    let template: Vec<char> = template.chars().collect();
    let input: Vec<char> = input.chars().collect();
    let mut result = String::new();
    let mut t = 0;
    let mut i = 0;

    while t < template.len() && i < input.len() {
        let slot = template[t];
        let c = input[i];

        if is_slot(slot) {
            if slot_accepts(slot, c) {
                result.push(c);
                t += 1;
            }
            i += 1;
        } else {
            result.push(slot);
            if c == slot {
                i += 1;
            }
            t += 1;
        }
    }

    result
}

/// Символы, стоящие в позициях-слотах маскированной строки
pub fn raw_from_masked(template: &str, masked: &str) -> String {
    if template.is_empty() {
        return masked.to_string();
    }
    template
        .chars()
        .zip(masked.chars())
        .filter(|(slot, _)| is_slot(*slot))
        .map(|(_, c)| c)
        .collect()
}

/// Подсказка по шаблону: `#` → 0, `A` → a, `*` → x
pub fn mask_placeholder(template: &str) -> String {
    template
        .chars()
        .map(|c| match c {
            '#' => '0',
            'A' => 'a',
            '*' => 'x',
            other => other,
        })
        .collect()
}

pub fn slot_count(template: &str) -> usize {
    template.chars().filter(|c| is_slot(*c)).count()
}

/// Все слоты шаблона заполнены
pub fn is_complete(template: &str, raw: &str) -> bool {
    raw.chars().count() >= slot_count(template)
}

/// Результат редактирования маскированного поля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedEdit {
    pub display: String,
    pub raw: String,
}

/// Обработка текста из поля ввода: маска пересчитывается целиком
pub fn edit_masked(template: &str, typed: &str) -> MaskedEdit {
    let display = apply_mask(template, typed);
    let raw = raw_from_masked(template, &display);
    MaskedEdit { display, raw }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "(###) ###-####";

    #[test]
    fn test_phone_mask() {
        assert_eq!(apply_mask(PHONE, "5551234567"), "(555) 123-4567");
        assert_eq!(apply_mask(PHONE, "555"), "(555");
        assert_eq!(apply_mask(PHONE, ""), "");
    }

    #[test]
    fn test_non_matching_chars_are_skipped() {
        assert_eq!(apply_mask("##-AA", "1x2.ab"), "12-ab");
        assert_eq!(apply_mask("AA##", "a1b2c3"), "ab23");
    }

    #[test]
    fn test_star_accepts_anything() {
        assert_eq!(apply_mask("**/**", "a!b?"), "a!/b?");
    }

    #[test]
    fn test_masking_is_idempotent() {
        for raw in ["5551234567", "55", "abc123", "(555) 12", ""] {
            let once = apply_mask(PHONE, raw);
            assert_eq!(apply_mask(PHONE, raw), once);
            assert_eq!(apply_mask(PHONE, &once), once);
        }
    }

    #[test]
    fn test_raw_value_is_emitted() {
        let edit = edit_masked(PHONE, "(555) 123-45");
        assert_eq!(edit.display, "(555) 123-45");
        assert_eq!(edit.raw, "55512345");
        assert!(!is_complete(PHONE, &edit.raw));
        assert!(is_complete(PHONE, "5551234567"));
    }

    #[test]
    fn test_raw_roundtrips_through_display() {
        let raw = "5551234567";
        let display = apply_mask(PHONE, raw);
        assert_eq!(raw_from_masked(PHONE, &display), raw);
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(mask_placeholder("AA-###-**"), "aa-000-xx");
    }

    #[test]
    fn test_empty_template_passes_through() {
        assert_eq!(apply_mask("", "anything"), "anything");
        assert_eq!(raw_from_masked("", "anything"), "anything");
    }
}
