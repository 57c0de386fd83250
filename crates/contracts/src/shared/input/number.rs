use crate::domain::a002_field::NumberFormat;

/// Границы и шаг числового поля
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

impl Default for NumberBounds {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: 1.0,
        }
    }
}

impl NumberBounds {
    pub fn new(min: Option<f64>, max: Option<f64>, step: f64) -> Self {
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
        Self { min, max, step }
    }

    pub fn clamp(&self, n: f64) -> f64 {
        let n = match self.min {
            Some(min) if n < min => min,
            _ => n,
        };
        match self.max {
            Some(max) if n > max => max,
            _ => n,
        }
    }

    pub fn can_increment(&self, current: f64) -> bool {
        self.max.map(|max| current < max).unwrap_or(true)
    }

    pub fn can_decrement(&self, current: f64) -> bool {
        self.min.map(|min| current > min).unwrap_or(true)
    }

    /// Значение, в которое превращается пустой или некорректный ввод
    pub fn fallback(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }
}

pub fn format_plain(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Строковый буфер редактирования числа.
///
/// Хранит текст отдельно от числового значения, чтобы промежуточные
/// состояния (`""`, `"-"`, `"1."`) не приводились к числу раньше времени.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberEditBuffer {
    text: String,
    focused: bool,
}

impl NumberEditBuffer {
    pub fn new(value: Option<f64>) -> Self {
        Self {
            text: value.map(format_plain).unwrap_or_default(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Внешнее обновление значения; во время редактирования игнорируется
    pub fn sync(&mut self, value: f64) {
        if !self.focused {
            self.text = format_plain(value);
        }
    }

    /// Обработка ввода. Возвращает новое значение, если его нужно сообщить.
    pub fn input(&mut self, raw: &str, bounds: &NumberBounds) -> Option<f64> {
        if raw.is_empty() || raw == "-" {
            self.text = raw.to_string();
            return None;
        }

        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();

        let parsed = cleaned.parse::<f64>().ok().filter(|n| n.is_finite())?;
        let clamped = bounds.clamp(parsed);

        self.text = if clamped == parsed {
            cleaned
        } else {
            format_plain(clamped)
        };
        Some(clamped)
    }

    /// Потеря фокуса: пустой или некорректный буфер становится `min` или `0`
    pub fn blur(&mut self, bounds: &NumberBounds) -> Option<f64> {
        self.focused = false;
        match self.text.parse::<f64>() {
            Ok(n) if n.is_finite() => {
                self.text = format_plain(n);
                None
            }
            _ => {
                let fallback = bounds.fallback();
                self.text = format_plain(fallback);
                Some(fallback)
            }
        }
    }

    pub fn increment(&mut self, current: f64, bounds: &NumberBounds) -> Option<f64> {
        self.step_by(current, bounds.step, bounds)
    }

    pub fn decrement(&mut self, current: f64, bounds: &NumberBounds) -> Option<f64> {
        self.step_by(current, -bounds.step, bounds)
    }

    fn step_by(&mut self, current: f64, delta: f64, bounds: &NumberBounds) -> Option<f64> {
        let next = bounds.clamp(current + delta);
        if next == current {
            return None;
        }
        self.text = format_plain(next);
        Some(next)
    }

    /// Текст для отображения: во время редактирования буфер, иначе формат
    pub fn display(&self, value: f64, format: &NumberFormat) -> String {
        if self.focused || self.text.is_empty() {
            self.text.clone()
        } else {
            format_number(value, format)
        }
    }
}

fn separators(locale: &str) -> (char, char) {
    let lang = locale.split(['-', '_']).next().unwrap_or("").to_lowercase();
    match lang.as_str() {
        "de" | "es" | "it" | "pt" | "nl" | "id" | "tr" => ('.', ','),
        "fr" | "ru" | "pl" | "cs" | "uk" | "sv" | "fi" | "nb" => ('\u{a0}', ','),
        _ => (',', '.'),
    }
}

fn group_digits(int_part: &str, sep: char) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(*c);
    }
    out
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "RUB" => Some("₽"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn format_grouped(n: f64, decimals: Option<usize>, locale: &str) -> String {
    let (group_sep, decimal_sep) = separators(locale);
    let negative = n < 0.0;
    let text = match decimals {
        Some(d) => format!("{:.*}", d, n.abs()),
        None => format_plain(n.abs()),
    };
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&int_part, group_sep));
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(&frac);
    }
    out
}

/// Форматирование числа для отображения вне фокуса
pub fn format_number(n: f64, format: &NumberFormat) -> String {
    match format {
        NumberFormat::Plain { locale } => match locale {
            Some(locale) => format_grouped(n, None, locale),
            None => format_plain(n),
        },
        NumberFormat::Currency { currency, locale } => {
            let locale = locale.as_deref().unwrap_or("en-US");
            let amount = format_grouped(n.abs(), Some(2), locale);
            let sign = if n < 0.0 { "-" } else { "" };
            match currency_symbol(currency) {
                Some(symbol) if separators(locale).1 == '.' => {
                    format!("{}{}{}", sign, symbol, amount)
                }
                Some(symbol) => format!("{}{}\u{a0}{}", sign, amount, symbol),
                None => format!("{}{}\u{a0}{}", sign, currency.to_uppercase(), amount),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_0_10() -> NumberBounds {
        NumberBounds::new(Some(0.0), Some(10.0), 1.0)
    }

    #[test]
    fn test_decrement_from_min_stays() {
        let mut buf = NumberEditBuffer::new(Some(0.0));
        assert_eq!(buf.decrement(0.0, &bounds_0_10()), None);
        assert!(!bounds_0_10().can_decrement(0.0));
    }

    #[test]
    fn test_increment_from_max_stays() {
        let mut buf = NumberEditBuffer::new(Some(10.0));
        assert_eq!(buf.increment(10.0, &bounds_0_10()), None);
        assert!(!bounds_0_10().can_increment(10.0));
    }

    #[test]
    fn test_step_is_clamped_not_wrapped() {
        let bounds = NumberBounds::new(Some(0.0), Some(10.0), 3.0);
        let mut buf = NumberEditBuffer::new(Some(9.0));
        assert_eq!(buf.increment(9.0, &bounds), Some(10.0));
        assert_eq!(buf.text(), "10");
        assert_eq!(buf.decrement(1.0, &bounds), Some(0.0));
    }

    #[test]
    fn test_transient_states_are_kept() {
        let mut buf = NumberEditBuffer::new(None);
        buf.focus();
        assert_eq!(buf.input("", &bounds_0_10()), None);
        assert_eq!(buf.input("-", &NumberBounds::default()), None);
        assert_eq!(buf.text(), "-");
        assert_eq!(buf.input("1.", &bounds_0_10()), Some(1.0));
        assert_eq!(buf.text(), "1.");
    }

    #[test]
    fn test_input_is_cleaned_and_clamped() {
        let mut buf = NumberEditBuffer::new(None);
        assert_eq!(buf.input("4a", &bounds_0_10()), Some(4.0));
        assert_eq!(buf.text(), "4");
        assert_eq!(buf.input("42", &bounds_0_10()), Some(10.0));
        assert_eq!(buf.text(), "10");
        assert_eq!(buf.input("-3", &bounds_0_10()), Some(0.0));
    }

    #[test]
    fn test_garbage_keeps_previous_text() {
        let mut buf = NumberEditBuffer::new(Some(5.0));
        assert_eq!(buf.input("1-2", &bounds_0_10()), None);
        assert_eq!(buf.text(), "5");
    }

    #[test]
    fn test_blur_resolves_empty_to_min_or_zero() {
        let mut buf = NumberEditBuffer::new(None);
        buf.focus();
        buf.input("", &NumberBounds::default());
        assert_eq!(buf.blur(&NumberBounds::new(Some(3.0), None, 1.0)), Some(3.0));
        assert_eq!(buf.text(), "3");

        let mut buf = NumberEditBuffer::new(None);
        buf.focus();
        buf.input("-", &NumberBounds::default());
        assert_eq!(buf.blur(&NumberBounds::default()), Some(0.0));
        assert!(!buf.is_focused());
    }

    #[test]
    fn test_display_formats_only_when_not_focused() {
        let format = NumberFormat::Currency {
            currency: "USD".into(),
            locale: Some("en-US".into()),
        };
        let mut buf = NumberEditBuffer::new(Some(1234.5));
        assert_eq!(buf.display(1234.5, &format), "$1,234.50");
        buf.focus();
        assert_eq!(buf.display(1234.5, &format), "1234.5");
    }

    #[test]
    fn test_locale_grouping() {
        let de = NumberFormat::Plain {
            locale: Some("de-DE".into()),
        };
        assert_eq!(format_number(1234567.25, &de), "1.234.567,25");
        let plain = NumberFormat::Plain { locale: None };
        assert_eq!(format_number(-42.0, &plain), "-42");
        let eur = NumberFormat::Currency {
            currency: "EUR".into(),
            locale: Some("de-DE".into()),
        };
        assert_eq!(format_number(5.0, &eur), "5,00\u{a0}€");
    }
}
