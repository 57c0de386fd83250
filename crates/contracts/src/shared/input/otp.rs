/// Ячейки одноразового кода.
///
/// Каждая ячейка хранит не более одной цифры; код целиком
/// получается склейкой ячеек.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCells {
    cells: Vec<String>,
}

impl OtpCells {
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![String::new(); length.max(1)],
        }
    }

    /// Разложить внешнее значение по ячейкам; лишние символы отбрасываются
    pub fn from_value(length: usize, value: &str) -> Self {
        let mut otp = Self::new(length);
        for (cell, c) in otp.cells.iter_mut().zip(value.chars()) {
            *cell = c.to_string();
        }
        otp
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(String::is_empty)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn join(&self) -> String {
        self.cells.concat()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Ввод в ячейку `index`. Возвращает индекс ячейки, которая должна
    /// получить фокус, если он должен сместиться.
    ///
    /// Нецифровые символы отбрасываются; пустой ввод очищает ячейку;
    /// несколько цифр (вставка) раскладываются начиная с `index`.
    pub fn input(&mut self, index: usize, raw: &str) -> Option<usize> {
        if index >= self.cells.len() {
            return None;
        }

        let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let last = self.cells.len() - 1;

        match digits.len() {
            0 => {
                self.cells[index].clear();
                None
            }
            1 => {
                self.cells[index] = digits[0].to_string();
                (index < last).then_some(index + 1)
            }
            _ => {
                let pasted: Vec<char> = digits.into_iter().take(self.cells.len() - index).collect();
                for (offset, d) in pasted.iter().enumerate() {
                    self.cells[index + offset] = d.to_string();
                }
                Some((index + pasted.len()).min(last))
            }
        }
    }

    /// Вставка из буфера обмена в первую ячейку
    pub fn paste(&mut self, raw: &str) -> Option<usize> {
        self.input(0, raw)
    }

    /// Backspace: на пустой ячейке фокус уходит на предыдущую
    pub fn backspace(&self, index: usize) -> Option<usize> {
        (index > 0 && self.cell(index).is_empty()).then(|| index - 1)
    }

    pub fn left(&self, index: usize) -> Option<usize> {
        (index > 0).then(|| index - 1)
    }

    pub fn right(&self, index: usize) -> Option<usize> {
        (index + 1 < self.cells.len()).then_some(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_advances_focus() {
        let mut otp = OtpCells::new(4);
        assert_eq!(otp.input(0, "1"), Some(1));
        assert_eq!(otp.input(1, "2"), Some(2));
        assert_eq!(otp.input(3, "9"), None);
        assert_eq!(otp.join(), "129");
        assert!(!otp.is_complete());
    }

    #[test]
    fn test_non_digits_are_ignored() {
        let mut otp = OtpCells::new(4);
        assert_eq!(otp.input(0, "a"), None);
        assert_eq!(otp.join(), "");
    }

    #[test]
    fn test_paste_is_truncated() {
        let mut otp = OtpCells::new(6);
        assert_eq!(otp.paste("12345678"), Some(5));
        assert_eq!(otp.join(), "123456");
        assert_eq!(otp.join().len(), otp.len());
        assert!(otp.is_complete());
    }

    #[test]
    fn test_paste_from_middle() {
        let mut otp = OtpCells::from_value(6, "12");
        assert_eq!(otp.input(2, "9-9-9-9-9"), Some(5));
        assert_eq!(otp.join(), "129999");
    }

    #[test]
    fn test_join_matches_cells() {
        let otp = OtpCells::from_value(4, "42");
        assert_eq!(otp.cells().concat(), otp.join());
        assert_eq!(otp.cell(2), "");
        let otp = OtpCells::from_value(3, "98765");
        assert_eq!(otp.join(), "987");
    }

    #[test]
    fn test_navigation() {
        let mut otp = OtpCells::new(3);
        otp.input(0, "1");
        assert_eq!(otp.backspace(1), Some(0));
        assert_eq!(otp.backspace(0), None);
        otp.input(1, "2");
        assert_eq!(otp.backspace(1), None);
        assert_eq!(otp.left(0), None);
        assert_eq!(otp.right(2), None);
        assert_eq!(otp.right(1), Some(2));
    }

    #[test]
    fn test_clearing_a_cell() {
        let mut otp = OtpCells::from_value(3, "123");
        otp.input(1, "");
        assert_eq!(otp.join(), "13");
    }
}
