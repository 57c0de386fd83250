//! Декларативный язык пользовательских проверок значения поля.
//!
//! Выражение вычисляется интерпретатором над переменной `value`;
//! произвольный код оператора не исполняется.
//!
//! ```text
//! length >= 3 && value matches '^[A-Z]'
//! not (value contains "admin")
//! value >= 18 and value < 120
//! len(value) == 5 || value == ""
//! ```

pub mod error;
mod parser;

pub use error::PredicateError;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    Contains,
    StartsWith,
    EndsWith,
}

/// Узел AST выражения
#[derive(Debug, Clone)]
pub enum Expr {
    Value,
    Length,
    Num(f64),
    Str(String),
    Bool(bool),
    Len(Box<Expr>),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Compare(CmpOp, Box<Expr>, Box<Expr>),
    Text(TextOp, Box<Expr>, Box<Expr>),
    Matches(Box<Expr>, Regex),
}

#[derive(Debug, Clone, PartialEq)]
enum Val {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Val {
    fn truthy(&self) -> bool {
        match self {
            Val::Str(s) => !s.is_empty(),
            Val::Num(n) => *n != 0.0 && !n.is_nan(),
            Val::Bool(b) => *b,
        }
    }

    fn as_text(&self) -> String {
        match self {
            Val::Str(s) => s.clone(),
            Val::Num(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Val::Num(n) => n.to_string(),
            Val::Bool(b) => b.to_string(),
        }
    }

    fn as_num(&self) -> Option<f64> {
        match self {
            Val::Str(s) => s.trim().parse::<f64>().ok(),
            Val::Num(n) => Some(*n),
            Val::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }
}

fn compare<T: PartialOrd>(op: CmpOp, a: T, b: T) -> bool {
    match op {
        CmpOp::Eq => a == b,
        CmpOp::Ne => a != b,
        CmpOp::Lt => a < b,
        CmpOp::Le => a <= b,
        CmpOp::Gt => a > b,
        CmpOp::Ge => a >= b,
    }
}

impl Expr {
    fn eval(&self, value: &str) -> Val {
        match self {
            Expr::Value => Val::Str(value.to_string()),
            Expr::Length => Val::Num(value.chars().count() as f64),
            Expr::Num(n) => Val::Num(*n),
            Expr::Str(s) => Val::Str(s.clone()),
            Expr::Bool(b) => Val::Bool(*b),
            Expr::Len(inner) => Val::Num(inner.eval(value).as_text().chars().count() as f64),
            Expr::Not(inner) => Val::Bool(!inner.eval(value).truthy()),
            Expr::And(a, b) => Val::Bool(a.eval(value).truthy() && b.eval(value).truthy()),
            Expr::Or(a, b) => Val::Bool(a.eval(value).truthy() || b.eval(value).truthy()),
            Expr::Compare(op, a, b) => {
                let (a, b) = (a.eval(value), b.eval(value));
                let result = match (&a, &b) {
                    (Val::Num(_), _) | (_, Val::Num(_)) => match (a.as_num(), b.as_num()) {
                        (Some(x), Some(y)) => compare(*op, x, y),
                        // Нечисловое значение не равно никакому числу
                        _ => *op == CmpOp::Ne,
                    },
                    (Val::Bool(_), _) | (_, Val::Bool(_)) => compare(*op, a.truthy(), b.truthy()),
                    _ => compare(*op, a.as_text(), b.as_text()),
                };
                Val::Bool(result)
            }
            Expr::Text(op, a, b) => {
                let (a, b) = (a.eval(value).as_text(), b.eval(value).as_text());
                Val::Bool(match op {
                    TextOp::Contains => a.contains(&b),
                    TextOp::StartsWith => a.starts_with(&b),
                    TextOp::EndsWith => a.ends_with(&b),
                })
            }
            Expr::Matches(a, re) => Val::Bool(re.is_match(&a.eval(value).as_text())),
        }
    }
}

/// Разобранное выражение проверки
#[derive(Debug, Clone)]
pub struct Predicate {
    source: String,
    expr: Expr,
}

impl Predicate {
    pub fn parse(source: &str) -> Result<Self, PredicateError> {
        let expr = parser::parse(source)?;
        Ok(Self {
            source: source.trim().to_string(),
            expr,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Истинность выражения для значения поля
    pub fn eval(&self, value: &str) -> bool {
        self.expr.eval(value).truthy()
    }
}

/// Разобрать и вычислить выражение за один вызов
pub fn evaluate(source: &str, value: &str) -> Result<bool, PredicateError> {
    Ok(Predicate::parse(source)?.eval(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rules() {
        assert!(evaluate("length >= 3", "abc").unwrap());
        assert!(!evaluate("length >= 3", "ab").unwrap());
        assert!(evaluate("value.length < 2", "é").unwrap());
        assert!(evaluate("len(value) == 5", "hello").unwrap());
    }

    #[test]
    fn test_numeric_coercion() {
        assert!(evaluate("value >= 18 and value < 120", "42").unwrap());
        assert!(!evaluate("value >= 18", "17").unwrap());
        assert!(!evaluate("value > 1", "abc").unwrap());
        assert!(evaluate("value != 1", "abc").unwrap());
        assert!(evaluate("value == -2.5", "-2.5").unwrap());
    }

    #[test]
    fn test_string_operators() {
        let p = Predicate::parse("value starts_with 'SKU-' && not (value contains ' ')").unwrap();
        assert!(p.eval("SKU-001"));
        assert!(!p.eval("SKU 001"));
        assert!(!p.eval("ABC-001"));
        assert!(evaluate("value ends_with \".com\"", "a@b.com").unwrap());
    }

    #[test]
    fn test_regex_match() {
        let p = Predicate::parse("value matches '^[A-Z][a-z]+$'").unwrap();
        assert!(p.eval("Alice"));
        assert!(!p.eval("alice"));
    }

    #[test]
    fn test_precedence_and_before_or() {
        // true || (false && false) == true
        assert!(evaluate("value == 'a' || value == 'b' && length > 5", "a").unwrap());
        assert!(!evaluate("(value == 'a' || value == 'b') && length > 5", "a").unwrap());
    }

    #[test]
    fn test_bare_value_is_truthy_when_non_empty() {
        assert!(evaluate("value", "x").unwrap());
        assert!(!evaluate("value", "").unwrap());
        assert!(evaluate("!value", "").unwrap());
    }

    #[test]
    fn test_source_is_kept() {
        let p = Predicate::parse("  length > 1 ").unwrap();
        assert_eq!(p.source(), "length > 1");
    }
}
