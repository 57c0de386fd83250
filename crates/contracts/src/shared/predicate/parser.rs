use super::error::PredicateError;
use super::{CmpOp, Expr, TextOp};
use regex::Regex;

/// Предельная вложенность выражения (скобки, `not`, цепочки `and`/`or`)
pub(super) const MAX_DEPTH: usize = 64;

/// Предельная длина исходного текста в символах
pub(super) const MAX_SOURCE_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Ident(String),
    Num(f64),
    Str(String),
    LParen,
    RParen,
    Minus,
    Cmp(CmpOp),
    And,
    Or,
    Not,
}

#[derive(Debug, Clone)]
struct Token {
    tok: Tok,
    pos: usize,
    text: String,
}

// ============================================================================
// Lexer
// ============================================================================

fn tokenize(src: &str) -> Result<Vec<Token>, PredicateError> {
    let chars: Vec<(usize, char)> = src.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    let peek_is = |i: usize, c: char| chars.get(i).map(|(_, ch)| *ch == c).unwrap_or(false);

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let (tok, len) = match c {
            '(' => (Tok::LParen, 1),
            ')' => (Tok::RParen, 1),
            '-' => (Tok::Minus, 1),
            '&' if peek_is(i + 1, '&') => (Tok::And, 2),
            '|' if peek_is(i + 1, '|') => (Tok::Or, 2),
            '!' if peek_is(i + 1, '=') => {
                // `!==` принимается как `!=`
                let len = if peek_is(i + 2, '=') { 3 } else { 2 };
                (Tok::Cmp(CmpOp::Ne), len)
            }
            '!' => (Tok::Not, 1),
            '=' if peek_is(i + 1, '=') => {
                let len = if peek_is(i + 2, '=') { 3 } else { 2 };
                (Tok::Cmp(CmpOp::Eq), len)
            }
            '<' if peek_is(i + 1, '=') => (Tok::Cmp(CmpOp::Le), 2),
            '<' => (Tok::Cmp(CmpOp::Lt), 1),
            '>' if peek_is(i + 1, '=') => (Tok::Cmp(CmpOp::Ge), 2),
            '>' => (Tok::Cmp(CmpOp::Gt), 1),
            '"' | '\'' => {
                let (value, consumed) = lex_string(&chars, i, c)?;
                tokens.push(Token {
                    tok: Tok::Str(value),
                    pos,
                    text: chars[i..i + consumed].iter().map(|(_, ch)| ch).collect(),
                });
                i += consumed;
                continue;
            }
            c if c.is_ascii_digit() => {
                let start = i;
                while i < chars.len() && (chars[i].1.is_ascii_digit() || chars[i].1 == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().map(|(_, ch)| ch).collect();
                let value = text.parse::<f64>().map_err(|_| PredicateError::InvalidNumber {
                    pos,
                    text: text.clone(),
                })?;
                tokens.push(Token {
                    tok: Tok::Num(value),
                    pos,
                    text,
                });
                continue;
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len()
                    && (chars[i].1.is_alphanumeric() || chars[i].1 == '_' || chars[i].1 == '.')
                {
                    i += 1;
                }
                let text: String = chars[start..i].iter().map(|(_, ch)| ch).collect();
                let tok = match text.as_str() {
                    "and" => Tok::And,
                    "or" => Tok::Or,
                    "not" => Tok::Not,
                    _ => Tok::Ident(text.clone()),
                };
                tokens.push(Token { tok, pos, text });
                continue;
            }
            other => {
                return Err(PredicateError::UnexpectedToken {
                    pos,
                    found: other.to_string(),
                })
            }
        };

        let text: String = chars[i..(i + len).min(chars.len())]
            .iter()
            .map(|(_, ch)| ch)
            .collect();
        tokens.push(Token { tok, pos, text });
        i += len;
    }

    Ok(tokens)
}

/// Возвращает (значение, количество поглощённых символов включая кавычки)
fn lex_string(
    chars: &[(usize, char)],
    start: usize,
    quote: char,
) -> Result<(String, usize), PredicateError> {
    let mut value = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        let c = chars[i].1;
        if c == quote {
            return Ok((value, i - start + 1));
        }
        if c == '\\' {
            let next = chars
                .get(i + 1)
                .map(|(_, ch)| *ch)
                .ok_or(PredicateError::UnterminatedString { pos: chars[start].0 })?;
            value.push(match next {
                'n' => '\n',
                't' => '\t',
                other => other,
            });
            i += 2;
            continue;
        }
        value.push(c);
        i += 1;
    }

    Err(PredicateError::UnterminatedString { pos: chars[start].0 })
}

// ============================================================================
// Parser
// ============================================================================

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn current_pos(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.pos)
            .unwrap_or(0)
    }

    fn enter(&mut self) -> Result<(), PredicateError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(PredicateError::TooDeep {
                pos: self.current_pos(),
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Цепочка `a && b && ...` строит левостороннее дерево той же глубины
    fn check_chain(&self, links: usize) -> Result<(), PredicateError> {
        if self.depth + links > MAX_DEPTH {
            return Err(PredicateError::TooDeep {
                pos: self.current_pos(),
            });
        }
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_rparen(&mut self) -> Result<(), PredicateError> {
        match self.next() {
            Some(Token {
                tok: Tok::RParen, ..
            }) => Ok(()),
            Some(t) => Err(PredicateError::UnexpectedToken {
                pos: t.pos,
                found: t.text,
            }),
            None => Err(PredicateError::UnexpectedEnd),
        }
    }

    fn parse_or(&mut self) -> Result<Expr, PredicateError> {
        self.enter()?;
        let mut left = self.parse_and()?;
        let mut links = 0;
        while matches!(self.peek(), Some(Token { tok: Tok::Or, .. })) {
            links += 1;
            self.check_chain(links)?;
            self.next();
            let right = self.parse_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        self.leave();
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, PredicateError> {
        let mut left = self.parse_not()?;
        let mut links = 0;
        while matches!(self.peek(), Some(Token { tok: Tok::And, .. })) {
            links += 1;
            self.check_chain(links)?;
            self.next();
            let right = self.parse_not()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, PredicateError> {
        if matches!(self.peek(), Some(Token { tok: Tok::Not, .. })) {
            self.next();
            self.enter()?;
            let inner = self.parse_not()?;
            self.leave();
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.parse_cmp()
    }

    fn parse_cmp(&mut self) -> Result<Expr, PredicateError> {
        let left = self.parse_term()?;

        let Some(token) = self.peek().cloned() else {
            return Ok(left);
        };

        match &token.tok {
            Tok::Cmp(op) => {
                self.next();
                let right = self.parse_term()?;
                Ok(Expr::Compare(*op, Box::new(left), Box::new(right)))
            }
            Tok::Ident(name) => {
                let text_op = match name.as_str() {
                    "contains" => Some(TextOp::Contains),
                    "starts_with" => Some(TextOp::StartsWith),
                    "ends_with" => Some(TextOp::EndsWith),
                    _ => None,
                };
                if let Some(op) = text_op {
                    self.next();
                    let right = self.parse_term()?;
                    return Ok(Expr::Text(op, Box::new(left), Box::new(right)));
                }
                if name == "matches" {
                    self.next();
                    return match self.next() {
                        Some(Token {
                            tok: Tok::Str(pattern),
                            ..
                        }) => {
                            let re = Regex::new(&pattern)
                                .map_err(|e| PredicateError::InvalidRegex(e.to_string()))?;
                            Ok(Expr::Matches(Box::new(left), re))
                        }
                        Some(t) => Err(PredicateError::UnexpectedToken {
                            pos: t.pos,
                            found: t.text,
                        }),
                        None => Err(PredicateError::UnexpectedEnd),
                    };
                }
                Ok(left)
            }
            _ => Ok(left),
        }
    }

    fn parse_term(&mut self) -> Result<Expr, PredicateError> {
        let token = self.next().ok_or(PredicateError::UnexpectedEnd)?;

        match token.tok {
            Tok::Ident(name) => match name.as_str() {
                "value" => Ok(Expr::Value),
                "length" | "value.length" => Ok(Expr::Length),
                "true" => Ok(Expr::Bool(true)),
                "false" => Ok(Expr::Bool(false)),
                "len" => {
                    match self.next() {
                        Some(Token {
                            tok: Tok::LParen, ..
                        }) => {}
                        Some(t) => {
                            return Err(PredicateError::UnexpectedToken {
                                pos: t.pos,
                                found: t.text,
                            })
                        }
                        None => return Err(PredicateError::UnexpectedEnd),
                    }
                    let inner = self.parse_or()?;
                    self.expect_rparen()?;
                    Ok(Expr::Len(Box::new(inner)))
                }
                _ => Err(PredicateError::UnknownIdentifier {
                    pos: token.pos,
                    name,
                }),
            },
            Tok::Num(n) => Ok(Expr::Num(n)),
            Tok::Minus => match self.next() {
                Some(Token {
                    tok: Tok::Num(n), ..
                }) => Ok(Expr::Num(-n)),
                Some(t) => Err(PredicateError::UnexpectedToken {
                    pos: t.pos,
                    found: t.text,
                }),
                None => Err(PredicateError::UnexpectedEnd),
            },
            Tok::Str(s) => Ok(Expr::Str(s)),
            Tok::LParen => {
                let inner = self.parse_or()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            _ => Err(PredicateError::UnexpectedToken {
                pos: token.pos,
                found: token.text,
            }),
        }
    }
}

pub(super) fn parse(src: &str) -> Result<Expr, PredicateError> {
    if src.trim().is_empty() {
        return Err(PredicateError::Empty);
    }

    let len = src.chars().count();
    if len > MAX_SOURCE_LEN {
        return Err(PredicateError::TooLong {
            len,
            max: MAX_SOURCE_LEN,
        });
    }

    let tokens = tokenize(src)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_or()?;

    if let Some(token) = parser.peek() {
        return Err(PredicateError::TrailingInput { pos: token.pos });
    }

    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_operators() {
        let tokens = tokenize("length >= 3 && value != 'x'").unwrap();
        let kinds: Vec<Tok> = tokens.into_iter().map(|t| t.tok).collect();
        assert_eq!(
            kinds,
            vec![
                Tok::Ident("length".into()),
                Tok::Cmp(CmpOp::Ge),
                Tok::Num(3.0),
                Tok::And,
                Tok::Ident("value".into()),
                Tok::Cmp(CmpOp::Ne),
                Tok::Str("x".into()),
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        let tokens = tokenize(r#""a\"b""#).unwrap();
        assert_eq!(tokens[0].tok, Tok::Str("a\"b".into()));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            parse("value == 'abc").unwrap_err(),
            PredicateError::UnterminatedString { pos: 9 }
        );
    }

    #[test]
    fn test_errors_carry_positions() {
        assert_eq!(
            parse("value ==").unwrap_err(),
            PredicateError::UnexpectedEnd
        );
        assert_eq!(
            parse("length > 3 3").unwrap_err(),
            PredicateError::TrailingInput { pos: 11 }
        );
        assert_eq!(
            parse("foo > 3").unwrap_err(),
            PredicateError::UnknownIdentifier {
                pos: 0,
                name: "foo".into()
            }
        );
        assert!(matches!(
            parse("value matches '('").unwrap_err(),
            PredicateError::InvalidRegex(_)
        ));
        assert_eq!(parse("   ").unwrap_err(), PredicateError::Empty);
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let parens = format!("{}value{}", "(".repeat(2_000), ")".repeat(2_000));
        assert!(matches!(
            parse(&parens).unwrap_err(),
            PredicateError::TooDeep { .. }
        ));

        let nots = format!("{}value", "!".repeat(2_000));
        assert!(matches!(
            parse(&nots).unwrap_err(),
            PredicateError::TooDeep { .. }
        ));

        let chain = vec!["value"; 500].join(" && ");
        assert!(matches!(
            parse(&chain).unwrap_err(),
            PredicateError::TooDeep { .. }
        ));
    }

    #[test]
    fn test_deep_nesting_on_small_stack() {
        // Стек потока WASM по умолчанию 1 MiB
        let handle = std::thread::Builder::new()
            .stack_size(1 << 20)
            .spawn(|| {
                let src = format!("{}value{}", "(".repeat(2_000), ")".repeat(2_000));
                parse(&src).is_err()
            })
            .unwrap();
        assert!(handle.join().unwrap());
    }

    #[test]
    fn test_moderate_nesting_is_accepted() {
        let src = format!("{}length > 1{}", "(".repeat(20), ")".repeat(20));
        assert!(parse(&src).is_ok());
        assert!(parse("!!!value").is_ok());
        assert!(parse(&vec!["value"; 10].join(" and ")).is_ok());
    }

    #[test]
    fn test_long_source_is_rejected() {
        let src = format!("value == '{}'", "x".repeat(MAX_SOURCE_LEN));
        assert_eq!(
            parse(&src).unwrap_err(),
            PredicateError::TooLong {
                len: MAX_SOURCE_LEN + 11,
                max: MAX_SOURCE_LEN
            }
        );
    }

    #[test]
    fn test_js_style_equality_is_accepted() {
        assert!(parse("value === 'a' || value !== 'b'").is_ok());
    }
}
