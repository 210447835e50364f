//! Lexer for the constrained expression evaluator
//!
//! Tokenizes a single normalized expression. Anything outside the supported
//! operator and literal set (keywords like `new`, assignment, calls) is a
//! lex error, which the caller surfaces as a per-statement evaluation
//! failure.

/// Token variants for the expression subset.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Num(f64),
    Str(String),
    Ident(String),
    True,
    False,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,

    AndAnd,
    OrOr,
    Bang,

    Dot,
    LParen,
    RParen,
    LBracket,
    RBracket,
}

/// Tokenize `input` into a flat token stream.
pub fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let n = text
                .parse::<f64>()
                .map_err(|_| format!("bad number literal '{}'", text))?;
            tokens.push(Token::Num(n));
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            tokens.push(match word.as_str() {
                "true" => Token::True,
                "false" => Token::False,
                "new" => return Err("unsupported keyword 'new'".to_string()),
                _ => Token::Ident(word),
            });
            continue;
        }

        if c == '"' {
            let mut text = String::new();
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                if chars[i] == '\\' && i + 1 < chars.len() {
                    i += 1;
                    text.push(match chars[i] {
                        'n' => '\n',
                        't' => '\t',
                        other => other,
                    });
                } else {
                    text.push(chars[i]);
                }
                i += 1;
            }
            if i >= chars.len() {
                return Err("unterminated string literal".to_string());
            }
            i += 1; // closing quote
            tokens.push(Token::Str(text));
            continue;
        }

        let two: String = chars[i..chars.len().min(i + 2)].iter().collect();
        let (token, width) = match two.as_str() {
            "==" => (Token::EqEq, 2),
            "!=" => (Token::NotEq, 2),
            "<=" => (Token::Le, 2),
            ">=" => (Token::Ge, 2),
            "&&" => (Token::AndAnd, 2),
            "||" => (Token::OrOr, 2),
            _ => match c {
                '+' => (Token::Plus, 1),
                '-' => (Token::Minus, 1),
                '*' => (Token::Star, 1),
                '/' => (Token::Slash, 1),
                '%' => (Token::Percent, 1),
                '<' => (Token::Lt, 1),
                '>' => (Token::Gt, 1),
                '!' => (Token::Bang, 1),
                '.' => (Token::Dot, 1),
                '(' => (Token::LParen, 1),
                ')' => (Token::RParen, 1),
                '[' => (Token::LBracket, 1),
                ']' => (Token::RBracket, 1),
                other => return Err(format!("unsupported character '{}'", other)),
            },
        };
        tokens.push(token);
        i += width;
    }

    Ok(tokens)
}
