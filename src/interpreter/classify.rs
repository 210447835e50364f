//! Statement classification
//!
//! One pass over a trimmed source line produces exactly one [`Statement`]
//! variant, which the engine dispatches through a single exhaustive match.
//! The individual patterns stay heuristic (prefix skip tests, regex-shaped
//! statement forms); the interpreter is deliberately best-effort.

use crate::detect::language::Language;
use crate::state::DeclaredType;
use lazy_static::lazy_static;
use regex::Regex;

/// Compound assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// The closed set of statement kinds the interpreter executes.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An unmatched method signature; its array parameters get registered
    MethodSignature,
    /// A print/output statement (content parsed by the executor)
    Print,
    Return {
        expr: String,
    },
    /// Comments, boilerplate, imports, braces, calls — not executed
    Skip,
    ForHeader {
        init: String,
        cond: String,
        update: String,
    },
    WhileHeader {
        cond: String,
    },
    IfHeader {
        cond: String,
    },
    ElseIfHeader {
        cond: String,
    },
    ElseHeader,
    ArrayLiteralDecl {
        name: String,
        elements: Vec<String>,
    },
    /// `new int[n]` — created zero-filled
    ArraySizedDecl {
        name: String,
        size: String,
    },
    IndexedAssign {
        name: String,
        index: String,
        expr: String,
    },
    VarDecl {
        declared_type: DeclaredType,
        name: String,
        init: Option<String>,
    },
    IncDec {
        name: String,
        delta: f64,
    },
    CompoundAssign {
        name: String,
        op: CompoundOp,
        expr: String,
    },
    Assign {
        name: String,
        expr: String,
    },
    /// A control-flow header that matched but could not be parsed
    Malformed {
        reason: String,
    },
    /// Anything else: executed as a no-op
    Unrecognized,
}

lazy_static! {
    static ref METHOD_SIGNATURE: Regex = Regex::new(r"^(?:public|private|protected)\s+").unwrap();
    static ref PRINT_START: Regex = Regex::new(
        r"^(?:System\.out\.print|cout\s*<<|printf\s*\(|Console\.Write)"
    )
    .unwrap();
    static ref RETURN_STMT: Regex = Regex::new(r"^return\b\s*(.*)$").unwrap();
    static ref CALL_SHAPE: Regex = Regex::new(r"^\w+\s*\(").unwrap();
    static ref CONTROL_KEYWORD: Regex = Regex::new(r"^(?:for|if|else|while)\b").unwrap();
    static ref METHOD_CALL_SHAPE: Regex = Regex::new(r"^\w+\.\w+").unwrap();
    static ref FOR_START: Regex = Regex::new(r"^for\s*\(").unwrap();
    static ref WHILE_START: Regex = Regex::new(r"^while\s*\(").unwrap();
    static ref IF_START: Regex = Regex::new(r"^if\s*\(").unwrap();
    static ref FOR_HEADER: Regex = Regex::new(r"^for\s*\(\s*(.+)\s*\)\s*\{?$").unwrap();
    static ref WHILE_HEADER: Regex = Regex::new(r"^while\s*\(\s*(.+)\s*\)\s*\{?$").unwrap();
    static ref IF_HEADER: Regex = Regex::new(r"^(?:else\s+)?if\s*\(\s*(.+)\s*\)\s*\{?$").unwrap();
    static ref ELSE_IF_START: Regex = Regex::new(r"^else\s+if\s*\(").unwrap();
    static ref ELSE_ALONE: Regex = Regex::new(r"^else\s*\{?$").unwrap();
    static ref JAVA_ARRAY_LITERAL: Regex =
        Regex::new(r"^int\[\]\s+(\w+)\s*=\s*\{([^}]*)\}").unwrap();
    static ref JAVA_ARRAY_SIZED: Regex =
        Regex::new(r"^int\[\]\s+(\w+)\s*=\s*new\s+int\[([^\]]+)\]").unwrap();
    static ref CPP_VECTOR_LITERAL: Regex =
        Regex::new(r"^vector\s*<\s*int\s*>\s+(\w+)\s*=?\s*\{([^}]*)\}").unwrap();
    static ref INDEXED_ASSIGN: Regex =
        Regex::new(r"^(\w+)\[\s*([^\]]+)\s*\]\s*=\s*(.+)$").unwrap();
    static ref VAR_DECL: Regex = Regex::new(
        r"^(int|long|double|float|char|boolean|bool|string|String)\s+(\w+)\s*(?:=\s*(.+))?$"
    )
    .unwrap();
    static ref INC_POST: Regex = Regex::new(r"^(\w+)\+\+$").unwrap();
    static ref DEC_POST: Regex = Regex::new(r"^(\w+)--$").unwrap();
    static ref INC_PRE: Regex = Regex::new(r"^\+\+(\w+)$").unwrap();
    static ref DEC_PRE: Regex = Regex::new(r"^--(\w+)$").unwrap();
    static ref COMPOUND_ASSIGN: Regex =
        Regex::new(r"^(\w+)\s*(\+=|-=|\*=|/=|%=)\s*(.+)$").unwrap();
    static ref PLAIN_ASSIGN: Regex = Regex::new(r"^(\w+)\s*=\s*(.+)$").unwrap();
}

/// Strip the trailing semicolon from a trimmed line.
pub fn clean_line(line: &str) -> String {
    let line = line.trim();
    line.strip_suffix(';').unwrap_or(line).trim().to_string()
}

/// Classify one raw (trimmed) source line.
pub fn classify(raw: &str, language: Language) -> Statement {
    if METHOD_SIGNATURE.is_match(raw) && raw.contains('(') {
        return Statement::MethodSignature;
    }

    if PRINT_START.is_match(raw) {
        return Statement::Print;
    }

    if let Some(captures) = RETURN_STMT.captures(&clean_line(raw)) {
        return Statement::Return {
            expr: captures[1].trim().to_string(),
        };
    }

    if should_skip(raw) {
        return Statement::Skip;
    }

    let cleaned = clean_line(raw);

    if FOR_START.is_match(&cleaned) {
        return match FOR_HEADER.captures(&cleaned) {
            Some(captures) => parse_for_parts(captures[1].trim()),
            None => Statement::Malformed {
                reason: format!("cannot parse for-loop: {}", cleaned),
            },
        };
    }

    if WHILE_START.is_match(&cleaned) {
        return match WHILE_HEADER.captures(&cleaned) {
            Some(captures) => Statement::WhileHeader {
                cond: captures[1].trim().to_string(),
            },
            None => Statement::Malformed {
                reason: format!("cannot parse while-loop: {}", cleaned),
            },
        };
    }

    if ELSE_IF_START.is_match(&cleaned) {
        return match IF_HEADER.captures(&cleaned) {
            Some(captures) => Statement::ElseIfHeader {
                cond: captures[1].trim().to_string(),
            },
            None => Statement::Malformed {
                reason: format!("cannot parse condition: {}", cleaned),
            },
        };
    }

    if IF_START.is_match(&cleaned) {
        return match IF_HEADER.captures(&cleaned) {
            Some(captures) => Statement::IfHeader {
                cond: captures[1].trim().to_string(),
            },
            None => Statement::Malformed {
                reason: format!("cannot parse condition: {}", cleaned),
            },
        };
    }

    if ELSE_ALONE.is_match(&cleaned) {
        return Statement::ElseHeader;
    }

    if language == Language::Java {
        if let Some(captures) = JAVA_ARRAY_SIZED.captures(&cleaned) {
            return Statement::ArraySizedDecl {
                name: captures[1].to_string(),
                size: captures[2].trim().to_string(),
            };
        }
        if let Some(captures) = JAVA_ARRAY_LITERAL.captures(&cleaned) {
            return Statement::ArrayLiteralDecl {
                name: captures[1].to_string(),
                elements: split_elements(&captures[2]),
            };
        }
    }

    if language == Language::Cpp {
        if let Some(captures) = CPP_VECTOR_LITERAL.captures(&cleaned) {
            return Statement::ArrayLiteralDecl {
                name: captures[1].to_string(),
                elements: split_elements(&captures[2]),
            };
        }
    }

    if let Some(captures) = INDEXED_ASSIGN.captures(&cleaned) {
        return Statement::IndexedAssign {
            name: captures[1].to_string(),
            index: captures[2].trim().to_string(),
            expr: captures[3].trim().to_string(),
        };
    }

    if let Some(statement) = classify_var_decl(&cleaned) {
        return statement;
    }

    if let Some(statement) = classify_inc_dec(&cleaned) {
        return statement;
    }

    if let Some(statement) = classify_compound(&cleaned) {
        return statement;
    }

    if let Some(statement) = classify_assign(&cleaned) {
        return statement;
    }

    Statement::Unrecognized
}

/// Classify a for-loop initializer clause: only variable declarations run.
pub fn classify_loop_init(cleaned: &str) -> Option<Statement> {
    classify_var_decl(cleaned)
}

/// Classify a for-loop update clause: increment/decrement, compound
/// assignment, or plain assignment.
pub fn classify_loop_update(cleaned: &str) -> Option<Statement> {
    classify_inc_dec(cleaned)
        .or_else(|| classify_compound(cleaned))
        .or_else(|| classify_assign(cleaned))
}

/// Extract the condition of an `if` or `else if` header.
pub(crate) fn extract_if_condition(cleaned: &str) -> Option<String> {
    IF_HEADER
        .captures(cleaned)
        .map(|captures| captures[1].trim().to_string())
}

pub(crate) fn is_else_if(cleaned: &str) -> bool {
    ELSE_IF_START.is_match(cleaned)
}

pub(crate) fn is_else(cleaned: &str) -> bool {
    ELSE_ALONE.is_match(cleaned)
}

fn classify_var_decl(cleaned: &str) -> Option<Statement> {
    let captures = VAR_DECL.captures(cleaned)?;
    Some(Statement::VarDecl {
        declared_type: DeclaredType::from_keyword(&captures[1]),
        name: captures[2].to_string(),
        init: captures.get(3).map(|m| m.as_str().trim().to_string()),
    })
}

fn classify_inc_dec(cleaned: &str) -> Option<Statement> {
    for (pattern, delta) in [
        (&*INC_POST, 1.0),
        (&*DEC_POST, -1.0),
        (&*INC_PRE, 1.0),
        (&*DEC_PRE, -1.0),
    ] {
        if let Some(captures) = pattern.captures(cleaned) {
            return Some(Statement::IncDec {
                name: captures[1].to_string(),
                delta,
            });
        }
    }
    None
}

fn classify_compound(cleaned: &str) -> Option<Statement> {
    let captures = COMPOUND_ASSIGN.captures(cleaned)?;
    let op = match &captures[2] {
        "+=" => CompoundOp::Add,
        "-=" => CompoundOp::Sub,
        "*=" => CompoundOp::Mul,
        "/=" => CompoundOp::Div,
        _ => CompoundOp::Mod,
    };
    Some(Statement::CompoundAssign {
        name: captures[1].to_string(),
        op,
        expr: captures[3].trim().to_string(),
    })
}

fn classify_assign(cleaned: &str) -> Option<Statement> {
    if cleaned.contains("==") {
        return None;
    }
    let captures = PLAIN_ASSIGN.captures(cleaned)?;
    Some(Statement::Assign {
        name: captures[1].to_string(),
        expr: captures[2].trim().to_string(),
    })
}

fn parse_for_parts(inner: &str) -> Statement {
    let parts: Vec<&str> = inner.split(';').map(str::trim).collect();
    if parts.len() != 3 {
        return Statement::Malformed {
            reason: format!("invalid for-loop format: {}", inner),
        };
    }
    Statement::ForHeader {
        init: parts[0].to_string(),
        cond: parts[1].to_string(),
        update: parts[2].to_string(),
    }
}

fn split_elements(body: &str) -> Vec<String> {
    body.split(',').map(|e| e.trim().to_string()).collect()
}

/// The skip filter: lines the interpreter steps over without executing.
fn should_skip(raw: &str) -> bool {
    if raw.is_empty() || raw == "{" || raw == "}" {
        return true;
    }
    if raw.starts_with("//")
        || raw.starts_with("/*")
        || raw.starts_with('*')
        || raw.starts_with("*/")
    {
        return true;
    }
    if raw.starts_with("import ") || raw.starts_with("package ") {
        return true;
    }
    if raw.starts_with("public class ") || raw.starts_with("class ") {
        return true;
    }
    if raw.contains("public static void main") {
        return true;
    }
    if raw.starts_with("#include") || raw.starts_with("using ") {
        return true;
    }
    if raw.starts_with("int main") || raw.starts_with("void ") {
        return true;
    }
    if raw.starts_with("cin") || raw.starts_with("scanf") {
        return true;
    }
    if raw.starts_with("new ") {
        return true;
    }
    // Bare calls and method calls are not simulated
    if CALL_SHAPE.is_match(raw) && !CONTROL_KEYWORD.is_match(raw) {
        return true;
    }
    if METHOD_CALL_SHAPE.is_match(raw) {
        return true;
    }
    false
}
