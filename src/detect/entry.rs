//! Entry-point detection and parameter parsing
//!
//! Scans the snippet for the first callable signature outside `main` and
//! extracts its name and parameter list. Array and collection return types
//! (`int[]`, `vector<int>`) are accepted so function-style snippets such as
//! the two-sum pattern are detected. Java names with a leading capital are
//! treated as constructors and skipped.

use crate::detect::language::Language;
use lazy_static::lazy_static;
use regex::Regex;

/// One typed parameter of the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Raw surface type, whitespace-normalized (e.g. `int[]`, `vector<int>`)
    pub param_type: String,
}

/// The callable chosen as the subject of a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

lazy_static! {
    static ref MAIN_CALL: Regex = Regex::new(r"\bmain\s*\(").unwrap();
    static ref JAVA_SIGNATURE: Regex = Regex::new(
        r"^(?:public\s+|private\s+|protected\s+|static\s+)*(?:int|long|boolean|void|String)(?:\s*\[\s*\])?\s+(\w+)\s*\(([^)]*)\)\s*\{?\s*$"
    )
    .unwrap();
    static ref CPP_SIGNATURE: Regex = Regex::new(
        r"^(?:int|long|bool|void|string|vector\s*<\s*int\s*>)\s+(\w+)\s*\(([^)]*)\)\s*\{?\s*$"
    )
    .unwrap();
    static ref JAVA_PARAM: Regex = Regex::new(
        r"^(int\[\]|long\[\]|boolean\[\]|String\[\]|String|int|long|boolean)\s+(\w+)$"
    )
    .unwrap();
    static ref CPP_PARAM: Regex =
        Regex::new(r"^(vector\s*<\s*int\s*>|string|int|long|bool)\s+(\w+)$").unwrap();
}

/// Find the first callable signature outside `main`, or `None` for a bare
/// script.
pub fn detect_entry_function(code: &str, language: Language) -> Option<FunctionSignature> {
    for line in code.lines() {
        let trimmed = line.trim();

        if MAIN_CALL.is_match(trimmed) {
            continue;
        }

        let pattern: &Regex = match language {
            Language::Java => &JAVA_SIGNATURE,
            _ => &CPP_SIGNATURE,
        };

        if let Some(captures) = pattern.captures(trimmed) {
            let name = captures[1].to_string();

            // Capitalized Java names are constructor-like; keep scanning
            if language == Language::Java && name.starts_with(|c: char| c.is_ascii_uppercase()) {
                continue;
            }

            let parameters = parse_parameters(captures[2].trim());
            return Some(FunctionSignature { name, parameters });
        }
    }

    None
}

/// Parse a comma-separated raw parameter list into typed pairs.
///
/// Reference/pointer decoration is stripped first; each parameter is matched
/// against the Java patterns, then the C++ patterns, then a last-token-is-
/// the-name fallback. Always returns a best-effort list.
pub fn parse_parameters(param_str: &str) -> Vec<Parameter> {
    if param_str.is_empty() {
        return Vec::new();
    }

    param_str
        .split(',')
        .map(|p| {
            let p = p.trim().replace('&', "");
            let p = p.trim();

            if let Some(captures) = JAVA_PARAM.captures(p) {
                return Parameter {
                    param_type: captures[1].to_string(),
                    name: captures[2].to_string(),
                };
            }

            if let Some(captures) = CPP_PARAM.captures(p) {
                let mut param_type = captures[1].to_string();
                param_type.retain(|c| !c.is_whitespace());
                return Parameter {
                    param_type,
                    name: captures[2].to_string(),
                };
            }

            let parts: Vec<&str> = p.split_whitespace().collect();
            if parts.len() >= 2 {
                Parameter {
                    param_type: parts[..parts.len() - 1].join(" "),
                    name: parts[parts.len() - 1].to_string(),
                }
            } else {
                Parameter {
                    param_type: "int".to_string(),
                    name: p.to_string(),
                }
            }
        })
        .collect()
}
