// Surface-language detection via weighted marker counts

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Supported surface dialects.
///
/// `Unsupported` means detection failed outright; `Unknown` is only produced
/// on the fatal result path, where the run aborted before a dialect could be
/// reported meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Cpp,
    Unsupported,
    Unknown,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Unsupported => "unsupported",
            Language::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

lazy_static! {
    static ref JAVA_MARKERS: Vec<Regex> = vec![
        Regex::new(r"public\s+class\b").unwrap(),
        Regex::new(r"static\s+void\s+main").unwrap(),
        Regex::new(r"System\.out").unwrap(),
        Regex::new(r"int\[\]").unwrap(),
        Regex::new(r"boolean\[\]").unwrap(),
        Regex::new(r"String\[\]").unwrap(),
    ];
    static ref CPP_MARKERS: Vec<Regex> = vec![
        Regex::new(r"#include").unwrap(),
        Regex::new(r"using\s+namespace\s+std").unwrap(),
        Regex::new(r"vector\s*<").unwrap(),
        Regex::new(r"\bcout\b").unwrap(),
        Regex::new(r"\bstd::").unwrap(),
    ];
    static ref GENERIC_INT: Regex = Regex::new(r"\bint\b").unwrap();
    static ref GENERIC_FOR: Regex = Regex::new(r"\bfor\s*\(").unwrap();
}

/// Classify raw source text as Java, C++, or unsupported.
///
/// Each dialect scores one point per matching marker. C++ wins ties when its
/// score is positive; a generic `int` + counted-loop snippet defaults to
/// Java.
pub fn detect_language(code: &str) -> Language {
    let java_score = JAVA_MARKERS.iter().filter(|r| r.is_match(code)).count();
    let cpp_score = CPP_MARKERS.iter().filter(|r| r.is_match(code)).count();

    if cpp_score > 0 && cpp_score >= java_score {
        return Language::Cpp;
    }
    if java_score > 0 {
        return Language::Java;
    }

    // No strong indicators: a scalar declaration plus a counted loop is
    // assumed to be Java, the more common dialect among submitted snippets.
    if GENERIC_INT.is_match(code) && GENERIC_FOR.is_match(code) {
        return Language::Java;
    }

    Language::Unsupported
}
