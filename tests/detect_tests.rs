// Tests for language detection, entry-point detection, and harness synthesis

use snipstep::detect::entry::{detect_entry_function, parse_parameters};
use snipstep::detect::language::{detect_language, Language};
use snipstep::harness::builder::build_harness;
use snipstep::harness::inputs::{generate_test_inputs, InputValue};
use std::collections::HashMap;

#[test]
fn test_detect_java_markers() {
    let code = "public class Main {\n    int[] xs = {1};\n}";
    assert_eq!(detect_language(code), Language::Java);
}

#[test]
fn test_detect_cpp_markers() {
    let code = "#include <vector>\nusing namespace std;\nint main() { return 0; }";
    assert_eq!(detect_language(code), Language::Cpp);
}

#[test]
fn test_tie_prefers_cpp() {
    let code = "System.out.println(x);\ncout << x;";
    assert_eq!(detect_language(code), Language::Cpp);
}

#[test]
fn test_generic_fallback_is_java() {
    let code = "int x = 0;\nfor (int i = 0; i < 3; i++) {\n    x = x + i;\n}";
    assert_eq!(detect_language(code), Language::Java);
}

#[test]
fn test_undetectable_is_unsupported() {
    assert_eq!(detect_language("hello world"), Language::Unsupported);
    assert_eq!(
        detect_language("def add(a, b):\n    return a + b"),
        Language::Unsupported
    );
}

#[test]
fn test_entry_detection_skips_main() {
    let code = r#"
public class Main {
    public static void main(String[] args) {
        int x = 0;
    }
}
"#;
    assert!(detect_entry_function(code, Language::Java).is_none());
}

#[test]
fn test_entry_detection_finds_function() {
    let code = r#"
public int process(int x, int[] values) {
    return x;
}
"#;
    let signature = detect_entry_function(code, Language::Java).expect("entry not found");
    assert_eq!(signature.name, "process");
    assert_eq!(signature.parameters.len(), 2);
    assert_eq!(signature.parameters[0].name, "x");
    assert_eq!(signature.parameters[0].param_type, "int");
    assert_eq!(signature.parameters[1].name, "values");
    assert_eq!(signature.parameters[1].param_type, "int[]");
}

#[test]
fn test_entry_detection_accepts_array_return_type() {
    let code = "    public int[] twoSum(int[] nums, int target) {";
    let signature = detect_entry_function(code, Language::Java).expect("entry not found");
    assert_eq!(signature.name, "twoSum");
    assert_eq!(signature.parameters[0].param_type, "int[]");
}

#[test]
fn test_entry_detection_skips_constructor_like_names() {
    let code = "public int Build(int x) {\n}";
    assert!(detect_entry_function(code, Language::Java).is_none());
}

#[test]
fn test_cpp_entry_and_reference_params() {
    let code = "int sumAll(vector<int> &nums, int target) {\n}";
    let signature = detect_entry_function(code, Language::Cpp).expect("entry not found");
    assert_eq!(signature.name, "sumAll");
    assert_eq!(signature.parameters[0].param_type, "vector<int>");
    assert_eq!(signature.parameters[0].name, "nums");
}

#[test]
fn test_parameter_fallback_takes_last_token_as_name() {
    let params = parse_parameters("MyType foo");
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].param_type, "MyType");
    assert_eq!(params[0].name, "foo");
}

#[test]
fn test_default_inputs_per_type() {
    let params = parse_parameters("int x, boolean flag, int[] xs, String s, boolean[] bs");
    let inputs = generate_test_inputs(&params, None);

    assert_eq!(inputs["x"].display, "3");
    assert_eq!(inputs["x"].value, InputValue::Int(3));
    assert_eq!(inputs["flag"].display, "true");
    assert_eq!(inputs["flag"].value, InputValue::Int(1));
    assert_eq!(inputs["xs"].display, "[1, 2, 3]");
    assert_eq!(inputs["xs"].value, InputValue::IntList(vec![1, 2, 3]));
    assert_eq!(inputs["s"].display, "\"abc\"");
    assert_eq!(inputs["s"].value, InputValue::Str("abc".to_string()));
    assert_eq!(inputs["bs"].display, "[1, 0, 1]");
    assert_eq!(inputs["bs"].value, InputValue::IntList(vec![1, 0, 1]));
}

#[test]
fn test_custom_input_overrides_default() {
    let params = parse_parameters("int x, int[] xs");
    let mut custom = HashMap::new();
    custom.insert("x".to_string(), InputValue::Int(42));
    custom.insert("xs".to_string(), InputValue::IntList(vec![9, 8]));

    let inputs = generate_test_inputs(&params, Some(&custom));

    assert_eq!(inputs["x"].display, "42");
    assert_eq!(inputs["xs"].display, "[9,8]");
    assert_eq!(inputs["xs"].value, InputValue::IntList(vec![9, 8]));
}

#[test]
fn test_harness_prepends_declarations() {
    let code = r#"public int process(int x, int[] values) {
    int total = x;
    return total;
}
"#;
    let signature = detect_entry_function(code, Language::Java).unwrap();
    let inputs = generate_test_inputs(&signature.parameters, None);
    let lines = build_harness(code, &signature, &inputs, Language::Java).expect("no harness");

    assert_eq!(lines[0], "int x = 3;");
    assert_eq!(lines[1], "int[] values = {1, 2, 3};");
    assert!(lines.iter().any(|l| l.trim() == "return total;"));
    // The closing brace of the function is not part of the body
    assert!(lines.last().unwrap().trim() != "}");
}

#[test]
fn test_harness_renders_vector_for_cpp() {
    let code = r#"int sumAll(vector<int> xs) {
    int total = 0;
    return total;
}
"#;
    let signature = detect_entry_function(code, Language::Cpp).unwrap();
    let inputs = generate_test_inputs(&signature.parameters, None);
    let lines = build_harness(code, &signature, &inputs, Language::Cpp).expect("no harness");

    assert_eq!(lines[0], "vector<int> xs = {1, 2, 3};");
}

#[test]
fn test_harness_requires_a_body() {
    let code = "int orphan(int x)";
    let signature = detect_entry_function(code, Language::Cpp).unwrap();
    let inputs = generate_test_inputs(&signature.parameters, None);
    assert!(build_harness(code, &signature, &inputs, Language::Cpp).is_none());
}
