// Integration tests for the unified visualization entry point

use snipstep::detect::language::Language;
use snipstep::harness::inputs::InputValue;
use snipstep::state::value::Value;
use snipstep::visualize::{
    visualize_snippet, CANNOT_VISUALIZE_MESSAGE, NO_STEPS_MESSAGE, UNSUPPORTED_SENTINEL,
};
use std::collections::HashMap;

#[test]
fn test_array_sum_trace() {
    let source = r#"
public class Main {
    public static void main(String[] args) {
        int[] nums = {2, 7, 11, 15};
        int sum = 0;
        for (int i = 0; i < nums.length; i++) {
            sum += nums[i];
        }
        System.out.println(sum);
    }
}
"#;

    let result = visualize_snippet(source, None);

    assert_eq!(result.language, Language::Java);
    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);
    assert!(!result.steps.is_empty());

    let last = result.steps.last().unwrap();
    assert_eq!(last.variables["sum"].value, Value::Num(35.0));
    assert_eq!(last.arrays["nums"], vec![2.0, 7.0, 11.0, 15.0]);
    assert_eq!(last.output, vec!["35".to_string()]);
}

#[test]
fn test_function_dry_run_inputs() {
    let source = r#"
public int process(int x, int[] values) {
    int total = x;
    for (int i = 0; i < values.length; i++) {
        total += values[i];
    }
    return total;
}
"#;

    let result = visualize_snippet(source, None);

    assert_eq!(result.language, Language::Java);
    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);

    let dry_run = result.dry_run_inputs.expect("harness should be synthesized");
    assert_eq!(dry_run["x"], "3");
    assert_eq!(dry_run["values"], "[1, 2, 3]");

    // total = 3 + 1 + 2 + 3
    let last = result.steps.last().unwrap();
    assert_eq!(last.output.last().unwrap(), "Return: 9");
}

#[test]
fn test_two_sum_with_custom_inputs() {
    let source = r#"
class Solution {
    public int[] twoSum(int[] nums, int target) {
        for (int i = 0; i < nums.length; i++) {
            for (int j = i + 1; j < nums.length; j++) {
                if (nums[j] == target - nums[i]) {
                    return new int[] { i, j };
                }
            }
        }
        return new int[] {};
    }
}
"#;

    let mut custom = HashMap::new();
    custom.insert(
        "nums".to_string(),
        InputValue::IntList(vec![2, 7, 11, 15]),
    );
    custom.insert("target".to_string(), InputValue::Int(9));

    let result = visualize_snippet(source, Some(&custom));

    assert_eq!(result.language, Language::Java);
    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);

    let dry_run = result.dry_run_inputs.expect("harness should be synthesized");
    assert_eq!(dry_run["nums"], "[2,7,11,15]");
    assert_eq!(dry_run["target"], "9");

    // The matching pair (0, 1) is found on the first inner pass; the
    // constructed array is not representable, but the return is traced
    let last = result.steps.last().unwrap();
    assert!(
        last.output.last().unwrap().starts_with("Return:"),
        "expected a Return entry, got {:?}",
        last.output
    );
    assert_eq!(last.variables["i"].value, Value::Num(0.0));
    assert_eq!(last.variables["j"].value, Value::Num(1.0));
}

#[test]
fn test_unsupported_language() {
    let source = "def add(a, b):\n    return a + b\n";

    let result = visualize_snippet(source, None);

    assert_eq!(result.language, Language::Unsupported);
    assert!(result.steps.is_empty());
    assert_eq!(result.error.as_deref(), Some(UNSUPPORTED_SENTINEL));
}

#[test]
fn test_no_executable_steps() {
    let source = r#"
public class Main {
    public static void main(String[] args) {
    }
}
"#;

    let result = visualize_snippet(source, None);

    assert_eq!(result.language, Language::Java);
    assert!(result.steps.is_empty());
    assert_eq!(result.error.as_deref(), Some(NO_STEPS_MESSAGE));
}

#[test]
fn test_infinite_loop_is_fatal() {
    let source = r#"
public class Main {
    public static void main(String[] args) {
        int x = 0;
        while (x < 10) {
            int y = x;
        }
    }
}
"#;

    let result = visualize_snippet(source, None);

    assert!(result.steps.is_empty(), "partial trace must be discarded");
    assert_eq!(result.language, Language::Unknown);
    assert_eq!(result.error.as_deref(), Some(CANNOT_VISUALIZE_MESSAGE));
}

#[test]
fn test_step_bound_is_fatal() {
    let source = r#"
public class Main {
    public static void main(String[] args) {
        int c = 0;
        for (int i = 0; i < 25; i++) {
            for (int j = 0; j < 25; j++) {
                c += 1;
            }
        }
    }
}
"#;

    let result = visualize_snippet(source, None);

    assert!(result.steps.is_empty());
    assert_eq!(result.language, Language::Unknown);
    assert_eq!(result.error.as_deref(), Some(CANNOT_VISUALIZE_MESSAGE));
}

#[test]
fn test_unknown_array_write_is_skipped() {
    let source = r#"
public class Main {
    public static void main(String[] args) {
        int x = 1;
        ghost[0] = 5;
        int y = 2;
    }
}
"#;

    let result = visualize_snippet(source, None);

    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);
    let last = result.steps.last().unwrap();

    // The bad write is skipped, not fatal: execution reached y
    assert_eq!(last.variables["y"].value, Value::Num(2.0));
    for step in &result.steps {
        assert!(!step.arrays.contains_key("ghost"));
    }
}

#[test]
fn test_integer_truncation() {
    let source = r#"
public class Main {
    public static void main(String[] args) {
        int a = 7 / 2;
        a = a * 3 / 2;
        int b = 9;
        b /= 2;
    }
}
"#;

    let result = visualize_snippet(source, None);
    assert!(result.error.is_none(), "unexpected error: {:?}", result.error);

    for step in &result.steps {
        for (name, slot) in &step.variables {
            if let Value::Num(n) = slot.value {
                assert_eq!(n.fract(), 0.0, "non-integral value for {}", name);
            }
        }
    }

    let last = result.steps.last().unwrap();
    assert_eq!(last.variables["a"].value, Value::Num(4.0));
    assert_eq!(last.variables["b"].value, Value::Num(4.0));
}

#[test]
fn test_deterministic_steps() {
    let source = r#"
public class Main {
    public static void main(String[] args) {
        int[] nums = {2, 7, 11, 15};
        int sum = 0;
        for (int i = 0; i < nums.length; i++) {
            sum += nums[i];
        }
        System.out.println(sum);
    }
}
"#;

    let first = visualize_snippet(source, None);
    let second = visualize_snippet(source, None);

    assert_eq!(first.steps, second.steps);
    assert_eq!(first.language, second.language);
    assert_eq!(first.dry_run_inputs, second.dry_run_inputs);
    assert_eq!(first.error, second.error);
}
