// Integration tests for direct per-dialect interpretation

use snipstep::state::value::Value;
use snipstep::visualize::{visualize_cpp, visualize_java};

#[test]
fn test_cpp_vector_sum_and_cout() {
    let source = r#"
#include <iostream>
using namespace std;
int main() {
    vector<int> v = {1, 2, 3};
    int total = 0;
    for (int i = 0; i < v.size(); i++) {
        total += v[i];
    }
    cout << "Total: " << total << endl;
    return 0;
}
"#;

    let steps = visualize_cpp(source).expect("execution failed");
    assert!(!steps.is_empty());

    let last = steps.last().unwrap();
    assert_eq!(last.variables["total"].value, Value::Num(6.0));
    assert_eq!(last.arrays["v"], vec![1.0, 2.0, 3.0]);
    assert_eq!(
        last.output,
        vec!["Total: 6".to_string(), "Return: 0".to_string()]
    );
}

#[test]
fn test_branch_chain_takes_first_true_arm() {
    let source = r#"int score = 85;
if (score > 90)
{
    int grade = 1;
}
else if (score > 80)
{
    int grade = 2;
}
else
{
    int grade = 3;
}
int done = 1;
"#;

    let steps = visualize_java(source).expect("execution failed");

    // decl, false if, true else-if, body decl, trailing decl
    assert_eq!(steps.len(), 5);

    let last = steps.last().unwrap();
    assert_eq!(last.variables["grade"].value, Value::Num(2.0));
    assert_eq!(last.variables["done"].value, Value::Num(1.0));
}

#[test]
fn test_while_loop_counts_down() {
    let source = r#"int n = 3;
while (n > 0)
{
    n -= 1;
}
int end = 1;
"#;

    let steps = visualize_java(source).expect("execution failed");

    let last = steps.last().unwrap();
    assert_eq!(last.variables["n"].value, Value::Num(0.0));
    assert_eq!(last.variables["end"].value, Value::Num(1.0));

    // decl + entry step + 3 passes of (body, header) + trailing decl
    assert_eq!(steps.len(), 9);
}

#[test]
fn test_print_concatenation() {
    let source = r#"int n = 3;
System.out.println("n = " + n);
"#;

    let steps = visualize_java(source).expect("execution failed");
    let last = steps.last().unwrap();
    assert_eq!(last.output, vec!["n = 3".to_string()]);
}

#[test]
fn test_increment_decrement_forms() {
    let source = r#"int x = 5;
x++;
x--;
++x;
"#;

    let steps = visualize_java(source).expect("execution failed");
    assert_eq!(steps.len(), 4);
    assert_eq!(
        steps.last().unwrap().variables["x"].value,
        Value::Num(6.0)
    );
}

#[test]
fn test_compound_assignment_operators() {
    let source = r#"int m = 7;
m *= 2;
m %= 5;
m -= 1;
"#;

    let steps = visualize_java(source).expect("execution failed");
    assert_eq!(
        steps.last().unwrap().variables["m"].value,
        Value::Num(3.0)
    );
}

#[test]
fn test_sized_array_and_growth() {
    let source = r#"int[] arr = new int[3];
arr[0] = 5;
arr[5] = 1;
"#;

    let steps = visualize_java(source).expect("execution failed");
    assert_eq!(steps.len(), 3);

    assert_eq!(steps[0].arrays["arr"], vec![0.0, 0.0, 0.0]);
    assert_eq!(
        steps.last().unwrap().arrays["arr"],
        vec![5.0, 0.0, 0.0, 0.0, 0.0, 1.0]
    );
}

#[test]
fn test_return_stops_execution() {
    let source = r#"int a = 1;
return a;
int b = 2;
"#;

    let steps = visualize_java(source).expect("execution failed");
    assert_eq!(steps.len(), 2);

    let last = steps.last().unwrap();
    assert_eq!(last.output, vec!["Return: 1".to_string()]);
    assert!(!last.variables.contains_key("b"));
}

#[test]
fn test_reassignment_to_same_value_records_no_step() {
    let source = r#"int a = 1;
a = 1;
a = 2;
"#;

    let steps = visualize_java(source).expect("execution failed");

    // decl, then only the assignment that changed the value
    assert_eq!(steps.len(), 2);
    assert_eq!(
        steps.last().unwrap().variables["a"].value,
        Value::Num(2.0)
    );
}

#[test]
fn test_string_variable_keeps_text() {
    let source = r#"String s = "abc";
int len = 0;
len = s.length();
"#;

    let steps = visualize_java(source).expect("execution failed");
    let last = steps.last().unwrap();
    assert_eq!(last.variables["s"].value, Value::Str("abc".to_string()));
    assert_eq!(last.variables["len"].value, Value::Num(3.0));
}
