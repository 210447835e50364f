// snipstep: step-by-step execution tracer for Java and C++ snippets

mod detect;
mod eval;
mod harness;
mod interpreter;
mod state;
mod step;
mod visualize;

use std::fs;
use std::path::Path;

use visualize::visualize_snippet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("snipstep");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <snippet.java|snippet.cpp>", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} two_sum.java            # Trace a Java function snippet",
            program_name
        );
        eprintln!(
            "  {} sum_vector.cpp          # Trace a C++ script",
            program_name
        );
        eprintln!();
        eprintln!("The full step trace is printed to stdout as JSON.");
        std::process::exit(1);
    }

    let snippet_file = &args[1];

    if !Path::new(snippet_file).exists() {
        eprintln!("Error: File '{}' not found", snippet_file);
        eprintln!(
            "Usage: {} <snippet.java|snippet.cpp>",
            args.first().map(|s| s.as_str()).unwrap_or("snipstep")
        );
        std::process::exit(1);
    }

    // Read and visualize the snippet
    let source = fs::read_to_string(snippet_file)?;
    let result = visualize_snippet(&source, None);

    println!("{}", serde_json::to_string_pretty(&result)?);

    if let Some(error) = &result.error {
        eprintln!("Visualization failed: {}", error);
        std::process::exit(1);
    }

    eprintln!("Total steps: {}", result.steps.len());
    Ok(())
}
