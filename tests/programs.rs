use std::{fs, path::Path};

use letc::compile;
use walkdir::WalkDir;

/// Compiles every `tests/programs/*.let` file and compares the output with
/// the sibling `.ll` (IR) and `.out` (evaluation trace) files.
#[test]
fn program_fixtures_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "let"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let compilation = compile(&source).unwrap_or_else(|e| {
                                              panic!("Program {path:?} failed:\n{source}\nError: {e}")
                                          });
        count += 1;

        let expected_ir = read_expected(path, "ll");
        assert_eq!(compilation.module.to_string(), expected_ir, "IR mismatch for {path:?}");

        let trace: String = compilation.bindings
                                       .iter()
                                       .map(|binding| format!("{binding}\n"))
                                       .collect();
        assert_eq!(trace, read_expected(path, "out"), "trace mismatch for {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_expected(path: &Path, extension: &str) -> String {
    let expected = path.with_extension(extension);
    fs::read_to_string(&expected).unwrap_or_else(|e| panic!("Failed to read {expected:?}: {e}"))
}
