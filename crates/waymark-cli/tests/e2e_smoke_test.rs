use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::tempdir;

use waymark_cli::{Args, run};

/// Collects all .md and .json files from a directory
fn collect_roadmaps(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && matches!(
                        path.extension().and_then(|s| s.to_str()),
                        Some("md" | "json")
                    )
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos are at workspace root, relative to workspace not the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        format: None,
        compact: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_roadmaps(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(demo_path, &output_path)) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let layout: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap())
            .expect("Output should be valid JSON");
        assert!(layout["canvasWidth"].as_f64().unwrap() > 0.0);
        assert!(layout["root"].is_object());
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_roadmaps(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "No output is written on failure");
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_dangling_step_is_reported() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("data_scientist.json");

    let result = run(&args_for(
        &demos_dir().join("data_scientist.json"),
        &output_path,
    ))
    .expect("Demo should lay out");
    assert_eq!(result.dropped_steps(), ["n5"]);

    let layout: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(layout["droppedSteps"], serde_json::json!(["n5"]));
    assert_eq!(layout["groups"][0]["title"], "Math");
    assert_eq!(layout["nodes"].as_array().unwrap().len(), 4);
}

#[test]
fn e2e_step_before_phase_is_left_out() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("frontend_developer.json");

    run(&args_for(
        &demos_dir().join("frontend_developer.md"),
        &output_path,
    ))
    .expect("A step before the first phase only warns");

    let layout: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(layout["droppedSteps"], serde_json::json!(["n1"]));
    assert_eq!(layout["nodes"][0]["title"], "Flexbox");
}

#[test]
fn e2e_explicit_format_and_compact_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("roadmap.txt");
    let output_path = temp_dir.path().join("out.json");
    fs::write(&input_path, r#"{ "title": "Plain", "groups": [{ "id": "g1", "title": "Only" }] }"#)
        .unwrap();

    let args = Args {
        format: Some(waymark::InputFormat::Json),
        compact: true,
        ..args_for(&input_path, &output_path)
    };
    run(&args).expect("Explicit JSON format should parse");

    let output = fs::read_to_string(&output_path).unwrap();
    assert!(!output.contains('\n'));
    assert!(output.contains("\"title\":\"Plain\""));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("out.json");
    fs::write(&config_path, "[layout]\nphase_gap = 150\n").unwrap();

    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        ..args_for(&demos_dir().join("phases_only.json"), &output_path)
    };
    run(&args).expect("Demo should lay out");

    let layout: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let spine = &layout["connectors"][1];
    let gap = spine["to"]["x"].as_f64().unwrap() - spine["from"]["x"].as_f64().unwrap();
    assert_eq!(gap, 150.0);
}
