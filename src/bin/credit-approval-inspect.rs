//! Developer utility to inspect a model artifact and score a single applicant.

use std::path::PathBuf;

use credit_approval::form::{FeatureValue, control_spec};
use credit_approval::model::{self, DEFAULT_ARTIFACT_PATH};
use credit_approval::predictor::Predictor;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone)]
struct CliOptions {
    model_path: PathBuf,
    record_path: Option<PathBuf>,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let model = model::load(&options.model_path).map_err(|err| err.to_string())?;
    let predictor = Predictor::new(model.clone());

    println!("model: {}", options.model_path.display());
    println!("features: {}", model.feature_names().len());
    for (index, feature) in model.feature_names().iter().enumerate() {
        let spec = control_spec(feature, model.feature_type(index));
        println!(
            "  {:>3} {:<32} {:<10} {}",
            index,
            feature,
            format!("{:?}", spec.kind),
            credit_approval::form::display_label(feature)
        );
    }

    let Some(record_path) = options.record_path else {
        return Ok(());
    };
    let text = std::fs::read_to_string(&record_path)
        .map_err(|err| format!("Failed to read {}: {err}", record_path.display()))?;
    let values: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)
        .map_err(|err| format!("Invalid record {}: {err}", record_path.display()))?;

    let mut form = predictor.build_form();
    for (feature, raw) in values {
        let value: FeatureValue = serde_json::from_value(raw.clone())
            .map_err(|_| format!("Feature `{feature}` has non-numeric value {raw}"))?;
        let Some(control) = form.control(&feature) else {
            return Err(format!("Unknown feature `{feature}` in record"));
        };
        let value = control.spec.domain.coerce(value);
        if !form.set_value(&feature, value) {
            return Err(format!("Value {value} is out of range for `{feature}`"));
        }
    }

    let report = predictor.submit(&form).map_err(|err| err.to_string())?;
    println!();
    println!("Detailed probability breakdown:");
    for (label, percent) in report.breakdown() {
        println!("  {label:<24} {percent:>8}");
    }
    if let Some(top) = report.most_likely() {
        println!("most likely: {}", top.category.label());
    }
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut model_path = PathBuf::from(DEFAULT_ARTIFACT_PATH);
    let mut record_path: Option<PathBuf> = None;

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                model_path = PathBuf::from(value);
            }
            "--record" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--record requires a value".to_string())?;
                record_path = Some(PathBuf::from(value));
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }

    Ok(CliOptions {
        model_path,
        record_path,
    })
}

fn help_text() -> String {
    [
        "credit-approval-inspect",
        "",
        "Print the feature schema of a model artifact and optionally score one applicant.",
        "",
        "Usage:",
        "  credit-approval-inspect [--model <artifact.json>] [--record <applicant.json>]",
        "",
        "Options:",
        "  --model <path>    Model artifact (default: credit_classifier.json)",
        "  --record <path>   JSON object of feature -> number; unset features keep form defaults",
    ]
    .join("\n")
}
