use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{load_config, load_or_default, HttpParamsBackend, LoadOutcome};
use editor_core::{Edit, EditedValues, ParamsEditor};
use shared::protocol::Model;
use tracing_subscriber::EnvFilter;

/// Loads the parameter model, applies edits and prints the resulting model.
#[derive(Parser, Debug)]
struct Args {
    /// Backend base URL; overrides params_editor.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Edit as KEY=VALUE, where KEY is ID or ID-INDEX. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    edits: Vec<Edit>,
    /// Print the editor rows (label and inputs) before the model.
    #[arg(long)]
    rows: bool,
    #[arg(long)]
    pretty: bool,
}

fn apply_edits(values: EditedValues, edits: &[Edit]) -> Result<EditedValues> {
    edits.iter().try_fold(values, |values, edit| {
        values
            .merged(edit)
            .with_context(|| format!("cannot apply {}={}", edit.key, edit.value))
    })
}

fn render_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

fn print_model(out: &mut impl Write, model: &Model, pretty: bool) -> Result<()> {
    let json = render_json(model, pretty)?;
    tracing::info!(values = model.param_values.len(), "model snapshot: {json}");
    writeln!(out, "{json}")?;
    Ok(())
}

/// Builds the editor from `outcome`, applies the requested edits and writes
/// rows and the snapshot to `out`. A failed load prints the empty model and
/// reports the load error; edits are not attempted.
fn run(outcome: LoadOutcome, args: &Args, out: &mut impl Write) -> Result<()> {
    if let Some(err) = outcome.error {
        print_model(out, &Model::default(), args.pretty)?;
        return Err(err).context("backend load failed; printed model is empty");
    }

    let editor = ParamsEditor::new(&outcome.params, outcome.model);
    let values = apply_edits(editor.initial_values(), &args.edits)?;

    if args.rows {
        for row in editor.rows(&values) {
            writeln!(out, "{}", render_json(&row, false)?)?;
        }
    }
    print_model(out, &values.snapshot(), args.pretty)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = load_config().with_api_url(args.api_url.clone());
    let backend = HttpParamsBackend::from_config(&config).context("invalid backend url")?;
    tracing::info!(api_url = %backend.base_url(), "loading parameters");

    let outcome = load_or_default(&backend).await;
    run(outcome, &args, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::LoadError;
    use editor_core::EditKey;
    use shared::{
        domain::{ParamId, ParamValue},
        protocol::ParameterValue,
    };

    #[test]
    fn parses_repeated_edits() {
        let args = Args::try_parse_from([
            "params-editor",
            "--set",
            "1=20",
            "--set",
            "3-0=red",
            "--api-url",
            "http://backend:3001",
        ])
        .expect("args");
        assert_eq!(args.edits.len(), 2);
        assert_eq!(args.edits[0].key, EditKey::Param(ParamId(1)));
        assert_eq!(
            args.edits[1].key,
            EditKey::Element {
                param_id: ParamId(3),
                index: 0
            }
        );
        assert_eq!(args.api_url.as_deref(), Some("http://backend:3001"));
    }

    #[test]
    fn rejects_malformed_edit_keys() {
        assert!(Args::try_parse_from(["params-editor", "--set", "width=20"]).is_err());
        assert!(Args::try_parse_from(["params-editor", "--set", "1"]).is_err());
    }

    #[test]
    fn applies_edits_in_order() {
        let model = Model {
            param_values: vec![ParameterValue::new(ParamId(1), "10")],
        };
        let values = EditedValues::from_model(&model);
        let edits: Vec<Edit> = vec!["1=20".parse().expect("edit"), "1=30".parse().expect("edit")];

        let values = apply_edits(values, &edits).expect("apply");
        assert_eq!(values.get(ParamId(1)), Some(&ParamValue::from("30")));

        let bad: Vec<Edit> = vec!["2=1".parse().expect("edit")];
        let err = apply_edits(values, &bad).expect_err("unknown id");
        assert!(err.to_string().contains("2=1"));
    }

    #[test]
    fn failed_load_prints_empty_model_and_reports_load_error_despite_edits() {
        let args = Args::try_parse_from(["params-editor", "--set", "1=20"]).expect("args");
        let outcome = LoadOutcome {
            error: Some(LoadError::InvalidUrl {
                url: "http://127.0.0.1:1".to_string(),
                reason: "connection refused".to_string(),
            }),
            ..LoadOutcome::default()
        };

        let mut out = Vec::new();
        let err = run(outcome, &args, &mut out).expect_err("load failure");

        assert_eq!(String::from_utf8(out).expect("utf8"), "{\"paramValues\":[]}\n");
        assert!(err.to_string().contains("backend load failed"));
        assert!(err.chain().any(|cause| cause.to_string().contains("connection refused")));
        assert!(!err.chain().any(|cause| cause.to_string().contains("1=20")));
    }

    #[test]
    fn successful_load_prints_rows_and_edited_model() {
        let args =
            Args::try_parse_from(["params-editor", "--rows", "--set", "1=20"]).expect("args");
        let outcome = LoadOutcome {
            model: Model {
                param_values: vec![ParameterValue::new(ParamId(1), "10")],
            },
            ..LoadOutcome::default()
        };

        let mut out = Vec::new();
        run(outcome, &args, &mut out).expect("run");

        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"param_id\":1"));
        assert_eq!(lines[1], r#"{"paramValues":[{"paramId":1,"value":"20"}]}"#);
    }
}
