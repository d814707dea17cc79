use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use survey_spec::{AnswerMap, load_questions, run_headless, run_interactive};
use tracing::info;

use crate::cmd::{DEFAULT_KEY, emit};
use crate::config::RunOptions;
use crate::frontend::TerminalFrontend;
use crate::functions::builtin_registry;
use crate::messages::{tr, trf};

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Question file (YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Key holding the question list in map-shaped documents
    #[arg(long, value_name = "KEY", default_value = DEFAULT_KEY)]
    pub key: String,
    /// Resolve every question without prompting
    #[arg(long)]
    pub random: bool,
    /// Output format for the answer map
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
    /// Write answers to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

pub fn run(args: RunArgs, options: &RunOptions) -> Result<()> {
    let questions = load_questions(&args.file, &args.key)
        .with_context(|| format!("failed to load questions from {}", args.file.display()))?;
    if questions.is_empty() {
        info!("{}", trf("survey.run.no_questions", &[&args.key]));
    }

    let registry = builtin_registry();
    let mut rng = options.rng();
    let headless = args.random || !io::stdin().is_terminal();
    info!(questions = questions.len(), headless, "running survey");

    let outcome = if headless {
        run_headless(&questions, &registry, &mut rng)
    } else {
        let mut frontend = TerminalFrontend::stdio();
        run_interactive(&questions, &registry, &mut frontend, &mut rng)
    };
    let answers = match outcome {
        Ok(answers) => answers,
        Err(err) if err.is_cancelled() => bail!("{}", tr("survey.run.cancelled")),
        Err(err) => return Err(err.into()),
    };

    let rendered = render_answers(&answers, args.format)?;
    emit(&rendered, args.out.as_deref(), "survey.run.written")
}

/// Serializes the answer map, newline-terminated.
pub fn render_answers(answers: &AnswerMap, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(answers)?,
        OutputFormat::Yaml => serde_yaml::to_string(answers)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use survey_spec::TypedValue;

    use super::*;

    fn answers() -> AnswerMap {
        AnswerMap::from([
            ("age".to_string(), TypedValue::Int(30)),
            ("name".to_string(), TypedValue::String("Ada".into())),
            ("ok".to_string(), TypedValue::Bool(true)),
        ])
    }

    #[test]
    fn renders_json_with_native_types() {
        let rendered = render_answers(&answers(), OutputFormat::Json).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(
            parsed,
            serde_json::json!({ "age": 30, "name": "Ada", "ok": true })
        );
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn renders_yaml() {
        let rendered = render_answers(&answers(), OutputFormat::Yaml).expect("yaml");
        assert_eq!(rendered, "age: 30\nname: Ada\nok: true\n");
    }
}
