use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use survey_spec::{parse_questions, read_document, validate_document};

use crate::cmd::DEFAULT_KEY;
use crate::messages::trf;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Question file (YAML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Key holding the question list in map-shaped documents
    #[arg(long, value_name = "KEY", default_value = DEFAULT_KEY)]
    pub key: String,
    /// Emit the report as JSON
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub file: String,
    pub key: String,
    pub questions: Vec<CheckedQuestion>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckedQuestion {
    pub name: String,
    pub kind: &'static str,
    #[serde(rename = "type")]
    pub value_type: &'static str,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let report = check(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}",
            trf(
                "survey.check.ok",
                &[&report.file, &report.questions.len().to_string(), &report.key],
            )
        );
    }
    Ok(())
}

pub fn check(args: &CheckArgs) -> Result<CheckReport> {
    let display = args.file.display().to_string();
    let text = read_document(&args.file)?;
    validate_document(&text).with_context(|| format!("{display} is not valid YAML"))?;
    let questions = parse_questions(&text, &args.key)
        .with_context(|| format!("{display} does not hold a valid question set"))?;

    Ok(CheckReport {
        file: display,
        key: args.key.clone(),
        questions: questions
            .iter()
            .map(|question| CheckedQuestion {
                name: question.name.clone(),
                kind: question.kind.as_str(),
                value_type: question.value_type.as_str(),
            })
            .collect(),
    })
}
