use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use survey_spec::{ListEditor, ListKey, ListOutcome, read_document};
use tracing::debug;

use crate::cmd::emit;
use crate::messages::{tr, trf};

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// File whose lines seed the list
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Write the final entries to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let entries = match &args.file {
        Some(path) => read_document(path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let mut editor = ListEditor::new(entries);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = edit_lines(&mut editor, stdin.lock(), &mut stdout)?;
    emit(&result, args.out.as_deref(), "survey.list.written")
}

/// Translates a browsing command line into an editor key.
pub fn parse_command(line: &str) -> Option<ListKey> {
    match line {
        "" => Some(ListKey::Enter),
        "k" | "up" => Some(ListKey::Up),
        "j" | "down" => Some(ListKey::Down),
        "n" | "new" => Some(ListKey::Char('n')),
        "d" | "del" => Some(ListKey::Backspace),
        "q" => Some(ListKey::Char('q')),
        "esc" => Some(ListKey::Escape),
        _ => None,
    }
}

/// Runs the editor over line commands read from `input` until it finishes or input ends.
///
/// While an entry is being edited, a non-empty line replaces the staged text and
/// commits it; an empty line commits the staged text unchanged.
pub fn edit_lines<R: BufRead, W: Write>(
    editor: &mut ListEditor,
    mut input: R,
    mut output: W,
) -> Result<String> {
    loop {
        if editor.is_editing() {
            write!(output, "{}", trf("survey.list.editing", &[editor.buffer()]))?;
        } else {
            render(editor, &mut output)?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed, finishing list");
            return Ok(finish(editor.handle(ListKey::Escape)));
        }
        let line = line.trim_end_matches(['\r', '\n']);

        let key = if editor.is_editing() {
            if !line.is_empty() {
                editor.set_buffer(line);
            }
            ListKey::Enter
        } else {
            match parse_command(line.trim()) {
                Some(key) => key,
                None => {
                    writeln!(output, "{}", tr("survey.list.help"))?;
                    continue;
                }
            }
        };

        if let ListOutcome::Finished(text) = editor.handle(key) {
            return Ok(text);
        }
    }
}

fn render<W: Write>(editor: &ListEditor, output: &mut W) -> Result<()> {
    writeln!(output, "{}", tr("survey.list.header"))?;
    if editor.entries().is_empty() {
        writeln!(output, "  {}", tr("survey.list.empty"))?;
    }
    for (idx, entry) in editor.entries().iter().enumerate() {
        let marker = if editor.cursor() == Some(idx) { '>' } else { ' ' };
        writeln!(output, "{marker} {entry}")?;
    }
    write!(output, "{} ", tr("survey.list.help"))?;
    Ok(())
}

fn finish(outcome: ListOutcome) -> String {
    match outcome {
        ListOutcome::Finished(text) => text,
        ListOutcome::Continue => String::new(),
    }
}
