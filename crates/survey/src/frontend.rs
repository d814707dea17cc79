use std::io::{self, BufRead, Write};

use survey_spec::{FieldDescriptor, FieldKind, Frontend, InteractionFailure, Reply, ValidationError};

use crate::messages::{tr, trf};

/// Input that cancels the form from any prompt.
pub const CANCEL_INPUT: &str = ":q";

/// Line-oriented front end: writes prompts to `output`, reads one answer per line from `input`.
#[derive(Debug)]
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
}

impl TerminalFrontend<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one line without its terminator; `None` when the user cancels.
    fn read_answer(&mut self) -> Result<Option<String>, InteractionFailure> {
        self.output.flush().map_err(failed)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(failed)?;
        if read == 0 {
            return Err(InteractionFailure::Failed(tr("survey.prompt.stdin_closed")));
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim() == CANCEL_INPUT {
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }

    /// Like [`read_answer`](Self::read_answer), with surrounding whitespace removed.
    fn read_choice(&mut self) -> Result<Option<String>, InteractionFailure> {
        Ok(self.read_answer()?.map(|answer| answer.trim().to_string()))
    }

    fn print_options(&mut self, title: &str, options: &[String]) -> io::Result<()> {
        writeln!(self.output, "{title}:")?;
        for (idx, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, option)?;
        }
        Ok(())
    }

    fn prompt_text(&mut self, field: &FieldDescriptor) -> Result<Reply, InteractionFailure> {
        if field.default.is_empty() {
            write!(self.output, "{}: ", field.title).map_err(failed)?;
        } else {
            write!(self.output, "{} [{}]: ", field.title, field.default).map_err(failed)?;
        }
        Ok(match self.read_answer()? {
            None => Reply::Cancel,
            Some(answer) if answer.is_empty() => Reply::Text(field.default.clone()),
            Some(answer) => Reply::Text(answer),
        })
    }

    fn prompt_select(
        &mut self,
        field: &FieldDescriptor,
        options: &[String],
    ) -> Result<Reply, InteractionFailure> {
        self.print_options(&field.title, options).map_err(failed)?;
        let hint = tr("survey.prompt.select_number_or_value");
        if field.default.is_empty() {
            write!(self.output, "{hint} ").map_err(failed)?;
        } else {
            write!(self.output, "{hint} [{}] ", field.default).map_err(failed)?;
        }
        Ok(match self.read_choice()? {
            None => Reply::Cancel,
            Some(answer) if answer.is_empty() => Reply::Text(field.default.clone()),
            Some(answer) => Reply::Text(pick_option(options, &answer)),
        })
    }

    fn prompt_multi_select(
        &mut self,
        field: &FieldDescriptor,
        options: &[String],
    ) -> Result<Reply, InteractionFailure> {
        self.print_options(&field.title, options).map_err(failed)?;
        let hint = tr("survey.prompt.select_many");
        if field.default.is_empty() {
            write!(self.output, "{hint} ").map_err(failed)?;
        } else {
            write!(self.output, "{hint} [{}] ", field.default).map_err(failed)?;
        }
        Ok(match self.read_choice()? {
            None => Reply::Cancel,
            Some(answer) if answer.is_empty() => Reply::Selection(field.default_selection()),
            Some(answer) => Reply::Selection(
                answer
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| pick_option(options, item))
                    .collect(),
            ),
        })
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn prompt(
        &mut self,
        field: &FieldDescriptor,
        rejected: Option<&ValidationError>,
    ) -> Result<Reply, InteractionFailure> {
        if let Some(error) = rejected {
            writeln!(self.output, "{}", trf("survey.prompt.rejected", &[&error.to_string()]))
                .map_err(failed)?;
        }
        match &field.kind {
            FieldKind::Input { .. } => self.prompt_text(field),
            FieldKind::Select { options } => self.prompt_select(field, options),
            FieldKind::MultiSelect { options } => self.prompt_multi_select(field, options),
        }
    }
}

/// Maps a 1-based option number to its option; anything else passes through as typed.
fn pick_option(options: &[String], answer: &str) -> String {
    if let Ok(n) = answer.parse::<usize>()
        && n > 0
        && n <= options.len()
    {
        return options[n - 1].clone();
    }
    answer.to_string()
}

fn failed(err: io::Error) -> InteractionFailure {
    InteractionFailure::Failed(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use survey_spec::{FormDriver, FunctionRegistry, Question, QuestionKind, TypedValue, drive};

    use super::*;

    fn field(kind: FieldKind, default: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: "field".into(),
            title: "Pick".into(),
            kind,
            default: default.into(),
        }
    }

    fn options() -> Vec<String> {
        vec!["Red".into(), "Blue".into(), "Green".into()]
    }

    fn ask(input: &str, field: &FieldDescriptor) -> (Result<Reply, InteractionFailure>, String) {
        let mut frontend = TerminalFrontend::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let reply = frontend.prompt(field, None);
        let (_, output) = frontend.into_inner();
        (reply, String::from_utf8(output).expect("utf8 output"))
    }

    fn input() -> FieldKind {
        FieldKind::Input {
            min_length: 0,
            max_length: 0,
        }
    }

    #[test]
    fn text_prompt_shows_default_and_keeps_it_on_empty_line() {
        let (reply, output) = ask("\n", &field(input(), "Oslo"));
        assert_eq!(reply, Ok(Reply::Text("Oslo".into())));
        assert_eq!(output, "Pick [Oslo]: ");
    }

    #[test]
    fn text_prompt_keeps_surrounding_spaces() {
        let (reply, output) = ask("  Bergen \r\n", &field(input(), ""));
        assert_eq!(reply, Ok(Reply::Text("  Bergen ".into())));
        assert_eq!(output, "Pick: ");
    }

    #[test]
    fn spaces_count_toward_length_limits() {
        let questions = vec![Question::new("code", "Code?", QuestionKind::Ask).with_length(3, 3)];
        let mut driver = FormDriver::new(
            &questions,
            &FunctionRegistry::new(),
            &mut StdRng::seed_from_u64(0),
        )
        .expect("driver should build");
        let mut frontend = TerminalFrontend::new(Cursor::new(b" ab\n".to_vec()), Vec::new());
        drive(&mut driver, &mut frontend).expect("drive should finish");
        let answers = driver.finish().expect("form should complete");
        assert_eq!(answers["code"], TypedValue::String(" ab".into()));
    }

    #[test]
    fn select_accepts_number_or_value() {
        let select = field(FieldKind::Select { options: options() }, "Blue");
        let (reply, output) = ask("3\n", &select);
        assert_eq!(reply, Ok(Reply::Text("Green".into())));
        assert!(output.starts_with("Pick:\n  1. Red\n  2. Blue\n  3. Green\n"));
        assert!(output.ends_with("[Blue] "));

        let (reply, _) = ask("  Red \n", &select);
        assert_eq!(reply, Ok(Reply::Text("Red".into())));
        let (reply, _) = ask("9\n", &select);
        assert_eq!(reply, Ok(Reply::Text("9".into())));
    }

    #[test]
    fn multi_select_splits_on_commas() {
        let multi = field(FieldKind::MultiSelect { options: options() }, "Red,Green");
        let (reply, _) = ask("1, Blue,\n", &multi);
        assert_eq!(
            reply,
            Ok(Reply::Selection(vec!["Red".into(), "Blue".into()]))
        );
        let (reply, _) = ask("\n", &multi);
        assert_eq!(
            reply,
            Ok(Reply::Selection(vec!["Red".into(), "Green".into()]))
        );
    }

    #[test]
    fn cancel_input_cancels() {
        let (reply, _) = ask(":q\n", &field(input(), "x"));
        assert_eq!(reply, Ok(Reply::Cancel));
    }

    #[test]
    fn eof_is_a_failure() {
        let (reply, _) = ask("", &field(input(), ""));
        assert_eq!(
            reply,
            Err(InteractionFailure::Failed("stdin closed".into()))
        );
    }

    #[test]
    fn rejection_is_reported_before_prompt() {
        let mut frontend = TerminalFrontend::new(Cursor::new(b"ok\n".to_vec()), Vec::new());
        let error = ValidationError::TooShort { min: 2, actual: 0 };
        let reply = frontend.prompt(&field(input(), ""), Some(&error));
        assert_eq!(reply, Ok(Reply::Text("ok".into())));
        let (_, output) = frontend.into_inner();
        assert_eq!(
            String::from_utf8(output).expect("utf8 output"),
            "Invalid answer: input too short, minimum length is 2\nPick: "
        );
    }
}
