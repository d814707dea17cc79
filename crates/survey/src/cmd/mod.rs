use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::messages::trf;

pub mod check;
pub mod list;
pub mod run;

/// Key looked up in map-shaped question documents when none is given.
pub const DEFAULT_KEY: &str = "survey_questions";

/// Writes `text` to `out`, or to stdout when no path is given.
pub(crate) fn emit(text: &str, out: Option<&Path>, written_key: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{}", trf(written_key, &[&path.display().to_string()]));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
