//! Ordered free-text list edited through discrete key events.
//!
//! The editor is either browsing the entries, editing the entry under the
//! cursor, or composing a new entry. Every transition is total.

/// Input events understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Up,
    Down,
    Enter,
    Backspace,
    Escape,
    /// Ctrl+C: quits from any state.
    Interrupt,
    Char(char),
}

/// Current editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Browsing,
    EditingExisting,
    EditingNew,
}

/// Result of feeding one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Continue,
    /// Final entries, one per line.
    Finished(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEditor {
    entries: Vec<String>,
    index: usize,
    mode: ListMode,
    buffer: String,
    finished: bool,
}

impl ListEditor {
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            index: 0,
            mode: ListMode::Browsing,
            buffer: String::new(),
            finished: false,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Cursor position; `None` while the list is empty.
    pub fn cursor(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.index)
        }
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode != ListMode::Browsing
    }

    pub fn is_adding_new(&self) -> bool {
        self.mode == ListMode::EditingNew
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replaces the staged text; ignored while browsing.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if self.is_editing() {
            self.buffer = text.into();
        }
    }

    /// Final text: each entry terminated by a newline.
    ///
    /// An empty list yields `""` rather than a lone newline.
    pub fn output(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    pub fn handle(&mut self, key: ListKey) -> ListOutcome {
        if self.finished {
            return ListOutcome::Finished(self.output());
        }
        if matches!(key, ListKey::Escape | ListKey::Interrupt) {
            self.finished = true;
            return ListOutcome::Finished(self.output());
        }

        match self.mode {
            ListMode::Browsing => self.browse(key),
            ListMode::EditingExisting | ListMode::EditingNew => self.edit(key),
        }
    }

    fn browse(&mut self, key: ListKey) -> ListOutcome {
        match key {
            ListKey::Up => {
                self.index = self.index.saturating_sub(1);
            }
            ListKey::Down => {
                if self.index + 1 < self.entries.len() {
                    self.index += 1;
                }
            }
            ListKey::Enter => {
                if let Some(entry) = self.entries.get(self.index) {
                    self.buffer = entry.clone();
                    self.mode = ListMode::EditingExisting;
                }
            }
            ListKey::Char('n') => {
                self.buffer.clear();
                self.mode = ListMode::EditingNew;
            }
            ListKey::Char('q') => {
                self.finished = true;
                return ListOutcome::Finished(self.output());
            }
            ListKey::Backspace => {
                if !self.entries.is_empty() {
                    self.entries.remove(self.index);
                    self.index = self.index.min(self.entries.len().saturating_sub(1));
                }
            }
            ListKey::Char(_) | ListKey::Escape | ListKey::Interrupt => {}
        }
        ListOutcome::Continue
    }

    fn edit(&mut self, key: ListKey) -> ListOutcome {
        match key {
            ListKey::Enter => self.commit(),
            ListKey::Backspace => {
                self.buffer.pop();
            }
            ListKey::Char(c) => self.buffer.push(c),
            ListKey::Up | ListKey::Down | ListKey::Escape | ListKey::Interrupt => {}
        }
        ListOutcome::Continue
    }

    fn commit(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        match self.mode {
            ListMode::EditingNew => {
                if !text.is_empty() {
                    self.entries.push(text);
                    self.index = self.entries.len() - 1;
                }
            }
            ListMode::EditingExisting => {
                if let Some(entry) = self.entries.get_mut(self.index) {
                    *entry = text;
                }
            }
            ListMode::Browsing => {}
        }
        self.mode = ListMode::Browsing;
    }
}
