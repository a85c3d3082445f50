//! Terminal adapters for the shell.
//!
//! - [`StdioReader`] - plain line reading, no editing or completion
//! - [`ConsoleWriter`] - output lines, optionally ANSI styled
//! - [`EditorReader`] - `rustyline` editor with tab completion and hints
//!   (`readline` feature)

use std::io::{self, BufRead, IsTerminal, Write};

use pathsh::{LineReader, LineWriter, OutputLine};

// =============================================================================
// Plain Reader
// =============================================================================

/// Reads lines from any `BufRead`, echoing the prompt to `prompt_out`.
pub struct StdioReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> StdioReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineReader for StdioReader<R, W> {
    fn read_line(&mut self, prompt: &str, _completions: &[String]) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

// =============================================================================
// Writer
// =============================================================================

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Writes output lines, one per line.
pub struct ConsoleWriter<W> {
    out: W,
    styled: bool,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn color(&self, line: &OutputLine) -> Option<&'static str> {
        if !self.styled {
            return None;
        }
        match line {
            OutputLine::Text(_) => None,
            OutputLine::Info(_) => Some(GREEN),
            OutputLine::Comment(_) => Some(YELLOW),
            OutputLine::Error(_) => Some(RED),
        }
    }
}

impl<W: Write + IsTerminal> ConsoleWriter<W> {
    /// Style only when `out` itself is a terminal and `plain` is off.
    pub fn detect(out: W, plain: bool) -> Self {
        let styled = !plain && out.is_terminal();
        Self::new(out, styled)
    }
}

impl<W: Write> LineWriter for ConsoleWriter<W> {
    fn write_line(&mut self, line: OutputLine) -> io::Result<()> {
        match self.color(&line) {
            Some(color) => writeln!(self.out, "{}{}{}", color, line.as_str(), RESET),
            None => writeln!(self.out, "{}", line.as_str()),
        }
    }
}

// =============================================================================
// Line Editor
// =============================================================================

#[cfg(feature = "readline")]
pub use editor::EditorReader;

#[cfg(feature = "readline")]
mod editor {
    use std::io;

    use pathsh::LineReader;
    use pathsh::core::{AutocompleteResult, autocomplete, get_hint};
    use rustyline::completion::{Completer, Pair};
    use rustyline::error::ReadlineError;
    use rustyline::highlight::Highlighter;
    use rustyline::hint::Hinter;
    use rustyline::history::DefaultHistory;
    use rustyline::validate::Validator;
    use rustyline::{Context, Editor, Helper};

    /// Completes against the candidates of the current prompt.
    #[derive(Default)]
    struct CandidateHelper {
        candidates: Vec<String>,
    }

    impl Helper for CandidateHelper {}
    impl Highlighter for CandidateHelper {}
    impl Validator for CandidateHelper {}

    impl Completer for CandidateHelper {
        type Candidate = Pair;

        fn complete(
            &self,
            line: &str,
            pos: usize,
            _ctx: &Context<'_>,
        ) -> rustyline::Result<(usize, Vec<Pair>)> {
            let pairs = match autocomplete(&line[..pos], &self.candidates) {
                AutocompleteResult::Single(completion) => vec![Pair {
                    display: completion.trim_end().to_string(),
                    replacement: completion,
                }],
                AutocompleteResult::Multiple(_, matches) => matches
                    .into_iter()
                    .map(|m| Pair {
                        display: m.clone(),
                        replacement: m,
                    })
                    .collect(),
                AutocompleteResult::None => Vec::new(),
            };
            let start = line[..pos].len() - line[..pos].trim_start().len();
            Ok((start, pairs))
        }
    }

    impl Hinter for CandidateHelper {
        type Hint = String;

        fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
            if pos < line.len() {
                return None;
            }
            get_hint(line, &self.candidates)
        }
    }

    /// Interactive reader backed by `rustyline`.
    ///
    /// History is kept in memory for the session only.
    pub struct EditorReader {
        editor: Editor<CandidateHelper, DefaultHistory>,
    }

    impl EditorReader {
        pub fn new() -> io::Result<Self> {
            let mut editor = Editor::new().map_err(to_io)?;
            editor.set_helper(Some(CandidateHelper::default()));
            Ok(Self { editor })
        }
    }

    impl LineReader for EditorReader {
        fn read_line(
            &mut self,
            prompt: &str,
            completions: &[String],
        ) -> io::Result<Option<String>> {
            if let Some(helper) = self.editor.helper_mut() {
                helper.candidates = completions.to_vec();
            }

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str()).map_err(to_io)?;
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
                Err(e) => Err(to_io(e)),
            }
        }
    }

    fn to_io(err: ReadlineError) -> io::Error {
        match err {
            ReadlineError::Io(e) => e,
            other => io::Error::other(other.to_string()),
        }
    }
}
