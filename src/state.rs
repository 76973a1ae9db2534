//! Scanner state for shell-style word splitting.
//!
//! Each variant carries only what the scan needs at that point: the buffer of
//! the word being built, or nothing at all between words. A pending backslash
//! is its own variant, so [`ScanState::step`] consumes exactly one character
//! and never looks ahead.

use tracing::trace;

/// The quoting context a [`ScanState`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Unquoted,
    SingleQuoted,
    DoubleQuoted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No word in progress.
    #[default]
    Blank,
    /// A word has started and the scan is outside any quotes.
    Unquoted(String),
    /// An unquoted backslash was just seen. `None` when the backslash would
    /// be the first character of a new word.
    UnquotedEscape(Option<String>),
    SingleQuoted(String),
    DoubleQuoted(String),
    /// A backslash was just seen inside double quotes.
    DoubleQuotedEscape(String),
}

/// Characters that keep their special meaning after a backslash inside
/// double quotes.
pub fn is_double_quote_escapable(ch: char) -> bool {
    matches!(ch, '$' | '`' | '"' | '\\' | '\n')
}

impl ScanState {
    pub fn mode(&self) -> Mode {
        match self {
            ScanState::Blank | ScanState::Unquoted(_) | ScanState::UnquotedEscape(_) => {
                Mode::Unquoted
            }
            ScanState::SingleQuoted(_) => Mode::SingleQuoted,
            ScanState::DoubleQuoted(_) | ScanState::DoubleQuotedEscape(_) => Mode::DoubleQuoted,
        }
    }

    /// Whether a word, possibly empty, is in progress.
    ///
    /// An unquoted backslash only counts once something follows it.
    pub fn word_started(&self) -> bool {
        match self {
            ScanState::Blank | ScanState::UnquotedEscape(None) => false,
            ScanState::UnquotedEscape(Some(_))
            | ScanState::Unquoted(_)
            | ScanState::SingleQuoted(_)
            | ScanState::DoubleQuoted(_)
            | ScanState::DoubleQuotedEscape(_) => true,
        }
    }

    /// Feeds one character to the scanner.
    ///
    /// Returns the next state and, when `ch` was an unquoted unescaped
    /// whitespace ending a word, that completed word.
    pub fn step(self, ch: char) -> (ScanState, Option<String>) {
        match self {
            ScanState::Blank => match ch {
                '\\' => (ScanState::UnquotedEscape(None), None),
                _ => (Self::start_word(String::new(), ch), None),
            },
            ScanState::Unquoted(word) => {
                if ch.is_whitespace() {
                    (ScanState::Blank, Some(word))
                } else {
                    (Self::start_word(word, ch), None)
                }
            }
            ScanState::UnquotedEscape(word) => {
                let mut word = word.unwrap_or_default();
                word.push(ch);
                (ScanState::Unquoted(word), None)
            }
            ScanState::SingleQuoted(mut word) => match ch {
                '\'' => (ScanState::Unquoted(word), None),
                _ => {
                    word.push(ch);
                    (ScanState::SingleQuoted(word), None)
                }
            },
            ScanState::DoubleQuoted(mut word) => match ch {
                '"' => (ScanState::Unquoted(word), None),
                '\\' => (ScanState::DoubleQuotedEscape(word), None),
                _ => {
                    word.push(ch);
                    (ScanState::DoubleQuoted(word), None)
                }
            },
            ScanState::DoubleQuotedEscape(mut word) => {
                match ch {
                    // line continuation
                    '\n' => {}
                    _ if is_double_quote_escapable(ch) => word.push(ch),
                    _ => {
                        word.push('\\');
                        word.push(ch);
                    }
                }
                (ScanState::DoubleQuoted(word), None)
            }
        }
    }

    /// Handles `ch` outside quotes, with `word` holding what has been built so
    /// far. Whitespace never reaches here with a word in progress.
    fn start_word(mut word: String, ch: char) -> ScanState {
        match ch {
            _ if ch.is_whitespace() => ScanState::Blank,
            '\\' => ScanState::UnquotedEscape(Some(word)),
            '\'' => ScanState::SingleQuoted(word),
            '"' => ScanState::DoubleQuoted(word),
            _ => {
                word.push(ch);
                ScanState::Unquoted(word)
            }
        }
    }

    /// Ends the scan, returning the last word if one was started.
    ///
    /// Unterminated quotes are closed implicitly. A dangling unquoted
    /// backslash is dropped.
    pub fn finish(self) -> Option<String> {
        match self {
            ScanState::Blank => None,
            ScanState::Unquoted(word) => Some(word),
            ScanState::UnquotedEscape(word) => {
                trace!(word_started = word.is_some(), "dropping trailing backslash");
                word
            }
            ScanState::SingleQuoted(word) => {
                trace!(len = word.len(), "closing unterminated single quote");
                Some(word)
            }
            ScanState::DoubleQuoted(word) => {
                trace!(len = word.len(), "closing unterminated double quote");
                Some(word)
            }
            ScanState::DoubleQuotedEscape(mut word) => {
                trace!(
                    len = word.len(),
                    "closing unterminated double quote after backslash"
                );
                word.push('\\');
                Some(word)
            }
        }
    }
}
