use std::iter::FusedIterator;
use std::str::Chars;

use crate::state::ScanState;

/// Splits `input` into words the way a POSIX-like shell splits a command line.
///
/// Never fails: unterminated quotes are closed at the end of the input and a
/// trailing unquoted backslash is dropped.
pub fn split(input: &str) -> Vec<String> {
    Words::new(input).collect()
}

/// Lazy iterator over the words of a command line.
///
/// Yields the same words, in the same order, as [`split`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    chars: Chars<'a>,
    /// `None` once the input is exhausted and the last word has been taken.
    state: Option<ScanState>,
}

impl<'a> Words<'a> {
    pub fn new(input: &'a str) -> Self {
        Words {
            chars: input.chars(),
            state: Some(ScanState::Blank),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut state = self.state.take()?;

        for ch in self.chars.by_ref() {
            let (next, word) = state.step(ch);
            if let Some(word) = word {
                self.state = Some(next);
                return Some(word);
            }
            state = next;
        }

        state.finish()
    }
}

impl FusedIterator for Words<'_> {}
