//! Tab completion: the candidate source and the cycling state over its answer

use tracing::debug;

/// Source of completion candidates.
///
/// Implementations should be side-effect free; an empty answer is fine.
pub trait Completer {
    /// Ordered candidates for the partial line `partial`.
    fn match_completions(&self, partial: &str) -> Vec<String>;
}

impl<F> Completer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn match_completions(&self, partial: &str) -> Vec<String> {
        self(partial)
    }
}

/// Prefix matcher over a fixed list of words
#[derive(Debug, Clone)]
pub struct WordListCompleter {
    words: Vec<String>,
    case_sensitive: bool,
}

impl Default for WordListCompleter {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl WordListCompleter {
    /// Duplicate words are dropped; first occurrence wins the position.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut completer = Self {
            words: Vec::new(),
            case_sensitive: true,
        };
        completer.extend(words);
        completer
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            if !word.is_empty() && !self.words.contains(&word) {
                self.words.push(word);
            }
        }
    }
}

impl Completer for WordListCompleter {
    fn match_completions(&self, partial: &str) -> Vec<String> {
        if self.case_sensitive {
            self.words
                .iter()
                .filter(|word| word.starts_with(partial))
                .cloned()
                .collect()
        } else {
            let partial = partial.to_lowercase();
            self.words
                .iter()
                .filter(|word| word.to_lowercase().starts_with(&partial))
                .cloned()
                .collect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// One uninterrupted Tab/Shift+Tab run over a single candidate list.
///
/// Starts before the first candidate: the first forward step selects index 0,
/// the first backward step selects the last candidate.
#[derive(Debug, Clone, Default)]
pub struct CompletionCycler {
    candidates: Vec<String>,
    index: Option<usize>,
}

impl CompletionCycler {
    pub fn new(candidates: Vec<String>) -> Self {
        debug!("completion run started with {} candidates", candidates.len());
        Self {
            candidates,
            index: None,
        }
    }

    /// Ask `completer` about `partial` and start a run over its answer.
    pub fn start<C: Completer + ?Sized>(completer: &C, partial: &str) -> Self {
        Self::new(completer.match_completions(partial))
    }

    /// Step with wraparound and return the newly selected candidate, or
    /// `None` if there are no candidates.
    pub fn advance(&mut self, direction: CycleDirection) -> Option<&str> {
        let count = self.candidates.len();
        if count == 0 {
            return None;
        }

        let next = match (self.index, direction) {
            (None, CycleDirection::Forward) => 0,
            (None, CycleDirection::Backward) => count - 1,
            (Some(index), CycleDirection::Forward) => (index + 1) % count,
            (Some(index), CycleDirection::Backward) => (index + count - 1) % count,
        };
        self.index = Some(next);
        self.candidates.get(next).map(String::as_str)
    }
}
