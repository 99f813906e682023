use crate::markup::strip_markup;

pub trait WordCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

/// Approximate word count of a markup-bearing text blob.
///
/// Tags are replaced by spaces, then every maximal run of non-whitespace
/// characters counts as one word. Absent or empty input counts as zero.
///
/// Whitespace is Unicode `White_Space`: U+0085 separates words, U+FEFF does not.
pub fn word_count(text: Option<&str>) -> usize {
    match text {
        None | Some("") => 0,
        Some(text) => count_tokens(&strip_markup(text)),
    }
}

/// Counts words after stripping markup. The default counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupWordCounter;

impl WordCounter for MarkupWordCounter {
    fn count(&self, text: &str) -> usize {
        word_count(Some(text))
    }
}

/// Counts whitespace-delimited tokens with no markup handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceWordCounter;

impl WordCounter for WhitespaceWordCounter {
    fn count(&self, text: &str) -> usize {
        count_tokens(text)
    }
}

// Collapsing, trimming and splitting on single spaces yields exactly the
// non-whitespace runs.
fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_are_zero() {
        assert_eq!(word_count(None), 0);
        assert_eq!(word_count(Some("")), 0);
        assert_eq!(word_count(Some("   \n\t")), 0);
    }

    #[test]
    fn tag_between_letters_splits_word() {
        assert_eq!(word_count(Some("a<b>c")), 2);
    }

    #[test]
    fn whitespace_counter_ignores_markup() {
        assert_eq!(WhitespaceWordCounter.count("<p>hello</p>"), 1);
        assert_eq!(MarkupWordCounter.count("<p>hello</p>"), 1);
        assert_eq!(WhitespaceWordCounter.count("<p> hello </p>"), 3);
        assert_eq!(MarkupWordCounter.count("<p> hello </p>"), 1);
    }
}
