//! Text metrics: approximate word counts over markup-bearing text.
mod count;
mod decode;
mod error;
mod markup;
mod report;

pub use count::{word_count, MarkupWordCounter, WhitespaceWordCounter, WordCounter};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use error::MetricsError;
pub use markup::strip_markup;
pub use report::{read_report, Summary, TextReport, STDIN_SOURCE};
