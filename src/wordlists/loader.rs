//! Word list loading utilities
//!
//! Lines are trimmed and lowercased. Anything that is not a plain `a..z` word
//! (apostrophes, accents, digits) is skipped, as are repeats of an earlier word.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, optionally keeping only words of one length
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_csp::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words", Some(5)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: Option<usize>) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(collect_words(content.lines(), length))
}

/// Convert a string slice to words, optionally keeping only one length
///
/// # Examples
/// ```
/// use wordle_csp::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Crane", "slate", "crane", "it's", "tea"], Some(5));
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: Option<usize>) -> Vec<Word> {
    collect_words(slice.iter().copied(), length)
}

fn collect_words<'a, I>(lines: I, length: Option<usize>) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();

    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| length.is_none_or(|len| word.len() == len))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], None);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_filters_by_length() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"], Some(5));

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_keeps_all_lengths_without_filter() {
        let words = words_from_slice(&["crane", "toolong", "abc"], None);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn words_from_slice_skips_invalid_and_duplicates() {
        let words = words_from_slice(&["Crane", "o'clock", "café", "", "CRANE", "slate"], None);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, None).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir()
            .join(format!("wordle_csp_loader_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "Aback\n  crane  \nit's\nslate\ncrane\nab").unwrap();
        }

        let words = load_from_file(&path, Some(5)).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["aback", "crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/wordle_csp/words.txt", None).is_err());
    }
}
