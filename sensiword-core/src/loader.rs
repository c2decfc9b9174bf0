//! loader.rs - Reads newline-delimited word lists into a [`Trie`].
//!
//! The format is one word per line: no comments, no escaping. Blank lines are
//! allowed and ignored by insertion. Reading is the only thing that can fail.
//!
//! License: MIT OR APACHE 2.0

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::errors::SensiwordError;
use crate::trie::Trie;

/// Reads every line of `reader`, stripping a trailing `\r` from each.
pub fn read_word_list<R: BufRead>(reader: R) -> Result<Vec<String>, SensiwordError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        words.push(line);
    }
    debug!("Read {} line(s) from word list.", words.len());
    Ok(words)
}

/// Reads a word-list file.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SensiwordError> {
    let path = path.as_ref();
    let wrap = |source| SensiwordError::WordList {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(wrap)?;
    let words = read_word_list(BufReader::new(file)).map_err(|e| match e {
        SensiwordError::IoError(source) => wrap(source),
        other => other,
    })?;
    info!("Read {} line(s) from word list {}.", words.len(), path.display());
    Ok(words)
}

/// Inserts every line of `reader` into `trie`, returning the number of lines read.
pub fn load_words<R: BufRead>(trie: &mut Trie, reader: R) -> Result<usize, SensiwordError> {
    let words = read_word_list(reader)?;
    for word in &words {
        trie.insert(word);
    }
    Ok(words.len())
}

/// Inserts every line of the file at `path` into `trie`.
pub fn load_word_file<P: AsRef<Path>>(trie: &mut Trie, path: P) -> Result<usize, SensiwordError> {
    let words = read_word_file(path)?;
    for word in &words {
        trie.insert(word);
    }
    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_words_skips_blank_lines_and_crlf() {
        let mut trie = Trie::new();
        let n = load_words(&mut trie, Cursor::new("he\r\n\nshe\n敏感词\n\n")).unwrap();
        assert_eq!(n, 5);
        assert_eq!(trie.len(), 3);
        assert!(trie.contains_word("he"));
        assert!(trie.contains_word("she"));
        assert!(trie.contains_word("敏感词"));
    }

    #[test]
    fn test_load_empty_source() {
        let mut trie = Trie::new();
        assert_eq!(load_words(&mut trie, Cursor::new("")).unwrap(), 0);
        assert!(trie.is_empty());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let mut trie = Trie::new();
        let err = load_word_file(&mut trie, "/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, SensiwordError::WordList { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut trie = Trie::new();
        let err = load_words(&mut trie, Cursor::new(vec![0xff, 0xfe, b'\n'])).unwrap_err();
        assert!(matches!(err, SensiwordError::IoError(_)));
    }
}
