//! Header scanning
//!
//! Runs the classifier over every line of a header and keeps the extracted
//! pairs in order of appearance. Order is never changed here: the generated
//! table must be reproducible from the header alone.

use crate::classify::{Classifier, LineForm};
use crate::error::ParseError;
use crate::extract::ExtractedPair;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Counters collected while scanning a header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub spaced: usize,
    pub parenthesized: usize,
}

impl ScanStats {
    pub fn matched(&self) -> usize {
        self.spaced + self.parenthesized
    }

    fn record(&mut self, form: LineForm) {
        match form {
            LineForm::Spaced => self.spaced += 1,
            LineForm::Parenthesized => self.parenthesized += 1,
        }
    }
}

/// Keysym/code-point pairs in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pairs: Vec<ExtractedPair>,
    stats: ScanStats,
}

impl ParsedTable {
    /// Build a table from already extracted pairs, keeping their order.
    pub fn from_pairs(pairs: Vec<ExtractedPair>) -> Self {
        Self {
            pairs,
            stats: ScanStats::default(),
        }
    }

    /// Scan header text.
    pub fn parse_str(text: &str, classifier: &Classifier) -> Result<Self, ParseError> {
        let mut table = Self::default();

        for (index, line) in text.lines().enumerate() {
            table.stats.lines += 1;
            let parsed = classifier
                .try_parse(line)
                .map_err(|source| ParseError::Extract {
                    line_number: index + 1,
                    line: line.to_string(),
                    source,
                })?;
            if let Some((form, pair)) = parsed {
                table.stats.record(form);
                table.pairs.push(pair);
            }
        }

        debug!(
            "scanned {} lines: {} spaced, {} parenthesized definitions",
            table.stats.lines, table.stats.spaced, table.stats.parenthesized
        );
        Ok(table)
    }

    /// Read `reader` to the end and scan it.
    pub fn from_reader(mut reader: impl Read, classifier: &Classifier) -> Result<Self, ParseError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(ParseError::Stream)?;
        Self::parse_str(&text, classifier)
    }

    /// Read and scan the header at `path`. The whole file is read up front.
    pub fn load(path: impl AsRef<Path>, classifier: &Classifier) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&text, classifier)
    }

    pub fn pairs(&self) -> &[ExtractedPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Key codes that appear more than once, in order of first appearance.
    ///
    /// Headers define aliases (`XK_Greek_IOTAdieresis`/`XK_Greek_IOTAdiaeresis`),
    /// which a lookup by key code cannot tell apart.
    pub fn duplicate_codes(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for pair in &self.pairs {
            let count = seen.entry(pair.code.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(pair.code.as_str());
            }
        }
        duplicates
    }

    /// Whether key codes ascend (non-strictly) through the table.
    ///
    /// Consumers binary-search the generated array, so an unsorted header is
    /// worth a warning. Entries whose code does not parse are skipped.
    pub fn is_sorted_by_code(&self) -> bool {
        let codes: Vec<u32> = self.pairs.iter().filter_map(|p| p.code_value()).collect();
        codes.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<'a> IntoIterator for &'a ParsedTable {
    type Item = &'a ExtractedPair;
    type IntoIter = std::slice::Iter<'a, ExtractedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
