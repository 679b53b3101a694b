//! Letter grid
//!
//! Holds the letters typed into each row and the evaluation of every
//! submitted row. The board knows nothing about the secret word.

use crate::core::{Evaluation, MAX_ATTEMPTS, WORD_LENGTH, Word};

/// One row of the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: Vec<char>,
    evaluation: Option<Evaluation>,
}

impl Row {
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Evaluation, present once the row has been submitted
    #[must_use]
    pub const fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Grid of `MAX_ATTEMPTS` rows of `WORD_LENGTH` boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
    current: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![Row::default(); MAX_ATTEMPTS],
            current: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the row being typed into; equals the number of submitted rows
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Row being typed into, `None` once every row is submitted
    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        self.rows.get(self.current)
    }

    /// Submitted rows with their evaluations
    pub fn submitted(&self) -> impl Iterator<Item = (&Row, &Evaluation)> {
        self.rows[..self.current]
            .iter()
            .filter_map(|row| row.evaluation().map(|evaluation| (row, evaluation)))
    }

    /// Put a letter in the first empty box of the current row
    ///
    /// Returns false if the letter is not ASCII alphabetic or the row is full.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }

        match self.rows.get_mut(self.current) {
            Some(row) if !row.is_full() => {
                row.letters.push(letter.to_ascii_uppercase());
                true
            }
            _ => false,
        }
    }

    /// Clear the last filled box of the current row
    ///
    /// Returns false if the row is already empty.
    pub fn pop_letter(&mut self) -> bool {
        self.rows
            .get_mut(self.current)
            .and_then(|row| row.letters.pop())
            .is_some()
    }

    /// Record the evaluation of the current row and move to the next one
    ///
    /// Returns false if every row is already submitted.
    pub fn commit(&mut self, word: &Word, evaluation: Evaluation) -> bool {
        let Some(row) = self.rows.get_mut(self.current) else {
            return false;
        };

        row.letters = word.text().chars().collect();
        row.evaluation = Some(evaluation);
        self.current += 1;
        true
    }

    /// Letters of every row, one string per row (empty for untouched rows)
    #[must_use]
    pub fn grid_letters(&self) -> Vec<String> {
        self.rows.iter().map(Row::text).collect()
    }
}
