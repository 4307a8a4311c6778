//! Digit-box model behind the OTP input
//!
//! Holds a fixed number of single-digit cells plus the index of the focused
//! cell. The view renders one `<input>` per cell and forwards keyboard and
//! clipboard events as [`CellEdit`]s.

/// A user action on the digit boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEdit {
    /// Raw value of the input at `index` after an input event
    Input { index: usize, value: String },
    Backspace { index: usize },
    ArrowLeft { index: usize },
    ArrowRight { index: usize },
    /// Clipboard text pasted into the boxes
    Paste(String),
}

/// Result of applying a [`CellEdit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Cells were mutated; carries the joined code
    Changed(String),
    /// Only the focused cell moved
    FocusMoved,
    /// Edit was refused, nothing changed
    Rejected,
}

impl EditOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, EditOutcome::Changed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasteError {
    #[error("Pasted text must contain only digits")]
    NotDigits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCells {
    cells: Vec<Option<char>>,
    focus: usize,
}

impl OtpCells {
    /// Create `length` empty cells with focus on the first one
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![None; length.max(1)],
            focus: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Cell contents as display strings, empty cells as `""`
    pub fn values(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|c| c.map(String::from).unwrap_or_default())
            .collect()
    }

    /// Filled cells joined in order
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Number of filled cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.focus = 0;
    }

    pub fn apply(&mut self, edit: CellEdit) -> EditOutcome {
        match edit {
            CellEdit::Input { index, value } => self.input(index, &value),
            CellEdit::Backspace { index } => self.backspace(index),
            CellEdit::ArrowLeft { index } => self.move_focus(index, -1),
            CellEdit::ArrowRight { index } => self.move_focus(index, 1),
            CellEdit::Paste(text) => match self.paste(&text) {
                Ok(code) => EditOutcome::Changed(code),
                Err(_) => EditOutcome::Rejected,
            },
        }
    }

    fn input(&mut self, index: usize, value: &str) -> EditOutcome {
        if index >= self.len() {
            return EditOutcome::Rejected;
        }

        let mut chars = value.chars();
        let digit = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_digit() => Some(c),
            _ => return EditOutcome::Rejected,
        };

        self.cells[index] = digit;
        self.focus = if digit.is_some() && index + 1 < self.len() {
            index + 1
        } else {
            index
        };
        EditOutcome::Changed(self.code())
    }

    fn backspace(&mut self, index: usize) -> EditOutcome {
        if index >= self.len() {
            return EditOutcome::Rejected;
        }

        if self.cells[index].is_none() {
            self.focus = index.saturating_sub(1);
            return EditOutcome::FocusMoved;
        }

        self.cells[index] = None;
        self.focus = index;
        EditOutcome::Changed(self.code())
    }

    fn move_focus(&mut self, index: usize, delta: isize) -> EditOutcome {
        if index >= self.len() {
            return EditOutcome::Rejected;
        }
        let last = self.len() - 1;
        self.focus = index.saturating_add_signed(delta).min(last);
        EditOutcome::FocusMoved
    }

    /// Fill the cells from position 0 with a pure-digit string.
    ///
    /// Surrounding whitespace is trimmed; text longer than the cell count is
    /// truncated. Focus lands on the first empty cell, or the last cell when
    /// everything is filled.
    pub fn paste(&mut self, text: &str) -> Result<String, PasteError> {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(PasteError::NotDigits);
        }

        let mut digits = text.chars();
        for cell in self.cells.iter_mut() {
            *cell = digits.next();
        }

        self.focus = self
            .cells
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.len() - 1);
        Ok(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(cells: &mut OtpCells, digits: &str) {
        for (index, digit) in digits.chars().enumerate() {
            cells.apply(CellEdit::Input {
                index,
                value: digit.to_string(),
            });
        }
    }

    #[test]
    fn test_new_cells_are_empty() {
        let cells = OtpCells::new(6);
        assert_eq!(cells.len(), 6);
        assert!(cells.is_empty());
        assert_eq!(cells.focus(), 0);
        assert_eq!(cells.code(), "");
        assert_eq!(cells.values(), vec![""; 6]);
    }

    #[test]
    fn test_typing_advances_focus() {
        let mut cells = OtpCells::new(6);
        let outcome = cells.apply(CellEdit::Input {
            index: 0,
            value: "4".into(),
        });
        assert_eq!(outcome, EditOutcome::Changed("4".into()));
        assert_eq!(cells.focus(), 1);
    }

    #[test]
    fn test_typing_full_code_keeps_focus_on_last_cell() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "123456");
        assert_eq!(cells.code(), "123456");
        assert!(cells.is_complete());
        assert_eq!(cells.focus(), 5);
    }

    #[test]
    fn test_typing_partial_code() {
        for len in 0..=6 {
            let digits: String = "987654".chars().take(len).collect();
            let mut cells = OtpCells::new(6);
            type_digits(&mut cells, &digits);
            assert_eq!(cells.code(), digits);
            assert_eq!(cells.filled(), len);
            assert_eq!(cells.focus(), len.min(5));
        }
    }

    #[test]
    fn test_multi_char_input_rejected() {
        let mut cells = OtpCells::new(6);
        let outcome = cells.apply(CellEdit::Input {
            index: 0,
            value: "12".into(),
        });
        assert_eq!(outcome, EditOutcome::Rejected);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_non_digit_input_rejected() {
        let mut cells = OtpCells::new(6);
        let outcome = cells.apply(CellEdit::Input {
            index: 2,
            value: "x".into(),
        });
        assert_eq!(outcome, EditOutcome::Rejected);
        assert!(cells.cell(2).is_none());
    }

    #[test]
    fn test_empty_input_clears_cell_without_moving() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "12");
        let outcome = cells.apply(CellEdit::Input {
            index: 1,
            value: String::new(),
        });
        assert_eq!(outcome, EditOutcome::Changed("1".into()));
        assert_eq!(cells.focus(), 1);
    }

    #[test]
    fn test_backspace_on_filled_cell_clears_it() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "123");
        let outcome = cells.apply(CellEdit::Backspace { index: 2 });
        assert_eq!(outcome, EditOutcome::Changed("12".into()));
        assert_eq!(cells.focus(), 2);
    }

    #[test]
    fn test_backspace_on_empty_cell_moves_back() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "12");
        let outcome = cells.apply(CellEdit::Backspace { index: 2 });
        assert_eq!(outcome, EditOutcome::FocusMoved);
        assert_eq!(cells.focus(), 1);
        assert_eq!(cells.code(), "12");
    }

    #[test]
    fn test_backspace_on_first_empty_cell_stays() {
        let mut cells = OtpCells::new(6);
        cells.apply(CellEdit::Backspace { index: 0 });
        assert_eq!(cells.focus(), 0);
    }

    #[test]
    fn test_arrows_move_focus_only() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "12");

        assert_eq!(
            cells.apply(CellEdit::ArrowLeft { index: 2 }),
            EditOutcome::FocusMoved
        );
        assert_eq!(cells.focus(), 1);

        cells.apply(CellEdit::ArrowRight { index: 5 });
        assert_eq!(cells.focus(), 5);

        cells.apply(CellEdit::ArrowLeft { index: 0 });
        assert_eq!(cells.focus(), 0);
        assert_eq!(cells.code(), "12");
    }

    #[test]
    fn test_paste_partial_code() {
        let mut cells = OtpCells::new(6);
        let outcome = cells.apply(CellEdit::Paste("1234".into()));
        assert_eq!(outcome, EditOutcome::Changed("1234".into()));
        assert!(cells.cell(4).is_none());
        assert!(cells.cell(5).is_none());
        assert_eq!(cells.focus(), 4);
    }

    #[test]
    fn test_paste_truncates_long_input() {
        let mut cells = OtpCells::new(6);
        assert_eq!(cells.paste(" 12345678 "), Ok("123456".to_string()));
        assert_eq!(cells.focus(), 5);
    }

    #[test]
    fn test_paste_replaces_existing_cells() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "999999");
        cells.paste("12").unwrap();
        assert_eq!(cells.code(), "12");
        assert_eq!(cells.focus(), 2);
    }

    #[test]
    fn test_paste_with_letters_rejected() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "7");
        let before = cells.clone();

        assert_eq!(cells.paste("12a456"), Err(PasteError::NotDigits));
        assert_eq!(cells, before);
        assert_eq!(
            cells.apply(CellEdit::Paste(String::new())),
            EditOutcome::Rejected
        );
    }

    #[test]
    fn test_out_of_range_edits_rejected() {
        let mut cells = OtpCells::new(6);
        for edit in [
            CellEdit::Input {
                index: 6,
                value: "1".into(),
            },
            CellEdit::Backspace { index: 9 },
            CellEdit::ArrowRight { index: 6 },
        ] {
            assert_eq!(cells.apply(edit), EditOutcome::Rejected);
        }
    }

    #[test]
    fn test_clear_resets_focus() {
        let mut cells = OtpCells::new(6);
        type_digits(&mut cells, "123");
        cells.clear();
        assert!(cells.is_empty());
        assert_eq!(cells.focus(), 0);
    }
}
