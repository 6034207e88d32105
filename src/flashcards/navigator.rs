//! Flashcard study-mode navigation.
//!
//! Tracks which set is open, the current card and which face is showing.
//! Moving past either end of a set is silently ignored, and an empty set is
//! never indexed.

use crate::study::model::{Card, FlashcardSet, RecordId, StudyData};
use crate::study::StudyError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    open_set: Option<RecordId>,
    index: usize,
    flipped: bool,
}

/// The face of the current card to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Question,
    Answer,
}

impl Face {
    pub fn label(self) -> &'static str {
        match self {
            Face::Question => "QUESTION",
            Face::Answer => "ANSWER",
        }
    }
}

impl Navigator {
    pub fn open_set_id(&self) -> Option<RecordId> {
        self.open_set
    }

    pub fn is_open(&self) -> bool {
        self.open_set.is_some()
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn face(&self) -> Face {
        if self.flipped {
            Face::Answer
        } else {
            Face::Question
        }
    }

    /// Resolve the open set against `data`.
    pub fn current_set<'a>(&self, data: &'a StudyData) -> Option<&'a FlashcardSet> {
        self.open_set.and_then(|id| data.find_set(id))
    }

    /// The card under the cursor, `None` when nothing is open or the set is empty.
    pub fn current_card<'a>(&self, data: &'a StudyData) -> Option<&'a Card> {
        self.current_set(data).and_then(|s| s.cards.get(self.index))
    }

    /// Text of the visible face of the current card.
    pub fn visible_text<'a>(&self, data: &'a StudyData) -> Option<&'a str> {
        self.current_card(data).map(|card| match self.face() {
            Face::Question => card.front.as_str(),
            Face::Answer => card.back.as_str(),
        })
    }

    /// `"i / N"`, or `"0 / 0"` for an empty set.
    pub fn counter(&self, card_count: usize) -> String {
        if card_count == 0 {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.index + 1, card_count)
        }
    }

    pub fn can_prev(&self) -> bool {
        self.is_open() && self.index > 0
    }

    pub fn can_next(&self, card_count: usize) -> bool {
        self.is_open() && card_count > 0 && self.index < card_count - 1
    }

    pub fn open(&mut self, set_id: RecordId, data: &StudyData) -> Result<(), StudyError> {
        if data.find_set(set_id).is_none() {
            return Err(StudyError::UnknownSet(set_id));
        }
        self.open_set = Some(set_id);
        self.index = 0;
        self.flipped = false;
        Ok(())
    }

    pub fn close(&mut self) {
        self.open_set = None;
        self.index = 0;
        self.flipped = false;
    }

    /// Toggle the visible face. Returns `false` when no set is open.
    pub fn flip(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.flipped = !self.flipped;
        true
    }

    /// Advance one card. Returns `false` (and changes nothing) at the last card.
    pub fn next(&mut self, card_count: usize) -> bool {
        if !self.can_next(card_count) {
            return false;
        }
        self.index += 1;
        self.flipped = false;
        true
    }

    /// Go back one card. Returns `false` (and changes nothing) at the first card.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.index -= 1;
        self.flipped = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::model::Card;

    fn data_with(cards: usize) -> StudyData {
        StudyData {
            flashcard_sets: vec![FlashcardSet {
                id: 7,
                name: "Vocab".into(),
                cards: (0..cards)
                    .map(|i| Card {
                        id: 100 + i as RecordId,
                        front: format!("front {}", i),
                        back: format!("back {}", i),
                    })
                    .collect(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn open_requires_existing_set() {
        let data = data_with(2);
        let mut nav = Navigator::default();
        assert_eq!(nav.open(99, &data), Err(StudyError::UnknownSet(99)));
        assert!(!nav.is_open());
        nav.open(7, &data).unwrap();
        assert_eq!(nav.open_set_id(), Some(7));
        assert_eq!(nav.index(), 0);
        assert_eq!(nav.face(), Face::Question);
    }

    #[test]
    fn next_stops_at_last_card() {
        let data = data_with(4);
        let mut nav = Navigator::default();
        nav.open(7, &data).unwrap();
        for _ in 0..3 {
            assert!(nav.next(4));
        }
        assert_eq!(nav.index(), 3);
        assert!(!nav.next(4));
        assert_eq!(nav.index(), 3);
        assert_eq!(nav.counter(4), "4 / 4");
    }

    #[test]
    fn prev_at_first_card_is_no_op() {
        let data = data_with(3);
        let mut nav = Navigator::default();
        nav.open(7, &data).unwrap();
        assert!(!nav.prev());
        assert_eq!(nav.index(), 0);
        nav.next(3);
        assert!(nav.prev());
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn flip_twice_restores_face() {
        let data = data_with(1);
        let mut nav = Navigator::default();
        nav.open(7, &data).unwrap();
        assert_eq!(nav.visible_text(&data), Some("front 0"));
        nav.flip();
        assert_eq!(nav.face(), Face::Answer);
        assert_eq!(nav.visible_text(&data), Some("back 0"));
        nav.flip();
        assert_eq!(nav.face(), Face::Question);
    }

    #[test]
    fn moving_resets_flip() {
        let data = data_with(2);
        let mut nav = Navigator::default();
        nav.open(7, &data).unwrap();
        nav.flip();
        nav.next(2);
        assert!(!nav.is_flipped());
        nav.flip();
        nav.prev();
        assert!(!nav.is_flipped());
    }

    #[test]
    fn flip_without_open_set_does_nothing() {
        let mut nav = Navigator::default();
        assert!(!nav.flip());
        assert!(!nav.is_flipped());
    }

    #[test]
    fn empty_set_never_indexes() {
        let data = data_with(0);
        let mut nav = Navigator::default();
        nav.open(7, &data).unwrap();
        assert!(!nav.next(0));
        assert!(!nav.prev());
        assert_eq!(nav.current_card(&data), None);
        assert_eq!(nav.counter(0), "0 / 0");
    }

    #[test]
    fn close_clears_everything() {
        let data = data_with(3);
        let mut nav = Navigator::default();
        nav.open(7, &data).unwrap();
        nav.next(3);
        nav.flip();
        nav.close();
        assert_eq!(nav, Navigator::default());
    }
}
