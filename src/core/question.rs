//! A single quiz question: a few distinct options and the correct one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::Catalog;
use super::error::{ConfigError, SnapshotError};
use super::rng::QuizRng;

/// One round's question.
///
/// Options are distinct catalog identifiers in display order.
/// SmallVec keeps the usual three or four options off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRepr")]
pub struct Question {
    options: SmallVec<[String; 4]>,
    correct: usize,
}

/// Unchecked wire form of a `Question`.
#[derive(Deserialize)]
struct QuestionRepr {
    options: SmallVec<[String; 4]>,
    correct: usize,
}

impl TryFrom<QuestionRepr> for Question {
    type Error = SnapshotError;

    fn try_from(repr: QuestionRepr) -> Result<Self, Self::Error> {
        let question = Self {
            options: repr.options,
            correct: repr.correct,
        };
        if question.is_well_formed() {
            Ok(question)
        } else {
            Err(SnapshotError::Corrupt("malformed question"))
        }
    }
}

impl Question {
    /// Draw a question from the catalog.
    ///
    /// Samples `option_count` distinct identifiers uniformly without
    /// replacement, then picks the correct index uniformly.
    pub fn draw(
        catalog: &Catalog,
        option_count: usize,
        rng: &mut QuizRng,
    ) -> Result<Self, ConfigError> {
        if option_count < 2 {
            return Err(ConfigError::TooFewOptions(option_count));
        }
        let too_small = ConfigError::CatalogTooSmall {
            size: catalog.len(),
            required: option_count,
        };
        let picked = rng
            .sample_distinct(catalog.len(), option_count)
            .ok_or_else(|| too_small.clone())?;
        let options = picked
            .into_iter()
            .map(|i| catalog.get(i).map(str::to_string))
            .collect::<Option<SmallVec<[String; 4]>>>()
            .ok_or(too_small)?;
        let correct = rng.gen_range_usize(0..option_count);
        Ok(Self { options, correct })
    }

    /// Build a question from explicit parts.
    ///
    /// Returns `None` if the correct index is out of range, there are fewer
    /// than two options, or options repeat.
    #[must_use]
    pub fn from_parts<S: Into<String>>(
        options: impl IntoIterator<Item = S>,
        correct: usize,
    ) -> Option<Self> {
        let question = Self {
            options: options.into_iter().map(Into::into).collect(),
            correct,
        };
        question.is_well_formed().then_some(question)
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the question has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// The identifier the player is asked to find.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.options[self.correct]
    }

    /// Get an option by index.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Check if `index` is the correct choice.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        if self.options.len() < 2 || self.correct >= self.options.len() {
            return false;
        }
        self.options
            .iter()
            .enumerate()
            .all(|(i, a)| self.options[i + 1..].iter().all(|b| a != b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_distinct_options() {
        let catalog = Catalog::default();
        let mut rng = QuizRng::new(42);

        for _ in 0..100 {
            let q = Question::draw(&catalog, 3, &mut rng).unwrap();
            assert_eq!(q.len(), 3);
            assert!(q.correct_index() < 3);
            assert!(q.is_well_formed());
            assert!(q.options().iter().all(|o| catalog.contains(o)));
        }
    }

    #[test]
    fn test_draw_is_deterministic() {
        let catalog = Catalog::default();
        let a = Question::draw(&catalog, 3, &mut QuizRng::new(5)).unwrap();
        let b = Question::draw(&catalog, 3, &mut QuizRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_catalog_too_small() {
        let catalog = Catalog::new(["A", "B"]);
        let err = Question::draw(&catalog, 3, &mut QuizRng::new(1)).unwrap_err();
        assert_eq!(err, ConfigError::CatalogTooSmall { size: 2, required: 3 });
    }

    #[test]
    fn test_draw_exact_size_catalog() {
        let catalog = Catalog::new(["A", "B", "C"]);
        let q = Question::draw(&catalog, 3, &mut QuizRng::new(1)).unwrap();
        let mut options = q.options().to_vec();
        options.sort();
        assert_eq!(options, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_correct_index_varies() {
        let catalog = Catalog::default();
        let mut rng = QuizRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[Question::draw(&catalog, 3, &mut rng).unwrap().correct_index()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_from_parts() {
        let q = Question::from_parts(["Spain", "Italy", "US"], 1).unwrap();
        assert_eq!(q.target(), "Italy");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert_eq!(q.option(2), Some("US"));
        assert_eq!(q.option(3), None);

        assert!(Question::from_parts(["Spain", "Italy", "US"], 3).is_none());
        assert!(Question::from_parts(["Spain", "Spain", "US"], 0).is_none());
        assert!(Question::from_parts(["Spain"], 0).is_none());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let valid = r#"{"options":["A","B","C"],"correct":1}"#;
        let q: Question = serde_json::from_str(valid).unwrap();
        assert_eq!(q.target(), "B");

        let out_of_range = r#"{"options":["A","B","C"],"correct":3}"#;
        assert!(serde_json::from_str::<Question>(out_of_range).is_err());

        let repeated = r#"{"options":["A","A","C"],"correct":0}"#;
        assert!(serde_json::from_str::<Question>(repeated).is_err());
    }
}
