//! Random question selection
//!
//! One random source is seeded when the selector is built and shared by
//! every pick. Not suitable for anything security related.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::store::Question;

/// Placeholder shown when the store holds no questions
pub const NO_QUESTIONS: &str = "you don't have any questions!";

/// Outcome of a pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Question(Question),
    /// The key set was empty
    Empty,
}

impl Selection {
    /// Displayable text; the sentinel for [`Selection::Empty`]
    pub fn text(&self) -> &str {
        match self {
            Selection::Question(q) => q,
            Selection::Empty => NO_QUESTIONS,
        }
    }

    pub fn into_question(self) -> Option<Question> {
        match self {
            Selection::Question(q) => Some(q),
            Selection::Empty => None,
        }
    }
}

/// Picks questions uniformly at random from a key snapshot
#[derive(Debug)]
pub struct QuestionSelector {
    rng: Mutex<StdRng>,
    avoid_repeat: bool,
}

impl QuestionSelector {
    /// Selector seeded from OS entropy
    pub fn new(avoid_repeat: bool) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            avoid_repeat,
        }
    }

    /// Deterministic selector for tests
    pub fn with_seed(seed: u64, avoid_repeat: bool) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            avoid_repeat,
        }
    }

    pub fn avoid_repeat(&self) -> bool {
        self.avoid_repeat
    }

    /// Pick any question from `keys`
    pub fn pick_random(&self, keys: &[Question]) -> Selection {
        self.pick(keys, None)
    }

    /// Pick a question from `keys`, skipping `previous` when repeat
    /// avoidance is on and another choice exists
    pub fn pick(&self, keys: &[Question], previous: Option<&str>) -> Selection {
        if keys.is_empty() {
            return Selection::Empty;
        }

        let mut candidates: Vec<&Question> = keys.iter().collect();
        if self.avoid_repeat && keys.len() > 1 {
            if let Some(prev) = previous {
                candidates.retain(|q| q.as_str() != prev);
                if candidates.is_empty() {
                    candidates = keys.iter().collect();
                }
            }
        }

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        candidates
            .choose(&mut *rng)
            .map(|q| Selection::Question((*q).clone()))
            .unwrap_or(Selection::Empty)
    }
}

impl Default for QuestionSelector {
    fn default() -> Self {
        Self::new(true)
    }
}
