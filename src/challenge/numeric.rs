//! Arithmetic and number-sequence puzzles.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::OPTION_COUNT;

/// Smallest offset range used when sampling distractors
const MIN_VARIANCE: i64 = 2;

/// Sampling attempts before the offset range is widened
const ATTEMPTS_PER_WIDTH: usize = 32;

/// How many times the offset range doubles before falling back to
/// consecutive values
const MAX_WIDENINGS: usize = 3;

/// Arithmetic operation used by math challenges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MathOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl MathOperator {
    pub const ALL: [MathOperator; 4] = [
        MathOperator::Add,
        MathOperator::Subtract,
        MathOperator::Multiply,
        MathOperator::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            MathOperator::Add => "+",
            MathOperator::Subtract => "-",
            MathOperator::Multiply => "×",
            MathOperator::Divide => "÷",
        }
    }
}

impl fmt::Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MathOperator::Add => "add",
            MathOperator::Subtract => "subtract",
            MathOperator::Multiply => "multiply",
            MathOperator::Divide => "divide",
        };
        f.write_str(name)
    }
}

/// A question with a single integer answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericProblem {
    pub question: String,
    pub answer: i64,
}

/// Largest operand for addition and subtraction at a given age
pub fn operand_max(age: u32) -> i64 {
    match age {
        0..=5 => 10,
        6..=7 => 20,
        8..=9 => 50,
        _ => 100,
    }
}

/// Half-width of the range distractors are drawn from
pub fn distractor_variance(age: u32) -> i64 {
    match age {
        0..=7 => 5,
        8..=10 => 10,
        _ => 20,
    }
}

/// Generate an arithmetic question for `op`
pub fn math_problem<R: Rng + ?Sized>(op: MathOperator, age: u32, rng: &mut R) -> NumericProblem {
    let max = operand_max(age);

    let (a, b, answer) = match op {
        MathOperator::Add => {
            let a = rng.gen_range(1..=max);
            let b = rng.gen_range(1..=max);
            (a, b, a + b)
        }
        MathOperator::Subtract => {
            let x = rng.gen_range(1..=max);
            let y = rng.gen_range(1..=max);
            let (a, b) = if x >= y { (x, y) } else { (y, x) };
            (a, b, a - b)
        }
        MathOperator::Multiply => {
            let upper = if age <= 9 { 5 } else { 12 };
            let a = rng.gen_range(2..=upper);
            let b = rng.gen_range(2..=10);
            (a, b, a * b)
        }
        MathOperator::Divide => {
            // Built backwards from the quotient so there is never a remainder
            let divisor = rng.gen_range(2..=9);
            let upper = if age <= 10 { 5 } else { 12 };
            let quotient = rng.gen_range(2..=upper);
            (divisor * quotient, divisor, quotient)
        }
    };

    NumericProblem {
        question: format!("{} {} {} = ?", a, op.symbol(), b),
        answer,
    }
}

/// Kind of number sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Arithmetic,
    Geometric,
    FibonacciLike,
}

/// Generate a "what comes next" puzzle. Children under 8 only get
/// arithmetic progressions.
pub fn sequence_problem<R: Rng + ?Sized>(age: u32, rng: &mut R) -> NumericProblem {
    let kind = if age < 8 {
        SequenceKind::Arithmetic
    } else {
        match rng.gen_range(0..3) {
            0 => SequenceKind::Arithmetic,
            1 => SequenceKind::Geometric,
            _ => SequenceKind::FibonacciLike,
        }
    };

    let terms = sequence_terms(kind, rng);
    NumericProblem {
        question: format!(
            "Sequence: {}, {}, {}, {}, ?",
            terms[0], terms[1], terms[2], terms[3]
        ),
        answer: terms[4],
    }
}

fn sequence_terms<R: Rng + ?Sized>(kind: SequenceKind, rng: &mut R) -> [i64; 5] {
    let mut terms = [0i64; 5];
    match kind {
        SequenceKind::Arithmetic => {
            let start = rng.gen_range(1..=10);
            let diff = rng.gen_range(2..=5);
            for (i, term) in terms.iter_mut().enumerate() {
                *term = start + i as i64 * diff;
            }
        }
        SequenceKind::Geometric => {
            let start: i64 = rng.gen_range(1..=3);
            for (i, term) in terms.iter_mut().enumerate() {
                *term = start << i;
            }
        }
        SequenceKind::FibonacciLike => {
            let seed = rng.gen_range(1..=3);
            terms[0] = seed;
            terms[1] = seed;
            for i in 2..terms.len() {
                terms[i] = terms[i - 1] + terms[i - 2];
            }
        }
    }
    terms
}

/// Produce the wrong options for a numeric answer.
///
/// Offsets are sampled in `[-variance, variance)`. Values equal to `correct`
/// are rejected, and so are negative values when `correct` is non-negative.
/// The sampling range doubles after repeated collisions and, if that still
/// does not yield enough values, the nearest unused integers are taken.
pub fn numeric_distractors<R: Rng + ?Sized>(
    correct: i64,
    variance: i64,
    rng: &mut R,
) -> Vec<i64> {
    let wanted = OPTION_COUNT - 1;
    let mut picked = BTreeSet::new();
    let mut variance = variance.max(MIN_VARIANCE);

    for _ in 0..=MAX_WIDENINGS {
        for _ in 0..ATTEMPTS_PER_WIDTH {
            if picked.len() == wanted {
                return picked.into_iter().collect();
            }

            let offset = rng.gen_range(-variance..variance);
            if let Some(candidate) = correct.checked_add(offset) {
                if accepts(correct, candidate) {
                    picked.insert(candidate);
                }
            }
        }
        variance = variance.saturating_mul(2);
    }

    let mut step: i64 = 1;
    while picked.len() < wanted {
        for candidate in [correct.checked_add(step), correct.checked_sub(step)]
            .into_iter()
            .flatten()
        {
            if picked.len() < wanted && accepts(correct, candidate) {
                picked.insert(candidate);
            }
        }
        step += 1;
    }

    picked.into_iter().collect()
}

fn accepts(correct: i64, candidate: i64) -> bool {
    candidate != correct && !(correct >= 0 && candidate < 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn operands(question: &str) -> (i64, String, i64) {
        let parts: Vec<&str> = question.split_whitespace().collect();
        assert_eq!(parts.len(), 5, "unexpected question: {}", question);
        assert_eq!(parts[3], "=");
        assert_eq!(parts[4], "?");
        (
            parts[0].parse().unwrap(),
            parts[1].to_string(),
            parts[2].parse().unwrap(),
        )
    }

    #[test]
    fn test_operand_bands() {
        assert_eq!(operand_max(3), 10);
        assert_eq!(operand_max(5), 10);
        assert_eq!(operand_max(6), 20);
        assert_eq!(operand_max(7), 20);
        assert_eq!(operand_max(9), 50);
        assert_eq!(operand_max(10), 100);
        assert_eq!(operand_max(18), 100);
    }

    #[test]
    fn test_variance_bands() {
        assert_eq!(distractor_variance(7), 5);
        assert_eq!(distractor_variance(8), 10);
        assert_eq!(distractor_variance(10), 10);
        assert_eq!(distractor_variance(11), 20);
    }

    #[test]
    fn test_answers_match_arithmetic() {
        let mut rng = StdRng::seed_from_u64(42);

        for age in 3..=18 {
            for op in MathOperator::ALL {
                for _ in 0..25 {
                    let problem = math_problem(op, age, &mut rng);
                    let (a, symbol, b) = operands(&problem.question);
                    assert_eq!(symbol, op.symbol());

                    let expected = match op {
                        MathOperator::Add => a + b,
                        MathOperator::Subtract => a - b,
                        MathOperator::Multiply => a * b,
                        MathOperator::Divide => {
                            assert_eq!(a % b, 0, "division with remainder: {}", problem.question);
                            a / b
                        }
                    };
                    assert_eq!(problem.answer, expected);
                }
            }
        }
    }

    #[test]
    fn test_subtraction_never_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let problem = math_problem(MathOperator::Subtract, 6, &mut rng);
            assert!(problem.answer >= 0);
        }
    }

    #[test]
    fn test_young_child_operands_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..500 {
            let op = if rng.gen_bool(0.5) {
                MathOperator::Add
            } else {
                MathOperator::Subtract
            };
            let problem = math_problem(op, 6, &mut rng);
            let (a, _, b) = operands(&problem.question);
            assert!((1..=20).contains(&a));
            assert!((1..=20).contains(&b));
        }
    }

    #[test]
    fn test_sequences_for_young_children_are_arithmetic() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let problem = sequence_problem(6, &mut rng);
            let body = problem
                .question
                .strip_prefix("Sequence: ")
                .and_then(|rest| rest.strip_suffix(", ?"))
                .unwrap();
            let terms: Vec<i64> = body.split(", ").map(|t| t.parse().unwrap()).collect();
            assert_eq!(terms.len(), 4);

            let diff = terms[1] - terms[0];
            assert!((2..=5).contains(&diff));
            assert!(terms.windows(2).all(|w| w[1] - w[0] == diff));
            assert_eq!(problem.answer, terms[3] + diff);
        }
    }

    #[test]
    fn test_sequence_terms() {
        let mut rng = StdRng::seed_from_u64(1);

        let geometric = sequence_terms(SequenceKind::Geometric, &mut rng);
        assert!(geometric.windows(2).all(|w| w[1] == w[0] * 2));

        let fib = sequence_terms(SequenceKind::FibonacciLike, &mut rng);
        assert_eq!(fib[0], fib[1]);
        assert_eq!(fib[4], fib[3] + fib[2]);
    }

    #[test]
    fn test_distractors_are_distinct_and_valid() {
        let mut rng = StdRng::seed_from_u64(12);

        for correct in [0, 1, 2, 7, 45, 120] {
            for variance in [5, 10, 20] {
                let wrong = numeric_distractors(correct, variance, &mut rng);
                assert_eq!(wrong.len(), OPTION_COUNT - 1);

                let unique: BTreeSet<i64> = wrong.iter().copied().collect();
                assert_eq!(unique.len(), wrong.len());
                assert!(!wrong.contains(&correct));
                assert!(wrong.iter().all(|v| *v >= 0));
            }
        }
    }

    #[test]
    fn test_distractors_terminate_with_zero_variance() {
        let mut rng = StdRng::seed_from_u64(0);
        let wrong = numeric_distractors(0, 0, &mut rng);
        assert_eq!(wrong.len(), OPTION_COUNT - 1);
        assert!(!wrong.contains(&0));
        assert!(wrong.iter().all(|v| *v > 0));
    }

    #[test]
    fn test_distractors_near_integer_limit() {
        let mut rng = StdRng::seed_from_u64(0);
        let wrong = numeric_distractors(i64::MAX, 5, &mut rng);
        assert_eq!(wrong.len(), OPTION_COUNT - 1);
        assert!(!wrong.contains(&i64::MAX));
    }

    #[test]
    fn test_negative_answers_allow_negative_distractors() {
        let mut rng = StdRng::seed_from_u64(4);
        let wrong = numeric_distractors(-3, 5, &mut rng);
        assert_eq!(wrong.len(), OPTION_COUNT - 1);
        assert!(!wrong.contains(&-3));
    }
}
