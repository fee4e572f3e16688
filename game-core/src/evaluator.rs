use anyhow::{Error, anyhow};
use game_types::{GuessResult, LetterResult, LetterStatus};
use std::collections::HashMap;
use std::str::FromStr;

/// How repeated letters in a guess are reconciled against the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Each position is judged on its own; a repeated letter may be reported
    /// as present more times than it occurs in the target.
    #[default]
    Simple,
    /// Exact matches are taken first, then present letters are only reported
    /// while unmatched copies remain in the target.
    DuplicateAware,
}

impl FromStr for EvaluationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(EvaluationMode::Simple),
            "duplicate-aware" | "duplicate_aware" | "wordle" => Ok(EvaluationMode::DuplicateAware),
            other => Err(anyhow!("Unknown evaluation mode: {}", other)),
        }
    }
}

pub struct LetterEvaluator;

impl LetterEvaluator {
    /// Classify the letter at `position` of `guess` against `target`.
    pub fn classify(guess: &str, position: usize, target: &str) -> LetterStatus {
        let Some(letter) = guess.chars().nth(position) else {
            return LetterStatus::Absent;
        };

        if target.chars().nth(position) == Some(letter) {
            LetterStatus::Correct
        } else if target.contains(letter) {
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        }
    }

    /// Evaluate a whole guess against the target word.
    /// Both words are compared case-insensitively; letters are reported uppercase.
    pub fn evaluate_guess(guess: &str, target: &str, mode: EvaluationMode) -> GuessResult {
        let guess = guess.to_uppercase();
        let target = target.to_uppercase();

        let statuses = match mode {
            EvaluationMode::Simple => (0..guess.chars().count())
                .map(|i| Self::classify(&guess, i, &target))
                .collect(),
            EvaluationMode::DuplicateAware => Self::reconcile_duplicates(&guess, &target),
        };

        let letters = guess
            .chars()
            .zip(statuses)
            .enumerate()
            .map(|(position, (letter, status))| LetterResult {
                letter,
                status,
                position,
            })
            .collect();

        GuessResult {
            word: guess,
            letters,
        }
    }

    fn reconcile_duplicates(guess: &str, target: &str) -> Vec<LetterStatus> {
        let guess_chars: Vec<char> = guess.chars().collect();
        let target_chars: Vec<char> = target.chars().collect();

        let mut statuses = vec![LetterStatus::Absent; guess_chars.len()];

        // Count frequency of each letter in target
        let mut target_letter_count: HashMap<char, usize> = HashMap::new();
        for ch in &target_chars {
            *target_letter_count.entry(*ch).or_insert(0) += 1;
        }

        // First pass: mark correct positions
        for (i, &ch) in guess_chars.iter().enumerate() {
            if target_chars.get(i) == Some(&ch) {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = target_letter_count.get_mut(&ch) {
                    *count -= 1;
                }
            }
        }

        // Second pass: mark present letters while copies remain
        for (i, &ch) in guess_chars.iter().enumerate() {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }

            if let Some(count) = target_letter_count.get_mut(&ch) {
                if *count > 0 {
                    statuses[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(result: &GuessResult) -> Vec<LetterStatus> {
        result.letters.iter().map(|l| l.status).collect()
    }

    #[test]
    fn test_evaluate_guess_correct_word() {
        let result = LetterEvaluator::evaluate_guess("CRANE", "CRANE", EvaluationMode::Simple);

        assert_eq!(result.letters.len(), 5);
        assert!(result.is_solved());
    }

    #[test]
    fn test_evaluate_guess_partial_match() {
        // Target: T O A S T
        // Guess:  C O A S T
        let result = LetterEvaluator::evaluate_guess("COAST", "TOAST", EvaluationMode::Simple);

        use LetterStatus::*;
        assert_eq!(statuses(&result), vec![Absent, Correct, Correct, Correct, Correct]);
    }

    #[test]
    fn test_classify_single_position() {
        assert_eq!(LetterEvaluator::classify("SLATE", 1, "BLAST"), LetterStatus::Correct);
        assert_eq!(LetterEvaluator::classify("SLATE", 0, "BLAST"), LetterStatus::Present);
        assert_eq!(LetterEvaluator::classify("SLATE", 4, "BLAST"), LetterStatus::Absent);
        // Past the end of the guess
        assert_eq!(LetterEvaluator::classify("SLATE", 7, "BLAST"), LetterStatus::Absent);
    }

    #[test]
    fn test_lowercase_input_is_normalised() {
        let result = LetterEvaluator::evaluate_guess("crane", "CRANE", EvaluationMode::Simple);
        assert_eq!(result.word, "CRANE");
        assert!(result.is_solved());
        assert!(result.letters.iter().all(|l| l.letter.is_ascii_uppercase()));
    }

    #[test]
    fn test_simple_mode_over_counts_repeated_letters() {
        // Target: R O A S T has a single S
        // Guess:  S A S S Y
        let result = LetterEvaluator::evaluate_guess("SASSY", "ROAST", EvaluationMode::Simple);

        use LetterStatus::*;
        assert_eq!(statuses(&result), vec![Present, Present, Present, Correct, Absent]);
    }

    #[test]
    fn test_duplicate_aware_mode_reconciles_counts() {
        let result =
            LetterEvaluator::evaluate_guess("SASSY", "ROAST", EvaluationMode::DuplicateAware);

        use LetterStatus::*;
        // The exact S at position 3 consumes the only S, the A is still present
        assert_eq!(statuses(&result), vec![Absent, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn test_duplicate_aware_keeps_second_copy() {
        // Target: G H O S T
        // Guess:  T O A S T  (two Ts, target has one at position 4)
        let result =
            LetterEvaluator::evaluate_guess("TOAST", "GHOST", EvaluationMode::DuplicateAware);

        use LetterStatus::*;
        assert_eq!(statuses(&result), vec![Absent, Present, Absent, Correct, Correct]);
    }

    #[test]
    fn test_correct_iff_same_letter_at_position() {
        let words = ["AUDIO", "HOMER", "JOKER", "TONER", "TOWER", "ROAST", "TOAST", "SASSY"];

        for target in words {
            for guess in words {
                for mode in [EvaluationMode::Simple, EvaluationMode::DuplicateAware] {
                    let result = LetterEvaluator::evaluate_guess(guess, target, mode);
                    assert_eq!(result.letters.len(), 5);

                    for (i, letter) in result.letters.iter().enumerate() {
                        let same = guess.as_bytes()[i] == target.as_bytes()[i];
                        assert_eq!(
                            letter.status == LetterStatus::Correct,
                            same,
                            "{} vs {} at {} ({:?})",
                            guess,
                            target,
                            i,
                            mode
                        );
                        assert_eq!(letter.position, i);
                    }
                }
            }
        }
    }

    #[test]
    fn test_evaluation_mode_parsing() {
        assert_eq!("simple".parse::<EvaluationMode>().unwrap(), EvaluationMode::Simple);
        assert_eq!(
            "Duplicate-Aware".parse::<EvaluationMode>().unwrap(),
            EvaluationMode::DuplicateAware
        );
        assert_eq!(
            "wordle".parse::<EvaluationMode>().unwrap(),
            EvaluationMode::DuplicateAware
        );
        assert!("fuzzy".parse::<EvaluationMode>().is_err());
    }
}
