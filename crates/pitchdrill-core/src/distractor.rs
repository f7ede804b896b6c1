//! Multiple-choice option assembly.
//!
//! Builds the 4-option answer set around a correct answer: small allowed
//! universes are used whole and padded from the full catalogue, larger ones
//! contribute three random wrong answers. The correct answer's position is
//! never predictable from construction order.

use rand::seq::SliceRandom;
use rand::Rng;

/// Builds the option set for a question.
///
/// Guarantees exactly one occurrence of `correct` and at most 4 options;
/// fewer only when `allowed` and `catalogue` together cannot fill the set.
/// `catalogue` is the full answer catalogue used for padding, already
/// excluding any degenerate sentinel; padding draws may therefore fall
/// outside the caller's allowed universe.
pub fn select_options(
    correct: &str,
    allowed: &[&str],
    catalogue: &[&str],
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut options: Vec<String>;

    if allowed.len() <= 4 {
        options = allowed.iter().map(|s| s.to_string()).collect();
        if !options.iter().any(|o| o == correct) {
            if options.len() < 4 {
                options.push(correct.to_string());
            } else {
                options[0] = correct.to_string();
            }
        }
        pad_from_catalogue(&mut options, catalogue, rng);
    } else {
        let wrong: Vec<&str> = allowed.iter().copied().filter(|a| *a != correct).collect();
        if wrong.len() >= 3 {
            options = wrong
                .choose_multiple(rng, 3)
                .map(|s| s.to_string())
                .collect();
            options.push(correct.to_string());
        } else {
            options = wrong.iter().map(|s| s.to_string()).collect();
            options.push(correct.to_string());
            pad_from_catalogue(&mut options, catalogue, rng);
        }
    }

    options.shuffle(rng);
    options
}

/// Fills `options` up to 4 with distinct random catalogue values, stopping
/// early when the catalogue is exhausted.
fn pad_from_catalogue(options: &mut Vec<String>, catalogue: &[&str], rng: &mut impl Rng) {
    while options.len() < 4 {
        let remaining: Vec<&str> = catalogue
            .iter()
            .copied()
            .filter(|c| !options.iter().any(|o| o == c))
            .collect();
        match remaining.choose(rng) {
            Some(pick) => options.push(pick.to_string()),
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pitchdrill_theory::answer_intervals;
    use pretty_assertions::assert_eq;

    fn catalogue() -> Vec<&'static str> {
        answer_intervals().map(|i| i.name).collect()
    }

    fn assert_well_formed(options: &[String], correct: &str) {
        assert_eq!(options.len(), 4, "want 4 options, got {options:?}");
        assert_eq!(
            options.iter().filter(|o| *o == correct).count(),
            1,
            "correct answer must appear exactly once in {options:?}"
        );
        for option in options {
            assert_eq!(
                options.iter().filter(|o| o == &option).count(),
                1,
                "duplicate option {option} in {options:?}"
            );
        }
    }

    #[test]
    fn test_universe_of_one() {
        let mut rng = create_rng(1);
        let options = select_options("tritone", &["tritone"], &catalogue(), &mut rng);
        assert_well_formed(&options, "tritone");
    }

    #[test]
    fn test_universe_of_three() {
        let mut rng = create_rng(2);
        let allowed = ["minor_second", "major_second", "minor_third"];
        for _ in 0..50 {
            let options = select_options("major_second", &allowed, &catalogue(), &mut rng);
            assert_well_formed(&options, "major_second");
            // the whole allowed set is always present
            for a in allowed {
                assert!(options.iter().any(|o| o == a), "{a} missing from {options:?}");
            }
        }
    }

    #[test]
    fn test_universe_of_four_without_correct() {
        let mut rng = create_rng(3);
        let allowed = ["minor_second", "major_second", "minor_third", "major_third"];
        let options = select_options("octave", &allowed, &catalogue(), &mut rng);
        assert_well_formed(&options, "octave");
    }

    #[test]
    fn test_universe_of_five() {
        let mut rng = create_rng(4);
        let allowed = [
            "minor_second",
            "major_second",
            "minor_third",
            "major_third",
            "perfect_fourth",
        ];
        for _ in 0..50 {
            let options = select_options("minor_third", &allowed, &catalogue(), &mut rng);
            assert_well_formed(&options, "minor_third");
            // with a large-enough universe every option stays inside it
            for option in &options {
                assert!(allowed.contains(&option.as_str()), "{option} outside universe");
            }
        }
    }

    #[test]
    fn test_full_catalogue_universe() {
        let mut rng = create_rng(5);
        let full = catalogue();
        for _ in 0..50 {
            let options = select_options("perfect_fifth", &full, &full, &mut rng);
            assert_well_formed(&options, "perfect_fifth");
        }
    }

    #[test]
    fn test_exhausted_catalogue_stops_short() {
        let mut rng = create_rng(6);
        let tiny = ["major", "minor"];
        let options = select_options("major", &["major"], &tiny, &mut rng);
        // catalogue only has 2 values: the set cannot reach 4
        assert_eq!(options.len(), 2);
        assert_eq!(options.iter().filter(|o| *o == "major").count(), 1);
    }

    #[test]
    fn test_correct_position_varies() {
        let mut rng = create_rng(7);
        let full = catalogue();
        let mut positions = [0usize; 4];
        for _ in 0..200 {
            let options = select_options("tritone", &full, &full, &mut rng);
            let at = options.iter().position(|o| o == "tritone").unwrap();
            positions[at] += 1;
        }
        assert!(
            positions.iter().all(|&c| c > 0),
            "correct answer never moved: {positions:?}"
        );
    }
}
