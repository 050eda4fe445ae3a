use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::puzzle::{GeneratorConfig, Puzzle, PuzzleError, PuzzleGenerator};
use crate::solver::ExpressionSolver;

#[test]
fn test_generated_puzzles_follow_the_rules() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let generator = PuzzleGenerator::new();
    let solver = ExpressionSolver::new();

    for _ in 0..50 {
        let result = generator.generate(&mut rng);
        assert!(result.is_ok());
        if let Ok(puzzle) = result {
            let numbers = puzzle.numbers();
            assert_eq!(numbers.len(), 4);
            assert!(numbers.iter().all(|n| (1..=13).contains(n)));
            for (i, a) in numbers.iter().enumerate() {
                assert!(numbers.iter().skip(i + 1).all(|b| b != a));
            }
            assert_eq!(solver.is_solvable(numbers), Ok(true));
        }
    }
}

#[test]
fn test_same_seed_same_puzzle() {
    let generator = PuzzleGenerator::new();
    let first = generator.generate(&mut ChaCha8Rng::seed_from_u64(7));
    let second = generator.generate(&mut ChaCha8Rng::seed_from_u64(7));
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn test_draw_is_distinct_and_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let generator = PuzzleGenerator::new();
    for _ in 0..200 {
        let mut numbers = generator.draw(&mut rng);
        assert_eq!(numbers.len(), 4);
        assert!(numbers.iter().all(|n| (1..=13).contains(n)));
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 4);
    }
}

#[test]
fn test_draw_covers_whole_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let generator = PuzzleGenerator::new();
    let mut seen = [false; 13];
    for _ in 0..500 {
        for n in generator.draw(&mut rng) {
            if let Some(slot) = usize::try_from(n - 1).ok().and_then(|i| seen.get_mut(i)) {
                *slot = true;
            }
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_generation_exhausted() {
    let config = GeneratorConfig {
        size: 4,
        min: 1,
        max: 4,
        target: 1000,
        max_attempts: 5,
    };
    let generator = PuzzleGenerator::with_config(config);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            generator.generate(&mut rng),
            Err(PuzzleError::GenerationExhausted { attempts: 5 })
        );
    }
}

#[test]
fn test_narrow_range_still_generates() {
    let config = GeneratorConfig {
        max: 4,
        ..GeneratorConfig::default()
    };
    let generator = PuzzleGenerator::with_config(config);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let result = generator.generate(&mut rng);
        assert!(result.is_ok());
        if let Ok(puzzle) = result {
            let mut numbers = puzzle.into_numbers();
            numbers.sort_unstable();
            assert_eq!(numbers, vec![1, 2, 3, 4]);
        }
    }
}

#[test]
fn test_invalid_configs() {
    let too_narrow = GeneratorConfig {
        min: 1,
        max: 3,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        PuzzleGenerator::with_config(too_narrow),
        Err(PuzzleError::InvalidConfig(_))
    ));

    let inverted = GeneratorConfig {
        min: 13,
        max: 1,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        inverted.validate(),
        Err(PuzzleError::InvalidConfig(_))
    ));

    let no_attempts = GeneratorConfig {
        max_attempts: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        no_attempts.validate(),
        Err(PuzzleError::InvalidConfig(_))
    ));

    assert!(GeneratorConfig::default().validate().is_ok());
}

#[test]
fn test_puzzle_validation() {
    assert!(Puzzle::new(vec![4, 1, 8, 7]).is_ok());
    assert_eq!(
        Puzzle::new(vec![4, 1, 8]),
        Err(PuzzleError::WrongSize {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(
        Puzzle::new(vec![4, 1, 8, 14]),
        Err(PuzzleError::OutOfRange {
            value: 14,
            min: 1,
            max: 13
        })
    );
    assert_eq!(
        Puzzle::new(vec![0, 1, 8, 7]),
        Err(PuzzleError::OutOfRange {
            value: 0,
            min: 1,
            max: 13
        })
    );
    assert_eq!(
        Puzzle::new(vec![3, 3, 8, 8]),
        Err(PuzzleError::Duplicate(3))
    );
}

#[test]
fn test_puzzle_display() {
    let puzzle = Puzzle::new(vec![4, 1, 8, 7]);
    assert!(puzzle.is_ok());
    if let Ok(puzzle) = puzzle {
        assert_eq!(puzzle.to_string(), "4 1 8 7");
    }
}
