//! Combinators cross-checked against std iterator adapters.

mod test_data_gen;

use spanseq::prelude::*;
use test_data_gen::{random_buffer, Lcg};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Token {
    #[default]
    Blank,
    Number(i64),
    Word(&'static str),
}

#[derive(Debug, PartialEq, Default)]
struct Number(i64);

impl TryFrom<Token> for Number {
    type Error = ();

    fn try_from(token: Token) -> std::result::Result<Self, ()> {
        match token {
            Token::Number(n) => Ok(Number(n)),
            _ => Err(()),
        }
    }
}

#[test]
fn test_filter_count_matches_reference() {
    for seed in 0..50 {
        let data = random_buffer(seed as usize * 7, 100, seed);
        let expected = data.iter().filter(|v| **v % 3 == 0).count();
        assert_eq!(from_buffer(&data).filter(|v| v % 3 == 0).count(), expected);
    }
}

#[test]
fn test_select_filter_slice_match_reference() {
    let mut rng = Lcg::new(1);
    for seed in 0..50 {
        let data = random_buffer(200, 1000, seed);
        let offset = rng.below(100);
        let take = rng.below(100);
        let expected: Vec<i64> = data
            .iter()
            .map(|v| *v as i64 * 3)
            .filter(|v| v % 2 == 0)
            .skip(offset)
            .take(take)
            .collect();
        let actual = from_buffer(&data)
            .select(|v| v as i64 * 3)
            .filter(|v| v % 2 == 0)
            .slice(offset, take)
            .to_vec();
        assert_eq!(actual, expected, "seed {}", seed);
    }
}

#[test]
fn test_filter_with_small_pulls() {
    let data: Vec<i32> = (0..100).collect();
    let mut cursor = from_buffer(&data).filter(|v| v % 10 == 0);
    let mut out = [0; 3];
    let mut seen = Vec::new();
    loop {
        let pulled = cursor.pull(&mut out);
        if pulled == 0 {
            break;
        }
        seen.extend_from_slice(&out[..pulled]);
    }
    assert_eq!(seen, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);
}

#[test]
fn test_slice_lengths() {
    assert_eq!(range(0, 10).unwrap().slice(3, 4).known_len(), Some(4));
    assert_eq!(range(0, 10).unwrap().slice(8, 4).known_len(), Some(2));
    assert_eq!(range(0, 10).unwrap().slice(20, 4).to_vec(), Vec::<i32>::new());
    assert_eq!(range(0, 10).unwrap().skip(7).to_vec(), vec![7, 8, 9]);
}

#[test]
fn test_of_type_narrowing() {
    let wide = [1i64, 300, -4, 255, 256, 0];
    let bytes = from_buffer(&wide).of_type::<u8>().to_vec();
    assert_eq!(bytes, vec![1, 255, 0]);
}

#[test]
fn test_of_type_enum_variant() {
    let tokens = [
        Token::Word("a"),
        Token::Number(4),
        Token::Blank,
        Token::Number(-2),
    ];
    let numbers = from_buffer(&tokens).of_type::<Number>().to_vec();
    assert_eq!(numbers, vec![Number(4), Number(-2)]);
}

#[test]
fn test_cursor_iterates() {
    let data = [1, 2, 3, 4];
    let doubled: Vec<i32> = from_buffer(&data).select(|v| v * 2).into_iter().collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);

    let mut total = 0;
    for v in range(1, 4).unwrap() {
        total += v;
    }
    assert_eq!(total, 10);
}

#[test]
fn test_from_iter_source() {
    let text = "alpha beta gamma";
    let lengths = from_iter(text.split(' ')).select(|w| w.len()).to_vec();
    assert_eq!(lengths, vec![5, 4, 5]);
}

#[test]
fn test_boxed_preserves_results() {
    let data = random_buffer(64, 10, 2);
    let boxed = from_buffer(&data).filter(|v| *v > 0).boxed();
    let expected: Vec<i32> = data.iter().copied().filter(|v| *v > 0).collect();
    assert_eq!(boxed.to_vec(), expected);
}
