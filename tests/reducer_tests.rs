//! Terminal reducer tests: element access, counting, folds and copies.

mod test_data_gen;

use spanseq::prelude::*;
use test_data_gen::random_buffer;

#[test]
fn test_single_family() {
    let empty: [i32; 0] = [];
    assert_eq!(from_buffer(&empty).single_or_default(), Ok(0));
    assert_eq!(from_buffer(&[7]).single_or_default(), Ok(7));
    assert_eq!(from_buffer(&[7]).single(), Ok(7));
    assert_eq!(from_buffer(&empty).single(), Err(Error::EmptySequence));
    assert_eq!(from_buffer(&[7, 8]).single(), Err(Error::MultipleElements));
    assert_eq!(
        from_buffer(&[7, 8]).single_or_default(),
        Err(Error::MultipleElements)
    );
    assert_eq!(from_buffer(&[1, 2, 3]).single_match(|v| *v == 2), Ok(2));
    assert_eq!(from_buffer(&[1, 2, 3]).single_match_or_default(|v| *v > 5), Ok(0));
    assert_eq!(
        from_buffer(&[1, 2, 3]).single_match(|v| *v > 1),
        Err(Error::MultipleElements)
    );
}

#[test]
fn test_first_and_last() {
    let data = [4, 8, 15, 16, 23, 42];
    assert_eq!(from_buffer(&data).first(), Ok(4));
    assert_eq!(from_buffer(&data).last(), Ok(42));
    assert_eq!(from_buffer(&data).first_match(|v| v % 2 == 1), Ok(15));
    assert_eq!(from_buffer(&data).last_match(|v| v % 2 == 1), Ok(23));
    assert_eq!(from_buffer(&data).first_match(|v| *v > 100), Err(Error::EmptySequence));
    assert_eq!(from_buffer(&data).last_match_or_default(|v| *v > 100), 0);
    assert_eq!(from_buffer(&data).filter(|v| *v > 100).first_or_default(), 0);
    assert_eq!(range(0, 0).unwrap().last_or_default(), 0);
    assert_eq!(from_buffer(&data).first_match_or_default(|v| *v > 20), 23);
}

#[test]
fn test_copy_into_undersized_destination() {
    let mut dest = [0; 15];
    let result = range(0, 60).unwrap().filter(|v| v % 2 == 0).copy_into(&mut dest);
    assert_eq!(result, Err(Error::DestinationTooSmall { capacity: 15 }));
}

#[test]
fn test_copy_into_returns_written_prefix() {
    let mut dest = [0; 30];
    let written = range(0, 60)
        .unwrap()
        .filter(|v| v % 2 == 0)
        .copy_into(&mut dest)
        .unwrap()
        .len();
    assert_eq!(written, 30);
    assert_eq!(dest[29], 58);

    let mut roomy = [-1; 8];
    let copied = repeat(5, 3).unwrap().copy_into(&mut roomy).unwrap();
    assert_eq!(copied, &[5, 5, 5]);
    assert_eq!(roomy[3], -1);
}

#[test]
fn test_reverse_into() {
    let mut dest = [0; 6];
    assert_eq!(
        range(1, 6).unwrap().reverse_into(&mut dest).unwrap(),
        &[6, 5, 4, 3, 2, 1]
    );
    let mut small = [0; 2];
    assert!(range(1, 6).unwrap().reverse_into(&mut small).is_err());

    let mut out = [0; 4];
    assert_eq!(reverse_slice_into(&[1, 2, 3, 4], &mut out).unwrap(), &[4, 3, 2, 1]);
}

#[test]
fn test_take_into_partial() {
    let mut dest = [0; 4];
    assert_eq!(range(10, 2).unwrap().take_into(&mut dest), &[10, 11]);
    assert_eq!(range(10, 20).unwrap().take_into(&mut dest), &[10, 11, 12, 13]);
}

#[test]
fn test_counting() {
    let data = random_buffer(500, 50, 17);
    let positives = data.iter().filter(|v| **v > 0).count();
    assert_eq!(from_buffer(&data).count(), 500);
    assert_eq!(from_buffer(&data).count_match(|v| *v > 0), positives);
    assert_eq!(from_buffer(&data).select(|v| v > 0).count_true(), positives);
    assert_eq!(from_buffer(&data).any_match(|v| *v > 0), positives > 0);
    assert!(from_buffer(&data).all(|v| (-50..50).contains(v)));
    assert!(!range(0, 0).unwrap().any());
    assert!(range(0, 1).unwrap().filter(|v| *v == 0).any());
}

#[test]
fn test_aggregate_forms() {
    let data = [1, 2, 3, 4, 5];
    assert_eq!(from_buffer(&data).aggregate(10, |acc, v| acc + v), 25);
    assert_eq!(
        from_buffer(&data).aggregate_map(String::new(), |acc, v| acc + &v.to_string(), |s| s.len()),
        5
    );
    assert_eq!(from_buffer(&data).reduce(|a, b| a * b), Ok(120));
    assert_eq!(from_buffer(&data).reduce_map(i32::min, |m| -m), Ok(-1));
    let empty: [i32; 0] = [];
    assert_eq!(from_buffer(&empty).reduce(|a, b| a + b), Err(Error::EmptySequence));
}

#[test]
fn test_collecting() {
    let data = random_buffer(1000, 100, 3);
    let expected: Vec<i32> = data.iter().copied().filter(|v| v % 7 == 0).collect();

    assert_eq!(from_buffer(&data).filter(|v| v % 7 == 0).to_vec(), expected);
    let tiny = CollectConfig::default().with_chunk_len(1);
    assert_eq!(
        from_buffer(&data).filter(|v| v % 7 == 0).to_vec_with(&tiny).unwrap(),
        expected
    );
    assert_eq!(
        &*from_buffer(&data).filter(|v| v % 7 == 0).to_array(),
        expected.as_slice()
    );
}
