//! Fuzz the odometer walker: a bounded round from any decimal start word
//! must stay within the word length and terminate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use linea_issue::{walk_round, Alphabet};

#[derive(Arbitrary, Debug)]
struct WalkInput {
    digits: Vec<u8>,
    include_last: bool,
}

fuzz_target!(|input: WalkInput| {
    // Cap the word length so a full round stays cheap
    if input.digits.is_empty() || input.digits.len() > 4 {
        return;
    }
    let start: String = input
        .digits
        .iter()
        .map(|d| char::from(b'0' + d % 10))
        .collect();

    let round = walk_round(Alphabet::decimal(), &start)
        .expect("decimal start word must be accepted")
        .include_last(input.include_last);

    let expected = 10usize.pow(start.len() as u32) + usize::from(input.include_last);
    let mut count = 0usize;
    for word in round {
        assert_eq!(word.len(), start.len());
        count += 1;
    }
    assert_eq!(count, expected);
});
