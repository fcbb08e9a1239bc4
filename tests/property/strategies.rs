//! Generators for DNA-shaped inputs.

use proptest::prelude::*;

/// A short valid sequence. Short and over a 4-letter alphabet so that
/// overlaps and containment actually occur.
pub fn sequence() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ACGT]{1,12}").unwrap()
}

/// Like [`sequence`] but over two letters, for dense repeats.
pub fn repetitive_sequence() -> impl Strategy<Value = String> {
    prop::string::string_regex("[AT]{1,16}").unwrap()
}

/// A string that contains at least one symbol outside the alphabet.
pub fn invalid_sequence() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[ACGT]{0,6}").unwrap(),
        prop::sample::select(vec!['a', 'c', 'g', 't', 'N', 'U', 'X', ' ', '-', 'é']),
        prop::string::string_regex("[ACGT]{0,6}").unwrap(),
    )
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

/// Insert order for a corpus, duplicates included.
pub fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sequence(), 0..20)
}
