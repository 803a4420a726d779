//! The word-frequency payload: tokenisation, per-token counting and count aggregation.

use combiner::Combine;
use emitter::{EmitFinal, EmitIntermediate};
use errors::*;
use mapper::{Map, MapInputKV};
use normalise::Normaliser;
use reducer::Reduce;

/// The characters a record is split on: space, horizontal tab, newline, carriage return and
/// form feed. Runs of consecutive delimiters collapse to a single split point, so no empty
/// tokens are produced.
const TOKEN_DELIMITERS: &[char] = &[' ', '\t', '\n', '\r', '\x0C'];

/// `FrequencyMapper` scans one record and emits a (count-key, 1) pair for every token that
/// survives normalisation.
///
/// Occurrences are emitted individually and in record order; a word appearing three times in a
/// record yields three pairs. Merging duplicate keys is left to the combine and reduce stages.
pub struct FrequencyMapper;

impl Map for FrequencyMapper {
    type Key = String;
    type Value = u64;
    fn map<E>(&self, input: MapInputKV, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>,
    {
        let normaliser = Normaliser::new().chain_err(|| "Error building normaliser.")?;

        for token in input.value.split(TOKEN_DELIMITERS) {
            if token.is_empty() {
                continue;
            }
            if let Some(key) = normaliser.normalise(token) {
                emitter.emit(key, 1).chain_err(
                    || "Error emitting map key-value pair.",
                )?;
            }
        }
        Ok(())
    }
}

/// `SumReducer` folds the contributions for one count-key into its final total.
///
/// The value sequence is consumed as it arrives and can be arbitrarily long; the fold never
/// buffers it, and summation order does not affect the result. An overflowing total is the one
/// fatal condition and is surfaced as an error rather than wrapping.
pub struct SumReducer;

impl Reduce for SumReducer {
    type Value = u64;
    fn reduce<I, E>(&self, key: &str, values: I, mut emitter: E) -> Result<()>
    where
        I: IntoIterator<Item = u64>,
        E: EmitFinal<u64>,
    {
        let mut total: u64 = 0;
        for value in values {
            total = total.checked_add(value).chain_err(|| {
                format!("Total for key {:?} overflowed the counter.", key)
            })?;
        }
        emitter.emit(total).chain_err(
            || format!("Error emitting value {:?}.", total),
        )?;
        Ok(())
    }
}

/// `SumCombiner` collapses a mapper's duplicate keys into one partial count before the shuffle.
///
/// Partial sums are re-emitted as ordinary intermediate pairs, so combined and uncombined
/// outputs aggregate to the same totals.
pub struct SumCombiner;

impl Combine<u64> for SumCombiner {
    fn combine<I, E>(&self, key: &str, values: I, mut emitter: E) -> Result<()>
    where
        I: IntoIterator<Item = u64>,
        E: EmitIntermediate<String, u64>,
    {
        let mut total: u64 = 0;
        for value in values {
            total = total.checked_add(value).chain_err(|| {
                format!("Partial total for key {:?} overflowed the counter.", key)
            })?;
        }
        emitter.emit(key.to_owned(), total).chain_err(
            || format!("Error emitting combined pair for key {:?}.", key),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emitter::{FinalVecEmitter, IntermediateVecEmitter};

    fn map_record(text: &str) -> Vec<(String, u64)> {
        let mut pairs = Vec::new();
        let input = MapInputKV {
            key: "test-record".to_owned(),
            value: text.to_owned(),
        };

        FrequencyMapper
            .map(input, IntermediateVecEmitter::new(&mut pairs))
            .unwrap();
        pairs
    }

    fn keys(pairs: &[(String, u64)]) -> Vec<&str> {
        pairs.iter().map(|pair| pair.0.as_str()).collect()
    }

    #[test]
    fn whitespace_runs_collapse_to_single_split_points() {
        let pairs = map_record("a  b\tc\nd");
        assert_eq!(vec!["a", "b", "c", "d"], keys(&pairs));
    }

    #[test]
    fn carriage_return_and_form_feed_are_delimiters() {
        let pairs = map_record("six\r\x0Cten");
        assert_eq!(vec!["six", "ten"], keys(&pairs));
    }

    #[test]
    fn occurrences_are_not_deduplicated() {
        let pairs = map_record("cat cat cat");
        assert_eq!(
            vec![
                ("cat".to_owned(), 1),
                ("cat".to_owned(), 1),
                ("cat".to_owned(), 1),
            ],
            pairs
        );
    }

    #[test]
    fn pairs_are_emitted_in_record_order() {
        let pairs = map_record("The cat sat.");
        assert_eq!(vec!["the", "cat", "sat"], keys(&pairs));
    }

    #[test]
    fn punctuation_and_number_records_emit_nothing() {
        assert!(map_record("123 !!! ---").is_empty());
    }

    #[test]
    fn empty_record_emits_nothing() {
        assert!(map_record("").is_empty());
        assert!(map_record(" \t\n").is_empty());
    }

    fn sum(key: &str, values: Vec<u64>) -> Result<Vec<u64>> {
        let mut sink: Vec<u64> = Vec::new();
        SumReducer.reduce(key, values, FinalVecEmitter::new(&mut sink))?;
        Ok(sink)
    }

    #[test]
    fn single_contribution_sums_to_itself() {
        assert_eq!(vec![1], sum("test", vec![1]).unwrap());
    }

    #[test]
    fn thousand_contributions_sum_to_thousand() {
        assert_eq!(vec![1000], sum("test", vec![1; 1000]).unwrap());
    }

    #[test]
    fn sum_is_order_independent() {
        let forwards: Vec<u64> = (1..100).collect();
        let backwards: Vec<u64> = (1..100).rev().collect();

        assert_eq!(sum("test", forwards).unwrap(), sum("test", backwards).unwrap());
    }

    #[test]
    fn overflowing_total_is_an_error() {
        let result = sum("test", vec![u64::max_value(), 1]);
        assert!(result.is_err());
    }

    #[test]
    fn combiner_emits_one_partial_sum_pair() {
        let mut pairs: Vec<(String, u64)> = Vec::new();

        SumCombiner
            .combine("cat", vec![2, 3], IntermediateVecEmitter::new(&mut pairs))
            .unwrap();

        assert_eq!(vec![("cat".to_owned(), 5)], pairs);
    }

    #[test]
    fn combining_then_summing_matches_direct_summing() {
        let direct = sum("cat", vec![1, 1, 1, 1]).unwrap();

        let mut combined: Vec<(String, u64)> = Vec::new();
        SumCombiner
            .combine("cat", vec![1, 1], IntermediateVecEmitter::new(&mut combined))
            .unwrap();
        SumCombiner
            .combine("cat", vec![1, 1], IntermediateVecEmitter::new(&mut combined))
            .unwrap();
        let partials: Vec<u64> = combined.into_iter().map(|pair| pair.1).collect();

        assert_eq!(direct, sum("cat", partials).unwrap());
    }
}
