use serde::Serialize;

use emitter::EmitIntermediate;
use errors::*;

/// `MapInputKV` is the record handed to a single map operation.
///
/// The runtime fills `key` with the record's provenance (typically the input file path) and
/// `value` with the record text. `MapInputKV` is a thin wrapper used for creating a clearer API.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct MapInputKV {
    pub key: String,
    pub value: String,
}

/// The `Map` trait defines a function for performing a map operation.
///
/// The output types are decided by the implementation of this trait.
///
/// A map operation may be re-run on the same record at any time, so implementations must be pure:
/// the same record always produces the same emitted pairs, and no state is shared between calls.
///
/// # Arguments
///
/// * `input` - A `MapInputKV` containing the record for the map operation.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait, provided by the map runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the map operation are sent out through
/// the `emitter`.
pub trait Map {
    type Key: Default + Serialize;
    type Value: Default + Serialize;
    fn map<E>(&self, input: MapInputKV, emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use emitter::IntermediateVecEmitter;

    struct TestMapper;
    impl Map for TestMapper {
        type Key = String;
        type Value = u64;
        fn map<E>(&self, input: MapInputKV, mut emitter: E) -> Result<()>
        where
            E: EmitIntermediate<Self::Key, Self::Value>,
        {
            for word in input.value.split_whitespace() {
                emitter.emit(word.to_owned(), 1)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_mapper_emits_pair_per_word() {
        let mut vec: Vec<(String, u64)> = Vec::new();
        let input = MapInputKV {
            key: "input-file".to_owned(),
            value: "this is a test".to_owned(),
        };

        TestMapper.map(input, IntermediateVecEmitter::new(&mut vec)).unwrap();

        assert_eq!(4, vec.len());
        assert_eq!(("this".to_owned(), 1), vec[0]);
        assert_eq!(("test".to_owned(), 1), vec[3]);
    }

    #[test]
    fn test_mapper_with_associated_types() {
        let mut vec: Vec<(<TestMapper as Map>::Key, <TestMapper as Map>::Value)> = Vec::new();
        let input = MapInputKV {
            key: "input-file".to_owned(),
            value: "word".to_owned(),
        };

        TestMapper.map(input, IntermediateVecEmitter::new(&mut vec)).unwrap();

        assert_eq!("word", vec[0].0);
        assert_eq!(1, vec[0].1);
    }
}
