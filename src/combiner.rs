use serde::Serialize;
use serde::de::DeserializeOwned;

use emitter::EmitIntermediate;
use errors::*;

/// The `Combine` trait defines a function for performing an optional combine operation.
///
/// A combine runs on the mapping worker between map and shuffle, folding the values already
/// collected for a key into fewer intermediate pairs. It must agree with the job's reduce
/// operation: combining partial groups and then reducing must produce the same final result as
/// reducing the raw groups directly.
///
/// # Arguments
///
/// * `key` - The intermediate key the values are grouped under.
/// * `values` - The sequence of intermediate values collected so far for this key.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait, provided by the combine
///               runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the combine operation are sent out
/// through the `emitter` as ordinary intermediate pairs.
pub trait Combine<V>
where
    V: Default + Serialize + DeserializeOwned,
{
    fn combine<I, E>(&self, key: &str, values: I, emitter: E) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        E: EmitIntermediate<String, V>;
}

/// A null implementation for `Combine` as this is an optional component.
/// This should not be used by payload code.
pub struct NullCombiner;
impl<V> Combine<V> for NullCombiner
where
    V: Default + Serialize + DeserializeOwned,
{
    fn combine<I, E>(&self, _key: &str, _values: I, _emitter: E) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        E: EmitIntermediate<String, V>,
    {
        Err("This code should never run".into())
    }
}
