use serde::Serialize;
use serde::de::DeserializeOwned;

use emitter::EmitFinal;
use errors::*;

/// The `Reduce` trait defines a function for performing a reduce operation.
///
/// All intermediate values grouped under one key are presented as a single sequence. The
/// sequence is consumed lazily: implementations fold over it as it arrives and must not assume
/// it fits in memory. The runtime guarantees the sequence is non-empty and that every value for
/// the key reaches the same reduce call, but makes no promise about value order.
///
/// # Arguments
///
/// * `key` - The intermediate key the values are grouped under.
/// * `values` - The sequence of intermediate values for this key.
/// * `emitter` - A struct implementing the `EmitFinal` trait, provided by the reduce runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the reduce operation are sent out
/// through the `emitter`.
pub trait Reduce {
    type Value: Default + Serialize + DeserializeOwned;
    fn reduce<I, E>(&self, key: &str, values: I, emitter: E) -> Result<()>
    where
        I: IntoIterator<Item = Self::Value>,
        E: EmitFinal<Self::Value>;
}
