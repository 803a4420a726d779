use serde::Serialize;

/// The `IntermediateInputKV` is a struct for passing input data to a `Reduce` or `Combine`.
///
/// It is the materialised form of one key group as the runtime presents it over the payload
/// boundary: the key and every value collected for it.
/// It can be constructed normally or using `IntermediateInputKV::new()`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct IntermediateInputKV<V>
where
    V: Default + Serialize,
{
    pub key: String,
    pub values: Vec<V>,
}

impl<V> IntermediateInputKV<V>
where
    V: Default + Serialize,
{
    pub fn new(key: String, values: Vec<V>) -> Self {
        IntermediateInputKV { key, values }
    }
}
