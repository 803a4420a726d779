use std::cmp::Eq;
use std::hash::Hash;

use multimap::MultiMap;
use serde::Serialize;

use errors::*;

/// The `EmitIntermediate` trait specifies structs which can send intermediate key-value pairs to
/// an in-memory data structure.
///
/// Since these in-memory data structures will eventually be serialised to disk, the keys and
/// values must implement the `serde::Serialize` trait.
pub trait EmitIntermediate<K: Serialize, V: Serialize> {
    /// Takes ownership of a key-value pair and moves it somewhere else.
    ///
    /// Returns an empty `Result` used for error handling.
    fn emit(&mut self, key: K, value: V) -> Result<()>;
}

/// The `EmitFinal` trait specifies structs which can send final reduced values to an in-memory
/// data structure.
pub trait EmitFinal<V: Serialize> {
    /// Takes ownership of a value and moves it somewhere else.
    ///
    /// Returns an empty `Result` used for error handling.
    fn emit(&mut self, value: V) -> Result<()>;
}

/// A struct implementing `EmitIntermediate` which emits to a `Vec` of key-value pairs,
/// preserving emission order.
pub struct IntermediateVecEmitter<'a, K, V>
where
    K: Serialize + 'a,
    V: Serialize + 'a,
{
    sink: &'a mut Vec<(K, V)>,
}

impl<'a, K, V> IntermediateVecEmitter<'a, K, V>
where
    K: Serialize + 'a,
    V: Serialize + 'a,
{
    /// Constructs a new `IntermediateVecEmitter` with a mutable reference to a given `Vec`.
    pub fn new(sink: &'a mut Vec<(K, V)>) -> Self {
        IntermediateVecEmitter { sink }
    }
}

impl<'a, K, V> EmitIntermediate<K, V> for IntermediateVecEmitter<'a, K, V>
where
    K: Serialize + 'a,
    V: Serialize + 'a,
{
    fn emit(&mut self, key: K, value: V) -> Result<()> {
        self.sink.push((key, value));
        Ok(())
    }
}

/// A struct implementing `EmitFinal` which emits to a `Vec` of values.
pub struct FinalVecEmitter<'a, V: Serialize + 'a> {
    sink: &'a mut Vec<V>,
}

impl<'a, V: Serialize + 'a> FinalVecEmitter<'a, V> {
    /// Constructs a new `FinalVecEmitter` with a mutable reference to a given `Vec`.
    pub fn new(sink: &'a mut Vec<V>) -> Self {
        FinalVecEmitter { sink }
    }
}

impl<'a, V: Serialize> EmitFinal<V> for FinalVecEmitter<'a, V> {
    fn emit(&mut self, value: V) -> Result<()> {
        self.sink.push(value);
        Ok(())
    }
}

/// A struct implementing `EmitIntermediate` which emits to a `multimap::MultiMap`, grouping
/// emitted values by key.
pub struct MultiMapEmitter<'a, K, V>
where
    K: Serialize + Eq + Hash + 'a,
    V: Serialize + Eq + 'a,
{
    sink: &'a mut MultiMap<K, V>,
}

impl<'a, K, V> MultiMapEmitter<'a, K, V>
where
    K: Serialize + Eq + Hash + 'a,
    V: Serialize + Eq + 'a,
{
    /// Constructs a new `MultiMapEmitter` with a mutable reference to a given `MultiMap`.
    ///
    /// # Arguments
    ///
    /// * `sink` - A mutable reference to the `MultiMap` to receive the emitted values.
    pub fn new(sink: &'a mut MultiMap<K, V>) -> Self {
        MultiMapEmitter { sink }
    }
}

impl<'a, K, V> EmitIntermediate<K, V> for MultiMapEmitter<'a, K, V>
where
    K: Serialize + Eq + Hash + 'a,
    V: Serialize + Eq + 'a,
{
    fn emit(&mut self, key: K, value: V) -> Result<()> {
        self.sink.insert(key, value);
        Ok(())
    }
}
