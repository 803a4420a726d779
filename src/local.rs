//! An in-process stand-in for the distributed runtime.
//!
//! `run_local` drives a payload's map and reduce implementations over a set of records on the
//! calling thread: every record is mapped, the emitted pairs are grouped by key, and each key
//! group is reduced. It exists so payload semantics can be exercised end to end without a
//! master or workers; the real runtime makes the same calls through the payload binary.

use multimap::MultiMap;

use emitter::{FinalVecEmitter, MultiMapEmitter};
use errors::*;
use mapper::{Map, MapInputKV};
use reducer::Reduce;

/// Runs `mapper` over every record and `reducer` over every resulting key group, returning the
/// final (key, value) aggregates in unspecified order.
pub fn run_local<M, R>(
    mapper: &M,
    reducer: &R,
    records: Vec<MapInputKV>,
) -> Result<Vec<(String, R::Value)>>
where
    M: Map<Key = String>,
    M::Value: Eq,
    R: Reduce<Value = M::Value>,
{
    let mut grouped: MultiMap<String, M::Value> = MultiMap::new();

    for record in records {
        mapper
            .map(record, MultiMapEmitter::new(&mut grouped))
            .chain_err(|| "Error running map operation.")?;
    }

    let mut aggregates = Vec::new();
    for (key, values) in grouped {
        let mut outputs: Vec<R::Value> = Vec::new();
        reducer
            .reduce(&key, values, FinalVecEmitter::new(&mut outputs))
            .chain_err(|| format!("Error running reduce operation for key {:?}.", key))?;
        for output in outputs {
            aggregates.push((key.clone(), output));
        }
    }

    Ok(aggregates)
}
