#![recursion_limit = "1024"]

extern crate chrono;
extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate multimap;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate uuid;

const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

pub mod errors {
    error_chain!{}
}

pub mod combiner;
pub mod emitter;
pub mod frequency;
pub mod intermediate;
pub mod io;
pub mod local;
pub mod mapper;
pub mod normalise;
pub mod partition;
pub mod reducer;
pub mod registry;
pub mod runner;
pub mod serialise;

pub use combiner::{Combine, NullCombiner};
pub use emitter::{EmitFinal, EmitIntermediate, FinalVecEmitter, IntermediateVecEmitter,
                  MultiMapEmitter};
pub use errors::*;
pub use frequency::{FrequencyMapper, SumCombiner, SumReducer};
pub use intermediate::IntermediateInputKV;
pub use local::run_local;
pub use mapper::{Map, MapInputKV};
pub use normalise::Normaliser;
pub use partition::{HashPartitioner, Partition, PartitionInputKV};
pub use reducer::Reduce;
pub use registry::{UserImplRegistry, UserImplRegistryBuilder};
pub use runner::{parse_command_line, run};
pub use serialise::{CombineOutputObject, CombineOutputObjectEmitter, FinalOutputObject,
                    FinalOutputObjectEmitter, IntermediateOutputObject, IntermediateOutputPair};
