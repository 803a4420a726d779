extern crate env_logger;
#[macro_use]
extern crate error_chain;
extern crate wordfreq;

use wordfreq::*;

const MAP_OUTPUT_PARTITIONS: u64 = 15;

fn run() -> Result<()> {
    env_logger::init().chain_err(
        || "Failed to initialise logging.",
    )?;

    let mapper = FrequencyMapper;
    let reducer = SumReducer;
    let combiner = SumCombiner;
    let partitioner = HashPartitioner::new(MAP_OUTPUT_PARTITIONS);

    let matches = wordfreq::parse_command_line();

    let registry = UserImplRegistryBuilder::new()
        .mapper(&mapper)
        .reducer(&reducer)
        .partitioner(&partitioner)
        .combiner(&combiner)
        .build()
        .chain_err(|| "Error building UserImplRegistry.")?;

    wordfreq::run(&matches, &registry)
}

// Macro to generate a quick error_chain main function.
// https://github.com/rust-lang-nursery/error-chain/blob/master/examples/quickstart.rs
quick_main!(run);
