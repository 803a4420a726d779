use std::io::{Read, Write};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json;

use errors::*;
use intermediate::IntermediateInputKV;
use mapper::MapInputKV;
use serialise::{CombineOutputObject, FinalOutputObject, IntermediateOutputObject};

/// `read_map_input` reads a string from a source and returns a `MapInputKV`.
///
/// It attempts to parse the string from the input source as JSON and returns an `errors::Error`
/// if the attempt fails.
pub fn read_map_input<R: Read>(source: &mut R) -> Result<MapInputKV> {
    let mut input_string = String::new();
    let bytes_read = source.read_to_string(&mut input_string).chain_err(
        || "Error reading from source.",
    )?;
    if bytes_read == 0 {
        warn!("bytes_read is 0");
    }
    let result = serde_json::from_str(input_string.as_str()).chain_err(
        || "Error parsing input JSON to MapInputKV.",
    )?;
    Ok(result)
}

/// `read_reduce_input` reads a string from a source and returns an `IntermediateInputKV`.
///
/// Combine operations receive their input in the same shape, so this is used for both.
/// It attempts to parse the string from the input source as JSON and returns an `errors::Error`
/// if the attempt fails.
pub fn read_reduce_input<R, V>(source: &mut R) -> Result<IntermediateInputKV<V>>
where
    R: Read,
    V: Default + Serialize + DeserializeOwned,
{
    let mut input_string = String::new();
    let bytes_read = source.read_to_string(&mut input_string).chain_err(
        || "Error reading from source.",
    )?;
    if bytes_read == 0 {
        warn!("bytes_read is 0");
    }
    let result = serde_json::from_str(input_string.as_str()).chain_err(
        || "Error parsing input JSON to IntermediateInputKV.",
    )?;
    Ok(result)
}

/// `write_map_output` serialises an `IntermediateOutputObject` to a sink as JSON.
pub fn write_map_output<W, K, V>(
    sink: &mut W,
    output: &IntermediateOutputObject<K, V>,
) -> Result<()>
where
    W: Write,
    K: Serialize,
    V: Serialize,
{
    let json_string = serde_json::to_string(output).chain_err(
        || "Error serialising map output.",
    )?;
    sink.write_all(json_string.as_bytes()).chain_err(
        || "Error writing map output to sink.",
    )?;
    Ok(())
}

/// `write_reduce_output` serialises a `FinalOutputObject` to a sink as JSON.
pub fn write_reduce_output<W, V>(sink: &mut W, output: &FinalOutputObject<V>) -> Result<()>
where
    W: Write,
    V: Serialize,
{
    let json_string = serde_json::to_string(output).chain_err(
        || "Error serialising reduce output.",
    )?;
    sink.write_all(json_string.as_bytes()).chain_err(
        || "Error writing reduce output to sink.",
    )?;
    Ok(())
}

/// `write_combine_output` serialises a `CombineOutputObject` to a sink as JSON.
pub fn write_combine_output<W, K, V>(sink: &mut W, output: &CombineOutputObject<K, V>) -> Result<()>
where
    W: Write,
    K: Serialize,
    V: Serialize,
{
    let json_string = serde_json::to_string(output).chain_err(
        || "Error serialising combine output.",
    )?;
    sink.write_all(json_string.as_bytes()).chain_err(
        || "Error writing combine output to sink.",
    )?;
    Ok(())
}
