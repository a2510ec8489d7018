use crate::config::{Config, is_verbose};
use crate::err::RsErr;
use crate::{println_info, println_notice};
use itertools::Itertools;
use rstream::{Stream, StreamErr};

/// 依次演示各个操作，每个终结操作都作用在新构造的流上。
pub(crate) fn run(source: &[i64], configs: &[Config]) -> Result<(), RsErr> {
    let verbose = is_verbose(configs);
    let step = |desc: &str| {
        if verbose {
            println_notice!("> {desc}");
        }
    };
    println_info!("Source: [{}]", source.iter().join(", "));

    let mut stream = Stream::from(source);
    step("filter(x > 0) -> peek");
    print!("Peek: ");
    stream.filter(|x| *x > 0)?.peek();
    step("map(x + 0.1) -> to_vec");
    let mapped = stream.map(|x| x as f64 + 0.1)?.to_vec()?;
    println_info!("Mapped: [{}]", mapped.iter().join(", "));

    let positive = || -> Result<Stream<i64>, RsErr> {
        let mut stream = Stream::from(source);
        stream.filter(|x| *x > 0)?;
        Ok(stream)
    };
    step("filter(x > 0) -> find");
    match positive()?.find()? {
        Some(first) => println_info!("Find: {first}"),
        None => println_notice!("Find: nothing found"),
    }
    step("filter(x > 0) -> any_matches");
    println_info!("Any matches: {}", positive()?.any_matches()?);
    step("filter(x > 0) -> all_match");
    println_info!("All match: {}", positive()?.all_match()?);
    step("filter(x > 0) -> reduce(a + b)");
    match positive()?.reduce(|a, b| a + b) {
        Ok(sum) => println_info!("Reduce: {sum}"),
        Err(StreamErr::EmptyReduction) => println_notice!("Reduce: nothing to reduce"),
        Err(err) => Err(err)?,
    }
    step("filter(x > 0) -> to_forward_list");
    println_info!("Forward list: [{}]", positive()?.to_forward_list()?.iter().join(", "));

    step("to_vec on the stream consumed by map");
    if let Err(err) = stream.to_vec() {
        println_notice!("Reuse: {err}");
    }
    Ok(())
}
