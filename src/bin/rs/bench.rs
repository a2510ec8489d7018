use crate::config::{Config, is_verbose};
use crate::err::RsErr;
use crate::{println_info, println_notice};
use rand::Rng;
use rstream::{Stream, StreamErr};
use std::time::Instant;

const BENCH_SIZE: usize = 1_000_000;

/// 对比手写循环与等价流水线的耗时，并校验两者结果一致。
pub(crate) fn run(configs: &[Config]) -> Result<(), RsErr> {
    let mut rng = rand::rng();
    let source = (0..BENCH_SIZE).map(|_| rng.random_range(-1000..=1000)).collect::<Vec<i64>>();
    println_info!("Bench: {} random integers", source.len());
    if is_verbose(configs) {
        println_notice!("> each case moves its own copy of the source into the stream");
    }

    let owned = source.clone();
    compare(
        "filter -> to_vec",
        || {
            let mut out = Vec::new();
            for &x in &source {
                if x > 0 && x % 2 == 0 {
                    out.push(x);
                }
            }
            out
        },
        move || Ok(Stream::new(owned).filter(|x| *x > 0)?.filter(|x| x % 2 == 0)?.to_vec()?),
    )?;

    let owned = source.clone();
    compare(
        "filter -> map -> to_vec",
        || {
            let mut out = Vec::new();
            for &x in &source {
                if x > 0 {
                    out.push(x as f64 * 0.5);
                }
            }
            out
        },
        move || Ok(Stream::new(owned).filter(|x| *x > 0)?.map(|x| x as f64 * 0.5)?.to_vec()?),
    )?;

    let owned = source.clone();
    compare(
        "filter -> reduce",
        || {
            let mut sum = None;
            for &x in &source {
                if x < 0 {
                    sum = Some(sum.map_or(x, |acc| acc + x));
                }
            }
            sum
        },
        move || match Stream::new(owned).filter(|x| *x < 0)?.reduce(|acc, x| acc + x) {
            Ok(sum) => Ok(Some(sum)),
            Err(StreamErr::EmptyReduction) => Ok(None),
            Err(err) => Err(err.into()),
        },
    )
}

fn compare<R: PartialEq>(
    case: &'static str, hand: impl FnOnce() -> R, pipeline: impl FnOnce() -> Result<R, RsErr>,
) -> Result<(), RsErr> {
    let start = Instant::now();
    let expected = hand();
    let hand_cost = start.elapsed();

    let start = Instant::now();
    let actual = pipeline()?;
    let pipeline_cost = start.elapsed();

    if expected != actual {
        return Err(RsErr::BenchMismatch { case });
    }
    println_info!(
        "{case:<24} loop: {:>10.3} ms    stream: {:>10.3} ms",
        hand_cost.as_secs_f64() * 1000.0,
        pipeline_cost.as_secs_f64() * 1000.0
    );
    Ok(())
}
