use crate::config::Config;
use crate::err::RsErr;

mod bench;
mod config;
mod demo;
mod err;
mod parse;
mod print;

/// 未指定源数据时的默认数据。
const DEFAULT_SOURCE: [i64; 4] = [1, -2, 3, -4];

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), RsErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = config::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("rs {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let source = parse::parse_source(args, &DEFAULT_SOURCE)?;
    demo::run(&source, &configs)?;
    if configs.contains(&Config::Bench) {
        bench::run(&configs)?;
    }
    Ok(())
}

fn print_help() {
    println!("Usage: rs [<flag>...] [<source>]");
    println!();
    println!("Flags:");
    for (flag, help) in Config::all_help() {
        let mut lines = help.lines();
        println!("    {flag:<4}{}", lines.next().unwrap_or_default());
        for line in lines {
            println!("    {:<4}{line}", "");
        }
    }
    println!();
    println!("Source:");
    println!("    逗号分隔的整数列表，可选，未指定时使用：{}", DEFAULT_SOURCE.map(|x| x.to_string()).join(","));
}
