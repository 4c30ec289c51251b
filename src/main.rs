use std::process;
use anyhow::Error;
use clap::{App, load_yaml};
use tokio::runtime::Runtime;
use rapture::{args::Args, cmd, trace};

fn main() {
    let ver  = env!("CARGO_PKG_VERSION");
    let yaml = load_yaml!("args.yml");
    let args = App::from_yaml(yaml).version(ver).get_matches();
    let args = Args::new(&args, yaml);

    let level = args.occurrences_of("verbose");
    trace::setup(&[module_path!(), "raptapi"], level).unwrap_or_else(|e| abort(e));

    let runtime = Runtime::new().unwrap_or_else(|e| abort(e.into()));

    match args.subcommand() {
        Some(("whoami", sub)) => runtime.block_on(cmd::whoami(&args, sub)),
        Some(("info",   sub)) => runtime.block_on(cmd::info(&args, sub)),
        _                     => unreachable!(),
    }.unwrap_or_else(|e| abort(e));
}

fn abort(e: Error) -> ! {
    match e.downcast_ref::<clap::Error>() {
        Some(e) => eprintln!("{}", e.message),
        None    => eprintln!("error: {:?}", e),
    }
    process::exit(1);
}
