use clap::Parser;
use jiff::Zoned;
use nbu_rate::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    let today = Zoned::now().date();
    run(&args, today, &mut std::io::stdout().lock())
}
