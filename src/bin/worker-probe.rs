use std::{io, time::Duration};

use clap::Parser;

use worker_probe::{
    setup_logging, write_failure, Probe, ProbeEncoding, ProbeOptions, DEFAULT_ORIGIN, DEFAULT_URL,
};

#[derive(Parser)]
#[command(author, version, about, disable_help_subcommand(true))]
struct RootOptions {
    /// The registration endpoint
    #[arg(long, global = true, default_value = DEFAULT_URL)]
    url: String,

    /// The `Origin` header of form-encoded requests
    #[arg(long, global = true, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Seconds to wait for the endpoint
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    /// Enables more detailed log output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    /// Send the registration as application/x-www-form-urlencoded
    Form,
    /// Send the registration as multipart/form-data with two dummy JPEG files
    Multipart,
}

fn main() {
    let opts = RootOptions::parse();

    setup_logging(opts.verbose);

    let encoding = match opts.subcmd {
        SubCommand::Form => ProbeEncoding::Form,
        SubCommand::Multipart => ProbeEncoding::Multipart,
    };

    let options = ProbeOptions::new()
        .url(opts.url)
        .origin(opts.origin)
        .timeout(Duration::from_secs(opts.timeout));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // The exit status is 0 however the probe ends.
    let written = match Probe::http(options) {
        Ok(probe) => probe.run(&mut out, encoding).map(|_| ()),
        Err(err) => write_failure(&mut out, &err),
    };

    if let Err(err) = written {
        log::error!("Cannot write the report: {}", err);
    }
}
