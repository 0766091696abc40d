use std::process;

use protractor::cli::{self, Command};
use protractor::{Error, output};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        if matches!(err, Error::Args(_)) {
            eprintln!("{}\n", cli::usage());
        }
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        process::exit(code);
    }
}

fn run() -> Result<(), Error> {
    match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => println!("{}", cli::usage()),
        Command::Generate(invocation) => {
            let computed = invocation.validate()?;
            println!("{}\n", cli::summary(&invocation.spec, &computed));
            output::write_document(&invocation.output, &invocation.spec)?;
        }
    }
    Ok(())
}
