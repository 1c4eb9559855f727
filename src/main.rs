use asnranges::{ClientBuilder, QueuedCommands, Result, SessionDriver};
use clap::Parser;
use log::error;
use std::process::ExitCode;
use std::time::Duration;

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    stderrlog::new()
        .module(module_path!())
        .module("asnranges")
        .verbosity(args.verbose.log_level_filter())
        .init()
        .expect("Logger initializes once at startup");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Session Flow
-------------------------------------------------------------------------------------------------*/

fn run(args: cli::Args) -> Result<()> {
    // Invalid batch arguments fail here, before any request is made
    let batch = cli::build_commands(&args)?;

    let client = ClientBuilder::new()
        .country(&args.country)
        .timeout(args.timeout)
        .build()?;

    let mut driver =
        SessionDriver::new(&client).pause(Duration::from_millis(args.pause));

    let mut queued = QueuedCommands::from(batch.clone());
    driver.run(&mut queued, |_, report| cli::output::pass_summary(&report));

    if batch.is_empty() || args.interactive {
        let mut prompt = cli::prompt::PromptSource::stdin();
        driver.run(&mut prompt, |_, report| cli::output::pass_summary(&report));
    }

    let outcome = driver.finish();
    cli::output::save_outcome(&outcome, &args);
    cli::output::session_summary(&outcome);

    Ok(())
}
