use super::logging;
use super::setup::Cli;
use console::style;
use std::io::Write;
use tracing::debug;
use userlist::api::perform_with_config;
use userlist::config::UserlistConfig;
use userlist::error::{Result, UserlistError};

pub fn run() -> Result<()> {
    let cli = Cli::parse_normalized();
    let config = UserlistConfig::load_default()?;
    logging::init(cli.verbose, &config);

    let args = cli.to_arguments();
    debug!(?args, "parsed arguments");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    perform_with_config(&args, &config, &mut out)?;
    out.flush().map_err(UserlistError::Output)
}

pub fn report_error(error: &UserlistError) {
    eprintln!("{} {}", style("Error:").red().bold().for_stderr(), error);
}
