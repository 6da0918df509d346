mod command;
use command::{Command, Flags};

mod config;
use config::Config;

mod error;

mod nature;
use nature::NatureRemoAPI;

mod report;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches};
use log::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init_timed();

    let matches = clap::Command::new("Nature Remo API")
        .version("1.0")
        .about("Reads Nature Remo sensors and presses TV buttons through the Nature cloud API")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to the TOML file holding the access token")
                .default_value(config::DEFAULT_CONFIG_PATH),
        )
        .arg(switch("devices", 'd', "Print the newest sensor readings of every device"))
        .arg(switch("appliances", 'a', "List appliances and their TV buttons"))
        .arg(switch("volume-up", 'u', "Press volume up on the first appliance"))
        .arg(switch("volume-down", 'b', "Press volume down on the first appliance"))
        .get_matches();

    match execute(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn switch(name: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(name)
        .short(short)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

async fn execute(matches: &ArgMatches) -> error::Result<()> {
    let path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(config::DEFAULT_CONFIG_PATH);

    let config = Config::from_file(path)?;
    let access_token = config.access_token()?;

    let command = Command::from_flags(Flags {
        devices: matches.get_flag("devices"),
        appliances: matches.get_flag("appliances"),
        volume_up: matches.get_flag("volume-up"),
        volume_down: matches.get_flag("volume-down"),
    });
    debug!("running {:?}", command);

    let client = NatureRemoAPI::new(access_token)?;
    let mut stdout = std::io::stdout().lock();
    command::run(command, &client, &mut stdout).await
}
