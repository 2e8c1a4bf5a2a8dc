use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("pagecheck")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("pagecheck")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Initializes the pagecheck config directory and database")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Location for the pagecheck config directory")
                        .default_value("~/.config/pagecheck/"),
                )
                .arg(
                    arg!(-f - -"force")
                        .help(
                            "Forces the overwriting of any existing database at the specified \
                        location.",
                        )
                        .required(false),
                ),
        )
        .subcommand(
            command!("check")
                .about("Run a one-shot safety check against a URL")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The URL to check"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Page fetch timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"json" "Print the raw JSON result instead of a report")
                        .required(false)
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"no-save" "Do not record the check in the local database")
                        .required(false)
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-c --"config" <PATH>)
                        .required(false)
                        .help("Config directory holding the database and reputation list")
                        .default_value("~/.config/pagecheck/"),
                ),
        )
        .subcommand(
            command!("history")
                .about("Show recent stored checks with verdict counts")
                .arg(
                    arg!(-l --"limit" <N>)
                        .required(false)
                        .help("Maximum number of checks to show")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("20"),
                )
                .arg(
                    arg!(-c --"config" <PATH>)
                        .required(false)
                        .help("Config directory holding the database")
                        .default_value("~/.config/pagecheck/"),
                ),
        )
        .subcommand(
            command!("serve")
                .about("Run the pagecheck HTTP server")
                .arg(
                    arg!(-b --"bind" <ADDR>)
                        .required(false)
                        .help("Address to bind the server to")
                        .default_value("127.0.0.1:8080"),
                )
                .arg(
                    arg!(-c --"config" <PATH>)
                        .required(false)
                        .help("Config directory holding the database and reputation list")
                        .default_value("~/.config/pagecheck/"),
                ),
        )
}
