use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use handlers::{
    classifier_from_env, config_dir_from, database_path, load_reputation, print_banner,
    reputation_csv_path, DEFAULT_REPUTATION_CSV,
};
use indicatif::{ProgressBar, ProgressStyle};
use pagecheck_core::data::Database;
use pagecheck_core::report::{generate_check_report, generate_history_report};
use pagecheck_pipeline::{Fetcher, Pipeline};
use pagecheck_server::ServerConfig;
use std::fs;
use std::io::{self, Write};
use std::time::Duration;

mod commands;
#[path = "handlers.rs"]
mod handlers;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("init", primary_command)) => handle_init(primary_command),
        Some(("check", primary_command)) => handle_check(primary_command).await,
        Some(("history", primary_command)) => handle_history(primary_command),
        Some(("serve", primary_command)) => handle_serve(primary_command).await,
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

// Handler functions
fn handle_init(args: &ArgMatches) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let path_arg = args.get_one::<String>("PATH").unwrap();
    let force = args.get_flag("force");
    let config_dir = config_dir_from(path_arg);
    let db_path = database_path(&config_dir);
    let csv_path = reputation_csv_path(&config_dir);

    // If a database exists and force is not set, ask for confirmation
    if Database::exists(&db_path) && !force {
        spinner.println(format!(
            "[WARNING] A database already exists at {}",
            db_path.display()
        ));
        spinner.println("This operation will overwrite it.");
        spinner.println("Do you want to continue? [y/N]: ");
        io::stdout().flush().unwrap();

        let mut response = String::new();
        io::stdin().read_line(&mut response).unwrap();
        let response = response.trim().to_lowercase();

        if response != "y" && response != "yes" {
            println!("\nInitialization cancelled.");
            return;
        }
    }

    spinner.set_message("Creating configuration directory...");
    fs::create_dir_all(&config_dir).expect("Failed to create config directory");

    if !csv_path.exists() || force {
        spinner.set_message("Writing reputation list scaffold...");
        fs::write(&csv_path, DEFAULT_REPUTATION_CSV).expect("Failed to write reputation list");
    }

    if Database::exists(&db_path) {
        Database::drop(&db_path);
    }
    spinner.set_message(format!("Initializing database at: {}", db_path.display()));
    Database::new(&db_path).expect("Failed to create database");

    spinner.finish_with_message(format!(
        r#"
    ✓ pagecheck initialization complete!
    ✓ Config directory: {}
    ✓ Database: {}
    "#,
        config_dir.display(),
        db_path.display()
    ));
}

async fn handle_check(args: &ArgMatches) {
    let url = args.get_one::<String>("url").unwrap();
    let timeout = args.get_one::<u64>("timeout").unwrap();
    let as_json = args.get_flag("json");
    let no_save = args.get_flag("no-save");
    let config_dir = config_dir_from(args.get_one::<String>("config").unwrap());

    let classifier = match classifier_from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    };
    let reputation = match load_reputation(&config_dir) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    };

    let pipeline = Pipeline::new(classifier)
        .with_fetcher(Fetcher::with_timeout(*timeout))
        .with_reputation(reputation);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Checking {}", url));

    let result = match pipeline.run_check(url).await {
        Ok(result) => {
            spinner.finish_and_clear();
            result
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} Check failed: {}", "✗".red(), e);
            std::process::exit(1);
        }
    };

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("result serializes")
        );
    } else {
        print!("{}", generate_check_report(&result));
    }

    // Best-effort persistence; an uninitialized database is not an error
    let db_path = database_path(&config_dir);
    if !no_save && Database::exists(&db_path) {
        match Database::new(&db_path) {
            Ok(db) => {
                if let Err(e) = db.insert_check(&result, url, None) {
                    eprintln!("{} Failed to save check: {}", "✗".yellow(), e);
                }
            }
            Err(e) => eprintln!("{} Failed to open database: {}", "✗".yellow(), e),
        }
    }
}

fn handle_history(args: &ArgMatches) {
    let limit = args.get_one::<usize>("limit").unwrap();
    let config_dir = config_dir_from(args.get_one::<String>("config").unwrap());
    let db_path = database_path(&config_dir);

    if !Database::exists(&db_path) {
        eprintln!(
            "{} No database at {}. Run `pagecheck init` first.",
            "✗".red(),
            db_path.display()
        );
        std::process::exit(1);
    }

    let db = Database::new(&db_path).expect("Failed to open database");
    let checks = db.recent_checks(*limit).expect("Failed to read history");
    let counts = db.verdict_counts().expect("Failed to read verdict counts");

    print!("{}", generate_history_report(&checks, &counts));
}

async fn handle_serve(args: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bind = args.get_one::<String>("bind").unwrap();
    let config_dir = config_dir_from(args.get_one::<String>("config").unwrap());

    let classifier = match classifier_from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    };
    let reputation = match load_reputation(&config_dir) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    };

    let pipeline = Pipeline::new(classifier).with_reputation(reputation);

    let db_path = database_path(&config_dir);
    let config = ServerConfig {
        bind: bind.clone(),
        database_path: Database::exists(&db_path).then_some(db_path),
        auth_token: std::env::var("PAGECHECK_AUTH_TOKEN").ok(),
        ..ServerConfig::default()
    };

    if let Err(e) = pagecheck_server::serve(config, pipeline).await {
        eprintln!("{} Server error: {}", "✗".red(), e);
        std::process::exit(1);
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
