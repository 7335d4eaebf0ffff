pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use args::{Arguments, Subcommands};
use error::Error;
use output::build_output_path;
use tracing::info;

use clap::Parser;

use atlas_common::utils::io::file::{short_path, write_file};
use atlas_config::{config, Configuration};
use atlas_countries::countries;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging. the guard must outlive every log line written to file
    let _guard = match args.logs.init_tracing() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {e}");
            None
        }
    };

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Countries(mut cmd) => {
            // if the user has not specified an endpoint or timeout, use the configured ones
            if cmd.url.is_empty() {
                cmd.url = configuration.countries_url;
            }
            if cmd.timeout.is_none() {
                cmd.timeout = Some(configuration.timeout);
            }

            let result = countries(cmd.clone())
                .await
                .map_err(|e| Error::Generic(format!("failed to fetch countries: {}", e)))?;

            if cmd.output == "print" {
                if cmd.json {
                    println!("{}", result.to_json()?);
                } else {
                    result.display();
                }
            } else {
                let (filename, contents) = if cmd.json {
                    ("countries.json", result.to_json()?)
                } else {
                    let lines: Vec<String> =
                        result.countries.iter().map(|country| country.to_string()).collect();
                    ("countries.txt", lines.join("\n"))
                };

                let output_path = build_output_path(&cmd.output, filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;
                write_file(&output_path, &contents)
                    .map_err(|e| Error::Generic(format!("failed to write countries: {}", e)))?;

                info!(
                    "wrote {} countries to '{}' .",
                    result.countries.len(),
                    short_path(&output_path)
                );
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd)?;
        }
    }

    Ok(())
}
