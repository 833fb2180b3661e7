use std::io;
use std::process;

use log::{debug, error};

use token_crypto::cli::output::{render_failure, render_success};
use token_crypto::cli::{build_command, execute, resolve_params, CliConfig, CliError, Operation, OutputFormat};
use token_crypto::utils::io::prompt_passphrase;
use token_crypto::utils::logging::{initialize_logging, log_crypto_event};

fn main() {
    let matches = build_command().get_matches();

    let config = match CliConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = initialize_logging(config.log_level, config.log_file.as_deref()) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    debug!("Running {} with {:?}", config.operation.as_str(), config);

    // Get the token and passphrase from arguments, stdin, environment or prompt
    let params = match resolve_params(&config, &mut io::stdin().lock(), || {
        prompt_passphrase("Enter passphrase: ")
    }) {
        Ok(params) => params,
        Err(e) => {
            error!("Failed to gather input: {}", e);
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    let operation = config.operation;
    match execute(operation, &params) {
        Ok(result) => {
            let encoded = match operation {
                Operation::Encrypt => result.as_str(),
                Operation::Decrypt => params.token.as_str(),
            };
            log_crypto_event(operation.as_str(), Some(encoded), true, None);
            println!("{}", render_success(operation, &result, config.output));
        }
        Err(CliError::Crypto(err)) => {
            let encoded = match operation {
                Operation::Encrypt => None,
                Operation::Decrypt => Some(params.token.as_str()),
            };
            log_crypto_event(operation.as_str(), encoded, false, Some(err.kind()));
            let rendered = render_failure(operation, &err, config.output);
            match config.output {
                OutputFormat::Json => println!("{}", rendered),
                OutputFormat::Text => eprintln!("{}", rendered),
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
