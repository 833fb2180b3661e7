use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Environment variable consulted for the passphrase when `--key` is absent
pub const KEY_ENV_VAR: &str = "TOKEN_CRYPTO_KEY";

/// Define the command-line interface using clap
pub fn build_command() -> Command {
    Command::new("token-crypto")
        .about("Encrypt and decrypt opaque tokens with a passphrase")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print the result as a JSON object"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Append log output to this file instead of stderr"),
        )
        .subcommand(token_command("encrypt", "Encrypt a plaintext token"))
        .subcommand(token_command("decrypt", "Decrypt an encoded IV:ciphertext token"))
}

fn token_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("token")
                .value_name("TOKEN")
                .help("The token to process; read from stdin when omitted or `-`"),
        )
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .value_name("KEY")
                .env(KEY_ENV_VAR)
                .hide_env_values(true)
                .help("Passphrase (at least 6 characters); prompted for when not given"),
        )
}
