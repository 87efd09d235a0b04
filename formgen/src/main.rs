//! Form generator CLI entrypoint.
//!
//! Parses arguments, validates the input paths with actionable guidance,
//! authenticates, and hands the build sequence to [`placement_formgen::run`]
//! against a live Forms API client. Any hard failure prints to stdout
//! with a `✗` marker and exits 1, matching the progress stream.

use std::io::Write;

use clap::Parser;
use placement_bank::RULE;
use placement_formgen::auth::Authenticator;
use placement_formgen::cli::Cli;
use placement_formgen::forms::HttpFormsApi;
use placement_formgen::run::run;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    if !preflight(&cli, &mut stdout) {
        std::process::exit(1);
    }

    write_line(&mut stdout, "Step 1: Authenticating...");
    let authenticator = Authenticator::new(cli.credentials.clone(), cli.token.clone());
    let token = match authenticator.access_token() {
        Ok(token) => token,
        Err(err) => {
            write_line(&mut stdout, format!("✗ {err}"));
            std::process::exit(1);
        }
    };
    write_line(&mut stdout, "✓ Authentication successful\n");

    let api = HttpFormsApi::new(token);
    if let Err(err) = run(&cli, &api, &mut stdout) {
        write_line(&mut stdout, format!("\n✗ {err}"));
        std::process::exit(1);
    }
}

/// Echo the run banner and verify both input files exist, printing
/// setup guidance when the OAuth client secrets are missing.
fn preflight(cli: &Cli, out: &mut impl Write) -> bool {
    if !cli.bank.exists() {
        write_line(out, format!("✗ Error: Question bank not found at {}", cli.bank));
        return false;
    }
    if !cli.credentials.exists() {
        write_line(
            out,
            format!("✗ Error: credentials.json not found at {}", cli.credentials),
        );
        write_line(out, "\nPlease follow these steps:");
        write_line(out, "1. Go to https://console.cloud.google.com/");
        write_line(out, "2. Create a project and enable Google Forms API");
        write_line(out, "3. Create OAuth 2.0 credentials (Desktop app)");
        write_line(
            out,
            format!("4. Download the client-secret file to {}", cli.credentials),
        );
        return false;
    }

    write_line(out, RULE);
    write_line(out, "ESL PLACEMENT TEST - GOOGLE FORM GENERATOR");
    write_line(out, RULE);
    write_line(out, format!("\nQuestion bank: {}", cli.bank));
    write_line(out, format!("Credentials:   {}", cli.credentials));
    write_line(out, format!("Form title:    {}\n", cli.title));
    true
}

fn write_line(out: &mut impl Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
