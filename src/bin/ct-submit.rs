// Copyright 2025 The ct-submit Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ct-submit - submit a certificate chain to a CT log and print the binary SCT

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use ct_submit::chain::parse_pem_chain;
use ct_submit::ct::CtLogClient;
use ct_submit::errors::Result;

const LONG_ABOUT: &str = "\
ct-submit reads a PEM-encoded X.509 certificate chain from stdin and submits it
to the given Certificate Transparency log server. The Signed Certificate
Timestamp structure returned by the log server is written to stdout in binary.

The leaf certificate should be the first certificate in the chain, followed by
any intermediate certificates and, optionally, the root certificate.

The signature of the SCT is not verified.";

#[derive(Parser, Debug)]
#[command(name = "ct-submit", version)]
#[command(about = "Submit a certificate chain to a Certificate Transparency log", long_about = LONG_ABOUT)]
struct Cli {
    /// Log server base URL or host (https:// is assumed without a scheme)
    log_server: String,

    /// Give up on the log server after this many seconds
    #[arg(long, env = "CT_SUBMIT_TIMEOUT", value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Enable verbose mode
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the SCT, logs go to stderr
    let level_filter = if cli.verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_filter));
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let mut input = Vec::new();
    tokio::io::stdin().read_to_end(&mut input).await?;
    let chain = parse_pem_chain(&input)?;

    let client = CtLogClient::new(&cli.log_server, cli.timeout.map(Duration::from_secs))?;
    let sct = client.add_chain(&chain).await?;

    // Encode fully before touching stdout so a failure leaves no partial SCT behind.
    let encoded = sct.to_bytes()?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&encoded).await?;
    stdout.flush().await?;

    debug!(bytes = encoded.len(), "wrote SCT");
    Ok(())
}
