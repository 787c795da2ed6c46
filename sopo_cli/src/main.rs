use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::RngCore;
use sopo_core::{
    mint, write_static_pages, ResultCode, SigningKey, Token, Verifier, DEFAULT_BASE_URL,
};
use sopo_shared::SignResponse;

#[derive(Parser)]
#[command(name = "sopo-cli", about = "Admin CLI for the sopotan slot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Signing secret shared with the server
    #[arg(long, env = "SIGNING_SECRET", hide_env_values = true, global = true)]
    secret: Option<String>,
    /// Public origin used in links and OGP tags
    #[arg(long, env = "BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint a token for any known code, gktn included
    Sign {
        code: String,
        /// Issue time in Unix seconds, default now
        #[arg(long)]
        at: Option<i64>,
    },
    /// Classify a code and token the way the result page would
    Verify {
        code: String,
        #[arg(long)]
        sig: String,
        #[arg(long)]
        ts: i64,
        /// Verification time in Unix seconds, default now
        #[arg(long)]
        now: Option<i64>,
    },
    /// Write a static page for every common code
    GeneratePages { out_dir: PathBuf },
    /// Print a fresh random secret as hex
    GenSecret {
        #[arg(long, default_value_t = 32)]
        bytes: usize,
    },
}

fn signing_key(secret: Option<String>) -> anyhow::Result<SigningKey> {
    let secret = secret.ok_or_else(|| anyhow::anyhow!("SIGNING_SECRET or --secret is required"))?;
    Ok(SigningKey::new(secret)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/');

    match cli.command {
        Commands::Sign { code, at } => {
            let key = signing_key(cli.secret)?;
            let code = ResultCode::parse(&code)?;
            let token = mint(&key, code, at.unwrap_or_else(|| Utc::now().timestamp()));
            println!("{}/result/{}?{}", base_url, code, token.query_string());
            println!("{}", serde_json::to_string(&SignResponse::from(token))?);
        }
        Commands::Verify { code, sig, ts, now } => {
            let key = signing_key(cli.secret)?;
            let token = Token {
                signature: sig,
                issued_at: ts,
            };
            let now = now.unwrap_or_else(|| Utc::now().timestamp());
            let c = Verifier::new(&key).classify_at(&code, Some(&token), now)?;
            println!(
                "{} {} outcome={:?} image={} title={}",
                c.code,
                c.glyphs,
                c.outcome,
                c.image().url(base_url),
                c.title()
            );
        }
        Commands::GeneratePages { out_dir } => {
            let count = write_static_pages(&out_dir, base_url)?;
            println!("Wrote {} pages to {}", count, out_dir.display());
        }
        Commands::GenSecret { bytes } => {
            let mut buf = vec![0u8; bytes.max(1)];
            rand::rng().fill_bytes(&mut buf);
            println!("{}", hex::encode(buf));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_verify() {
        let cli = Cli::try_parse_from([
            "sopo-cli", "--secret", "s", "verify", "sptn", "--sig", "abc", "--ts", "1000",
        ])
        .unwrap();
        match cli.command {
            Commands::Verify { code, ts, now, .. } => {
                assert_eq!(code, "sptn");
                assert_eq!(ts, 1000);
                assert_eq!(now, None);
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn missing_secret_is_an_error() {
        assert!(signing_key(None).is_err());
        assert!(signing_key(Some(String::new())).is_err());
    }
}
