use clap::{Parser, Subcommand};
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "cep-cli")]
#[command(about = "Query a running CEP gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the address for a postal code
    Lookup {
        /// Postal code, e.g. 01001000
        cep: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Lookup { cep } => {
            let res = client
                .get(&cli.url)
                .query(&[("cep", cep.as_str())])
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        let hint = match status {
            StatusCode::BAD_REQUEST => "postal code missing or empty",
            StatusCode::NOT_FOUND => "gateway URL must point at the root path",
            StatusCode::INTERNAL_SERVER_ERROR => "upstream lookup failed",
            _ => "unexpected status",
        };
        eprintln!("Error: gateway returned status {} ({})", status, hint);
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
