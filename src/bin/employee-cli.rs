use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "employee-cli")]
#[command(about = "Command-line client for the employee service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every employee
    List,
    /// Create an employee
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: f64,
        #[arg(long)]
        age: i64,
    },
    /// Replace an employee's fields
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        salary: f64,
        #[arg(long)]
        age: i64,
    },
    /// Delete an employee
    Delete { id: String },
    /// Check service and store health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => client.get(format!("{}/employee", base)).send().await?,
        Commands::Create { name, salary, age } => {
            client.post(format!("{}/employee", base))
                .json(&json!({ "name": name, "salary": salary, "age": age }))
                .send()
                .await?
        }
        Commands::Update { id, name, salary, age } => {
            client.put(format!("{}/employee/{}", base, id))
                .json(&json!({ "name": name, "salary": salary, "age": age }))
                .send()
                .await?
        }
        Commands::Delete { id } => client.delete(format!("{}/employee/{}", base, id)).send().await?,
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
