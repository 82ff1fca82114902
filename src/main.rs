use clap::Parser;
use ipstamp::{app::App, init::settings::Settings};

/// Ipstamp webserver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Server address
    #[arg(short, long)]
    address: Option<String>,
    /// Server port
    #[arg(short, long)]
    port: Option<u16>,
    /// Config file path
    #[arg(short, long)]
    config_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = Settings::new(args.config_file, args.address, args.port)?;
    settings.print();

    let address = format!("{}:{}", settings.address, settings.port);

    if let Err(e) = App::new().serve(&address).await {
        println!("Server exited with error: {}", e);
        return Err(e.into());
    }
    println!("Server exited");

    Ok(())
}
