use clap::Parser;
use gameslist_lib::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    gameslist_lib::run(Config::parse()).await
}
