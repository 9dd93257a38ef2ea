#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    taskhub_cli::run_server().await
}
