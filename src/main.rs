#[tokio::main]
async fn main() -> std::io::Result<()> {
    zone_server::run_with_config().await
}
