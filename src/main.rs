use aurora_rider::config::Config;
use aurora_rider::engine::Engine;
use aurora_rider::error::Error;
use aurora_rider::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::from_config(&config);

    serve(engine, config.bind_addr).await
}
