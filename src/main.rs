use std::env::args;

use log::info;
use tcp_blast::{
    config::{load_payload, Config},
    worker::spawn_workers,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    env_logger::init();

    let cfg = Config::from_args(args().skip(1))?;
    let payload = load_payload(&cfg.file)?;

    println!(
        "blasting {} with {} connection(s), {} byte payload",
        cfg.target,
        cfg.connections,
        payload.len()
    );

    let _workers = spawn_workers(&cfg.target, cfg.connections, payload);

    // run until externally stopped
    tokio::signal::ctrl_c().await?;
    info!("interrupted, exiting");

    Ok(())
}
