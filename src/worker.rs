use std::{sync::Arc, time::Duration};

use eyre::{eyre, WrapErr};
use log::{debug, warn};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{lookup_host, TcpStream},
    sync::watch,
    task::JoinHandle,
    time,
};

/// Scratch buffer for the drain loop, large enough to empty an echoing
/// peer's socket buffer in a few reads.
pub const DRAIN_BUF_LEN: usize = 64 * 1024;

/// Pause between payload bursts on every connection.
pub const SEND_INTERVAL: Duration = Duration::from_millis(100);

/// Drives one connection: dials `target`, keeps draining whatever the peer
/// sends back, and writes the full payload every [`SEND_INTERVAL`] until the
/// connection dies.
///
/// Resolution and dial failures are terminal for this worker only.
pub async fn run_connection(target: &str, payload: Arc<[u8]>) -> eyre::Result<()> {
    let addr = lookup_host(target)
        .await
        .wrap_err_with(|| format!("unable to resolve address {target}"))?
        .next()
        .ok_or_else(|| eyre!("address {target} resolved to nothing"))?;

    let stream = TcpStream::connect(addr)
        .await
        .wrap_err_with(|| format!("unable to connect to {addr}"))?;
    debug!("connected to {addr}");

    let (mut rd, mut wr) = stream.into_split();

    // Discard everything the peer sends so its write buffer never fills up.
    // Dropping the sender on exit is the done signal for the write loop.
    let (done_tx, mut done_rx) = watch::channel(());
    tokio::spawn(async move {
        let _done_tx = done_tx;
        let mut buf = vec![0u8; DRAIN_BUF_LEN];
        loop {
            match rd.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
        }
    });

    loop {
        if let Err(e) = wr.write_all(&payload).await {
            debug!("{addr}: write failed, stopping: {e}");
            break;
        }
        tokio::select! {
            _ = time::sleep(SEND_INTERVAL) => {}
            // a dropped sender means the drain task saw EOF or a read error
            res = done_rx.changed() => if res.is_err() {
                break;
            },
        }
    }
    debug!("connection to {addr} closed");

    Ok(())
}

/// Starts `count` independent workers sharing the same payload. A worker
/// that fails to resolve or dial is logged and abandoned; its siblings keep
/// running.
pub fn spawn_workers(target: &str, count: usize, payload: Arc<[u8]>) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|_| {
            let target = target.to_string();
            let payload = payload.clone();
            tokio::spawn(async move {
                if let Err(e) = run_connection(&target, payload).await {
                    warn!("worker stopped: {e:#}");
                }
            })
        })
        .collect()
}
