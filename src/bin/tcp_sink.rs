use std::{env::args, time::Instant};

use tokio::{io::AsyncReadExt, net::TcpListener};

/// Counting sink, the in-repo peer for tcp-blast: accepts connections,
/// discards received bytes and reports per-connection totals on close.
#[tokio::main]
async fn main() -> eyre::Result<()> {
    env_logger::init();

    let bind = args().nth(1).unwrap_or("[::0]:1234".to_string());
    let socket = TcpListener::bind(&bind).await?;
    println!("tcp sink on {bind}");

    while let Ok((mut stream, addr)) = socket.accept().await {
        println!("+ {addr}");

        tokio::spawn(async move {
            let mut buf = vec![0u8; 64 * 1024];
            let start = Instant::now();
            let mut bytes: u64 = 0;
            let mut reads: u64 = 0;

            while let Ok(n) = stream.read(&mut buf).await {
                if n == 0 {
                    break;
                }
                bytes += n as u64;
                reads += 1;
            }

            let secs = start.elapsed().as_secs_f64();
            let mbytes = bytes as f64 / 1024.0 / 1024.0;
            println!(
                "- {addr} ({bytes} bytes in {reads} reads, {:.2} MBit/s)",
                8.0 * mbytes / secs
            );
        });
    }

    Ok(())
}
