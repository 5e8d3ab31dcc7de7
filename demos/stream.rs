//! Decodes modified COBS packets sent over an in-memory pipe, standing in for a UART.
//!
//! ```not_rust
//! cargo run --example stream
//! ```

use core::{error::Error, pin::pin};

use cobz::{Event, FramedRead};
use embedded_io_adapters::tokio_1::FromTokio;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("sender=info,receiver=info")
        .init();

    let (receiver, mut sender) = tokio::io::duplex(16);

    let sender = async move {
        // Line noise, then "Hi\0!" and "COBS" on the wire.
        let wire: &[&[u8]] = &[
            &[0x13, 0x37],
            &[0x00, 0x03, b'H', b'i', 0x02, b'!'],
            &[0x00, 0x05, b'C', b'O', b'B', b'S'],
        ];

        for bytes in wire {
            tracing::info!(target: "sender", ?bytes, "sending");

            sender.write_all(bytes).await?;
        }

        Ok::<(), Box<dyn Error>>(())
    };

    let buffer = &mut [0u8; 8];
    let mut framed = FramedRead::new(FromTokio::new(receiver), buffer);

    let receiver = async move {
        let stream = framed.stream();
        let mut stream = pin!(stream);

        while let Some(event) = stream.next().await.transpose()? {
            match event {
                Event::PacketStart { start, .. } => {
                    tracing::info!(target: "receiver", start, "packet start");
                }
                Event::DecodedByte { start, end, value } => {
                    tracing::info!(target: "receiver", start, end, %event, char = %(value as char), "decoded");
                }
            }
        }

        Ok::<(), Box<dyn Error>>(())
    };

    let (sender_result, receiver_result) = tokio::join!(sender, receiver);

    sender_result?;
    receiver_result?;

    Ok(())
}
