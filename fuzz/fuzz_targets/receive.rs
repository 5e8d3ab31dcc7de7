//! If we panic!, we lose.
//!
//! ```not_rust
//! cargo +nightly fuzz run receive
//! ```

#![no_main]

use std::error::Error;

use cobz::{CobsDecoder, FramedRead, next};
use embedded_io_adapters::tokio_1::FromTokio;
use libfuzzer_sys::fuzz_target;
use tokio::{io::AsyncWriteExt, runtime::Runtime};

fuzz_target!(|data: &[u8]| {
    Runtime::new().expect("Runtime must build").block_on(async {
        fuzz(data).await.unwrap();
    });
});

const SIZE: usize = 64;

/// Decoding through a reader must match decoding the bytes directly.
async fn fuzz(data: &[u8]) -> Result<(), Box<dyn Error>> {
    let mut decoder = CobsDecoder::new();
    let expected: Vec<_> = decoder
        .decode(data.iter().enumerate().map(|(i, &byte)| (byte, i, i + 1)))
        .collect();

    let (read, mut write) = tokio::io::duplex(32);

    let read_buf = &mut [0u8; SIZE];

    let mut framed = FramedRead::new(FromTokio::new(read), read_buf);

    let reader = async move {
        let mut events = Vec::new();

        while let Some(event) = next!(framed).transpose()? {
            events.push(event);
        }

        Ok::<_, Box<dyn Error>>(events)
    };

    let writer = async move {
        for chunk in data.chunks(SIZE / 3) {
            write.write_all(chunk).await?;
            write.flush().await?;
        }

        Ok::<(), Box<dyn Error>>(())
    };

    let (reader_result, writer_result) = tokio::join!(reader, writer);

    assert_eq!(reader_result?, expected);

    writer_result?;

    Ok(())
}
