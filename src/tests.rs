#![allow(missing_docs)]

use std::vec::Vec;

pub fn init_tracing() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_max_level(tracing::Level::TRACE)
            .finish(),
    )
    .ok();
}

/// Encodes `payload` the way a modified COBS sender does: a delimiter followed by the stuffed bytes.
pub fn encode(payload: &[u8]) -> Vec<u8> {
    let mut out = std::vec![0x00];

    let mut code = 1u8;
    let mut code_index = out.len();
    out.push(0);

    let mut read = 0;

    while read < payload.len() {
        if code != 0xFF {
            let byte = payload[read];
            read += 1;

            if byte != 0 {
                out.push(byte);
                code += 1;

                continue;
            }
        }

        out[code_index] = code;

        code = 1;
        code_index = out.len();
        out.push(0);
    }

    out[code_index] = code;

    out
}

/// Returns the bytes the decoder recovers from [`encode`]d `payload`.
///
/// The last group's zero is emitted too, unless that group is a full `0xFF` run.
pub fn decoded(payload: &[u8]) -> Vec<u8> {
    let trailing = payload.iter().rev().take_while(|&&b| b != 0).count();

    let mut out = payload.to_vec();

    if trailing == 0 || trailing % 254 != 0 {
        out.push(0x00);
    }

    out
}

macro_rules! framed_read {
    ($chunks:ident, $expected:ident) => {
        framed_read!($chunks, $expected, 1024, 1024);
    };
    ($chunks:ident, $expected:ident, $buffer_size:literal) => {
        framed_read!($chunks, $expected, $buffer_size, 1024);
    };
    ($chunks:ident, $expected:ident, $buffer_size:literal, $duplex_max_size:literal $(, $err:ident )?) => {
        let chunks_clone = $chunks.clone();
        let mut collected = Vec::<Event<usize>>::new();

        let (read, mut write) = tokio::io::duplex($duplex_max_size);

        tokio::spawn(async move {
            for chunk in chunks_clone {
                write.write_all(chunk.as_ref()).await.expect("Must write");
            }
        });

        let buffer = &mut [0_u8; $buffer_size];
        let mut framer =
            crate::FramedRead::new(embedded_io_adapters::tokio_1::FromTokio::new(read), buffer);

        $(
            let _ = stringify!($err);
            let mut errored = false;
        )?

        while let Some(item) = $crate::next!(framer) {
            match item {
                Ok(event) => {
                    collected.push(event);
                }
                Err(_err) => {
                    #[cfg(not(feature = "defmt"))]
                    crate::logging::error!(target: "cobz::test", "Error: {:?}", _err);

                    $(
                        assert!(matches!(_err, crate::ReadError::$err));
                        errored = true;
                    )?

                    break;
                }
            }
        }

        $(
            let _ = stringify!($err);
            assert!(errored, "Expected an error");
        )?

        assert_eq!($expected, collected);
    };
}

pub(crate) use framed_read;

#[test]
fn encoder_matches_known_vectors() {
    assert_eq!(encode(b""), [0x00, 0x01]);
    assert_eq!(encode(&[0x00]), [0x00, 0x01, 0x01]);
    assert_eq!(encode(&[0x11, 0x22, 0x00, 0x33]), [0x00, 0x03, 0x11, 0x22, 0x02, 0x33]);

    let full: Vec<u8> = (1..=254).collect();
    let mut expected = std::vec![0x00, 0xFF];
    expected.extend(&full);

    assert_eq!(encode(&full), expected);
}
