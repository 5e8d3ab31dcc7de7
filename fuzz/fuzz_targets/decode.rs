//! If we panic!, we lose.
//!
//! ```not_rust
//! cargo +nightly fuzz run decode
//! ```

#![no_main]

use cobz::{CobsDecoder, Event};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = CobsDecoder::new();
    let mut synchronized = false;

    for (i, &byte) in data.iter().enumerate() {
        let before = *decoder.state();
        let events = decoder.feed(byte, i, i + 1);
        let after = *decoder.state();

        if byte == 0 {
            synchronized = true;

            assert_eq!(events.as_slice(), &[Event::PacketStart { start: i, end: i + 1 }]);
            assert!(after.awaits_code());
            assert_eq!(after.code, 0xFF);

            continue;
        }

        if !synchronized {
            assert!(events.is_empty());

            continue;
        }

        if before.copy > 0 {
            assert_eq!(after.copy, before.copy - 1);
        }

        for event in &events {
            match *event {
                Event::PacketStart { .. } => panic!("PacketStart without delimiter"),
                Event::DecodedByte { start, value, .. } => {
                    // Values lag one byte behind, implied zeros do not.
                    assert!(start == i || start + 1 == i);

                    if value == 0 {
                        assert_ne!(after.code, 0xFF);
                        assert_eq!(after.copy, 0);
                    }
                }
            }
        }
    }
});
