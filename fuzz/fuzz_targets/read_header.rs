#![no_main]

// Header parsing must never panic, and every parsed header must survive a write/read cycle.

use binary_bakery_decoder::{is_image, read_header, width, write_header, PayloadType};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|words: Vec<u64>| {
    let Ok(header) = read_header(&words) else {
        return;
    };

    assert_eq!(is_image(&words), header.is_image());
    assert_eq!(width(&words).is_some(), header.is_image());

    // Fields the payload type does not carry read back as zero.
    let mut rewritten = [0u64; 3];
    write_header(&header, &mut rewritten).unwrap();
    let reparsed = read_header(&rewritten).unwrap();
    assert_eq!(reparsed, header);

    if header.payload_type == PayloadType::Generic {
        assert_eq!(header.width, 0);
    }
});
