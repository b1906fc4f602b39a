#![no_main]

use libfuzzer_sys::fuzz_target;
use net_ip::{format_v4, format_v6, parse_v4, parse_v6, AddressV4};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Accepted input must format to text that parses back to the same value
    if let Ok(addr) = parse_v4(text) {
        assert_eq!(parse_v4(&format_v4(&addr)), Ok(addr));
    }

    if let Ok(addr) = parse_v6(text) {
        assert_eq!(parse_v6(&format_v6(&addr)), Ok(addr));
        // Narrowing must agree with the predicate
        assert_eq!(AddressV4::try_from(addr).is_ok(), addr.is_v4_representable());
    }
});
