//! Address values are plain `Copy` data; these tests share and convert them
//! across threads without any synchronization.

#![allow(clippy::unwrap_used)]

use net_ip::{AddressV4, AddressV6, IpAddress};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync + 'static>() {}

#[test]
fn value_types_are_send_and_sync() {
    assert_send_sync::<AddressV4>();
    assert_send_sync::<AddressV6>();
    assert_send_sync::<net_ip::Address>();
    assert_send_sync::<net_ip::AddressError>();
}

#[test]
fn concurrent_parse_format_convert() {
    let iterations = 2_000u32;
    let shared: Arc<Vec<AddressV6>> = Arc::new(
        ["::", "2001:db8::1", "::ffff:10.0.0.1", "::192.168.0.1", "fe80::1"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect(),
    );

    let handles: Vec<_> = (0..8u32)
        .map(|worker| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..iterations {
                    let v4 = AddressV4::from((worker << 24) | i);
                    let text = v4.to_ipv6_compatible().to_canonical_string();
                    let back: AddressV6 = text.parse().unwrap();
                    assert_eq!(back.to_v4(), Ok(v4));

                    for addr in shared.iter() {
                        let reparsed: AddressV6 = addr.to_string().parse().unwrap();
                        assert!(reparsed.equals(addr));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn copies_are_independent_across_threads() {
    let original = AddressV4::new(10, 0, 0, 1);
    let mut moved = original;

    let changed = thread::spawn(move || {
        moved.assign_from_v6(&"::ffff:10.0.0.2".parse().unwrap()).unwrap();
        moved
    })
    .join()
    .unwrap();

    assert_eq!(original, AddressV4::new(10, 0, 0, 1));
    assert_eq!(changed, AddressV4::new(10, 0, 0, 2));
}
