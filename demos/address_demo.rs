//! Example: Two-Family Address Walkthrough
//!
//! Constructs default addresses, widens IPv4 into IPv6, shows a rejected
//! narrowing and a successful one, printing every step through the generic
//! `IpAddress` capability.
//!
//! Run with: `cargo run --example address_demo [config.toml]`
//!
//! Set `NET_IP_LOG_LEVEL=debug` to see conversion diagnostics.

#![allow(clippy::uninlined_format_args)]

use net_ip::config::AddressConfig;
use net_ip::utils::init_logging;
use net_ip::{describe, Address, AddressError, AddressV4, AddressV6, IpAddress};
use tracing::{error, info};

fn print_address<A: IpAddress>(addr: &A) {
    println!("print_address: {}", describe(addr));
}

fn load_config() -> Result<AddressConfig, AddressError> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => AddressConfig::from_file(path)?,
        None => AddressConfig::default(),
    };
    config.apply_env()?;
    config.validate_strict()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    init_logging(&config.logging)?;
    info!(app = %config.logging.app_name, "Starting address walkthrough");

    println!("=== Two-Family Address Walkthrough ===\n");

    // 1. Defaults
    let mut ipv4 = AddressV4::default();
    let mut ipv6 = AddressV6::default();
    let mut ip = Address::default();
    println!("1. DEFAULTS");
    print_address(&ipv4);
    print_address(&ipv6);
    print_address(&ip);
    println!();

    // 2. Widening always succeeds
    println!("2. WIDENING");
    ipv4 = config.demo.v4_address.parse()?;
    ipv6.assign_from_v4(ipv4);
    print_address(&ipv6);
    ip = Address::V6(ipv6);
    print_address(&ip);
    ip = Address::V6(ipv4.to_v6());
    print_address(&ip);
    println!("   - Mapped form: {}", ipv4.to_ipv6_mapped());
    println!();

    // 3. Narrowing a native IPv6 address is rejected
    println!("3. REJECTED NARROWING");
    ipv6 = config.demo.native_v6_address.parse()?;
    print_address(&ipv6);
    match ipv4.assign_from_v6(&ipv6) {
        Ok(()) => println!("   - Unexpectedly narrowed to {}", ipv4),
        Err(e) => {
            error!(error = %e, address = %ipv6, "Narrowing rejected");
            println!("   - {e}");
            println!("   - IPv4 value kept: {}", ipv4);
        }
    }
    println!();

    // 4. Narrowing an embedded IPv4 address succeeds
    println!("4. SUCCESSFUL NARROWING");
    let embedded: AddressV6 = config.demo.embedded_v6_address.parse()?;
    print_address(&embedded);
    ipv4 = AddressV4::try_from_v6(&embedded)?;
    print_address(&ipv4);
    println!(
        "   - Round trip: {}",
        if AddressV6::from(ipv4).equals(&embedded) {
            "✓ Success"
        } else {
            "✗ Differs (input used the mapped form)"
        }
    );

    info!("Walkthrough complete");
    Ok(())
}
