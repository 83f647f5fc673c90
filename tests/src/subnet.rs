use lanmap_common::network::subnet::{Ipv4Subnet, parse_and_compute, subnet_key};
use lanmap_common::{CidrError, CidrFault};

#[test]
fn home_network() {
    let result = parse_and_compute("192.168.1.0/24").unwrap();

    assert_eq!(result.cidr, "192.168.1.0/24");
    assert_eq!(result.network_address, "192.168.1.0");
    assert_eq!(result.broadcast_address, "192.168.1.255");
    assert_eq!(result.first_usable, "192.168.1.1");
    assert_eq!(result.last_usable, "192.168.1.254");
    assert_eq!(result.subnet_mask, "255.255.255.0");
    assert_eq!(result.wildcard_mask, "0.0.0.255");
    assert_eq!(result.total_hosts, 256);
    assert_eq!(result.usable_hosts, 254);
}

#[test]
fn single_host() {
    let result = parse_and_compute("10.0.0.5/32").unwrap();

    assert_eq!(result.network_address, "10.0.0.5");
    assert_eq!(result.broadcast_address, "10.0.0.5");
    assert_eq!(result.first_usable, "10.0.0.5");
    assert_eq!(result.last_usable, "10.0.0.5");
    assert_eq!(result.total_hosts, 1);
    assert_eq!(result.usable_hosts, 1);
}

#[test]
fn usable_hosts_across_prefixes() {
    for prefix in 0..=32u8 {
        let result = parse_and_compute(&format!("172.16.40.9/{prefix}")).unwrap();
        let total = 1u64 << (32 - u32::from(prefix));
        assert_eq!(result.total_hosts, total, "/{prefix}");
        let usable = if prefix >= 31 { total } else { total - 2 };
        assert_eq!(result.usable_hosts, usable, "/{prefix}");
    }
}

#[test]
fn keys_agree_with_the_calculator() {
    let subnet: Ipv4Subnet = "192.168.77.201/24".parse().unwrap();
    assert_eq!(subnet_key(subnet.addr(), 24), "192.168.77.0/24");

    let result = parse_and_compute("192.168.77.201/24").unwrap();
    assert_eq!(format!("{}/24", result.network_address), subnet_key(subnet.addr(), 24));
}

#[test]
fn rejects_garbage() {
    for input in ["", "10.0.0.0", "10.0.0/8", "10.0.0.256/8", "10.0.0.0/33", "a.b.c.d/8", "10.0.0.0/x"] {
        let err: CidrError = parse_and_compute(input).unwrap_err();
        assert!(err.to_string().starts_with("invalid CIDR"), "{input}: {err}");
    }

    assert_eq!(
        parse_and_compute("10.0.0.0/33").unwrap_err().reason(),
        &CidrFault::PrefixOutOfRange("33".into())
    );
}
