use listen_addr::{AddressError, IpAddress, OptionValue, SocketAddress};

// Helper to build an address that is known to be valid
fn valid(ip: &str, port: i64) -> SocketAddress {
    match SocketAddress::new(ip, port) {
        Ok(addr) => addr,
        Err(e) => panic!("{}:{} should be valid, got {}", ip, port, e),
    }
}

#[test]
fn test_loopback_ipv4() {
    let addr = valid("127.0.0.1", 80);
    assert_eq!(addr.ip(), IpAddress::V4([127, 0, 0, 1]));
    assert_eq!(addr.port(), 80);
    assert_eq!(addr.to_text(), "127.0.0.1:80");
}

#[test]
fn test_link_local_ipv6() {
    let addr = valid("fe80::204:acff:fe17:bf38", 80);
    assert_eq!(addr.to_text(), "[FE80::204:ACFF:FE17:BF38]:80");
}

#[test]
fn test_ipv6_with_embedded_ipv4() {
    let addr = valid("::ffff:10.0.0.1", 8080);
    assert_eq!(addr.ip(), IpAddress::V6([0, 0, 0, 0, 0, 0xffff, 0x0a00, 0x0001]));
    assert_eq!(addr.to_text(), "[::FFFF:10.0.0.1]:8080");
}

#[test]
fn test_out_of_range_octets() {
    assert_eq!(
        SocketAddress::new("100.200.300.400", 80),
        Err(AddressError::InvalidIp)
    );
}

#[test]
fn test_out_of_range_port() {
    assert_eq!(
        SocketAddress::new("0.0.0.0", 99999),
        Err(AddressError::InvalidPort)
    );
}

#[test]
fn test_ip_error_wins_over_port_error() {
    let err = SocketAddress::new("bad-ip", 99999).unwrap_err();
    assert_eq!(err, AddressError::InvalidIp);
    assert_eq!(err.as_str(), "invalid_ip");
}

#[test]
fn test_port_boundaries() {
    assert_eq!(valid("0.0.0.0", 0).port(), 0);
    assert_eq!(valid("0.0.0.0", 65535).port(), 65535);
    assert_eq!(
        SocketAddress::new("0.0.0.0", -1),
        Err(AddressError::InvalidPort)
    );
    assert_eq!(
        SocketAddress::new("0.0.0.0", 65536),
        Err(AddressError::InvalidPort)
    );
}

#[test]
fn test_non_integer_ports() {
    assert_eq!(
        SocketAddress::new("0.0.0.0", "8080"),
        Err(AddressError::InvalidPort)
    );
    assert_eq!(
        SocketAddress::new("0.0.0.0", 8080.0),
        Err(AddressError::InvalidPort)
    );
}

#[test]
fn test_dotted_decimal_round_trip() {
    for a in (0..=255i64).step_by(51) {
        for b in [0i64, 1, 127, 128, 254, 255] {
            let text = format!("{}.{}.{}.{}", a, b, 255 - a, 255 - b);
            for port in [0i64, 1, 1023, 1024, 8080, 65535] {
                let addr = valid(&text, port);
                assert_eq!(addr.to_text(), format!("{}:{}", text, port));
            }
        }
    }
}

#[test]
fn test_ipv6_text_normalises_case() {
    let lower = valid("2001:db8::ff00:42:8329", 443);
    let upper = valid("2001:DB8::FF00:42:8329", 443);
    assert_eq!(lower, upper);
    assert_eq!(lower.to_text(), "[2001:DB8::FF00:42:8329]:443");
}

#[test]
fn test_bad_tuples() {
    let tuples: [Vec<i64>; 6] = [
        vec![],
        vec![127, 0, 1],
        vec![127, 0, 0, 1, 0],
        vec![256, 0, 0, 1],
        vec![1, 2, 3, 4, 5, 6, 7],
        vec![0, 0, 0, 0, 0, 0, 0, 70000],
    ];
    for tuple in tuples {
        assert_eq!(
            SocketAddress::new(tuple.clone(), 80),
            Err(AddressError::InvalidIp),
            "{tuple:?}"
        );
    }
}

#[test]
fn test_tuple_matches_text() {
    assert_eq!(
        SocketAddress::new(vec![192i64, 168, 1, 1], 80),
        SocketAddress::new("192.168.1.1", 80)
    );
}

#[test]
fn test_to_options_base() {
    let addr = valid("127.0.0.1", 80);
    assert_eq!(
        addr.base_options().into_vec(),
        vec![
            ("ip".to_string(), OptionValue::Ip(IpAddress::V4([127, 0, 0, 1]))),
            ("port".to_string(), OptionValue::Port(80)),
        ]
    );
}

#[test]
fn test_to_options_override() {
    let addr = valid("127.0.0.1", 80);
    let options = addr.to_options([("port", 8888u16)]);
    assert_eq!(
        options.into_vec(),
        vec![
            ("ip".to_string(), OptionValue::Ip(IpAddress::V4([127, 0, 0, 1]))),
            ("port".to_string(), OptionValue::Port(8888)),
        ]
    );
}

#[test]
fn test_to_options_untyped_port_override() {
    let addr = valid("127.0.0.1", 80);
    let options = addr.to_options([("port", 8888)]);
    assert_eq!(
        options.into_vec(),
        vec![
            ("ip".to_string(), OptionValue::Ip(IpAddress::V4([127, 0, 0, 1]))),
            ("port".to_string(), OptionValue::Port(8888)),
        ]
    );
}

#[test]
fn test_to_options_append() {
    let addr = valid("127.0.0.1", 80);
    let options = addr.to_options([("compress", true)]);
    assert_eq!(
        options.into_vec(),
        vec![
            ("ip".to_string(), OptionValue::Ip(IpAddress::V4([127, 0, 0, 1]))),
            ("port".to_string(), OptionValue::Port(80)),
            ("compress".to_string(), OptionValue::Bool(true)),
        ]
    );
}

#[test]
fn test_to_options_mixed_overrides_keep_order() {
    let addr = valid("::1", 80);
    let options = addr.to_options([
        ("backlog", OptionValue::Integer(64)),
        ("ip", OptionValue::Ip(IpAddress::V6([0; 8]))),
        ("active", OptionValue::Bool(false)),
    ]);
    assert_eq!(
        options.keys().collect::<Vec<_>>(),
        vec!["ip", "port", "backlog", "active"]
    );
    assert_eq!(options.get("ip"), Some(&OptionValue::Ip(IpAddress::V6([0; 8]))));
}
