use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.admin_code_digest, None);
    assert!(!cfg.admin_enabled());
    assert_eq!(cfg.session_ttl, Duration::hours(8));
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_vars(vars(&[
        ("PORT", "8080"),
        ("ADMIN_ACCESS_CODE", "  open-sesame "),
        ("ADMIN_SESSION_TTL_SECS", "600"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.admin_code_digest.as_deref(), Some(hash_access_code("open-sesame").as_str()));
    assert_eq!(cfg.session_ttl, Duration::minutes(10));
}

#[test]
fn blank_admin_code_disables_admin() {
    let cfg = ServerConfig::from_vars(vars(&[("ADMIN_ACCESS_CODE", "   ")])).unwrap();
    assert!(!cfg.admin_enabled());
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        ServerConfig::from_vars(vars(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
}

#[test]
fn zero_or_garbage_ttl_is_an_error() {
    for raw in ["0", "-5", "soon"] {
        assert_eq!(
            ServerConfig::from_vars(vars(&[("ADMIN_SESSION_TTL_SECS", raw)])),
            Err(ConfigError::InvalidSessionTtl(raw.to_owned())),
            "expected error for {raw:?}"
        );
    }
}

#[test]
fn hash_access_code_is_hex_sha256() {
    assert_eq!(
        hash_access_code("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn digests_match_requires_equal_strings() {
    let a = hash_access_code("one");
    assert!(digests_match(&a, &a.clone()));
    assert!(!digests_match(&a, &hash_access_code("two")));
    assert!(!digests_match(&a, &a[..10]));
}
