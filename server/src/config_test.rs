use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on", " TRUE "].iter().enumerate() {
        let key = format!("__TEST_CFG_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "Off"].iter().enumerate() {
        let key = format!("__TEST_CFG_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_unset_or_invalid_is_none() {
    assert_eq!(env_bool("__TEST_CFG_EB_SURELY_UNSET_31__"), None);
    let key = "__TEST_CFG_EB_MAYBE_32__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// parse_or
// =============================================================================

#[test]
fn parse_or_uses_default_when_unset() {
    assert_eq!(parse_or("__TEST_CFG_PO_UNSET_41__", 3000_u16), Ok(3000));
}

#[test]
fn parse_or_parses_trimmed_value() {
    let key = "__TEST_CFG_PO_SET_42__";
    unsafe { std::env::set_var(key, " 8080 ") };
    assert_eq!(parse_or(key, 3000_u16), Ok(8080));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn parse_or_rejects_garbage() {
    let key = "__TEST_CFG_PO_BAD_43__";
    unsafe { std::env::set_var(key, "eighty") };
    assert_eq!(parse_or(key, 3000_u16), Err(ConfigError::Invalid { var: key, value: "eighty".to_owned() }));
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// from_env — the only test touching the shared variable names.
// =============================================================================

#[test]
fn from_env_requires_database_url_then_applies_defaults() {
    unsafe {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("PORT");
        std::env::remove_var("STATIC_DIR");
        std::env::remove_var("SESSION_TTL_HOURS");
        std::env::remove_var("COOKIE_SECURE");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("SEED_DEMO_USERS");
        std::env::set_var("PUBLIC_URL", "https://myevent.usm.my");
    }
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::Missing("DATABASE_URL")));

    unsafe { std::env::set_var("DATABASE_URL", "postgres://localhost/myevent") };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/myevent");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    assert_eq!(cfg.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
    assert!(cfg.cookie_secure, "https public url should imply secure cookies");
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(!cfg.seed_demo_users, "demo accounts must be opt-in");

    unsafe { std::env::set_var("COOKIE_SECURE", "false") };
    assert!(!ServerConfig::from_env().unwrap().cookie_secure);

    unsafe { std::env::set_var("DB_MAX_CONNECTIONS", "lots") };
    assert_eq!(
        ServerConfig::from_env(),
        Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", value: "lots".to_owned() })
    );
    unsafe { std::env::set_var("DB_MAX_CONNECTIONS", "12") };
    assert_eq!(ServerConfig::from_env().unwrap().db_max_connections, 12);

    unsafe { std::env::set_var("SEED_DEMO_USERS", "sometimes") };
    assert_eq!(
        ServerConfig::from_env(),
        Err(ConfigError::Invalid { var: "SEED_DEMO_USERS", value: "sometimes".to_owned() })
    );
    unsafe { std::env::set_var("SEED_DEMO_USERS", "true") };
    assert!(ServerConfig::from_env().unwrap().seed_demo_users);

    unsafe {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("COOKIE_SECURE");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("SEED_DEMO_USERS");
        std::env::remove_var("PUBLIC_URL");
    }
}
