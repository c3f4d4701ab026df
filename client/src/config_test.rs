use super::*;

#[test]
fn new_trims_trailing_slash_and_whitespace() {
    let config = BackendConfig::new(" https://abc.supabase.co/ ", " key ").unwrap();
    assert_eq!(config.url, "https://abc.supabase.co");
    assert_eq!(config.anon_key, "key");
}

#[test]
fn new_rejects_blank_values() {
    assert_eq!(BackendConfig::new("", "key"), None);
    assert_eq!(BackendConfig::new("https://x", "  "), None);
    assert_eq!(BackendConfig::new("/", "key"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_is_none_outside_the_browser() {
    assert_eq!(BackendConfig::from_document(), None);
}
