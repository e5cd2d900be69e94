use super::*;

#[test]
fn encode_pairs_escapes_reserved_characters() {
    assert_eq!(encode_pairs([("username", "a b"), ("password", "p&=?")]), "username=a%20b&password=p%26%3D%3F");
}

#[test]
fn with_query_returns_path_when_no_pairs() {
    assert_eq!(with_query("/login", []), "/login");
}

#[test]
fn with_query_encodes_redirect_path() {
    assert_eq!(with_query("/login", [("redirect", "/settings")]), "/login?redirect=%2Fsettings");
}

#[test]
fn with_query_appends_to_existing_query() {
    assert_eq!(with_query("/search?q=x", [("limit", "5")]), "/search?q=x&limit=5");
}

#[test]
fn path_only_strips_query_and_fragment() {
    assert_eq!(path_only("/books/3?tab=tree#top"), "/books/3");
    assert_eq!(path_only("/books/3#top"), "/books/3");
    assert_eq!(path_only("/books"), "/books");
}
