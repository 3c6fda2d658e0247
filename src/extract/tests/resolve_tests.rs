use crate::extract::resolve::{Resolution, Resolver, resolve, resolve_reference};

#[test]
fn test_relative_references() {
    let base = "https://example.com/dir/page.html?q=1";

    assert_eq!(resolve("/page", "https://example.com/dir/"), "https://example.com/page");
    assert_eq!(resolve("other.html", base), "https://example.com/dir/other.html");
    assert_eq!(resolve("../up", base), "https://example.com/up");
    assert_eq!(resolve("?q=2", base), "https://example.com/dir/page.html?q=2");
    assert_eq!(resolve("#top", base), "https://example.com/dir/page.html?q=1#top");
    assert_eq!(resolve("//cdn.example.net/a.js", base), "https://cdn.example.net/a.js");
}

#[test]
fn test_absolute_reference_is_idempotent() {
    let absolute = "https://other.org/path/to?x=1#frag";
    for base in [
        "https://example.com/",
        "http://example.com/deep/dir/",
        "not a base at all",
        "",
    ] {
        assert_eq!(resolve(absolute, base), absolute, "base {:?}", base);
    }
}

#[test]
fn test_unparseable_base_falls_back() {
    let reference = "not a valid url \u{0000}";
    let resolution = resolve_reference(reference, "::no scheme::");

    assert_eq!(resolution, Resolution::Unresolved(reference.to_string()));
    assert!(!resolution.is_resolved());
    assert_eq!(resolve(reference, "::no scheme::"), reference);
}

#[test]
fn test_unjoinable_reference_falls_back() {
    let resolution = resolve_reference("http://[::1", "https://example.com/");
    assert_eq!(resolution.as_str(), "http://[::1");
    assert!(!resolution.is_resolved());

    // A base that cannot be a base (no hierarchical path) only accepts absolute references
    assert_eq!(resolve("relative/path", "mailto:someone@example.com"), "relative/path");
    assert_eq!(resolve("https://example.com/", "mailto:someone@example.com"), "https://example.com/");
}

#[test]
fn test_resolver_reuses_parsed_base() {
    let resolver = Resolver::new("https://example.com/a/b/");

    let first = resolver.resolve("c");
    let second = resolver.resolve("c");
    assert_eq!(first, second);
    assert_eq!(first, Resolution::Resolved("https://example.com/a/b/c".to_string()));
    assert!(resolver.resolve("/root").is_resolved());
}

#[test]
fn test_empty_reference_resolves_to_base() {
    assert_eq!(
        resolve("", "https://example.com/dir/page#frag"),
        "https://example.com/dir/page"
    );
}
