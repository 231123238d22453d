use super::*;

fn base() -> ResourceBuilder {
    ResourceBuilder::for_host(Scheme::Http, "www.google.com").unwrap()
}

#[test]
fn for_host_initializes() {
    let builder = ResourceBuilder::for_host(Scheme::Https, "www.google.com").unwrap();
    assert_eq!(builder.uri_string().unwrap(), "https://www.google.com");
}

#[test]
fn for_host_unspecified_scheme_fails() {
    let err = ResourceBuilder::for_host(Scheme::Unspecified, "www.google.com").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn for_host_empty_host_fails() {
    let err = ResourceBuilder::for_host(Scheme::Http, "").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn render_without_scheme_fails() {
    let mut builder = ResourceBuilder::new();
    builder.with_host("www.google.com");

    assert!(matches!(builder.uri_string(), Err(Error::State(_))));
}

#[test]
fn render_without_host_fails() {
    let mut builder = ResourceBuilder::new();
    builder.with_scheme(Scheme::Http);

    assert!(matches!(builder.uri_string(), Err(Error::State(_))));
}

#[test]
fn empty_host_keeps_previous() {
    let mut builder = base();
    builder.with_host("");

    assert_eq!(builder.uri_string().unwrap(), "http://www.google.com");
}

#[test]
fn host_is_trimmed() {
    let mut builder = ResourceBuilder::new();
    builder.with_scheme(Scheme::Http).with_host(" www.google.com/ ");

    assert_eq!(builder.uri_string().unwrap(), "http://www.google.com");
}

#[test]
fn port_boundaries() {
    assert!(base().with_port(0).is_err());
    assert!(base().with_port(65536).is_err());
    assert!(base().with_port(1).is_ok());
    assert!(base().with_port(65535).is_ok());
}

#[test]
fn render_with_port() {
    let mut builder = base();
    builder.with_port(1234).unwrap();

    assert_eq!(builder.uri_string().unwrap(), "http://www.google.com:1234");
}

#[test]
fn render_with_path() {
    let mut builder = base();
    builder.with_path("/api/v2/");

    assert_eq!(builder.uri_string().unwrap(), "http://www.google.com/api/v2");
}

#[test]
fn path_overwrites() {
    let mut builder = base();
    builder.with_path("first").with_path("second");

    assert_eq!(builder.uri_string().unwrap(), "http://www.google.com/second");
}

#[test]
fn render_with_segments() {
    let mut builder = base();
    builder
        .with_segment_pair("FirstName", "Jon")
        .unwrap()
        .with_segment_pair("LastName", "Snow")
        .unwrap();

    assert_eq!(
        builder.uri_string().unwrap(),
        "http://www.google.com/FirstName/Jon/LastName/Snow",
    );
}

#[test]
fn segments_follow_path() {
    let mut builder = base();
    builder.with_path("people");
    builder.with_segment_pair("FirstName", "Jon").unwrap();

    assert_eq!(
        builder.uri_string().unwrap(),
        "http://www.google.com/people/FirstName/Jon",
    );
}

#[test]
fn duplicate_segment_names_append() {
    let mut builder = base();
    builder
        .with_segment_pair("tag", "a")
        .unwrap()
        .with_segment_pair("tag", "b")
        .unwrap();

    assert_eq!(
        builder.uri_string().unwrap(),
        "http://www.google.com/tag/a/tag/b",
    );
}

#[test]
fn empty_segment_parts_fail() {
    assert!(matches!(
        base().with_segment_pair("", "Jon"),
        Err(Error::Validation(_)),
    ));
    assert!(matches!(
        base().with_segment_pair("FirstName", ""),
        Err(Error::Validation(_)),
    ));
}

#[test]
fn render_with_query_object() {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Query {
        location: &'static str,
        position: &'static str,
    }

    let mut builder = base();
    builder
        .with_query(&Query {
            location: "Castle Black",
            position: "Lord Commander",
        })
        .unwrap();

    assert_eq!(
        builder.uri_string().unwrap(),
        "http://www.google.com?Location=Castle+Black&Position=Lord+Commander",
    );
}

#[test]
fn render_with_query_pairs() {
    let mut builder = base();
    builder
        .with_query_pairs([("a", "1"), ("b", "2"), ("a", "3")])
        .unwrap();

    assert_eq!(builder.uri_string().unwrap(), "http://www.google.com?a=3&b=2");
}

#[test]
fn empty_query_pairs_fail() {
    let pairs: [(&str, &str); 0] = [];
    assert!(matches!(
        base().with_query_pairs(pairs),
        Err(Error::Validation(_)),
    ));
}

// Known asymmetry kept from the legacy renderer: segment pairs are appended
// raw while query values are percent-encoded.
#[test]
fn segments_are_not_encoded_but_query_is() {
    let mut builder = base();
    builder.with_segment_pair("full name", "Jon Snow").unwrap();
    builder.with_query_pairs([("full name", "Jon Snow")]).unwrap();

    assert_eq!(
        builder.uri_string().unwrap(),
        "http://www.google.com/full name/Jon Snow?full+name=Jon+Snow",
    );
}

#[test]
fn render_is_idempotent() {
    let mut builder = base();
    builder.with_path("users");
    builder.with_query_pairs([("page", "1")]).unwrap();

    assert_eq!(builder.uri_string().unwrap(), builder.uri_string().unwrap());
}

#[test]
fn build_uri_parses() {
    let mut builder = base();
    builder.with_port(8080).unwrap();
    builder.with_path("users");

    let uri = builder.build_uri().unwrap();
    assert_eq!(uri.host(), Some("www.google.com"));
    assert_eq!(uri.port_u16(), Some(8080));
    assert_eq!(uri.path(), "/users");
}
