use super::*;

struct Target {
    property1: &'static str,
    property2: i32,
}

fn target() -> Target {
    Target { property1: "Foo", property2: 1 }
}

fn filter(query: &str) -> PropertyFilter<Target> {
    let mut filter = PropertyFilter::new(query);
    filter.include(|t: &Target| t.property1);
    filter.include(|t: &Target| t.property2);
    filter
}

#[test]
fn loose_match_any_word() {
    // "10" matches nothing, "foo" matches property1 case-insensitively
    assert!(filter("10 foo").is_loose_match(&target(), false));
}

#[test]
fn loose_match_case_sensitive() {
    assert!(!filter("foo").is_loose_match(&target(), true));
    assert!(filter("Foo").is_loose_match(&target(), true));
}

#[test]
fn loose_match_is_word_equality_not_substring() {
    assert!(!filter("fo").is_loose_match(&target(), false));
}

#[test]
fn loose_match_numeric_property() {
    assert!(filter("1").is_loose_match(&target(), false));
    assert!(!filter("10").is_loose_match(&target(), false));
}

#[test]
fn empty_query_matches_everything() {
    assert!(filter("").is_loose_match(&target(), false));
    assert!(filter("").is_exact_match(&target(), true));
}

#[test]
fn exact_match_whole_value() {
    assert!(filter("Foo").is_exact_match(&target(), true));
    assert!(!filter("foo").is_exact_match(&target(), true));
    assert!(filter("foo").is_exact_match(&target(), false));

    // word overlap is not enough for exact
    let mut multi = PropertyFilter::new("Jon");
    multi.include(|t: &&str| *t);
    assert!(!multi.is_exact_match(&"Jon Snow", true));
}

#[test]
fn apply_loose_default() {
    let people = vec![
        Target { property1: "Jon Snow", property2: 1 },
        Target { property1: "Arya Stark", property2: 2 },
        Target { property1: "Sansa Stark", property2: 3 },
    ];

    let mut filter = PropertyFilter::new("stark");
    filter.include(|t: &Target| t.property1);

    let found = filter.apply(people);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].property1, "Arya Stark");
    assert_eq!(found[1].property1, "Sansa Stark");
}

#[test]
fn apply_exact_mode() {
    let words = vec!["Foo", "foo", "Foo Bar"];

    let mut filter = PropertyFilter::new("Foo");
    filter.include(|t: &&str| *t);
    filter.match_mode(MatchMode::Exact).case_sensitive(true);

    assert_eq!(filter.apply(words), ["Foo"]);
}

#[test]
fn apply_empty_query_passes_through() {
    let words = vec!["a", "b"];
    let mut filter = PropertyFilter::new("");
    filter.include(|t: &&str| *t);

    assert_eq!(filter.apply(words), ["a", "b"]);
}

#[test]
fn apply_without_properties_matches_nothing() {
    let filter = PropertyFilter::<i32>::new("query");
    assert!(filter.apply(vec![1, 2, 3]).is_empty());
}
