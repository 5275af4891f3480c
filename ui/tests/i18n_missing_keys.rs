//! Spanish is the fallback bundle; English must define exactly the same
//! message ids, each once.

use std::collections::BTreeSet;

const ES: &str = include_str!("../i18n/es/finca-ui.ftl");
const EN: &str = include_str!("../i18n/en/finca-ui.ftl");

/// Message ids in definition order, duplicates included.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.', '-']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn duplicates(ids: &[&str]) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    ids.iter()
        .filter(|id| !seen.insert(**id))
        .map(|id| id.to_string())
        .collect()
}

#[test]
fn no_message_is_defined_twice() {
    for (locale, src) in [("es", ES), ("en", EN)] {
        let ids = message_ids(src);
        assert!(!ids.is_empty(), "{locale} defines no messages");
        let dups = duplicates(&ids);
        assert!(dups.is_empty(), "{locale} defines these twice: {dups:?}");
    }
}

#[test]
fn english_matches_the_spanish_ids() {
    let es: BTreeSet<&str> = message_ids(ES).into_iter().collect();
    let en: BTreeSet<&str> = message_ids(EN).into_iter().collect();

    let missing: Vec<_> = es.difference(&en).collect();
    let extra: Vec<_> = en.difference(&es).collect();
    assert!(missing.is_empty(), "en is missing {missing:?}");
    assert!(extra.is_empty(), "en defines ids es lacks: {extra:?}");
}

#[test]
fn multiline_bodies_are_not_read_as_ids() {
    let src = "# comment\nguests-adults = { $count ->\n    [one] { $count } adulto\n   *[other] { $count } adultos\n}\n";
    assert_eq!(message_ids(src), vec!["guests-adults"]);
}
