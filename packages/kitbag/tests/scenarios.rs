use std::collections::BTreeMap;

use collection_literals::btree;
use kitbag::mapping;
#[cfg(feature = "indexmap")]
use kitbag::mapping::Mapping;
use kitbag::sequence::{self, range_by, zip};
use kitbag::text::{fill_template, format_date, pad_left, DateNames, DateTimeParts};
use kitbag::value::{self, entries, json_to_value, path, Depth, Value, Walk};
use serde_json::json;

#[test]
#[cfg(feature = "indexmap")]
fn sequence_feeds_mapping() {
    let names = ["ada", "grace", "edsger"];
    let by_index: Mapping<usize, &str> =
        zip((sequence::range_to(names.len()), names)).collect();

    let long: Mapping<usize, &str> = mapping::filter(&by_index, |_, name| name.len() > 3);
    assert_eq!(long.values().copied().collect::<Vec<_>>(), ["grace", "edsger"]);

    let index_of: BTreeMap<&str, usize> = mapping::reverse_lookup(&by_index);
    assert_eq!(index_of["edsger"], 2);
    assert_eq!(by_index.len(), 3);
}

#[test]
fn countdown_labels() {
    let labels: Vec<String> = sequence::map(range_by(10, 0, -5).unwrap(), |n: i32| {
        pad_left(&n.to_string(), 3, '0')
    })
    .collect();
    assert_eq!(labels, ["010", "005"]);
}

#[test]
fn records_through_mapping_layer() {
    let properties = btree! {
        "a".to_string() => Value::from(1),
        "b".to_string() => Value::Null,
        "c".to_string() => Value::Float(f64::NAN),
    };
    let clean = value::na_removed(&properties);
    assert!(value::all_not_na(&clean).is_ok());
    assert!(value::all_not_na(&properties).is_err());

    let labels: BTreeMap<String, String> =
        mapping::map(&clean, |k, v| (k.to_uppercase(), v.to_string()));
    assert_eq!(labels, btree! { "A".to_string() => "1".to_string() });
}

#[test]
fn merged_config_rendered_through_template() {
    let defaults = json_to_value(json!({"greeting": {"word": "Hello", "mark": "!"}, "name": "world"}));
    let overrides = json_to_value(json!({"greeting": {"word": "Hi", "mark": null}, "name": "kit"}));
    let config = value::merge(&defaults, &overrides, Depth::Recursive).unwrap();

    let replacements: Vec<(String, String)> = entries(&config, Walk::leaves())
        .map(|(p, v)| (format!("{{{}}}", p), v.to_string()))
        .collect();
    let text = fill_template("{greeting/word}, {name}{greeting/mark}", replacements).unwrap();
    assert_eq!(text, "Hi, kit!");
    assert_eq!(
        value::get_property(&config, &path!("greeting/mark")),
        Some(&Value::from("!"))
    );
}

#[test]
fn dated_file_name() {
    let parts = DateTimeParts::date(2024, 2, 29).at(23, 59, 1, 5);
    let name = format_date(&parts, "log-{YYYY}{MM}{DD}-{hh}{mm}{ss}.txt", &DateNames::default());
    assert_eq!(name.unwrap(), "log-20240229-235901.txt");
}
