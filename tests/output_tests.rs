use indexmap::IndexMap;
use serde_json::Value;

use networth::output::{emit, render};
use networth::portfolio::{NetWorth, ProductBreakdown};

fn sample_net_worth() -> NetWorth {
    let mut prices = IndexMap::new();
    prices.insert("ETH".to_string(), 2000.0);
    prices.insert("USDC".to_string(), 1.0);

    let mut balances = IndexMap::new();
    balances.insert("ETH".to_string(), 1.5);
    balances.insert("USDC".to_string(), 250.0);

    let mut tokens = IndexMap::new();
    tokens.insert("USDC".to_string(), 250.0);
    let mut products = IndexMap::new();
    products.insert(
        "Aave".to_string(),
        ProductBreakdown { value: 250.0, tokens },
    );

    NetWorth {
        value: 3250.0,
        networks: vec!["ETHEREUM_MAINNET".to_string()],
        prices,
        balances,
        products,
    }
}

#[test]
fn render_without_flags_is_the_full_numeric_object() {
    let rendered = render(&sample_net_worth(), false, &[]).unwrap();

    assert_eq!(rendered["value"], 3250.0);
    assert_eq!(rendered["prices"]["ETH"], 2000.0);
    assert_eq!(rendered["products"]["Aave"]["value"], 250.0);
}

#[test]
fn format_turns_every_number_into_a_display_string() {
    let rendered = render(&sample_net_worth(), true, &[]).unwrap();

    // value fields render as currency, top-level and nested alike.
    assert_eq!(rendered["value"], "$3,250.00");
    assert_eq!(rendered["products"]["Aave"]["value"], "$250.00");

    // Everything else renders as plain decimals.
    assert_eq!(rendered["prices"]["ETH"], "2000");
    assert_eq!(rendered["balances"]["ETH"], "1.5");
    assert_eq!(rendered["products"]["Aave"]["tokens"]["USDC"], "250");

    // Strings stay strings.
    assert_eq!(rendered["networks"][0], "ETHEREUM_MAINNET");
}

#[test]
fn only_with_a_single_field_returns_the_bare_value() {
    let rendered = render(&sample_net_worth(), false, &["value".to_string()]).unwrap();
    assert_eq!(rendered, serde_json::json!(3250.0));
}

#[test]
fn only_with_two_fields_builds_an_object_in_given_order() {
    let rendered = render(
        &sample_net_worth(),
        false,
        &["value".to_string(), "networks".to_string()],
    )
    .unwrap();

    let keys: Vec<&String> = rendered.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["value", "networks"]);
    assert_eq!(rendered["value"], 3250.0);
}

#[test]
fn format_composes_with_field_selection() {
    let rendered = render(&sample_net_worth(), true, &["value".to_string()]).unwrap();
    assert_eq!(rendered, Value::String("$3,250.00".to_string()));
}

#[tokio::test]
async fn emit_writes_one_pretty_printed_snapshot() {
    let folder = std::env::temp_dir().join(format!("networth-test-{}", std::process::id()));
    std::fs::create_dir_all(&folder).unwrap();

    let rendered = render(&sample_net_worth(), false, &[]).unwrap();
    emit(&rendered, Some(folder.as_path())).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(&folder)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);

    let name = entries[0].file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with(".json"));
    assert!(name.contains('T'));

    let written = std::fs::read_to_string(&entries[0]).unwrap();
    assert!(written.starts_with("{\n  \"value\""));
    let reparsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(reparsed["value"], 3250.0);

    std::fs::remove_dir_all(&folder).unwrap();
}
