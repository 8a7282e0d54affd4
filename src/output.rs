use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local, Timelike};
use serde_json::Value;
use tracing::info;

use crate::errors::CliError;
use crate::portfolio::NetWorth;
use crate::utils::{format_currency, format_decimal};

/// Produce the artifact to emit: the serialized summary, optionally with
/// display formatting applied and narrowed to a subset of fields.
pub fn render(net_worth: &NetWorth, format: bool, only: &[String]) -> Result<Value> {
    let mut rendered = serde_json::to_value(net_worth)?;
    if format {
        format_numbers(&mut rendered);
    }
    Ok(select_fields(rendered, only))
}

/// Replace every numeric leaf with a display string.
///
/// Fields named `value` hold USD totals and render as currency; every other
/// number renders as a plain decimal. The transform is one-way: the result
/// no longer parses back into numbers.
fn format_numbers(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if let Value::Number(number) = child {
                    let amount = number.as_f64().unwrap_or(f64::NAN);
                    let text = if key == "value" {
                        format_currency(amount)
                    } else {
                        format_decimal(amount)
                    };
                    *child = Value::String(text);
                } else {
                    format_numbers(child);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                format_numbers(item);
            }
        }
        _ => {}
    }
}

/// Narrow the summary to the requested top-level fields.
///
/// No names keeps the whole object; a single name unwraps to that field's
/// bare value; two or more names build an object in the order given,
/// skipping names the summary does not have.
fn select_fields(value: Value, only: &[String]) -> Value {
    match only {
        [] => value,
        [name] => value.get(name).cloned().unwrap_or(Value::Null),
        names => {
            let mut selected = serde_json::Map::new();
            for name in names {
                if let Some(field) = value.get(name) {
                    selected.insert(name.clone(), field.clone());
                }
            }
            Value::Object(selected)
        }
    }
}

/// Write the rendered summary to its one sink: a timestamped snapshot file
/// when a data folder is configured, stdout otherwise.
pub async fn emit(rendered: &Value, data_folder: Option<&Path>) -> Result<()> {
    let pretty = serde_json::to_string_pretty(rendered)?;

    match data_folder {
        Some(folder) => {
            let path = folder.join(format!("{}.json", snapshot_name(Local::now())));
            tokio::fs::write(&path, pretty.as_bytes())
                .await
                .map_err(|e| CliError::snapshot(format!("{}: {}", path.display(), e)))?;
            info!("Wrote net worth snapshot to {}", path.display());
        }
        None => println!("{}", pretty),
    }

    Ok(())
}

/// Snapshot filename stem: local date plus 24-hour time, hour and minute
/// unpadded.
fn snapshot_name(now: DateTime<Local>) -> String {
    format!("{}T{}:{}", now.format("%Y-%m-%d"), now.hour(), now.minute())
}
