//! Raw key-value store commands.
//!
//! Exercises every facade operation against arbitrary user-supplied keys.
//! Values are stored as JSON strings with no schema.
//!
//! # Usage
//!
//! ```bash
//! cinelog kv set greeting hello
//! cinelog kv get greeting
//! cinelog kv iterate
//! ```

// Allow print_stdout in CLI module (consistent with main.rs)
#![allow(clippy::print_stdout)]

use crate::Result;
use crate::storage::Store;
use serde_json::Value;

/// Stores `value` under `key`.
pub fn set(store: &Store, key: &str, value: &str) -> Result<()> {
    store.set(key, value)?;
    println!("Set {key}: {value}");
    Ok(())
}

/// Prints the value stored under `key`.
pub fn get(store: &Store, key: &str) -> Result<()> {
    match store.get_raw(key)? {
        Some(value) => println!("Get {key}: {}", render(&value)),
        None => println!("Get {key}: (not set)"),
    }
    Ok(())
}

/// Deletes `key`; absence is reported, not an error.
pub fn remove(store: &Store, key: &str) -> Result<()> {
    if store.remove(key)? {
        println!("Removed {key}");
    } else {
        println!("{key} was not set");
    }
    Ok(())
}

/// Deletes every key in the store.
pub fn clear(store: &Store) -> Result<()> {
    store.clear()?;
    println!("Storage cleared");
    Ok(())
}

/// Lists all stored keys.
pub fn keys(store: &Store) -> Result<()> {
    let keys = store.keys()?;
    println!("Keys: {}", keys.join(", "));
    Ok(())
}

/// Prints the number of stored keys.
pub fn len(store: &Store) -> Result<()> {
    println!("Storage length: {}", store.len()?);
    Ok(())
}

/// Walks every entry in storage order.
pub fn iterate(store: &Store) -> Result<()> {
    println!("Storage items:");
    store.for_each(&mut |value, key, index| {
        println!("{index}: {key} => {}", render(value));
    })
}

/// Renders a stored value for display: strings unquoted, everything else as
/// compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
