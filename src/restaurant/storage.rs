//! On-disk formats: the menu file read at startup and the orders file rewritten on every finalize.
//!
//! Both files are JSON arrays. Menu records are decoded one at a time so that a bad
//! record can be skipped without losing the rest of the menu. The orders file is
//! pretty-printed with four-space indentation and always written through a sibling
//! temporary file that is renamed over the target.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::{FinalizedOrder, ItemKind, MenuItem};

/// One record of the menu file.
///
/// Field names follow the English spelling; the Portuguese names of older menu
/// files (`tipo`, `nome`, `preco`, `descricao`) are accepted as aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuRecord {
    #[serde(rename = "type", alias = "tipo")]
    pub kind: ItemKind,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "preco")]
    pub price: f64,
    #[serde(alias = "descricao")]
    pub description: String,
}

impl TryFrom<MenuRecord> for MenuItem {
    type Error = String;

    fn try_from(record: MenuRecord) -> Result<Self, String> {
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(format!("invalid price {} for '{}'", record.price, record.name));
        }
        if !(record.price * record.kind.price_factor()).is_finite() {
            return Err(format!("price {} for '{}' overflows once surcharged", record.price, record.name));
        }
        Ok(MenuItem::new(record.kind, record.name, record.price, record.description))
    }
}

/// A menu record that was dropped during decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Zero-based position of the record in the file.
    pub position: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct DecodedMenu {
    pub items: Vec<MenuItem>,
    pub skipped: Vec<SkippedRecord>,
}

/// Decodes the contents of a menu file.
///
/// Fails only when the document is not a JSON array. Records with an unknown
/// type tag, missing fields, or a negative or overflowing price end up in `skipped`.
pub fn decode_menu(contents: &str) -> Result<DecodedMenu, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(contents)?;

    let mut decoded = DecodedMenu::default();
    for (position, value) in records.into_iter().enumerate() {
        let item = serde_json::from_value::<MenuRecord>(value)
            .map_err(|e| e.to_string())
            .and_then(MenuItem::try_from);
        match item {
            Ok(item) => decoded.items.push(item),
            Err(reason) => decoded.skipped.push(SkippedRecord { position, reason }),
        }
    }
    Ok(decoded)
}

/// Serializes the full order history in the orders file layout.
///
/// Output is deterministic: the same orders always produce the same bytes.
/// Fails if any total is not finite, since JSON would store it as `null`.
pub fn encode_orders(orders: &[FinalizedOrder]) -> Result<Vec<u8>, serde_json::Error> {
    if let Some((position, order)) = orders.iter().enumerate().find(|(_, o)| !o.total.is_finite()) {
        return Err(serde::ser::Error::custom(format!(
            "order {} has a non-finite total ({})",
            position, order.total
        )));
    }

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    orders.serialize(&mut serializer)?;
    Ok(buf)
}

pub fn decode_orders(contents: &str) -> Result<Vec<FinalizedOrder>, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Replaces `path` with `data` so that readers see either the old or the new file.
pub fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp = temp_path(path);

    let result = fs::File::create(&temp)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp, path));

    if result.is_err() {
        // The temp file may not exist if creation itself failed.
        let _ = fs::remove_file(&temp);
    }
    result
}

fn temp_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("orders");
    target.with_file_name(format!("{file_name}.tmp"))
}
