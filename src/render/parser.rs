//! Render tree parsing
//!
//! `parse` is the single entry point from untyped trees to the typed
//! `RenderModel`. It inspects the `type` shape discriminator and parses the
//! child fields of recognized shapes recursively. Any structural mismatch
//! maps to `RenderModel::Invalid` carrying a message that names the
//! offending field; the function never fails and has no side effects.

use serde_json::Value;
use tracing::debug;

use super::color_like;
use super::model::{Icon, ListItem, RenderModel};
use super::tree::{self, Tree, TreeError};

/// Parse an untyped render tree into a typed render model.
///
/// Recognized shapes: `list`, `detail`. Anything else - including a missing
/// discriminator - produces the `Invalid` variant, never a partially
/// populated valid one.
pub fn parse(value: &Value) -> RenderModel {
    let root = match tree::as_object(value) {
        Ok(obj) => obj,
        Err(e) => return RenderModel::invalid(e),
    };

    let shape = match tree::require_str(root, "type") {
        Ok(s) => s,
        Err(e) => return RenderModel::invalid(e),
    };

    let model = match shape {
        "list" => parse_list(root),
        "detail" => parse_detail(root),
        other => RenderModel::Invalid {
            error: format!("unknown render tree type '{}'", other),
        },
    };

    debug!(
        shape = shape,
        valid = !model.is_invalid(),
        "Parsed render tree"
    );
    model
}

fn parse_list(root: &Tree) -> RenderModel {
    let raw_items = match tree::require_array(root, "items") {
        Ok(items) => items,
        Err(e) => return RenderModel::invalid(e),
    };

    let mut items = Vec::with_capacity(raw_items.len());
    for (index, raw) in raw_items.iter().enumerate() {
        match parse_list_item(raw) {
            Ok(item) => items.push(item),
            Err(e) => {
                return RenderModel::Invalid {
                    error: format!("{} in item {}", e, index),
                }
            }
        }
    }

    RenderModel::List { items }
}

fn parse_list_item(value: &Value) -> Result<ListItem, TreeError> {
    let obj = tree::as_object(value)?;

    let mut item = ListItem::new(tree::require_str(obj, "title")?.to_string());
    if let Some(subtitle) = tree::optional_str(obj, "subtitle")? {
        item = item.with_subtitle(subtitle.to_string());
    }
    if let Some(icon) = tree::optional_object(obj, "icon")? {
        item = item.with_icon(parse_icon(icon)?);
    }
    Ok(item)
}

fn parse_icon(icon: &Tree) -> Result<Icon, TreeError> {
    Ok(Icon {
        name: tree::require_str(icon, "name")?.to_string(),
        tint: color_like::resolve(icon.get("tint")),
    })
}

fn parse_detail(root: &Tree) -> RenderModel {
    let markdown = match tree::require_str(root, "markdown") {
        Ok(md) => md.to_string(),
        Err(e) => return RenderModel::invalid(e),
    };
    let title = match tree::optional_str(root, "title") {
        Ok(t) => t.map(str::to_string),
        Err(e) => return RenderModel::invalid(e),
    };

    RenderModel::Detail { markdown, title }
}
