//! RenderModel - the closed tagged union of renderable UI shapes
//!
//! Exactly one variant is populated at a time. Unknown or malformed trees map
//! to `Invalid`; the host UI branches on the variant, so malformation is an
//! ordinary rendering outcome.

use serde::{Deserialize, Serialize};

/// An icon attached to a list item
///
/// `tint` holds the resolved ColorLike string form: a theme token, a literal
/// color, or the fallback token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Icon {
    pub name: String,
    pub tint: String,
}

/// A single row of a list view
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl ListItem {
    pub fn new(title: String) -> Self {
        ListItem {
            title,
            subtitle: None,
            icon: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Typed, validated representation of a renderable UI shape
///
/// Discriminated by the "type" field when serialized, matching the wire form
/// extensions produce.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RenderModel {
    /// Scrollable list of items
    #[serde(rename = "list")]
    List { items: Vec<ListItem> },

    /// Markdown detail view
    #[serde(rename = "detail")]
    Detail {
        markdown: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },

    /// The tree could not be validated; `error` names the offending field
    #[serde(rename = "invalid")]
    Invalid { error: String },
}

impl RenderModel {
    /// Construct the invalid variant from any displayable error
    pub fn invalid(error: impl std::fmt::Display) -> Self {
        RenderModel::Invalid {
            error: error.to_string(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, RenderModel::Invalid { .. })
    }
}
