//! Response envelopes of the REST backend

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `{ "data": ... }` wrapper of single-record endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Page of records returned by a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,

    #[serde(default)]
    pub meta: PageMeta,

    /// First/last/prev/next urls; kept opaque
    #[serde(default)]
    pub links: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,

    #[serde(default)]
    pub per_page: u32,

    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub links: Vec<PageLink>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
            links: Vec::new(),
        }
    }
}

/// Pagination button descriptor as rendered by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLinkKind {
    Previous,
    Next,
    Number(u32),
    /// "..." separator
    Gap,
}

impl PageLink {
    pub fn kind(&self) -> PageLinkKind {
        let label = self.label.trim();
        if let Ok(n) = label.parse::<u32>() {
            return PageLinkKind::Number(n);
        }
        let lower = label.to_lowercase();
        if lower.contains("previous") || lower.contains("anterior") || lower.contains("&laquo;") || lower.contains('«') {
            PageLinkKind::Previous
        } else if lower.contains("next") || lower.contains("siguiente") || lower.contains("&raquo;") || lower.contains('»') {
            PageLinkKind::Next
        } else {
            PageLinkKind::Gap
        }
    }

    /// A link without url is rendered disabled (e.g. "Previous" on page 1)
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Page number carried by the link url (`?page=N`), if any
    pub fn target_page(&self) -> Option<u32> {
        let url = self.url.as_deref()?;
        let query = url.split_once('?').map(|(_, q)| q)?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "page")
            .and_then(|(_, value)| value.parse().ok())
    }
}

/// Error body of failed requests (validation errors carry per-field messages)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, url: Option<&str>) -> PageLink {
        PageLink {
            url: url.map(str::to_string),
            label: label.to_string(),
            active: false,
        }
    }

    #[test]
    fn test_link_kinds() {
        assert_eq!(link("&laquo; Previous", None).kind(), PageLinkKind::Previous);
        assert_eq!(link("Siguiente &raquo;", None).kind(), PageLinkKind::Next);
        assert_eq!(link("Next &raquo;", None).kind(), PageLinkKind::Next);
        assert_eq!(link("3", None).kind(), PageLinkKind::Number(3));
        assert_eq!(link("...", None).kind(), PageLinkKind::Gap);
    }

    #[test]
    fn test_target_page_from_url() {
        let l = link("Next &raquo;", Some("http://host/api/areas/1?nombre=x&page=4"));
        assert_eq!(l.target_page(), Some(4));
        assert_eq!(link("1", None).target_page(), None);
    }

    #[test]
    fn test_paginated_without_meta_defaults_to_single_page() {
        let page: Paginated<serde_json::Value> = serde_json::from_str(r#"{"data":[{"id":1}]}"#).unwrap();
        assert_eq!(page.meta.last_page, 1);
        assert_eq!(page.data.len(), 1);
    }
}
