// src/modules/render/mod.rs
//
// Pure mapping from (cached collection, active filter) to markup. No state,
// no side effects; identical input yields identical markup.

pub mod bindings;
pub mod markup;
pub mod views;

pub use bindings::{Action, Binding, EventKind, View};
pub use markup::{el, Node};

use crate::modules::records::Faceted;

/// Exact-match facet filter; the "all" sentinel disables filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(String),
}

impl Filter {
    pub fn from_token(token: &str) -> Self {
        if token == "all" {
            Filter::All
        } else {
            Filter::Only(token.to_string())
        }
    }

    pub fn matches(&self, facet: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(value) => value == facet,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

/// Filter a collection, preserving backend order. Never re-sorts.
pub fn apply_filter<'a, T: Faceted>(records: &'a [T], filter: &Filter) -> Vec<&'a T> {
    records.iter().filter(|r| filter.matches(r.facet())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::records::Project;

    fn project(title: &str, category: &str) -> Project {
        Project {
            id: Some(title.to_string()),
            title: title.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn all_sentinel_disables_filtering() {
        let projects = vec![project("a", "web"), project("b", "mobile")];
        let filtered = apply_filter(&projects, &Filter::from_token("all"));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn exact_match_keeps_relative_order() {
        let projects = vec![
            project("a", "web"),
            project("b", "mobile"),
            project("c", "web"),
        ];
        let filtered = apply_filter(&projects, &Filter::from_token("web"));

        let titles: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn no_partial_matches() {
        let projects = vec![project("a", "web-design")];
        let filtered = apply_filter(&projects, &Filter::from_token("web"));
        assert!(filtered.is_empty());
    }
}
