//! Folder title derivation.
//!
//! Responsibilities:
//! - Decide, from a resource's labels and annotations, whether its
//!   dashboards go to the General folder or to a named custom folder.
//!
//! Does NOT handle:
//! - Talking to Grafana (folder resolution/creation lives on
//!   [`crate::Reconciler`], which owns the client).
//!
//! Invariants:
//! - `general-folder: "true"` (case-insensitive) wins over any annotation.
//! - An absent or empty folder annotation falls back to `"Custom"`.

use crate::resource::DashboardResource;
use crate::selection::{FOLDER_ANNOTATION, GENERAL_FOLDER_LABEL};
use loader_config::constants::DEFAULT_FOLDER_TITLE;

/// The folder title a resource's dashboards belong in, or `None` for the
/// General folder.
pub fn folder_title_for(resource: &DashboardResource) -> Option<String> {
    let use_general = resource
        .labels
        .get(GENERAL_FOLDER_LABEL)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    if use_general {
        return None;
    }

    let title = resource
        .annotations
        .get(FOLDER_ANNOTATION)
        .filter(|t| !t.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_FOLDER_TITLE.to_string());
    Some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_folder_label_skips_resolution() {
        let mut r = DashboardResource::default();
        r.labels
            .insert(GENERAL_FOLDER_LABEL.to_string(), "True".to_string());
        assert_eq!(folder_title_for(&r), None);
    }

    #[test]
    fn test_annotation_overrides_title() {
        let mut r = DashboardResource::default();
        r.annotations
            .insert(FOLDER_ANNOTATION.to_string(), "Team A".to_string());
        assert_eq!(folder_title_for(&r), Some("Team A".to_string()));
    }

    #[test]
    fn test_empty_annotation_falls_back_to_default() {
        let mut r = DashboardResource::default();
        r.annotations
            .insert(FOLDER_ANNOTATION.to_string(), String::new());
        assert_eq!(folder_title_for(&r), Some("Custom".to_string()));
    }

    #[test]
    fn test_no_label_no_annotation_defaults() {
        let r = DashboardResource::default();
        assert_eq!(folder_title_for(&r), Some("Custom".to_string()));
    }

    #[test]
    fn test_general_folder_label_false_still_resolves() {
        let mut r = DashboardResource::default();
        r.labels
            .insert(GENERAL_FOLDER_LABEL.to_string(), "false".to_string());
        assert_eq!(folder_title_for(&r), Some("Custom".to_string()));
    }
}
