//! Studio interaction state: gallery filters, selection and the inspector.

use thiserror::Error;

use crate::assets::{Asset, AssetKind, AssetStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudioError {
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),
    #[error("No asset focused")]
    NoFocus,
}

/// All mutable state behind the mock UI. The library itself is part of the
/// state so inspector edits land on the records directly.
pub struct StudioState {
    library: Vec<Asset>,
    selected: Vec<String>,
    focused: Option<String>,
    kind_filter: Option<AssetKind>,
    status_filter: Option<AssetStatus>,
}

impl StudioState {
    pub fn new(library: Vec<Asset>) -> Self {
        Self {
            library,
            selected: Vec::new(),
            focused: None,
            kind_filter: None,
            status_filter: None,
        }
    }

    pub fn library(&self) -> &[Asset] {
        &self.library
    }

    /// Assets passing the current kind and status filters, in library order.
    pub fn visible(&self) -> Vec<&Asset> {
        self.library
            .iter()
            .filter(|a| self.kind_filter.is_none_or(|k| a.kind == k))
            .filter(|a| self.status_filter.is_none_or(|s| a.status == s))
            .collect()
    }

    pub fn set_kind_filter(&mut self, kind: Option<AssetKind>) {
        self.kind_filter = kind;
    }

    pub fn set_status_filter(&mut self, status: Option<AssetStatus>) {
        self.status_filter = status;
    }

    // ===== Selection =====

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Toggle an asset in or out of the selection.
    pub fn toggle_select(&mut self, id: &str) -> Result<(), StudioError> {
        if !self.library.iter().any(|a| a.id == id) {
            return Err(StudioError::UnknownAsset(id.to_string()));
        }
        match self.selected.iter().position(|s| s == id) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(id.to_string()),
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ===== Inspector =====

    /// Focus one asset in the inspector panel.
    pub fn focus(&mut self, id: &str) -> Result<(), StudioError> {
        if !self.library.iter().any(|a| a.id == id) {
            return Err(StudioError::UnknownAsset(id.to_string()));
        }
        self.focused = Some(id.to_string());
        Ok(())
    }

    pub fn focused(&self) -> Option<&Asset> {
        let id = self.focused.as_deref()?;
        self.library.iter().find(|a| a.id == id)
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    fn focused_mut(&mut self) -> Result<&mut Asset, StudioError> {
        let id = self.focused.clone().ok_or(StudioError::NoFocus)?;
        self.library
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StudioError::UnknownAsset(id))
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), StudioError> {
        self.focused_mut()?.title = title.trim().to_string();
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), StudioError> {
        self.focused_mut()?.description = description.trim().to_string();
        Ok(())
    }

    /// Append a keyword unless the asset already carries it
    /// (case-insensitive). Blank input is ignored.
    pub fn add_keyword(&mut self, keyword: &str) -> Result<bool, StudioError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(false);
        }
        let asset = self.focused_mut()?;
        if asset
            .keywords
            .iter()
            .any(|k| k.eq_ignore_ascii_case(keyword))
        {
            return Ok(false);
        }
        asset.keywords.push(keyword.to_string());
        Ok(true)
    }

    /// Remove a keyword (case-insensitive). Returns whether anything was
    /// removed.
    pub fn remove_keyword(&mut self, keyword: &str) -> Result<bool, StudioError> {
        let asset = self.focused_mut()?;
        let before = asset.keywords.len();
        asset
            .keywords
            .retain(|k| !k.eq_ignore_ascii_case(keyword.trim()));
        Ok(asset.keywords.len() != before)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Allow unwrap() in tests for cleaner test code
mod tests {
    use super::*;
    use crate::assets::sample_library;

    fn state() -> StudioState {
        StudioState::new(sample_library())
    }

    #[test]
    fn test_filters_compose() {
        let mut s = state();
        let all = s.visible().len();
        assert_eq!(all, s.library().len());

        s.set_kind_filter(Some(AssetKind::Photo));
        assert!(s.visible().iter().all(|a| a.kind == AssetKind::Photo));

        s.set_status_filter(Some(AssetStatus::Done));
        assert!(s
            .visible()
            .iter()
            .all(|a| a.kind == AssetKind::Photo && a.status == AssetStatus::Done));

        s.set_kind_filter(None);
        s.set_status_filter(None);
        assert_eq!(s.visible().len(), all);
    }

    #[test]
    fn test_toggle_select() {
        let mut s = state();
        s.toggle_select("a-001").unwrap();
        assert!(s.is_selected("a-001"));
        s.toggle_select("a-001").unwrap();
        assert!(!s.is_selected("a-001"));

        let err = s.toggle_select("nope").unwrap_err();
        assert_eq!(err, StudioError::UnknownAsset("nope".to_string()));
    }

    #[test]
    fn test_keyword_dedup_is_case_insensitive() {
        let mut s = state();
        s.focus("a-003").unwrap();
        assert!(s.add_keyword("Market").unwrap());
        assert!(!s.add_keyword("market").unwrap());
        assert!(!s.add_keyword("  MARKET  ").unwrap());
        assert_eq!(s.focused().unwrap().keywords, vec!["Market"]);

        assert!(s.remove_keyword("mArKeT").unwrap());
        assert!(s.focused().unwrap().keywords.is_empty());
        assert!(!s.remove_keyword("market").unwrap());
    }

    #[test]
    fn test_blank_keyword_ignored() {
        let mut s = state();
        s.focus("a-004").unwrap();
        assert!(!s.add_keyword("   ").unwrap());
        assert!(s.focused().unwrap().keywords.is_empty());
    }

    #[test]
    fn test_title_edit_requires_focus() {
        let mut s = state();
        assert_eq!(s.set_title("New title").unwrap_err(), StudioError::NoFocus);

        s.focus("a-004").unwrap();
        s.set_title("  Alpine drone flyover  ").unwrap();
        assert_eq!(s.focused().unwrap().title, "Alpine drone flyover");
    }

    #[test]
    fn test_blur_clears_inspector() {
        let mut s = state();
        s.focus("a-001").unwrap();
        assert!(s.focused().is_some());
        s.blur();
        assert!(s.focused().is_none());
    }
}
