use anyhow::Result;
use dexter_dex::{CatalogEntry, CatalogView};

/// Feed a catalog fetch outcome into a view.
///
/// On success the view's entries are replaced and `true` is returned. On failure the
/// error is logged and the view keeps its previous entries, search term and page.
pub fn apply_catalog(view: &mut CatalogView, fetched: Result<Vec<CatalogEntry>>) -> bool {
    match fetched {
        Ok(entries) => {
            tracing::info!(count = entries.len(), "Catalog loaded");
            view.set_entries(entries);
            true
        }
        Err(e) => {
            tracing::error!(
                error = %format!("{:#}", e),
                kept = view.entries().len(),
                "Error fetching catalog, keeping previous entries"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use dexter_dex::CatalogConfig;

    fn entries(count: u32) -> Vec<CatalogEntry> {
        (1..=count)
            .map(|id| CatalogEntry::new(id, format!("mon-{}", id), None))
            .collect()
    }

    #[test]
    fn test_apply_success_replaces_entries() {
        let mut view = CatalogView::default();
        assert!(apply_catalog(&mut view, Ok(entries(20))));

        assert_eq!(view.entries().len(), 20);
        assert_eq!(view.total_pages(), 2);
    }

    #[test]
    fn test_apply_failure_keeps_state() {
        let mut view = CatalogView::with_entries(entries(40), CatalogConfig::default());
        view.set_search_term("mon");
        view.next_page();

        assert!(!apply_catalog(&mut view, Err(anyhow!("connection reset"))));

        assert_eq!(view.entries().len(), 40);
        assert_eq!(view.search_term(), "mon");
        assert_eq!(view.current_page(), 2);
    }
}
