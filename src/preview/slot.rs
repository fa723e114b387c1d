use crate::intake::SelectedFile;
use crate::preview::store::{PreviewHandle, PreviewId, PreviewStore};

/// The single preview reference a page may hold.
///
/// Release-before-replace: [`PreviewSlot::set`] drops the current handle
/// before asking the store for a new one. Dropping the slot (page
/// teardown) releases whatever it still holds.
pub struct PreviewSlot {
    store: PreviewStore,
    current: Option<PreviewHandle>,
}

impl PreviewSlot {
    pub fn new(store: PreviewStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Bind a preview for `file`, releasing the previous one first.
    pub fn set(&mut self, file: &SelectedFile) -> PreviewId {
        self.clear();
        let handle = self.store.create(file);
        let id = handle.id();
        self.current = Some(handle);
        id
    }

    /// Release the current preview, if any.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn store(&self) -> &PreviewStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![0u8; 16])
    }

    #[test]
    fn replacing_releases_previous_preview() {
        let store = PreviewStore::new();
        let mut slot = PreviewSlot::new(store.clone());

        let first = slot.set(&file("a.png"));
        assert_eq!(store.live_count(), 1);

        let second = slot.set(&file("b.png"));
        assert_eq!(store.live_count(), 1);
        assert!(store.resolve(first).is_none());
        assert!(store.resolve(second).is_some());
    }

    #[test]
    fn clear_releases_preview() {
        let store = PreviewStore::new();
        let mut slot = PreviewSlot::new(store.clone());
        let id = slot.set(&file("a.png"));
        slot.clear();
        assert_eq!(store.live_count(), 0);
        assert!(store.resolve(id).is_none());
    }

    #[test]
    fn dropping_slot_releases_preview() {
        let store = PreviewStore::new();
        {
            let mut slot = PreviewSlot::new(store.clone());
            slot.set(&file("a.png"));
            assert_eq!(store.live_count(), 1);
        }
        assert_eq!(store.live_count(), 0);
    }
}
