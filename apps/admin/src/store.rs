//! Re-fetchable list cache.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Cached copy of a server-owned list. Every fetch replaces the whole list.
#[derive(Debug)]
pub struct Store<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Clone> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list.
    pub async fn replace(&self, items: Vec<T>) {
        *self.items.write().await = items;
    }

    /// Copy of the cached list.
    pub async fn snapshot(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// First cached item matching the predicate.
    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.read().await.iter().find(|item| predicate(item)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_is_wholesale() {
        let store = Store::new();
        store.replace(vec![1, 2, 3]).await;
        store.replace(vec![4]).await;
        assert_eq!(store.snapshot().await, vec![4]);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_items() {
        let store = Store::new();
        let clone = store.clone();
        store.replace(vec!["a", "b"]).await;
        assert_eq!(clone.find(|s| *s == "b").await, Some("b"));
        clone.clear().await;
        assert!(store.is_empty().await);
    }
}
