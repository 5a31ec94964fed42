//! Entity storage.

use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors returned by repositories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: EntityId },
}

/// An entity with a stable identity that repositories can store.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Returns the entity type name, used in error messages.
    fn entity_type() -> &'static str;

    fn id(&self) -> &EntityId;
}

/// Storage for one entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Stores a new entity. Fails if one with the same ID exists.
    async fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Replaces a stored entity with `entity`. Fails if it does not exist.
    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Loads an entity by ID.
    async fn find(&self, id: &EntityId) -> Result<T, RepositoryError>;

    /// Loads every stored entity, in insertion order.
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
}

/// In-memory repository.
///
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    entities: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut entities = self.entities.write().await;
        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(RepositoryError::AlreadyExists {
                entity: T::entity_type(),
                id: entity.id().clone(),
            });
        }
        entities.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut entities = self.entities.write().await;
        let stored = entities
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or_else(|| RepositoryError::NotFound {
                entity: T::entity_type(),
                id: entity.id().clone(),
            })?;
        *stored = entity.clone();
        Ok(())
    }

    async fn find(&self, id: &EntityId) -> Result<T, RepositoryError> {
        self.entities
            .read()
            .await
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: T::entity_type(),
                id: id.clone(),
            })
    }

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.entities.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: EntityId,
        text: String,
    }

    impl Entity for Note {
        fn entity_type() -> &'static str {
            "Note"
        }

        fn id(&self) -> &EntityId {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: EntityId::new(id),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryRepository::new();
        repo.create(&note("1", "hello")).await.unwrap();

        let found = repo.find(&EntityId::new("1")).await.unwrap();
        assert_eq!(found.text, "hello");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = InMemoryRepository::new();
        repo.create(&note("1", "hello")).await.unwrap();

        let err = repo.create(&note("1", "again")).await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::AlreadyExists {
                entity: "Note",
                id: EntityId::new("1"),
            }
        );
    }

    #[tokio::test]
    async fn test_update_replaces_entity() {
        let repo = InMemoryRepository::new();
        repo.create(&note("1", "hello")).await.unwrap();
        repo.update(&note("1", "bye")).await.unwrap();

        assert_eq!(repo.find(&EntityId::new("1")).await.unwrap().text, "bye");
    }

    #[tokio::test]
    async fn test_update_missing_entity_fails() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        let err = repo.update(&note("9", "ghost")).await.unwrap_err();
        assert_eq!(err.to_string(), "Note not found: 9");
    }

    #[tokio::test]
    async fn test_find_missing_entity_fails() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        assert!(repo.find(&EntityId::new("nope")).await.is_err());
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryRepository::new();
        repo.create(&note("b", "second?")).await.unwrap();
        repo.create(&note("a", "first?")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.create(&note("1", "shared")).await.unwrap();
        assert!(!other.is_empty().await);
    }
}
