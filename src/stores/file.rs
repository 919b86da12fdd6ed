//! YAML file store.
//!
//! Loads a [`MenuDocument`] from disk. Each change is applied to a copy of the
//! document, written to a staging file next to the menu file and renamed into
//! place. The in-memory document only changes once the rename succeeds.

use std::{
    ffi::{OsStr, OsString},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::{
    domain::{
        categories::{
            CategoriesRepository,
            records::{CategoryRecord, CategoryUuid},
        },
        menu::{
            MenuItemsRepository,
            data::MenuItemUpdate,
            records::{MenuItemRecord, MenuItemUuid},
        },
    },
    stores::{MemoryStore, MenuDocument, StoreError},
};

/// Item and category store persisted as a single YAML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    staging: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open the menu file at `path`. A missing file is treated as an empty menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let document = match fs::read_to_string(&path).await {
            Ok(contents) if contents.trim().is_empty() => MenuDocument::default(),
            Ok(contents) => serde_norway::from_str(&contents)?,
            Err(error) if error.kind() == ErrorKind::NotFound => MenuDocument::default(),
            Err(error) => return Err(error.into()),
        };

        debug!(
            path = %path.display(),
            items = document.items.len(),
            categories = document.categories.len(),
            "opened menu file"
        );

        Ok(Self {
            staging: staging_path(&path),
            path,
            inner: MemoryStore::new(document),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds a category and persists the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the category is rejected or the file cannot be written.
    pub async fn add_category(
        &self,
        category: CategoryRecord,
    ) -> Result<CategoryRecord, StoreError> {
        self.commit(|document| document.add_category(category)).await
    }

    /// Applies `change` to a copy of the document and persists it, holding the
    /// write lock until the file is in place. Nothing is written when `change`
    /// fails or leaves the document as it was.
    async fn commit<T>(
        &self,
        change: impl FnOnce(&mut MenuDocument) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut document = self.inner.write().await;
        let mut changed = document.clone();

        let value = change(&mut changed)?;

        if changed != *document {
            self.persist(&changed).await?;
            *document = changed;
        }

        Ok(value)
    }

    async fn persist(&self, document: &MenuDocument) -> Result<(), StoreError> {
        let contents = serde_norway::to_string(document)?;

        fs::write(&self.staging, contents).await?;

        if let Err(error) = fs::rename(&self.staging, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&self.staging).await {
                warn!(
                    path = %self.staging.display(),
                    error = %cleanup,
                    "failed to remove staging file"
                );
            }

            return Err(error.into());
        }

        debug!(path = %self.path.display(), "wrote menu file");

        Ok(())
    }
}

/// `menu.yml` stages as `.menu.yml.tmp` in the same directory, so the rename
/// stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");

    name.push(path.file_name().unwrap_or_else(|| OsStr::new("menu")));
    name.push(".tmp");

    path.with_file_name(name)
}

#[async_trait]
impl MenuItemsRepository for FileStore {
    async fn list_items(&self) -> Result<Vec<MenuItemRecord>, StoreError> {
        self.inner.list_items().await
    }

    async fn get_item(&self, item: MenuItemUuid) -> Result<Option<MenuItemRecord>, StoreError> {
        self.inner.get_item(item).await
    }

    async fn create_item(&self, item: MenuItemRecord) -> Result<MenuItemRecord, StoreError> {
        self.commit(|document| document.create_item(item)).await
    }

    async fn update_item(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<Option<MenuItemRecord>, StoreError> {
        self.commit(|document| document.update_item(item, update)).await
    }

    async fn delete_item(&self, item: MenuItemUuid) -> Result<(), StoreError> {
        self.commit(|document| {
            document.delete_item(item);

            Ok(())
        })
        .await
    }
}

#[async_trait]
impl CategoriesRepository for FileStore {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, StoreError> {
        self.inner.list_categories().await
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Option<CategoryRecord>, StoreError> {
        self.inner.get_category(category).await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn missing_file_opens_as_empty_menu() -> TestResult {
        let dir = TempDir::new()?;
        let store = FileStore::open(dir.path().join("menu.yml")).await?;

        assert!(store.list_items().await?.is_empty());
        assert!(store.list_categories().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn empty_file_opens_as_empty_menu() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("menu.yml");

        std::fs::write(&path, "")?;

        let store = FileStore::open(&path).await?;

        assert!(store.list_items().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn writes_survive_reopening() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("menu.yml");

        let store = FileStore::open(&path).await?;
        let drinks = store
            .add_category(CategoryRecord {
                uuid: CategoryUuid::new(),
                name: "Drinks".to_string(),
            })
            .await?;
        let juice = store
            .create_item(MenuItemRecord {
                uuid: MenuItemUuid::new(),
                name: "Suco de Caju".to_string(),
                image: "caju.jpg".to_string(),
                price: Decimal::new(900, 2),
                old_price: Decimal::new(900, 2),
                category: drinks.uuid,
            })
            .await?;

        let reopened = FileStore::open(&path).await?;

        assert_eq!(reopened.get_item(juice.uuid).await?, Some(juice));
        assert_eq!(reopened.list_categories().await?, vec![drinks]);

        Ok(())
    }

    fn juice(category: CategoryUuid) -> MenuItemRecord {
        MenuItemRecord {
            uuid: MenuItemUuid::new(),
            name: "Suco de Caju".to_string(),
            image: "caju.jpg".to_string(),
            price: Decimal::new(900, 2),
            old_price: Decimal::new(900, 2),
            category,
        }
    }

    #[tokio::test]
    async fn updates_survive_reopening() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("menu.yml");

        let store = FileStore::open(&path).await?;
        let created = store.create_item(juice(CategoryUuid::new())).await?;

        let updated = store
            .update_item(
                created.uuid,
                MenuItemUpdate {
                    price: Some(Decimal::new(700, 2)),
                    ..MenuItemUpdate::default()
                },
            )
            .await?
            .ok_or("expected the item to exist")?;

        let reopened = FileStore::open(&path).await?;
        let stored = reopened.get_item(created.uuid).await?;

        assert_eq!(stored, Some(updated));
        assert_eq!(
            stored.map(|item| (item.price, item.old_price)),
            Some((Decimal::new(700, 2), Decimal::new(900, 2)))
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_write_leaves_store_unchanged() -> TestResult {
        let dir = TempDir::new()?;
        let menus = dir.path().join("menus");

        std::fs::create_dir(&menus)?;

        let store = FileStore::open(menus.join("menu.yml")).await?;
        let item = juice(CategoryUuid::new());

        std::fs::remove_dir(&menus)?;

        let result = store.create_item(item.clone()).await;

        assert!(
            matches!(result, Err(StoreError::Io(_))),
            "expected Io error, got {result:?}"
        );
        assert!(store.list_items().await?.is_empty(), "failed create must not be visible");

        let category = store
            .add_category(CategoryRecord {
                uuid: CategoryUuid::new(),
                name: "Drinks".to_string(),
            })
            .await;

        assert!(
            matches!(category, Err(StoreError::Io(_))),
            "expected Io error, got {category:?}"
        );
        assert!(store.list_categories().await?.is_empty());

        std::fs::create_dir(&menus)?;

        let retried = store.create_item(item).await?;
        let reopened = FileStore::open(menus.join("menu.yml")).await?;

        assert_eq!(reopened.list_items().await?, vec![retried]);

        Ok(())
    }

    #[tokio::test]
    async fn writes_leave_no_staging_file_behind() -> TestResult {
        let dir = TempDir::new()?;
        let store = FileStore::open(dir.path().join("menu.yml")).await?;

        store.create_item(juice(CategoryUuid::new())).await?;

        let mut names = std::fs::read_dir(dir.path())?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<Result<Vec<_>, _>>()?;

        names.sort();

        assert_eq!(names, vec![OsString::from("menu.yml")]);

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writes_are_all_persisted() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("menu.yml");
        let store = std::sync::Arc::new(FileStore::open(&path).await?);
        let category = CategoryUuid::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);

                tokio::spawn(async move { store.create_item(juice(category)).await })
            })
            .collect();

        for handle in handles {
            handle.await??;
        }

        let reopened = FileStore::open(&path).await?;

        assert_eq!(reopened.list_items().await?.len(), 8);
        assert_eq!(reopened.list_items().await?, store.list_items().await?);

        Ok(())
    }

    #[test]
    fn staging_file_sits_next_to_the_menu_file() {
        assert_eq!(
            staging_path(Path::new("/srv/menus/menu.yml")),
            PathBuf::from("/srv/menus/.menu.yml.tmp")
        );
    }

    #[tokio::test]
    async fn parses_hand_written_menu() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("menu.yml");

        std::fs::write(
            &path,
            r#"
categories:
  - uuid: 0190a5b2-7c3e-7d41-9a6b-3f1c2d4e5f60
    name: Mains
items:
  - uuid: 0190a5b2-7c3e-7d41-9a6b-3f1c2d4e5f61
    name: Feijoada
    image: feijoada.jpg
    price: "32.00"
    old_price: "40.00"
    category: 0190a5b2-7c3e-7d41-9a6b-3f1c2d4e5f60
"#,
        )?;

        let store = FileStore::open(&path).await?;
        let items = store.list_items().await?;
        let feijoada = items.first().ok_or("expected one item")?;

        assert_eq!(feijoada.name, "Feijoada");
        assert_eq!(feijoada.price, Decimal::new(3200, 2));
        assert_eq!(feijoada.old_price, Decimal::new(4000, 2));

        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_is_rejected() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("menu.yml");

        std::fs::write(&path, "items: [: nope")?;

        let result = FileStore::open(&path).await;

        assert!(
            matches!(result, Err(StoreError::Yaml(_))),
            "expected Yaml error, got {result:?}"
        );

        Ok(())
    }
}
