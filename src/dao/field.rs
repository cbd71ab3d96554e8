//! DAO for the `field` table.

use std::sync::Arc;

use crate::changelog::{ChangeCategory, ChangeLog};
use crate::connection::ConferenceDb;
use crate::error::DbResult;
use crate::fts;
use crate::models::Field;
use crate::queries;

/// Data access for fields of study.
#[derive(Clone)]
pub struct FieldDao {
    db: ConferenceDb,
    log: Arc<dyn ChangeLog>,
}

impl FieldDao {
    pub fn new(db: ConferenceDb, log: Arc<dyn ChangeLog>) -> Self {
        Self { db, log }
    }

    /// Create a field. Name must be unique.
    pub async fn create_field(&self, name: &str) -> DbResult<Field> {
        let field = queries::create_field(self.db.pool(), name).await?;
        self.log
            .change(ChangeCategory::Create, &format!("Add new field {name}"));
        Ok(field)
    }

    /// Delete a field.
    pub async fn delete_field(&self, field: &Field) -> DbResult<()> {
        queries::delete_field(self.db.pool(), field.field_id).await?;
        self.log.change(
            ChangeCategory::Delete,
            &format!("Delete field {}", field.field_name),
        );
        Ok(())
    }

    /// All fields whose name starts with the typed text.
    pub async fn find_fields(&self, start_typing: &str) -> DbResult<Vec<Field>> {
        fts::search_fields_prefix(self.db.pool(), start_typing).await
    }

    /// All fields, in insertion order.
    pub async fn get_all_fields(&self) -> DbResult<Vec<Field>> {
        queries::list_fields(self.db.pool()).await
    }

    /// Look up a field by primary key.
    pub async fn get_field(&self, id: i64) -> DbResult<Option<Field>> {
        queries::get_field(self.db.pool(), id).await
    }

    /// Look up a field by (approximate) name via full-text search.
    pub async fn get_field_by_name(&self, name: &str) -> DbResult<Option<Field>> {
        fts::find_field_by_name(self.db.pool(), name).await
    }

    /// Rename a field, keeping the caller's model in step with the row.
    pub async fn update_field(&self, field: &mut Field, field_name: &str) -> DbResult<()> {
        let past = field.field_name.clone();
        queries::rename_field(self.db.pool(), field.field_id, field_name).await?;
        field.field_name = field_name.to_string();
        self.log.change(
            ChangeCategory::Update,
            &format!("Rename field from {past} to {field_name}"),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::MemoryChangeLog;

    async fn setup() -> (FieldDao, Arc<MemoryChangeLog>) {
        let db = ConferenceDb::open_in_memory().await.unwrap();
        let log = Arc::new(MemoryChangeLog::new());
        (FieldDao::new(db, log.clone()), log)
    }

    #[tokio::test]
    async fn test_update_keeps_model_and_row_in_step() {
        let (dao, log) = setup().await;

        let mut field = dao.create_field("Computer Sience").await.unwrap();
        dao.update_field(&mut field, "Computer Science")
            .await
            .unwrap();

        // In-memory model updated without a re-fetch
        assert_eq!(field.field_name, "Computer Science");

        // And the row agrees
        let fetched = dao.get_field(field.field_id).await.unwrap().unwrap();
        assert_eq!(fetched, field);

        let messages: Vec<_> = log.entries().into_iter().map(|e| e.message).collect();
        assert!(messages.contains(&"Rename field from Computer Sience to Computer Science".into()));
    }

    #[tokio::test]
    async fn test_create_and_delete_are_logged() {
        let (dao, log) = setup().await;

        let field = dao.create_field("History").await.unwrap();
        dao.delete_field(&field).await.unwrap();

        let entries = log.entries();
        assert_eq!(entries[0].category, ChangeCategory::Create);
        assert_eq!(entries[0].message, "Add new field History");
        assert_eq!(entries[1].category, ChangeCategory::Delete);
        assert_eq!(entries[1].message, "Delete field History");

        assert_eq!(dao.get_field(field.field_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_fields_prefix() {
        let (dao, _) = setup().await;

        for name in ["Machine Learning", "Mathematics", "Machining"] {
            dao.create_field(name).await.unwrap();
        }

        let found = dao.find_fields("Mach").await.unwrap();
        let names: Vec<_> = found.iter().map(|f| f.field_name.as_str()).collect();
        assert_eq!(names, vec!["Machine Learning", "Machining"]);
    }

    #[tokio::test]
    async fn test_get_all_is_stable() {
        let (dao, _) = setup().await;

        dao.create_field("One").await.unwrap();
        dao.create_field("Two").await.unwrap();

        let first = dao.get_all_fields().await.unwrap();
        let second = dao.get_all_fields().await.unwrap();
        assert_eq!(first, second);
    }
}
