//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{DomainError, User, FIELD_BASE_SALARY, SALARY_SCALE};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence gateway for users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Check whether a user with this exact email is stored
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert a new user and return it with its assigned ID.
    ///
    /// Fails with `AppError::Conflict` when the unique email constraint is violated.
    async fn save(&self, user: User) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Round half away from zero to the `base_salary` column scale.
fn to_column_scale(salary: Decimal) -> Decimal {
    salary.round_dp_with_strategy(SALARY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Unique key violations become `Conflict`; everything else stays a database error.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated on insert: {}", detail);
            AppError::conflict("Email")
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.to_owned())
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let base_salary = user
            .base_salary
            .ok_or_else(|| DomainError::required(FIELD_BASE_SALARY))?;

        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            birth_date: Set(user.birth_date),
            address: Set(user.address),
            phone: Set(user.phone),
            email: Set(user.email),
            base_salary: Set(to_column_scale(base_salary)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(map_insert_error)?;
        Ok(User::from(model))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    use super::*;

    fn stored(id: &str, email: &str) -> user::Model {
        user::Model {
            id: id.to_string(),
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            birth_date: None,
            address: None,
            phone: Some("+57 300 123 4567".to_string()),
            email: email.to_string(),
            base_salary: Decimal::from(2_500_000),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Statements the store sent to the mock connection.
    fn transaction_log(store: UserStore) -> Vec<Transaction> {
        match Arc::try_unwrap(store.db) {
            Ok(db) => db.into_transaction_log(),
            Err(_) => panic!("connection is still shared"),
        }
    }

    fn new_user(email: &str) -> User {
        User {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            email: email.to_string(),
            base_salary: Some(Decimal::from(2_500_000)),
            ..User::default()
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored("user-1", "juan@example.com")]])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        let user = store.find_by_id("user-1").await.unwrap().unwrap();

        assert_eq!(user.id.as_deref(), Some("user-1"));
        assert_eq!(user.email, "juan@example.com");
        assert_eq!(user.base_salary, Some(Decimal::from(2_500_000)));
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        assert!(store.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_by_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored("user-1", "a@b.com")]])
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        assert!(store.exists_by_email("a@b.com").await.unwrap());
        assert!(!store.exists_by_email("c@d.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_returns_stored_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored("generated-id", "juan@example.com")]])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        let saved = store.save(new_user("juan@example.com")).await.unwrap();

        assert_eq!(saved.id.as_deref(), Some("generated-id"));
        assert_eq!(saved.email, "juan@example.com");
    }

    #[tokio::test]
    async fn test_save_issues_single_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored("generated-id", "juan@example.com")]])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        store.save(new_user("juan@example.com")).await.unwrap();

        let log = transaction_log(store);
        assert_eq!(log.len(), 1);
        assert!(format!("{:?}", log[0]).contains("INSERT INTO"));
    }

    #[tokio::test]
    async fn test_save_rounds_salary_to_two_places() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored("generated-id", "juan@example.com")]])
            .into_connection();
        let store = UserStore::new(Arc::new(db));
        let user = User {
            base_salary: Some(Decimal::new(100_005, 3)),
            ..new_user("juan@example.com")
        };

        store.save(user).await.unwrap();

        let insert = format!("{:?}", transaction_log(store)[0]);
        assert!(insert.contains("100.01"));
        assert!(!insert.contains("100.005"));
    }

    #[test]
    fn test_to_column_scale() {
        assert_eq!(to_column_scale(Decimal::new(100_005, 3)), Decimal::new(10_001, 2));
        assert_eq!(to_column_scale(Decimal::new(100_004, 3)), Decimal::new(10_000, 2));
        assert_eq!(to_column_scale(Decimal::from(15_000_000)), Decimal::from(15_000_000));
    }

    #[tokio::test]
    async fn test_save_without_salary_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let store = UserStore::new(Arc::new(db));

        let user = User {
            base_salary: None,
            ..new_user("juan@example.com")
        };
        let err = store.save(user).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::RequiredFieldMissing(_))
        ));
    }

    #[tokio::test]
    async fn test_save_database_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        let err = store.save(new_user("juan@example.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }
}
