//! User service - Handles user registration and lookup.
//!
//! Registration runs a fixed pipeline: required fields → email format →
//! salary range → email uniqueness → normalization → save. Each stage
//! short-circuits on failure and nothing is written until the final save.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{normalize, normalize_email, validation, DomainError, User};

use crate::infra::AppLogger;
use crate::repository::UserRepository;
use crate::utils::mask_email;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID; `Ok(None)` when no such user exists
    async fn get_user(&self, id: &str) -> AppResult<Option<User>>;

    /// Validate, normalize and persist a new user
    async fn create_user(&self, user: User) -> AppResult<User>;
}

/// Concrete implementation of UserService using a repository and a logger.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    logger: Arc<dyn AppLogger>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, logger: Arc<dyn AppLogger>) -> Self {
        Self { repo, logger }
    }

    fn validate_required_fields<'a>(&self, user: &'a User) -> AppResult<&'a User> {
        let email = mask_email(&user.email);
        self.logger
            .info(&format!("Validating required fields for user: {}", email));

        validation::validate_required_fields(user)?;

        self.logger
            .info(&format!("Required fields present for user: {}", email));
        Ok(user)
    }

    fn validate_email_format<'a>(&self, user: &'a User) -> AppResult<&'a User> {
        let email = mask_email(&user.email);
        self.logger
            .info(&format!("Validating email format for: {}", email));

        validation::validate_email_format(user)?;

        self.logger.info(&format!("Email format valid for: {}", email));
        Ok(user)
    }

    fn validate_salary_range<'a>(&self, user: &'a User) -> AppResult<&'a User> {
        let email = mask_email(&user.email);
        self.logger
            .info(&format!("Validating salary range for user: {}", email));

        validation::validate_salary_range(user)?;

        self.logger
            .info(&format!("Salary range valid for user: {}", email));
        Ok(user)
    }

    async fn ensure_email_is_unique(&self, user: &User) -> AppResult<()> {
        let email = normalize_email(&user.email);
        let masked = mask_email(&email);
        self.logger
            .info(&format!("Checking email uniqueness: {}", masked));

        if self.repo.exists_by_email(&email).await? {
            return Err(DomainError::duplicate_email(email).into());
        }

        self.logger.info(&format!("Email is unique: {}", masked));
        Ok(())
    }

    fn normalize(&self, user: &User) -> User {
        let email = mask_email(&user.email);
        self.logger
            .info(&format!("Normalizing user data: {}", email));

        let normalized = normalize(user);

        self.logger.info(&format!(
            "User data normalized: {}",
            mask_email(&normalized.email)
        ));
        normalized
    }

    /// Save the user, translating a write-time unique violation into `DuplicateEmail`.
    async fn persist(&self, user: User) -> AppResult<User> {
        let email = user.email.clone();
        self.logger.info(&format!("Saving user: {}", mask_email(&email)));

        let saved = self.repo.save(user).await.map_err(|err| match err {
            AppError::Conflict(_) => DomainError::duplicate_email(email).into(),
            other => other,
        })?;

        self.logger.info(&format!(
            "User saved with ID: {}",
            saved.id.as_deref().unwrap_or_default()
        ));
        Ok(saved)
    }

    async fn run_create_pipeline(&self, input: &User) -> AppResult<User> {
        self.validate_required_fields(input)
            .and_then(|user| self.validate_email_format(user))
            .and_then(|user| self.validate_salary_range(user))?;

        self.ensure_email_is_unique(input).await?;

        let normalized = self.normalize(input);
        self.persist(normalized).await
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        self.logger.info(&format!("Looking up user with ID: {}", id));

        match self.repo.find_by_id(id).await {
            Ok(Some(user)) => {
                self.logger.info(&format!("User found with ID: {}", id));
                Ok(Some(user))
            }
            Ok(None) => {
                self.logger.info(&format!("User not found with ID: {}", id));
                Ok(None)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to look up user with ID: {}", id), &err);
                Err(err)
            }
        }
    }

    async fn create_user(&self, user: User) -> AppResult<User> {
        let email = mask_email(&user.email);
        self.logger
            .info(&format!("Starting user creation for email: {}", email));

        match self.run_create_pipeline(&user).await {
            Ok(saved) => {
                self.logger.info(&format!(
                    "User created with ID: {}",
                    saved.id.as_deref().unwrap_or_default()
                ));
                Ok(saved)
            }
            Err(err) if err.is_duplicate_email() => {
                self.logger.warn(&format!(
                    "Registration attempted with an already registered email: {}",
                    email
                ));
                Err(err)
            }
            Err(err) => {
                self.logger
                    .error(&format!("User creation failed for email: {}", email), &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use rust_decimal::Decimal;

    use super::*;
    use crate::infra::logger::capture::CapturedLogs;
    use crate::infra::{MockAppLogger, TracingLogger};
    use crate::repository::MockUserRepository;

    fn input() -> User {
        User {
            first_name: " Ana ".to_string(),
            last_name: "Gómez".to_string(),
            email: " Ana.Gomez@Example.com".to_string(),
            base_salary: Some(Decimal::from(1_000_000)),
            ..User::default()
        }
    }

    fn permissive_logger() -> MockAppLogger {
        let mut logger = MockAppLogger::new();
        logger.expect_info().return_const(());
        logger.expect_warn().return_const(());
        logger.expect_error().return_const(());
        logger
    }

    #[tokio::test]
    async fn stages_log_in_pipeline_order() {
        let mut seq = Sequence::new();
        let mut logger = MockAppLogger::new();
        for prefix in [
            "Starting user creation",
            "Validating required fields",
            "Required fields present",
            "Validating email format",
            "Email format valid",
            "Validating salary range",
            "Salary range valid",
            "Checking email uniqueness",
            "Email is unique",
            "Normalizing user data",
            "User data normalized",
            "Saving user",
            "User saved with ID",
            "User created with ID",
        ] {
            logger
                .expect_info()
                .withf(move |message: &str| message.starts_with(prefix))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(false));
        repo.expect_save().returning(|mut user| {
            user.id = Some("u-1".to_string());
            Ok(user)
        });

        let manager = UserManager::new(Arc::new(repo), Arc::new(logger));
        let saved = manager.create_user(input()).await.unwrap();

        assert_eq!(saved.id.as_deref(), Some("u-1"));
    }

    #[tokio::test]
    async fn uniqueness_is_checked_against_normalized_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_email()
            .withf(|email: &str| email == "ana.gomez@example.com")
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_save().never();

        let manager = UserManager::new(Arc::new(repo), Arc::new(permissive_logger()));
        let err = manager.create_user(input()).await.unwrap_err();

        assert!(err.is_duplicate_email());
    }

    #[tokio::test]
    async fn save_receives_normalized_copy() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(false));
        repo.expect_save()
            .withf(|user: &User| user.first_name == "Ana" && user.email == "ana.gomez@example.com")
            .times(1)
            .returning(Ok);

        let manager = UserManager::new(Arc::new(repo), Arc::new(permissive_logger()));

        assert!(manager.create_user(input()).await.is_ok());
    }

    #[tokio::test]
    async fn failed_registration_logs_masked_email_only() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_email().never();
        repo.expect_save().never();

        let user = User {
            email: "juan.perez@example".to_string(),
            ..input()
        };
        let manager = UserManager::new(Arc::new(repo), Arc::new(TracingLogger));
        let err = manager.create_user(user).await.unwrap_err();

        let output = logs.contents();
        assert_eq!(err.code(), "INVALID_EMAIL_FORMAT");
        assert!(output.contains("jua***@example"));
        assert!(output.contains("INVALID_EMAIL_FORMAT"));
        assert!(!output.contains("juan.perez@example"));
    }
}
