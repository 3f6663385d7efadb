#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use docvault::docvault_auth::issue_token;
use docvault::docvault_config::{CorsConfig, JwtConfig};
use docvault::docvault_core::{AppError, Page, PaginationParams, hash_password};
use docvault::docvault_db::{DocumentRepository, UserRepository};
use docvault::docvault_models::{
    Document, DocumentId, EMAIL_TAKEN_MESSAGE, NewUser, RoleId, User, UserChanges,
    UserCredentials, UserId, roles,
};
use docvault::router::init_router;
use docvault::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-characters-long";
pub const TEST_PASSWORD: &str = "testpass123";

fn paginate<T: Clone>(rows: &[T], params: PaginationParams) -> Page<T> {
    let page = rows
        .iter()
        .skip(params.offset() as usize)
        .take(params.limit() as usize)
        .cloned()
        .collect();
    Page::new(page, rows.len() as i64)
}

/// Users held in memory, with the same uniqueness and not-found behavior as
/// the PostgreSQL repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<UserCredentials>>,
}

impl InMemoryUserRepository {
    pub fn insert_with_id(&self, id: i64, email: &str, password_hash: &str, role_id: RoleId) {
        let now = Utc::now();
        let mut rows = self.rows.lock().unwrap();
        rows.push(UserCredentials {
            user: User {
                id: UserId(id),
                first_name: Some("Test".to_string()),
                last_name: Some("User".to_string()),
                email: email.to_string(),
                role_id,
                created_at: now,
                updated_at: now,
            },
            password: password_hash.to_string(),
        });
        rows.sort_by_key(|row| row.user.id);
    }

    pub fn get(&self, id: i64) -> Option<UserCredentials> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user.id == UserId(id))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn email_taken_by_other(rows: &[UserCredentials], email: &str, id: Option<UserId>) -> bool {
        rows.iter()
            .any(|row| row.user.email == email && Some(row.user.id) != id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user.id == id)
            .map(|row| row.user.clone()))
    }

    async fn find_and_count_all(&self, params: PaginationParams) -> Result<Page<User>, AppError> {
        let users: Vec<User> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| row.user.clone())
            .collect();
        Ok(paginate(&users, params))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if Self::email_taken_by_other(&rows, &new_user.email, None) {
            return Err(AppError::conflict(EMAIL_TAKEN_MESSAGE));
        }

        let next_id = rows.iter().map(|row| row.user.id.0).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let user = User {
            id: UserId(next_id),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            role_id: new_user.role_id,
            created_at: now,
            updated_at: now,
        };
        rows.push(UserCredentials {
            user: user.clone(),
            password: new_user.password_hash,
        });
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(email) = &changes.email {
            if Self::email_taken_by_other(&rows, email, Some(id)) {
                return Err(AppError::conflict(EMAIL_TAKEN_MESSAGE));
            }
        }

        let row = rows
            .iter_mut()
            .find(|row| row.user.id == id)
            .ok_or_else(|| AppError::not_found("User Not Found"))?;

        if let Some(first_name) = changes.first_name {
            row.user.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            row.user.last_name = last_name;
        }
        if let Some(email) = changes.email {
            row.user.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            row.password = password_hash;
        }
        if let Some(role_id) = changes.role_id {
            row.user.role_id = role_id;
        }
        row.user.updated_at = Utc::now();

        Ok(row.user.clone())
    }

    async fn destroy(&self, id: UserId) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.user.id != id);
        if rows.len() == before {
            return Err(AppError::not_found("User Not Found"));
        }
        Ok(())
    }
}

/// Delegates to the wrapped repository, except that the email lookup never
/// finds a row. Registration then reaches `create` with a duplicate email, as
/// when a concurrent request inserts it between the check and the insert.
pub struct StaleEmailLookup(pub Arc<InMemoryUserRepository>);

#[async_trait]
impl UserRepository for StaleEmailLookup {
    async fn find_by_email(&self, _email: &str) -> Result<Option<UserCredentials>, AppError> {
        Ok(None)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        self.0.find_by_id(id).await
    }

    async fn find_and_count_all(&self, params: PaginationParams) -> Result<Page<User>, AppError> {
        self.0.find_and_count_all(params).await
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.0.create(new_user).await
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<User, AppError> {
        self.0.update(id, changes).await
    }

    async fn destroy(&self, id: UserId) -> Result<(), AppError> {
        self.0.destroy(id).await
    }
}

#[derive(Default)]
pub struct InMemoryDocumentRepository {
    rows: Mutex<Vec<Document>>,
}

impl InMemoryDocumentRepository {
    pub fn insert(&self, id: i64, owner_id: i64, title: &str) {
        let now = Utc::now();
        self.rows.lock().unwrap().push(Document {
            id: DocumentId(id),
            title: title.to_string(),
            content: format!("Content of {}", title),
            access: "private".to_string(),
            owner_id: UserId(owner_id),
            created_at: now,
            updated_at: now,
        });
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn find_and_count_by_owner(
        &self,
        owner_id: UserId,
        params: PaginationParams,
    ) -> Result<Page<Document>, AppError> {
        let owned: Vec<Document> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|doc| doc.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(paginate(&owned, params))
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub documents: Arc<InMemoryDocumentRepository>,
    pub jwt_config: JwtConfig,
    password_hash: String,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        Self::with_user_repository(users.clone(), users)
    }

    /// The default fixture behind [`StaleEmailLookup`].
    pub fn with_stale_email_lookup() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let app = Self::with_user_repository(Arc::new(StaleEmailLookup(users.clone())), users);
        app.seed_default_users();
        app
    }

    fn with_user_repository(
        repository: Arc<dyn UserRepository>,
        users: Arc<InMemoryUserRepository>,
    ) -> Self {
        let documents = Arc::new(InMemoryDocumentRepository::default());
        let jwt_config = JwtConfig::new(TEST_JWT_SECRET);

        let state = AppState::new(
            repository,
            documents.clone(),
            jwt_config.clone(),
            CorsConfig::default(),
        );

        Self {
            router: init_router(state),
            users,
            documents,
            jwt_config,
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
        }
    }

    /// The default fixture: protected admin 1, users 5 and 6, admin 9.
    pub fn with_default_users() -> Self {
        let app = Self::new();
        app.seed_default_users();
        app
    }

    fn seed_default_users(&self) {
        self.seed_user(1, "admin@docvault.test", roles::ADMIN);
        self.seed_user(5, "user5@docvault.test", roles::REGULAR);
        self.seed_user(6, "user6@docvault.test", roles::REGULAR);
        self.seed_user(9, "admin9@docvault.test", roles::ADMIN);
    }

    /// Seeds a user whose password is [`TEST_PASSWORD`].
    pub fn seed_user(&self, id: i64, email: &str, role_id: RoleId) {
        self.users
            .insert_with_id(id, email, &self.password_hash, role_id);
    }

    pub fn token_for(&self, id: i64, role_id: RoleId) -> String {
        issue_token(UserId(id), role_id, &self.jwt_config).unwrap()
    }

    pub fn regular_token(&self, id: i64) -> String {
        self.token_for(id, roles::REGULAR)
    }

    pub fn admin_token(&self, id: i64) -> String {
        self.token_for(id, roles::ADMIN)
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(build_request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(build_request("POST", uri, token, Some(body))).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(build_request("PUT", uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(build_request("DELETE", uri, token, None)).await
    }
}

pub fn build_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
