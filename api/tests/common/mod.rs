//! Shared fixtures: an in-memory backend with a recording notifier and a
//! Google verifier that trusts `google:<subject>` tokens.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use gc_api::{create_app, seed_memory_store, AppState, Backend, BackendParts};
use gc_core::domain::entities::Notification;
use gc_core::domain::value_objects::{AuthResponse, GoogleIdentity};
use gc_core::errors::{AuthError, DomainError};
use gc_core::repositories::{InMemoryStore, InMemoryTokenRepository};
use gc_core::services::{GoogleTokenVerifier, NotificationSender};
use gc_shared::config::AppConfig;

pub use gc_infra::database::seed::{EXEL_SOLAR_ID, SUNPOWER_ID, SUNPOWER_OWNER_ID, TESLA_ENERGY_ID};

pub const TEST_TARGET_ARN: &str = "arn:aws:sns:us-east-1:000000000000:greencircle-test";

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingNotifier {
    async fn send_notification(&self, notification: &Notification) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(notification.clone());
        Ok(format!("msg-{}", sent.len()))
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

pub struct StaticGoogleVerifier;

#[async_trait]
impl GoogleTokenVerifier for StaticGoogleVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, DomainError> {
        let subject = id_token
            .strip_prefix("google:")
            .ok_or(DomainError::Auth(AuthError::InvalidUser))?;

        Ok(GoogleIdentity {
            subject: subject.to_string(),
            email: format!("{}@example.com", subject),
            email_verified: true,
            given_name: Some("Test".to_string()),
            family_name: Some(subject.to_string()),
            picture: None,
        })
    }
}

pub struct TestBackend;

impl Backend for TestBackend {
    type Companies = InMemoryStore;
    type Users = InMemoryStore;
    type Reviews = InMemoryStore;
    type Complaints = InMemoryStore;
    type Tokens = InMemoryTokenRepository;
    type Notifier = RecordingNotifier;
    type Google = StaticGoogleVerifier;
}

pub struct TestContext {
    pub store: InMemoryStore,
    pub notifier: Arc<RecordingNotifier>,
    pub config: AppConfig,
    pub state: web::Data<AppState<TestBackend>>,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.notification.target_arn = Some(TEST_TARGET_ARN.to_string());
    config
}

/// Seeded store wired into a fresh [`AppState`]
pub async fn setup() -> TestContext {
    let store = InMemoryStore::new();
    seed_memory_store(&store).await.unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let shared = Arc::new(store.clone());
    let parts: BackendParts<TestBackend> = BackendParts {
        companies: Arc::clone(&shared),
        users: Arc::clone(&shared),
        reviews: Arc::clone(&shared),
        complaints: shared,
        tokens: InMemoryTokenRepository::new(),
        notifier: Arc::clone(&notifier),
        google: Arc::new(StaticGoogleVerifier),
    };

    let config = test_config();
    let state = web::Data::new(AppState::new(parts, &config));

    TestContext {
        store,
        notifier,
        config,
        state,
    }
}

impl TestContext {
    pub fn app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), &self.config)
    }

    /// Sign in (registering on first use) through the auth service
    pub async fn login(&self, subject: &str) -> AuthResponse {
        self.state
            .auth_service
            .google_login(&format!("google:{}", subject))
            .await
            .unwrap()
    }
}

pub fn bearer(auth: &AuthResponse) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", auth.tokens.access_token))
}
