//! Storage backends the server can run on
//!
//! A [`Backend`] names the concrete repository and provider types that the
//! services are instantiated with. Handlers are generic over it, so the same
//! routes serve MySQL in production and the in-memory store in development
//! and tests.

use std::sync::Arc;

use chrono::Utc;
use gc_core::domain::entities::{Company, NewReview, NewUser, Review, User, UserRole};
use gc_core::errors::DomainError;
use gc_core::repositories::{
    CompanyRepository, ComplaintRepository, InMemoryStore, InMemoryTokenRepository, ReviewRepository,
    TokenRepository, UserRepository,
};
use gc_core::services::{GoogleTokenVerifier, NotificationSender};
use gc_infra::database::seed::{SEED_COMPANIES, SEED_REVIEWS, SUNPOWER_ID, SUNPOWER_OWNER_ID};
use gc_infra::database::{
    DatabasePool, MySqlCompanyRepository, MySqlComplaintRepository, MySqlReviewRepository, MySqlTokenRepository,
    MySqlUserRepository,
};
use gc_infra::google::GoogleTokenInfoVerifier;
use gc_infra::notification::NotificationSenderAdapter;
use uuid::Uuid;

pub trait Backend: 'static {
    type Companies: CompanyRepository + 'static;
    type Users: UserRepository + 'static;
    type Reviews: ReviewRepository + 'static;
    type Complaints: ComplaintRepository + 'static;
    type Tokens: TokenRepository + 'static;
    type Notifier: NotificationSender + 'static;
    type Google: GoogleTokenVerifier + 'static;
}

/// Instances handed to [`crate::AppState::new`]
pub struct BackendParts<B: Backend> {
    pub companies: Arc<B::Companies>,
    pub users: Arc<B::Users>,
    pub reviews: Arc<B::Reviews>,
    pub complaints: Arc<B::Complaints>,
    pub tokens: B::Tokens,
    pub notifier: Arc<B::Notifier>,
    pub google: Arc<B::Google>,
}

/// MySQL repositories, SNS (or log) notifications, Google tokeninfo
pub struct MySqlBackend;

impl Backend for MySqlBackend {
    type Companies = MySqlCompanyRepository;
    type Users = MySqlUserRepository;
    type Reviews = MySqlReviewRepository;
    type Complaints = MySqlComplaintRepository;
    type Tokens = MySqlTokenRepository;
    type Notifier = NotificationSenderAdapter;
    type Google = GoogleTokenInfoVerifier;
}

impl MySqlBackend {
    pub fn parts(
        pool: &DatabasePool,
        notifier: NotificationSenderAdapter,
        google: GoogleTokenInfoVerifier,
    ) -> BackendParts<Self> {
        let pool = pool.get_pool().clone();
        BackendParts {
            companies: Arc::new(MySqlCompanyRepository::new(pool.clone())),
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            reviews: Arc::new(MySqlReviewRepository::new(pool.clone())),
            complaints: Arc::new(MySqlComplaintRepository::new(pool.clone())),
            tokens: MySqlTokenRepository::new(pool),
            notifier: Arc::new(notifier),
            google: Arc::new(google),
        }
    }
}

/// Every table in one [`InMemoryStore`]; nothing survives a restart
pub struct MemoryBackend;

impl Backend for MemoryBackend {
    type Companies = InMemoryStore;
    type Users = InMemoryStore;
    type Reviews = InMemoryStore;
    type Complaints = InMemoryStore;
    type Tokens = InMemoryTokenRepository;
    type Notifier = NotificationSenderAdapter;
    type Google = GoogleTokenInfoVerifier;
}

impl MemoryBackend {
    pub fn parts(
        store: InMemoryStore,
        notifier: NotificationSenderAdapter,
        google: GoogleTokenInfoVerifier,
    ) -> BackendParts<Self> {
        let store = Arc::new(store);
        BackendParts {
            companies: Arc::clone(&store),
            users: Arc::clone(&store),
            reviews: Arc::clone(&store),
            complaints: store,
            tokens: InMemoryTokenRepository::new(),
            notifier: Arc::new(notifier),
            google: Arc::new(google),
        }
    }
}

/// Load the bootstrap companies, owner and reviews into an empty store
pub async fn seed_memory_store(store: &InMemoryStore) -> Result<(), DomainError> {
    let parse = |id: &str| Uuid::parse_str(id).map_err(|e| DomainError::internal(format!("bad seed id {}: {}", id, e)));
    let now = Utc::now();

    for seed in &SEED_COMPANIES {
        let company = Company {
            company_id: parse(seed.company_id)?,
            user_id: seed.owner_id.map(parse).transpose()?,
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            email: seed.email.to_string(),
            phone: seed.phone.to_string(),
            web_page: Some(seed.web_page.to_string()),
            street: seed.street.to_string(),
            street_number: seed.street_number.to_string(),
            city: seed.city.to_string(),
            state: seed.state.to_string(),
            zip_code: seed.zip_code.to_string(),
            profile_picture: Some(seed.profile_picture.to_string()),
            status: seed.status,
            created_at: now,
            updated_at: now,
        };
        store.insert_company(company).await;
    }

    let sunpower_id = parse(SUNPOWER_ID)?;
    let mut owner = User::new(NewUser {
        role: UserRole::Company,
        first_name: "SunPower".to_string(),
        last_name: "Admin".to_string(),
        email: "owner@sunpower.com".to_string(),
        ..Default::default()
    });
    owner.user_id = parse(SUNPOWER_OWNER_ID)?;
    owner.company_id = Some(sunpower_id);
    store.insert_user(owner).await;

    for (rating, comment) in SEED_REVIEWS {
        let review = Review::new(NewReview {
            user_id: Uuid::new_v4(),
            company_id: sunpower_id,
            rating,
            comment: comment.to_string(),
        });
        ReviewRepository::create(store, review).await?;
    }

    log::info!("Seeded in-memory store with {} companies", SEED_COMPANIES.len());
    Ok(())
}
