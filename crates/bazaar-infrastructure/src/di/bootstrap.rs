//! Application bootstrap
//!
//! Builds the adapters named by the configuration and wires them into the
//! application services.
//!
//! ```text
//! AppConfig → adapters (store, codec, hasher, cache, email) → use cases
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config).await?;
//! let user = context.resolver().resolve(Some(token)).await;
//! ```

use std::sync::Arc;
use std::time::Duration;

use bazaar_application::{
    AuthService, Mailer, NotificationService, SessionResolver, UserAdminService,
};
use bazaar_domain::error::Result;
use bazaar_domain::{EmailSender, PasswordHasher, SessionCache, TokenCodec, UserRepository};

use crate::cache::DashMapSessionCache;
use crate::config::{AppConfig, EmailProvider};
use crate::crypto::{BcryptPasswordHasher, JwtTokenCodec};
use crate::email::{HttpEmailSender, LogEmailSender};
use crate::repositories::InMemoryUserRepository;

/// Everything a request handler needs, shared behind `Arc`s
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenCodec>,
    cache: Arc<dyn SessionCache>,
    resolver: SessionResolver,
    auth: AuthService,
    admin: UserAdminService,
    notifications: NotificationService,
}

impl AppContext {
    /// Wire services around an explicit store and email sender
    pub fn with_adapters(
        config: AppConfig,
        users: Arc<dyn UserRepository>,
        email: Arc<dyn EmailSender>,
    ) -> Result<Self> {
        let tokens: Arc<dyn TokenCodec> = Arc::new(JwtTokenCodec::new(&config.auth.jwt)?);
        let hasher: Arc<dyn PasswordHasher> =
            Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));
        let cache: Arc<dyn SessionCache> = Arc::new(DashMapSessionCache::new());
        let mailer = Mailer::new(email);

        let resolver = SessionResolver::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            Arc::clone(&cache),
            Duration::from_secs(config.auth.session_cache_ttl_secs),
        );
        let auth = AuthService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            hasher,
            Arc::clone(&cache),
            mailer.clone(),
            config.server.public_url.clone(),
        );
        let admin = UserAdminService::new(Arc::clone(&users), Arc::clone(&cache));
        let notifications = NotificationService::new(Arc::clone(&users), mailer);

        Ok(Self {
            config: Arc::new(config),
            users,
            tokens,
            cache,
            resolver,
            auth,
            admin,
            notifications,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.users)
    }

    pub fn tokens(&self) -> Arc<dyn TokenCodec> {
        Arc::clone(&self.tokens)
    }

    pub fn cache(&self) -> Arc<dyn SessionCache> {
        Arc::clone(&self.cache)
    }

    pub fn resolver(&self) -> &SessionResolver {
        &self.resolver
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn admin(&self) -> &UserAdminService {
        &self.admin
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }
}

/// Build the application context from configuration
///
/// Seeds the user store when `users.seed_path` is set and selects the email
/// provider.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let users: Arc<dyn UserRepository> = match &config.users.seed_path {
        Some(path) => Arc::new(InMemoryUserRepository::load_seed(path).await?),
        None => {
            tracing::warn!("no user seed configured, starting with an empty store");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let email: Arc<dyn EmailSender> = match config.email.provider {
        EmailProvider::Log => Arc::new(LogEmailSender),
        EmailProvider::Http => Arc::new(HttpEmailSender::new(&config.email)?),
    };

    tracing::info!(
        environment = %config.environment,
        email_provider = ?config.email.provider,
        "application context ready"
    );
    AppContext::with_adapters(config, users, email)
}
