//! Request handling
//!
//! [`App`] holds everything a connection needs beyond its socket: the route
//! table, the session store and the collaborators. It is built once at
//! start-up and shared by every connection.
//!
//! Business failures never escape [`App::respond`]. Bad credentials, unknown
//! sessions and missing resources all become redirects or error pages.

pub mod router;

use std::sync::Arc;

use crate::config::{Config, PagesConfig};
use crate::http::path::extension_of;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::service::{
    InMemoryUserRepository, ResourceError, ResourceResolver, StaticFiles, User, UserRepository,
};
use crate::session::{Session, SessionStore};

pub use router::{Handler, Resolution, RoutePattern, Router};

/// Why a login attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialFailure {
    #[error("account or password missing from form")]
    MissingField,
    #[error("unknown account")]
    UnknownAccount,
    #[error("password mismatch")]
    PasswordMismatch,
}

pub struct App {
    router: Router,
    sessions: SessionStore,
    users: Arc<dyn UserRepository>,
    resources: Arc<dyn ResourceResolver>,
    pages: PagesConfig,
    cookie_name: String,
}

impl App {
    pub fn new(
        sessions: SessionStore,
        users: Arc<dyn UserRepository>,
        resources: Arc<dyn ResourceResolver>,
    ) -> Self {
        Self {
            router: Router::standard(),
            sessions,
            users,
            resources,
            pages: PagesConfig::default(),
            cookie_name: "JSESSIONID".to_string(),
        }
    }

    /// Wires the in-memory user store and static file resolver from config.
    pub fn from_config(cfg: &Config) -> Self {
        let users = InMemoryUserRepository::with_users(cfg.users.iter().cloned().map(User::from));
        let sessions = SessionStore::new(cfg.session.ttl(), cfg.session.capacity);

        Self::new(
            sessions,
            Arc::new(users),
            Arc::new(StaticFiles::new(&cfg.static_files.root)),
        )
        .with_pages(cfg.pages.clone())
        .with_cookie_name(&cfg.session.cookie_name)
    }

    pub fn with_router(mut self, router: Router) -> Self {
        self.router = router;
        self
    }

    pub fn with_pages(mut self, pages: PagesConfig) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn route(&self, request: &Request) -> Resolution {
        self.router.resolve(request.method(), request.route())
    }

    pub async fn respond(&self, resolution: Resolution, request: &Request) -> Response {
        match resolution {
            Resolution::Matched(Handler::LoginPage) => self.login_page(request).await,
            Resolution::Matched(Handler::Login) => self.login(request).await,
            Resolution::Matched(Handler::Register) => self.register(request),
            Resolution::Matched(Handler::StaticResource) => self.serve(request.route()),
            Resolution::NotFound => self.not_found(),
            Resolution::MethodNotAllowed => Response::method_not_allowed(),
        }
    }

    /// Routes and answers a request in one step.
    pub async fn handle(&self, request: &Request) -> Response {
        let resolution = self.route(request);
        self.respond(resolution, request).await
    }

    async fn login_page(&self, request: &Request) -> Response {
        let cookies = match request.cookies() {
            Ok(cookies) => cookies,
            Err(e) => {
                tracing::warn!(error = %e, "Rejecting malformed Cookie header");
                return Response::bad_request();
            }
        };

        let Some(id) = cookies.get(&self.cookie_name) else {
            return self.serve(&self.pages.login);
        };

        match self.sessions.find_session(id).await {
            Some(session) => {
                tracing::info!(account = session.user.account(), "Already logged in");
                Response::redirect(&self.pages.landing)
            }
            None => {
                tracing::warn!(session = %id, "Invalid session");
                Response::redirect(&self.pages.error)
            }
        }
    }

    async fn login(&self, request: &Request) -> Response {
        let user = match self.authenticate(request) {
            Ok(user) => user,
            Err(failure) => {
                tracing::warn!(
                    account = request.body_value("account").unwrap_or_default(),
                    reason = %failure,
                    "Login failed"
                );
                return Response::redirect(&self.pages.error);
            }
        };

        let id = SessionStore::generate_id();
        tracing::info!(account = user.account(), "User logged in");
        self.sessions.add(Session::new(id.clone(), user)).await;

        let mut response = Response::redirect(&self.pages.landing);
        response.put_header("Set-Cookie", format!("{}={}", self.cookie_name, id));
        response
    }

    fn authenticate(&self, request: &Request) -> Result<User, CredentialFailure> {
        let (Some(account), Some(password)) =
            (request.body_value("account"), request.body_value("password"))
        else {
            return Err(CredentialFailure::MissingField);
        };

        let user = self
            .users
            .find_by_account(account)
            .ok_or(CredentialFailure::UnknownAccount)?;

        if !user.check_password(password) {
            return Err(CredentialFailure::PasswordMismatch);
        }

        Ok(user)
    }

    fn register(&self, request: &Request) -> Response {
        let (Some(account), Some(password), Some(email)) = (
            request.body_value("account"),
            request.body_value("password"),
            request.body_value("email"),
        ) else {
            tracing::warn!("Registration form incomplete");
            return Response::bad_request();
        };

        self.users.save(User::new(account, password, email));
        tracing::info!(account, "User registered");
        Response::redirect(&self.pages.landing)
    }

    /// 200 with the resource at `route`, typed by its extension.
    fn serve(&self, route: &str) -> Response {
        match self.resources.resolve(route) {
            Ok(content) => self.resource_response(StatusCode::Ok, route, content),
            Err(ResourceError::NotFound(_)) => self.not_found(),
            Err(ResourceError::Io(e)) => {
                tracing::error!(path = route, error = %e, "Failed to read resource");
                Response::plain(StatusCode::InternalServerError)
            }
        }
    }

    fn not_found(&self) -> Response {
        match self.resources.resolve(&self.pages.not_found) {
            Ok(content) => self.resource_response(StatusCode::NotFound, &self.pages.not_found, content),
            Err(_) => Response::not_found(),
        }
    }

    fn resource_response(&self, status: StatusCode, route: &str, content: Vec<u8>) -> Response {
        let mut response = Response::with_status(status);
        response.put_header("Content-Length", content.len());
        response.put_header("Content-Type", self.resources.mime_type_for(extension_of(route)));
        response.set_body(content);
        response
    }
}
