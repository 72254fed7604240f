use crate::config::FrontendConfig;
use crate::models::session::{Session, SessionHandle};
use async_trait::async_trait;
use chrono::NaiveDate;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use shared::models::{
    AuthResponse, AvailabilityResponse, Booking, BookingRequest, ChangePasswordRequest,
    CreateEmployeeRequest, ErrorResponse, LoginRequest, RegisterRequest, ServiceCenter,
    ServiceOffering, UpdateProfileRequest, UserRecord,
};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use yewdux::Dispatch;

/// Shown when an error carries nothing more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

thread_local! {
    static SHARED_HTTP: OnceCell<Client> = const { OnceCell::new() };
}

/// Failure of a call to an AutoCare backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401: the token was missing, expired or revoked.
    #[error("authentication required")]
    Unauthorized { message: Option<String> },
    /// 403: signed in, but not allowed to do this.
    #[error("permission denied")]
    Forbidden { message: Option<String> },
    /// No response: connection failure or timeout.
    #[error("network unreachable: {0}")]
    Network(String),
    /// Any other non-2xx status.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    /// The request or response body did not match the expected shape.
    #[error("unexpected payload: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Message supplied by the backend in the error body.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Server { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Serialization(_) => None,
        }
    }

    /// HTTP status, when a response arrived.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED.as_u16()),
            Self::Forbidden { .. } => Some(StatusCode::FORBIDDEN.as_u16()),
            Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Serialization(_) => None,
        }
    }
}

/// Display text for `error`: the backend's message, else the transport's,
/// else [`GENERIC_ERROR_MESSAGE`].
#[must_use]
pub fn error_message(error: &ApiError) -> String {
    if let Some(message) = error.backend_message() {
        return message.to_string();
    }
    match error {
        ApiError::Network(message) | ApiError::Serialization(message)
            if !message.trim().is_empty() =>
        {
            message.clone()
        }
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

/// Failure below HTTP: nothing came back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("unable to connect to server: {0}")]
    Network(String),
}

/// Outbound request as handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends requests over the wire.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Execute `request`, returning whatever status came back.
    ///
    /// # Errors
    /// Returns [`TransportError`] when no response arrives in time.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Transport sharing the thread's connection pool.
    pub fn new(timeout: Duration) -> Self {
        let client = SHARED_HTTP.with(|cell| cell.get_or_init(Client::new).clone());
        Self { client, timeout }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .timeout(self.timeout);
        if let Some(token) = request.bearer.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        let classify = |err: reqwest::Error| {
            if err.is_timeout() {
                TransportError::Timeout(self.timeout)
            } else {
                TransportError::Network(err.to_string())
            }
        };
        let response = builder.send().await.map_err(classify)?;
        let status = response.status();
        let body = response.text().await.map_err(classify)?;
        Ok(ApiResponse { status, body })
    }
}

/// Where to send the browser once the session is rejected.
pub trait LoginRedirect {
    /// Leave the current page for `login_path`.
    fn redirect_to_login(&self, login_path: &str);
}

/// Full page navigation, discarding all in-memory state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRedirect;

impl LoginRedirect for BrowserRedirect {
    fn redirect_to_login(&self, login_path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(login_path) {
            warn!(error = ?err, "login redirect failed");
        }
    }
}

/// Origin of the current page, e.g. `https://app.example.com`.
pub fn browser_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Which deployment a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Auth, user and employee endpoints.
    Account,
    /// Centers, services, availability and bookings.
    Booking,
}

/// Which token, if any, to present.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Credentials {
    /// Whatever the session holds when the request is sent.
    Session,
    /// A token not yet stored in the session (right after login).
    Token(String),
    /// None; the endpoint issues tokens rather than checking them.
    Anonymous,
}

/// API client for the AutoCare backends.
///
/// Attaches the session's bearer token to every call. A 401 on an
/// authenticated call signs the session out and reloads the login page; a
/// 403 leaves the session alone.
#[derive(Clone)]
pub struct AutoCareClient {
    config: Rc<FrontendConfig>,
    transport: Rc<dyn HttpTransport>,
    session: Rc<dyn SessionHandle>,
    redirect: Rc<dyn LoginRedirect>,
}

impl fmt::Debug for AutoCareClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoCareClient")
            .field("api_base_url", &self.config.api_base_url)
            .field("booking_base_url", &self.config.booking_base_url)
            .finish_non_exhaustive()
    }
}

impl AutoCareClient {
    /// Create a client from explicit collaborators.
    pub fn new(
        config: FrontendConfig,
        transport: Rc<dyn HttpTransport>,
        session: Rc<dyn SessionHandle>,
        redirect: Rc<dyn LoginRedirect>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            transport,
            session,
            redirect,
        }
    }

    /// Client wired to the browser: reqwest, the yewdux session store and
    /// full-page redirects.
    pub fn browser(session: Dispatch<Session>) -> Self {
        let mut config = FrontendConfig::new();
        if let Some(origin) = browser_origin() {
            config = config.with_origin(&origin);
        }
        let transport = ReqwestTransport::new(config.request_timeout);
        Self::new(
            config,
            Rc::new(transport),
            Rc::new(session),
            Rc::new(BrowserRedirect),
        )
    }

    /// The session this client reads tokens from.
    pub fn session(&self) -> &Rc<dyn SessionHandle> {
        &self.session
    }

    fn url(&self, backend: Backend, path: &str) -> String {
        let base = match backend {
            Backend::Account => &self.config.api_base_url,
            Backend::Booking => &self.config.booking_base_url,
        };
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send a JSON request to the account backend and decode the reply.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn send<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let raw = self
            .dispatch(Backend::Account, Credentials::Session, method, path, body)
            .await?;
        decode(&raw)
    }

    async fn fetch<R: DeserializeOwned>(&self, backend: Backend, path: &str) -> Result<R, ApiError> {
        let raw = self
            .dispatch::<Value>(backend, Credentials::Session, Method::GET, path, None)
            .await?;
        decode(&raw)
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        backend: Backend,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.dispatch(backend, Credentials::Session, method, path, body)
            .await
            .map(drop)
    }

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        backend: Backend,
        credentials: Credentials,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| ApiError::Serialization(err.to_string()))?;
        let bearer = match credentials {
            Credentials::Session => self.session.token(),
            Credentials::Token(token) => Some(token),
            Credentials::Anonymous => None,
        };
        debug!(%method, path, authenticated = bearer.is_some(), "sending request");

        let request = ApiRequest {
            method: method.clone(),
            url: self.url(backend, path),
            bearer: bearer.clone(),
            body,
        };
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%method, path, error = %err, "request failed without a response");
                return Err(ApiError::Network(err.to_string()));
            }
        };

        if response.status.is_success() {
            return Ok(response.body);
        }

        let message = serde_json::from_str::<ErrorResponse>(&response.body)
            .ok()
            .and_then(|body| body.display_message().map(str::to_owned));
        match response.status {
            StatusCode::UNAUTHORIZED => {
                warn!(%method, path, "request rejected as unauthenticated");
                if let Some(token) = bearer {
                    self.invalidate_session(&token);
                }
                Err(ApiError::Unauthorized { message })
            }
            StatusCode::FORBIDDEN => {
                warn!(%method, path, "request rejected as forbidden");
                Err(ApiError::Forbidden { message })
            }
            status => {
                warn!(%method, path, status = status.as_u16(), "request failed");
                Err(ApiError::Server {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Sign out after a 401, unless the session already moved on to a
    /// different token while the request was in flight.
    fn invalidate_session(&self, rejected_token: &str) {
        if self.session.token().as_deref() != Some(rejected_token) {
            debug!("session changed while request was in flight; leaving it intact");
            return;
        }
        info!("session rejected by backend; signing out");
        self.session.logout();
        self.redirect.redirect_to_login(&self.config.login_path);
    }

    /// Create a customer account.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let raw = self
            .dispatch(
                Backend::Account,
                Credentials::Anonymous,
                Method::POST,
                "auth/register",
                Some(payload),
            )
            .await?;
        decode(&raw)
    }

    /// Exchange credentials for a token.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let raw = self
            .dispatch(
                Backend::Account,
                Credentials::Anonymous,
                Method::POST,
                "auth/login",
                Some(payload),
            )
            .await?;
        decode(&raw)
    }

    /// Profile of the signed-in user.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get_profile(&self) -> Result<UserRecord, ApiError> {
        self.fetch(Backend::Account, "users/me").await
    }

    /// Profile for a token that is not in the session yet.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get_profile_with_token(&self, token: &str) -> Result<UserRecord, ApiError> {
        let raw = self
            .dispatch::<Value>(
                Backend::Account,
                Credentials::Token(token.to_string()),
                Method::GET,
                "users/me",
                None,
            )
            .await?;
        decode(&raw)
    }

    /// Fetch the profile for a freshly issued `token` and store both in the
    /// session.
    ///
    /// # Errors
    /// See [`ApiError`]. The session is left untouched on failure.
    pub async fn establish_session(&self, token: String) -> Result<UserRecord, ApiError> {
        let user = self.get_profile_with_token(&token).await?;
        info!(user_id = user.id, role = %user.role, "signed in");
        self.session.login(token, user.clone());
        Ok(user)
    }

    /// Change first and last name.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn update_profile(&self, payload: &UpdateProfileRequest) -> Result<UserRecord, ApiError> {
        self.send(Method::PUT, "users/me", Some(payload)).await
    }

    /// Change the account password.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn change_password(&self, payload: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.execute(Backend::Account, Method::PATCH, "users/me/password", Some(payload))
            .await
    }

    /// All employee accounts (admin only).
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn list_employees(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.fetch(Backend::Account, "employees").await
    }

    /// Create an employee account (admin only).
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn create_employee(&self, payload: &CreateEmployeeRequest) -> Result<(), ApiError> {
        self.execute(Backend::Account, Method::POST, "employees", Some(payload))
            .await
    }

    /// Flip an employee between enabled and disabled (admin only).
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn toggle_employee_status(&self, employee_id: i64) -> Result<(), ApiError> {
        self.execute::<Value>(
            Backend::Account,
            Method::PATCH,
            &format!("employees/{employee_id}/status"),
            None,
        )
        .await
    }

    /// Service centers.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn list_centers(&self) -> Result<Vec<ServiceCenter>, ApiError> {
        self.fetch(Backend::Booking, "centers/").await
    }

    /// Bookable services.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn list_services(&self) -> Result<Vec<ServiceOffering>, ApiError> {
        self.fetch(Backend::Booking, "services/").await
    }

    /// Time slots for a center, day and service.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn availability(
        &self,
        center_id: i64,
        date: NaiveDate,
        service_id: i64,
    ) -> Result<AvailabilityResponse, ApiError> {
        let path = format!("availability/{center_id}/{}/{service_id}/", date.format("%Y-%m-%d"));
        self.fetch(Backend::Booking, &path).await
    }

    /// Bookings visible to the signed-in user.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.fetch(Backend::Booking, "bookings/").await
    }

    /// Submit a booking.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn create_booking(&self, payload: &BookingRequest) -> Result<(), ApiError> {
        self.execute(Backend::Booking, Method::POST, "bookings/", Some(payload))
            .await
    }
}

fn decode<R: DeserializeOwned>(raw: &str) -> Result<R, ApiError> {
    serde_json::from_str(raw).map_err(|err| ApiError::Serialization(err.to_string()))
}
