//! Application State - Global application state
//!
//! Holds every repository plus the settings the handlers need.

use crate::repositories::{
    BookingRepository, ConversationRepository, EnquiryRepository, MessageRepository,
    TestimonialRepository, UserRepository,
};
use sqlx::SqlitePool;

pub const DEFAULT_JWT_EXPIRY_DAYS: i64 = 7;

/// Global state shared by every route and middleware
pub struct AppState {
    pub user: UserRepository,
    pub booking: BookingRepository,
    pub conversation: ConversationRepository,
    pub msg: MessageRepository,
    pub enquiry: EnquiryRepository,
    pub testimonial: TestimonialRepository,

    /// Secret key for signing JWT tokens
    pub jwt_secret: String,

    /// Lifetime of issued tokens
    pub jwt_expiry_days: i64,

    /// Whether the login cookie carries the `Secure` attribute (HTTPS only)
    pub secure_cookies: bool,
}

impl AppState {
    /// Creates a new AppState with every repository sharing `pool`.
    /// Tokens expire after [`DEFAULT_JWT_EXPIRY_DAYS`] and the login cookie is `Secure`;
    /// see [`AppState::with_jwt_expiry_days`] and [`AppState::with_secure_cookies`].
    pub fn new(pool: SqlitePool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            booking: BookingRepository::new(pool.clone()),
            conversation: ConversationRepository::new(pool.clone()),
            msg: MessageRepository::new(pool.clone()),
            enquiry: EnquiryRepository::new(pool.clone()),
            testimonial: TestimonialRepository::new(pool),
            jwt_secret,
            jwt_expiry_days: DEFAULT_JWT_EXPIRY_DAYS,
            secure_cookies: true,
        }
    }

    pub fn with_jwt_expiry_days(mut self, days: i64) -> Self {
        self.jwt_expiry_days = days;
        self
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }
}
