//! Per-invocation authentication against note.com

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::{
    AuthenticatedClient, NoteSession, SessionManager, SESSION_COOKIE, XSRF_COOKIE,
};
