//! Domain façades over the dispatch core.
//!
//! Each façade pins a platform surface to fixed resource paths and typed
//! payload shapes. They carry no logic of their own: every method is one
//! dispatcher call.

pub mod chat;
pub mod companion;
pub mod crm;
pub mod projects;
pub mod user;

pub use chat::ChatApi;
pub use companion::CompanionApi;
pub use crm::CrmApi;
pub use projects::ProjectsApi;
pub use user::UserApi;
