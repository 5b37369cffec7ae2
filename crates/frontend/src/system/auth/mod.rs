pub mod context;
pub mod guard;
pub mod storage;

pub use context::{use_auth, AuthContext, AuthProvider};
pub use guard::RequireAuth;
