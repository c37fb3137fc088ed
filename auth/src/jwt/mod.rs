use jsonwebtoken::Algorithm;

pub mod claims;
pub mod errors;
pub mod issuer;
pub mod key;
pub mod verifier;

pub use claims::token_lifetime;
pub use claims::Claims;
pub use claims::TokenPrincipal;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use key::SigningKey;
pub use verifier::TokenVerifier;

/// The only signing algorithm issued or accepted.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Header name of [`ALGORITHM`].
pub const ALGORITHM_NAME: &str = "HS256";
