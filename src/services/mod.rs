pub mod issuer;
pub mod validator;
pub mod verifier;
