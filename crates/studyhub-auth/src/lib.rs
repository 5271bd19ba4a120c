//! # studyhub-auth
//!
//! Argon2id password hashing and self-contained JWT bearer tokens.
//! Tokens carry everything needed to authenticate a request; there is no
//! revocation list, so a token stays valid until it expires.

pub mod jwt;
pub mod password;
