//! Login gate domain - credential pair and check outcome

mod credentials;

pub use credentials::{CredentialPair, LoginOutcome, REJECTED_MESSAGE};
