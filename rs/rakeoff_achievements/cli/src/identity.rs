use anyhow::Context;
use ic_agent::identity::{AnonymousIdentity, BasicIdentity, Secp256k1Identity};
use ic_agent::Identity;
use std::path::Path;
use tracing::debug;

/// Loads the identity to sign calls with. dfx creates secp256k1 keys, older
/// identities may be Ed25519, so both are accepted.
pub fn load_identity(pem_file: Option<&Path>) -> anyhow::Result<Box<dyn Identity>> {
    let Some(pem_file) = pem_file else {
        debug!("No identity given, calling anonymously");
        return Ok(Box::new(AnonymousIdentity));
    };

    if let Ok(identity) = Secp256k1Identity::from_pem_file(pem_file) {
        return Ok(Box::new(identity));
    }
    let identity = BasicIdentity::from_pem_file(pem_file).with_context(|| {
        format!(
            "{} is neither a secp256k1 nor an Ed25519 PEM key",
            pem_file.display()
        )
    })?;
    Ok(Box::new(identity))
}
