use staffhub_auth::Principal;

/// The authenticated principal for the current request.
///
/// Inserted into request extensions by the `protect` middleware; every
/// downstream gate and handler reads it from there.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

impl CurrentUser {
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}
