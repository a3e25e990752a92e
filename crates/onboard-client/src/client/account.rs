//! Account identity and administration endpoints.

use onboard_core::Record;

use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::url::paths;

use super::OnboardClient;

impl<B: HttpBackend> OnboardClient<B> {
    /// The current account's information.
    pub(crate) async fn whoami(&self) -> ClientResult<Record> {
        self.get(paths::WHOAMI).await
    }

    /// Action audit log by or affecting the current account.
    pub(crate) async fn account_actions(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::ACCOUNT_ACTIONS).await
    }

    /// Visible user accounts (the whole organization for admins).
    pub(crate) async fn users(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::USERS).await
    }

    pub(crate) async fn organizations(&self) -> ClientResult<Vec<Record>> {
        self.get(paths::ORGANIZATIONS).await
    }
}
