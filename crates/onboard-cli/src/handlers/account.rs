//! Account and administration commands.

use anyhow::Result;
use onboard_core::OnboardApi;

use crate::presentation::{OutputFormat, emit_records, print_json};

/// Show the identity behind the configured credentials.
///
/// Always printed as JSON: the record is a single nested object.
pub async fn whoami(api: &dyn OnboardApi) -> Result<()> {
    let me = api.whoami().await?;
    print_json(&me)
}

pub async fn account_actions(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    let actions = api.get_account_actions().await?;
    emit_records(&actions, format)
}

pub async fn users(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    let users = api.get_users().await?;
    emit_records(&users, format)
}

pub async fn organizations(api: &dyn OnboardApi, format: OutputFormat) -> Result<()> {
    let orgs = api.get_organizations().await?;
    emit_records(&orgs, format)
}
