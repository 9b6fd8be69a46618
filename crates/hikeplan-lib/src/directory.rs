//! User directory client backed by a Cognito user pool.
//!
//! Attributes are looked up by name, so the order in which the pool returns
//! them does not matter.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::config::Credentials;
use aws_sdk_cognitoidentityprovider::error::DisplayErrorContext;
use aws_sdk_cognitoidentityprovider::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::UserInfo;

pub const FIRST_NAME_ATTRIBUTE: &str = "given_name";
pub const EMAIL_ATTRIBUTE: &str = "email";

const CREDENTIALS_PROVIDER_NAME: &str = "hikeplan-pool-manager";

/// Resolves usernames to profile attributes.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn lookup_user(&self, username: &str) -> Result<UserInfo>;
}

/// Cognito `AdminGetUser` lookup authenticated with the pool manager's
/// static credential pair.
pub struct CognitoDirectory {
    client: Client,
    user_pool_id: String,
}

impl CognitoDirectory {
    pub async fn connect(config: &Config) -> Self {
        let credentials = Credentials::new(
            config.manager.access_key_id.clone(),
            config.manager.secret_access_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            user_pool_id: config.user_pool_id.clone(),
        }
    }
}

#[async_trait]
impl UserDirectory for CognitoDirectory {
    async fn lookup_user(&self, username: &str) -> Result<UserInfo> {
        debug!(username, pool = %self.user_pool_id, "looking up user attributes");

        let output = self
            .client
            .admin_get_user()
            .user_pool_id(&self.user_pool_id)
            .username(username)
            .send()
            .await
            .map_err(|e| Error::UserLookup {
                username: username.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let user = user_from_attributes(
            username,
            output
                .user_attributes()
                .iter()
                .map(|attr| (attr.name(), attr.value())),
        )?;

        info!(username, "user attributes resolved");
        Ok(user)
    }
}

/// Build a [`UserInfo`] from `(name, value)` attribute pairs.
pub fn user_from_attributes<'a, I>(username: &str, attributes: I) -> Result<UserInfo>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let by_name: HashMap<&str, &str> = attributes
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect();

    let attribute = |attribute: &'static str| {
        by_name
            .get(attribute)
            .map(|value| value.to_string())
            .ok_or_else(|| Error::MissingUserAttribute {
                username: username.to_string(),
                attribute,
            })
    };

    Ok(UserInfo {
        first_name: attribute(FIRST_NAME_ATTRIBUTE)?,
        email: attribute(EMAIL_ATTRIBUTE)?,
    })
}
