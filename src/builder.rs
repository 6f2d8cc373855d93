use crate::{
    config::parse_node_url,
    error::{Error, Result},
    node_interactor::identity::derive_identity,
    traits::Connector,
    types::{SignatureScheme, Submitter},
};
use tracing::info;

/// A builder pattern for constructing a `Submitter` instance.
///
/// `build` connects first and derives the signing identity second, so a `Submitter` only exists once both
/// steps succeeded.
pub struct SubmitterBuilder<Seed> {
    node_url: Option<String>,
    seed: Seed,
}

pub struct NoSeed;

pub struct AccountSeed {
    uri: String,
    scheme: SignatureScheme,
}

impl Default for SubmitterBuilder<NoSeed> {
    fn default() -> Self {
        SubmitterBuilder {
            node_url: None,
            seed: NoSeed,
        }
    }
}

impl<Seed> SubmitterBuilder<Seed> {
    /// Sets the node URL for the submitter to connect to.
    ///
    /// # Arguments
    /// * `url` - A string representing the WebSocket URL of the node.
    pub fn node_url(mut self, url: String) -> Self {
        self.node_url = Some(url);
        self
    }

    /// Sets the secret URI (eg. `//Alice`) the signing identity is derived from.
    ///
    /// # Arguments
    /// * `seed` - A string slice holding the secret URI.
    /// * `scheme` - The signature scheme of the keypair.
    pub fn account_seed(self, seed: &str, scheme: SignatureScheme) -> SubmitterBuilder<AccountSeed> {
        SubmitterBuilder {
            node_url: self.node_url,
            seed: AccountSeed {
                uri: seed.to_string(),
                scheme,
            },
        }
    }
}

impl SubmitterBuilder<AccountSeed> {
    /// Connects through `connector` and derives the signing identity.
    ///
    /// # Returns
    /// A `Result` that, if successful, contains the connected `Submitter`.
    pub async fn build<C>(self, connector: &C) -> Result<Submitter>
    where
        C: Connector + Sync + ?Sized,
    {
        let node_url = self.node_url.ok_or(Error::node_url_not_set())?;
        parse_node_url(&node_url)?;

        let connection = connector.connect(&node_url).await?;
        let identity = derive_identity(&self.seed.uri, self.seed.scheme)?;

        info!(
            node_url = node_url.as_str(),
            scheme = %self.seed.scheme,
            account = %identity.account_id(),
            "Submitter ready"
        );

        Ok(Submitter {
            connection,
            identity,
            node_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{BoxedConnection, MockConnection, MockConnector};
    use subxt_signer::sr25519::dev;

    #[test]
    fn test_node_url() {
        let builder = SubmitterBuilder::default().node_url("ws://127.0.0.1:9943".to_string());
        assert_eq!(builder.node_url, Some("ws://127.0.0.1:9943".to_string()));

        let builder = SubmitterBuilder::default()
            .node_url("ws://127.0.0.1:9943".to_string())
            .account_seed("//Alice", SignatureScheme::Sr25519);
        assert_eq!(builder.node_url, Some("ws://127.0.0.1:9943".to_string()));
        assert_eq!(builder.seed.uri, "//Alice");
    }

    #[tokio::test]
    async fn test_build() -> Result<()> {
        let mut connector = MockConnector::new();
        connector
            .expect_connect()
            .withf(|url| url == "ws://127.0.0.1:9943")
            .times(1)
            .return_once(|_| Ok(Box::new(MockConnection::new()) as BoxedConnection));

        let submitter = SubmitterBuilder::default()
            .node_url("ws://127.0.0.1:9943".to_string())
            .account_seed("//Alice", SignatureScheme::Sr25519)
            .build(&connector)
            .await?;

        assert_eq!(submitter.node_url, "ws://127.0.0.1:9943");
        assert_eq!(
            submitter.identity.account_id(),
            dev::alice().public_key().to_account_id()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_build_without_node_url() {
        let mut connector = MockConnector::new();
        connector.expect_connect().never();

        let result = SubmitterBuilder::default()
            .account_seed("//Alice", SignatureScheme::Sr25519)
            .build(&connector)
            .await;

        assert!(matches!(result, Err(Error::Custom(_))));
    }

    #[tokio::test]
    async fn test_build_rejects_http_url() {
        let mut connector = MockConnector::new();
        connector.expect_connect().never();

        let result = SubmitterBuilder::default()
            .node_url("http://127.0.0.1:9943".to_string())
            .account_seed("//Alice", SignatureScheme::Sr25519)
            .build(&connector)
            .await;

        assert!(matches!(result, Err(Error::InvalidNodeUrl { .. })));
    }

    #[tokio::test]
    async fn test_bad_seed_after_connect() {
        let mut connector = MockConnector::new();
        connector
            .expect_connect()
            .times(1)
            .return_once(|_| Ok(Box::new(MockConnection::new()) as BoxedConnection));

        let result = SubmitterBuilder::default()
            .node_url("ws://127.0.0.1:9943".to_string())
            .account_seed("definitely not a mnemonic", SignatureScheme::Sr25519)
            .build(&connector)
            .await;

        assert!(result.is_err());
    }
}
