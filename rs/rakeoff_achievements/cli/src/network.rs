use rakeoff_achievements_client::RootKey;
use std::str::FromStr;
use url::Url;

pub const LOCAL_REPLICA_URL: &str = "http://127.0.0.1:4943";
pub const IC_URL: &str = "https://icp-api.io";

/// The network to talk to: "local", "ic", or the URL of a replica or boundary node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    pub url: Url,
    is_local: bool,
}

impl Network {
    /// Local replicas generate their own root key, so it has to be fetched. Anything
    /// else is verified against the mainnet key unless told otherwise.
    pub fn root_key(&self, fetch_root_key: bool) -> RootKey {
        if self.is_local || fetch_root_key {
            RootKey::Fetch
        } else {
            RootKey::Embedded
        }
    }
}

impl FromStr for Network {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = match s {
            "local" => Url::parse(LOCAL_REPLICA_URL)?,
            "ic" => Url::parse(IC_URL)?,
            url => Url::parse(url)?,
        };
        let is_local = matches!(url.host_str(), Some("127.0.0.1" | "localhost" | "[::1]"));
        Ok(Self { url, is_local })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_resolve_named_networks() {
        let local: Network = "local".parse().unwrap();
        assert_eq!(local.url.as_str(), "http://127.0.0.1:4943/");
        assert_eq!(local.root_key(false), RootKey::Fetch);

        let ic: Network = "ic".parse().unwrap();
        assert_eq!(ic.url.as_str(), "https://icp-api.io/");
        assert_eq!(ic.root_key(false), RootKey::Embedded);
    }

    #[test]
    fn should_only_fetch_root_key_of_remote_url_when_asked() {
        let testnet: Network = "https://testnet.example.org".parse().unwrap();
        assert_eq!(testnet.root_key(false), RootKey::Embedded);
        assert_eq!(testnet.root_key(true), RootKey::Fetch);

        let localhost: Network = "http://localhost:8080".parse().unwrap();
        assert_eq!(localhost.root_key(false), RootKey::Fetch);
    }

    #[test]
    fn should_reject_invalid_network() {
        assert!("not a network".parse::<Network>().is_err());
    }
}
