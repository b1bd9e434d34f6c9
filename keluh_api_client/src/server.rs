use std::{fmt::Display, net::SocketAddr};

use url::Url;


pub enum ServerHost {
    Ip(SocketAddr),
    DomainName(String),
}

impl Display for ServerHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerHost::Ip(socket_addr) => socket_addr.fmt(f),
            ServerHost::DomainName(domain_name) => domain_name.fmt(f),
        }
    }
}

impl From<SocketAddr> for ServerHost {
    fn from(value: SocketAddr) -> Self {
        Self::Ip(value)
    }
}

impl From<String> for ServerHost {
    fn from(value: String) -> Self {
        Self::DomainName(value)
    }
}

impl From<&str> for ServerHost {
    fn from(value: &str) -> Self {
        Self::DomainName(value.to_string())
    }
}



pub struct ApiServerOptions {
    pub use_https: bool,
}

impl Default for ApiServerOptions {
    fn default() -> Self {
        Self { use_https: true }
    }
}


/// Location of the backend's versioned API root, e.g. `https://example.com/api/v1`.
#[derive(Clone, Debug)]
pub struct ApiServer {
    base_api_url: String,
}

impl ApiServer {
    pub fn new<S>(server_host: S, options: ApiServerOptions) -> Self
    where
        S: Into<ServerHost>,
    {
        let protocol = match options.use_https {
            true => "https",
            false => "http",
        };

        Self {
            base_api_url: format!("{}://{}/api/v1", protocol, server_host.into()),
        }
    }

    /// Uses an already complete API root URL as-is (a trailing slash is dropped).
    pub fn from_base_url(base_api_url: &Url) -> Self {
        Self {
            base_api_url: base_api_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }
}



#[cfg(test)]
mod test {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;

    #[test]
    fn builds_versioned_api_root_from_host() {
        let server = ApiServer::new(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080),
            ApiServerOptions { use_https: false },
        );
        assert_eq!(server.base_url(), "http://127.0.0.1:8080/api/v1");

        let server = ApiServer::new("capstone-dev.mdrizki.my.id", ApiServerOptions::default());
        assert_eq!(
            server.base_url(),
            "https://capstone-dev.mdrizki.my.id/api/v1"
        );
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let url = Url::parse("https://capstone-dev.mdrizki.my.id/api/v1/").unwrap();

        assert_eq!(
            ApiServer::from_base_url(&url).base_url(),
            "https://capstone-dev.mdrizki.my.id/api/v1"
        );
    }
}
