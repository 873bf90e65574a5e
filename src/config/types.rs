//! Runtime settings for the gateway, populated from the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_HOST: &str = "cluster0.xieksrd.mongodb.net";
pub const DEFAULT_DB_NAME: &str = "toy-cars";
pub const DEFAULT_TOYS_COLLECTION: &str = "cars";
pub const DEFAULT_REVIEWS_COLLECTION: &str = "customer-review";
/// Matches the 100kb default of common JSON body parsers.
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
    pub mongo: MongoSettings,
}

impl Settings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            mongo: MongoSettings::default(),
        }
    }
}

/// Where the connection string comes from: a full URI, or an SRV host plus credentials.
/// Credentials are optional; a deployment without them fails at first use, not at startup.
#[derive(Clone, PartialEq, Eq)]
pub enum MongoEndpoint {
    Uri(String),
    Srv {
        host: String,
        user: Option<String>,
        password: Option<String>,
    },
}

impl std::fmt::Debug for MongoEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MongoEndpoint::Uri(_) => f.write_str("Uri(<redacted>)"),
            MongoEndpoint::Srv { host, user, password } => f
                .debug_struct("Srv")
                .field("host", host)
                .field("user", user)
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoSettings {
    pub endpoint: MongoEndpoint,
    pub database: String,
    pub toys_collection: String,
    pub reviews_collection: String,
}

impl MongoSettings {
    /// Connection string without credentials; for `Srv` the credentials are attached separately.
    pub fn connection_uri(&self) -> String {
        match &self.endpoint {
            MongoEndpoint::Uri(uri) => uri.clone(),
            MongoEndpoint::Srv { host, .. } => {
                format!("mongodb+srv://{}/?retryWrites=true&w=majority", host)
            }
        }
    }
}

impl Default for MongoSettings {
    fn default() -> Self {
        MongoSettings {
            endpoint: MongoEndpoint::Uri("mongodb://localhost:27017".into()),
            database: DEFAULT_DB_NAME.into(),
            toys_collection: DEFAULT_TOYS_COLLECTION.into(),
            reviews_collection: DEFAULT_REVIEWS_COLLECTION.into(),
        }
    }
}
