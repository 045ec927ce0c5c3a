//! Host and API version binding for URL construction.

/// Oldest supported REST API version.
pub const MIN_API_VERSION: u32 = 8;

/// Newest supported REST API version; out-of-range versions fall back to it.
pub const MAX_API_VERSION: u32 = 37;

/// Host plus API version, the only inputs the URL formatters need.
///
/// A context is immutable and cheap to build; the client derives a fresh one
/// for every dispatched operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    host: String,
    api_version: u32,
}

impl RequestContext {
    /// Create a context, clamping any version outside
    /// [`MIN_API_VERSION`]..=[`MAX_API_VERSION`] to [`MAX_API_VERSION`].
    pub fn new(host: impl Into<String>, api_version: i64) -> Self {
        let api_version = u32::try_from(api_version)
            .ok()
            .filter(|v| (MIN_API_VERSION..=MAX_API_VERSION).contains(v))
            .unwrap_or(MAX_API_VERSION);

        let mut host = host.into();
        while host.ends_with('/') {
            host.pop();
        }

        Self { host, api_version }
    }

    /// Returns true if `api_version` would be kept as-is by [`RequestContext::new`].
    pub fn is_version_valid(api_version: i64) -> bool {
        (i64::from(MIN_API_VERSION)..=i64::from(MAX_API_VERSION)).contains(&api_version)
    }

    /// Instance host, e.g. `https://na1.salesforce.com`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Effective API version.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// `<host>/services/data`
    pub fn base_url(&self) -> String {
        format!("{}/services/data", self.host)
    }

    /// `<host>/services/data/v<version>.0`
    pub fn version_url(&self) -> String {
        format!("{}/v{}.0", self.base_url(), self.api_version)
    }

    /// `<version_url>/sobjects`
    pub fn sobjects_url(&self) -> String {
        format!("{}/sobjects", self.version_url())
    }

    /// `<version_url>/sobjects/<name>`
    pub fn object_collection_url(&self, name: &str) -> String {
        format!("{}/{}", self.sobjects_url(), name)
    }

    /// `<version_url>/sobjects/<name>/<id>`
    pub fn object_url(&self, name: &str, id: &str) -> String {
        format!("{}/{}", self.object_collection_url(name), id)
    }

    /// `<version_url>/query?q=<percent-encoded soql>`
    pub fn query_url(&self, soql: &str) -> String {
        format!("{}/query?q={}", self.version_url(), urlencoding::encode(soql))
    }
}
