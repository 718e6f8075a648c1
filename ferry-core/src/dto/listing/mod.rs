//! Directory check DTOs

use serde::Serialize;

/// Query of `GET /api/checkLocalDir`
///
/// Empty `include`/`exclude` are sent as empty strings; the runner treats
/// them as absent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalListingQuery {
    pub local_dir: String,
    pub include: String,
    pub exclude: String,
}

impl LocalListingQuery {
    pub fn new(local_dir: impl Into<String>) -> Self {
        Self {
            local_dir: local_dir.into(),
            ..Default::default()
        }
    }

    /// One-line description of what is being checked
    pub fn describe(&self) -> String {
        format!(
            "Contents of LOCAL dir: '{}' include: '{}' exclude: '{}'",
            self.local_dir, self.include, self.exclude
        )
    }
}

/// Query of `GET /api/checkRemoteDir`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteListingQuery {
    pub remote_dir: String,
    pub include: String,
    pub exclude: String,
    pub server: String,
    pub auth_token: String,
}

impl RemoteListingQuery {
    pub fn new(remote_dir: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            remote_dir: remote_dir.into(),
            server: server.into(),
            ..Default::default()
        }
    }

    /// One-line description of what is being checked; never includes the auth token
    pub fn describe(&self) -> String {
        format!(
            "Contents of REMOTE dir: '{}' include: '{}' exclude: '{}' server: {}",
            self.remote_dir, self.include, self.exclude, self.server
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_query_wire_names() {
        let mut query = RemoteListingQuery::new("/data", "http://peer:8080");
        query.auth_token = "secret".to_string();
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["remoteDir"], "/data");
        assert_eq!(json["authToken"], "secret");
        assert_eq!(json["include"], "");
        assert!(!query.describe().contains("secret"));
    }
}
