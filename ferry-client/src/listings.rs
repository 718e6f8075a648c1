//! Directory check endpoints

use ferry_core::domain::listing::DirectoryListing;
use ferry_core::dto::listing::{LocalListingQuery, RemoteListingQuery};

use crate::FerryClient;
use crate::error::Result;

impl FerryClient {
    /// List a directory on the runner's machine
    pub async fn check_local_dir(&self, query: &LocalListingQuery) -> Result<DirectoryListing> {
        let url = self.endpoint(&["api", "checkLocalDir"])?;
        let response = self.client.get(url).query(query).send().await?;

        self.handle_response(response).await
    }

    /// List a directory on a remote transfer server, through the runner
    pub async fn check_remote_dir(&self, query: &RemoteListingQuery) -> Result<DirectoryListing> {
        let url = self.endpoint(&["api", "checkRemoteDir"])?;
        let response = self.client.get(url).query(query).send().await?;

        self.handle_response(response).await
    }
}
