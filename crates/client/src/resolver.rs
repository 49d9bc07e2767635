use trustable_core::{Brand, ScoreRecord};

use crate::client::{ScoreClient, ScoreError};

/// Turns a brand and optional credential into a renderable record.
///
/// Without a credential the widget is in its teaser state and always shows
/// the default score. With one, a single remote lookup is attempted; any
/// failure collapses to the same default. The local estimator is never
/// consulted here.
#[derive(Clone)]
pub struct ScoreResolver {
    client: ScoreClient,
}

impl ScoreResolver {
    pub fn new(client: ScoreClient) -> Self {
        Self { client }
    }

    /// Resolver for the API rooted at `api_base`.
    pub fn for_api(api_base: impl Into<String>) -> Result<Self, ScoreError> {
        Ok(Self::new(ScoreClient::new(api_base)?))
    }

    pub fn client(&self) -> &ScoreClient {
        &self.client
    }

    /// Resolve a record. Never fails; remote errors fall back silently.
    ///
    /// Takes a [`Brand`], so an empty brand can never reach the API.
    pub async fn resolve(&self, brand: &Brand, credential: Option<&str>) -> ScoreRecord {
        match self.resolve_strict(brand, credential).await {
            Ok(record) => record,
            Err(ScoreError::MissingCredential) => ScoreRecord::fallback(brand.clone()),
            Err(e) => {
                log::debug!("score lookup for {:?} failed, showing default: {}", brand, e);
                ScoreRecord::fallback(brand.clone())
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but reports why no remote score was
    /// obtained instead of falling back.
    pub async fn resolve_strict(
        &self,
        brand: &Brand,
        credential: Option<&str>,
    ) -> Result<ScoreRecord, ScoreError> {
        let credential = credential
            .filter(|c| !c.is_empty())
            .ok_or(ScoreError::MissingCredential)?;

        let score = self.client.fetch_score(brand, credential).await?;
        Ok(ScoreRecord::new(brand.clone(), score))
    }
}
