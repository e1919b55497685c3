use reqwest::{
    Url,
    blocking::{Client, RequestBuilder, Response},
};
use tracing::debug;

use crate::{
    api::{Alias, ContainerRecord, EnvUpdateRequest, error::ApiError},
    cli::{ClientError, ClientResult},
    config::{Credentials, Server},
};

/// The two calls the client makes to the config service.
pub trait ConfigService {
    /// `GET /config`
    fn list_containers(&self) -> ClientResult<Vec<ContainerRecord>>;

    /// `PUT /config/{alias}/`
    fn update_env(&self, alias: &Alias, env: &[String]) -> ClientResult<()>;
}

/// HTTP implementation of [`ConfigService`].
#[derive(Debug, Clone)]
pub struct ConfigClient {
    client: Client,
    base: Url,
    auth: Option<Credentials>,
}

impl ConfigClient {
    pub fn new(server: &Server) -> ClientResult<Self> {
        let base =
            Url::parse(&server.url).map_err(|_| ClientError::InvalidUrl(server.url.clone()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(server.url.clone()));
        }
        let client = Client::builder().timeout(server.timeout).build()?;
        Ok(Self {
            client,
            base,
            auth: server.auth.clone(),
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(Credentials { username, password }) => {
                request.basic_auth(username, password.as_ref())
            }
            None => request,
        }
    }

    fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
                error: ApiError::from_status(status),
            });
        }
        Ok(response)
    }
}

impl ConfigService for ConfigClient {
    fn list_containers(&self) -> ClientResult<Vec<ContainerRecord>> {
        let url = self.endpoint(&["config"])?;
        debug!(%url, "GET");
        let response = Self::check(self.authorize(self.client.get(url)).send()?)?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn update_env(&self, alias: &Alias, env: &[String]) -> ClientResult<()> {
        // trailing empty segment keeps the service's `/config/{alias}/` form
        let url = self.endpoint(&["config", alias.as_str(), ""])?;
        debug!(%url, entries = env.len(), "PUT");
        let body = EnvUpdateRequest { env: env.to_vec() };
        Self::check(self.authorize(self.client.put(url)).json(&body).send()?)?;
        Ok(())
    }
}
