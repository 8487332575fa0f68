// Decoding service reached over HTTP.
//
// Protocol: `POST {base}/decode_moves` and `POST {base}/get_fen` with a JSON string as the body;
// the response body is the envelope. `GET {base}/` must succeed for the service to be
// considered initialized.

use anyhow::Context;
use async_trait::async_trait;
use url::Url;

use chess_replay::DecodingService;


pub struct HttpDecodingService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpDecodingService {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut base_url =
            Url::parse(base_url).context(format!("Invalid decoder URL '{base_url}'."))?;
        // Without the trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(HttpDecodingService { client: reqwest::Client::new(), base_url })
    }

    pub fn endpoint(&self, name: &str) -> Result<Url, String> {
        self.base_url.join(name).map_err(|err| err.to_string())
    }

    async fn call(&self, name: &str, argument: &str) -> Result<String, String> {
        let url = self.endpoint(name)?;
        log::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(&argument)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| format!("{name} request failed: {err}"))?;
        response.text().await.map_err(|err| format!("{name} response unreadable: {err}"))
    }
}

#[async_trait(?Send)]
impl DecodingService for HttpDecodingService {
    async fn initialize(&self) -> Result<(), String> {
        log::info!("Connecting to decoding service at {}", self.base_url);
        self.client
            .get(self.base_url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map(|_| ())
            .map_err(|err| format!("cannot reach {}: {err}", self.base_url))
    }

    async fn decode_moves(&self, compressed: &str) -> Result<String, String> {
        self.call("decode_moves", compressed).await
    }

    async fn get_fen(&self, game_config: &str) -> Result<String, String> {
        self.call("get_fen", game_config).await
    }
}
