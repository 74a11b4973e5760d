//! PokeAPI artwork source.
//!
//! Looks up `GET {base}/pokemon/{id}/` and uses `sprites.front_default` as
//! the card image. Identities are Pokédex numbers.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::provider::{ArtworkError, ArtworkHandle, ArtworkProvider};
use crate::cards::CardIdentity;

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Fetches sprite URLs from PokeAPI.
#[derive(Clone, Debug)]
pub struct PokeApiProvider {
    client: Client,
    base_url: String,
}

impl PokeApiProvider {
    /// Provider against the public PokeAPI.
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, POKEAPI_BASE_URL)
    }

    /// Provider against a mirror or test server.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn pokemon_url(&self, identity: CardIdentity) -> String {
        format!("{}/pokemon/{}/", self.base_url, identity.raw())
    }
}

/// Pull `sprites.front_default` out of a `/pokemon/{id}/` response.
pub fn front_sprite(body: &Value) -> Result<ArtworkHandle, ArtworkError> {
    body.pointer("/sprites/front_default")
        .and_then(Value::as_str)
        .map(ArtworkHandle::new)
        .ok_or(ArtworkError::Missing)
}

#[async_trait]
impl ArtworkProvider for PokeApiProvider {
    async fn resolve(&self, identity: CardIdentity) -> Result<ArtworkHandle, ArtworkError> {
        let url = self.pokemon_url(identity);
        debug!(%identity, %url, "fetching artwork");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ArtworkError::Request(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ArtworkError::Request(e.to_string()))?;

        front_sprite(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, returning its base URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_front_sprite_present() {
        let body = json!({
            "id": 25,
            "sprites": { "front_default": "https://example.test/25.png", "back_default": null }
        });

        assert_eq!(
            front_sprite(&body).unwrap(),
            ArtworkHandle::new("https://example.test/25.png")
        );
    }

    #[test]
    fn test_front_sprite_null_or_absent() {
        let null_sprite = json!({ "sprites": { "front_default": null } });
        assert_eq!(front_sprite(&null_sprite), Err(ArtworkError::Missing));

        let no_sprites = json!({ "id": 1 });
        assert_eq!(front_sprite(&no_sprites), Err(ArtworkError::Missing));
    }

    #[test]
    fn test_pokemon_url_trims_trailing_slash() {
        let provider = PokeApiProvider::with_base_url(Client::new(), "http://localhost:8080/api/");
        assert_eq!(
            provider.pokemon_url(CardIdentity::new(151)),
            "http://localhost:8080/api/pokemon/151/"
        );
    }

    #[tokio::test]
    async fn test_resolve_reads_front_sprite() {
        let base = serve_once("200 OK", r#"{"sprites":{"front_default":"https://example.test/7.png"}}"#).await;
        let provider = PokeApiProvider::with_base_url(Client::new(), base);

        let handle = provider.resolve(CardIdentity::new(7)).await.unwrap();
        assert_eq!(handle.as_str(), "https://example.test/7.png");
    }

    #[tokio::test]
    async fn test_resolve_http_error_is_request_error() {
        let base = serve_once("404 Not Found", "{}").await;
        let provider = PokeApiProvider::with_base_url(Client::new(), base);

        let err = provider.resolve(CardIdentity::new(9999)).await.unwrap_err();
        assert!(matches!(err, ArtworkError::Request(_)));
    }

    #[tokio::test]
    async fn test_resolve_null_sprite_is_missing() {
        let base = serve_once("200 OK", r#"{"sprites":{"front_default":null}}"#).await;
        let provider = PokeApiProvider::with_base_url(Client::new(), base);

        assert_eq!(provider.resolve(CardIdentity::new(1)).await, Err(ArtworkError::Missing));
    }

    #[tokio::test]
    async fn test_resolve_unreachable_host_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let provider = PokeApiProvider::with_base_url(Client::new(), format!("http://{addr}"));

        let err = provider.resolve(CardIdentity::new(1)).await.unwrap_err();
        assert!(matches!(err, ArtworkError::Request(_)));
    }
}
