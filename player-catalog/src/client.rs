use crate::config::CatalogConfig;
use crate::fallback::fallback_all_stars;
use crate::player::{Player, PlayerEnvelope, PlayerId, PlayerPage};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("http error, status: {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Transport {
        #[from]
        cause: reqwest::Error,
    },

    #[error("malformed response body: {cause}")]
    Decode {
        #[source]
        cause: serde_json::Error,
    },

    #[error("invalid base url {0}")]
    InvalidBaseUrl(String),
}

/// Client for the players API.
///
/// Every request is a single attempt: failures are logged and handed back to
/// the caller, nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct PlayerCatalog {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PlayerCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self, NetworkError> {
        let CatalogConfig {
            base_url,
            api_key,
            timeout_secs: _,
        } = &config;
        Url::parse(base_url).map_err(|_| NetworkError::InvalidBaseUrl(base_url.clone()))?;
        // the blocking client applies a 30s timeout unless told otherwise
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.clone(),
        })
    }

    /// Attach `key` as the `Authorization` header of every subsequent request.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn players(&self, per_page: u32) -> Result<PlayerPage, NetworkError> {
        let request = self.get("/players").query(&[("per_page", per_page)]);
        self.send(request, "fetching players")
    }

    pub fn player(&self, id: PlayerId) -> Result<Player, NetworkError> {
        let request = self.get(&format!("/players/{}", id));
        self.send::<PlayerEnvelope>(request, "fetching player")
            .map(|envelope| envelope.data)
    }

    pub fn search_players(&self, query: &str, per_page: u32) -> Result<PlayerPage, NetworkError> {
        let request = self
            .get("/players")
            .query(&[("search", query)])
            .query(&[("per_page", per_page)]);
        self.send(request, "searching players")
    }

    /// The hardcoded roster, see [`fallback_all_stars`]. Performs no I/O.
    pub fn fallback_all_stars(&self) -> Vec<Player> {
        fallback_all_stars()
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        match &self.api_key {
            Some(key) => request.header(AUTHORIZATION, key.as_str()),
            None => request,
        }
    }

    fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, NetworkError> {
        let result = request
            .send()
            .map_err(NetworkError::from)
            .and_then(|response| {
                debug!(url = %response.url(), status = %response.status(), "{}", context);
                let status = response.status();
                if !status.is_success() {
                    return Err(NetworkError::Status {
                        status: status.as_u16(),
                    });
                }
                let body = response.bytes()?;
                serde_json::from_slice(&body).map_err(|cause| NetworkError::Decode { cause })
            });
        if let Err(e) = &result {
            error!(error = %e, "error {}", context);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::thread;
    use std::time::{Duration, Instant};

    /// Serves exactly one canned response and reports the request head it received.
    fn serve_once(status_line: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        serve_after(Duration::ZERO, status_line, body)
    }

    /// Like `serve_once`, holding the response back for `delay`.
    fn serve_after(
        delay: Duration,
        status_line: &str,
        body: &str,
    ) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let head = read_head(&stream);
            thread::sleep(delay);
            // the client may have given up already
            let _ = (&stream).write_all(response.as_bytes());
            let _ = tx.send(head);
        });
        (base_url, rx)
    }

    fn read_head(stream: &TcpStream) -> String {
        let mut reader = BufReader::new(stream);
        let mut head = String::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            head.push_str(&line);
        }
        head
    }

    fn catalog(base_url: String) -> PlayerCatalog {
        PlayerCatalog::new(CatalogConfig {
            base_url,
            ..CatalogConfig::default()
        })
        .unwrap()
    }

    const CURRY: &str = r#"{
        "id": 115, "first_name": "Stephen", "last_name": "Curry",
        "position": "G", "height": "6-2", "weight": "185", "jersey_number": "30",
        "college": "Davidson",
        "team": { "id": 10, "city": "Golden State", "name": "Warriors",
                  "abbreviation": "GSW", "full_name": "Golden State Warriors" }
    }"#;

    #[test]
    fn server_error_is_reported_as_status() {
        let (base_url, _rx) = serve_once("500 Internal Server Error", "");
        let err = catalog(base_url).players(25).unwrap_err();
        assert!(matches!(err, NetworkError::Status { status: 500 }));
    }

    #[test]
    fn search_server_error_is_reported_as_status() {
        let (base_url, _rx) = serve_once("500 Internal Server Error", "");
        let err = catalog(base_url).search_players("curry", 25).unwrap_err();
        assert!(matches!(err, NetworkError::Status { status: 500 }));
    }

    #[test]
    fn search_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        drop(listener);
        let err = catalog(base_url).search_players("curry", 25).unwrap_err();
        assert!(matches!(err, NetworkError::Transport { .. }));
    }

    #[test]
    fn configured_timeout_is_transport_error() {
        let body = r#"{ "data": [], "meta": { "per_page": 25 } }"#;
        let (base_url, _rx) = serve_after(Duration::from_secs(5), "200 OK", body);
        let catalog = PlayerCatalog::new(CatalogConfig {
            base_url,
            timeout_secs: Some(1),
            ..CatalogConfig::default()
        })
        .unwrap();

        let started = Instant::now();
        let err = catalog.players(25).unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(5));
        match err {
            NetworkError::Transport { cause } => assert!(cause.is_timeout()),
            other => panic!("expected a transport error, got {:?}", other),
        }
    }

    #[test]
    #[ignore = "waits longer than reqwest's default 30s timeout"]
    fn no_timeout_by_default() {
        let body = r#"{ "data": [], "meta": { "per_page": 25 } }"#;
        let (base_url, _rx) = serve_after(Duration::from_secs(33), "200 OK", body);
        let page = catalog(base_url).players(25).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn unauthorized_single_player() {
        let (base_url, _rx) = serve_once("401 Unauthorized", "{}");
        let err = catalog(base_url).player(115).unwrap_err();
        assert!(matches!(err, NetworkError::Status { status: 401 }));
    }

    #[test]
    fn connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        drop(listener);
        let err = catalog(base_url).players(25).unwrap_err();
        assert!(matches!(err, NetworkError::Transport { .. }));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let (base_url, _rx) = serve_once("200 OK", "not json");
        let err = catalog(base_url).players(25).unwrap_err();
        assert!(matches!(err, NetworkError::Decode { .. }));
    }

    #[test]
    fn invalid_base_url() {
        let err = PlayerCatalog::new(CatalogConfig {
            base_url: "not a url".to_string(),
            ..CatalogConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidBaseUrl(_)));
    }

    #[test]
    fn list_players_without_key() {
        let body = format!(r#"{{ "data": [{}], "meta": {{ "per_page": 10 }} }}"#, CURRY);
        let (base_url, rx) = serve_once("200 OK", &body);
        let page = catalog(base_url).players(10).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].full_name(), "Stephen Curry");

        let head = rx.recv().unwrap().to_lowercase();
        assert!(head.starts_with("get /v1/players?per_page=10 http/1.1"));
        assert!(head.contains("content-type: application/json"));
        assert!(!head.contains("authorization"));
    }

    #[test]
    fn single_player_with_key() {
        let body = format!(r#"{{ "data": {} }}"#, CURRY);
        let (base_url, rx) = serve_once("200 OK", &body);
        let mut catalog = catalog(base_url);
        catalog.set_api_key("my-key");
        let player = catalog.player(115).unwrap();
        assert_eq!(player.id, 115);

        let head = rx.recv().unwrap();
        assert!(head.starts_with("GET /v1/players/115 HTTP/1.1"));
        assert!(head.to_lowercase().contains("authorization: my-key"));
    }

    #[test]
    fn search_query_is_encoded() {
        let body = r#"{ "data": [], "meta": { "per_page": 5 } }"#;
        let (base_url, rx) = serve_once("200 OK", body);
        let page = catalog(base_url).search_players("luka d&c", 5).unwrap();
        assert!(page.data.is_empty());

        let head = rx.recv().unwrap();
        let request_line = head.lines().next().unwrap();
        assert_eq!(
            request_line,
            "GET /v1/players?search=luka+d%26c&per_page=5 HTTP/1.1"
        );
    }

    #[test]
    fn fallback_needs_no_network() {
        let catalog = catalog("http://127.0.0.1:9/v1".to_string());
        assert_eq!(catalog.fallback_all_stars().len(), 5);
    }
}
