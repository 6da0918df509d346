use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::error::{Error, Result};

pub mod device;
pub use device::Device;

pub mod appliance;
pub use appliance::{Appliance, TvButton};

pub const API_BASE: &str = "https://api.nature.global/1/";

/// Resources this client talks to, relative to the API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Devices,
    Appliances,
    Tv(String),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Devices => String::from("devices"),
            Endpoint::Appliances => String::from("appliances"),
            Endpoint::Tv(appliance) => format!("appliances/{}/tv", appliance),
        }
    }
}

/// Status and fully read body of one response.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Fetch {
    async fn fetch(
        &self,
        method: Method,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
    ) -> Result<Reply>;
}

#[derive(Debug, Clone)]
pub struct NatureRemoAPI {
    client: reqwest::Client,
    api_base: Url,
}

impl NatureRemoAPI {
    pub fn new(access_token: &str) -> Result<Self> {
        Self::with_api_base(access_token, API_BASE)
    }

    pub fn with_api_base(access_token: &str, api_base: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        Ok(NatureRemoAPI {
            client: reqwest::ClientBuilder::new()
                .default_headers(headers)
                .build()
                .map_err(|e| Error::RequestConstruction(e.to_string()))?,
            api_base: Url::parse(api_base)?,
        })
    }

    pub fn url(&self, endpoint: &Endpoint) -> Result<Url> {
        Ok(self.api_base.join(&endpoint.path())?)
    }
}

#[async_trait]
impl Fetch for NatureRemoAPI {
    async fn fetch(
        &self,
        method: Method,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
    ) -> Result<Reply> {
        let url = self.url(endpoint)?;
        debug!("{} {} {:?}", method, url, query);

        let response = self
            .client
            .request(method, url)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        info!("{} answered {} ({} bytes)", endpoint.path(), status, body.len());

        Ok(Reply { status, body })
    }
}

pub fn decode_devices(body: &[u8]) -> Result<Vec<Device>> {
    Ok(serde_json::from_slice(body)?)
}

pub fn decode_appliances(body: &[u8]) -> Result<Vec<Appliance>> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn get_devices<F: Fetch + ?Sized>(api: &F) -> Result<Vec<Device>> {
    let reply = api.fetch(Method::GET, &Endpoint::Devices, &[]).await?;
    if !reply.status.is_success() {
        warn!("devices answered {}", reply.status);
    }

    let devices = decode_devices(&reply.body)?;
    info!("decoded {} device(s)", devices.len());

    Ok(devices)
}

pub async fn get_appliances<F: Fetch + ?Sized>(api: &F) -> Result<Vec<Appliance>> {
    let reply = api.fetch(Method::GET, &Endpoint::Appliances, &[]).await?;
    if !reply.status.is_success() {
        warn!("appliances answered {}", reply.status);
    }

    let appliances = decode_appliances(&reply.body)?;
    info!("decoded {} appliance(s)", appliances.len());

    Ok(appliances)
}

/// Presses `button` on the TV behind `appliance`. The body of the reply is ignored.
pub async fn press_tv_button<F: Fetch + ?Sized>(
    api: &F,
    appliance: &str,
    button: TvButton,
) -> Result<StatusCode> {
    let reply = api
        .fetch(
            Method::POST,
            &Endpoint::Tv(appliance.to_owned()),
            &[("button", button.as_str())],
        )
        .await?;

    Ok(reply.status)
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers `count` connections with an empty JSON array and hands back each request head.
    async fn serve_heads(listener: TcpListener, count: usize) -> Vec<String> {
        let mut heads = Vec::new();

        for _ in 0..count {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut head: Vec<u8> = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.unwrap();
                assert!(read > 0, "connection closed before the request head ended");
                head.extend_from_slice(&chunk[..read]);
            }

            socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();

            heads.push(String::from_utf8(head).unwrap());
        }

        heads
    }

    fn has_header(head: &str, name: &str, value: &str) -> bool {
        head.lines().any(|line| match line.split_once(':') {
            Some((key, val)) => key.eq_ignore_ascii_case(name) && val.trim() == value,
            None => false,
        })
    }

    #[tokio::test]
    async fn test_requests_carry_bearer_and_query() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        let server = tokio::spawn(serve_heads(listener, 2));

        let api = NatureRemoAPI::with_api_base("tok", &base).unwrap();

        let devices = get_devices(&api).await.unwrap();
        assert!(devices.is_empty());

        let status = press_tv_button(&api, "a1", TvButton::VolUp).await.unwrap();
        assert_eq!(status, StatusCode::OK);

        let heads = server.await.unwrap();
        assert_eq!(heads.len(), 2);

        assert!(heads[0].starts_with("GET /devices HTTP/1.1\r\n"), "{}", heads[0]);
        assert!(
            heads[1].starts_with("POST /appliances/a1/tv?button=vol-up HTTP/1.1\r\n"),
            "{}",
            heads[1]
        );
        for head in &heads {
            assert!(has_header(head, "authorization", "Bearer tok"), "{}", head);
        }
    }

    #[test]
    fn test_endpoint_urls() {
        let api = NatureRemoAPI::new("token").unwrap();

        assert_eq!(
            api.url(&Endpoint::Devices).unwrap().as_str(),
            "https://api.nature.global/1/devices"
        );
        assert_eq!(
            api.url(&Endpoint::Appliances).unwrap().as_str(),
            "https://api.nature.global/1/appliances"
        );
        assert_eq!(
            api.url(&Endpoint::Tv("a1".to_owned())).unwrap().as_str(),
            "https://api.nature.global/1/appliances/a1/tv"
        );
    }

    #[test]
    fn test_empty_appliance_id_keeps_empty_segment() {
        let api = NatureRemoAPI::new("token").unwrap();

        assert_eq!(
            api.url(&Endpoint::Tv(String::new())).unwrap().as_str(),
            "https://api.nature.global/1/appliances//tv"
        );
    }

    #[test]
    fn test_bad_api_base() {
        let err = NatureRemoAPI::with_api_base("token", "not a url").unwrap_err();
        assert!(matches!(err, Error::RequestConstruction(_)));
    }

    #[test]
    fn test_bad_token() {
        let err = NatureRemoAPI::new("line\nbreak").unwrap_err();
        assert!(matches!(err, Error::RequestConstruction(_)));
    }

    #[test]
    fn test_decode_scenario_devices() {
        let body = br#"[{"id":"d1","newest_events":{"te":{"val":21.5,"created_at":"2023-01-01T00:00:00Z"},"hu":{"val":40.0,"created_at":"..."},"il":{"val":0,"created_at":"..."},"mo":{"val":0,"created_at":"..."}}}]"#;
        let devices = decode_devices(body).unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].core.id, "d1");
        assert_eq!(devices[0].newest_events.temperature.val, 21.5);
        assert_eq!(devices[0].newest_events.humidity.val, 40.0);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_devices(b"[]").unwrap().is_empty());
        assert!(decode_appliances(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_devices(br#"{"code":401001,"message":"Unauthorized"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = decode_appliances(b"not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
