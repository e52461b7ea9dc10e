use artistnet_core::{ArtistId, Catalog, CatalogError, CatalogRecord, CatalogTrack};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::time::{Duration, Instant};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_URL: &str = "https://api.spotify.com/v1";
const ARTIST_URI_PREFIX: &str = "spotify:artist:";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
// Refresh a little before Spotify expires the token
const TOKEN_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct RelatedArtistsResponse {
    artists: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TopTracksResponse {
    tracks: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct SpotifyTrack {
    name: String,
    artists: Vec<SpotifyArtistRef>,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtistRef {
    uri: String,
}

struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// Spotify Web API client authenticated with the client-credentials flow.
pub struct SpotifyClient {
    client: Client,
    client_id: String,
    client_secret: String,
    market: String,
    api_url: String,
    token: RefCell<Option<AccessToken>>,
}

impl SpotifyClient {
    /// Fails only when the TLS backend or system configuration cannot be
    /// initialised.
    pub fn new(client_id: String, client_secret: String, market: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            client_id,
            client_secret,
            market,
            api_url: API_URL.to_string(),
            token: RefCell::new(None),
        })
    }

    fn access_token(&self) -> Result<String, CatalogError> {
        if let Some(token) = self.token.borrow().as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let context = "requesting an access token";
        let response = self
            .client
            .post(TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .map_err(|e| transport_error(context, e))?;
        let token: TokenResponse = read_json(response, context)?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_MARGIN);
        *self.token.borrow_mut() = Some(AccessToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });
        tracing::debug!(expires_in = token.expires_in, "Obtained Spotify access token");

        Ok(token.access_token)
    }

    fn get<T: DeserializeOwned>(&self, url: &str, context: &str) -> Result<T, CatalogError> {
        let token = self.access_token()?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .map_err(|e| transport_error(context, e))?;
        read_json(response, context)
    }

    fn artist_url(&self, id: &ArtistId, suffix: &str) -> String {
        format!(
            "{}/artists/{}{}",
            self.api_url,
            urlencoding::encode(bare_id(id)),
            suffix
        )
    }
}

impl Catalog for SpotifyClient {
    fn artist(&self, id: &ArtistId) -> Result<CatalogRecord, CatalogError> {
        let context = format!("fetching artist {}", id);
        let body: serde_json::Value = self.get(&self.artist_url(id, ""), &context)?;
        parse_artist(body)
    }

    fn related_artists(&self, id: &ArtistId) -> Result<Vec<CatalogRecord>, CatalogError> {
        let context = format!("fetching artists related to {}", id);
        let response: RelatedArtistsResponse =
            self.get(&self.artist_url(id, "/related-artists"), &context)?;
        response.artists.into_iter().map(parse_artist).collect()
    }

    fn top_tracks(&self, id: &ArtistId) -> Result<Vec<CatalogTrack>, CatalogError> {
        let context = format!("fetching top tracks of {}", id);
        let suffix = format!("/top-tracks?market={}", urlencoding::encode(&self.market));
        let response: TopTracksResponse = self.get(&self.artist_url(id, &suffix), &context)?;
        Ok(convert_tracks(response))
    }
}

fn read_json<T: DeserializeOwned>(
    response: reqwest::blocking::Response,
    context: &str,
) -> Result<T, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            context: context.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(|e| transport_error(context, e))?;
    parse_body(&body, context)
}

fn parse_body<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::malformed(context, e.to_string()))
}

fn parse_artist(body: serde_json::Value) -> Result<CatalogRecord, CatalogError> {
    CatalogRecord::from_json(body, "uri")
}

fn convert_tracks(response: TopTracksResponse) -> Vec<CatalogTrack> {
    response
        .tracks
        .into_iter()
        .map(|track| CatalogTrack {
            name: track.name,
            artists: track
                .artists
                .into_iter()
                .map(|artist| ArtistId::new(artist.uri))
                .collect(),
        })
        .collect()
}

fn transport_error(context: &str, error: reqwest::Error) -> CatalogError {
    CatalogError::transport(context, error.to_string())
}

fn bare_id(id: &ArtistId) -> &str {
    id.as_str().strip_prefix(ARTIST_URI_PREFIX).unwrap_or(id.as_str())
}
