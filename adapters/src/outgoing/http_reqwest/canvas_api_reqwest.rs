use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header::CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use domain::{
    canvas::Canvas,
    color::RgbColor,
    coords::{CanvasSize, PixelCoord},
    quota::RateQuota,
};
use pixels_desk_application::{
    error::{AppError, AppResult},
    infrastructure_config::ApiConfig,
    ports::outgoing::canvas_api::CanvasApiPort,
};

use super::headers::{parse_cooldown, parse_quota};

const GET_SIZE_PATH: &str = "get_size";
const GET_PIXELS_PATH: &str = "get_pixels";
const SET_PIXEL_PATH: &str = "set_pixel";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct SizeResponse {
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
struct SetPixelRequest {
    x: u32,
    y: u32,
    rgb: String,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// `CanvasApiPort` implementation over the Pixels REST endpoints.
pub struct ReqwestCanvasApiAdapter {
    http: Client,
    base_url: Url,
    token: SecretString,
}

impl ReqwestCanvasApiAdapter {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| AppError::ConfigError {
            message: format!("Invalid API base URL '{}': {e}", config.base_url),
        })?;

        let http = Client::builder()
            .user_agent(concat!("pixels-desk/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(http_error)?;

        Ok(Self {
            http,
            base_url,
            token: SecretString::from(config.token().to_string()),
        })
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        // the service lives at the URL root, so a plain join is enough
        self.base_url.join(path).map_err(|e| AppError::ConfigError {
            message: format!("Cannot build endpoint URL for '{path}': {e}"),
        })
    }

    async fn probe_quota(&self, path: &str) -> AppResult<RateQuota> {
        let response = self
            .http
            .head(self.endpoint(path)?)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(http_error)?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(rate_limited(&response));
        }

        parse_quota(response.headers()).ok_or_else(|| AppError::ApiError {
            message: format!("HEAD {path} response carried no rate-limit headers"),
        })
    }
}

fn http_error(e: reqwest::Error) -> AppError {
    AppError::ApiError {
        message: e.to_string(),
    }
}

fn rate_limited(response: &Response) -> AppError {
    let retry_after = parse_cooldown(response.headers())
        .or_else(|| parse_quota(response.headers()).map(|q| q.reset))
        .unwrap_or_else(|| Duration::from_secs(1));
    AppError::RateLimited {
        retry_after_secs: retry_after.as_secs().max(1),
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

#[async_trait::async_trait]
impl CanvasApiPort for ReqwestCanvasApiAdapter {
    async fn canvas_size(&self) -> AppResult<CanvasSize> {
        let size: SizeResponse = self
            .http
            .get(self.endpoint(GET_SIZE_PATH)?)
            .send()
            .await
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?
            .json()
            .await
            .map_err(http_error)?;

        let size = CanvasSize::new(size.width, size.height);
        size.validate()?;
        debug!("Canvas size reported as {size}");
        Ok(size)
    }

    async fn fetch_canvas(&self, size: CanvasSize) -> AppResult<Canvas> {
        let response = self
            .http
            .get(self.endpoint(GET_PIXELS_PATH)?)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(http_error)?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(rate_limited(&response));
        }

        // The endpoint swaps its binary body for a JSON notice while the
        // canvas is undergoing maintenance.
        if is_json(&response) {
            let notice: ApiMessage = response.json().await.map_err(http_error)?;
            if notice.message == "Endpoint unavailable" {
                return Err(AppError::ServiceUnavailable);
            }
            return Err(AppError::ApiError {
                message: notice.message,
            });
        }

        if let Some(quota) = parse_quota(response.headers()) {
            info!("Canvas fetch: {quota}");
        }

        let response = response.error_for_status().map_err(http_error)?;
        let body = response.bytes().await.map_err(http_error)?;
        Ok(Canvas::from_raw_rgb(size, body.to_vec())?)
    }

    async fn set_pixel(&self, coord: PixelCoord, color: RgbColor) -> AppResult<()> {
        let payload = SetPixelRequest {
            x: coord.x,
            y: coord.y,
            rgb: color.to_hex(),
        };

        let response = self
            .http
            .post(self.endpoint(SET_PIXEL_PATH)?)
            .bearer_auth(self.token.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(http_error)?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(rate_limited(&response));
        }

        if !response.status().is_success() {
            return Err(AppError::ApiError {
                message: format!("set_pixel for {coord} failed with {}", response.status()),
            });
        }

        if let Some(quota) = parse_quota(response.headers()) {
            info!("Pixel write: {quota}");
        }
        Ok(())
    }

    async fn read_quota(&self) -> AppResult<RateQuota> {
        self.probe_quota(GET_PIXELS_PATH).await
    }

    async fn write_quota(&self) -> AppResult<RateQuota> {
        self.probe_quota(SET_PIXEL_PATH).await
    }
}
