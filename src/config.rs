//! Endpoint Configuration
//!
//! Read once at startup from the host page, falling back to a compile-time
//! endpoint. Validation failures are kept and reported by every operation.

use reqwest::Url;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{AppError, Result};

/// Marker left in the page template until someone pastes a real URL
const PLACEHOLDER: &str = "YOUR_GOOGLE_APPS_SCRIPT_WEB_APP_URL";

const DEFAULT_REFRESH_INTERVAL_MS: u32 = 60_000;
const DEFAULT_RECONCILE_DELAY_MS: u32 = 1_500;
const DEFAULT_TOAST_MS: u32 = 3_000;

/// Config as supplied by the page (`window.TASKBOARD_CONFIG`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub endpoint: Option<String>,
    pub refresh_interval_ms: Option<u32>,
    pub reconcile_delay_ms: Option<u32>,
    pub toast_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: Url,
    /// Periodic re-fetch interval
    pub refresh_interval_ms: u32,
    /// Delay between a write and the reconciling fetch
    pub reconcile_delay_ms: u32,
    /// Notification lifetime
    pub toast_ms: u32,
}

impl Config {
    /// Load from the page, then validate
    pub fn load() -> Result<Self> {
        let raw = read_page_config()?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self> {
        let endpoint = raw
            .endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AppError::Config("no endpoint URL configured".to_string()))?;

        if endpoint.contains(PLACEHOLDER) {
            return Err(AppError::Config(
                "replace the placeholder endpoint URL with your web app /exec URL".to_string(),
            ));
        }

        let endpoint = Url::parse(&endpoint)
            .map_err(|e| AppError::Config(format!("invalid endpoint URL: {}", e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "unsupported endpoint scheme: {}",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            endpoint,
            refresh_interval_ms: non_zero(
                raw.refresh_interval_ms,
                DEFAULT_REFRESH_INTERVAL_MS,
                "refreshIntervalMs",
            )?,
            reconcile_delay_ms: non_zero(
                raw.reconcile_delay_ms,
                DEFAULT_RECONCILE_DELAY_MS,
                "reconcileDelayMs",
            )?,
            toast_ms: non_zero(raw.toast_ms, DEFAULT_TOAST_MS, "toastMs")?,
        })
    }
}

/// Toast lifetime when the config itself is broken
pub fn fallback_toast_ms() -> u32 {
    DEFAULT_TOAST_MS
}

fn non_zero(value: Option<u32>, default: u32, key: &str) -> Result<u32> {
    match value {
        None => Ok(default),
        Some(0) => Err(AppError::Config(format!("{} must be greater than 0", key))),
        Some(ms) => Ok(ms),
    }
}

/// `TASKBOARD_CONFIG` object, else `GAS_WEB_APP_URL` string, else the
/// `TASKBOARD_ENDPOINT` build variable.
fn read_page_config() -> Result<RawConfig> {
    if let Some(window) = web_sys::window() {
        let global: &JsValue = window.as_ref();

        let value = global_value(global, "TASKBOARD_CONFIG");
        if !value.is_undefined() && !value.is_null() {
            log::debug!("Using window.TASKBOARD_CONFIG");
            return serde_wasm_bindgen::from_value(value)
                .map_err(|e| AppError::Config(format!("TASKBOARD_CONFIG is malformed: {}", e)));
        }

        if let Some(url) = global_value(global, "GAS_WEB_APP_URL").as_string() {
            log::debug!("Using window.GAS_WEB_APP_URL");
            return Ok(RawConfig { endpoint: Some(url), ..Default::default() });
        }
    }

    log::debug!("Using build-time TASKBOARD_ENDPOINT");
    Ok(RawConfig {
        endpoint: option_env!("TASKBOARD_ENDPOINT").map(str::to_string),
        ..Default::default()
    })
}

fn global_value(global: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(global, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}
