//! core::placeholder
//!
//! The sentinel configuration a placeholder build embeds.
//!
//! # Overview
//!
//! A placeholder build is compiled without knowledge of its final deployment
//! parameters; the build pipeline bakes one fixed, recognizable configuration
//! into the bundles instead. Depending on the toolchain generation, the
//! bundles carry it either as compact JSON or as a minified object-literal
//! expression. Recognizing either textual form of the sentinel is how
//! artifact files are identified for patching.
//!
//! # Design
//!
//! The sentinel is an explicitly constructed, immutable [`ConfigForms`] value
//! passed into the orchestrator at startup - not a hidden singleton - so the
//! whole pipeline can be exercised with alternative sentinels in tests and
//! via the `placeholder_path` setting.

use serde_json::Value;

use crate::core::dialect::{serialize, Dialect};

/// The sentinel configuration, byte-for-byte as the placeholder build
/// pipeline embeds it (compact JSON, document key order). Any change here
/// must be mirrored in the build pipeline or existing placeholder builds
/// stop being recognized.
const SENTINEL_JSON: &str = "{\"baseUrl\":\"https://whimsical-sopapillas-78abba.netlify.app\",\"pageId\":\"demo\",\"pageIds\":[\"demo\"],\"pages\":[{\"id\":\"demo\",\"siteMeta\":{\"title\":\"Uptime Kuma\",\"description\":\"A beautiful and modern uptime monitoring dashboard\",\"icon\":\"https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f914.svg\",\"iconCandidates\":[\"https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f914.svg\",\"/icon.svg\"]}}],\"siteMeta\":{\"title\":\"Uptime Kuma\",\"description\":\"A beautiful and modern uptime monitoring dashboard\",\"icon\":\"https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f914.svg\",\"iconCandidates\":[\"https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f914.svg\",\"/icon.svg\"]},\"isPlaceholder\":false,\"isEditThisPage\":false,\"isShowStarButton\":true}";

/// Both textual forms of one configuration value.
///
/// The two strings are derived from the same value through
/// [`crate::core::dialect::serialize`] and are used as exact search/replace
/// keys; they are never re-parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigForms {
    /// Compact JSON form.
    pub json: String,
    /// Minified object-literal form.
    pub js_literal: String,
}

impl ConfigForms {
    /// Derive both serialized forms of `value`.
    pub fn derive(value: &Value) -> Self {
        Self {
            json: serialize(value, Dialect::Json),
            js_literal: serialize(value, Dialect::JsLiteral),
        }
    }

    /// The two forms as search patterns, object-literal form first to
    /// mirror the rewriter's precedence.
    pub fn patterns(&self) -> [&str; 2] {
        [&self.js_literal, &self.json]
    }
}

/// The built-in sentinel in both serialized forms.
pub fn builtin() -> ConfigForms {
    let value: Value =
        serde_json::from_str(SENTINEL_JSON).expect("the sentinel constant is valid JSON");
    ConfigForms::derive(&value)
}
