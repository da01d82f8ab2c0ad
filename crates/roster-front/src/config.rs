use serde::{Deserialize, Serialize};

pub const HOST_META: &str = "roster-api-host";
pub const COHORT_META: &str = "roster-cohort";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_cohort")]
    pub cohort: String,
}

fn default_host() -> String {
    "fsa-puppy-bowl.herokuapp.com".to_string()
}

fn default_cohort() -> String {
    "2302-acc-pt-web-pt-d".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            cohort: default_cohort(),
        }
    }
}

impl ApiConfig {
    /// Defaults, overridden by `<meta name="roster-api-host">` and
    /// `<meta name="roster-cohort">` when the page provides them.
    pub fn load() -> Self {
        Self::default().merge(read_meta(HOST_META), read_meta(COHORT_META))
    }

    pub fn merge(mut self, host: Option<String>, cohort: Option<String>) -> Self {
        if let Some(host) = non_empty(host) {
            self.host = host;
        }
        if let Some(cohort) = non_empty(cohort) {
            self.cohort = cohort;
        }
        self
    }

    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let host = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };
        format!("{}/api/{}/", host, self.cohort.trim_matches('/'))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_meta(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??
        .get_attribute("content")
}
