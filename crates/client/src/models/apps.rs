//! App models for the `/services/apps/local` listing.

use serde::Deserialize;

/// Splunk app information.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct App {
    /// App directory name (the namespace used in `/servicesNS/<owner>/<app>`).
    #[serde(default)]
    pub name: String,
    pub label: Option<String>,
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_number"
    )]
    pub disabled: bool,
}

/// App entry wrapper.
#[derive(Debug, Deserialize, Clone)]
pub struct AppEntry {
    pub name: String,
    pub content: App,
}

/// App list response.
#[derive(Debug, Deserialize, Clone)]
pub struct AppListResponse {
    #[serde(default)]
    pub entry: Vec<AppEntry>,
}

impl AppListResponse {
    /// Flatten entries into apps, taking the name from the entry when content omits it.
    pub fn into_apps(self) -> Vec<App> {
        self.entry
            .into_iter()
            .map(|entry| {
                let mut app = entry.content;
                if app.name.is_empty() {
                    app.name = entry.name;
                }
                app
            })
            .collect()
    }
}
