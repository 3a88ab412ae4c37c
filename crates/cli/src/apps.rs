//! App enumeration with an ignore list.
//!
//! Apps are returned in the order the server lists them; nothing is sorted.

use std::collections::HashSet;

use splunk_client::{ClientError, SplunkClient};
use tracing::debug;

/// App names to skip, parsed from a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    names: HashSet<String>,
}

impl IgnoreList {
    /// Parse `a, b,,c` into `{a, b, c}`. Whitespace around names is trimmed
    /// and empty items are dropped.
    pub fn parse(raw: Option<&str>) -> Self {
        let names = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn contains(&self, app: &str) -> bool {
        self.names.contains(app)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Drop ignored names, keeping the input order.
pub fn filter_apps<I>(apps: I, ignore: &IgnoreList) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    apps.into_iter()
        .filter(|app| !ignore.contains(app))
        .collect()
}

/// List installed app names, excluding `ignore`.
pub async fn enumerate_apps(
    client: &mut SplunkClient,
    ignore: &IgnoreList,
) -> Result<Vec<String>, ClientError> {
    let apps = client.list_apps().await?;
    let total = apps.len();
    let kept = filter_apps(apps.into_iter().map(|app| app.name), ignore);
    debug!(total, kept = kept.len(), ignored = ignore.len(), "Enumerated apps");
    Ok(kept)
}
