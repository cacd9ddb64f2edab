//! Path-based routing between the dashboard and per-link analytics.

/// A screen of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/stats/{short_code}`
    Analytics { short_code: String },
}

impl Route {
    /// Resolves a request path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Dashboard);
        }

        let code = trimmed.strip_prefix("/stats/")?;
        if code.is_empty() || code.contains('/') {
            return None;
        }

        let short_code = urlencoding::decode(code).ok()?.into_owned();
        Some(Self::Analytics { short_code })
    }

    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Analytics { short_code } => {
                format!("/stats/{}", urlencoding::encode(short_code))
            }
        }
    }
}

/// Where a view asks the front end to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Open the path in a new browsing context, keeping the current one.
    NewContext(String),
}

impl Navigation {
    pub fn path(&self) -> &str {
        match self {
            Self::NewContext(path) => path,
        }
    }

    /// Absolute URL of the target relative to `origin`.
    pub fn url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}
