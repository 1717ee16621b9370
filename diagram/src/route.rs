//! Path-to-page route table.
//!
//! Fixed paths match exactly (one trailing slash tolerated) and are tried
//! before the document wildcard. The wildcard takes the first path segment as
//! the document id and ignores anything after it; whether the document exists
//! is the editor page's problem.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Page-level component a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    SignUp,
    Editor,
    Error,
    YjsTest,
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/login`
    Login,
    /// `/signup`
    SignUp,
    /// `/app`, the editor without a document id.
    App,
    /// `/error`
    Error,
    /// `/yjstest`
    YjsTest,
    /// `/:doc_id`
    Document { doc_id: String },
}

impl Route {
    /// Page component this route renders.
    #[must_use]
    pub fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Login => Page::Login,
            Self::SignUp => Page::SignUp,
            Self::App | Self::Document { .. } => Page::Editor,
            Self::Error => Page::Error,
            Self::YjsTest => Page::YjsTest,
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Document { doc_id } => format!("/{doc_id}"),
            fixed => FIXED_ROUTES
                .iter()
                .find(|(_, route)| route == fixed)
                .map(|(path, _)| (*path).to_owned())
                .unwrap_or_default(),
        }
    }

    /// Document id carried by the wildcard route.
    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Document { doc_id } => Some(doc_id.as_str()),
            _ => None,
        }
    }
}

/// Exact-match routes in precedence order.
static FIXED_ROUTES: [(&str, Route); 6] = [
    ("/", Route::Home),
    ("/login", Route::Login),
    ("/signup", Route::SignUp),
    ("/app", Route::App),
    ("/error", Route::Error),
    ("/yjstest", Route::YjsTest),
];

/// Pattern of the trailing wildcard route.
pub const DOC_ID_PATTERN: &str = "/:doc_id";

/// Static route table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable;

impl RouteTable {
    /// Route patterns in the order they are tried. The `<Routes>` block in
    /// the client's `App` declares the same list.
    pub fn patterns() -> impl Iterator<Item = &'static str> {
        FIXED_ROUTES
            .iter()
            .map(|(path, _)| *path)
            .chain(std::iter::once(DOC_ID_PATTERN))
    }

    /// Resolve a request path. Returns `None` only for paths not starting with `/`.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Route> {
        let path = strip_query_and_fragment(path);
        if !path.starts_with('/') {
            return None;
        }

        let normalized = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        if let Some((_, route)) = FIXED_ROUTES.iter().find(|(fixed, _)| *fixed == normalized) {
            return Some(route.clone());
        }

        // Repeated slashes collapse, as the browser router does.
        match normalized.split('/').find(|segment| !segment.is_empty()) {
            Some(doc_id) => Some(Route::Document {
                doc_id: doc_id.to_owned(),
            }),
            None => Some(Route::Home),
        }
    }

    /// Resolve straight to the page component.
    #[must_use]
    pub fn page_for(path: &str) -> Option<Page> {
        Self::resolve(path).map(|route| route.page())
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
