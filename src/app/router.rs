use crate::http::request::Method;

/// What a route entry matches against the route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    Exact(String),
    Any,
}

impl RoutePattern {
    fn matches(&self, route: &str) -> bool {
        match self {
            RoutePattern::Exact(path) => path == route,
            RoutePattern::Any => true,
        }
    }
}

/// The action a matched request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Login form, or a redirect when a session cookie is present
    LoginPage,
    /// Credential check and session issuance
    Login,
    /// Account creation
    Register,
    /// Resource named by the route path
    StaticResource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub pattern: RoutePattern,
    pub handler: Handler,
}

/// Outcome of looking a request up in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(Handler),
    /// The method is routed, but not for this path
    NotFound,
    /// No route uses the method at all
    MethodNotAllowed,
}

/// Ordered `(method, pattern) -> handler` table; first match wins.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The login/register routes plus static files for every other GET.
    pub fn standard() -> Self {
        Self::new()
            .route(Method::GET, RoutePattern::Exact("/login".into()), Handler::LoginPage)
            .route(Method::GET, RoutePattern::Any, Handler::StaticResource)
            .route(Method::POST, RoutePattern::Exact("/login".into()), Handler::Login)
            .route(Method::POST, RoutePattern::Exact("/register".into()), Handler::Register)
    }

    pub fn route(mut self, method: Method, pattern: RoutePattern, handler: Handler) -> Self {
        self.routes.push(Route {
            method,
            pattern,
            handler,
        });
        self
    }

    pub fn resolve(&self, method: Method, route: &str) -> Resolution {
        let mut method_seen = false;

        for entry in self.routes.iter().filter(|r| r.method == method) {
            method_seen = true;
            if entry.pattern.matches(route) {
                return Resolution::Matched(entry.handler);
            }
        }

        if method_seen {
            Resolution::NotFound
        } else {
            Resolution::MethodNotAllowed
        }
    }
}
