use std::collections::HashMap;
use std::sync::Arc;

use formguard_core::{PathResolver, RouteError};

/// A fixed table of route names and their paths, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticPathResolver {
    routes: Arc<HashMap<String, String>>,
}

impl StaticPathResolver {
    pub fn new<I, N, P>(routes: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(name, path)| (name.into(), path.into()))
                    .collect(),
            ),
        }
    }
}

impl PathResolver for StaticPathResolver {
    fn generate(&self, route_name: &str) -> Result<String, RouteError> {
        self.routes
            .get(route_name)
            .cloned()
            .ok_or_else(|| RouteError::UnknownRoute(route_name.to_string()))
    }
}
