//! Query identity

use std::collections::BTreeMap;
use std::fmt;

use shared::{Period, SplitBy};

use crate::endpoint::{Endpoint, PARAM_PERIOD, PARAM_SPLIT_BY};
use crate::http::Params;

/// (endpoint, parameters) pair scoping one fetch lifecycle
///
/// Two keys are equal exactly when they would issue the same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    endpoint: Endpoint,
    params: BTreeMap<String, String>,
}

impl QueryKey {
    pub fn for_endpoint(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter; parameters outside the endpoint's contract are dropped
    pub fn param(mut self, name: &str, value: impl fmt::Display) -> Self {
        if !self.endpoint.accepts(name) {
            tracing::warn!(endpoint = %self.endpoint, param = name, "Dropping unsupported query parameter");
            return self;
        }
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn period(self, period: Period) -> Self {
        self.param(PARAM_PERIOD, period)
    }

    pub fn split_by(self, split: SplitBy) -> Self {
        self.param(PARAM_SPLIT_BY, split)
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint.path())?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{k}={v}")?;
        }
        Ok(())
    }
}
