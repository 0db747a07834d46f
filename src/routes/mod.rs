//! Static route tables and the per-version registry built from them.
//!
//! A route is a canonical endpoint path plus the ordered contract of its
//! positional parameters. The tables in [`v1`] and [`v2`] are plain constant
//! data; each [`ApiVersion`] turns its table into a [`RouteRegistry`] exactly
//! once, on first use, and never mutates it afterwards.

mod v1;
mod v2;

use crate::constants;
use crate::error::Error;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

/// Value transform applied to a call argument before it is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Passed through unchanged.
    Identity,
    /// Lower-case, hyphen-separated title slug.
    SlugNormalize,
    /// Percent-escaped for use inside a single URL segment.
    PercentEncode,
}

/// Where a bound value ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    PathSegment,
    PostField,
}

/// Metadata for one positional call parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    /// Position of the call argument this descriptor consumes.
    pub slot_index: usize,
    /// Optional parameters accept boolean `true` as a flag token (their own name).
    pub optional: bool,
    pub conversion: Conversion,
    pub location: Location,
    /// Any descriptor with this set turns the whole route into a POST.
    pub force_post: bool,
}

impl ParameterDescriptor {
    const fn new(name: &'static str, conversion: Conversion, location: Location) -> Self {
        Self {
            name,
            slot_index: 0,
            optional: false,
            conversion,
            location,
            force_post: matches!(location, Location::PostField),
        }
    }

    /// Marks the descriptor optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Whether this descriptor is the reserved whole-body pass-through.
    #[must_use]
    pub fn is_bulk_body(&self) -> bool {
        self.force_post
            && self.location == Location::PostField
            && self.name == constants::BULK_BODY_FIELD
    }
}

/// Plain path segment.
pub(crate) const fn segment(name: &'static str) -> ParameterDescriptor {
    ParameterDescriptor::new(name, Conversion::Identity, Location::PathSegment)
}

/// Path segment normalized to a title slug.
pub(crate) const fn slug(name: &'static str) -> ParameterDescriptor {
    ParameterDescriptor::new(name, Conversion::SlugNormalize, Location::PathSegment)
}

/// Free-text path segment, percent-escaped.
pub(crate) const fn escaped(name: &'static str) -> ParameterDescriptor {
    ParameterDescriptor::new(name, Conversion::PercentEncode, Location::PathSegment)
}

/// Optional path segment that accepts `true` as a flag.
pub(crate) const fn flag(name: &'static str) -> ParameterDescriptor {
    segment(name).optional()
}

/// Named field of a POST body.
pub(crate) const fn field(name: &'static str) -> ParameterDescriptor {
    ParameterDescriptor::new(name, Conversion::Identity, Location::PostField)
}

/// Caller-supplied POST body, passed through verbatim.
pub(crate) const fn bulk() -> ParameterDescriptor {
    field(constants::BULK_BODY_FIELD)
}

/// One row of a static route table.
pub(crate) type RouteEntry = (&'static str, &'static [ParameterDescriptor]);

/// A canonical endpoint path and its ordered parameter contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    path: &'static str,
    parameters: Vec<ParameterDescriptor>,
}

impl RouteDescriptor {
    fn from_entry((path, parameters): RouteEntry) -> Self {
        Self {
            path,
            parameters: parameters
                .iter()
                .enumerate()
                .map(|(slot_index, descriptor)| ParameterDescriptor {
                    slot_index,
                    ..*descriptor
                })
                .collect(),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Parameters in documented call-signature order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// POST when any descriptor forces it, GET otherwise.
    #[must_use]
    pub fn http_method(&self) -> Method {
        if self.parameters.iter().any(|p| p.force_post) {
            Method::POST
        } else {
            Method::GET
        }
    }

    /// True for routes whose entire body is supplied by the caller.
    #[must_use]
    pub fn is_bulk_post(&self) -> bool {
        matches!(self.parameters.as_slice(), [only] if only.is_bulk_body())
    }

    fn validate(&self) -> Result<(), Error> {
        if !self.path.starts_with(constants::PATH_SEPARATOR) {
            return Err(Error::invalid_route(self.path, "path must start with '/'"));
        }

        let mut seen = HashSet::new();
        for descriptor in &self.parameters {
            if !seen.insert(descriptor.name) {
                return Err(Error::invalid_route(
                    self.path,
                    format!("duplicate parameter '{}'", descriptor.name),
                ));
            }
            if descriptor.force_post && descriptor.location == Location::PathSegment {
                return Err(Error::invalid_route(
                    self.path,
                    format!("path parameter '{}' cannot force POST", descriptor.name),
                ));
            }
        }

        if self.parameters.len() > 1 && self.parameters.iter().any(ParameterDescriptor::is_bulk_body) {
            return Err(Error::invalid_route(
                self.path,
                "bulk body parameter must be the only parameter",
            ));
        }

        Ok(())
    }
}

/// Immutable lookup table from canonical path to route.
#[derive(Debug)]
pub struct RouteRegistry {
    version: ApiVersion,
    routes: HashMap<&'static str, RouteDescriptor>,
}

impl RouteRegistry {
    /// Builds and validates a registry from a static table.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRoute`] for the first malformed or duplicated entry.
    pub(crate) fn from_table(version: ApiVersion, table: &[RouteEntry]) -> Result<Self, Error> {
        let mut routes = HashMap::with_capacity(table.len());
        for entry in table {
            let route = RouteDescriptor::from_entry(*entry);
            route.validate()?;
            if routes.insert(route.path, route).is_some() {
                return Err(Error::invalid_route(entry.0, "registered twice"));
            }
        }
        Ok(Self { version, routes })
    }

    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Exact-string lookup.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All registered paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.routes.keys().copied().collect();
        paths.sort_unstable();
        paths
    }
}

/// Which generation of the remote API a client talks to.
///
/// The version fixes the path suffix convention, the authentication style
/// and the set of available routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Key-in-path API with `.json` suffixed read routes and Basic credentials.
    V1,
    /// Header-authenticated API with session-token login.
    V2,
}

type RegistryCell = LazyLock<Result<RouteRegistry, (String, String)>>;

fn build(version: ApiVersion, table: &[RouteEntry]) -> Result<RouteRegistry, (String, String)> {
    RouteRegistry::from_table(version, table).map_err(|e| match e {
        Error::InvalidRoute { path, reason } => (path, reason),
        other => (String::new(), other.to_string()),
    })
}

static V1_REGISTRY: RegistryCell = LazyLock::new(|| build(ApiVersion::V1, v1::ROUTES));
static V2_REGISTRY: RegistryCell = LazyLock::new(|| build(ApiVersion::V2, v2::ROUTES));

impl ApiVersion {
    /// The shared, immutable registry for this version.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRoute`] if the built-in table is malformed.
    pub fn registry(self) -> Result<&'static RouteRegistry, Error> {
        let cell = match self {
            Self::V1 => &V1_REGISTRY,
            Self::V2 => &V2_REGISTRY,
        };
        cell.as_ref()
            .map_err(|(path, reason)| Error::invalid_route(path, reason.clone()))
    }

    /// Suffix appended to resolved method paths.
    #[must_use]
    pub const fn path_suffix(self) -> &'static str {
        match self {
            Self::V1 => constants::V1_PATH_SUFFIX,
            Self::V2 => constants::V2_PATH_SUFFIX,
        }
    }

    /// Whether the API key travels as a URL segment.
    #[must_use]
    pub const fn embeds_key_in_path(self) -> bool {
        matches!(self, Self::V1)
    }

    /// Whether an empty object or list counts as "nothing returned".
    #[must_use]
    pub const fn rejects_empty_payload(self) -> bool {
        matches!(self, Self::V1)
    }

    /// Whether credentials are exchanged for a session token.
    #[must_use]
    pub const fn uses_session_login(self) -> bool {
        matches!(self, Self::V2)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
        }
    }
}
