//! Binds positional call values to a route's parameter contract.
//!
//! Two legacy behaviors are kept on purpose:
//! - values beyond the last descriptor are ignored
//! - boolean `true` for an optional descriptor becomes the descriptor's own name

use crate::constants::PATH_SEPARATOR;
use crate::routes::{Conversion, Location, ParameterDescriptor, RouteDescriptor};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::debug;

// ASCII whitespace only; other Unicode spaces are stripped like any other symbol.
static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9\t\n\x0B\x0C\r -]").expect("Regex pattern is hardcoded and valid")
});
static SLUG_SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?-u:\s)|-)+").expect("Regex pattern is hardcoded and valid")
});

/// Normalizes a title into a lower-case, hyphen-separated slug.
///
/// `"The Walking Dead"` -> `"the-walking-dead"`, `"  Multi   Space--Dash "` -> `"multi-space-dash"`.
#[must_use]
pub fn slugify(phrase: &str) -> String {
    let lowered = phrase.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let collapsed = SLUG_SEPARATOR_RUNS.replace_all(&stripped, " ");
    collapsed.trim().replace(' ', "-")
}

/// Renders a call value as URL segment text.
///
/// Strings are used as-is, numbers in decimal, lists comma-joined. `false`
/// and `null` render empty, which drops them when they are trailing.
#[must_use]
pub fn segment_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Array(items) => items.iter().map(segment_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

impl Conversion {
    /// Applies the transform to one call value.
    #[must_use]
    pub fn apply(self, value: &Value) -> Value {
        match self {
            Self::Identity => value.clone(),
            Self::SlugNormalize => Value::String(slugify(&segment_text(value))),
            Self::PercentEncode => {
                Value::String(urlencoding::encode(&segment_text(value)).into_owned())
            }
        }
    }
}

/// The transformed value for one descriptor, before it is routed.
fn transform(descriptor: &ParameterDescriptor, value: &Value) -> Value {
    if descriptor.optional && matches!(value, Value::Bool(true)) {
        return Value::String(descriptor.name.to_string());
    }
    descriptor.conversion.apply(value)
}

/// Result of binding call values to a route.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundArguments {
    segments: Vec<String>,
    body: Option<Value>,
}

impl BoundArguments {
    /// Path segments in call order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments joined with `/`, trailing separators trimmed.
    #[must_use]
    pub fn path_suffix(&self) -> String {
        let mut joined = String::new();
        for segment in &self.segments {
            joined.push_str(segment);
            joined.push(PATH_SEPARATOR);
        }
        joined.trim_end_matches(PATH_SEPARATOR).to_string()
    }

    /// Request body; `None` when no field was bound.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Option<Value>) {
        (self.segments, self.body)
    }
}

/// Binds `args` to the descriptors of `route` by position.
#[must_use]
pub fn bind(route: &RouteDescriptor, args: &[Value]) -> BoundArguments {
    if args.len() > route.parameters().len() {
        debug!(
            target: "trakt_dispatch::binder",
            "{}: ignoring {} extra argument(s)",
            route.path(),
            args.len() - route.parameters().len()
        );
    }

    if route.is_bulk_post() {
        return BoundArguments {
            segments: Vec::new(),
            body: route
                .parameters()
                .first()
                .and_then(|descriptor| args.get(descriptor.slot_index))
                .cloned(),
        };
    }

    let mut segments = Vec::new();
    let mut fields = Map::new();

    for descriptor in route.parameters() {
        let Some(value) = args.get(descriptor.slot_index) else {
            continue;
        };
        let transformed = transform(descriptor, value);
        match descriptor.location {
            Location::PathSegment => segments.push(segment_text(&transformed)),
            Location::PostField => {
                fields.insert(descriptor.name.to_string(), transformed);
            }
        }
    }

    BoundArguments {
        segments,
        body: (!fields.is_empty()).then_some(Value::Object(fields)),
    }
}
