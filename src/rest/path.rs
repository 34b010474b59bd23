//! Endpoint paths for resource operations.
//!
//! Every resource path has the shape `[prefix/]base[/id][/count]`. The
//! prefix scopes a resource under an owner, e.g. `products/632910392` for a
//! product's metafields. `.json` is appended later by the REST client.
//!
//! ```rust
//! use shopify_rest::rest::{build_path, ResourceOperation};
//!
//! let path = build_path(None, "price_rules", ResourceOperation::Count, None).unwrap();
//! assert_eq!(path, "price_rules/count");
//!
//! let path = build_path(
//!     Some("products/632910392"),
//!     "metafields",
//!     ResourceOperation::Find,
//!     Some("721389482"),
//! )
//! .unwrap();
//! assert_eq!(path, "products/632910392/metafields/721389482");
//! ```

use crate::clients::HttpMethod;

/// Operations a resource service can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// `GET base/{id}`
    Find,
    /// `GET base`
    All,
    /// `GET base/count`
    Count,
    /// `POST base`
    Create,
    /// `PUT base/{id}`
    Update,
    /// `DELETE base/{id}`
    Delete,
}

impl ResourceOperation {
    /// The HTTP method used for this operation.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::Count => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Whether the path ends in the entity id.
    #[must_use]
    pub const fn requires_id(&self) -> bool {
        matches!(self, Self::Find | Self::Update | Self::Delete)
    }

    /// Lowercase operation name, used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "get",
            Self::All => "list",
            Self::Count => "count",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Builds the path for `operation`.
///
/// Returns `None` when the operation requires an id and none is given. An id
/// passed to an operation that does not use one is ignored.
#[must_use]
pub fn build_path(
    prefix: Option<&str>,
    base: &str,
    operation: ResourceOperation,
    id: Option<&str>,
) -> Option<String> {
    let mut path = match prefix.map(|p| p.trim_matches('/')) {
        Some(p) if !p.is_empty() => format!("{p}/{base}"),
        _ => base.to_string(),
    };

    if operation.requires_id() {
        path.push('/');
        path.push_str(id?);
    } else if operation == ResourceOperation::Count {
        path.push_str("/count");
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_operations_ignore_id() {
        for op in [ResourceOperation::All, ResourceOperation::Create] {
            assert_eq!(
                build_path(None, "metafields", op, Some("1")).as_deref(),
                Some("metafields")
            );
        }
        assert_eq!(
            build_path(None, "metafields", ResourceOperation::Count, None).as_deref(),
            Some("metafields/count")
        );
    }

    #[test]
    fn test_member_operations_need_id() {
        for op in [
            ResourceOperation::Find,
            ResourceOperation::Update,
            ResourceOperation::Delete,
        ] {
            assert_eq!(
                build_path(None, "price_rules", op, Some("507328175")).as_deref(),
                Some("price_rules/507328175")
            );
            assert!(build_path(None, "price_rules", op, None).is_none());
        }
    }

    #[test]
    fn test_prefix_is_trimmed_and_empty_prefix_ignored() {
        assert_eq!(
            build_path(
                Some("/customers/207119551/"),
                "metafields",
                ResourceOperation::Count,
                None
            )
            .as_deref(),
            Some("customers/207119551/metafields/count")
        );
        assert_eq!(
            build_path(Some(""), "metafields", ResourceOperation::All, None).as_deref(),
            Some("metafields")
        );
    }

    #[test]
    fn test_http_methods() {
        assert_eq!(ResourceOperation::Find.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Count.http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Create.http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Update.http_method(), HttpMethod::Put);
        assert_eq!(ResourceOperation::Delete.http_method(), HttpMethod::Delete);
    }
}
