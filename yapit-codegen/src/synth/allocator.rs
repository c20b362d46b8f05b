//! Identifier derivation and run-scoped name allocation.

use indexmap::IndexSet;
use thiserror::Error;
use yapit_core::{is_identifier, lowercase_first};
use yapit_ir::HttpMethod;
use yapit_manifest::{CollisionPolicy, NamingConfig, Role, RoleSuffix};

use crate::{
    diagnostic::{Diagnostic, Phase},
    language::NamingConvention,
};

/// Function name used when the path yields no identifier.
pub const PLACEHOLDER_FUNCTION: &str = "apiUnknown";

/// Naming failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("path '{path}' contains no identifier characters")]
    DegeneratePath { path: String },

    #[error("name '{name}' is already taken in this run")]
    Collision { name: String },
}

/// Issues names for one generation run.
///
/// Derivation is pure; only [`allocate`](Self::allocate) records state. Each
/// run owns its own allocator, so concurrent runs never see each other's
/// names.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    issued: IndexSet<String>,
    role_suffix: RoleSuffix,
    collisions: CollisionPolicy,
    naming: NamingConvention,
}

impl NameAllocator {
    pub fn new(config: NamingConfig, naming: NamingConvention) -> Self {
        Self {
            issued: IndexSet::new(),
            role_suffix: config.role_suffix,
            collisions: config.collisions,
            naming,
        }
    }

    pub fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Names issued so far, in issue order.
    pub fn issued(&self) -> impl Iterator<Item = &str> {
        self.issued.iter().map(String::as_str)
    }

    pub fn is_issued(&self, name: &str) -> bool {
        self.issued.contains(name)
    }

    /// Derive the type name for one side of an endpoint.
    ///
    /// `/finance/bill_file_task/withdraw` + POST + request gives
    /// `FinanceBillFileTaskWithdrawPOSTReq`.
    pub fn type_name(
        &self,
        path: &str,
        method: HttpMethod,
        role: Role,
    ) -> Result<String, NamingError> {
        let words: String = segments(path)
            .map(|segment| self.naming.type_words(segment))
            .collect();
        if words.is_empty() {
            return Err(NamingError::DegeneratePath {
                path: path.to_string(),
            });
        }
        Ok(leading_digit_guard(format!(
            "{words}{}{}",
            method.as_str(),
            self.role_suffix.suffix(role)
        )))
    }

    /// The fixed type name used when the path is degenerate.
    pub fn placeholder_type_name(&self, method: HttpMethod, role: Role) -> String {
        format!("Unknown{}{}", method.as_str(), self.role_suffix.suffix(role))
    }

    /// Derive the function name from the last path segment.
    ///
    /// A segment that already has an uppercase letter is taken as camel-cased
    /// and only its first character is lowered, as long as the result is an
    /// identifier.
    pub fn function_name(&self, path: &str) -> Result<String, NamingError> {
        let base = segments(path)
            .last()
            .map(|segment| {
                let lowered = lowercase_first(segment);
                if segment.contains(|c: char| c.is_ascii_uppercase()) && is_identifier(&lowered) {
                    lowered
                } else {
                    (self.naming.segment_to_function)(segment)
                }
            })
            .unwrap_or_default();
        if base.is_empty() {
            return Err(NamingError::DegeneratePath {
                path: path.to_string(),
            });
        }
        Ok(self.naming.safe_name(&leading_digit_guard(base)))
    }

    /// [`type_name`](Self::type_name), falling back to the placeholder.
    ///
    /// A fallback is logged and recorded in `diagnostics`.
    pub fn type_name_or_placeholder(
        &self,
        path: &str,
        method: HttpMethod,
        role: Role,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        self.type_name(path, method, role).unwrap_or_else(|e| {
            let placeholder = self.placeholder_type_name(method, role);
            tracing::warn!(path, %placeholder, "{e}");
            diagnostics.push(
                Diagnostic::warning(Phase::Naming, format!("{e}; using '{placeholder}'"))
                    .at(path),
            );
            placeholder
        })
    }

    /// [`function_name`](Self::function_name), falling back to the placeholder.
    pub fn function_name_or_placeholder(
        &self,
        path: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        self.function_name(path).unwrap_or_else(|e| {
            tracing::warn!(path, placeholder = PLACEHOLDER_FUNCTION, "{e}");
            diagnostics.push(
                Diagnostic::warning(
                    Phase::Naming,
                    format!("{e}; using '{PLACEHOLDER_FUNCTION}'"),
                )
                .at(path),
            );
            PLACEHOLDER_FUNCTION.to_string()
        })
    }

    /// Register `candidate`, applying the collision policy if it is taken.
    pub fn allocate(&mut self, candidate: String) -> Result<String, NamingError> {
        if !self.issued.contains(&candidate) {
            self.issued.insert(candidate.clone());
            return Ok(candidate);
        }
        match self.collisions {
            CollisionPolicy::Reject => Err(NamingError::Collision { name: candidate }),
            CollisionPolicy::Suffix => {
                let name = (2..)
                    .map(|n| format!("{candidate}{n}"))
                    .find(|name| !self.issued.contains(name))
                    .unwrap_or(candidate);
                tracing::debug!(%name, "name taken, suffixed");
                self.issued.insert(name.clone());
                Ok(name)
            }
        }
    }
}

/// Non-empty path segments with `:param` / `{param}` markers stripped.
fn segments(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split('/')
        .map(|segment| {
            let segment = segment.trim();
            let segment = segment.strip_prefix(':').unwrap_or(segment);
            segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .unwrap_or(segment)
        })
        .filter(|segment| !segment.is_empty())
}

fn leading_digit_guard(name: String) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    const NAMING: NamingConvention = NamingConvention {
        segment_to_type: yapit_core::to_pascal_case,
        key_to_type: yapit_core::capitalize_words,
        segment_to_function: yapit_core::to_camel_case,
        reserved_words: &["delete", "export"],
        escape_reserved: underscore,
    };

    fn underscore(name: &str) -> String {
        format!("_{name}")
    }

    fn allocator() -> NameAllocator {
        NameAllocator::new(NamingConfig::default(), NAMING)
    }

    #[test]
    fn test_type_name() {
        let names = allocator();
        assert_eq!(
            names
                .type_name("/finance/bill_file_task/withdraw", HttpMethod::Post, Role::Request)
                .unwrap(),
            "FinanceBillFileTaskWithdrawPOSTReq"
        );
        assert_eq!(
            names
                .type_name("/user/:id/after-sales", HttpMethod::Get, Role::Response)
                .unwrap(),
            "UserIdAfterSalesGETRes"
        );
        assert_eq!(
            names
                .type_name("//order/{orderId}", HttpMethod::Delete, Role::Request)
                .unwrap(),
            "OrderOrderIdDELETEReq"
        );
    }

    #[test]
    fn test_long_role_suffix() {
        let names = NameAllocator::new(
            NamingConfig {
                role_suffix: RoleSuffix::Long,
                ..NamingConfig::default()
            },
            NAMING,
        );
        assert_eq!(
            names
                .type_name("/a/b", HttpMethod::Put, Role::Response)
                .unwrap(),
            "ABPUTResponse"
        );
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(
            allocator()
                .type_name("/3d/model", HttpMethod::Get, Role::Request)
                .unwrap(),
            "_3dModelGETReq"
        );
        assert_eq!(allocator().function_name("/v1/2fa").unwrap(), "_2fa");
    }

    #[test]
    fn test_derivation_is_pure() {
        let names = allocator();
        let first = names.type_name("/a/b", HttpMethod::Post, Role::Request);
        let second = names.type_name("/a/b", HttpMethod::Post, Role::Request);
        assert_eq!(first, second);
        assert_eq!(names.issued().count(), 0);
    }

    #[test]
    fn test_function_name() {
        let names = allocator();
        assert_eq!(
            names.function_name("/finance/bill_file_task/withdraw").unwrap(),
            "withdraw"
        );
        assert_eq!(names.function_name("/order/get-list").unwrap(), "getList");
        assert_eq!(
            names.function_name("/order/GetOrderDetail").unwrap(),
            "getOrderDetail"
        );
        assert_eq!(names.function_name("/user/:id").unwrap(), "id");
        assert_eq!(
            names.function_name("/order/Export_Excel").unwrap(),
            "export_Excel"
        );
        assert_eq!(
            names.function_name("/order/Export-Excel").unwrap(),
            "exportExcel"
        );
        assert_eq!(names.function_name("/item/delete").unwrap(), "_delete");
    }

    #[test]
    fn test_degenerate_paths() {
        let names = allocator();
        for path in ["", "/", "///", "/-/"] {
            assert!(
                matches!(
                    names.type_name(path, HttpMethod::Get, Role::Request),
                    Err(NamingError::DegeneratePath { .. })
                ),
                "{path:?}"
            );
            assert!(names.function_name(path).is_err(), "{path:?}");
        }
    }

    #[test]
    #[traced_test]
    fn test_placeholders() {
        let names = allocator();
        let mut diagnostics = Vec::new();

        assert_eq!(
            names.type_name_or_placeholder("/", HttpMethod::Post, Role::Response, &mut diagnostics),
            "UnknownPOSTRes"
        );
        assert_eq!(
            names.function_name_or_placeholder("", &mut diagnostics),
            "apiUnknown"
        );
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.phase == Phase::Naming));
        assert!(logs_contain("contains no identifier characters"));
    }

    #[test]
    fn test_allocate_suffixes_collisions() {
        let mut names = allocator();
        assert_eq!(names.allocate("FooData".into()).unwrap(), "FooData");
        assert_eq!(names.allocate("FooData".into()).unwrap(), "FooData2");
        assert_eq!(names.allocate("FooData".into()).unwrap(), "FooData3");
        assert_eq!(names.allocate("FooData2".into()).unwrap(), "FooData22");
        assert!(names.is_issued("FooData3"));
    }

    #[test]
    fn test_allocate_rejects_collisions() {
        let mut names = NameAllocator::new(
            NamingConfig {
                collisions: CollisionPolicy::Reject,
                ..NamingConfig::default()
            },
            NAMING,
        );
        names.allocate("FooData".into()).unwrap();
        assert_eq!(
            names.allocate("FooData".into()),
            Err(NamingError::Collision {
                name: "FooData".into()
            })
        );
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut a = allocator();
        let mut b = allocator();
        assert_eq!(a.allocate("Foo".into()).unwrap(), "Foo");
        assert_eq!(b.allocate("Foo".into()).unwrap(), "Foo");
    }
}
