use super::AnyValue;

/// Identity of the component producing records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentationScope {
    pub name: String,
    pub version: Option<String>,
    pub schema_url: Option<String>,
    pub attributes: Vec<(String, AnyValue)>,
}

impl InstrumentationScope {
    pub fn builder(name: impl Into<String>) -> ScopeBuilder {
        ScopeBuilder {
            scope: InstrumentationScope {
                name: name.into(),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug)]
pub struct ScopeBuilder {
    scope: InstrumentationScope,
}

impl ScopeBuilder {
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.scope.version = Some(version.into());
        self
    }

    pub fn with_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.scope.schema_url = Some(schema_url.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AnyValue>) -> Self {
        self.scope.attributes.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> InstrumentationScope {
        self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let scope = InstrumentationScope::builder("name").build();
        assert_eq!(scope.name, "name");
        assert!(scope.version.is_none());
        assert!(scope.schema_url.is_none());
        assert!(scope.attributes.is_empty());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let scope = InstrumentationScope::builder("svc")
            .with_version("1.2.3")
            .with_schema_url("https://opentelemetry.io/schemas/1.26.0")
            .with_attribute("team", "core")
            .build();
        assert_eq!(scope.version.as_deref(), Some("1.2.3"));
        assert_eq!(scope.schema_url.as_deref(), Some("https://opentelemetry.io/schemas/1.26.0"));
        assert_eq!(scope.attributes.len(), 1);
    }
}
