use url::Url;

/// Outcome of resolving a reference against a base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The reference was joined with the base into an absolute URL
    Resolved(String),
    /// The base or the reference could not be parsed; holds the reference as given
    Unresolved(String),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Resolved(url) | Resolution::Unresolved(url) => url,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Resolution::Resolved(url) | Resolution::Unresolved(url) => url,
        }
    }
}

/// Resolves references against one base URL, parsed once up front
#[derive(Debug, Clone)]
pub struct Resolver {
    base: Option<Url>,
}

impl Resolver {
    pub fn new(base: &str) -> Self {
        let base = match Url::parse(base) {
            Ok(url) => Some(url),
            Err(e) => {
                ::log::debug!("Base URL {:?} does not parse ({}), references kept as-is", base, e);
                None
            }
        };
        Self { base }
    }

    pub fn resolve(&self, reference: &str) -> Resolution {
        let Some(base) = &self.base else {
            return Resolution::Unresolved(reference.to_string());
        };

        match base.join(reference) {
            Ok(url) => Resolution::Resolved(url.into()),
            Err(e) => {
                ::log::trace!("Could not resolve {:?} against {}: {}", reference, base, e);
                Resolution::Unresolved(reference.to_string())
            }
        }
    }
}

/// Resolves `reference` against `base`
pub fn resolve_reference(reference: &str, base: &str) -> Resolution {
    Resolver::new(base).resolve(reference)
}

/// Resolves `reference` against `base`, returning `reference` unchanged when
/// either side is malformed
pub fn resolve(reference: &str, base: &str) -> String {
    resolve_reference(reference, base).into_string()
}
