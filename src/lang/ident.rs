// Used in both Token and Ast

/// An identifier as written in the source, paired with the semantic
/// name derived by stripping its syntactic marker: `@` for addresses,
/// a trailing `!` for calls, a trailing `:` for labels.
#[derive(Debug, PartialEq, Hash, Clone)]
pub struct Ident {
    original: String,
    name: String,
}

impl Ident {
    pub fn value(original: &str) -> Ident {
        Ident {
            original: original.to_string(),
            name: original.to_string(),
        }
    }

    pub fn address(original: &str) -> Ident {
        Ident {
            original: original.to_string(),
            name: original.strip_prefix('@').unwrap_or(original).to_string(),
        }
    }

    pub fn call(original: &str) -> Ident {
        Ident {
            original: original.to_string(),
            name: original.strip_suffix('!').unwrap_or(original).to_string(),
        }
    }

    pub fn label(original: &str) -> Ident {
        Ident {
            original: original.to_string(),
            name: original.strip_suffix(':').unwrap_or(original).to_string(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}
