//! Link annotations and the edits the reconciler asks the host to apply.

/// Attributes of a link annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkAttrs {
    /// Link target: the exact text the link was detected on.
    pub target: String,
    /// Created by the reconciler. Only these are ever removed by it.
    pub auto_generated: bool,
}

impl LinkAttrs {
    /// Attributes of a detected link.
    pub fn auto(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            auto_generated: true,
        }
    }

    /// Attributes of a link the user created.
    pub fn user(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            auto_generated: false,
        }
    }
}

/// A link annotation over the document range `from..to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub from: usize,
    pub to: usize,
    pub attrs: LinkAttrs,
}

/// An annotation edit for the host to apply.
///
/// A reconcile pass returns all removals before all additions; the host
/// applies the whole list as one atomic edit, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationOp {
    /// Remove every auto-generated link overlapping `from..to`.
    /// User-created links are left alone.
    RemoveAutoLinks { from: usize, to: usize },
    /// Add a link over `from..to`.
    AddLink {
        from: usize,
        to: usize,
        attrs: LinkAttrs,
    },
}

impl AnnotationOp {
    /// Document range the operation covers.
    pub fn range(&self) -> std::ops::Range<usize> {
        match *self {
            Self::RemoveAutoLinks { from, to } | Self::AddLink { from, to, .. } => from..to,
        }
    }

    /// Check if this is an addition.
    pub fn is_add(&self) -> bool {
        matches!(self, Self::AddLink { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_constructors() {
        assert!(LinkAttrs::auto("a.com").auto_generated);
        assert!(!LinkAttrs::user("a.com").auto_generated);
        assert_eq!(LinkAttrs::auto("a.com").target, "a.com");
    }

    #[test]
    fn test_op_range() {
        let remove = AnnotationOp::RemoveAutoLinks { from: 1, to: 9 };
        let add = AnnotationOp::AddLink {
            from: 2,
            to: 7,
            attrs: LinkAttrs::auto("a.com"),
        };
        assert_eq!(remove.range(), 1..9);
        assert_eq!(add.range(), 2..7);
        assert!(!remove.is_add());
        assert!(add.is_add());
    }
}
