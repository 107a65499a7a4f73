//! Conversion classifier for built-in and user-declared types.

use opsel_core::{BuiltinType, ConversionKind, DataType, TypeFlavor, TypeHash, TypeKind};
use opsel_registry::{ConversionMethod, OperatorLookup};

use super::{ConversionClassifier, find_numeric_conversion, is_implicit_numeric};

/// Classifies conversions using the built-in rules and the conversion methods
/// declared in an [`OperatorLookup`].
///
/// Checked in this order:
/// 1. Identity
/// 2. Standard implicit (numeric, nullable, boxing, reference)
/// 3. User-defined implicit
/// 4. Standard explicit (numeric, nullable, unboxing, reference)
/// 5. User-defined explicit
pub struct StandardConversions<'a, L: ?Sized> {
    lookup: &'a L,
}

impl<'a, L: OperatorLookup + ?Sized> StandardConversions<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Identity and the standard implicit conversions.
    fn standard_implicit(&self, from: &DataType, to: &DataType) -> Option<ConversionKind> {
        if from == to {
            return Some(ConversionKind::Identity);
        }

        if to.is_nullable() {
            let target = to.underlying();
            let source = from.underlying();
            let wraps = !from.is_nullable() && source == target;
            let widens = match (source.as_builtin(), target.as_builtin()) {
                (Some(s), Some(t)) => is_implicit_numeric(s, t),
                _ => false,
            };
            return (wraps || widens).then_some(ConversionKind::ImplicitNullable);
        }

        if to.is_builtin(BuiltinType::Object) {
            return Some(if from.is_value_type() {
                ConversionKind::Boxing
            } else {
                ConversionKind::ImplicitReference
            });
        }

        if from.is_nullable() {
            return None;
        }

        match (from.kind(), to.kind()) {
            (TypeKind::Builtin(s), TypeKind::Builtin(t)) => {
                is_implicit_numeric(*s, *t).then_some(ConversionKind::ImplicitNumeric)
            }
            (TypeKind::Named(s), TypeKind::Named(t))
                if s.flavor == TypeFlavor::Reference && t.flavor == TypeFlavor::Reference =>
            {
                self.lookup
                    .derives_from(s.hash, t.hash)
                    .then_some(ConversionKind::ImplicitReference)
            }
            _ => None,
        }
    }

    /// The standard explicit conversions.
    fn standard_explicit(&self, from: &DataType, to: &DataType) -> Option<ConversionKind> {
        let source = from.underlying();
        let target = to.underlying();

        if from.is_nullable() || to.is_nullable() {
            let numeric = match (source.as_builtin(), target.as_builtin()) {
                (Some(s), Some(t)) => find_numeric_conversion(s, t).is_some(),
                _ => false,
            };
            // S? -> S is an unwrap; S -> S? was already implicit
            if numeric || (from.is_nullable() && source == target) {
                return Some(ConversionKind::ExplicitNullable);
            }
        }

        if from.is_builtin(BuiltinType::Object) {
            return Some(if to.is_value_type() {
                ConversionKind::Unboxing
            } else {
                ConversionKind::ExplicitReference
            });
        }

        if from.is_nullable() || to.is_nullable() {
            return None;
        }

        match (from.kind(), to.kind()) {
            (TypeKind::Builtin(s), TypeKind::Builtin(t)) => find_numeric_conversion(*s, *t),
            (TypeKind::Named(s), TypeKind::Named(t))
                if s.flavor == TypeFlavor::Reference && t.flavor == TypeFlavor::Reference =>
            {
                self.lookup
                    .derives_from(t.hash, s.hash)
                    .then_some(ConversionKind::ExplicitReference)
            }
            _ => None,
        }
    }

    fn encompasses(&self, from: &DataType, to: &DataType, allow_explicit: bool) -> bool {
        self.standard_implicit(from, to).is_some()
            || (allow_explicit && self.standard_explicit(from, to).is_some())
    }

    /// Types whose conversion methods are considered for `from` -> `to`:
    /// the underlying named types of both sides and their base classes.
    fn conversion_sources(&self, from: &DataType, to: &DataType) -> Vec<TypeHash> {
        let mut sources = Vec::new();
        for ty in [from, to] {
            if let Some(named) = ty.as_named() {
                for hash in self.lookup.base_chain(named.hash) {
                    if !sources.contains(&hash) {
                        sources.push(hash);
                    }
                }
            }
        }
        sources
    }

    /// Find the user-declared conversion method for `from` -> `to`.
    ///
    /// Among the applicable methods the most specific source type is `from`
    /// itself if any method takes it, otherwise the source every other source
    /// converts to. The most specific target is chosen the same way in the
    /// opposite direction. Exactly one method must convert between the two,
    /// otherwise the conversion is ambiguous and `None` is returned.
    fn user_defined(&self, from: &DataType, to: &DataType, implicit: bool) -> Option<TypeHash> {
        let mut applicable: Vec<&ConversionMethod> = Vec::new();
        for ty in self.conversion_sources(from, to) {
            for method in self.lookup.conversions(ty) {
                if implicit && !method.is_implicit {
                    continue;
                }
                if self.encompasses(from, &method.from, !implicit)
                    && self.encompasses(&method.to, to, !implicit)
                {
                    applicable.push(method);
                }
            }
        }
        if let [only] = applicable.as_slice() {
            return Some(only.hash);
        }

        let sources: Vec<&DataType> = applicable.iter().map(|method| &method.from).collect();
        let source = if sources.contains(&from) {
            from
        } else {
            self.most_specific(&sources, |a, b| self.standard_implicit(a, b).is_some())?
        };
        let targets: Vec<&DataType> = applicable.iter().map(|method| &method.to).collect();
        let target = if targets.contains(&to) {
            to
        } else {
            self.most_specific(&targets, |a, b| self.standard_implicit(b, a).is_some())?
        };

        let mut matching = applicable
            .iter()
            .filter(|method| method.from == *source && method.to == *target);
        match (matching.next(), matching.next()) {
            (Some(method), None) => Some(method.hash),
            _ => None,
        }
    }

    /// The type in `types` that relates to every other type by `precedes`.
    fn most_specific<'t>(
        &self,
        types: &[&'t DataType],
        precedes: impl Fn(&DataType, &DataType) -> bool,
    ) -> Option<&'t DataType> {
        types
            .iter()
            .copied()
            .find(|candidate| types.iter().all(|other| precedes(candidate, other)))
    }
}

impl<L: OperatorLookup + ?Sized> ConversionClassifier for StandardConversions<'_, L> {
    fn classify(&self, from: &DataType, to: &DataType) -> ConversionKind {
        if from.is_error() || to.is_error() {
            return ConversionKind::NoConversion;
        }
        if let Some(kind) = self.standard_implicit(from, to) {
            return kind;
        }
        if let Some(method) = self.user_defined(from, to, true) {
            return ConversionKind::ImplicitUserDefined { method };
        }
        if let Some(kind) = self.standard_explicit(from, to) {
            return kind;
        }
        if let Some(method) = self.user_defined(from, to, false) {
            return ConversionKind::ExplicitUserDefined { method };
        }
        ConversionKind::NoConversion
    }
}
