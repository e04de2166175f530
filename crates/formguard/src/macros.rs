//! Macros for declaring constraints with minimal boilerplate.

// ============================================================================
// PATTERN CONSTRAINT MACRO
// ============================================================================

/// Declares a whole-value character-class constraint: the unit struct, a
/// `matches` predicate backed by a lazily compiled regex, and the
/// [`Constraint`](crate::constraints::Constraint) impl.
///
/// The generated constraint takes a boolean argument. `true` passes values
/// that match, `false` passes values that do not.
///
/// ```rust,ignore
/// pattern_constraint! {
///     /// Unsigned decimal digits.
///     pub Uint => "uint", r"^[0-9]+$";
/// }
/// ```
macro_rules! pattern_constraint {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis $name:ident => $kind:literal, $pattern:literal;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $name {
                /// Symbolic kind name this constraint is registered under.
                pub const KIND: &'static str = $kind;

                /// Returns true when the whole value belongs to the character class.
                #[must_use]
                pub fn matches(value: &str) -> bool {
                    static PATTERN: ::std::sync::LazyLock<::regex::Regex> =
                        ::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).unwrap());
                    PATTERN.is_match(value)
                }
            }

            impl $crate::constraints::Constraint for $name {
                fn validate(
                    &self,
                    value: &str,
                    arg: &$crate::value::Argument,
                ) -> $crate::error::RuleResult<bool> {
                    let expected = $crate::constraints::flag_argument(Self::KIND, arg)?;
                    Ok(Self::matches(value) == expected)
                }

                fn check_argument(
                    &self,
                    arg: &$crate::value::Argument,
                ) -> $crate::error::RuleResult<()> {
                    $crate::constraints::flag_argument(Self::KIND, arg).map(drop)
                }
            }
        )+
    };
}

pub(crate) use pattern_constraint;
