/// Declare a builder type for a target struct.
///
/// Generates the builder struct, its [`AbstractBuilder`](crate::AbstractBuilder)
/// impl and one chained setter per listed field. A collection field may add
/// an element setter with `[each name: Element]`; it extends the collection
/// by one element per call.
///
/// ```
/// use std::collections::BTreeSet;
///
/// use fluentbuilder_runtime::{AbstractBuilder, create_implementation_with, fluent_builder};
///
/// #[derive(Default)]
/// pub struct Team {
///     name: String,
///     members: BTreeSet<String>,
/// }
///
/// fluent_builder! {
///     /// Builds teams.
///     pub struct TeamBuilder for Team {
///         name: String,
///         members: BTreeSet<String> [each member: String],
///     }
/// }
///
/// let team = create_implementation_with::<TeamBuilder>(Team::default())
///     .name("core".to_string())
///     .member("ada".to_string())
///     .member("ada".to_string())
///     .build();
/// assert_eq!(team.members.len(), 1);
/// ```
#[macro_export]
macro_rules! fluent_builder {
    (
        $(#[$meta:meta])*
        $vis:vis struct $builder:ident for $target:ty {
            $( $field:ident : $ty:ty $( [each $each:ident : $elem:ty] )? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $builder {
            target: $target,
        }

        impl $crate::AbstractBuilder for $builder {
            type Target = $target;

            fn from_target(target: $target) -> Self {
                Self { target }
            }

            fn target(&self) -> &$target {
                &self.target
            }

            fn target_mut(&mut self) -> &mut $target {
                &mut self.target
            }

            fn build(self) -> $target {
                self.target
            }
        }

        impl $builder {
            $(
                #[allow(dead_code)]
                $vis fn $field(mut self, $field: $ty) -> Self {
                    self.target.$field = $field;
                    self
                }

                $(
                    #[allow(dead_code)]
                    $vis fn $each(mut self, $each: $elem) -> Self {
                        ::std::iter::Extend::extend(
                            &mut self.target.$field,
                            ::std::iter::once($each),
                        );
                        self
                    }
                )?
            )*
        }
    };
}
