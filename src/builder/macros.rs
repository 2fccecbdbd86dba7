//! Macros for declaring state enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) and
/// `Display` for it.
///
/// The generated enum derives `Clone`, `PartialEq`, `Debug` and the serde
/// traits; further derives can be passed as attributes. An associated
/// `ALL` constant lists the variants in declaration order.
///
/// # Example
///
/// ```
/// use statecraft::core::State;
/// use statecraft::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Ticket {
///         Open,
///         Escalated,
///         Resolved,
///         Rejected,
///     }
///     final: [Resolved, Rejected]
///     error: [Rejected]
/// }
///
/// assert_eq!(Ticket::ALL.len(), 4);
/// assert!(Ticket::Rejected.is_error());
/// assert_eq!(Ticket::Escalated.to_string(), "Escalated");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Order {
            Placed,
            Shipped,
            Delivered,
            Lost,
        }
        final: [Delivered, Lost]
        error: [Lost]
    }

    #[test]
    fn generates_state_impl() {
        assert_eq!(Order::Shipped.name(), "Shipped");
        assert!(!Order::Placed.is_final());
        assert!(Order::Delivered.is_final());
        assert!(!Order::Delivered.is_error());
        assert!(Order::Lost.is_final());
        assert!(Order::Lost.is_error());
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            Order::ALL,
            &[Order::Placed, Order::Shipped, Order::Delivered, Order::Lost]
        );
    }

    #[test]
    fn display_uses_state_name() {
        assert_eq!(Order::Placed.to_string(), "Placed");
    }

    #[test]
    fn accepts_extra_derives() {
        state_enum! {
            #[derive(Copy, Eq, Hash)]
            pub enum Switch {
                On,
                Off,
            }
            final: [Off]
        }

        let on = Switch::On;
        let copied = on;
        assert_eq!(on, copied);
        assert!(Switch::Off.is_final());
    }

    #[test]
    fn final_and_error_lists_are_optional() {
        state_enum! {
            enum Phase {
                One,
                Two,
            }
        }

        assert!(Phase::ALL.iter().all(|p| !p.is_final() && !p.is_error()));
    }
}
