//! Blank-instance synthesis and fluent builders.
//!
//! A target type describes its constructors through [`Describe`]. The
//! synthesizer picks the public constructor with the fewest parameters,
//! feeds it default values and hands back a *blank instance*; the builder
//! factory wraps that instance in an [`AbstractBuilder`] whose setters
//! populate it until [`AbstractBuilder::build`] returns it.
//!
//! ```
//! use fluentbuilder_runtime::{
//!     AbstractBuilder, Constructor, Describe, ParamKind, PrimitiveType, create_implementation,
//!     fluent_builder,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! pub struct Account {
//!     owner: Option<String>,
//!     balance: i64,
//!     tags: Vec<String>,
//! }
//!
//! impl Describe for Account {
//!     fn constructors() -> Vec<Constructor<Self>> {
//!         vec![Constructor::public(
//!             [ParamKind::Primitive(PrimitiveType::Long)],
//!             |args| {
//!                 Ok(Account {
//!                     owner: None,
//!                     balance: args.long(0)?,
//!                     tags: Vec::new(),
//!                 })
//!             },
//!         )]
//!     }
//! }
//!
//! fluent_builder! {
//!     pub struct AccountBuilder for Account {
//!         owner: Option<String>,
//!         balance: i64,
//!         tags: Vec<String> [each tag: String],
//!     }
//! }
//!
//! let account = create_implementation::<AccountBuilder>()
//!     .unwrap()
//!     .owner(Some("ada".to_string()))
//!     .balance(42)
//!     .tag("vip".to_string())
//!     .build();
//!
//! assert_eq!(account.balance, 42);
//! assert_eq!(account.tags, vec!["vip".to_string()]);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod describe;
mod error;
mod factory;
mod macros;
mod synthesizer;

pub use describe::{Arguments, Constructor, Describe, Instantiate};
pub use error::{ConstructionError, InvokeError};
pub use factory::{AbstractBuilder, Builder, create_implementation, create_implementation_with};
pub use fluentbuilder_core::{ParamKind, PrimitiveType, Value, ValueError};
pub use synthesizer::{synthesize_blank_instance, try_synthesize_blank_instance};
