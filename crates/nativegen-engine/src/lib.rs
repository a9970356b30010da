//! Nativegen Engine
//!
//! Turns the reflective metadata of one JVM class into Frege `native`
//! declarations:
//! - **Model**: the serialized reflection view of a class (`model` module)
//! - **Translator**: reflective type expressions to Frege type text (`translate`)
//! - **Signatures**: constructors, methods and fields as typed signatures (`signature`)
//! - **Classifier**: minimal effect level per signature (`classify`)
//! - **Renderer**: overload groups and the final declaration block (`render`, `generate`)
//!
//! # Example
//!
//! ```rust,ignore
//! use nativegen_engine::{ClassMetadata, Generator, KnownTypes};
//!
//! let class = ClassMetadata::from_file("models/java.util.ArrayList.json".as_ref())?;
//! let known = KnownTypes::new();
//! println!("{}", Generator::new(&class, &known).generate());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod classify;
pub mod error;
pub mod generate;
pub mod model;
pub mod purity;
pub mod registry;
pub mod render;
pub mod signature;
pub mod translate;
pub mod ty;

pub use classify::{classify, classify_all, required_level};
pub use error::ModelError;
pub use generate::Generator;
pub use model::{ClassMetadata, ClassRef, ConstructorInfo, FieldInfo, MethodInfo, Modifiers, ReflectedType};
pub use purity::Purity;
pub use registry::{KnownType, KnownTypes};
pub use render::{group_by_name, OverloadGroup};
pub use signature::{MemberKind, Signature, SignatureBuilder, CONSTRUCTOR_NAME};
pub use translate::Translator;
pub use ty::{parenthesize, TargetType};
