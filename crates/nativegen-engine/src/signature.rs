//! Member signatures
//!
//! A [`Signature`] is one constructor, method or field seen as a Frege
//! function: parameter types, a return type and the checked exceptions it
//! may throw. Signatures built here are not yet purity-adjusted; see
//! [`crate::classify`].

use std::borrow::Cow;
use std::fmt;

use crate::model::{ClassMetadata, ConstructorInfo, FieldInfo, MethodInfo, ReflectedType};
use crate::purity::Purity;
use crate::translate::Translator;
use crate::ty::TargetType;

/// Logical name shared by all constructors
pub const CONSTRUCTOR_NAME: &str = "new";

/// What kind of member a signature was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Constructor
    Constructor,
    /// Method
    Method {
        /// Declared `static`
        is_static: bool,
    },
    /// Field accessor
    Field {
        /// Declared `static`
        is_static: bool,
    },
}

/// A member as a Frege function type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Parameter types; the receiver comes first for instance members
    pub params: Vec<TargetType>,
    /// Return type
    pub return_type: TargetType,
    /// Checked exceptions
    pub exceptions: Vec<TargetType>,
    /// Name used for grouping overloads
    pub name: String,
    /// Name of the JVM member to link against
    pub native_name: String,
    /// Kind of member
    pub kind: MemberKind,
    /// Level assigned by the classifier, if it has run
    pub effect: Option<Purity>,
}

impl Signature {
    /// Create an unclassified signature whose native name equals its name
    pub fn new(
        params: Vec<TargetType>,
        return_type: TargetType,
        exceptions: Vec<TargetType>,
        name: impl Into<String>,
        kind: MemberKind,
    ) -> Self {
        let name = name.into();
        Self {
            params,
            return_type,
            exceptions,
            native_name: name.clone(),
            name,
            kind,
            effect: None,
        }
    }

    /// Use a different JVM member name as link target
    pub fn with_native_name(mut self, native_name: impl Into<String>) -> Self {
        self.native_name = native_name.into();
        self
    }

    /// Replace the parameter types
    pub fn with_params(&self, params: Vec<TargetType>) -> Self {
        Self {
            params,
            ..self.clone()
        }
    }

    /// Replace the return type
    pub fn with_return_type(&self, return_type: TargetType) -> Self {
        Self {
            return_type,
            ..self.clone()
        }
    }

    /// Check if this is a constructor
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    /// Check if this reads a field of a live object
    pub fn is_instance_field(&self) -> bool {
        matches!(self.kind, MemberKind::Field { is_static: false })
    }

    /// Name followed by the native name when the two differ
    pub fn head(&self) -> Cow<'_, str> {
        if self.name == self.native_name {
            Cow::Borrowed(&self.name)
        } else {
            Cow::Owned(format!("{} {}", self.name, self.native_name))
        }
    }

    /// The Frege function type: `A -> B -> R throws E`
    pub fn type_text(&self) -> String {
        let mut text = String::new();
        for param in &self.params {
            text.push_str(&param.text);
            text.push_str(" -> ");
        }
        text.push_str(&self.return_type.text);
        if !self.exceptions.is_empty() {
            let exceptions: Vec<&str> = self.exceptions.iter().map(|e| e.text.as_str()).collect();
            text.push_str(" throws ");
            text.push_str(&exceptions.join(", "));
        }
        text
    }
}

/// Single declaration line: `[pure ]native name[ native] :: type`
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.return_type.purity.is_pure() {
            "pure native"
        } else {
            "native"
        };
        write!(f, "{} {} :: {}", keyword, self.head(), self.type_text())
    }
}

fn uncapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep only checked exceptions; unchecked ones never reach a signature
pub fn filter_checked_exceptions(types: &[ReflectedType]) -> Vec<&ReflectedType> {
    types
        .iter()
        .filter(|ty| match ty {
            ReflectedType::Class(class) => class.is_checked_exception(),
            _ => false,
        })
        .collect()
}

/// Builds signatures for the members of one class
#[derive(Debug, Clone)]
pub struct SignatureBuilder<'a> {
    translator: Translator<'a>,
    class: &'a ClassMetadata,
    receiver: TargetType,
}

impl<'a> SignatureBuilder<'a> {
    /// Create a builder for `class`
    pub fn new(translator: Translator<'a>, class: &'a ClassMetadata) -> Self {
        let receiver = translator.receiver(&class.class, &class.type_parameters);
        Self {
            translator,
            class,
            receiver,
        }
    }

    /// The enclosing class applied to its type parameters
    pub fn receiver(&self) -> &TargetType {
        &self.receiver
    }

    /// Signature of a constructor
    pub fn constructor(&self, con: &ConstructorInfo) -> Signature {
        let params = if con.parameters.is_empty() {
            vec![TargetType::unit()]
        } else {
            self.translator.translate_all(&con.parameters)
        };
        Signature::new(
            params,
            self.receiver.clone(),
            self.checked_exceptions(&con.exceptions),
            CONSTRUCTOR_NAME,
            MemberKind::Constructor,
        )
    }

    /// Signature of a method
    pub fn method(&self, method: &MethodInfo) -> Signature {
        let is_static = method.modifiers.is_static;
        let mut params = Vec::with_capacity(method.parameters.len() + 1);
        if !is_static {
            params.push(self.receiver.clone());
        } else if method.parameters.is_empty() {
            params.push(TargetType::unit());
        }
        params.extend(self.translator.translate_all(&method.parameters));

        let signature = Signature::new(
            params,
            self.translator.translate(&method.return_type),
            self.checked_exceptions(&method.exceptions),
            uncapitalize(&method.name),
            MemberKind::Method { is_static },
        );
        if is_static {
            signature.with_native_name(self.static_reference(&method.name))
        } else {
            signature.with_native_name(method.name.clone())
        }
    }

    /// Signature of a field accessor
    pub fn field(&self, field: &FieldInfo) -> Signature {
        let is_static = field.modifiers.is_static;
        let params = if is_static {
            Vec::new()
        } else {
            vec![self.receiver.clone()]
        };
        let native_name = if is_static {
            self.static_reference(&field.name)
        } else {
            format!("\".{}\"", field.name)
        };
        Signature::new(
            params,
            self.translator.translate(&field.ty),
            Vec::new(),
            field.name.to_lowercase(),
            MemberKind::Field { is_static },
        )
        .with_native_name(native_name)
    }

    fn checked_exceptions(&self, exceptions: &[ReflectedType]) -> Vec<TargetType> {
        filter_checked_exceptions(exceptions)
            .into_iter()
            .map(|ty| self.translator.translate(ty))
            .collect()
    }

    fn static_reference(&self, member: &str) -> String {
        format!("{}.{}", self.class.class.canonical_name(), member)
    }
}
