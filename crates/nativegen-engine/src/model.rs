//! Reflective class model
//!
//! The view of one JVM class as reported by `java.lang.reflect`: its
//! constructors, methods and fields with their generic signatures. The model
//! is produced by an external dumper and read here from JSON.
//!
//! Class names are JVM binary names (`java.util.Map$Entry`, `[I`,
//! `[Ljava.lang.String;`), the same form `Class.getName()` reports.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ModelError;

/// Binary name of `java.lang.Object`
pub const OBJECT: &str = "java.lang.Object";
/// Binary name of `java.lang.Object[]`
pub const OBJECT_ARRAY: &str = "[Ljava.lang.Object;";
/// Name of the `void` pseudo-class
pub const VOID: &str = "void";
/// Root of all exceptions a caller can be forced to handle
pub const EXCEPTION: &str = "java.lang.Exception";
/// Root of the unchecked exceptions
pub const RUNTIME_EXCEPTION: &str = "java.lang.RuntimeException";

/// Primitive class names and their array descriptor codes
pub const PRIMITIVES: [(&str, char); 9] = [
    ("boolean", 'Z'),
    ("byte", 'B'),
    ("char", 'C'),
    ("short", 'S'),
    ("int", 'I'),
    ("long", 'J'),
    ("float", 'F'),
    ("double", 'D'),
    ("void", 'V'),
];

/// Descriptor code of a primitive class name, if it is one
pub fn primitive_code(name: &str) -> Option<char> {
    PRIMITIVES
        .iter()
        .find(|(primitive, _)| *primitive == name)
        .map(|(_, code)| *code)
}

/// Primitive class name for a descriptor code
pub fn primitive_name(code: char) -> Option<&'static str> {
    PRIMITIVES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Reference to a raw (non-generic) class.
///
/// When a model omits `component` or `member`, both are recovered from the
/// binary name, so `{"name": "[I"}` is still an array class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawClassRef")]
pub struct ClassRef {
    /// Binary name
    pub name: String,
    /// Whether this is a member (nested) class
    pub member: bool,
    /// Component class for array classes
    pub component: Option<Box<ClassRef>>,
    /// Binary names of all supertypes (superclasses and interfaces)
    pub supertypes: Vec<String>,
}

/// `ClassRef` as written in the model, before normalization
#[derive(Deserialize)]
struct RawClassRef {
    name: String,
    #[serde(default)]
    member: Option<bool>,
    #[serde(default)]
    component: Option<Box<ClassRef>>,
    #[serde(default)]
    supertypes: Vec<String>,
}

impl TryFrom<RawClassRef> for ClassRef {
    type Error = String;

    fn try_from(raw: RawClassRef) -> Result<Self, Self::Error> {
        let mut class = match raw.component {
            Some(component) => ClassRef {
                name: raw.name,
                member: false,
                component: Some(component),
                supertypes: Vec::new(),
            },
            None => match ClassRef::parse(&raw.name) {
                Some(parsed) => parsed,
                None if raw.name.starts_with('[') => {
                    return Err(format!("malformed array descriptor '{}'", raw.name))
                }
                // Unparseable plain names stay opaque
                None => ClassRef::named(raw.name),
            },
        };
        if let Some(member) = raw.member {
            class.member = member;
        }
        class.supertypes = raw.supertypes;
        Ok(class)
    }
}

impl ClassRef {
    /// Parse a binary name (`int`, `[Ljava.lang.String;`, `java.util.Map$Entry`).
    ///
    /// Returns `None` if it is not well formed. A `$` inside the simple name
    /// marks a member class.
    pub fn parse(name: &str) -> Option<ClassRef> {
        if primitive_code(name).is_some() {
            return Some(ClassRef::named(name));
        }
        match name.strip_prefix('[') {
            Some(component) => parse_component(component).map(ClassRef::array_of),
            None => parse_binary_name(name),
        }
    }

    /// A top-level class or primitive
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member: false,
            component: None,
            supertypes: Vec::new(),
        }
    }

    /// A member class, e.g. `java.util.Locale$Builder`
    pub fn member(name: impl Into<String>) -> Self {
        Self {
            member: true,
            ..Self::named(name)
        }
    }

    /// The array class whose elements are `component`
    pub fn array_of(component: ClassRef) -> Self {
        let name = if component.is_array() {
            format!("[{}", component.name)
        } else if let Some(code) = primitive_code(&component.name) {
            format!("[{}", code)
        } else {
            format!("[L{};", component.name)
        };
        Self {
            name,
            member: false,
            component: Some(Box::new(component)),
            supertypes: Vec::new(),
        }
    }

    /// Attach the supertype names
    pub fn with_supertypes<I, S>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes = supertypes.into_iter().map(Into::into).collect();
        self
    }

    /// Check if this is an array class
    pub fn is_array(&self) -> bool {
        self.component.is_some()
    }

    /// Name without its package prefix (`Map$Entry` for `java.util.Map$Entry`)
    pub fn unqualified_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(pos) => &self.name[pos + 1..],
            None => &self.name,
        }
    }

    /// Source-level name (`java.util.Map.Entry`, `int[]`)
    pub fn canonical_name(&self) -> String {
        match &self.component {
            Some(component) => format!("{}[]", component.canonical_name()),
            None if self.member => self.name.replace('$', "."),
            None => self.name.clone(),
        }
    }

    /// Check if this class is `name` or extends/implements it
    pub fn is_subclass_of(&self, name: &str) -> bool {
        self.name == name || self.supertypes.iter().any(|s| s == name)
    }

    /// Check if this is an exception type callers are forced to handle
    pub fn is_checked_exception(&self) -> bool {
        self.is_subclass_of(EXCEPTION) && !self.is_subclass_of(RUNTIME_EXCEPTION)
    }
}

/// Component part of an array descriptor, after one `[`
fn parse_component(descriptor: &str) -> Option<ClassRef> {
    if let Some(nested) = descriptor.strip_prefix('[') {
        return parse_component(nested).map(ClassRef::array_of);
    }
    if let Some(object) = descriptor.strip_prefix('L') {
        return object.strip_suffix(';').and_then(parse_binary_name);
    }
    let mut chars = descriptor.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) if code != 'V' => primitive_name(code).map(ClassRef::named),
        _ => None,
    }
}

fn parse_binary_name(name: &str) -> Option<ClassRef> {
    if !name.split('.').all(is_identifier) {
        return None;
    }
    let simple = name.rsplit('.').next().unwrap_or(name);
    let is_member = simple
        .find('$')
        .is_some_and(|pos| pos > 0 && pos + 1 < simple.len());
    Some(if is_member {
        ClassRef::member(name)
    } else {
        ClassRef::named(name)
    })
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// A reflective type expression (`java.lang.reflect.Type`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReflectedType {
    /// Type variable: `E`
    TypeVariable {
        /// Declared variable name
        name: String,
    },

    /// Wildcard: `? extends A`, `? super B`
    Wildcard {
        /// Upper bounds (only the first one is used)
        #[serde(default)]
        upper_bounds: Vec<ReflectedType>,
        /// Lower bounds
        #[serde(default)]
        lower_bounds: Vec<ReflectedType>,
    },

    /// Array whose component is generic: `T[]`, `List<String>[]`
    GenericArray {
        /// Component type
        component: Box<ReflectedType>,
    },

    /// Generic instantiation: `Map<K, List<V>>`
    Parameterized {
        /// Raw class
        raw: ClassRef,
        /// Actual type arguments
        #[serde(default)]
        arguments: Vec<ReflectedType>,
    },

    /// Plain class, interface, primitive or array class
    Class(ClassRef),

    /// Any type kind the model does not know about
    #[serde(other)]
    Other,
}

impl ReflectedType {
    /// Plain class reference by binary name
    pub fn class(name: impl Into<String>) -> Self {
        ReflectedType::Class(ClassRef::named(name))
    }

    /// Type variable reference
    pub fn var(name: impl Into<String>) -> Self {
        ReflectedType::TypeVariable { name: name.into() }
    }

    /// Generic instantiation of `raw`
    pub fn parameterized(raw: ClassRef, arguments: Vec<ReflectedType>) -> Self {
        ReflectedType::Parameterized { raw, arguments }
    }

    /// `? extends bound`
    pub fn wildcard(bound: ReflectedType) -> Self {
        ReflectedType::Wildcard {
            upper_bounds: vec![bound],
            lower_bounds: Vec::new(),
        }
    }

    /// Array of a generic component
    pub fn generic_array(component: ReflectedType) -> Self {
        ReflectedType::GenericArray {
            component: Box::new(component),
        }
    }

    /// Check if this is a type variable
    pub fn is_type_variable(&self) -> bool {
        matches!(self, ReflectedType::TypeVariable { .. })
    }
}

/// Access modifiers relevant to code generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// `public`
    pub public: bool,
    /// `static`
    #[serde(rename = "static")]
    pub is_static: bool,
}

impl Modifiers {
    /// `public`, non-static
    pub fn public() -> Self {
        Self {
            public: true,
            is_static: false,
        }
    }

    /// `public static`
    pub fn public_static() -> Self {
        Self {
            public: true,
            is_static: true,
        }
    }
}

/// Constructor information
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConstructorInfo {
    /// Modifiers
    #[serde(flatten)]
    pub modifiers: Modifiers,
    /// Generic parameter types
    #[serde(default)]
    pub parameters: Vec<ReflectedType>,
    /// Generic declared exception types
    #[serde(default)]
    pub exceptions: Vec<ReflectedType>,
    /// Compiler-generated
    #[serde(default)]
    pub synthetic: bool,
}

/// Method information
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Modifiers
    #[serde(flatten)]
    pub modifiers: Modifiers,
    /// Generic parameter types
    #[serde(default)]
    pub parameters: Vec<ReflectedType>,
    /// Generic return type
    pub return_type: ReflectedType,
    /// Generic declared exception types
    #[serde(default)]
    pub exceptions: Vec<ReflectedType>,
    /// Compiler-generated
    #[serde(default)]
    pub synthetic: bool,
    /// Compiler-generated bridge for generic overriding
    #[serde(default)]
    pub bridge: bool,
}

/// Field information
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldInfo {
    /// Field name
    pub name: String,
    /// Modifiers
    #[serde(flatten)]
    pub modifiers: Modifiers,
    /// Generic field type
    #[serde(rename = "type")]
    pub ty: ReflectedType,
    /// Compiler-generated
    #[serde(default)]
    pub synthetic: bool,
}

/// Reflection metadata for a single class
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassMetadata {
    /// The class itself
    #[serde(flatten)]
    pub class: ClassRef,
    /// Declared type parameter names, in order
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Declared constructors
    #[serde(default)]
    pub constructors: Vec<ConstructorInfo>,
    /// Declared methods
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
    /// Declared fields
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
}

impl ClassMetadata {
    /// Create metadata with no members
    pub fn new(class: ClassRef) -> Self {
        Self {
            class,
            type_parameters: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Parse metadata from a file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse metadata from a JSON string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Path of the metadata file for `class_name` inside `dir`
    pub fn locate(dir: &Path, class_name: &str) -> PathBuf {
        dir.join(format!("{}.json", class_name))
    }

    /// Load the metadata for `class_name` from `dir`
    pub fn load(dir: &Path, class_name: &str) -> Result<Self, ModelError> {
        let path = Self::locate(dir, class_name);
        if !path.is_file() {
            return Err(ModelError::NotFound {
                class: class_name.to_string(),
                path,
            });
        }
        Self::from_file(&path)
    }

    /// Public, non-synthetic constructors
    pub fn public_constructors(&self) -> impl Iterator<Item = &ConstructorInfo> {
        self.constructors
            .iter()
            .filter(|c| !c.synthetic && c.modifiers.public)
    }

    /// Public methods that are neither synthetic nor bridges
    pub fn public_methods(&self) -> impl Iterator<Item = &MethodInfo> {
        self.methods
            .iter()
            .filter(|m| !m.synthetic && !m.bridge && m.modifiers.public)
    }

    /// Public, non-synthetic fields
    pub fn public_fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields
            .iter()
            .filter(|f| !f.synthetic && f.modifiers.public)
    }
}
