//! Reflective types to Frege types
//!
//! Every reflective type kind maps to a type application in Frege syntax
//! (`Map k (List v)`) plus the intrinsic purity of the head type. The
//! translation is total: unknown kinds fall back to `Object`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::model::{ClassRef, ReflectedType, OBJECT, OBJECT_ARRAY};
use crate::purity::Purity;
use crate::registry::KnownTypes;
use crate::ty::{parenthesize, TargetType};

/// First run of word characters in a rendered type
static HEAD_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("head word pattern is valid"));

/// Suffix for array types
const ARRAY_SUFFIX: &str = "Arr";

/// Translates reflective types against a registry of known types
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    known: &'a KnownTypes,
}

impl<'a> Translator<'a> {
    /// Create a translator reading overrides from `known`
    pub fn new(known: &'a KnownTypes) -> Self {
        Self { known }
    }

    /// Translate one reflective type
    pub fn translate(&self, ty: &ReflectedType) -> TargetType {
        let target = match ty {
            ReflectedType::TypeVariable { name } => self.translate_type_variable(name),
            ReflectedType::Wildcard { upper_bounds, .. } => match upper_bounds.first() {
                // Additional bounds are ignored
                Some(bound) => self.translate(bound),
                None => TargetType::object(),
            },
            ReflectedType::GenericArray { component } => self.translate_generic_array(component),
            ReflectedType::Parameterized { raw, arguments } => {
                self.translate_parameterized(raw, arguments)
            }
            ReflectedType::Class(class) => self.translate_class(class),
            ReflectedType::Other => TargetType::object(),
        };
        trace!(text = %target.text, purity = %target.purity, "translated type");
        target
    }

    /// Translate a list of reflective types, preserving order
    pub fn translate_all(&self, types: &[ReflectedType]) -> Vec<TargetType> {
        types.iter().map(|ty| self.translate(ty)).collect()
    }

    /// Translate a raw class, consulting the registry first
    pub fn translate_class(&self, class: &ClassRef) -> TargetType {
        // Arrays are mutable whatever the registry says
        let forced = class.is_array().then_some(Purity::St);
        match self.known.get(&class.name) {
            Some(known) => TargetType::new(
                known.name.clone(),
                class.name.clone(),
                forced.unwrap_or(known.purity),
            ),
            None => TargetType::new(
                self.default_name(class),
                class.name.clone(),
                forced.unwrap_or(Purity::Pure),
            ),
        }
    }

    /// The type of `class` applied to its own type parameters (`ArrayList e`)
    pub fn receiver(&self, class: &ClassRef, type_parameters: &[String]) -> TargetType {
        let base = self.translate_class(class);
        if type_parameters.is_empty() {
            return base;
        }
        let params: Vec<String> = type_parameters
            .iter()
            .map(|name| self.translate_type_variable(name).text)
            .collect();
        base.with_text(format!("{} {}", base.text, params.join(" ")))
    }

    fn translate_type_variable(&self, name: &str) -> TargetType {
        TargetType::new(name.to_lowercase(), OBJECT, Purity::Pure)
    }

    fn translate_parameterized(&self, raw: &ClassRef, arguments: &[ReflectedType]) -> TargetType {
        let head = self.translate_class(raw);
        if arguments.is_empty() {
            return head;
        }
        let args: Vec<String> = arguments
            .iter()
            .map(|arg| parenthesize(&self.translate(arg).text).into_owned())
            .collect();
        head.with_text(format!("{} {}", head.text, args.join(" ")))
    }

    fn translate_generic_array(&self, component: &ReflectedType) -> TargetType {
        let text = if component.is_type_variable() {
            format!("Object{}", ARRAY_SUFFIX)
        } else {
            let element = self.translate(component);
            HEAD_WORD
                .replace(&element.text, format!("${{0}}{}", ARRAY_SUFFIX).as_str())
                .into_owned()
        };
        TargetType::new(text, OBJECT_ARRAY, Purity::St)
    }

    fn default_name(&self, class: &ClassRef) -> String {
        match &class.component {
            Some(component) => format!("{}{}", self.translate_class(component).text, ARRAY_SUFFIX),
            None if class.member => class.unqualified_name().replace('$', "_"),
            None => class.unqualified_name().to_string(),
        }
    }
}
