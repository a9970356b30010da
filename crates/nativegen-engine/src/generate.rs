//! Class-level generation
//!
//! Produces the full `data ... = native ... where` block for one class.

use tracing::debug;

use crate::classify::classify_all;
use crate::model::ClassMetadata;
use crate::registry::KnownTypes;
use crate::render::{group_by_name, render_group, INDENT};
use crate::signature::{Signature, SignatureBuilder};
use crate::translate::Translator;

/// Generates Frege declarations for one class
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    class: &'a ClassMetadata,
    builder: SignatureBuilder<'a>,
}

impl<'a> Generator<'a> {
    /// Create a generator for `class` using the overrides in `known`
    pub fn new(class: &'a ClassMetadata, known: &'a KnownTypes) -> Self {
        Self {
            class,
            builder: SignatureBuilder::new(Translator::new(known), class),
        }
    }

    /// Unclassified signatures of the public constructors
    pub fn constructors(&self) -> Vec<Signature> {
        self.class
            .public_constructors()
            .map(|con| self.builder.constructor(con))
            .collect()
    }

    /// Unclassified signatures of the public methods
    pub fn methods(&self) -> Vec<Signature> {
        self.class
            .public_methods()
            .map(|method| self.builder.method(method))
            .collect()
    }

    /// Unclassified signatures of the public fields
    pub fn fields(&self) -> Vec<Signature> {
        self.class
            .public_fields()
            .map(|field| self.builder.field(field))
            .collect()
    }

    /// `data ArrayList e = native java.util.ArrayList where`
    pub fn header(&self) -> String {
        let receiver = self.builder.receiver();
        format!(
            "data {} = {}native {} where",
            receiver.text,
            if receiver.purity.is_pure() { "pure " } else { "" },
            self.class.class.canonical_name()
        )
    }

    /// Render the whole declaration block
    pub fn generate(&self) -> String {
        let fields = classify_all(&self.fields());
        let constructors = classify_all(&self.constructors());
        let methods = classify_all(&self.methods());
        debug!(
            class = %self.class.class.name,
            fields = fields.len(),
            constructors = constructors.len(),
            methods = methods.len(),
            "generating declarations"
        );

        let mut output = self.header();
        output.push_str("\n\n");

        for field in &fields {
            output.push_str(INDENT);
            output.push_str(&field.to_string());
            output.push('\n');
        }
        if !fields.is_empty() {
            output.push('\n');
        }

        output.push_str(&render_group(constructors));
        for (_, group) in group_by_name(methods) {
            output.push_str(&render_group(group));
        }
        output
    }
}
