//! Rendering synthesized declarations as TypeScript interfaces.

use yapit_codegen::{
    builder::{CodeFragment, Renderable},
    language::TypeMapper,
    synth::DeclarationRenderer,
};
use yapit_ir::TypeDeclaration;

use crate::{
    ast::{Interface, InterfaceField},
    type_mapper::TypeScriptTypeMapper,
};

/// Renders each declaration as an exported `interface`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceRenderer;

impl InterfaceRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Build the interface AST for one declaration.
    pub fn interface(&self, declaration: &TypeDeclaration) -> Interface {
        let mapper = TypeScriptTypeMapper;
        let mut interface = Interface::new(&declaration.name);
        if let Some(doc) = &declaration.doc {
            interface = interface.doc(doc);
        }

        declaration.fields.iter().fold(interface, |interface, field| {
            let mut ts_field = InterfaceField::new(&field.name, mapper.render_type(&field.ty));
            if field.optional {
                ts_field = ts_field.optional();
            }
            if let Some(doc) = &field.doc {
                ts_field = ts_field.doc(doc);
            }
            interface.field_with(ts_field)
        })
    }
}

impl DeclarationRenderer for InterfaceRenderer {
    fn render_declaration(&self, declaration: &TypeDeclaration) -> Vec<CodeFragment> {
        self.interface(declaration).to_fragments()
    }
}
