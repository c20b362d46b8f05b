//! Linearizing declarations so nested types come first.

use yapit_ir::TypeDeclaration;

use super::walker::DeclarationTree;
use crate::builder::{CodeBuilder, CodeFragment};

/// Renders one declaration in a target language.
pub trait DeclarationRenderer {
    fn render_declaration(&self, declaration: &TypeDeclaration) -> Vec<CodeFragment>;
}

/// Declarations in output order.
///
/// Post-order over the tree with each container's children reversed: the
/// most recently discovered nested type sits immediately before its
/// container, and every child is preceded by its own nested types.
pub fn emission_order(tree: &DeclarationTree) -> Vec<&TypeDeclaration> {
    fn visit<'t>(tree: &'t DeclarationTree, index: usize, out: &mut Vec<&'t TypeDeclaration>) {
        for &child in tree.children(index).iter().rev() {
            visit(tree, child, out);
        }
        out.push(tree.declaration(index));
    }

    let mut out = Vec::with_capacity(tree.len());
    visit(tree, DeclarationTree::ROOT, &mut out);
    out
}

/// Render every declaration of `tree` into `builder`, separated by blank lines.
pub fn emit(tree: &DeclarationTree, renderer: &impl DeclarationRenderer, builder: &mut CodeBuilder) {
    for (i, declaration) in emission_order(tree).into_iter().enumerate() {
        if i > 0 {
            builder.push_blank();
        }
        for fragment in renderer.render_declaration(declaration) {
            builder.apply_fragment(fragment);
        }
    }
}
