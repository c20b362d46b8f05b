//! Schema traversal into named declarations.
//!
//! The walker never fails on missing or malformed input: a root that is not
//! an object with properties still produces a declaration with zero fields.
//! The only error it returns is a name collision under
//! [`CollisionPolicy::Reject`](yapit_manifest::CollisionPolicy::Reject).

use yapit_ir::{Field, Parameter, Payload, SchemaKind, SchemaNode, TypeDeclaration};

use super::{
    allocator::{NameAllocator, NamingError},
    resolver::{PropertySpec, Resolution, resolve},
};
use crate::diagnostic::{Diagnostic, Phase};

/// Suffix for declarations synthesized from array elements.
const ITEM_SUFFIX: &str = "Item";

#[derive(Debug, Clone)]
struct Node {
    declaration: TypeDeclaration,
    children: Vec<usize>,
}

/// Declarations discovered from one root, in discovery order.
///
/// Index 0 is the root. Each node records the nested declarations it
/// directly contains.
#[derive(Debug, Clone)]
pub struct DeclarationTree {
    nodes: Vec<Node>,
}

impl DeclarationTree {
    fn with_root(declaration: TypeDeclaration) -> Self {
        Self {
            nodes: vec![Node {
                declaration,
                children: Vec::new(),
            }],
        }
    }

    fn push(&mut self, parent: usize, declaration: TypeDeclaration) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            declaration,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(index);
        index
    }

    pub const ROOT: usize = 0;

    pub fn root(&self) -> &TypeDeclaration {
        &self.nodes[Self::ROOT].declaration
    }

    pub fn declaration(&self, index: usize) -> &TypeDeclaration {
        &self.nodes[index].declaration
    }

    /// Indices of the declarations nested directly in `index`, in discovery order.
    pub fn children(&self, index: usize) -> &[usize] {
        &self.nodes[index].children
    }

    /// All declarations in discovery order.
    pub fn declarations(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.nodes.iter().map(|node| &node.declaration)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDeclaration> {
        self.declarations().find(|decl| decl.name == name)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Walk any payload shape.
///
/// [`Payload::None`] and [`Payload::Malformed`] both produce an empty root;
/// the latter is also reported.
pub fn walk_payload(
    payload: &Payload,
    root_name: String,
    names: &mut NameAllocator,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<DeclarationTree, NamingError> {
    match payload {
        Payload::Schema(node) => walk_schema(node, root_name, names, diagnostics),
        Payload::Query(params) | Payload::Form(params) => {
            walk_parameters(params, root_name, names, diagnostics)
        }
        Payload::Malformed { reason } => {
            let name = names.allocate(root_name)?;
            tracing::warn!(declaration = %name, %reason, "body schema unreadable, emitting empty declaration");
            diagnostics.push(
                Diagnostic::warning(
                    Phase::Schema,
                    format!("body schema could not be parsed ({reason}); declaration is empty"),
                )
                .at(&name),
            );
            Ok(DeclarationTree::with_root(TypeDeclaration::new(name)))
        }
        Payload::None => Ok(DeclarationTree::with_root(TypeDeclaration::new(
            names.allocate(root_name)?,
        ))),
    }
}

/// Walk a schema tree rooted at `root`.
pub fn walk_schema(
    root: &SchemaNode,
    root_name: String,
    names: &mut NameAllocator,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<DeclarationTree, NamingError> {
    let name = names.allocate(root_name)?;
    let mut tree = DeclarationTree::with_root(
        TypeDeclaration::new(name.clone()).with_doc(root.description.clone()),
    );

    match root.kind() {
        SchemaKind::Object => {
            fill_object(&mut tree, DeclarationTree::ROOT, root, names, diagnostics)?;
        }
        kind => {
            tracing::debug!(declaration = %name, kind = kind.as_str(), "root schema is not an object");
            diagnostics.push(
                Diagnostic::warning(
                    Phase::Schema,
                    format!("root schema is {}, not an object; declaration is empty", kind.as_str()),
                )
                .at(&name),
            );
        }
    }
    Ok(tree)
}

/// Turn a parameter list into one flat declaration.
pub fn walk_parameters(
    params: &[Parameter],
    root_name: String,
    names: &mut NameAllocator,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<DeclarationTree, NamingError> {
    let name = names.allocate(root_name)?;
    let fields = params
        .iter()
        .map(|param| {
            let resolution = resolve(PropertySpec::Parameter(param), None);
            note_resolution(&resolution, &name, &param.name, diagnostics);
            Field::new(&param.name, resolution.ty)
                .optional(!param.required)
                .doc(param.description.clone())
        })
        .collect();

    let mut declaration = TypeDeclaration::new(name);
    declaration.fields = fields;
    Ok(DeclarationTree::with_root(declaration))
}

fn fill_object(
    tree: &mut DeclarationTree,
    index: usize,
    node: &SchemaNode,
    names: &mut NameAllocator,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), NamingError> {
    let parent = tree.declaration(index).name.clone();
    let mut fields = Vec::with_capacity(node.properties.len());

    for (position, (key, prop)) in node.properties.iter().enumerate() {
        let composite = composite_target(prop);
        let child = match composite {
            Some((_, is_item)) => {
                let word = key_word(names, &parent, key, position, diagnostics);
                let suffix = if is_item { ITEM_SUFFIX } else { "" };
                Some(names.allocate(format!("{parent}{word}{suffix}"))?)
            }
            None => None,
        };

        let resolution = resolve(PropertySpec::Schema(prop), child.as_deref());
        note_resolution(&resolution, &parent, key, diagnostics);

        if let (Some((target, _)), Some(child)) = (composite, child) {
            let child_index = tree.push(
                index,
                TypeDeclaration::new(child).with_doc(target.description.clone()),
            );
            fill_object(tree, child_index, target, names, diagnostics)?;
        }

        fields.push(
            Field::new(key, resolution.ty)
                .optional(!node.requires(key))
                .doc(prop.description.clone()),
        );
    }

    tree.nodes[index].declaration.fields = fields;
    Ok(())
}

/// Type-name word for a property key, or `Field{n}` (1-based) when the key
/// has no identifier characters.
fn key_word(
    names: &NameAllocator,
    parent: &str,
    key: &str,
    position: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let word = names.naming().key_word(key);
    if !word.is_empty() {
        return word;
    }
    let fallback = format!("Field{}", position + 1);
    tracing::warn!(declaration = %parent, key, %fallback, "property key yields no type name");
    diagnostics.push(
        Diagnostic::warning(
            Phase::Naming,
            format!("key '{key}' has no identifier characters; using '{fallback}'"),
        )
        .at(format!("{parent}.{key}")),
    );
    fallback
}

/// The object a property needs its own declaration for, and whether it is
/// reached through an array.
fn composite_target(node: &SchemaNode) -> Option<(&SchemaNode, bool)> {
    if node.is_composite() {
        return Some((node, false));
    }
    let mut current = node;
    while current.kind() == SchemaKind::Array {
        current = current.items.as_deref()?;
    }
    (!std::ptr::eq(current, node) && current.is_composite()).then_some((current, true))
}

fn note_resolution(
    resolution: &Resolution,
    declaration: &str,
    field: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let location = format!("{declaration}.{field}");
    if resolution.ty.is_unknown() {
        diagnostics.push(
            Diagnostic::info(Phase::Resolve, "no type could be inferred").at(location),
        );
    } else if resolution.lossy {
        diagnostics.push(
            Diagnostic::info(
                Phase::Resolve,
                "64-bit integer may lose precision in the target representation",
            )
            .at(location),
        );
    }
}
