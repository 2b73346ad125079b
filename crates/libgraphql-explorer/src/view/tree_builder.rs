use crate::ast::operation::Document;
use crate::defaults::ScalarCoercion;
use crate::explorer::ExplorerConfig;
use crate::explorer::ExplorerPath;
use crate::explorer::FoundNode;
use crate::explorer::lookup;
use crate::operation::OperationKind;
use crate::plugins::ControlTarget;
use crate::plugins::InputKind;
use crate::plugins::RenderedControl;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValueTrait;
use crate::view::ExplorerNode;
use crate::view::ExplorerNodeKind;
use crate::view::ExplorerTree;

pub(crate) struct TreeBuilder<'a> {
    config: &'a ExplorerConfig,
    document: &'a Document,
    schema: &'a Schema,
}
impl<'a> TreeBuilder<'a> {
    pub fn build(&self, kind: OperationKind) -> Option<ExplorerTree> {
        let root_type = self.schema.root_type(&kind)?;
        Some(ExplorerTree {
            kind,
            nodes: self.selection_nodes(&ExplorerPath::root(kind), root_type),
            root_type_name: root_type.name().to_string(),
        })
    }

    pub fn new(schema: &'a Schema, config: &'a ExplorerConfig, document: &'a Document) -> Self {
        Self {
            config,
            document,
            schema,
        }
    }

    fn builtin_control(&self, target: &ControlTarget<'_>) -> RenderedControl {
        let coercion = match target.leaf_type {
            GraphQLType::Scalar(scalar_type) =>
                self.config.encoder().scalar_coercion(scalar_type.name()),
            _ => None,
        };

        let input_kind = match (target.leaf_type, coercion) {
            (GraphQLType::Enum(enum_type), _) => InputKind::Select {
                options: enum_type.values()
                    .iter()
                    .map(|value| value.name().to_string())
                    .collect(),
            },
            (GraphQLType::Bool, _) | (_, Some(ScalarCoercion::Boolean)) =>
                InputKind::Checkbox,
            (GraphQLType::Float | GraphQLType::Int, _)
            | (_, Some(ScalarCoercion::Float | ScalarCoercion::Int)) =>
                InputKind::Number,
            _ => InputKind::Text,
        };
        RenderedControl::new(target, input_kind, self.config.control_style())
    }

    fn field_node(&self, path: ExplorerPath, field: &Field) -> ExplorerNode {
        let selected = lookup(self.document, &path).is_some();

        let mut children = vec![];
        if selected {
            for param in field.parameters().values() {
                children.push(self.input_value_node(
                    path.to_owned().argument(param.name()),
                    ExplorerNodeKind::Argument,
                    param,
                ));
            }
            if let Some(field_type) = field.type_annotation().innermost_type(self.schema) {
                children.extend(self.selection_nodes(&path, field_type));
            }
        }

        ExplorerNode {
            children,
            control: None,
            kind: ExplorerNodeKind::Field,
            name: field.name().to_string(),
            path,
            selected,
            type_annotation: field.type_annotation().to_string(),
        }
    }

    fn input_value_node(
        &self,
        path: ExplorerPath,
        kind: ExplorerNodeKind,
        input_value: &dyn InputValueTrait,
    ) -> ExplorerNode {
        let value = match lookup(self.document, &path) {
            Some(FoundNode::InputValue(value)) => Some(value),
            _ => None,
        };

        let annot = input_value.type_annotation();
        let value_type = if annot.is_list() {
            None
        } else {
            annot.innermost_type(self.schema)
        };

        let mut children = vec![];
        let mut control = None;
        if let Some(value) = value {
            match value_type {
                Some(GraphQLType::InputObject(input_object)) => {
                    for input_field in input_object.fields().values() {
                        children.push(self.input_value_node(
                            path.to_owned().input_field(input_field.name()),
                            ExplorerNodeKind::InputField,
                            input_field,
                        ));
                    }
                },

                Some(leaf_type) if leaf_type.is_leaf() => {
                    let target = ControlTarget {
                        input_value,
                        leaf_type,
                        path: &path,
                        value,
                    };
                    control = Some(
                        self.config.input_controls()
                            .process(&target, self.config.control_style())
                            .unwrap_or_else(|| self.builtin_control(&target)),
                    );
                },

                _ => (),
            }
        }

        ExplorerNode {
            children,
            control,
            kind,
            name: input_value.name().to_string(),
            path,
            selected: value.is_some(),
            type_annotation: annot.to_string(),
        }
    }

    /// The subfields of `parent_type` followed, for abstract types, by one
    /// fragment entry per possible type.
    fn selection_nodes(&self, parent_path: &ExplorerPath, parent_type: &GraphQLType) -> Vec<ExplorerNode> {
        let mut nodes: Vec<ExplorerNode> = parent_type.fields()
            .map(|fields| {
                fields.values()
                    .map(|field| self.field_node(parent_path.to_owned().field(field.name()), field))
                    .collect()
            })
            .unwrap_or_default();

        if parent_type.is_abstract() {
            for possible_type in self.schema.possible_types(parent_type.name()) {
                let path = parent_path.to_owned().fragment(possible_type.name());
                let selected = lookup(self.document, &path).is_some();
                let children = if selected {
                    possible_type.fields()
                        .values()
                        .map(|field| self.field_node(path.to_owned().field(field.name()), field))
                        .collect()
                } else {
                    vec![]
                };

                nodes.push(ExplorerNode {
                    children,
                    control: None,
                    kind: ExplorerNodeKind::Fragment,
                    name: possible_type.name().to_string(),
                    path,
                    selected,
                    type_annotation: possible_type.name().to_string(),
                });
            }
        }

        nodes
    }
}
