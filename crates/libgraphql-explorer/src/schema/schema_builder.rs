use crate::ast;
use crate::file_reader;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// Type extensions may appear before the type they extend (e.g. in an earlier
/// file); they are applied once every source has been loaded.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<String>,
    pending_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    query_type: Option<String>,
    str_load_counter: u16,
    subscription_type: Option<String>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            let type_name = extension_type_name(&ext);
            let type_ = self.types_map_builder
                .get_type_mut(type_name)
                .ok_or_else(|| SchemaBuildError::ExtensionOfUndefinedType {
                    file: file_path.to_owned(),
                    type_name: type_name.to_string(),
                })?;
            TypeBuilderHelpers::apply_extension(type_, &ext)?;
        }

        let types = self.types_map_builder.into_types_map()?;

        let query_type = self.query_type.take().unwrap_or_else(|| "Query".to_string());
        match types.get(query_type.as_str()) {
            Some(GraphQLType::Object(_)) => (),
            Some(_) => return Err(SchemaBuildError::NonObjectOperationType {
                operation: OperationKind::Query,
                type_name: query_type,
            }),
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        }

        let mutation_type = resolve_optional_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type.take(),
            "Mutation",
        )?;

        let subscription_type = resolve_optional_root_type(
            &types,
            OperationKind::Subscription,
            self.subscription_type.take(),
            "Subscription",
        )?;

        Ok(Schema {
            query_type,
            mutation_type,
            subscription_type,
            types,
        })
    }

    /// Parse and build a [`Schema`] from a single SDL string.
    pub fn build_from_str(content: &str) -> Result<Schema> {
        Self::new().load_str(None, content)?.build()
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(mut self, file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(Some(file_path.to_path_buf()), file_content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(mut self, file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        log::debug!("Loading schema definitions from {file_path:?}.");
        let ast_doc =
            ast::schema::parse(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    fn visit_ast_def(&mut self, file_path: &Path, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(schema_def),

            Definition::TypeDefinition(type_def) => {
                let type_ = TypeBuilderHelpers::type_from_ast(&type_def)?;
                self.types_map_builder.add_new_type(type_)
            },

            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },

            // Directives play no part in building selections.
            Definition::DirectiveDefinition(directive_def) => {
                log::trace!("Skipping directive definition `@{}`.", directive_def.name);
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(&mut self, schema_def: ast::schema::SchemaDefinition) -> Result<()> {
        let roots = [
            (OperationKind::Query, schema_def.query, &mut self.query_type),
            (OperationKind::Mutation, schema_def.mutation, &mut self.mutation_type),
            (OperationKind::Subscription, schema_def.subscription, &mut self.subscription_type),
        ];
        for (operation, type_name, slot) in roots {
            let Some(type_name) = type_name else { continue };
            if slot.is_some() {
                return Err(SchemaBuildError::DuplicateOperationDefinition { operation });
            }
            *slot = Some(type_name);
        }

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let named_roots = [
            (OperationKind::Query, self.query_type.as_deref()),
            (OperationKind::Mutation, self.mutation_type.as_deref()),
            (OperationKind::Subscription, self.subscription_type.as_deref()),
        ];
        for (idx, (operation1, type_name1)) in named_roots.iter().enumerate() {
            for (operation2, type_name2) in &named_roots[idx + 1..] {
                if let (Some(type_name1), Some(type_name2)) = (type_name1, type_name2)
                    && type_name1 == type_name2 {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: type_name1.to_string(),
                        operation1: *operation1,
                        operation2: *operation2,
                    });
                }
            }
        }

        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extension_type_name(ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}

fn resolve_optional_root_type(
    types: &indexmap::IndexMap<String, GraphQLType>,
    operation: OperationKind,
    declared_name: Option<String>,
    default_name: &str,
) -> Result<Option<String>> {
    match declared_name {
        Some(type_name) => match types.get(type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(type_name)),
            Some(_) => Err(SchemaBuildError::NonObjectOperationType {
                operation,
                type_name,
            }),
            None => Err(SchemaBuildError::UndefinedOperationType {
                operation,
                type_name,
            }),
        },

        None => match types.get(default_name) {
            Some(GraphQLType::Object(_)) => Ok(Some(default_name.to_string())),
            _ => Ok(None),
        },
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple enum values named `{value_name}` were defined on the `{enum_name}` enum")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
    },

    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        field_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type was declared more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}` in {file:?}, but it is not defined elsewhere")]
    ExtensionOfUndefinedType {
        file: PathBuf,
        type_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}` using a different kind of type extension")]
    InvalidExtensionType {
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("The {operation} root operation type `{type_name}` is not an object type")]
    NonObjectOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "The {operation1} and {operation2} root operations are defined with \
        the same GraphQL type (`{reused_type_name}`), but this is not allowed \
        in GraphQL. All root operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation2: OperationKind,
    },

    #[error("Error parsing schema {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        .errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error("The {operation} root operation type `{type_name}` is not defined")]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
    },
}
