use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields form a cycle that is not broken by a nullable \
        field: {}",
        .circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error("The `{type_name}` enum type must define one or more values")]
    EnumWithNoValues {
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{non_interface_type_name}`, which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{parent_type_name}.{field_name}` input field is declared with \
        the `{invalid_type_name}` output type"
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{parent_type_name}.{field_name}` field is declared with the \
        `{input_type_name}` input object type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{param_name}` parameter of `{parent_type_name}.{field_name}` is \
        declared with the `{invalid_type_name}` output type"
    )]
    InvalidParameterWithOutputType {
        field_name: String,
        invalid_type_name: String,
        param_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but only \
        object types may be union members"
    )]
    InvalidUnionMemberType {
        member_name: String,
        union_name: String,
    },

    #[error(
        "The `{referencing_type_name}` type references `{undefined_type_name}`, \
        which is not defined in the schema"
    )]
    UndefinedTypeName {
        referencing_type_name: String,
        undefined_type_name: String,
    },
}
