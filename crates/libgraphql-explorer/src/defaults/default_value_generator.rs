use crate::ast::operation::Argument;
use crate::ast::operation::Value;
use crate::defaults::DefaultArgumentPolicy;
use crate::defaults::LiteralEncoder;
use crate::explorer::Diagnostic;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValueTrait;

type Result<T> = std::result::Result<T, Diagnostic>;

/// Builds the argument lists and object literals that newly added fields and
/// arguments start out with.
///
/// Required parameters (and optional ones the [`DefaultArgumentPolicy`]
/// opts into) get a seed value: [`LiteralEncoder::default_literal`] for leaf
/// types, or an object literal holding the input object's own defaulted
/// fields. Slots that cannot be defaulted (list types) are skipped with a
/// logged diagnostic; their siblings are still produced.
pub struct DefaultValueGenerator<'a> {
    argument_policy: &'a dyn DefaultArgumentPolicy,
    encoder: &'a LiteralEncoder,
    schema: &'a Schema,
}
impl<'a> DefaultValueGenerator<'a> {
    pub fn default_required_arguments(&self, field: &Field) -> Vec<Argument> {
        let mut visiting = vec![];
        self.defaulted_slots(
            field.name(),
            field.parameters().values().map(|param| param as &dyn InputValueTrait),
            &mut visiting,
        )
    }

    pub fn default_required_input_fields(&self, input_object: &InputObjectType) -> Vec<Argument> {
        let mut visiting = vec![input_object.name().to_string()];
        self.input_object_fields(input_object, &mut visiting)
    }

    /// The seed value for a single argument or input field, regardless of
    /// whether it is required.
    pub fn default_value_for(&self, input_value: &dyn InputValueTrait) -> Result<Value> {
        let mut visiting = vec![];
        self.value_for(input_value, &mut visiting)
    }

    pub fn new(
        schema: &'a Schema,
        encoder: &'a LiteralEncoder,
        argument_policy: &'a dyn DefaultArgumentPolicy,
    ) -> Self {
        Self {
            argument_policy,
            encoder,
            schema,
        }
    }

    fn defaulted_slots<'s>(
        &self,
        parent_name: &str,
        slots: impl Iterator<Item = &'s dyn InputValueTrait>,
        visiting: &mut Vec<String>,
    ) -> Vec<Argument> {
        let mut defaulted = vec![];
        for slot in slots {
            if !slot.is_required()
                && !self.argument_policy.include_optional(parent_name, slot) {
                continue;
            }

            match self.value_for(slot, visiting) {
                Ok(value) => defaulted.push((slot.name().to_string(), value)),
                Err(diag) => log::warn!(
                    "Skipping `{}` while defaulting `{parent_name}`: {diag}",
                    slot.name(),
                ),
            }
        }
        defaulted
    }

    fn input_object_fields(
        &self,
        input_object: &InputObjectType,
        visiting: &mut Vec<String>,
    ) -> Vec<Argument> {
        self.defaulted_slots(
            input_object.name(),
            input_object.fields().values().map(|field| field as &dyn InputValueTrait),
            visiting,
        )
    }

    fn value_for(
        &self,
        input_value: &dyn InputValueTrait,
        visiting: &mut Vec<String>,
    ) -> Result<Value> {
        let annot = input_value.type_annotation();
        if annot.is_list() {
            return Err(Diagnostic::UnconstructibleDefault {
                name: input_value.name().to_string(),
                type_annotation: annot.to_string(),
            });
        }

        let type_name = annot.innermost_type_name();
        match self.schema.lookup_type(type_name) {
            None => Err(Diagnostic::UnknownType {
                type_name: type_name.to_string(),
            }),

            Some(GraphQLType::InputObject(input_object)) => {
                // Only reachable through optional fields opted into by a
                // custom argument policy; required cycles fail schema
                // validation.
                if visiting.iter().any(|name| name == input_object.name()) {
                    return Err(Diagnostic::RecursiveInputDefault {
                        type_name: input_object.name().to_string(),
                    });
                }

                visiting.push(input_object.name().to_string());
                let fields = self.input_object_fields(input_object, visiting);
                visiting.pop();
                Ok(Value::Object(fields.into_iter().collect()))
            },

            Some(leaf_type) => self.encoder.default_literal(leaf_type),
        }
    }
}
