use crate::services::auto_property_pattern::AutoPropertyPattern;
use crate::structs::extracted_parameter::ExtractedParameter;
use crate::traits::declaration_pattern::DeclarationPattern;

pub struct ParameterExtractor {
    pattern: Box<dyn DeclarationPattern>,
}

impl Default for ParameterExtractor {
    fn default() -> Self {
        Self::new(Box::new(AutoPropertyPattern::new()))
    }
}

impl ParameterExtractor {
    pub fn new(pattern: Box<dyn DeclarationPattern>) -> Self {
        Self { pattern }
    }

    pub fn dialect(&self) -> &str {
        self.pattern.dialect()
    }

    /// Declared parameters in order of appearance, each with its first default
    /// assignment or the "Not found" sentinel. Never fails.
    pub fn extract_parameters(&self, source: &str) -> Vec<ExtractedParameter> {
        self.pattern
            .declarations(source)
            .into_iter()
            .map(|declaration| {
                let default_value = self.pattern.default_value(source, &declaration.name);
                ExtractedParameter::new(declaration.name, declaration.param_type, default_value)
            })
            .collect()
    }
}
