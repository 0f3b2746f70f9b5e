use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};

/// Argument types a tool parameter can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
        }
    }
}

/// Declared shape of a single tool parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
    pub description: String,
    /// Applied when the caller omits the parameter
    pub default: Option<JsonValue>,
    /// Values below this are rejected
    pub minimum: Option<i64>,
    /// Advertised upper bound; larger values are clamped by the provider adapter
    pub maximum: Option<i64>,
}

impl ParamSpec {
    pub fn required_string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::String,
            required: true,
            description: description.into(),
            default: None,
            minimum: None,
            maximum: None,
        }
    }

    pub fn optional_integer(
        name: impl Into<String>,
        description: impl Into<String>,
        default: i64,
    ) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Integer,
            required: false,
            description: description.into(),
            default: Some(JsonValue::from(default)),
            minimum: None,
            maximum: None,
        }
    }

    pub fn with_range(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    fn schema(&self) -> JsonValue {
        let mut obj = Map::new();
        obj.insert("type".into(), JsonValue::String(self.param_type.as_str().into()));
        obj.insert("description".into(), JsonValue::String(self.description.clone()));
        if let Some(default) = &self.default {
            obj.insert("default".into(), default.clone());
        }
        if let Some(min) = self.minimum {
            obj.insert("minimum".into(), JsonValue::from(min));
        }
        if let Some(max) = self.maximum {
            obj.insert("maximum".into(), JsonValue::from(max));
        }
        JsonValue::Object(obj)
    }
}

/// A named, schema-described tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), params: Vec::new() }
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn param_spec(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// JSON Schema object describing the tool input, as advertised by discovery
    pub fn input_schema(&self) -> JsonValue {
        let mut properties = Map::new();
        for p in &self.params {
            properties.insert(p.name.clone(), p.schema());
        }
        let required: Vec<&str> =
            self.params.iter().filter(|p| p.required).map(|p| p.name.as_str()).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// One block of tool output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            ContentBlock::Text { text } => text,
        }
    }
}

/// A named tool invocation with caller-supplied, not yet validated arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<JsonValue>,
}

impl ToolCallRequest {
    pub fn new(name: impl Into<String>, arguments: JsonValue) -> Self {
        Self { name: name.into(), arguments: Some(arguments) }
    }
}

/// Uniform result envelope returned for every tool call.
///
/// Fields are private so an envelope can only be built through [`ToolCallResult::text`]
/// or [`ToolCallResult::error`], which keeps at least one content block present and an
/// error envelope down to a single message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    content: Vec<ContentBlock>,
    is_error: bool,
}

impl ToolCallResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self { content: vec![ContentBlock::text(text)], is_error: false }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { content: vec![ContentBlock::text(message)], is_error: true }
    }

    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// All text blocks joined with newlines
    pub fn text_content(&self) -> String {
        self.content.iter().map(ContentBlock::as_text).collect::<Vec<_>>().join("\n")
    }
}
