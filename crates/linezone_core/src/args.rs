//! Argument coercion and configured function instances.
//!
//! A [`FunctionToken`] is what the command line supplies: a name, an optional
//! scoping-pattern slot and raw argument texts. [`FunctionInstance::configure`]
//! checks the texts against the function's [`ArgSchema`], coerces them and
//! builds the typed [`Function`] variant. All failures surface here, before
//! any input is read.

use crate::catalog::{
    ArgKind, ArgSchema, Catalog, CatalogEntry, FunctionDescriptor, FunctionId, ZonePolicy,
};
use crate::constants::MAX_FUNCTION_ARGS;
use crate::error::{ConfigError, LineZoneError, OverflowError};
use crate::functions::{CharRange, Function, Insert, Outcome, Quote, Substitute, Translate, Unquote};
use crate::pattern::{Pattern, PatternCache};
use crate::zone::ZoneBuffer;

/// A function occurrence as supplied by the argument source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionToken {
    pub name: String,
    /// `None` when no slot was given; `Some("")` means "the whole unit".
    pub pattern: Option<String>,
    pub args: Vec<String>,
}

impl FunctionToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Coerced value of one argument slot.
#[derive(Debug, Clone)]
pub enum ArgValue {
    /// Optional slot with no raw text.
    Unset,
    Pattern(Pattern),
    /// Signed integer and its unsigned magnitude.
    Int { value: i64, magnitude: u64 },
    Unsigned(u64),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Argument {
    pub raw: Option<String>,
    pub value: ArgValue,
}

impl Argument {
    const UNSET: Self = Self {
        raw: None,
        value: ArgValue::Unset,
    };

    pub fn is_set(&self) -> bool {
        !matches!(self.value, ArgValue::Unset)
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        match &self.value {
            ArgValue::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    pub fn int(&self) -> Option<i64> {
        match self.value {
            ArgValue::Int { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn magnitude(&self) -> Option<u64> {
        match self.value {
            ArgValue::Int { magnitude, .. } => Some(magnitude),
            ArgValue::Unsigned(value) => Some(value),
            _ => None,
        }
    }

    pub fn unsigned(&self) -> Option<u64> {
        match self.value {
            ArgValue::Unsigned(value) => Some(value),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            ArgValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Coerce raw argument texts against `schema`.
///
/// # Errors
/// - [`ConfigError::TooManyArguments`] when more texts than slots are given.
/// - [`ConfigError::MissingArgument`] for a required slot without text.
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::NegativeValue`] for bad numbers.
/// - [`LineZoneError::Pattern`] when a pattern slot fails to compile.
pub fn coerce_arguments(
    function: &str,
    schema: &ArgSchema,
    raw: &[String],
    patterns: &mut PatternCache,
) -> Result<Vec<Argument>, LineZoneError> {
    let max = schema.len().min(MAX_FUNCTION_ARGS);
    if raw.len() > max {
        return Err(ConfigError::TooManyArguments {
            function: function.to_string(),
            max,
            given: raw.len(),
        }
        .into());
    }

    let mut arguments = Vec::with_capacity(schema.len());
    for (index, spec) in schema.specs().iter().enumerate() {
        let position = index + 1;
        let Some(text) = raw.get(index) else {
            if spec.required {
                return Err(ConfigError::MissingArgument {
                    function: function.to_string(),
                    position,
                    format: schema.format().to_string(),
                }
                .into());
            }
            arguments.push(Argument::UNSET);
            continue;
        };

        let value = match spec.kind {
            ArgKind::Pattern => ArgValue::Pattern(patterns.compile(text)?),
            ArgKind::Signed => {
                let value = parse_int(function, position, text)?;
                ArgValue::Int {
                    value,
                    magnitude: value.unsigned_abs(),
                }
            }
            ArgKind::Unsigned => {
                let value = parse_int(function, position, text)?;
                let value = u64::try_from(value).map_err(|_| ConfigError::NegativeValue {
                    function: function.to_string(),
                    position,
                    value,
                })?;
                ArgValue::Unsigned(value)
            }
            ArgKind::Text => ArgValue::Text(text.clone()),
        };
        arguments.push(Argument {
            raw: Some(text.clone()),
            value,
        });
    }
    Ok(arguments)
}

fn parse_int(function: &str, position: usize, text: &str) -> Result<i64, ConfigError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidNumber {
            function: function.to_string(),
            position,
            raw: text.to_string(),
        })
}

/// A catalog function configured with its scope and typed arguments.
#[derive(Debug, Clone)]
pub struct FunctionInstance {
    descriptor: &'static FunctionDescriptor,
    scope: Option<Pattern>,
    arguments: Vec<Argument>,
    function: Function,
}

impl FunctionInstance {
    /// Resolve `token` against the catalog and build a runnable instance.
    pub fn configure(
        token: &FunctionToken,
        catalog: &Catalog,
        patterns: &mut PatternCache,
    ) -> Result<Self, LineZoneError> {
        let entry = catalog
            .lookup(&token.name)
            .ok_or_else(|| ConfigError::UnknownFunction(token.name.clone()))?;
        let descriptor = entry.descriptor;
        if !descriptor.implemented {
            return Err(ConfigError::Unimplemented(descriptor.long.to_string()).into());
        }

        let scope = match token.pattern.as_deref() {
            None => None,
            Some("") => Some(patterns.whole_unit()?),
            Some(text) => Some(patterns.compile(text)?),
        };
        if scope.is_none() && descriptor.zone == ZonePolicy::Required {
            return Err(ConfigError::PatternRequired(descriptor.long.to_string()).into());
        }

        let arguments = coerce_arguments(descriptor.long, &entry.schema, &token.args, patterns)?;
        let function = build_function(entry, &arguments)?;
        tracing::debug!(
            function = descriptor.long,
            scope = scope.as_ref().map(Pattern::as_str),
            args = arguments.len(),
            "configured function"
        );
        Ok(Self {
            descriptor,
            scope,
            arguments,
            function,
        })
    }

    pub fn descriptor(&self) -> &'static FunctionDescriptor {
        self.descriptor
    }

    pub fn scope(&self) -> Option<&Pattern> {
        self.scope.as_ref()
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Resolve the zone for the current source and run the function.
    ///
    /// On a scope miss, `Scoped` and `Required` functions copy the source
    /// through unchanged; `Whole` functions run over the whole text.
    pub fn apply(&self, buffer: &mut ZoneBuffer) -> Result<Outcome, OverflowError> {
        buffer.reset_zone();
        if let Some(scope) = &self.scope {
            match scope.find(buffer.source()) {
                Some(range) => buffer.set_zone(range),
                None if self.descriptor.zone == ZonePolicy::Whole => {}
                None => {
                    buffer.pass_through();
                    return Ok(Outcome::Continue);
                }
            }
        }
        self.function.apply(buffer)
    }
}

/// Build the typed variant for an implemented catalog entry.
fn build_function(entry: &CatalogEntry, args: &[Argument]) -> Result<Function, ConfigError> {
    let name = entry.name();
    let text = |index: usize| {
        args.get(index)
            .and_then(Argument::text)
            .map(str::to_string)
            .unwrap_or_default()
    };
    let function = match entry.descriptor.id {
        FunctionId::Upper => Function::Upper,
        FunctionId::Lower => Function::Lower,
        FunctionId::Camel => Function::Camel,
        FunctionId::Trim => Function::Trim,
        FunctionId::Translate => Function::Translate(Translate::new(&text(0), &text(1))),
        FunctionId::Quote => Function::Quote(Quote::new(mark_argument(name, args, 0)?)),
        FunctionId::Unquote => Function::Unquote(Unquote::new(mark_argument(name, args, 0)?)),
        FunctionId::Replace => Function::Replace(text(0)),
        FunctionId::Extract => Function::Extract,
        FunctionId::Substitute => {
            let pattern = args
                .first()
                .and_then(Argument::pattern)
                .cloned()
                .ok_or_else(|| missing(entry, 1))?;
            let limit = args.get(2).and_then(Argument::unsigned).unwrap_or(0);
            Function::Substitute(Substitute::new(
                pattern,
                text(1),
                usize::try_from(limit).unwrap_or(usize::MAX),
            ))
        }
        FunctionId::Insert => {
            let position = args.get(1).and_then(Argument::int).unwrap_or(0);
            Function::Insert(Insert::new(text(0), position))
        }
        FunctionId::Append => Function::Append(text(0)),
        FunctionId::RangeSel => Function::RangeSel(char_range(entry, args)?),
        FunctionId::RangeUnsel => Function::RangeUnsel(char_range(entry, args)?),
        FunctionId::Remove => Function::Remove,
        FunctionId::Base64Encode => Function::Base64Encode,
        FunctionId::Base64Decode => Function::Base64Decode,
        FunctionId::UrlEncode => Function::UrlEncode,
        FunctionId::UrlDecode => Function::UrlDecode,
        FunctionId::Wrap => return Err(ConfigError::Unimplemented(name.to_string())),
    };
    Ok(function)
}

fn char_range(entry: &CatalogEntry, args: &[Argument]) -> Result<CharRange, ConfigError> {
    let start = args
        .first()
        .and_then(Argument::int)
        .ok_or_else(|| missing(entry, 1))?;
    let len = args.get(1).and_then(Argument::unsigned);
    Ok(CharRange::new(start, len))
}

/// A quote mark is a single character; unset means the function default.
fn mark_argument(
    function: &str,
    args: &[Argument],
    index: usize,
) -> Result<Option<char>, ConfigError> {
    let Some(raw) = args.get(index).and_then(Argument::text) else {
        return Ok(None);
    };
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(mark), None) => Ok(Some(mark)),
        _ => Err(ConfigError::InvalidArgument {
            function: function.to_string(),
            position: index + 1,
            reason: format!("quote mark must be a single character, got '{}'", raw),
        }),
    }
}

fn missing(entry: &CatalogEntry, position: usize) -> ConfigError {
    ConfigError::MissingArgument {
        function: entry.name().to_string(),
        position,
        format: entry.schema.format().to_string(),
    }
}
