/// parse task document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4"
/// which has titles and pairs key-vector of values. Every section describes one elementary function:
///
/// ```text
/// // (2x+1)^3 / 2
/// f1
/// kind: power a: 2 b: 1 n: 3 coeff: 1/2
/// g
/// kind: cos
/// a: 1 b: 30 variable: t
/// ```
/// recognized keys: `kind` (power, cos, sin, ln), `a`, `b`, `n`, `coeff`, `variable`; missing keys take the
/// defaults of `FunctionOptions`. Values may be integers, fractions `p/q`, decimals, booleans or strings.
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::elementary::ElementaryFunction;
use crate::symbolic::fraction::Fraction;
use crate::symbolic::function_options::FunctionOptions;
use crate::symbolic::trig_fn::TrigKind;
use log::info;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::str::FromStr;

/// key-values pairs of one section, in document order (repeats kept so they can be reported)
pub type SectionPairs = Vec<(String, Vec<Value>)>;
/// sections in the order they appear in the document
pub type DocumentList = Vec<(String, SectionPairs)>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Rational(Fraction),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// exact value of a numeric entry; floats are taken at their decimal text
    pub fn to_fraction(&self) -> Result<Fraction, CalculusError> {
        match self {
            Value::Integer(i) => Ok(Fraction::from(*i)),
            Value::Rational(r) => Ok(r.clone()),
            Value::Float(f) => Fraction::try_from(*f),
            other => Err(CalculusError::TaskParse(format!(
                "'{}' is not a number",
                other
            ))),
        }
    }

    pub fn to_string_value(&self) -> String {
        self.to_string()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// Parses a title (word characters without spaces)
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    let (input, result) = parser.parse(input)?;
    // Ignore trailing whitespace and newline characters
    let input = input.trim();
    Ok((input, result))
}

/// Parses a key (word characters without spaces)
pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    // a single value - excluding commas, whitespace, newlines, and semicolons
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\r' | '\n' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        let s = s.trim();
        // Try parsing as different types in order
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if s.contains('/') && Fraction::from_str(s).is_ok() {
            Fraction::from_str(s)
                .map(Value::Rational)
                .map_err(|e| e.to_string())
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let (input, _) = multispace0(input)?;
    // comma-separated values, spaces around the comma dropped
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list0(separator_coma, parse_value);
    value_parser.parse(input)
}

/// Parses a key-value pair where value is a list
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim(), result))
}

/// Parses a section with a title and multiple key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, SectionPairs)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    // both spaces and newlines allowed after the title
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;
    Ok((input, (title, pairs)))
}

/// Filters out comment lines (starting with //, #, %, or ;) and empty lines
pub(crate) fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire document into ordered sections
pub fn parse_document(input: &str) -> IResult<&str, DocumentList> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    parser.parse(input)
}

/// parse_document that insists on consuming the whole (comment-filtered) input
pub fn parse_document_complete(input: &str) -> Result<DocumentList, CalculusError> {
    let filtered = filter_comments(input);
    match parse_document(&filtered) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(CalculusError::TaskParse(format!(
                    "Failed to parse entire document. Remaining: '{}'",
                    remaining
                )));
            }
            Ok(parsed)
        }
        Err(e) => Err(CalculusError::TaskParse(format!("Parsing error: {:?}", e))),
    }
}

fn single_value<'a>(title: &str, key: &str, values: &'a [Value]) -> Result<&'a Value, CalculusError> {
    match values {
        [value] => Ok(value),
        _ => Err(CalculusError::TaskParse(format!(
            "section '{}': key '{}' expects exactly one value, got {}",
            title,
            key,
            values.len()
        ))),
    }
}

/// builds the function one section describes
pub fn section_to_function(
    title: &str,
    section: &SectionPairs,
) -> Result<ElementaryFunction, CalculusError> {
    let mut options = FunctionOptions::default();
    let mut kind: Option<String> = None;
    let mut seen: HashSet<&str> = HashSet::new();
    for (key, values) in section {
        if !seen.insert(key.as_str()) {
            return Err(CalculusError::TaskParse(format!(
                "section '{}': key '{}' given more than once",
                title, key
            )));
        }
        let value = single_value(title, key, values)?;
        match key.as_str() {
            "kind" => kind = Some(value.to_string_value().to_lowercase()),
            "a" => options.a = value.to_fraction()?,
            "b" => options.b = value.to_fraction()?,
            "n" => options.n = value.to_fraction()?,
            "coeff" => options.coeff = value.to_fraction()?,
            "variable" => options.variable_atom = value.to_string_value(),
            other => {
                return Err(CalculusError::TaskParse(format!(
                    "section '{}': unknown key '{}'",
                    title, other
                )));
            }
        }
    }
    let kind = kind.ok_or_else(|| {
        CalculusError::TaskParse(format!("section '{}': key 'kind' is missing", title))
    })?;
    match kind.as_str() {
        "power" => ElementaryFunction::power(options),
        "ln" => ElementaryFunction::ln(options),
        trig => {
            let trig_kind = TrigKind::from_str(trig).map_err(|_| {
                CalculusError::TaskParse(format!(
                    "section '{}': unknown kind '{}', expected power, cos, sin or ln",
                    title, trig
                ))
            })?;
            ElementaryFunction::trig(trig_kind, options)
        }
    }
}

/// every section of the document turned into a function, in document order
pub fn parse_task_document(
    input: &str,
) -> Result<Vec<(String, ElementaryFunction)>, CalculusError> {
    let document = parse_document_complete(input)?;
    let mut functions = Vec::with_capacity(document.len());
    for (title, section) in &document {
        let function = section_to_function(title, section)?;
        info!("task '{}': {} = {}", title, function.kind_name(), function);
        functions.push((title.clone(), function));
    }
    Ok(functions)
}

pub fn parse_task_file(path: &str) -> Result<Vec<(String, ElementaryFunction)>, CalculusError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CalculusError::TaskParse(format!("cannot read {}: {}", path, e)))?;
    parse_task_document(&content)
}
