use crate::CanisterError;
use candid::types::value::{IDLArgs, IDLField, IDLValue, VariantValue};
use candid::types::{Function, Label};
use candid::TypeEnv;
use serde_json::{Map, Number, Value};

pub fn encode_args(
    env: &TypeEnv,
    function: &Function,
    args: &[IDLValue],
) -> Result<Vec<u8>, CanisterError> {
    IDLArgs::new(args)
        .to_bytes_with_types(env, &function.args)
        .map_err(|e| CanisterError::Encode(e.to_string()))
}

/// Decodes a reply with the declared return types.
///
/// One return value is relayed as itself, none as `null`, several as an array.
pub fn decode_reply(
    env: &TypeEnv,
    function: &Function,
    bytes: &[u8],
) -> Result<Value, CanisterError> {
    let reply = IDLArgs::from_bytes_with_types(bytes, env, &function.rets)
        .map_err(|e| CanisterError::Decode(e.to_string()))?;

    let mut values: Vec<Value> = reply.args.iter().map(idl_to_json).collect();
    Ok(match values.len() {
        0 => Value::Null,
        1 => values.remove(0),
        _ => Value::Array(values),
    })
}

/// Structural conversion of a decoded Candid value to JSON.
pub fn idl_to_json(value: &IDLValue) -> Value {
    match value {
        IDLValue::Bool(b) => Value::Bool(*b),
        IDLValue::Null | IDLValue::None | IDLValue::Reserved => Value::Null,
        IDLValue::Text(s) => Value::String(s.clone()),
        IDLValue::Number(s) => number_or_string(s),
        IDLValue::Opt(inner) => idl_to_json(inner),
        IDLValue::Vec(items) => Value::Array(items.iter().map(idl_to_json).collect()),
        IDLValue::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
        IDLValue::Record(fields) => record_to_json(fields),
        IDLValue::Variant(VariantValue(field, _)) => {
            let mut object = Map::new();
            object.insert(label_key(&field.id), idl_to_json(&field.val));
            Value::Object(object)
        }
        IDLValue::Principal(p) | IDLValue::Service(p) => Value::String(p.to_text()),
        IDLValue::Nat(n) => number_or_string(&n.0.to_string()),
        IDLValue::Int(i) => number_or_string(&i.0.to_string()),
        IDLValue::Nat8(n) => Value::from(*n),
        IDLValue::Nat16(n) => Value::from(*n),
        IDLValue::Nat32(n) => Value::from(*n),
        IDLValue::Nat64(n) => Value::from(*n),
        IDLValue::Int8(n) => Value::from(*n),
        IDLValue::Int16(n) => Value::from(*n),
        IDLValue::Int32(n) => Value::from(*n),
        IDLValue::Int64(n) => Value::from(*n),
        IDLValue::Float32(f) => float(f64::from(*f)),
        IDLValue::Float64(f) => float(*f),
        other => Value::String(other.to_string()),
    }
}

fn record_to_json(fields: &[IDLField]) -> Value {
    let is_tuple = !fields.is_empty()
        && fields
            .iter()
            .enumerate()
            .all(|(i, f)| !matches!(f.id, Label::Named(_)) && f.id.get_id() == i as u32);

    if is_tuple {
        Value::Array(fields.iter().map(|f| idl_to_json(&f.val)).collect())
    } else {
        Value::Object(
            fields
                .iter()
                .map(|f| (label_key(&f.id), idl_to_json(&f.val)))
                .collect(),
        )
    }
}

fn label_key(label: &Label) -> String {
    match label {
        Label::Named(name) => name.clone(),
        Label::Id(id) | Label::Unnamed(id) => id.to_string(),
    }
}

// Values beyond 64 bits stay exact as decimal strings.
fn number_or_string(digits: &str) -> Value {
    if let Ok(n) = digits.parse::<u64>() {
        Value::from(n)
    } else if let Ok(n) = digits.parse::<i64>() {
        Value::from(n)
    } else {
        Value::String(digits.to_string())
    }
}

fn float(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}
