//! Character Context - Payload Validation
//!
//! 把未类型化的 JSON 对象转换为 [`Character`]。
//!
//! 规则:
//! - 按字段声明顺序逐个校验，收集全部错误而不是遇到第一个就返回
//! - 未知字段忽略
//! - 整数字段接受整数字符串（允许首尾空白、数字间的 `_` 分组、全 0 的小数部分）、
//!   小数部分为 0 的浮点数以及布尔值
//! - 超出 i64 范围的整数视为超长
//! - 文本字段只接受字符串

use serde_json::{Map, Value};

use super::{
    Attribute, Character, CharacterAttributes, CharacterId, FieldError, Magnitude,
    ValidationErrors,
};

/// 对外暴露的校验错误文案（属于 HTTP 契约的一部分）
pub mod messages {
    pub const FIELD_REQUIRED: &str = "Field required";
    pub const INVALID_INTEGER: &str = "Input should be a valid integer";
    pub const FRACTIONAL_INTEGER: &str =
        "Input should be a valid integer, got a number with a fractional part";
    pub const UNPARSABLE_INTEGER: &str =
        "Input should be a valid integer, unable to parse string as an integer";
    pub const EXCEEDED_MAXIMUM: &str =
        "Unable to parse input string as an integer, exceeded maximum size";
    pub const NOT_POSITIVE: &str = "Input should be greater than 0";
    pub const INVALID_STRING: &str = "Input should be a valid string";
    pub const VALUE_ERROR_PREFIX: &str = "Value error, ";
}

/// 待校验的角色负载
#[derive(Debug)]
pub struct CharacterDraft<'a> {
    fields: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> CharacterDraft<'a> {
    /// 校验 JSON 对象并构建角色
    pub fn from_json(fields: &'a Map<String, Value>) -> Result<Character, ValidationErrors> {
        let mut draft = Self {
            fields,
            errors: Vec::new(),
        };

        let id = draft.integer("id");
        let name = draft.text("name");
        let height = draft.magnitude("height");
        let mass = draft.magnitude("mass");
        let hair_color = draft.text("hair_color");
        let skin_color = draft.text("skin_color");
        let eye_color = draft.text("eye_color");
        let birth_year = draft.magnitude("birth_year");

        match (
            id, name, height, mass, hair_color, skin_color, eye_color, birth_year,
        ) {
            (
                Some(id),
                Some(name),
                Some(height),
                Some(mass),
                Some(hair_color),
                Some(skin_color),
                Some(eye_color),
                Some(birth_year),
            ) if draft.errors.is_empty() => Ok(Character::new(
                CharacterId::new(id),
                CharacterAttributes {
                    name,
                    height,
                    mass,
                    hair_color,
                    skin_color,
                    eye_color,
                    birth_year,
                },
            )),
            _ => Err(ValidationErrors(draft.errors)),
        }
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    fn require(&mut self, field: &str) -> Option<&'a Value> {
        let value = self.fields.get(field);
        if value.is_none() {
            self.reject(field, messages::FIELD_REQUIRED);
        }
        value
    }

    fn integer(&mut self, field: &str) -> Option<i64> {
        let value = self.require(field)?;
        match coerce_integer(value) {
            Ok(n) => Some(n),
            Err(message) => {
                self.reject(field, message);
                None
            }
        }
    }

    fn magnitude(&mut self, field: &str) -> Option<Magnitude> {
        let n = self.integer(field)?;
        match Magnitude::new(n) {
            Ok(m) => Some(m),
            Err(_) => {
                self.reject(field, messages::NOT_POSITIVE);
                None
            }
        }
    }

    fn text(&mut self, field: &str) -> Option<Attribute> {
        let value = self.require(field)?;
        let Some(s) = value.as_str() else {
            self.reject(field, messages::INVALID_STRING);
            return None;
        };
        match Attribute::new(s) {
            Ok(attr) => Some(attr),
            Err(reason) => {
                self.reject(field, format!("{}{}", messages::VALUE_ERROR_PREFIX, reason));
                None
            }
        }
    }
}

/// 宽松模式的整数转换
fn coerce_integer(value: &Value) -> Result<i64, &'static str> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let f = n.as_f64().ok_or(messages::INVALID_INTEGER)?;
            if f.fract() != 0.0 {
                return Err(messages::FRACTIONAL_INTEGER);
            }
            // i64::MAX as f64 会向上取整到 2^63，所以上界用开区间
            if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                return Err(messages::EXCEEDED_MAXIMUM);
            }
            Ok(f as i64)
        }
        Value::String(s) => parse_integer_str(s),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(messages::INVALID_INTEGER),
    }
}

/// 整数字符串解析，例如 " 42 "、"-1_000"、"7.00"
fn parse_integer_str(raw: &str) -> Result<i64, &'static str> {
    let trimmed = raw.trim();

    let whole = match trimmed.split_once('.') {
        Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => whole,
        Some(_) => return Err(messages::UNPARSABLE_INTEGER),
        None => trimmed,
    };

    let (negative, digits) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };

    // `_` 只能出现在两个数字之间
    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.bytes().all(|b| b.is_ascii_digit() || b == b'_');
    if !well_formed {
        return Err(messages::UNPARSABLE_INTEGER);
    }

    let mut cleaned = String::with_capacity(digits.len() + 1);
    if negative {
        cleaned.push('-');
    }
    cleaned.extend(digits.chars().filter(|c| *c != '_'));

    // 格式已校验，失败只可能是溢出
    cleaned
        .parse::<i64>()
        .map_err(|_| messages::EXCEEDED_MAXIMUM)
}
