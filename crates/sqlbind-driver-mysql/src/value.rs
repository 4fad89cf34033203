use mysql_async::Value as MyValue;
use sqlbind_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub(crate) fn into_mysql(self) -> MyValue {
        match self.0 {
            CoreValue::Null => MyValue::NULL,
            CoreValue::Bool(value) => MyValue::Int(value as i64),
            CoreValue::I64(value) => MyValue::Int(value),
            CoreValue::U64(value) => MyValue::UInt(value),
            CoreValue::F64(value) => MyValue::Double(value),
            CoreValue::String(value) => MyValue::Bytes(value.into_bytes()),
            CoreValue::Bytes(value) => MyValue::Bytes(value),
            CoreValue::Json(value) => MyValue::Bytes(value.to_string().into_bytes()),
        }
    }

    /// Temporal values are returned as text in MySQL's own format.
    pub(crate) fn into_core(value: MyValue) -> CoreValue {
        match value {
            MyValue::NULL => CoreValue::Null,
            MyValue::Bytes(value) => CoreValue::Bytes(value),
            MyValue::Int(value) => CoreValue::I64(value),
            MyValue::UInt(value) => CoreValue::U64(value),
            MyValue::Float(value) => CoreValue::F64(value as f64),
            MyValue::Double(value) => CoreValue::F64(value),
            MyValue::Date(year, month, day, hour, minute, second, micros) => {
                let mut text = format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                );
                if micros != 0 {
                    text.push_str(&format!(".{micros:06}"));
                }
                CoreValue::String(text)
            }
            MyValue::Time(negative, days, hours, minutes, seconds, micros) => {
                let hours = days * 24 + u32::from(hours);
                let sign = if negative { "-" } else { "" };
                let mut text = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
                if micros != 0 {
                    text.push_str(&format!(".{micros:06}"));
                }
                CoreValue::String(text)
            }
        }
    }
}
