//! JSON 文档处理
//!
//! 从设置文档中提取四个可识别字段，并覆盖到目标文档上。
//! 文档统一表示为 `serde_json::Map`，序列化为紧凑文本，
//! 因此已合并过的文档再次合并得到的文本完全一致。
//! 数字按原文保留（serde_json `arbitrary_precision`），超出 i64/u64 的整数不会变成浮点数。

use serde_json::{Map, Value};
use tracing::warn;

/// 顶层 JSON 对象
pub type Document = Map<String, Value>;

/// 需要从设置文档复制到信息文档的键
pub const RECOGNIZED_KEYS: [&str; 4] = ["products", "locale", "retailer_type", "carriers"];

/// 判断键是否属于可识别键集合（区分大小写）
pub fn is_recognized_key(key: &str) -> bool {
    RECOGNIZED_KEYS.contains(&key)
}

/// 解析为顶层对象
///
/// 空值或空白文本返回 None；合法 JSON 但顶层不是对象时没有任何字段，同样返回 None。
fn parse_object(raw: Option<&str>) -> Result<Option<Document>, serde_json::Error> {
    let text = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(None),
    };

    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(Some(map)),
        other => {
            warn!(
                value_kind = value_kind(&other),
                "Top-level JSON value is not an object, treating it as empty"
            );
            Ok(None)
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 提取可识别字段
///
/// 只保留 [`RECOGNIZED_KEYS`] 中的顶层键，其余键直接丢弃。
pub fn extract_recognized_fields(raw: Option<&str>) -> Result<Document, serde_json::Error> {
    let mut fields = parse_object(raw)?.unwrap_or_default();
    fields.retain(|key, _| is_recognized_key(key));
    Ok(fields)
}

/// 加载目标文档的全部顶层键值
pub fn load_document(raw: Option<&str>) -> Result<Document, serde_json::Error> {
    Ok(parse_object(raw)?.unwrap_or_default())
}

/// 将提取的字段覆盖到目标文档
///
/// 同名键以提取值为准；提取结果中不存在的键保持原样，不会被删除。
pub fn merge_fields(extracted: Document, mut destination: Document) -> Document {
    destination.extend(extracted);
    destination
}

/// 序列化为紧凑 JSON 文本
pub fn render(document: Document) -> String {
    Value::Object(document).to_string()
}
