use crate::param::HTML_ENTITIES;

/// 将 `& < > " '` 转换为对应的 HTML5 实体，其余字符原样保留。
///
/// 页面的各个追加方法都不会自动转义，不可信的数据需要先经过这里再拼接。
pub fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match HTML_ENTITIES.get(&c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    escaped
}
