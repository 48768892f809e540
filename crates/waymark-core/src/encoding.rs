//! 路径组件的百分号编码与解码。
//!
//! # 教案级说明
//! - **意图 (Why)**：目的地名、`/`、`?`、`&`、`=` 都是路径结构字符，参数值中出现它们时必须
//!   编码后嵌入，否则反向解析会错误切分；编码必须可逆，保证 `decode(encode(x)) == x`。
//! - **契约 (What)**：按 RFC 3986 保留字符规则编码——除 `ALPHA / DIGIT / - . _ ~` 外的所有
//!   字节（UTF-8 序列化后）逐字节转义；解码对畸形 `%` 序列与非法 UTF-8 显式报错，绝不静默
//!   截断或透传。
//! - **设计 (How)**：编码复用 `percent-encoding` crate 的 [`AsciiSet`] 机制；该 crate 的解码
//!   器对畸形 `%` 序列采取宽松透传策略，与本核心"显式报错"的契约冲突，因此解码前先做一次
//!   严格的序列扫描。
//! - **取舍 (Trade-offs)**：扫描使解码变为两遍遍历；路径组件通常很短，换取的是畸形输入
//!   永远不会以脏数据形态进入业务层。

use alloc::string::{String, ToString};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::RouteError;

/// 组件编码使用的转义集：RFC 3986 非保留字符之外的一切字节。
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 将单个路径组件编码为可安全嵌入导航路径的形式。
///
/// 编码永远成功；输入先按 UTF-8 序列化，再对转义集内的字节逐个写为 `%XX`。
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// 解码一个百分号编码的路径组件。
///
/// # 契约 (What)
/// - **输入**：单个组件（不含 `/` 或 `?` 结构字符，它们在合法编码输出中必然已被转义）；
/// - **失败**：`%` 后不足两个十六进制位，或解码字节流不是合法 UTF-8 时，返回
///   [`RouteError::EncodingMismatch`] 并携带原始片段；
/// - **后置条件**：对任意 `s`，`decode_component(&encode_component(s)) == Ok(s)`。
pub fn decode_component(component: &str) -> Result<String, RouteError> {
    validate_percent_sequences(component)?;
    percent_decode_str(component)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteError::EncodingMismatch {
            component: component.to_string(),
        })
}

/// 严格校验组件中的每个 `%` 都跟随两个十六进制位。
///
/// 底层 crate 对畸形序列宽松透传，这里补上显式检查以满足"畸形编码必须报错"的契约。
fn validate_percent_sequences(component: &str) -> Result<(), RouteError> {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(RouteError::EncodingMismatch {
                    component: component.to_string(),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
