//! 目的地描述符：路由代数的唯一数据源。
//!
//! # 教案级说明
//! - **意图 (Why)**：把"一个可导航目的地长什么样"收敛为一个不可变值对象，模式合成、
//!   路径构建与反向解析全部从它推导，避免三者各自维护一份形状描述而彼此漂移；
//! - **契约 (What)**：[`DestinationDescriptor`] 在注册阶段构造一次，进程生命周期内不可变，
//!   之后可被任意数量的构建/解析调用无锁并发读取；
//! - **设计 (How)**：采用 Builder 风格构造，全部 §不变量在 [`DescriptorBuilder::build`]
//!   一次性验证，验证失败返回 [`RouteError::InvalidDescriptor`] 而非 panic；
//! - **取舍 (Trade-offs)**：字段私有 + 只读访问器，牺牲少许样板换取"构造即合法"的全局保证；
//!   反序列化经由 `try_from` 影子结构走同一套验证，配置来源的描述符同样不可能绕过不变量。

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// 保留的动态标题键：`dynamic_title` 为真时紧随目的地名的路径段以它命名。
///
/// 该键属于框架命名空间，描述符声明的位置参数与查询参数都不得与其重名，
/// 约束在 [`DescriptorBuilder::build`] 强制执行。
pub const RESERVED_TITLE_KEY: &str = "screenTitle";

/// 参数名中禁止出现的结构字符：它们是路径段与查询尾的切分记号，参数名（作为裸键与
/// 模板占位符发射，从不编码）一旦包含就会在切分阶段撕裂键值对或污染占位符。
const STRUCTURAL_CHARS: [char; 6] = ['/', '?', '&', '=', '{', '}'];

/// 单个可导航目的地的不可变声明：名称、参数形状与动态标题标记。
///
/// # 教案式说明
/// - **意图 (Why)**：原系统以"闭合子类层级 + 虚分派"建模目的地，这里重构为携带名称
///   判别式的标签值，存入名称索引表后以查表取代类型分派；
/// - **契约 (What)**：
///   - `name` 在所属导航图内唯一，不含 `/` 与 `?`，是路径的字面首段；
///   - `positional_params` 有序且互不重名，构建路径时按位置逐一匹配；
///   - `query_params` 有序，与位置参数不相交，值可选、缺失即整体省略；
/// - **取舍 (Trade-offs)**：序列化支持使描述符表可以来自配置文件而非仅硬编码，
///   反序列化经 [`DescriptorConfig`] 影子结构验证，代价是一次所有权搬移。
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorConfig")]
pub struct DestinationDescriptor {
    name: String,
    positional_params: Vec<String>,
    query_params: Vec<String>,
    dynamic_title: bool,
}

impl DestinationDescriptor {
    /// 以声明标识符为默认名称开启构建流程。
    pub fn builder(identifier: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder {
            identifier: identifier.into(),
            alias: None,
            positional_params: Vec::new(),
            query_params: Vec::new(),
            dynamic_title: false,
        }
    }

    /// 目的地名称，即路径的字面首段。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 声明顺序的位置参数名。
    pub fn positional_params(&self) -> &[String] {
        &self.positional_params
    }

    /// 声明顺序的查询参数名。
    pub fn query_params(&self) -> &[String] {
        &self.query_params
    }

    /// 是否携带动态标题段。
    pub fn dynamic_title(&self) -> bool {
        self.dynamic_title
    }
}

/// [`DestinationDescriptor`] 的 Builder，聚合声明后在 `build` 一次性验证。
#[derive(Clone, Debug)]
pub struct DescriptorBuilder {
    identifier: String,
    alias: Option<String>,
    positional_params: Vec<String>,
    query_params: Vec<String>,
    dynamic_title: bool,
}

impl DescriptorBuilder {
    /// 用显式别名覆盖默认名称（名称派生规则：默认取声明标识符，别名优先）。
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// 追加一个位置参数，顺序即声明顺序。
    pub fn with_positional_param(mut self, name: impl Into<String>) -> Self {
        self.positional_params.push(name.into());
        self
    }

    /// 追加一个查询参数，顺序即声明顺序。
    pub fn with_query_param(mut self, name: impl Into<String>) -> Self {
        self.query_params.push(name.into());
        self
    }

    /// 标记该目的地携带动态标题段。
    pub fn with_dynamic_title(mut self) -> Self {
        self.dynamic_title = true;
        self
    }

    /// 验证全部不变量并产出不可变描述符。
    ///
    /// # 契约 (What)
    /// - 名称非空且不含 `/`、`?`；
    /// - 位置参数非空、互不重名、不等于保留标题键、不含结构字符（`/`、`?`、`&`、`=`、`{`、`}`）；
    /// - 查询参数在上述约束之外还须与位置参数不相交；
    /// - 任一约束违反返回 [`RouteError::InvalidDescriptor`]，并说明具体原因。
    pub fn build(self) -> Result<DestinationDescriptor, RouteError> {
        let name = self.alias.unwrap_or(self.identifier);

        if name.is_empty() {
            return Err(invalid(&name, "destination name must not be empty"));
        }
        if name.contains('/') || name.contains('?') {
            return Err(invalid(&name, "destination name must not contain `/` or `?`"));
        }

        for (index, param) in self.positional_params.iter().enumerate() {
            if param.is_empty() {
                return Err(invalid(&name, "positional parameter names must not be empty"));
            }
            if param == RESERVED_TITLE_KEY {
                return Err(invalid(
                    &name,
                    "positional parameter collides with the reserved title key",
                ));
            }
            if param.contains(STRUCTURAL_CHARS) {
                return Err(invalid_owned(
                    &name,
                    alloc::format!("positional parameter `{param}` contains a structural character"),
                ));
            }
            if self.positional_params[..index].contains(param) {
                return Err(invalid_owned(
                    &name,
                    alloc::format!("positional parameter `{param}` is declared twice"),
                ));
            }
        }

        for (index, param) in self.query_params.iter().enumerate() {
            if param.is_empty() {
                return Err(invalid(&name, "query parameter names must not be empty"));
            }
            if param == RESERVED_TITLE_KEY {
                return Err(invalid(
                    &name,
                    "query parameter collides with the reserved title key",
                ));
            }
            if param.contains(STRUCTURAL_CHARS) {
                return Err(invalid_owned(
                    &name,
                    alloc::format!("query parameter `{param}` contains a structural character"),
                ));
            }
            if self.query_params[..index].contains(param) {
                return Err(invalid_owned(
                    &name,
                    alloc::format!("query parameter `{param}` is declared twice"),
                ));
            }
            if self.positional_params.contains(param) {
                return Err(invalid_owned(
                    &name,
                    alloc::format!("query parameter `{param}` shadows a positional parameter"),
                ));
            }
        }

        Ok(DestinationDescriptor {
            name,
            positional_params: self.positional_params,
            query_params: self.query_params,
            dynamic_title: self.dynamic_title,
        })
    }
}

fn invalid(name: &str, reason: &'static str) -> RouteError {
    RouteError::InvalidDescriptor {
        name: name.to_string(),
        reason: Cow::Borrowed(reason),
    }
}

fn invalid_owned(name: &str, reason: String) -> RouteError {
    RouteError::InvalidDescriptor {
        name: name.to_string(),
        reason: Cow::Owned(reason),
    }
}

/// 反序列化影子结构：配置来源的描述符经 `TryFrom` 走与 Builder 相同的验证。
#[derive(Debug, Deserialize)]
struct DescriptorConfig {
    name: String,
    #[serde(default)]
    positional_params: Vec<String>,
    #[serde(default)]
    query_params: Vec<String>,
    #[serde(default)]
    dynamic_title: bool,
}

impl TryFrom<DescriptorConfig> for DestinationDescriptor {
    type Error = RouteError;

    fn try_from(config: DescriptorConfig) -> Result<Self, Self::Error> {
        let mut builder = DestinationDescriptor::builder(config.name);
        for param in config.positional_params {
            builder = builder.with_positional_param(param);
        }
        for param in config.query_params {
            builder = builder.with_query_param(param);
        }
        if config.dynamic_title {
            builder = builder.with_dynamic_title();
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;

    #[test]
    fn builder_preserves_declaration_order() {
        // Why: 位置参数按位置匹配、查询参数按声明顺序发射，顺序是契约的一部分。
        let descriptor = DestinationDescriptor::builder("SecondDestination")
            .with_positional_param("param1")
            .with_positional_param("param2")
            .with_query_param("query1")
            .build()
            .unwrap();

        assert_eq!(descriptor.name(), "SecondDestination");
        assert_eq!(descriptor.positional_params(), ["param1", "param2"]);
        assert_eq!(descriptor.query_params(), ["query1"]);
        assert!(!descriptor.dynamic_title());
    }

    #[test]
    fn alias_overrides_declared_identifier() {
        // Why: 名称派生规则允许显式别名覆盖声明标识符。
        let descriptor = DestinationDescriptor::builder("SixthDestination")
            .with_alias("testname")
            .with_positional_param("test")
            .build()
            .unwrap();
        assert_eq!(descriptor.name(), "testname");
    }

    #[test]
    fn name_with_structural_characters_is_rejected() {
        for bad in ["a/b", "a?b", ""] {
            let err = DestinationDescriptor::builder(bad).build().unwrap_err();
            assert_eq!(err.code(), codes::DESCRIPTOR_INVALID, "name: {bad:?}");
        }
    }

    #[test]
    fn duplicate_and_shadowing_params_are_rejected() {
        let duplicated = DestinationDescriptor::builder("Dup")
            .with_positional_param("p")
            .with_positional_param("p")
            .build()
            .unwrap_err();
        assert_eq!(duplicated.code(), codes::DESCRIPTOR_INVALID);

        let shadowed = DestinationDescriptor::builder("Shadow")
            .with_positional_param("p")
            .with_query_param("p")
            .build()
            .unwrap_err();
        assert_eq!(shadowed.code(), codes::DESCRIPTOR_INVALID);
    }

    #[test]
    fn structural_characters_in_param_names_are_rejected() {
        // Why: 含 `&`、`=` 等切分记号的参数名会在查询尾切分时撕裂键值对，值无声丢失；
        // 此类名称必须在构造点拒绝，而不是等到构建/解析阶段悄悄出错。
        for bad in ["a&b", "a=b", "a/b", "a?b", "a{b", "a}b"] {
            let err = DestinationDescriptor::builder("Fifth")
                .with_query_param(bad)
                .build()
                .unwrap_err();
            assert_eq!(err.code(), codes::DESCRIPTOR_INVALID, "query: {bad:?}");

            let err = DestinationDescriptor::builder("Fifth")
                .with_positional_param(bad)
                .build()
                .unwrap_err();
            assert_eq!(err.code(), codes::DESCRIPTOR_INVALID, "positional: {bad:?}");
        }
    }

    #[test]
    fn reserved_title_key_cannot_be_declared() {
        // Why: 保留键属于框架命名空间，与声明参数重名会让标题段与参数段无法区分。
        let err = DestinationDescriptor::builder("Titled")
            .with_positional_param(RESERVED_TITLE_KEY)
            .build()
            .unwrap_err();
        assert_eq!(err.code(), codes::DESCRIPTOR_INVALID);
    }
}
