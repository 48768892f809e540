//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义路由核心的稳定错误域：路径构建、百分号解码与描述符注册的所有失败形态都在此归档；
//! - 所有操作均为确定性的纯内存计算，任何错误都代表调用方或配置缺陷，不存在可重试的瞬态故障。
//!
//! ## 设计要求（What）
//! - 每个变体携带定位问题所需的最小上下文（目的地名、参数名、原始片段）；
//! - [`RouteError::code`] 暴露 `<域>.<语义>` 约定的稳定错误码，供日志与指标做机读聚合；
//! - 启用 `std` 特性时派生 [`thiserror::Error`]，`no_std` 轨道回退到手写 `Display`。

#[cfg(not(feature = "std"))]
use core::fmt;

use alloc::borrow::Cow;
use alloc::string::String;

#[cfg(feature = "std")]
use thiserror::Error;

/// 稳定错误码表，遵循 `<域>.<语义>` 命名约定。
///
/// # 教案式说明
/// - **意图 (Why)**：错误消息面向排障人员、允许演进，错误码面向告警与自动化治理、必须稳定；
/// - **契约 (What)**：常量值一经发布不得变更语义；新增错误需同步补充对应常量；
/// - **取舍 (Trade-offs)**：以 `&'static str` 承载，避免枚举序号在版本间漂移。
pub mod codes {
    /// 必填的位置参数或动态标题值缺失。
    pub const PATH_MISSING_ARGUMENT: &str = "path.missing_argument";
    /// 提供的位置参数多于声明数量，或向非动态标题目的地提供了标题。
    pub const PATH_UNEXPECTED_ARGUMENT: &str = "path.unexpected_argument";
    /// 百分号序列畸形或解码结果不是合法 UTF-8。
    pub const PATH_ENCODING_MISMATCH: &str = "path.encoding_mismatch";
    /// 路径的首段名称在注册表中无匹配目的地。
    pub const ROUTE_UNKNOWN_DESTINATION: &str = "route.unknown_destination";
    /// 描述符构造时违反命名或参数不变量。
    pub const DESCRIPTOR_INVALID: &str = "descriptor.invalid";
    /// 同一导航图内出现重名目的地。
    pub const DESCRIPTOR_DUPLICATE: &str = "descriptor.duplicate";
}

/// 路由核心错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：聚合路径构建、解码与注册三条关键路径的异常，让调用方通过 `?` 直接传播；
/// - **契约 (What)**：
///   - 所有变体均为 `Send + Sync + 'static`，可安全跨线程传播；
///   - 错误永远同步返回给调用方，不存在静默降级或默认值兜底；
///   - [`code`](Self::code) 返回的稳定错误码与变体一一对应。
/// - **取舍 (Trade-offs)**：使用 `String` 保存上下文，牺牲少量堆分配换取可读的排障信息。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RouteError {
    /// 构建路径时缺少必填参数：声明的位置参数或动态标题值未提供。
    ///
    /// - **意图 (Why)**：位置参数按声明逐一匹配，缺一不可；缺失属于调用方编程缺陷，必须立即暴露。
    /// - **契约 (What)**：`destination` 为目的地名；`name` 为首个未填充的参数名
    ///   （动态标题缺失时为保留标题键）。
    #[cfg_attr(
        feature = "std",
        error("missing required argument `{name}` for destination `{destination}`")
    )]
    MissingArgument {
        /// 目的地名。
        destination: String,
        /// 首个未填充的参数名；动态标题缺失时为保留标题键。
        name: String,
    },

    /// 提供的参数多于声明：多余的位置值或对非动态标题目的地提供了标题。
    ///
    /// - **意图 (Why)**：多余参数意味着调用方与描述符声明脱节，静默丢弃会掩盖缺陷。
    /// - **契约 (What)**：`expected` 为声明的位置参数数量，`supplied` 为实际提供的值数量，
    ///   向非动态标题目的地提供的标题计入其中；恒有 `supplied > expected`。
    #[cfg_attr(
        feature = "std",
        error(
            "destination `{destination}` declares {expected} positional parameter(s) but {supplied} value(s) were supplied"
        )
    )]
    UnexpectedArgument {
        /// 目的地名。
        destination: String,
        /// 声明的位置参数数量。
        expected: usize,
        /// 实际提供的值数量，越界的标题计入其中。
        supplied: usize,
    },

    /// 观察到的路径首段在注册表中没有匹配的目的地。
    ///
    /// - **意图 (Why)**：仅由严格适配器 `resolve_required` 产生；宽松策略下返回 `None` 而非本错误。
    /// - **契约 (What)**：`path` 为未能解析的完整原始路径。
    #[cfg_attr(feature = "std", error("no destination matches path `{path}`"))]
    UnknownDestination {
        /// 未能解析的完整原始路径。
        path: String,
    },

    /// 百分号解码失败：序列畸形或解码结果不是合法 UTF-8。
    ///
    /// - **意图 (Why)**：畸形编码必须显式上报，禁止截断或透传脏数据污染业务层。
    /// - **契约 (What)**：`component` 为触发失败的原始片段。
    #[cfg_attr(
        feature = "std",
        error("malformed percent-encoded component `{component}`")
    )]
    EncodingMismatch {
        /// 触发解码失败的原始片段。
        component: String,
    },

    /// 描述符构造违反不变量：名称含保留字符、参数重名或与保留标题键冲突等。
    ///
    /// - **意图 (Why)**：描述符注册后终身不可变，所有约束必须在构造点一次性验证。
    /// - **契约 (What)**：`name` 为目的地名；`reason` 为违反的具体约束描述。
    #[cfg_attr(feature = "std", error("invalid descriptor `{name}`: {reason}"))]
    InvalidDescriptor {
        /// 目的地名。
        name: String,
        /// 违反的具体约束描述。
        reason: Cow<'static, str>,
    },

    /// 同一导航图内的目的地重名。跨图重名合法，由注册顺序决定优先级。
    #[cfg_attr(
        feature = "std",
        error("duplicate destination name `{name}` in graph `{graph}`")
    )]
    DuplicateDestination {
        /// 导航图名。
        graph: String,
        /// 重名的目的地名。
        name: String,
    },
}

impl RouteError {
    /// 返回与变体对应的稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            RouteError::MissingArgument { .. } => codes::PATH_MISSING_ARGUMENT,
            RouteError::UnexpectedArgument { .. } => codes::PATH_UNEXPECTED_ARGUMENT,
            RouteError::UnknownDestination { .. } => codes::ROUTE_UNKNOWN_DESTINATION,
            RouteError::EncodingMismatch { .. } => codes::PATH_ENCODING_MISMATCH,
            RouteError::InvalidDescriptor { .. } => codes::DESCRIPTOR_INVALID,
            RouteError::DuplicateDestination { .. } => codes::DESCRIPTOR_DUPLICATE,
        }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(unused_imports)]
        use RouteError::*;

        match self {
            MissingArgument { destination, name } => write!(
                f,
                "missing required argument `{name}` for destination `{destination}`"
            ),
            UnexpectedArgument {
                destination,
                expected,
                supplied,
            } => write!(
                f,
                "destination `{destination}` declares {expected} positional parameter(s) but {supplied} value(s) were supplied"
            ),
            UnknownDestination { path } => write!(f, "no destination matches path `{path}`"),
            EncodingMismatch { component } => {
                write!(f, "malformed percent-encoded component `{component}`")
            }
            InvalidDescriptor { name, reason } => {
                write!(f, "invalid descriptor `{name}`: {reason}")
            }
            DuplicateDestination { graph, name } => {
                write!(f, "duplicate destination name `{name}` in graph `{graph}`")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn codes_are_stable_per_variant() {
        // Why: 错误码是对外契约，变体与码值的映射一旦漂移会破坏下游告警规则。
        let missing = RouteError::MissingArgument {
            destination: "Second".to_string(),
            name: "param1".to_string(),
        };
        assert_eq!(missing.code(), codes::PATH_MISSING_ARGUMENT);

        let unknown = RouteError::UnknownDestination {
            path: "Nowhere/1".to_string(),
        };
        assert_eq!(unknown.code(), codes::ROUTE_UNKNOWN_DESTINATION);

        let mismatch = RouteError::EncodingMismatch {
            component: "%zz".to_string(),
        };
        assert_eq!(mismatch.code(), codes::PATH_ENCODING_MISMATCH);
    }

    #[test]
    fn display_names_the_offending_argument() {
        // Why: 排障人员依赖消息中的参数名定位缺陷，消息必须包含 `name` 与目的地。
        let err = RouteError::MissingArgument {
            destination: "SecondDestination".to_string(),
            name: "param2".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("param2"));
        assert!(rendered.contains("SecondDestination"));
    }
}
