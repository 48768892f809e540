//! 路由模式合成：从描述符推导宿主导航框架所需的占位符模板。
//!
//! # 教案级说明
//! - **意图 (Why)**：宿主框架在接线阶段需要形如 `Name/{p1}?q={q}` 的模板来声明参数槽位，
//!   模板与路径构建共享同一份描述符，保证两者的占位符顺序永远一致；
//! - **契约 (What)**：纯函数，无失败路径；对给定的不可变描述符输出确定；
//! - **设计 (How)**：按固定次序拼接——名称、可选动态标题段、位置参数段、查询参数尾部，
//!   与 [`PathBuilder`](crate::path::PathBuilder) 的发射顺序逐段对应。

use alloc::string::String;

use crate::descriptor::{DestinationDescriptor, RESERVED_TITLE_KEY};

impl DestinationDescriptor {
    /// 合成该目的地的路由模板。
    ///
    /// 形状规则：
    /// - 以名称开头；
    /// - `dynamic_title` 为真时追加 `/{screenTitle}`；
    /// - 每个位置参数按声明顺序追加 `/{param}`;
    /// - 存在查询参数时追加 `?k1={k1}&k2={k2}…`，无多余的尾部 `&`。
    pub fn route_pattern(&self) -> String {
        let mut pattern = String::from(self.name());

        if self.dynamic_title() {
            pattern.push_str("/{");
            pattern.push_str(RESERVED_TITLE_KEY);
            pattern.push('}');
        }

        for param in self.positional_params() {
            pattern.push_str("/{");
            pattern.push_str(param);
            pattern.push('}');
        }

        if !self.query_params().is_empty() {
            pattern.push('?');
            for (index, param) in self.query_params().iter().enumerate() {
                if index > 0 {
                    pattern.push('&');
                }
                pattern.push_str(param);
                pattern.push_str("={");
                pattern.push_str(param);
                pattern.push('}');
            }
        }

        pattern
    }
}
