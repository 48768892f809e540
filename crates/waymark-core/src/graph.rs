//! 导航图：目的地描述符的注册单元与按图解析器。
//!
//! # 教案级说明
//! - **意图 (Why)**：目的地按图分组注册，图内名称唯一；解析"当前路径"时只需取首段名
//!   做一次精确查表，彻底避开通配符与优先级匹配的歧义空间；
//! - **契约 (What)**：[`GraphDescriptorSet`] 在注册阶段经 Builder 构造一次，此后只读，
//!   可被任意数量的解析调用无锁并发读取；
//! - **设计 (How)**：描述符以声明顺序存入 `Vec`（供宿主接线时按序枚举模板），另以
//!   `BTreeMap` 名称索引保证查找与迭代的确定性；
//! - **取舍 (Trade-offs)**：未匹配名称返回 `None` 而非错误（宽松策略），过期或未知深链
//!   由调用方降级处理；需要严格语义的调用方使用 [`GraphDescriptorSet::resolve_required`]。

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::descriptor::DestinationDescriptor;
use crate::error::RouteError;

/// 取路径首段：到第一个 `/` 或 `?`（以先出现者为准）为止；两者皆无时为整个串。
pub(crate) fn leading_name(raw: &str) -> &str {
    match raw.find(['/', '?']) {
        Some(at) => &raw[..at],
        None => raw,
    }
}

/// 单个导航图的只读描述符表。
///
/// # 教案式说明
/// - **意图 (Why)**：原系统为每个图生成单例对象并经静态方法解析；这里重构为显式构造、
///   按句柄传递的不可变表，消除环境全局状态；
/// - **契约 (What)**：
///   - 图内目的地名称唯一，Builder 在构造点拒绝重名；
///   - [`namespace`](Self::namespace) 暴露由图名派生的小写命名空间记号，供宿主框架
///     把该图挂载为嵌套导航区段；
/// - **取舍 (Trade-offs)**：`Vec` 与索引表各持一份描述符名，换取声明序枚举与
///   O(log n) 查找同时成立。
#[derive(Clone, Debug)]
pub struct GraphDescriptorSet {
    name: String,
    namespace: String,
    destinations: Vec<DestinationDescriptor>,
    index: BTreeMap<String, usize>,
}

impl GraphDescriptorSet {
    /// 以图名开启构建流程。
    pub fn builder(name: impl Into<String>) -> GraphBuilder {
        GraphBuilder {
            name: name.into(),
            destinations: Vec::new(),
        }
    }

    /// 图名。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 由图名派生的小写命名空间记号。
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// 按声明顺序迭代图内全部描述符。
    pub fn destinations(&self) -> core::slice::Iter<'_, DestinationDescriptor> {
        self.destinations.iter()
    }

    /// 按名称精确查找描述符（大小写敏感）。
    pub fn get(&self, name: &str) -> Option<&DestinationDescriptor> {
        self.index.get(name).map(|&at| &self.destinations[at])
    }

    /// 把观察到的路径串解析回产生它的描述符。
    ///
    /// # 契约 (What)
    /// - 名称取路径首段（到第一个 `/` 或 `?` 为止），精确、大小写敏感匹配；
    /// - 宽松策略：未匹配返回 `None`，调用方自行降级，不视为错误。
    pub fn resolve(&self, raw_path: &str) -> Option<&DestinationDescriptor> {
        self.get(leading_name(raw_path))
    }

    /// [`resolve`](Self::resolve) 的严格适配器：未匹配映射为
    /// [`RouteError::UnknownDestination`]。
    pub fn resolve_required(&self, raw_path: &str) -> Result<&DestinationDescriptor, RouteError> {
        self.resolve(raw_path)
            .ok_or_else(|| RouteError::UnknownDestination {
                path: raw_path.to_string(),
            })
    }
}

/// [`GraphDescriptorSet`] 的 Builder，在 `build` 时建立名称索引并拒绝图内重名。
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    name: String,
    destinations: Vec<DestinationDescriptor>,
}

impl GraphBuilder {
    /// 追加一个目的地描述符，顺序即声明顺序。
    pub fn destination(mut self, descriptor: DestinationDescriptor) -> Self {
        self.destinations.push(descriptor);
        self
    }

    /// 建立名称索引并产出只读描述符表。
    ///
    /// # 契约 (What)
    /// - 图名不得为空；
    /// - 图内重名返回 [`RouteError::DuplicateDestination`]；跨图重名不在此处约束，
    ///   由注册表的注册顺序决定优先级。
    pub fn build(self) -> Result<GraphDescriptorSet, RouteError> {
        if self.name.is_empty() {
            return Err(RouteError::InvalidDescriptor {
                name: self.name,
                reason: "graph name must not be empty".into(),
            });
        }

        let mut index = BTreeMap::new();
        for (at, descriptor) in self.destinations.iter().enumerate() {
            if index.insert(descriptor.name().to_string(), at).is_some() {
                return Err(RouteError::DuplicateDestination {
                    graph: self.name,
                    name: descriptor.name().to_string(),
                });
            }
        }

        let namespace = self.name.to_lowercase();

        #[cfg(feature = "std")]
        tracing::debug!(
            graph = %self.name,
            destinations = self.destinations.len(),
            "graph descriptor set built"
        );

        Ok(GraphDescriptorSet {
            name: self.name,
            namespace,
            destinations: self.destinations,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_graph() -> GraphDescriptorSet {
        GraphDescriptorSet::builder("MainGraph")
            .destination(
                DestinationDescriptor::builder("FirstDestination")
                    .build()
                    .unwrap(),
            )
            .destination(
                DestinationDescriptor::builder("SecondDestination")
                    .with_positional_param("param1")
                    .with_positional_param("param2")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn namespace_is_lowercased_graph_name() {
        assert_eq!(main_graph().namespace(), "maingraph");
    }

    #[test]
    fn leading_name_stops_at_first_structural_character() {
        // Why: 名称截断规则是解析的根基——以先出现的 `/` 或 `?` 为界。
        assert_eq!(leading_name("Second/Ciao/2"), "Second");
        assert_eq!(leading_name("Fourth?query2=b"), "Fourth");
        assert_eq!(leading_name("Fourth?x=a/b"), "Fourth");
        assert_eq!(leading_name("First"), "First");
    }

    #[test]
    fn resolve_matches_exactly_and_case_sensitively() {
        let graph = main_graph();
        assert_eq!(
            graph.resolve("SecondDestination/Ciao/2").unwrap().name(),
            "SecondDestination"
        );
        assert!(graph.resolve("seconddestination/Ciao/2").is_none());
        assert!(graph.resolve("Unknown").is_none());
    }

    #[test]
    fn resolve_required_maps_miss_to_unknown_destination() {
        let err = main_graph().resolve_required("Expired/deep/link").unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownDestination {
                path: "Expired/deep/link".into(),
            }
        );
    }

    #[test]
    fn duplicate_names_within_a_graph_are_rejected() {
        let duplicate = DestinationDescriptor::builder("Home").build().unwrap();
        let err = GraphDescriptorSet::builder("MainGraph")
            .destination(duplicate.clone())
            .destination(duplicate)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicateDestination {
                graph: "MainGraph".into(),
                name: "Home".into(),
            }
        );
    }

    #[test]
    fn destinations_iterate_in_declaration_order() {
        // Why: 宿主接线时按声明顺序枚举模板，迭代顺序是契约而非实现细节。
        let graph = main_graph();
        let names: Vec<String> = graph
            .destinations()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, ["FirstDestination", "SecondDestination"]);
    }
}
