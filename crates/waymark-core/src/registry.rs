//! 组合注册表：把多个导航图的解析器聚合为单一解析入口。
//!
//! # 教案级说明
//! - **意图 (Why)**：应用通常由多个独立注册的图组成（主图、特性图等），"当前路径"的
//!   反向解析需要一个统一入口逐图尝试；
//! - **契约 (What)**：注册顺序承载语义——跨图重名合法，首个注册的图在重名冲突时
//!   确定性胜出，每次调用结果一致；
//! - **设计 (How)**：持有非拥有引用的有序序列，图的生命周期由注册方管理；注册阶段
//!   完成后注册表只读，解析调用无锁并发安全；
//! - **取舍 (Trade-offs)**：借用而非 `Arc` 共享，注册表不能脱离图的作用域存活，
//!   换取"注册方拥有图"这一所有权关系在类型上直接可见。

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::descriptor::DestinationDescriptor;
use crate::error::RouteError;
use crate::graph::GraphDescriptorSet;

/// 跨图的组合解析入口，按注册顺序逐图尝试。
#[derive(Clone, Debug, Default)]
pub struct CompositeRegistry<'a> {
    graphs: Vec<&'a GraphDescriptorSet>,
}

impl<'a> CompositeRegistry<'a> {
    /// 创建空注册表。
    pub fn new() -> Self {
        Self { graphs: Vec::new() }
    }

    /// 注册一个图。顺序即优先级：先注册者在跨图重名时胜出。
    pub fn register(&mut self, graph: &'a GraphDescriptorSet) -> &mut Self {
        #[cfg(feature = "std")]
        tracing::debug!(
            graph = %graph.name(),
            precedence = self.graphs.len(),
            "graph registered"
        );
        self.graphs.push(graph);
        self
    }

    /// 已注册的图数量。
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// 注册表是否为空。
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// 按注册顺序迭代已注册的图。
    pub fn graphs(&self) -> core::slice::Iter<'_, &'a GraphDescriptorSet> {
        self.graphs.iter()
    }

    /// 跨全部图解析路径串，返回首个匹配的描述符。
    ///
    /// # 契约 (What)
    /// - 逐图调用 [`GraphDescriptorSet::resolve`]，命中即返回；
    /// - 宽松策略：全部未命中返回 `None`；
    /// - 跨图重名由注册顺序确定性裁决，任意次调用结果相同。
    pub fn resolve(&self, raw_path: &str) -> Option<&'a DestinationDescriptor> {
        self.graphs
            .iter()
            .find_map(|graph| graph.resolve(raw_path))
    }

    /// [`resolve`](Self::resolve) 的严格适配器：未匹配映射为
    /// [`RouteError::UnknownDestination`]。
    pub fn resolve_required(
        &self,
        raw_path: &str,
    ) -> Result<&'a DestinationDescriptor, RouteError> {
        self.resolve(raw_path)
            .ok_or_else(|| RouteError::UnknownDestination {
                path: raw_path.to_string(),
            })
    }
}
